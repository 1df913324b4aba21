//! Locale utilities: collation, list joining, time formatting and messages

pub mod collator;
pub mod list_format;
pub mod strings;
pub mod time_format;

pub use collator::Collator;
pub use list_format::ListFormatter;
pub use strings::SummaryStrings;
pub use time_format::TimeFormat;

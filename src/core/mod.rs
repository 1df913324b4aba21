//! Core types shared by the screen
//!
//! - `ScreenError` - Error types
//! - `Observable` - Value holder with change notification
//! - `Clock` - Source of the current time

pub mod clock;
pub mod error;
pub mod observable;

pub use clock::{Clock, SystemClock};
pub use error::{ScreenError, ScreenResult};
pub use observable::{Observable, Observer, SubscriptionId};

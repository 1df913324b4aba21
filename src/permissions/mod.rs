//! Permission group classification
//!
//! This module turns raw screen input into per-group display facts:
//! - **group**: grant categories, subtitle kinds, group descriptors
//! - **usage**: last-access records extracted from usage history
//! - **recency**: today / yesterday / recent / not recent buckets
//! - **summary**: the summary line chosen from subtitle kind × recency
//!
//! ## Example
//!
//! ```rust,ignore
//! use app_permission_groups::permissions::{classify, format_summary, SubtitleKind};
//!
//! let recency = classify(&now, records.last_access(CAMERA), true);
//! let line = format_summary(&strings, SubtitleKind::Default, recency, "3:15 PM");
//! ```

mod group;
mod recency;
mod summary;
mod usage;

pub use group::{
    Category, GroupMap, PermissionGroupDescriptor, SubtitleKind, CAMERA, LOCATION, MICROPHONE,
    SENSOR_GROUPS,
};
pub use recency::{classify, local_midnight_millis, RecencyClass};
pub use summary::{format_summary, summary_template};
pub use usage::{lookback_begin_millis, AppPermissionUsage, GroupUsage, UsageRecords};

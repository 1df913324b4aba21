//! The app permissions screen
//!
//! - **model**: declarative sections and entries returned to the renderer
//! - **builder**: per-category entry lists (merge, filter, overflow, placeholder)
//! - **sort**: collated ordering with the aggregate entry last
//! - **auto_revoke**: the hibernation switch and its summary
//! - **actions**: outbound host actions and screen arguments
//! - **telemetry**: first-render view logging
//! - **controller**: state owner reacting to source changes
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut screen = AppPermissionGroupsScreen::new(args, ScreenConfig::new(), host);
//! let model = screen.on_groups_changed(Some(groups))?;
//! for section in &model.sections {
//!     render(section);
//! }
//! ```

pub mod actions;
pub mod auto_revoke;
pub mod builder;
pub mod controller;
pub mod model;
pub mod sort;
pub mod telemetry;

pub use actions::{MenuItem, ScreenActions, ScreenArgs};
pub use auto_revoke::{build_auto_revoke, HibernationSettingState};
pub use builder::CategoryListBuilder;
pub use controller::AppPermissionGroupsScreen;
pub use model::{AutoRevokeSection, Entry, EntryAction, EntryKind, IconRef, ScreenModel, Section};
pub use sort::{compare_entries, sort_entries};
pub use telemetry::{view_log_entries, ViewLogCategory, ViewLogEntry};

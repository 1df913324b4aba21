pub mod config;
pub mod core;
pub mod locale;
pub mod logging;
pub mod permissions;
pub mod runtime;
pub mod screen;

pub use config::ScreenConfig;
pub use core::{ScreenError, ScreenResult};
pub use screen::{AppPermissionGroupsScreen, ScreenActions, ScreenArgs, ScreenModel};

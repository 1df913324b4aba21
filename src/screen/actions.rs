//! Outbound actions: everything the screen asks its host to do

use serde::{Deserialize, Serialize};

use crate::permissions::Category;

/// Identifies the app, user and session a screen is shown for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenArgs {
    /// Package whose permissions are shown
    pub package_name: String,
    /// Platform user the package belongs to
    pub user_id: u32,
    /// Settings session the screen was opened from
    pub session_id: i64,
    /// System groups (true) or app-defined groups (false)
    pub is_system_screen: bool,
    /// The package is a location provider with its own permission-usage viewer
    #[serde(default)]
    pub shows_usage_info: bool,
}

impl ScreenArgs {
    /// Arguments for the system permissions screen
    pub fn new(package_name: impl Into<String>, user_id: u32, session_id: i64) -> Self {
        Self {
            package_name: package_name.into(),
            user_id,
            session_id,
            is_system_screen: true,
            shows_usage_info: false,
        }
    }

    /// Mark the package as exposing a permission-usage viewer
    pub fn with_usage_info(mut self, shows_usage_info: bool) -> Self {
        self.shows_usage_info = shows_usage_info;
        self
    }

    /// Same app, user and session, on the extra (app-defined) permissions screen
    pub fn for_extra_permissions(&self) -> Self {
        Self {
            is_system_screen: false,
            ..self.clone()
        }
    }
}

/// Options menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuItem {
    /// Full list of individual permissions
    AllPermissions,
    /// Help page for this screen
    Help,
}

/// Host-side effects requested by the screen
///
/// All methods are called on the thread driving the screen.
pub trait ScreenActions {
    /// Open the detail page of one permission group
    fn open_permission_group(&self, args: &ScreenArgs, group_name: &str, category: Category);

    /// Open the package's own usage view for one permission group
    fn view_permission_usage(&self, args: &ScreenArgs, group_name: &str);

    /// Open the screen listing app-defined permission groups
    fn show_extra_permissions(&self, args: &ScreenArgs);

    /// Open the list of all individual permissions
    fn show_all_permissions(&self, args: &ScreenArgs);

    /// Open the help page
    fn show_help(&self, args: &ScreenArgs);

    /// Change the per-app auto-revoke setting
    fn set_auto_revoke(&self, args: &ScreenArgs, enabled: bool);

    /// Show a transient error message
    fn show_error(&self, message: &str);

    /// Close the screen
    fn navigate_back(&self);

    /// Record that an entry was shown (first render only)
    fn record_view(&self, entry: &super::telemetry::ViewLogEntry) {
        let _ = entry;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_extra_permissions_keeps_identity() {
        let args = ScreenArgs::new("com.example.app", 10, 42);
        let extra = args.for_extra_permissions();

        assert!(args.is_system_screen);
        assert!(!extra.is_system_screen);
        assert_eq!(extra.package_name, "com.example.app");
        assert_eq!(extra.user_id, 10);
        assert_eq!(extra.session_id, 42);
    }
}

//! Permission group descriptors and grant categories

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Location permission group
pub const LOCATION: &str = "android.permission-group.LOCATION";
/// Camera permission group
pub const CAMERA: &str = "android.permission-group.CAMERA";
/// Microphone permission group
pub const MICROPHONE: &str = "android.permission-group.MICROPHONE";

/// Groups whose usage is reported with today/yesterday precision
pub const SENSOR_GROUPS: [&str; 3] = [LOCATION, CAMERA, MICROPHONE];

/// Grant state a permission group is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Granted at all times
    Allowed,
    /// Granted only while the app is in the foreground
    AllowedForeground,
    /// Asked every time
    Ask,
    /// Not granted
    Denied,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 4] = [
        Category::Allowed,
        Category::AllowedForeground,
        Category::Ask,
        Category::Denied,
    ];

    /// Stable key used for sections and logging
    pub fn category_name(&self) -> &'static str {
        match self {
            Category::Allowed => "allowed",
            Category::AllowedForeground => "allowed_foreground",
            Category::Ask => "ask",
            Category::Denied => "denied",
        }
    }

    /// The section this category renders into
    ///
    /// Allowed-foreground has no section of its own.
    pub fn display_category(&self) -> Category {
        match self {
            Category::AllowedForeground => Category::Allowed,
            other => *other,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.category_name())
    }
}

/// Qualifier shown next to a group's usage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubtitleKind {
    /// No qualifier
    #[default]
    Default,
    /// Only while the app is in use
    ForegroundOnly,
    /// Storage access limited to media
    MediaOnly,
    /// Full storage access
    AllFiles,
}

/// One permission group as the screen sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionGroupDescriptor {
    /// Platform group name, e.g. `android.permission-group.CAMERA`
    pub group_name: String,

    /// Qualifier for the summary line
    #[serde(default)]
    pub subtitle: SubtitleKind,

    /// Platform-defined group (rendered on the system screen)
    #[serde(default = "default_is_system")]
    pub is_system: bool,
}

fn default_is_system() -> bool {
    true
}

impl PermissionGroupDescriptor {
    /// Create a system group with the default subtitle
    pub fn new(group_name: impl Into<String>) -> Self {
        Self {
            group_name: group_name.into(),
            subtitle: SubtitleKind::Default,
            is_system: true,
        }
    }

    /// Set the subtitle kind
    pub fn with_subtitle(mut self, subtitle: SubtitleKind) -> Self {
        self.subtitle = subtitle;
        self
    }

    /// Mark as an app-defined (non-system) group
    pub fn custom(mut self) -> Self {
        self.is_system = false;
        self
    }

    /// Human-readable title derived from the group name
    ///
    /// `android.permission-group.NEARBY_DEVICES` becomes "Nearby devices".
    /// Names without the platform prefix are shown as-is.
    pub fn label(&self) -> String {
        let Some(suffix) = self.group_name.strip_prefix("android.permission-group.") else {
            return self.group_name.clone();
        };

        let words = suffix.to_lowercase().replace('_', " ");
        let mut chars = words.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Groups keyed by the category they are listed under
pub type GroupMap = BTreeMap<Category, Vec<PermissionGroupDescriptor>>;

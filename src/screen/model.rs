//! Declarative screen content
//!
//! The screen is rebuilt as a whole on every change; a renderer diffs it.

use serde::{Deserialize, Serialize};

use super::actions::ScreenArgs;
use crate::permissions::{Category, SubtitleKind};

/// Icon shown next to an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconRef {
    /// The icon of a permission group
    Group(String),
    /// Table-of-contents icon of the aggregate entry
    AdditionalPermissions,
    /// Info outline icon
    Info,
}

/// What happens when an entry is tapped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryAction {
    /// Not selectable
    None,
    /// Open the group detail page
    OpenGroup {
        /// Platform group name
        group_name: String,
        /// Category the group was listed under
        category: Category,
    },
    /// Open the extra permissions screen
    ShowExtraPermissions(ScreenArgs),
    /// Open the package's own usage view for a group
    ViewPermissionUsage {
        /// Platform group name
        group_name: String,
    },
}

/// Kind of entry, with the facts each kind carries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    /// A permission group
    Group {
        /// Platform group name
        group_name: String,
        /// Category the group was listed under (before merging)
        source: Category,
        /// Subtitle qualifier of the group
        subtitle: SubtitleKind,
    },
    /// Aggregate entry for groups shown on the other screen
    AdditionalPermissions {
        /// Number of groups it stands for
        count: usize,
    },
    /// Empty-section message
    Placeholder,
}

/// One row of a section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique key within the screen
    pub key: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconRef>,
    pub action: EntryAction,
    /// Trailing icon with its own action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_icon: Option<IconRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_action: Option<EntryAction>,
    pub kind: EntryKind,
}

impl Entry {
    /// Whether this is the aggregate "additional permissions" entry
    pub fn is_additional(&self) -> bool {
        matches!(self.kind, EntryKind::AdditionalPermissions { .. })
    }

    /// Whether this is an empty-section message
    pub fn is_placeholder(&self) -> bool {
        matches!(self.kind, EntryKind::Placeholder)
    }

    /// Whether tapping does anything
    pub fn is_selectable(&self) -> bool {
        !matches!(self.action, EntryAction::None)
    }

    /// Group name for group entries
    pub fn group_name(&self) -> Option<&str> {
        match &self.kind {
            EntryKind::Group { group_name, .. } => Some(group_name),
            _ => None,
        }
    }
}

/// A titled list of entries for one grant category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub category: Category,
    pub entries: Vec<Entry>,
}

impl Section {
    /// Find an entry by key
    pub fn find(&self, key: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.key == key)
    }
}

/// The auto-revoke (hibernation) switch and its explanation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoRevokeSection {
    /// Switch label
    pub label: String,
    /// Switch position
    pub checked: bool,
    /// Whether the user may flip the switch
    pub enabled: bool,
    /// Explanation below the switch
    pub summary: String,
}

/// Everything the screen shows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenModel {
    /// Visible grant sections in display order
    pub sections: Vec<Section>,
    /// Auto-revoke section, `None` when hidden
    pub auto_revoke: Option<AutoRevokeSection>,
}

impl ScreenModel {
    /// Visible section for a category
    pub fn section(&self, category: Category) -> Option<&Section> {
        self.sections.iter().find(|s| s.category == category)
    }
}

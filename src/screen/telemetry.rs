//! View logging for the first render of a screen

use serde::{Deserialize, Serialize};

use super::actions::ScreenArgs;
use super::model::{EntryKind, ScreenModel};
use crate::permissions::{Category, SubtitleKind};

/// Category reported for a viewed entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewLogCategory {
    Allowed,
    AllowedForeground,
    Denied,
}

/// One viewed permission group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewLogEntry {
    pub session_id: i64,
    /// Shared by all entries of one render
    pub view_id: i64,
    pub package_name: String,
    pub group_name: String,
    pub category: ViewLogCategory,
}

/// A fresh random view id
pub fn new_view_id() -> i64 {
    let (high, _) = uuid::Uuid::new_v4().as_u64_pair();
    high as i64
}

/// Entries to log for a rendered screen
///
/// Only the Allowed and Denied sections are logged; placeholders and the
/// aggregate entry are skipped.
pub fn view_log_entries(model: &ScreenModel, args: &ScreenArgs, view_id: i64) -> Vec<ViewLogEntry> {
    let mut logged = Vec::new();

    for category in [Category::Allowed, Category::Denied] {
        let Some(section) = model.section(category) else {
            continue;
        };

        for entry in &section.entries {
            let Some(group_name) = entry.group_name() else {
                continue;
            };
            let subtitle = match &entry.kind {
                EntryKind::Group { subtitle, .. } => *subtitle,
                _ => SubtitleKind::Default,
            };

            let category = match (category, subtitle) {
                (Category::Denied, _) => ViewLogCategory::Denied,
                (_, SubtitleKind::ForegroundOnly) => ViewLogCategory::AllowedForeground,
                _ => ViewLogCategory::Allowed,
            };

            logged.push(ViewLogEntry {
                session_id: args.session_id,
                view_id,
                package_name: args.package_name.clone(),
                group_name: group_name.to_string(),
                category,
            });
        }
    }

    logged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScreenConfig;
    use crate::permissions::{GroupMap, PermissionGroupDescriptor, UsageRecords, CAMERA, LOCATION};
    use crate::screen::builder::CategoryListBuilder;
    use chrono::Utc;

    #[test]
    fn test_entries_skip_placeholders_and_ask() {
        let config = ScreenConfig::new();
        let args = ScreenArgs::new("com.example.app", 0, 99);

        let mut groups = GroupMap::new();
        groups.insert(
            Category::AllowedForeground,
            vec![PermissionGroupDescriptor::new(LOCATION).with_subtitle(SubtitleKind::ForegroundOnly)],
        );
        groups.insert(Category::Ask, vec![PermissionGroupDescriptor::new(CAMERA)]);
        groups.insert(Category::Denied, vec![]);

        let model = ScreenModel {
            sections: CategoryListBuilder::new(&config, &args).build(
                &groups,
                &UsageRecords::new(),
                Utc::now(),
            ),
            auto_revoke: None,
        };

        let entries = view_log_entries(&model, &args, 5);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].group_name, LOCATION);
        assert_eq!(entries[0].category, ViewLogCategory::AllowedForeground);
        assert_eq!(entries[0].session_id, 99);
        assert_eq!(entries[0].view_id, 5);
    }
}

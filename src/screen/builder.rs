//! Section building: classify, summarize, filter and sort each category

use std::collections::HashSet;

use chrono::{DateTime, FixedOffset, Utc};

use super::actions::ScreenArgs;
use super::model::{Entry, EntryAction, EntryKind, IconRef, Section};
use super::sort::sort_entries;
use crate::config::ScreenConfig;
use crate::locale::Collator;
use crate::permissions::{
    classify, format_summary, Category, GroupMap, PermissionGroupDescriptor, UsageRecords,
};

/// Sections in display order; Allowed-foreground renders inside Allowed
const DISPLAY_ORDER: [Category; 3] = [Category::Allowed, Category::Ask, Category::Denied];

/// Builds the grant sections of one screen
#[derive(Debug)]
pub struct CategoryListBuilder<'a> {
    config: &'a ScreenConfig,
    args: &'a ScreenArgs,
    collator: Collator,
}

impl<'a> CategoryListBuilder<'a> {
    /// Create a builder for the given screen
    pub fn new(config: &'a ScreenConfig, args: &'a ScreenArgs) -> Self {
        Self {
            config,
            args,
            collator: Collator::new(),
        }
    }

    /// Build every visible section
    ///
    /// Categories missing from `groups` are treated as empty.
    pub fn build(&self, groups: &GroupMap, usage: &UsageRecords, now: DateTime<Utc>) -> Vec<Section> {
        let now = now.with_timezone(&self.config.time_zone());
        let mut seen = HashSet::new();
        let mut sections = Vec::with_capacity(DISPLAY_ORDER.len());

        for category in DISPLAY_ORDER {
            let sources: Vec<(Category, &PermissionGroupDescriptor)> = Category::ALL
                .iter()
                .filter(|c| c.display_category() == category)
                .flat_map(|c| {
                    groups
                        .get(c)
                        .into_iter()
                        .flatten()
                        .map(move |d| (*c, d))
                })
                .collect();

            if category == Category::Ask && sources.is_empty() {
                tracing::debug!("Hiding empty ask section");
                continue;
            }

            let mut entries = Vec::new();
            let mut extra_count = 0usize;

            for (source, descriptor) in sources {
                if !seen.insert(descriptor.group_name.as_str()) {
                    tracing::warn!(
                        "Group {} listed under more than one category, keeping the first",
                        descriptor.group_name
                    );
                    continue;
                }

                if descriptor.is_system == self.args.is_system_screen {
                    entries.push(self.group_entry(descriptor, source, usage, &now));
                } else if !descriptor.is_system {
                    extra_count += 1;
                }
            }

            if extra_count > 0 {
                entries.push(self.additional_entry(category, extra_count));
            }

            if entries.is_empty() {
                entries.push(self.placeholder_entry(category));
            }

            sort_entries(&self.collator, &mut entries);
            sections.push(Section { category, entries });
        }

        sections
    }

    /// Entry for a single permission group
    pub fn group_entry(
        &self,
        descriptor: &PermissionGroupDescriptor,
        source: Category,
        usage: &UsageRecords,
        now: &DateTime<FixedOffset>,
    ) -> Entry {
        let group_name = &descriptor.group_name;
        let last_access = usage.last_access(group_name);
        let recency = classify(now, last_access, self.config.is_sensor_group(group_name));

        let time = match last_access {
            Some(millis) if recency.is_recent() => self
                .config
                .time_format
                .format_millis(millis, &self.config.time_zone()),
            _ => String::new(),
        };

        let summary = format_summary(&self.config.strings, descriptor.subtitle, recency, &time);

        let (secondary_icon, secondary_action) = if self.args.shows_usage_info {
            (
                Some(IconRef::Info),
                Some(EntryAction::ViewPermissionUsage {
                    group_name: group_name.clone(),
                }),
            )
        } else {
            (None, None)
        };

        Entry {
            key: group_name.clone(),
            title: descriptor.label(),
            summary,
            icon: Some(IconRef::Group(group_name.clone())),
            action: EntryAction::OpenGroup {
                group_name: group_name.clone(),
                category: source,
            },
            secondary_icon,
            secondary_action,
            kind: EntryKind::Group {
                group_name: group_name.clone(),
                source,
                subtitle: descriptor.subtitle,
            },
        }
    }

    fn additional_entry(&self, category: Category, count: usize) -> Entry {
        let strings = &self.config.strings;
        Entry {
            key: format!("{}{}", strings.additional_permissions, category.category_name()),
            title: strings.additional_permissions.clone(),
            summary: Some(strings.additional_permissions_more(count)),
            icon: Some(IconRef::AdditionalPermissions),
            action: EntryAction::ShowExtraPermissions(self.args.for_extra_permissions()),
            secondary_icon: None,
            secondary_action: None,
            kind: EntryKind::AdditionalPermissions { count },
        }
    }

    fn placeholder_entry(&self, category: Category) -> Entry {
        let message = self
            .config
            .strings
            .empty_message(category == Category::Denied)
            .to_string();
        Entry {
            key: message.clone(),
            title: message,
            summary: None,
            icon: None,
            action: EntryAction::None,
            secondary_icon: None,
            secondary_action: None,
            kind: EntryKind::Placeholder,
        }
    }
}

//! User-visible message table

use serde::{Deserialize, Serialize};

/// Every string the screen renders, with English defaults
///
/// Templates use `{time}`, `{count}` and `{permissions}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryStrings {
    pub access_today: String,
    pub access_yesterday: String,
    pub access_content_provider: String,

    pub access_today_foreground: String,
    pub access_yesterday_foreground: String,
    pub access_content_provider_foreground: String,
    pub subtitle_foreground: String,

    pub access_today_media: String,
    pub access_yesterday_media: String,
    pub access_content_provider_media: String,
    pub subtitle_media: String,

    pub access_today_all_files: String,
    pub access_yesterday_all_files: String,
    pub access_content_provider_all_files: String,
    pub subtitle_all_files: String,

    /// Title of the aggregate entry for groups shown on the other screen
    pub additional_permissions: String,
    /// Summary of the aggregate entry when it stands for one group
    pub additional_permissions_one: String,
    /// Summary of the aggregate entry for several groups
    pub additional_permissions_other: String,

    pub no_permissions_allowed: String,
    pub no_permissions_denied: String,

    pub auto_revoke_label: String,
    pub auto_revoke_summary: String,
    pub auto_revoke_summary_with_permissions: String,

    pub app_not_found: String,
    pub all_permissions: String,
    pub help: String,

    /// Joins the last two items of a list ("A and B")
    pub list_pair_separator: String,
    /// Joins all but the last two items ("A, B")
    pub list_separator: String,
    /// Joins the final item of a list of three or more ("B, and C")
    pub list_final_separator: String,
}

impl Default for SummaryStrings {
    fn default() -> Self {
        Self {
            access_today: "Used at {time}".into(),
            access_yesterday: "Used yesterday at {time}".into(),
            access_content_provider: "Used in past 24 hours".into(),

            access_today_foreground: "Used at {time} • Only while app is in use".into(),
            access_yesterday_foreground: "Used yesterday at {time} • Only while app is in use"
                .into(),
            access_content_provider_foreground: "Used in past 24 hours • Only while app is in use"
                .into(),
            subtitle_foreground: "Only while app is in use".into(),

            access_today_media: "Used at {time} • Media only".into(),
            access_yesterday_media: "Used yesterday at {time} • Media only".into(),
            access_content_provider_media: "Used in past 24 hours • Media only".into(),
            subtitle_media: "Media only".into(),

            access_today_all_files: "Used at {time} • All Files".into(),
            access_yesterday_all_files: "Used yesterday at {time} • All Files".into(),
            access_content_provider_all_files: "Used in past 24 hours • All Files".into(),
            subtitle_all_files: "All Files".into(),

            additional_permissions: "Additional permissions".into(),
            additional_permissions_one: "{count} more".into(),
            additional_permissions_other: "{count} more".into(),

            no_permissions_allowed: "No permissions allowed".into(),
            no_permissions_denied: "No permissions denied".into(),

            auto_revoke_label: "Remove permissions if app isn’t used".into(),
            auto_revoke_summary: "To protect your data, permissions for this app will be \
                                  removed if the app is unused for a few months."
                .into(),
            auto_revoke_summary_with_permissions: "To protect your data, if the app is unused \
                                                   for a few months, the following permissions \
                                                   will be removed: {permissions}"
                .into(),

            app_not_found: "App not found".into(),
            all_permissions: "All permissions".into(),
            help: "Help".into(),

            list_pair_separator: " and ".into(),
            list_separator: ", ".into(),
            list_final_separator: ", and ".into(),
        }
    }
}

impl SummaryStrings {
    /// Summary for the aggregate "additional permissions" entry
    pub fn additional_permissions_more(&self, count: usize) -> String {
        let template = if count == 1 {
            &self.additional_permissions_one
        } else {
            &self.additional_permissions_other
        };
        template.replace("{count}", &count.to_string())
    }

    /// Placeholder text for an empty section
    pub fn empty_message(&self, denied: bool) -> &str {
        if denied {
            &self.no_permissions_denied
        } else {
            &self.no_permissions_allowed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let strings: SummaryStrings =
            serde_json::from_str(r#"{"access_today": "Heute um {time}"}"#).unwrap();
        assert_eq!(strings.access_today, "Heute um {time}");
        assert_eq!(strings.access_yesterday, "Used yesterday at {time}");
    }

    #[test]
    fn test_additional_permissions_more() {
        let strings = SummaryStrings {
            additional_permissions_one: "{count} other".into(),
            ..SummaryStrings::default()
        };
        assert_eq!(strings.additional_permissions_more(1), "1 other");
        assert_eq!(strings.additional_permissions_more(3), "3 more");
    }
}

//! Auto-revoke (hibernation) section

use serde::{Deserialize, Serialize};

use super::model::{AutoRevokeSection, Section};
use crate::locale::{Collator, ListFormatter, SummaryStrings};

/// Hibernation state of one app as reported by the platform
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HibernationSettingState {
    /// Feature enabled on the device
    pub enabled_global: bool,
    /// Feature enabled for this app
    pub enabled_for_app: bool,
    /// Whether the user may change the per-app setting
    pub allow_user_toggle: bool,
    /// Groups that would be revoked
    #[serde(default)]
    pub revocable_group_names: Vec<String>,
}

/// Build the auto-revoke section, `None` when the feature is off globally
///
/// Revocable groups are named by their titles in the rendered Allowed section;
/// groups not shown there are skipped.
pub fn build_auto_revoke(
    state: &HibernationSettingState,
    allowed: Option<&Section>,
    strings: &SummaryStrings,
    collator: &Collator,
) -> Option<AutoRevokeSection> {
    if !state.enabled_global {
        return None;
    }

    let mut labels: Vec<String> = state
        .revocable_group_names
        .iter()
        .filter_map(|name| allowed.and_then(|s| s.find(name)))
        .map(|entry| entry.title.clone())
        .collect();
    collator.sort(&mut labels);

    let summary = if labels.is_empty() {
        strings.auto_revoke_summary.clone()
    } else {
        let list = ListFormatter::from_strings(strings).format(&labels);
        strings
            .auto_revoke_summary_with_permissions
            .replace("{permissions}", &list)
    };

    Some(AutoRevokeSection {
        label: strings.auto_revoke_label.clone(),
        checked: state.enabled_for_app,
        enabled: state.allow_user_toggle,
        summary,
    })
}

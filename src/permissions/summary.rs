//! Summary line selection: subtitle kind × recency class

use super::group::SubtitleKind;
use super::recency::RecencyClass;
use crate::locale::SummaryStrings;

/// Pick the message template for a group
///
/// `None` means the entry has no summary line (default subtitle, no recent use).
pub fn summary_template(
    strings: &SummaryStrings,
    subtitle: SubtitleKind,
    recency: RecencyClass,
) -> Option<&str> {
    use RecencyClass::*;
    use SubtitleKind::*;

    let template = match (subtitle, recency) {
        (Default, SensorToday) => &strings.access_today,
        (Default, SensorYesterday) => &strings.access_yesterday,
        (Default, ContentProviderRecent) => &strings.access_content_provider,
        (Default, NotRecent) => return None,

        (ForegroundOnly, SensorToday) => &strings.access_today_foreground,
        (ForegroundOnly, SensorYesterday) => &strings.access_yesterday_foreground,
        (ForegroundOnly, ContentProviderRecent) => &strings.access_content_provider_foreground,
        (ForegroundOnly, NotRecent) => &strings.subtitle_foreground,

        (MediaOnly, SensorToday) => &strings.access_today_media,
        (MediaOnly, SensorYesterday) => &strings.access_yesterday_media,
        (MediaOnly, ContentProviderRecent) => &strings.access_content_provider_media,
        (MediaOnly, NotRecent) => &strings.subtitle_media,

        (AllFiles, SensorToday) => &strings.access_today_all_files,
        (AllFiles, SensorYesterday) => &strings.access_yesterday_all_files,
        (AllFiles, ContentProviderRecent) => &strings.access_content_provider_all_files,
        (AllFiles, NotRecent) => &strings.subtitle_all_files,
    };

    Some(template.as_str())
}

/// Render the summary line, substituting the formatted access time
pub fn format_summary(
    strings: &SummaryStrings,
    subtitle: SubtitleKind,
    recency: RecencyClass,
    time: &str,
) -> Option<String> {
    summary_template(strings, subtitle, recency).map(|t| t.replace("{time}", time))
}

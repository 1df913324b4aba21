//! Entry ordering within a section

use std::cmp::Ordering;

use super::model::Entry;
use crate::locale::Collator;

/// Collated title order, with the aggregate entry always last
pub fn compare_entries(collator: &Collator, lhs: &Entry, rhs: &Entry) -> Ordering {
    match (lhs.is_additional(), rhs.is_additional()) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        _ => collator.compare(&lhs.title, &rhs.title),
    }
}

/// Sort a section's entries in place
pub fn sort_entries(collator: &Collator, entries: &mut [Entry]) {
    entries.sort_by(|a, b| compare_entries(collator, a, b));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permissions::{Category, SubtitleKind};
    use crate::screen::model::{EntryAction, EntryKind};

    fn group(title: &str) -> Entry {
        Entry {
            key: title.to_string(),
            title: title.to_string(),
            summary: None,
            icon: None,
            action: EntryAction::None,
            secondary_icon: None,
            secondary_action: None,
            kind: EntryKind::Group {
                group_name: title.to_string(),
                source: Category::Allowed,
                subtitle: SubtitleKind::Default,
            },
        }
    }

    fn additional(title: &str) -> Entry {
        Entry {
            kind: EntryKind::AdditionalPermissions { count: 2 },
            ..group(title)
        }
    }

    fn titles(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn test_collated_order() {
        let mut entries = vec![group("Microphone"), group("camera"), group("Location")];
        sort_entries(&Collator::new(), &mut entries);
        assert_eq!(titles(&entries), vec!["camera", "Location", "Microphone"]);
    }

    #[test]
    fn test_additional_always_last() {
        // "Aaa" would collate first
        let mut entries = vec![group("Storage"), additional("Aaa"), group("Camera")];
        sort_entries(&Collator::new(), &mut entries);
        assert_eq!(titles(&entries), vec!["Camera", "Storage", "Aaa"]);
    }

    #[test]
    fn test_compare_is_antisymmetric_for_additional() {
        let c = Collator::new();
        let a = additional("Additional permissions");
        let b = group("Zebra");
        assert_eq!(compare_entries(&c, &a, &b), Ordering::Greater);
        assert_eq!(compare_entries(&c, &b, &a), Ordering::Less);
    }
}

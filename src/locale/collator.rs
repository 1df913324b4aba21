//! Locale-aware string ordering for entry titles

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Multi-level title comparison
///
/// Primary level ignores case and accents ("école" sorts with "ecole"),
/// secondary level orders unaccented before accented, tertiary level
/// orders lowercase before uppercase. Identical strings compare equal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Collator;

impl Collator {
    /// Create a collator
    pub fn new() -> Self {
        Self
    }

    /// Compare two strings
    pub fn compare(&self, lhs: &str, rhs: &str) -> Ordering {
        primary_key(lhs)
            .cmp(&primary_key(rhs))
            .then_with(|| secondary_key(lhs).cmp(&secondary_key(rhs)))
            .then_with(|| tertiary_key(lhs).cmp(&tertiary_key(rhs)))
            .then_with(|| lhs.cmp(rhs))
    }

    /// Sort strings in place
    pub fn sort<S: AsRef<str>>(&self, items: &mut [S]) {
        items.sort_by(|a, b| self.compare(a.as_ref(), b.as_ref()));
    }
}

fn primary_key(s: &str) -> Vec<char> {
    s.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn secondary_key(s: &str) -> Vec<char> {
    s.nfkd().flat_map(char::to_lowercase).collect()
}

fn tertiary_key(s: &str) -> Vec<bool> {
    s.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_primary() {
        let c = Collator::new();
        assert_eq!(c.compare("camera", "Contacts"), Ordering::Less);
        assert_eq!(c.compare("Phone", "location"), Ordering::Greater);
    }

    #[test]
    fn test_accents_sort_with_base_letter() {
        let c = Collator::new();
        assert_eq!(c.compare("école", "Fichiers"), Ordering::Less);
        assert_eq!(c.compare("ecole", "école"), Ordering::Less);
    }

    #[test]
    fn test_lowercase_before_uppercase() {
        let c = Collator::new();
        assert_eq!(c.compare("sms", "SMS"), Ordering::Less);
        assert_eq!(c.compare("SMS", "SMS"), Ordering::Equal);
    }

    #[test]
    fn test_sort() {
        let mut items = vec!["Microphone", "camera", "Location", "Body sensors"];
        Collator::new().sort(&mut items);
        assert_eq!(items, vec!["Body sensors", "camera", "Location", "Microphone"]);
    }
}

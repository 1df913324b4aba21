//! Joining a list of titles into one phrase

use super::strings::SummaryStrings;

/// Formats `[A, B, C]` as "A, B, and C"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFormatter {
    pair: String,
    middle: String,
    end: String,
}

impl ListFormatter {
    /// Create a formatter from explicit separators
    pub fn new(pair: impl Into<String>, middle: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            pair: pair.into(),
            middle: middle.into(),
            end: end.into(),
        }
    }

    /// Create a formatter using the separators of a message table
    pub fn from_strings(strings: &SummaryStrings) -> Self {
        Self::new(
            strings.list_pair_separator.clone(),
            strings.list_separator.clone(),
            strings.list_final_separator.clone(),
        )
    }

    /// Join the items
    pub fn format<S: AsRef<str>>(&self, items: &[S]) -> String {
        match items {
            [] => String::new(),
            [only] => only.as_ref().to_string(),
            [first, second] => format!("{}{}{}", first.as_ref(), self.pair, second.as_ref()),
            [init @ .., last] => {
                let head: Vec<&str> = init.iter().map(|s| s.as_ref()).collect();
                format!("{}{}{}", head.join(&self.middle), self.end, last.as_ref())
            }
        }
    }
}

impl Default for ListFormatter {
    fn default() -> Self {
        Self::from_strings(&SummaryStrings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_lengths() {
        let f = ListFormatter::default();
        assert_eq!(f.format::<&str>(&[]), "");
        assert_eq!(f.format(&["Camera"]), "Camera");
        assert_eq!(f.format(&["Camera", "Microphone"]), "Camera and Microphone");
        assert_eq!(
            f.format(&["Camera", "Location", "Microphone"]),
            "Camera, Location, and Microphone"
        );
    }

    #[test]
    fn test_custom_separators() {
        let f = ListFormatter::new(" und ", ", ", " und ");
        assert_eq!(f.format(&["A", "B", "C", "D"]), "A, B, C und D");
    }
}

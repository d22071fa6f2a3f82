use serde::{Deserialize, Serialize};

/// Storage slot holding the JSON bookmark array.
pub const BOOKMARKS_KEY: &str = "bookmarks-slot";
/// Storage slot holding the raw language token.
pub const LANGUAGE_KEY: &str = "language-slot";

/// A saved verse reference.
///
/// Identity is `(chapter_id, verse_id)`; `verse_number` is display data only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub chapter_id: u32,
    pub verse_id: u32,
    pub verse_number: u32,
}

impl Bookmark {
    pub fn new(chapter_id: u32, verse_id: u32, verse_number: u32) -> Self {
        Self {
            chapter_id,
            verse_id,
            verse_number,
        }
    }

    pub fn matches(&self, chapter_id: u32, verse_id: u32) -> bool {
        self.chapter_id == chapter_id && self.verse_id == verse_id
    }
}

/// Returns whether `bookmarks` holds an entry for `(chapter_id, verse_id)`.
pub(crate) fn contains_bookmark(bookmarks: &[Bookmark], chapter_id: u32, verse_id: u32) -> bool {
    bookmarks.iter().any(|b| b.matches(chapter_id, verse_id))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Hindi,
}

impl Language {
    /// Token written to the language storage slot.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Hindi => "hindi",
        }
    }

    /// Parses an exact storage token. Anything else, including case variants, is rejected.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "english" => Some(Self::English),
            "hindi" => Some(Self::Hindi),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::English => Self::Hindi,
            Self::Hindi => Self::English,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "हिन्दी",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bookmark_serializes_with_camel_case_fields() {
        let raw = serde_json::to_string(&vec![Bookmark::new(2, 5, 5)]).expect("serialize");
        assert_eq!(raw, r#"[{"chapterId":2,"verseId":5,"verseNumber":5}]"#);
    }

    #[test]
    fn bookmark_identity_ignores_verse_number() {
        let bookmark = Bookmark::new(3, 10, 12);
        assert!(bookmark.matches(3, 10));
        assert!(!bookmark.matches(10, 3));
        assert!(contains_bookmark(&[bookmark], 3, 10));
        assert!(!contains_bookmark(&[bookmark], 3, 12));
    }

    #[test]
    fn language_tokens_are_exact() {
        assert_eq!(Language::from_token("english"), Some(Language::English));
        assert_eq!(Language::from_token("hindi"), Some(Language::Hindi));
        assert_eq!(Language::from_token("Hindi"), None);
        assert_eq!(Language::from_token("\"hindi\""), None);
        assert_eq!(Language::from_token(""), None);
    }

    #[test]
    fn language_toggle_flips_between_members() {
        assert_eq!(Language::default(), Language::English);
        assert_eq!(Language::English.toggled(), Language::Hindi);
        assert_eq!(Language::English.toggled().toggled(), Language::English);
    }
}

//! Listing filters: free-text search plus an optional color chip.

use crate::model::color::NoteColor;
use crate::model::note::Note;
use log::debug;
use regex::{Regex, RegexBuilder};

/// Case-insensitive text query combined with an optional exact color match.
#[derive(Debug, Clone, Default)]
pub struct NoteFilter {
    text: Option<TextMatcher>,
    color: Option<NoteColor>,
}

#[derive(Debug, Clone)]
enum TextMatcher {
    Pattern(Regex),
    /// Lowercased needle, used when the query is too large to compile.
    Literal(String),
}

impl TextMatcher {
    fn new(query: &str) -> Self {
        match RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()
        {
            Ok(pattern) => Self::Pattern(pattern),
            Err(err) => {
                debug!(
                    "event=filter_build module=model status=fallback query_len={} error={}",
                    query.len(),
                    err
                );
                Self::Literal(query.to_lowercase())
            }
        }
    }

    fn is_match(&self, haystack: &str) -> bool {
        match self {
            Self::Pattern(pattern) => pattern.is_match(haystack),
            Self::Literal(needle) => haystack.to_lowercase().contains(needle.as_str()),
        }
    }
}

impl NoteFilter {
    /// Builds a filter. A blank `query` matches every note.
    pub fn new(query: &str, color: Option<NoteColor>) -> Self {
        let text = if query.trim().is_empty() {
            None
        } else {
            Some(TextMatcher::new(query))
        };
        Self { text, color }
    }

    pub fn matches(&self, note: &Note) -> bool {
        let text_ok = match &self.text {
            None => true,
            Some(text) => text.is_match(&note.title) || text.is_match(&note.content),
        };
        let color_ok = self.color.map_or(true, |color| note.color == color);
        text_ok && color_ok
    }

    /// Returns matching notes in their original order.
    pub fn apply(&self, notes: &[Note]) -> Vec<Note> {
        notes
            .iter()
            .filter(|note| self.matches(note))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::NoteFilter;
    use crate::model::color::NoteColor;
    use crate::model::note::Note;

    fn note(id: i64, title: &str, content: &str, color: NoteColor) -> Note {
        let mut note = Note::new(title, content, color, "2026-01-01T00:00:00.000Z");
        note.id = id;
        note
    }

    #[test]
    fn blank_query_without_color_matches_everything() {
        let filter = NoteFilter::new("   ", None);
        assert!(filter.matches(&note(1, "", "", NoteColor::WHITE)));
    }

    #[test]
    fn query_matches_title_or_content_ignoring_case() {
        let filter = NoteFilter::new("GROCER", None);
        assert!(filter.matches(&note(1, "Groceries", "", NoteColor::WHITE)));
        assert!(filter.matches(&note(2, "list", "buy at the grocer", NoteColor::WHITE)));
        assert!(!filter.matches(&note(3, "work", "meeting", NoteColor::WHITE)));
    }

    #[test]
    fn query_is_literal_not_a_pattern() {
        let filter = NoteFilter::new("a.c", None);
        assert!(filter.matches(&note(1, "a.c", "", NoteColor::WHITE)));
        assert!(!filter.matches(&note(2, "abc", "", NoteColor::WHITE)));
    }

    #[test]
    fn oversized_query_still_matches_literally() {
        let query = "q".repeat(3_000_000);
        let filter = NoteFilter::new(&query, None);
        assert!(!filter.matches(&note(1, "unrelated", "nothing here", NoteColor::WHITE)));

        let mut hit = note(2, "", "", NoteColor::WHITE);
        hit.content = query.to_uppercase();
        assert!(filter.matches(&hit));
    }

    #[test]
    fn color_and_text_must_both_match() {
        let filter = NoteFilter::new("todo", Some(NoteColor::RED));
        let notes = vec![
            note(3, "todo", "", NoteColor::RED),
            note(2, "todo", "", NoteColor::BLUE),
            note(1, "other", "", NoteColor::RED),
        ];
        let visible = filter.apply(&notes);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 3);
    }
}

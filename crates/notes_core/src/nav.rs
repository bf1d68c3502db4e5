//! Route strings exchanged with the navigation layer.
//!
//! Routes look like `home`, `add_edit/{noteId}` and `detail/{noteId}`. A
//! missing or non-integer id means "create new" ([`NEW_NOTE_ID`]).

use crate::model::note::{NoteId, NEW_NOTE_ID};
use std::fmt::{Display, Formatter};

const HOME: &str = "home";
const ADD_EDIT: &str = "add_edit";
const DETAIL: &str = "detail";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    AddEdit(NoteId),
    Detail(NoteId),
}

impl Route {
    /// Parses a route string. Unknown route names yield `None`.
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim().trim_matches('/');
        let (name, arg) = match trimmed.split_once('/') {
            Some((name, arg)) => (name, Some(arg)),
            None => (trimmed, None),
        };

        match name {
            HOME => Some(Self::Home),
            ADD_EDIT => Some(Self::AddEdit(parse_note_id_arg(arg))),
            DETAIL => Some(Self::Detail(parse_note_id_arg(arg))),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        self.to_string()
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Home => write!(f, "{HOME}"),
            Self::AddEdit(id) => write!(f, "{ADD_EDIT}/{id}"),
            Self::Detail(id) => write!(f, "{DETAIL}/{id}"),
        }
    }
}

/// Reads a note id route argument, defaulting to [`NEW_NOTE_ID`].
pub fn parse_note_id_arg(arg: Option<&str>) -> NoteId {
    arg.and_then(|value| value.trim().parse::<NoteId>().ok())
        .unwrap_or(NEW_NOTE_ID)
}

#[cfg(test)]
mod tests {
    use super::{parse_note_id_arg, Route};
    use crate::model::note::NEW_NOTE_ID;

    #[test]
    fn parses_known_routes() {
        assert_eq!(Route::parse("home"), Some(Route::Home));
        assert_eq!(Route::parse("add_edit/12"), Some(Route::AddEdit(12)));
        assert_eq!(Route::parse("detail/3"), Some(Route::Detail(3)));
        assert_eq!(Route::parse("settings"), None);
    }

    #[test]
    fn malformed_or_missing_id_means_new_note() {
        assert_eq!(parse_note_id_arg(None), NEW_NOTE_ID);
        assert_eq!(parse_note_id_arg(Some("abc")), NEW_NOTE_ID);
        assert_eq!(Route::parse("add_edit/x1"), Some(Route::AddEdit(NEW_NOTE_ID)));
        assert_eq!(Route::parse("add_edit"), Some(Route::AddEdit(NEW_NOTE_ID)));
    }

    #[test]
    fn path_roundtrips_through_parse() {
        let route = Route::AddEdit(NEW_NOTE_ID);
        assert_eq!(route.path(), "add_edit/-1");
        assert_eq!(Route::parse(&route.path()), Some(route));
    }
}

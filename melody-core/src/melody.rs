#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::note::{parse_note, NoteError, ParsedNote};

/// An ordered sequence of note tokens, one line of a melody dataset.
///
/// Tokens are kept as opaque strings; use [`Melody::parse_notes`] to split
/// them into names and durations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Melody {
    notes: Vec<String>,
}

impl Melody {
    pub fn new(notes: Vec<String>) -> Self {
        Self { notes }
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.notes.iter()
    }

    /// Parses every token, stopping at the first one that is not a valid note.
    pub fn parse_notes(&self) -> Result<Vec<ParsedNote>, NoteError> {
        self.notes.iter().map(|note| parse_note(note)).collect()
    }
}

impl From<Vec<String>> for Melody {
    fn from(notes: Vec<String>) -> Self {
        Self::new(notes)
    }
}

impl From<Vec<&str>> for Melody {
    fn from(notes: Vec<&str>) -> Self {
        notes.into_iter().collect()
    }
}

impl From<Melody> for Vec<String> {
    fn from(melody: Melody) -> Self {
        melody.notes
    }
}

impl<S: Into<String>> FromIterator<S> for Melody {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for Melody {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.into_iter()
    }
}

impl<'a> IntoIterator for &'a Melody {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}

impl AsRef<[String]> for Melody {
    fn as_ref(&self) -> &[String] {
        &self.notes
    }
}

impl PartialEq<[&str]> for Melody {
    fn eq(&self, other: &[&str]) -> bool {
        self.notes.len() == other.len() && self.notes.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<const N: usize> PartialEq<[&str; N]> for Melody {
    fn eq(&self, other: &[&str; N]) -> bool {
        *self == other[..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_order_and_duplicates() {
        let melody = Melody::from(vec!["C4_0.25", "C4_0.25", "A3_1"]);
        assert_eq!(melody.len(), 3);
        assert_eq!(melody, ["C4_0.25", "C4_0.25", "A3_1"]);
        assert_ne!(melody, ["C4_0.25", "A3_1", "C4_0.25"]);
    }

    #[test]
    fn parse_all_notes() {
        let melody: Melody = ["C4_0.25", "A#3_0.5"].into_iter().collect();
        assert_eq!(
            melody.parse_notes().unwrap(),
            vec![ParsedNote::new("C4", 0.25), ParsedNote::new("A#3", 0.5)]
        );
    }

    #[test]
    fn parse_stops_at_first_bad_note() {
        let melody = Melody::from(vec!["C4_0.25", "D4", "E4_x"]);
        assert_eq!(
            melody.parse_notes(),
            Err(NoteError::InvalidFormat("D4".to_string()))
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_plain_list() {
        let melody = Melody::from(vec!["G3_0.5", "F3_0.25"]);
        let json = serde_json::to_string(&melody).unwrap();
        assert_eq!(json, r#"["G3_0.5","F3_0.25"]"#);
        assert_eq!(serde_json::from_str::<Melody>(&json).unwrap(), melody);
    }
}

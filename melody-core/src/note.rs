use std::{fmt, num::ParseFloatError, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The separator between the name and the duration of a note token.
pub const NOTE_SEPARATOR: char = '_';

/// Whitespace as the dataset format understands it: Unicode whitespace plus
/// the ASCII file, group, record and unit separators (U+001C..U+001F).
pub fn is_note_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NoteError {
    /// The token did not split into exactly a name and a duration.
    #[error("Invalid note format: {0}")]
    InvalidFormat(String),
    /// The duration half of the token is not a floating-point literal.
    #[error("Invalid note duration in {token}: {source}")]
    InvalidDuration {
        token: String,
        #[source]
        source: ParseFloatError,
    },
}

/// A note token split into its name and duration, e.g. `A#3_0.5`.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParsedNote {
    /// The note name, kept as written.
    pub name: String,
    /// The duration of the note. No range is enforced.
    pub duration: f64,
}

impl ParsedNote {
    pub fn new(name: impl Into<String>, duration: impl Into<f64>) -> Self {
        Self {
            name: name.into(),
            duration: duration.into(),
        }
    }
}

/// Parses a note token of the form `<name>_<duration>`.
///
/// The name is returned unchanged. Any token that does not split into exactly
/// two parts on `_` is rejected with [`NoteError::InvalidFormat`], and a
/// duration that is not a float with [`NoteError::InvalidDuration`].
pub fn parse_note(token: &str) -> Result<ParsedNote, NoteError> {
    let mut parts = token.split(NOTE_SEPARATOR);
    let (name, duration) = match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(duration), None) => (name, duration),
        _ => return Err(NoteError::InvalidFormat(token.to_string())),
    };

    let duration = duration
        .trim_matches(is_note_whitespace)
        .parse::<f64>()
        .map_err(|source| NoteError::InvalidDuration {
            token: token.to_string(),
            source,
        })?;

    Ok(ParsedNote::new(name, duration))
}

impl FromStr for ParsedNote {
    type Err = NoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_note(s)
    }
}

impl fmt::Display for ParsedNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.name, NOTE_SEPARATOR, self.duration)
    }
}

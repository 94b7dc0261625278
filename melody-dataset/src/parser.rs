use melody_core::{is_note_whitespace, Melody};

/// Parses the text of a melody dataset: one melody per line, notes separated
/// by whitespace.
pub struct MelodyParser {}

impl Default for MelodyParser {
    fn default() -> Self {
        Self::new()
    }
}

impl MelodyParser {
    pub fn new() -> Self {
        Self {}
    }

    /// Blank and whitespace-only lines are skipped, so the result never
    /// contains an empty melody. `\n`, `\r\n` and a lone `\r` all end a line.
    pub fn parse(&self, content: impl AsRef<str>) -> Vec<Melody> {
        let mut melodies: Vec<Melody> = Vec::new();

        for line in content.as_ref().split(['\n', '\r']) {
            let line = line.trim_matches(is_note_whitespace);
            if line.is_empty() {
                continue;
            }

            melodies.push(
                line.split(is_note_whitespace)
                    .filter(|note| !note.is_empty())
                    .collect(),
            );
        }

        melodies
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_one_melody_per_line() {
        let parser = MelodyParser::new();
        let melodies = parser.parse("C4_0.25 D4_0.25 E4_0.5\nG3_0.5 F3_0.25 C4_0.25\n");

        assert_eq!(melodies.len(), 2);
        assert_eq!(melodies[0], ["C4_0.25", "D4_0.25", "E4_0.5"]);
        assert_eq!(melodies[1], ["G3_0.5", "F3_0.25", "C4_0.25"]);
    }

    #[test]
    fn skip_blank_lines() {
        let parser = MelodyParser::new();
        let melodies = parser.parse("\nC4_0.25 D4_0.25\n\n   \t\nE4_0.5 F4_0.25\n\n");

        assert_eq!(melodies.len(), 2);
        assert_eq!(melodies[0], ["C4_0.25", "D4_0.25"]);
        assert_eq!(melodies[1], ["E4_0.5", "F4_0.25"]);
    }

    #[test]
    fn collapse_runs_of_whitespace() {
        let parser = MelodyParser::new();
        let melodies = parser.parse("  C4_0.25 \t D4_0.25    E4_0.5  ");

        assert_eq!(melodies, vec![Melody::from(vec!["C4_0.25", "D4_0.25", "E4_0.5"])]);
    }

    #[test]
    fn ascii_separators_are_whitespace() {
        let parser = MelodyParser::new();
        let melodies = parser.parse("C4_0.25\x1fD4_0.25\n\x1c\n\x1e E4_0.5\x1d\n");

        assert_eq!(
            melodies,
            vec![
                Melody::from(vec!["C4_0.25", "D4_0.25"]),
                Melody::from(vec!["E4_0.5"]),
            ]
        );
    }

    #[test]
    fn accept_any_line_ending() {
        let parser = MelodyParser::new();
        let melodies = parser.parse("A3_1\r\nB3_1\rC4_1");

        assert_eq!(melodies.len(), 3);
        assert_eq!(melodies[2], ["C4_1"]);
    }

    #[test]
    fn empty_content_has_no_melodies() {
        let parser = MelodyParser::default();
        assert!(parser.parse("").is_empty());
        assert!(parser.parse("\n\n  \n").is_empty());
    }

    #[test]
    fn tokens_are_not_validated() {
        let parser = MelodyParser::new();
        let melodies = parser.parse("InvalidNote A_B_C");

        assert_eq!(melodies[0], ["InvalidNote", "A_B_C"]);
    }
}

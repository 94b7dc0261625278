use std::io::{self, Write};

use melody_core::Melody;

/// The separator between notes in the canonical output.
pub const NOTE_DELIMITER: &str = " ";

/// Writes melodies in the dataset format: notes joined by a single space,
/// every melody terminated by `\n`.
pub struct MelodyWriter {}

impl Default for MelodyWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl MelodyWriter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn write<W: Write>(&self, out: &mut W, melodies: &[Melody]) -> io::Result<()> {
        for melody in melodies {
            out.write_all(melody.notes().join(NOTE_DELIMITER).as_bytes())?;
            out.write_all(b"\n")?;
        }
        Ok(())
    }

    pub fn to_string(&self, melodies: &[Melody]) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec<u8> never fails.
        let _ = self.write(&mut buf, melodies);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Melody> {
        vec![
            Melody::from(vec!["C4_0.25", "D4_0.25", "E4_0.5"]),
            Melody::from(vec!["G3_0.5", "F3_0.25"]),
        ]
    }

    #[test]
    fn one_line_per_melody() {
        let writer = MelodyWriter::new();
        assert_eq!(
            writer.to_string(&sample()),
            "C4_0.25 D4_0.25 E4_0.5\nG3_0.5 F3_0.25\n"
        );
    }

    #[test]
    fn write_matches_to_string() {
        let writer = MelodyWriter::new();
        let mut buf = Vec::new();
        writer.write(&mut buf, &sample()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), writer.to_string(&sample()));
    }

    #[test]
    fn nothing_to_write() {
        assert_eq!(MelodyWriter::new().to_string(&[]), "");
    }

    #[test]
    fn empty_melody_becomes_empty_line() {
        let writer = MelodyWriter::new();
        let melodies = vec![Melody::default(), Melody::from(vec!["A3_1"])];
        assert_eq!(writer.to_string(&melodies), "\nA3_1\n");
    }
}

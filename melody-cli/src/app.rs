use std::io::Write;
use std::path::PathBuf;

use color_eyre::eyre::{bail, eyre, Result};
use melody_core::{parse_note, Melody, ParsedNote};
use melody_dataset::{load_glob, load_melodies, try_load_glob, try_load_melodies, try_save_melodies};
use tracing::info;

use crate::cli::{AppArgs, Command};
use crate::config::Settings;
use crate::utils::is_pattern;

pub struct App {
    pub dataset: PathBuf,
    pub command: Command,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub melodies: usize,
    pub notes: usize,
    pub longest: usize,
}

impl Stats {
    pub fn of(melodies: &[Melody]) -> Self {
        Self {
            melodies: melodies.len(),
            notes: melodies.iter().map(Melody::len).sum(),
            longest: melodies.iter().map(Melody::len).max().unwrap_or(0),
        }
    }
}

/// A token that failed to parse, with the 1-based number of its melody.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidNote {
    pub melody: usize,
    pub message: String,
}

pub fn check(melodies: &[Melody]) -> Vec<InvalidNote> {
    let mut invalid = Vec::new();
    for (i, melody) in melodies.iter().enumerate() {
        for note in melody.iter() {
            if let Err(err) = parse_note(note) {
                invalid.push(InvalidNote {
                    melody: i + 1,
                    message: err.to_string(),
                });
            }
        }
    }
    invalid
}

impl App {
    pub fn new(args: AppArgs, settings: Settings) -> Self {
        Self {
            dataset: settings.dataset(args.dataset.as_deref()),
            command: args.command,
        }
    }

    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        info!(dataset = %self.dataset.display(), command = ?self.command, "running");

        match &self.command {
            Command::Stats => {
                let stats = Stats::of(&self.load_lenient());
                writeln!(out, "melodies: {}", stats.melodies)?;
                writeln!(out, "notes:    {}", stats.notes)?;
                writeln!(out, "longest:  {}", stats.longest)?;
            }
            Command::Check => {
                let melodies = self.load()?;
                let invalid = check(&melodies);
                for note in invalid.iter() {
                    writeln!(out, "melody {}: {}", note.melody, note.message)?;
                }
                if !invalid.is_empty() {
                    bail!("{} invalid notes in {}", invalid.len(), self.dataset.display());
                }
                writeln!(out, "{} melodies ok", melodies.len())?;
            }
            Command::Normalize { output } => {
                if is_pattern(&self.dataset) {
                    bail!("normalize needs a single dataset file, not a pattern");
                }
                let melodies = try_load_melodies(&self.dataset)?;
                let output = output.as_deref().unwrap_or(&self.dataset);
                try_save_melodies(&melodies, output)?;
                writeln!(
                    out,
                    "wrote {} melodies to {}",
                    melodies.len(),
                    output.display()
                )?;
            }
            Command::Parse { tokens } => {
                for token in tokens {
                    let note = parse_note(token)?;
                    writeln!(out, "{}\t{}", note.name, note.duration)?;
                }
            }
            Command::Export { pretty } => {
                let melodies = self
                    .load()?
                    .iter()
                    .enumerate()
                    .map(|(i, melody)| {
                        melody
                            .parse_notes()
                            .map_err(|err| eyre!("melody {}: {}", i + 1, err))
                    })
                    .collect::<Result<Vec<Vec<ParsedNote>>>>()?;
                let json = if *pretty {
                    serde_json::to_string_pretty(&melodies)?
                } else {
                    serde_json::to_string(&melodies)?
                };
                writeln!(out, "{}", json)?;
            }
        }

        Ok(())
    }

    fn load(&self) -> Result<Vec<Melody>> {
        if is_pattern(&self.dataset) {
            Ok(try_load_glob(&self.dataset.to_string_lossy())?)
        } else {
            Ok(try_load_melodies(&self.dataset)?)
        }
    }

    /// Degrades to an empty dataset, printing the reason.
    fn load_lenient(&self) -> Vec<Melody> {
        if is_pattern(&self.dataset) {
            load_glob(&self.dataset.to_string_lossy())
        } else {
            load_melodies(&self.dataset)
        }
    }
}

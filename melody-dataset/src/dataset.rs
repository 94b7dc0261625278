use std::{
    fs,
    io::{BufWriter, Write},
    path::Path,
};

use melody_core::Melody;
use tracing::{debug, error, warn};

use crate::error::{DatasetError, Result};
use crate::parser::MelodyParser;
use crate::writer::MelodyWriter;

/// Loads the melodies of a dataset file.
///
/// Never fails: a missing or unreadable file is reported on stdout and
/// yields no melodies. Use [`try_load_melodies`] to get the cause instead.
pub fn load_melodies(path: impl AsRef<Path>) -> Vec<Melody> {
    match try_load_melodies(path) {
        Ok(melodies) => melodies,
        Err(err) => {
            report_load_error(&err);
            Vec::new()
        }
    }
}

pub fn try_load_melodies(path: impl AsRef<Path>) -> Result<Vec<Melody>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| DatasetError::from_io(path, e))?;
    let melodies = MelodyParser::new().parse(content);

    debug!(path = %path.display(), count = melodies.len(), "loaded melodies");
    Ok(melodies)
}

/// Saves melodies to a dataset file, replacing whatever it contained.
///
/// Never fails: errors are reported on stdout and whatever was written
/// before the failure stays on disk. Use [`try_save_melodies`] to get the
/// cause instead.
pub fn save_melodies(melodies: &[Melody], path: impl AsRef<Path>) {
    if let Err(err) = try_save_melodies(melodies, path) {
        error!(path = ?err.path(), "failed to save melodies: {}", err);
        println!("Error saving file: {}", err);
    }
}

pub fn try_save_melodies(melodies: &[Melody], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let io_error = |source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = fs::File::create(path).map_err(io_error)?;
    let mut out = BufWriter::new(file);
    MelodyWriter::new()
        .write(&mut out, melodies)
        .map_err(io_error)?;
    out.flush().map_err(io_error)?;

    debug!(path = %path.display(), count = melodies.len(), "saved melodies");
    Ok(())
}

/// Loads every dataset file matching a glob pattern, in path order.
///
/// Files that cannot be read are reported and skipped. A pattern that matches
/// no file is reported like a missing dataset file.
#[cfg(feature = "glob")]
pub fn load_glob(pattern: &str) -> Vec<Melody> {
    match try_load_glob(pattern) {
        Ok(melodies) => melodies,
        Err(err) => {
            report_load_error(&err);
            Vec::new()
        }
    }
}

#[cfg(feature = "glob")]
pub fn try_load_glob(pattern: &str) -> Result<Vec<Melody>> {
    let mut melodies = Vec::new();
    let mut files = 0usize;

    for entry in glob::glob(pattern)? {
        match entry {
            Ok(path) if path.is_file() => {
                files += 1;
                melodies.extend(load_melodies(&path));
            }
            Ok(_) => {}
            Err(err) => {
                let path = err.path().to_path_buf();
                let err = DatasetError::from_io(path, err.into_error());
                report_load_error(&err);
            }
        }
    }

    if files == 0 {
        return Err(DatasetError::NotFound {
            path: pattern.into(),
        });
    }

    debug!(pattern, files, count = melodies.len(), "loaded melodies from pattern");
    Ok(melodies)
}

fn report_load_error(err: &DatasetError) {
    match err {
        DatasetError::NotFound { path } => {
            warn!(path = %path.display(), "dataset file not found");
            println!("File not found: {}", path.display());
            println!("Please make sure the dataset file exists.");
        }
        _ => {
            error!(path = ?err.path(), "failed to load melodies: {}", err);
            println!("Error reading file: {}", err);
        }
    }
}

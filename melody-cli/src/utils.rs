use std::path::PathBuf;

use crate::init::project_directory;

const VERSION_MESSAGE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("CARGO_PKG_NAME"),
    ")"
);

pub fn version() -> String {
    let author = clap::crate_authors!();

    let current_exe_path = PathBuf::from(clap::crate_name!());
    let current_exe_path = current_exe_path.display();
    let project_dirs = project_directory()
        .map(|dirs| format!("{:?}", dirs))
        .unwrap_or_else(|| "unknown".to_string());

    format!(
        "\
{VERSION_MESSAGE}

Authors: {author}

Executable: {current_exe_path}
Directories: {project_dirs}
"
    )
}

/// Whether a dataset argument should be expanded as a glob pattern.
///
/// An existing path is always taken literally, even if its name contains
/// glob metacharacters.
pub fn is_pattern(path: &std::path::Path) -> bool {
    !path.exists() && path.to_string_lossy().contains(['*', '?', '['])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn detect_patterns() {
        assert!(is_pattern(Path::new("data/*.txt")));
        assert!(is_pattern(Path::new("data/set?.txt")));
        assert!(!is_pattern(Path::new("data/melodies.txt")));
    }

    #[test]
    fn existing_path_is_literal() {
        let dir = tempfile::tempdir().unwrap();
        let bracketed = dir.path().join("[v2]");
        std::fs::create_dir(&bracketed).unwrap();
        let path = bracketed.join("melodies.txt");
        assert!(is_pattern(&path));

        std::fs::write(&path, "C4_0.25\n").unwrap();
        assert!(!is_pattern(&path));
    }

    #[test]
    fn version_names_the_package() {
        assert!(version().contains(env!("CARGO_PKG_VERSION")));
    }
}

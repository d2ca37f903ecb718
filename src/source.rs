//! Icon Source Enumeration
//!
//! Enumeration order is lexicographic by icon name (byte order), so a fixed
//! directory state always yields the same sequence, and therefore the same
//! code-point assignment downstream.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Cannot read source directory {path}: {source}")]
    UnreadableDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// One input vector file. `name` is the filename stem, pre-normalization.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct IconSource {
    pub name: String,
    pub path: PathBuf,
}

/// Lists the `.svg` files in `dir` (extension matched case-insensitively,
/// which is the one way two sources can end up sharing a name). Non-SVG
/// files and subdirectories are skipped.
pub fn enumerate(dir: &Path) -> Result<Vec<IconSource>, SourceError> {
    let read_dir = fs::read_dir(dir).map_err(|e| SourceError::UnreadableDir {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut sources = vec![];
    for entry in read_dir {
        let entry = entry.map_err(|e| SourceError::UnreadableDir {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if !path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("svg"))
        {
            continue;
        }
        let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        sources.push(IconSource {
            name: name.to_string(),
            path,
        });
    }

    // read_dir order is platform-dependent; sorting pins it down.
    sources.sort();
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, file: &str) {
        fs::write(dir.join(file), "<svg/>").unwrap();
    }

    #[test]
    fn enumerates_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "zoom.svg");
        touch(dir.path(), "alarm.svg");
        touch(dir.path(), "home.svg");

        let names: Vec<_> = enumerate(dir.path())
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, ["alarm", "home", "zoom"]);
    }

    #[test]
    fn skips_non_svg_files_and_directories() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "home.svg");
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(dir.path().join("nested.svg")).unwrap();

        let sources = enumerate(dir.path()).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].name, "home");
    }

    #[test]
    fn accepts_uppercase_extension() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "home.SVG");

        let sources = enumerate(dir.path()).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].name, "home");
    }

    #[test]
    fn missing_directory_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            enumerate(&missing),
            Err(SourceError::UnreadableDir { .. })
        ));
    }
}

//! Recursive discovery of PNG files and mirrored output paths.
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::core::params::PNG_SUFFIX;
use crate::error::{Error, Result};

/// A matched source file and the path its resized copy is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Outcome of walking an input tree.
#[derive(Debug, Clone, Default)]
pub struct Scan {
    pub entries: Vec<ImageEntry>,
    /// Files that did not end in `.png`
    pub skipped: usize,
}

/// True when the file name ends in `.png`. Case-sensitive, so `A.PNG` is not a match.
pub fn is_png(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(PNG_SUFFIX))
        .unwrap_or(false)
}

/// Map `source` (somewhere below `input_root`) to the same relative
/// position below `output_root`.
pub fn mirror_path(source: &Path, input_root: &Path, output_root: &Path) -> Result<PathBuf> {
    let relative = source.strip_prefix(input_root).map_err(|_| {
        Error::Processing(format!(
            "{:?} is not below input root {:?}",
            source, input_root
        ))
    })?;
    Ok(output_root.join(relative))
}

/// Walk `input_root` recursively and collect every PNG file with its
/// mirrored destination below `output_root`.
///
/// Entries are visited in file-name order within each directory, so the
/// result is stable across runs. Unreadable subdirectories are logged and
/// skipped. A missing or non-directory root yields an empty scan. When
/// `output_root` lies inside `input_root` it is not descended into.
pub fn scan_png_files(input_root: &Path, output_root: &Path) -> Result<Scan> {
    if !input_root.is_dir() {
        warn!("Input directory {:?} does not exist, nothing to resize", input_root);
        return Ok(Scan::default());
    }

    let output_canonical = fs::canonicalize(output_root).ok();
    let is_output_root = |entry: &DirEntry| match &output_canonical {
        Some(out) => {
            entry.depth() > 0
                && entry.file_type().is_dir()
                && fs::canonicalize(entry.path()).is_ok_and(|p| &p == out)
        }
        None => false,
    };

    let mut scan = Scan::default();

    let walker = WalkDir::new(input_root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            let skip = is_output_root(entry);
            if skip {
                debug!("Skipping output directory inside input: {:?}", entry.path());
            }
            !skip
        });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry under {:?}: {}", input_root, e);
                continue;
            }
        };

        let path = entry.path();
        if entry.file_type().is_dir() || path.is_dir() {
            continue;
        }

        if !is_png(path) {
            debug!("Skipping non-PNG file: {:?}", path);
            scan.skipped += 1;
            continue;
        }

        let destination = mirror_path(path, input_root, output_root)?;
        scan.entries.push(ImageEntry {
            source: path.to_path_buf(),
            destination,
        });
    }

    Ok(scan)
}

//! High-level library API: resize every PNG under a directory into a
//! mirrored output tree, or resize a single file. Prefer these entrypoints
//! over the low-level `core` and `io` modules when embedding icon-resizer.
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::core::params::ResizeParams;
use crate::core::processing::resize::resize_image;
use crate::error::Result;
use crate::io::reader::open_image;
use crate::io::scan::{ImageEntry, scan_png_files};
use crate::io::writers::png::write_png;
use crate::types::TargetSize;

/// A file that could not be resized, with the error text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: String,
}

/// Batch processing report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    /// Files skipped because they do not end in `.png`
    pub skipped: usize,
    pub errors: usize,
    pub failures: Vec<FileFailure>,
}

/// Return the (source, destination) pairs a batch run over `input_dir`
/// would process, in traversal order.
pub fn iterate_png_files(input_dir: &Path, output_dir: &Path) -> Result<Vec<ImageEntry>> {
    Ok(scan_png_files(input_dir, output_dir)?.entries)
}

/// Decode `source`, resize it to `params.size` and write it as PNG to
/// `destination`. The destination directory must already exist.
pub fn resize_file(source: &Path, destination: &Path, params: &ResizeParams) -> Result<()> {
    params.validate()?;
    let image = open_image(source)?;
    let resized = resize_image(&image, params.size, params.filter)?;
    write_png(destination, &resized)
}

/// Resize every PNG below `input_dir` to exactly `size` using Lanczos3 and
/// write the results into the same relative positions below `output_dir`.
pub fn resize_icons(input_dir: &Path, output_dir: &Path, size: TargetSize) -> Result<BatchReport> {
    resize_icons_with_params(input_dir, output_dir, &ResizeParams::with_size(size))
}

/// Like [`resize_icons`], with full control over the resize parameters.
///
/// A file that fails to decode, resize or save is logged and recorded in
/// the report; the batch then carries on with the next file. Failing to
/// create an output directory aborts the run with an I/O error. Outputs
/// already written stay in place either way.
pub fn resize_icons_with_params(
    input_dir: &Path,
    output_dir: &Path,
    params: &ResizeParams,
) -> Result<BatchReport> {
    params.validate()?;
    fs::create_dir_all(output_dir)?;

    let scan = scan_png_files(input_dir, output_dir)?;
    let mut report = BatchReport {
        skipped: scan.skipped,
        ..BatchReport::default()
    };

    for entry in scan.entries {
        if let Some(parent) = entry.destination.parent() {
            fs::create_dir_all(parent)?;
        }

        match resize_file(&entry.source, &entry.destination, params) {
            Ok(()) => {
                info!("Resized: {:?} -> {:?}", entry.source, entry.destination);
                report.processed += 1;
            }
            Err(e) => {
                warn!("Error processing {:?}: {}", entry.source, e);
                report.errors += 1;
                report.failures.push(FileFailure {
                    path: entry.source,
                    error: e.to_string(),
                });
            }
        }
    }

    Ok(report)
}

#![doc = r#"
icon-resizer — resize a tree of PNG icons to one fixed size.

The crate walks an input directory recursively, picks every file whose name
ends in `.png`, resizes it to an exact width and height with a Lanczos3
filter (aspect ratio is not preserved), and writes the result as PNG to the
same relative position below an output directory. It powers the
`icon-resizer` CLI and can be embedded in other Rust applications.

Add dependency
--------------
```toml
[dependencies]
icon-resizer = "0.1"
```

Quick start: resize a directory
-------------------------------
```rust,no_run
use std::path::Path;
use icon_resizer::{resize_icons, TargetSize};

fn main() -> icon_resizer::Result<()> {
    let report = resize_icons(
        Path::new("assets/icons"),
        Path::new("assets/resized_icons"),
        TargetSize::new(180, 180)?,
    )?;

    println!("processed={} skipped={} errors={}", report.processed, report.skipped, report.errors);
    Ok(())
}
```

Choosing a filter
-----------------
```rust,no_run
use std::path::Path;
use icon_resizer::{resize_icons_with_params, ResampleFilter, ResizeParams, TargetSize};

fn main() -> icon_resizer::Result<()> {
    let params = ResizeParams {
        size: TargetSize::new(64, 64)?,
        filter: ResampleFilter::CatmullRom,
    };
    let report = resize_icons_with_params(Path::new("."), Path::new("../thumbs"), &params)?;
    for failure in &report.failures {
        eprintln!("{:?}: {}", failure.path, failure.error);
    }
    Ok(())
}
```

Error handling
--------------
A file that cannot be decoded or written does not abort a batch: it is
logged and recorded in [`BatchReport::failures`]. Errors that do abort
(missing input directory, output directory creation) come back as
[`Error`].

Useful modules
--------------
- [`api`] — high-level entry points.
- [`types`] — `TargetSize` and `ResampleFilter`.
- [`io`] — directory scanning, decoding and PNG output.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Types
pub use crate::core::params::{PNG_SUFFIX, ResizeParams};
pub use error::{Error, Result};
pub use types::{ResampleFilter, TargetSize};

// Low-level helpers
pub use crate::core::processing::resize::resize_image;
pub use io::scan::{ImageEntry, mirror_path};

// High-level API re-exports
pub use api::{
    BatchReport, FileFailure, iterate_png_files, resize_file, resize_icons,
    resize_icons_with_params,
};

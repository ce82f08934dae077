//! I/O layer: recursive discovery of input files (`scan`), image decoding
//! (`reader`) and PNG output (`writers`).
pub mod reader;
pub use reader::open_image;

pub mod scan;
pub use scan::{ImageEntry, Scan, is_png, mirror_path, scan_png_files};

pub mod writers;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use image::{DynamicImage, ImageFormat};

use crate::error::Result;

/// Encode `image` as PNG at `output`, replacing any existing file.
/// A partially written file is removed if encoding fails.
pub fn write_png(output: &Path, image: &DynamicImage) -> Result<()> {
    let result = (|| -> Result<()> {
        let file = File::create(output)?;
        let mut writer = BufWriter::new(file);
        image.write_to(&mut writer, ImageFormat::Png)?;
        writer.flush()?;
        Ok(())
    })();

    if result.is_err() {
        let _ = fs::remove_file(output);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Luma};

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        std::fs::write(&path, b"stale").unwrap();

        let img = DynamicImage::ImageLuma8(ImageBuffer::from_pixel(5, 6, Luma([77])));
        write_png(&path, &img).unwrap();

        let back = image::open(&path).unwrap();
        assert_eq!((back.width(), back.height()), (5, 6));
        assert_eq!(back.to_luma8().get_pixel(2, 2).0, [77]);
    }

    #[test]
    fn missing_parent_fails() {
        let dir = tempfile::tempdir().unwrap();
        let img = DynamicImage::new_rgba8(2, 2);
        assert!(write_png(&dir.path().join("no/such/dir/out.png"), &img).is_err());
    }
}

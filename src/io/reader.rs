use std::path::Path;

use image::{DynamicImage, ImageReader};

use crate::error::Result;

/// Open and decode `path`. The format is sniffed from the file contents,
/// not trusted from the extension.
pub fn open_image(path: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    Ok(reader.decode()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use image::{ImageBuffer, Rgba};

    #[test]
    fn decodes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        ImageBuffer::from_pixel(12, 8, Rgba([1u8, 2, 3, 4]))
            .save(&path)
            .unwrap();

        let img = open_image(&path).unwrap();
        assert_eq!((img.width(), img.height()), (12, 8));
    }

    #[test]
    fn garbage_is_an_image_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        assert!(matches!(open_image(&path), Err(Error::Image(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            open_image(&dir.path().join("gone.png")),
            Err(Error::Io(_))
        ));
    }
}

use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::{DynamicImage, ImageBuffer, Pixel};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{ResampleFilter, TargetSize};

fn resize_options(filter: ResampleFilter) -> ResizeOptions {
    let alg = match filter {
        ResampleFilter::Nearest => ResizeAlg::Nearest,
        ResampleFilter::Bilinear => ResizeAlg::Convolution(FilterType::Bilinear),
        ResampleFilter::CatmullRom => ResizeAlg::Convolution(FilterType::CatmullRom),
        ResampleFilter::Mitchell => ResizeAlg::Convolution(FilterType::Mitchell),
        ResampleFilter::Lanczos3 => ResizeAlg::Convolution(FilterType::Lanczos3),
    };
    ResizeOptions::new().resize_alg(alg)
}

/// Resize an interleaved 8-bit buffer. `pixel_type` must describe the
/// channel layout of `data` (U8, U8x2, U8x3 or U8x4).
pub fn resize_u8_image(
    data: &[u8],
    original_cols: u32,
    original_rows: u32,
    target: TargetSize,
    pixel_type: PixelType,
    filter: ResampleFilter,
) -> Result<Vec<u8>> {
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(original_cols, original_rows, data.to_vec(), pixel_type)?;
    let mut dst_image = Image::new(target.width, target.height, pixel_type);
    resizer.resize(&src_image, &mut dst_image, &resize_options(filter))?;

    Ok(dst_image.into_vec())
}

/// Resize an interleaved 16-bit buffer (U16, U16x2, U16x3 or U16x4).
pub fn resize_u16_image(
    data: &[u16],
    original_cols: u32,
    original_rows: u32,
    target: TargetSize,
    pixel_type: PixelType,
    filter: ResampleFilter,
) -> Result<Vec<u16>> {
    let mut resizer = Resizer::new();

    // fast_image_resize takes 16-bit samples as native-endian bytes
    let mut src_bytes = Vec::with_capacity(data.len() * 2);
    for &v in data {
        src_bytes.extend_from_slice(&v.to_ne_bytes());
    }

    let src_image = Image::from_vec_u8(original_cols, original_rows, src_bytes, pixel_type)?;
    let mut dst_image = Image::new(target.width, target.height, pixel_type);
    resizer.resize(&src_image, &mut dst_image, &resize_options(filter))?;

    let dst_bytes = dst_image.into_vec();
    let mut out = Vec::with_capacity(dst_bytes.len() / 2);
    for chunk in dst_bytes.chunks_exact(2) {
        out.push(u16::from_ne_bytes([chunk[0], chunk[1]]));
    }
    Ok(out)
}

fn rebuild<P: Pixel>(
    target: TargetSize,
    data: Vec<P::Subpixel>,
) -> Result<ImageBuffer<P, Vec<P::Subpixel>>> {
    ImageBuffer::from_raw(target.width, target.height, data).ok_or_else(|| {
        Error::Processing(format!("resized buffer does not fit {}", target))
    })
}

fn resize_buffer_u8<P: Pixel<Subpixel = u8>>(
    buf: &ImageBuffer<P, Vec<u8>>,
    pixel_type: PixelType,
    target: TargetSize,
    filter: ResampleFilter,
) -> Result<ImageBuffer<P, Vec<u8>>> {
    let (cols, rows) = buf.dimensions();
    let data = resize_u8_image(buf.as_raw(), cols, rows, target, pixel_type, filter)?;
    rebuild(target, data)
}

fn resize_buffer_u16<P: Pixel<Subpixel = u16>>(
    buf: &ImageBuffer<P, Vec<u16>>,
    pixel_type: PixelType,
    target: TargetSize,
    filter: ResampleFilter,
) -> Result<ImageBuffer<P, Vec<u16>>> {
    let (cols, rows) = buf.dimensions();
    let data = resize_u16_image(buf.as_raw(), cols, rows, target, pixel_type, filter)?;
    rebuild(target, data)
}

/// Resize `image` to exactly `target`, ignoring aspect ratio.
///
/// The pixel layout of the source is kept for 8- and 16-bit gray, gray+alpha,
/// RGB and RGBA images. Anything else (float buffers) is converted to RGBA8
/// first. Alpha is premultiplied during convolution.
pub fn resize_image(
    image: &DynamicImage,
    target: TargetSize,
    filter: ResampleFilter,
) -> Result<DynamicImage> {
    if image.width() == target.width && image.height() == target.height {
        debug!("Image already at {}, skipping resize", target);
        return Ok(image.clone());
    }

    debug!(
        "Original size: {}x{}, New size: {}",
        image.width(),
        image.height(),
        target
    );

    let resized = match image {
        DynamicImage::ImageLuma8(buf) => {
            DynamicImage::ImageLuma8(resize_buffer_u8(buf, PixelType::U8, target, filter)?)
        }
        DynamicImage::ImageLumaA8(buf) => {
            DynamicImage::ImageLumaA8(resize_buffer_u8(buf, PixelType::U8x2, target, filter)?)
        }
        DynamicImage::ImageRgb8(buf) => {
            DynamicImage::ImageRgb8(resize_buffer_u8(buf, PixelType::U8x3, target, filter)?)
        }
        DynamicImage::ImageRgba8(buf) => {
            DynamicImage::ImageRgba8(resize_buffer_u8(buf, PixelType::U8x4, target, filter)?)
        }
        DynamicImage::ImageLuma16(buf) => {
            DynamicImage::ImageLuma16(resize_buffer_u16(buf, PixelType::U16, target, filter)?)
        }
        DynamicImage::ImageLumaA16(buf) => {
            DynamicImage::ImageLumaA16(resize_buffer_u16(buf, PixelType::U16x2, target, filter)?)
        }
        DynamicImage::ImageRgb16(buf) => {
            DynamicImage::ImageRgb16(resize_buffer_u16(buf, PixelType::U16x3, target, filter)?)
        }
        DynamicImage::ImageRgba16(buf) => {
            DynamicImage::ImageRgba16(resize_buffer_u16(buf, PixelType::U16x4, target, filter)?)
        }
        other => {
            let rgba = other.to_rgba8();
            DynamicImage::ImageRgba8(resize_buffer_u8(&rgba, PixelType::U8x4, target, filter)?)
        }
    };

    Ok(resized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, LumaA, Rgb, Rgba};

    fn size(w: u32, h: u32) -> TargetSize {
        TargetSize::new(w, h).unwrap()
    }

    #[test]
    fn downscales_to_exact_dimensions() {
        let src = DynamicImage::ImageRgba8(ImageBuffer::from_pixel(300, 300, Rgba([10, 20, 30, 255])));
        let out = resize_image(&src, size(180, 180), ResampleFilter::Lanczos3).unwrap();
        assert_eq!((out.width(), out.height()), (180, 180));
    }

    #[test]
    fn ignores_aspect_ratio() {
        let src = DynamicImage::ImageRgb8(ImageBuffer::from_pixel(400, 100, Rgb([1, 2, 3])));
        let out = resize_image(&src, size(180, 180), ResampleFilter::Lanczos3).unwrap();
        assert_eq!((out.width(), out.height()), (180, 180));

        let out = resize_image(&src, size(30, 90), ResampleFilter::Bilinear).unwrap();
        assert_eq!((out.width(), out.height()), (30, 90));
    }

    #[test]
    fn upscales_small_sources() {
        let src = DynamicImage::ImageLuma8(ImageBuffer::from_pixel(50, 50, Luma([200])));
        let out = resize_image(&src, size(180, 180), ResampleFilter::Lanczos3).unwrap();
        assert_eq!((out.width(), out.height()), (180, 180));
    }

    #[test]
    fn solid_color_stays_solid() {
        let src = DynamicImage::ImageRgba8(ImageBuffer::from_pixel(
            300,
            300,
            Rgba([120, 60, 200, 255]),
        ));
        let out = resize_image(&src, size(180, 180), ResampleFilter::Lanczos3).unwrap();
        let rgba = out.as_rgba8().expect("layout kept");
        for px in rgba.pixels() {
            for (got, want) in px.0.iter().zip([120u8, 60, 200, 255]) {
                assert!(got.abs_diff(want) <= 1, "{:?}", px);
            }
        }
    }

    #[test]
    fn keeps_pixel_layout() {
        let gray_alpha = DynamicImage::ImageLumaA8(ImageBuffer::from_pixel(20, 20, LumaA([9, 128])));
        let out = resize_image(&gray_alpha, size(7, 7), ResampleFilter::Lanczos3).unwrap();
        assert!(out.as_luma_alpha8().is_some());

        let deep = DynamicImage::ImageLuma16(ImageBuffer::from_pixel(40, 40, Luma([40_000u16])));
        let out = resize_image(&deep, size(10, 10), ResampleFilter::Lanczos3).unwrap();
        let buf = out.as_luma16().expect("16-bit kept");
        assert!(buf.pixels().all(|p| p.0[0].abs_diff(40_000) <= 1));
    }

    #[test]
    fn float_images_become_rgba8() {
        let src = DynamicImage::new_rgb32f(12, 12);
        let out = resize_image(&src, size(4, 4), ResampleFilter::Mitchell).unwrap();
        assert!(out.as_rgba8().is_some());
        assert_eq!((out.width(), out.height()), (4, 4));
    }

    #[test]
    fn same_size_is_untouched() {
        let mut buf = ImageBuffer::from_pixel(180, 180, Rgba([0, 0, 0, 255]));
        buf.put_pixel(3, 4, Rgba([255, 0, 0, 255]));
        let src = DynamicImage::ImageRgba8(buf);
        let out = resize_image(&src, size(180, 180), ResampleFilter::Lanczos3).unwrap();
        assert_eq!(out, src);
    }

    #[test]
    fn every_filter_produces_target_size() {
        let src = DynamicImage::ImageRgb8(ImageBuffer::from_pixel(33, 17, Rgb([5, 6, 7])));
        for filter in [
            ResampleFilter::Nearest,
            ResampleFilter::Bilinear,
            ResampleFilter::CatmullRom,
            ResampleFilter::Mitchell,
            ResampleFilter::Lanczos3,
        ] {
            let out = resize_image(&src, size(16, 16), filter).unwrap();
            assert_eq!((out.width(), out.height()), (16, 16), "{}", filter);
        }
    }
}

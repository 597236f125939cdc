//! Framebuffer encoding: binary PPM (`P6`) and PNG.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use prism_math::Interval;
use thiserror::Error;

use crate::{Color, Framebuffer};

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Framebuffer holds {len} pixels, expected {width}x{height}")]
    BufferSize { width: u32, height: u32, len: usize },
}

pub type OutputResult<T> = Result<T, OutputError>;

/// Convert a linear color to 8-bit RGB.
///
/// A color whose brightest channel exceeds 1 is scaled down so that channel
/// becomes 1, keeping its hue. Channels are then clamped to [0, 1] and
/// truncated to 0..=255.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let max = color.max_element();
    let color = if max > 1.0 { color * (1.0 / max) } else { color };
    let quantize = |c: f32| (255.0 * Interval::UNIT.clamp(c)) as u8;
    [quantize(color.x), quantize(color.y), quantize(color.z)]
}

/// Convert the framebuffer to packed RGB bytes, row-major, top to bottom.
pub fn to_rgb8(image: &Framebuffer) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(image.pixels.len() * 3);
    for color in &image.pixels {
        bytes.extend_from_slice(&color_to_rgb(*color));
    }
    bytes
}

fn check_size(image: &Framebuffer) -> OutputResult<()> {
    let expected = image.width as usize * image.height as usize;
    if image.pixels.len() != expected {
        return Err(OutputError::BufferSize {
            width: image.width,
            height: image.height,
            len: image.pixels.len(),
        });
    }
    Ok(())
}

/// Write the framebuffer as a binary PPM.
pub fn write_ppm<W: Write>(image: &Framebuffer, mut writer: W) -> OutputResult<()> {
    check_size(image)?;
    write!(writer, "P6\n{} {}\n255\n", image.width, image.height)?;
    writer.write_all(&to_rgb8(image))?;
    writer.flush()?;
    Ok(())
}

/// Save the framebuffer as a binary PPM file.
pub fn save_ppm<P: AsRef<Path>>(image: &Framebuffer, path: P) -> OutputResult<()> {
    let file = File::create(path)?;
    write_ppm(image, BufWriter::new(file))
}

/// Save the framebuffer as a PNG file.
pub fn save_png<P: AsRef<Path>>(image: &Framebuffer, path: P) -> OutputResult<()> {
    check_size(image)?;
    let buffer = image::RgbImage::from_raw(image.width, image.height, to_rgb8(image)).ok_or(
        OutputError::BufferSize {
            width: image.width,
            height: image.height,
            len: image.pixels.len(),
        },
    )?;
    buffer.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

/// Save the framebuffer, choosing PNG for a `.png` extension and PPM otherwise.
pub fn save<P: AsRef<Path>>(image: &Framebuffer, path: P) -> OutputResult<()> {
    let path = path.as_ref();
    let is_png = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));

    if is_png {
        save_png(image, path)
    } else {
        save_ppm(image, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Vec3, BACKGROUND};

    #[test]
    fn test_background_quantization() {
        assert_eq!(color_to_rgb(BACKGROUND), [51, 178, 204]);
    }

    #[test]
    fn test_saturation_keeps_hue() {
        // Brightest channel scaled to 1, the rest by the same factor
        assert_eq!(color_to_rgb(Vec3::new(2.0, 1.0, 0.5)), [255, 127, 63]);
        assert_eq!(color_to_rgb(Vec3::new(4.0, 4.0, 4.0)), [255, 255, 255]);
    }

    #[test]
    fn test_clamps_negative_and_nan() {
        assert_eq!(color_to_rgb(Vec3::new(-0.5, 0.0, 1.0)), [0, 0, 255]);
        assert_eq!(color_to_rgb(Vec3::new(f32::NAN, 0.5, 0.5)), [0, 127, 127]);
    }

    #[test]
    fn test_write_ppm_layout() {
        let mut image = Framebuffer::new(2, 2);
        image.set(1, 0, Vec3::new(1.0, 0.0, 0.0));
        image.set(0, 1, Vec3::new(0.0, 1.0, 0.0));

        let mut bytes = Vec::new();
        write_ppm(&image, &mut bytes).unwrap();

        let header = b"P6\n2 2\n255\n";
        assert_eq!(&bytes[..header.len()], header);
        assert_eq!(bytes.len(), header.len() + 2 * 2 * 3);

        let body = &bytes[header.len()..];
        assert_eq!(&body[0..3], &[0, 0, 0]);
        assert_eq!(&body[3..6], &[255, 0, 0]);
        assert_eq!(&body[6..9], &[0, 255, 0]);
    }

    #[test]
    fn test_write_ppm_rejects_mismatched_buffer() {
        let mut image = Framebuffer::new(2, 2);
        image.pixels.pop();

        let result = write_ppm(&image, Vec::new());
        assert!(matches!(result, Err(OutputError::BufferSize { len: 3, .. })));
    }

    #[test]
    fn test_save_picks_format_from_extension() {
        let dir = std::env::temp_dir();
        let ppm_path = dir.join(format!("prism_output_test_{}.ppm", std::process::id()));
        let png_path = dir.join(format!("prism_output_test_{}.png", std::process::id()));

        let mut image = Framebuffer::new(3, 2);
        image.set(2, 1, BACKGROUND);

        save(&image, &ppm_path).unwrap();
        save(&image, &png_path).unwrap();

        let ppm = std::fs::read(&ppm_path).unwrap();
        assert!(ppm.starts_with(b"P6\n3 2\n255\n"));

        let png = image::open(&png_path).unwrap().to_rgb8();
        assert_eq!(png.dimensions(), (3, 2));
        assert_eq!(png.get_pixel(2, 1).0, [51, 178, 204]);

        std::fs::remove_file(ppm_path).unwrap();
        std::fs::remove_file(png_path).unwrap();
    }
}

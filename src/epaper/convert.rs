//! Source pixel formats and the monochrome threshold
//!
//! Graphics layers hand over rectangular blocks in whatever format they render
//! in. Each pixel is reduced to luma and thresholded to black or white.

use super::color::Color;
use super::error::EpdError;

/// Luma at or above this value is white
pub const LUMA_THRESHOLD: u8 = 128;

/// Pixel encodings accepted by [`Epd::flush`](super::driver::Epd::flush)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelFormat {
    /// 16-bit packed RGB, little endian, 5-6-5
    Rgb565,
    /// 24-bit RGB, one byte per channel
    Rgb888,
    /// 32-bit with a leading alpha or padding byte: `[X, R, G, B]`
    Xrgb8888,
    /// 8-bit luminance
    L8,
}

impl PixelFormat {
    /// Bytes taken by one pixel
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Rgb565 => 2,
            PixelFormat::Rgb888 => 3,
            PixelFormat::Xrgb8888 => 4,
            PixelFormat::L8 => 1,
        }
    }

    /// Luma of one pixel, `raw` is exactly [`bytes_per_pixel`](Self::bytes_per_pixel) long
    fn luma_of(self, raw: &[u8]) -> u8 {
        match self {
            PixelFormat::Rgb565 => {
                let value = u16::from_le_bytes([raw[0], raw[1]]);
                let r = expand((value >> 11) & 0x1F, 31);
                let g = expand((value >> 5) & 0x3F, 63);
                let b = expand(value & 0x1F, 31);
                luma(r, g, b)
            }
            PixelFormat::Rgb888 => luma(raw[0], raw[1], raw[2]),
            PixelFormat::Xrgb8888 => luma(raw[1], raw[2], raw[3]),
            PixelFormat::L8 => raw[0],
        }
    }
}

/// Scale a `max`-bit channel up to 0..=255
fn expand(value: u16, max: u16) -> u8 {
    (u32::from(value) * 255 / u32::from(max)) as u8
}

/// Integer luma, `(30 R + 59 G + 11 B) / 100`
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((30 * u32::from(r) + 59 * u32::from(g) + 11 * u32::from(b)) / 100) as u8
}

/// Threshold a luma value
pub fn to_mono(luma: u8) -> Color {
    if luma < LUMA_THRESHOLD {
        Color::Black
    } else {
        Color::White
    }
}

/// A damaged region in logical coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Area {
    /// Left column
    pub x: i32,
    /// Top row
    pub y: i32,
    /// Columns
    pub width: u32,
    /// Rows
    pub height: u32,
}

impl Area {
    /// Region of `width` x `height` pixels with its top left corner at `(x, y)`
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Area {
            x,
            y,
            width,
            height,
        }
    }

    /// Number of pixels covered, `None` if that does not fit in `usize`
    pub fn pixel_count(&self) -> Option<usize> {
        usize::try_from(self.width)
            .ok()?
            .checked_mul(usize::try_from(self.height).ok()?)
    }
}

/// Convert a row-major block to monochrome, calling `put(x, y, color)` for
/// each pixel in logical coordinates
///
/// The block must hold exactly `area.pixel_count()` pixels.
pub fn decode(
    area: &Area,
    format: PixelFormat,
    pixels: &[u8],
    mut put: impl FnMut(i32, i32, Color),
) -> Result<(), EpdError> {
    let bpp = format.bytes_per_pixel();
    let Some(expected) = area.pixel_count().and_then(|count| count.checked_mul(bpp)) else {
        return Err(EpdError::BufferSize {
            expected: usize::MAX,
            actual: pixels.len(),
        });
    };
    if pixels.len() != expected {
        return Err(EpdError::BufferSize {
            expected,
            actual: pixels.len(),
        });
    }
    if expected == 0 {
        return Ok(());
    }

    let row_len = area.width as usize * bpp;
    for (row, line) in pixels.chunks_exact(row_len).enumerate() {
        for (col, raw) in line.chunks_exact(bpp).enumerate() {
            let color = to_mono(format.luma_of(raw));
            let x = area.x.saturating_add(i32::try_from(col).unwrap_or(i32::MAX));
            let y = area.y.saturating_add(i32::try_from(row).unwrap_or(i32::MAX));
            put(x, y, color);
        }
    }
    Ok(())
}

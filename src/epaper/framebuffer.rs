//! Packed 1-bit framebuffer in controller RAM layout
//!
//! Rows are byte aligned: a 122 pixel row takes 16 bytes and the last 6 bits
//! of every row are padding. Bit 7 of a byte is the leftmost pixel. A set bit
//! is white, a cleared bit is black, exactly as the controller expects it.

use super::color::Color;
use super::error::EpdError;

/// Size of a panel in physical (RAM) coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    width: u16,
    height: u16,
    stride: u16,
}

impl Geometry {
    /// Geometry of a `width` x `height` panel, rows rounded up to whole bytes
    pub const fn new(width: u16, height: u16) -> Self {
        Geometry {
            width,
            height,
            stride: width.div_ceil(8),
        }
    }

    /// Pixels per row
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Bytes per row
    pub const fn stride(&self) -> u16 {
        self.stride
    }

    /// Total framebuffer size in bytes
    pub const fn buffer_len(&self) -> usize {
        self.stride as usize * self.height as usize
    }

    /// Whether `(x, y)` lies on the panel
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < i32::from(self.width) && y < i32::from(self.height)
    }

    /// Byte index and bit index (0 = leftmost, bit 7 of the byte) of a pixel
    pub fn locate(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        if !self.contains(x, y) {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        Some((y * self.stride as usize + x / 8, (x % 8) as u8))
    }
}

/// The driver-owned image that gets streamed into controller RAM
#[derive(Clone, Debug)]
pub struct Framebuffer {
    geometry: Geometry,
    bytes: Vec<u8>,
}

impl Framebuffer {
    /// Allocate a framebuffer for `geometry`, filled white
    ///
    /// Allocation failure is reported instead of aborting, the caller may retry.
    pub fn try_new(geometry: Geometry) -> Result<Self, EpdError> {
        let len = geometry.buffer_len();
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(len)
            .map_err(|_| EpdError::OutOfMemory { bytes: len })?;
        bytes.resize(len, Color::White.get_byte_value());

        log::debug!(
            "Allocated framebuffer {}x{} ({} bytes, {} bytes per row)",
            geometry.width(),
            geometry.height(),
            len,
            geometry.stride()
        );
        Ok(Framebuffer { geometry, bytes })
    }

    /// Geometry this buffer was allocated for
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Read-only view of the RAM image
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Replace the whole image with pre-rendered RAM data of the exact size
    pub fn load(&mut self, data: &[u8]) -> Result<(), EpdError> {
        if data.len() != self.bytes.len() {
            return Err(EpdError::BufferSize {
                expected: self.bytes.len(),
                actual: data.len(),
            });
        }
        self.bytes.copy_from_slice(data);
        Ok(())
    }

    /// Fill with white. The panel is not touched until the next refresh.
    pub fn clear(&mut self) {
        self.bytes.fill(Color::White.get_byte_value());
    }

    /// Set one pixel; coordinates off the panel are ignored
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        let Some((index, bit)) = self.geometry.locate(x, y) else {
            return;
        };
        let mask = 0x80u8 >> bit;
        match color {
            Color::White => self.bytes[index] |= mask,
            Color::Black => self.bytes[index] &= !mask,
        }
    }

    /// Color of one pixel, `None` off the panel
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        let (index, bit) = self.geometry.locate(x, y)?;
        Some(Color::from_bit(self.bytes[index] & (0x80u8 >> bit) != 0))
    }

    /// Draw a black rectangle between two corners, inclusive, in any order
    ///
    /// `filled` paints every pixel inside, otherwise only the one pixel wide border.
    /// Parts off the panel are clipped.
    pub fn draw_rectangle(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, filled: bool) {
        let (left, right) = (x0.min(x1), x0.max(x1));
        let (top, bottom) = (y0.min(y1), y0.max(y1));

        // Only the visible span is walked; set_pixel still clips the edges themselves
        let max_x = i32::from(self.geometry.width()) - 1;
        let max_y = i32::from(self.geometry.height()) - 1;
        let (span_left, span_right) = (left.max(0), right.min(max_x));
        let (span_top, span_bottom) = (top.max(0), bottom.min(max_y));

        if filled {
            for y in span_top..=span_bottom {
                for x in span_left..=span_right {
                    self.set_pixel(x, y, Color::Black);
                }
            }
        } else {
            for x in span_left..=span_right {
                self.set_pixel(x, top, Color::Black);
                self.set_pixel(x, bottom, Color::Black);
            }
            for y in span_top..=span_bottom {
                self.set_pixel(left, y, Color::Black);
                self.set_pixel(right, y, Color::Black);
            }
        }
    }
}

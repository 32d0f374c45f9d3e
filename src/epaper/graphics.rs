//! `embedded-graphics` drawing surface over the framebuffer
//!
//! [`Canvas`] works in logical coordinates and routes every pixel through the
//! panel orientation. Nothing reaches the panel until the driver refreshes.

use core::convert::Infallible;

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, OriginDimensions, Pixel, Size},
};

use super::color::Color;
use super::framebuffer::Framebuffer;
use super::orientation::Orientation;

/// Borrowed drawing view of a framebuffer
///
/// `BinaryColor::On` is ink (black), `BinaryColor::Off` is paper (white).
pub struct Canvas<'a> {
    framebuffer: &'a mut Framebuffer,
    orientation: Orientation,
}

impl<'a> Canvas<'a> {
    /// Draw into `framebuffer` as seen in `orientation`
    pub fn new(framebuffer: &'a mut Framebuffer, orientation: Orientation) -> Self {
        Canvas {
            framebuffer,
            orientation,
        }
    }

    fn put(&mut self, x: i32, y: i32, color: Color) {
        let physical_height = self.framebuffer.geometry().height();
        let (px, py) = self.orientation.to_physical(x, y, physical_height);
        self.framebuffer.set_pixel(px, py, color);
    }
}

impl DrawTarget for Canvas<'_> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.put(point.x, point.y, color.into());
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        match Color::from(color) {
            Color::White => self.framebuffer.clear(),
            Color::Black => {
                let geometry = self.framebuffer.geometry();
                self.framebuffer.draw_rectangle(
                    0,
                    0,
                    i32::from(geometry.width()) - 1,
                    i32::from(geometry.height()) - 1,
                    true,
                );
            }
        }
        Ok(())
    }
}

impl OriginDimensions for Canvas<'_> {
    fn size(&self) -> Size {
        let (width, height) = self
            .orientation
            .logical_size(&self.framebuffer.geometry());
        Size::new(u32::from(width), u32::from(height))
    }
}

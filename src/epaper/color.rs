//! B/W color for the panel RAM
//!
//! The controller stores white as a set bit and black as a cleared bit.
//! Everything above the framebuffer talks in [`Color`] and never sees raw bits.

use embedded_graphics::pixelcolor::BinaryColor;

use super::flag::Flag;

/// Only black and white are supported by this driver
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Color {
    /// Black pixel, a cleared bit in RAM
    Black,
    /// White pixel, a set bit in RAM
    #[default]
    White,
}

impl Color {
    /// Byte that fills eight pixels of this color
    pub const fn get_byte_value(self) -> u8 {
        match self {
            Color::Black => Flag::RAM_ALL_BLACK,
            Color::White => Flag::RAM_ALL_WHITE,
        }
    }

    /// Color stored by a single RAM bit
    pub const fn from_bit(bit: bool) -> Self {
        if bit {
            Color::White
        } else {
            Color::Black
        }
    }

    /// The other color
    pub const fn inverse(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

/// `On` is ink, `Off` is paper
impl From<BinaryColor> for Color {
    fn from(color: BinaryColor) -> Self {
        match color {
            BinaryColor::On => Color::Black,
            BinaryColor::Off => Color::White,
        }
    }
}

impl From<Color> for BinaryColor {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => BinaryColor::On,
            Color::White => BinaryColor::Off,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_is_all_ones_in_ram() {
        assert_eq!(Color::White.get_byte_value(), 0xFF);
        assert_eq!(Color::Black.get_byte_value(), 0x00);
        assert_eq!(Color::from_bit(true), Color::White);
        assert_eq!(Color::from_bit(false), Color::Black);
    }

    #[test]
    fn binary_color_on_draws_ink() {
        assert_eq!(Color::from(BinaryColor::On), Color::Black);
        assert_eq!(Color::from(BinaryColor::Off), Color::White);
        assert_eq!(BinaryColor::from(Color::Black.inverse()), BinaryColor::Off);
    }
}

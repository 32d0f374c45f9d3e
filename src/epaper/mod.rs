//! WeAct 2.13" e-paper driver (SSD1680 / SSD1675)
//!
//! Used in the WeAct Studio 2.13" black and white e-paper module, wired over
//! SPI with separate data/command, reset and busy lines.
//!
//! The driver is written against the `embedded-hal` 1.0 traits so it runs on
//! ESP-IDF and in host tests alike.
//!
//! ### Usage
//! The driver owns one black and white framebuffer. To display something you:
//!
//! 1. construct [`driver::Epd`] from the bus, the pins and a [`driver::PanelConfig`]
//! 1. draw on it with the pixel and rectangle primitives, or through
//!    [`driver::Epd::canvas`] with [`embedded_graphics`]
//! 1. send the frame and refresh with [`driver::Epd::display_frame`]
//!
//! Both controller generations are handled by the same driver, selected with
//! a [`controller::Controller`] descriptor.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod color;
pub mod controller;
pub mod convert;
pub mod driver;
pub mod error;
pub mod framebuffer;
pub mod graphics;
pub mod interface;
pub mod orientation;
pub mod pins;

mod cmd;
mod flag;

/// Display height of the WeAct 2.13" module, pixels vertically
pub const HEIGHT: u16 = 250;

/// Display width of the WeAct 2.13" module, pixels horizontally
pub const WIDTH: u16 = 122;

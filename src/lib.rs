//! Driver for the WeAct 2.13" monochrome e-paper module
#![warn(missing_docs)]

pub mod epaper;

pub use crate::epaper::color::Color;
pub use crate::epaper::controller::Controller;
pub use crate::epaper::convert::{Area, PixelFormat};
pub use crate::epaper::driver::{Epd, PanelConfig, PanelState};
pub use crate::epaper::error::EpdError;
pub use crate::epaper::interface::BusyWait;
pub use crate::epaper::orientation::Orientation;
pub use crate::epaper::pins::PinBinding;

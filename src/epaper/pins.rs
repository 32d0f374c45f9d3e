//! Pin definitions for the WeAct e-paper module
//!
//! The driver itself only sees `embedded-hal` pins; the binding records which
//! GPIO each role was wired to so the board setup and the logs agree.

/// GPIO numbers for the six lines of the panel plus the SPI clock rate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PinBinding {
    /// SPI Clock
    pub sck: u8,
    /// SPI Master Out Slave In
    pub mosi: u8,
    /// Chip Select (active low)
    pub cs: u8,
    /// Data/Command control pin (High for data, Low for command)
    pub dc: u8,
    /// Reset pin for display (active low)
    pub rst: u8,
    /// Busy status pin (High when display is busy)
    pub busy: u8,
    /// SPI clock rate in Hz
    pub spi_clock_hz: u32,
}

impl PinBinding {
    /// Wiring used by the WeAct 2.13" module on an ESP32-S3 DevKit
    pub const fn weact_default() -> Self {
        PinBinding {
            sck: 6,
            mosi: 7,
            cs: 10,
            dc: 9,
            rst: 4,
            busy: 18,
            spi_clock_hz: 4_000_000,
        }
    }
}

impl Default for PinBinding {
    fn default() -> Self {
        Self::weact_default()
    }
}

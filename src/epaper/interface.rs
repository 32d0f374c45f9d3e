//! Display interface using SPI
use display_interface::DisplayError;
use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

use super::controller::ResetTiming;
use super::error::EpdError;

/// Busy line poll interval
pub const BUSY_POLL_MS: u32 = 10;
/// Longest a refresh is waited for before the wait is abandoned
pub const BUSY_WAIT_TIMEOUT_MS: u32 = 5000;

/// Outcome of waiting on the busy line
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BusyWait {
    /// The controller dropped the busy line
    Ready {
        /// Time spent polling
        waited_ms: u32,
    },
    /// The busy line was still high when the timeout ran out.
    /// The refresh in the panel is not aborted, only the wait is.
    TimedOut {
        /// Time spent polling
        waited_ms: u32,
    },
}

impl BusyWait {
    /// Whether the controller reported ready
    pub fn is_ready(&self) -> bool {
        matches!(self, BusyWait::Ready { .. })
    }

    /// Time spent polling
    pub fn waited_ms(&self) -> u32 {
        match *self {
            BusyWait::Ready { waited_ms } | BusyWait::TimedOut { waited_ms } => waited_ms,
        }
    }
}

/// The connection to the panel: SPI device plus the three control lines
pub struct DisplayInterface<SPI, BSY, DC, RST, DELAY> {
    /// SPI device, chip select is handled by the `SpiDevice`
    spi: SPI,
    /// High for busy, wait until display is ready!
    busy: BSY,
    /// Data/Command Control Pin (High for data, Low for command)
    dc: DC,
    /// Pin for Reseting
    rst: RST,
    delay: DELAY,
}

impl<SPI, BSY, DC, RST, DELAY> DisplayInterface<SPI, BSY, DC, RST, DELAY> {
    /// Bundle the bus and the control lines. Nothing is sent yet.
    pub fn new(spi: SPI, busy: BSY, dc: DC, rst: RST, delay: DELAY) -> Self {
        DisplayInterface {
            spi,
            busy,
            dc,
            rst,
            delay,
        }
    }

    /// Hand back the bus, the pins and the delay
    pub fn release(self) -> (SPI, BSY, DC, RST, DELAY) {
        (self.spi, self.busy, self.dc, self.rst, self.delay)
    }
}

impl<SPI, BSY, DC, RST, DELAY> DisplayInterface<SPI, BSY, DC, RST, DELAY>
where
    SPI: SpiDevice,
    BSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    /// Basic function for sending commands
    pub fn cmd(&mut self, command: u8) -> Result<(), EpdError> {
        // low for commands
        self.dc.set_low().map_err(|_| DisplayError::DCError)?;

        match self.spi.write(&[command]) {
            Ok(_) => Ok(()),
            Err(e) => {
                log::error!("SPI write error for command 0x{:02X}: {:?}", command, e);
                Err(DisplayError::BusWriteError.into())
            }
        }
    }

    /// Basic function for sending an array of u8-values of data over spi
    ///
    /// The payload goes out as one transfer. An empty payload sends nothing.
    pub fn data(&mut self, data: &[u8]) -> Result<(), EpdError> {
        if data.is_empty() {
            return Ok(());
        }
        // high for data
        self.dc.set_high().map_err(|_| DisplayError::DCError)?;

        match self.spi.write(data) {
            Ok(_) => Ok(()),
            Err(e) => {
                log::error!("SPI write error for {} data bytes: {:?}", data.len(), e);
                Err(DisplayError::BusWriteError.into())
            }
        }
    }

    /// Basic function for sending a command and the data belonging to it.
    pub fn cmd_with_data(&mut self, command: u8, data: &[u8]) -> Result<(), EpdError> {
        self.cmd(command)?;
        self.data(data)
    }

    /// Hardware reset: release, pulse low, release again
    pub fn reset(&mut self, timing: ResetTiming) -> Result<(), EpdError> {
        log::debug!(
            "Hardware reset (settle {} ms, pulse {} ms)",
            timing.settle_ms,
            timing.pulse_ms
        );
        self.rst.set_high().map_err(|_| DisplayError::RSError)?;
        self.delay.delay_ms(timing.settle_ms);
        self.rst.set_low().map_err(|_| DisplayError::RSError)?;
        self.delay.delay_ms(timing.pulse_ms);
        self.rst.set_high().map_err(|_| DisplayError::RSError)?;
        self.delay.delay_ms(timing.settle_ms);
        Ok(())
    }

    /// Poll the busy line until it goes low or [`BUSY_WAIT_TIMEOUT_MS`] passes
    ///
    /// The line is read once more after the last delay, so a line that never
    /// drops costs exactly the timeout.
    pub fn wait_until_idle(&mut self) -> Result<BusyWait, EpdError> {
        let mut waited_ms = 0;
        loop {
            let busy = self.busy.is_high().map_err(|_| {
                log::error!("Error reading BUSY pin state");
                EpdError::BusyPin
            })?;
            if !busy {
                log::debug!("BUSY low after {} ms", waited_ms);
                return Ok(BusyWait::Ready { waited_ms });
            }
            if waited_ms >= BUSY_WAIT_TIMEOUT_MS {
                log::warn!(
                    "TIMEOUT waiting for BUSY pin to go LOW after {} ms",
                    waited_ms
                );
                return Ok(BusyWait::TimedOut { waited_ms });
            }
            self.delay.delay_ms(BUSY_POLL_MS);
            waited_ms += BUSY_POLL_MS;
        }
    }

    /// Fixed settle interval
    pub fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}

//! Error type shared by the transport, the framebuffer and the driver

use display_interface::DisplayError;
use thiserror::Error;

/// Everything that can go wrong while driving the panel
///
/// A busy-wait timeout is not an error: it is reported as
/// [`BusyWait::TimedOut`](super::interface::BusyWait::TimedOut) and the caller
/// decides what to do with it.
#[derive(Debug, Error)]
pub enum EpdError {
    /// The SPI transfer or one of the control lines was rejected by the platform.
    /// The command stream cannot be resynchronised, so the operation is abandoned.
    #[error("bus transfer failed: {0:?}")]
    Bus(DisplayError),
    /// The busy line could not be read
    #[error("could not read the busy line")]
    BusyPin,
    /// The framebuffer could not be allocated
    #[error("framebuffer allocation of {bytes} bytes failed")]
    OutOfMemory {
        /// Requested allocation size
        bytes: usize,
    },
    /// The selected controller cannot address a panel of this size
    #[error("unsupported panel geometry {width}x{height}")]
    Geometry {
        /// Requested width in pixels
        width: u16,
        /// Requested height in pixels
        height: u16,
    },
    /// A bulk load or a pixel block did not have the expected length
    #[error("buffer length mismatch: expected {expected} bytes, got {actual}")]
    BufferSize {
        /// Length the operation needs
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },
    /// The last reset or register setup did not complete, the controller
    /// state is unknown until [`Epd::wake`](super::driver::Epd::wake) succeeds
    #[error("controller is not initialized, wake it to run the reset sequence again")]
    NotInitialized,
    /// The controller is in deep sleep and only a reset brings it back
    #[error("controller is in deep sleep, wake it before sending commands")]
    Asleep,
    /// A previous refresh timed out and the controller still reports busy
    #[error("controller still busy after {waited_ms} ms")]
    StillBusy {
        /// Time spent polling before giving up
        waited_ms: u32,
    },
}

impl From<DisplayError> for EpdError {
    fn from(error: DisplayError) -> Self {
        EpdError::Bus(error)
    }
}

//! Panel driver
//!
//! [`Epd`] owns the bus, the control lines and the framebuffer. It brings the
//! controller from power-on to idle, keeps track of where the controller is in
//! its session, and streams the framebuffer to the panel on refresh.
//!
//! ## Usage
//!
//! 1. construct with [`Epd::new`], which resets and initializes the controller
//! 1. draw with [`Epd::set_pixel`], [`Epd::draw_rectangle`] or through
//!    [`Epd::canvas`] with [`embedded_graphics`]
//! 1. make it visible with [`Epd::display_frame`]
//! 1. put the controller to sleep with [`Epd::sleep`] or [`Epd::shutdown`]
//!
//! ## Busy line
//!
//! After `MASTER_ACTIVATE` the controller holds BUSY high for the whole
//! physical refresh, typically 1-3 seconds. The wait is bounded; a timed out
//! wait is returned as [`BusyWait::TimedOut`] and the next refresh polls the
//! line again before sending anything.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::spi::SpiDevice;

use super::cmd::Cmd;
use super::color::Color;
use super::controller::Controller;
use super::convert::{self, Area, PixelFormat};
use super::error::EpdError;
use super::flag::Flag;
use super::framebuffer::{Framebuffer, Geometry};
use super::graphics::Canvas;
use super::interface::{BusyWait, DisplayInterface};
use super::orientation::Orientation;
use super::pins::PinBinding;

/// Settle time after the deep sleep command
pub const SLEEP_SETTLE_MS: u32 = 100;

/// Everything needed to construct a driver besides the peripherals
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelConfig {
    /// Controller generation and panel size
    pub controller: Controller,
    /// How drawing coordinates sit on the panel
    pub orientation: Orientation,
    /// Which GPIO each line is wired to
    pub pins: PinBinding,
}

/// Where the controller is in its session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelState {
    /// Powered, nothing sent yet
    Uninitialized,
    /// Hardware reset in progress
    Resetting,
    /// Register sequence in flight
    Initializing,
    /// Ready for drawing and refresh
    Idle,
    /// A refresh is running and the panel ignores commands
    Busy,
    /// Deep sleep, only a reset brings it back
    Sleeping,
}

/// WeAct e-paper driver
///
/// ## Type Parameters
///
/// - `SPI` - SPI device for communication, handles chip select
/// - `BSY` - BUSY input pin (HIGH when display is busy)
/// - `DC` - Data/Command output pin
/// - `RST` - Reset output pin
/// - `DELAY` - Delay provider for timing
pub struct Epd<SPI, BSY, DC, RST, DELAY> {
    interface: DisplayInterface<SPI, BSY, DC, RST, DELAY>,
    config: PanelConfig,
    framebuffer: Framebuffer,
    state: PanelState,
}

impl<SPI, BSY, DC, RST, DELAY> Epd<SPI, BSY, DC, RST, DELAY>
where
    SPI: SpiDevice,
    BSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    /// Create and initialize the display driver
    ///
    /// Fails without returning a handle if the controller cannot address the
    /// configured panel, the framebuffer cannot be allocated or the bus rejects
    /// a transfer during initialization.
    pub fn new(
        spi: SPI,
        busy: BSY,
        dc: DC,
        rst: RST,
        delay: DELAY,
        config: PanelConfig,
    ) -> Result<Self, EpdError> {
        let geometry = config.controller.geometry()?;
        let framebuffer = Framebuffer::try_new(geometry)?;

        log::info!(
            "Creating {} driver for {}x{} panel (SCK {}, MOSI {}, CS {}, DC {}, RST {}, BUSY {}, {} Hz)",
            config.controller.name,
            geometry.width(),
            geometry.height(),
            config.pins.sck,
            config.pins.mosi,
            config.pins.cs,
            config.pins.dc,
            config.pins.rst,
            config.pins.busy,
            config.pins.spi_clock_hz
        );

        let mut epd = Epd {
            interface: DisplayInterface::new(spi, busy, dc, rst, delay),
            config,
            framebuffer,
            state: PanelState::Uninitialized,
        };
        epd.initialize()?;
        Ok(epd)
    }

    /// Hardware reset followed by the register initialization sequence
    ///
    /// Works from any state and is the only way out of [`PanelState::Sleeping`].
    /// A busy line that does not drop during init is logged and init goes on.
    /// If any step fails the panel is left [`PanelState::Uninitialized`] and
    /// refuses commands until the next successful call.
    pub fn initialize(&mut self) -> Result<(), EpdError> {
        let result = self.run_init_sequence();
        if let Err(error) = &result {
            log::error!(
                "{} initialization failed in {:?}: {}",
                self.config.controller.name,
                self.state,
                error
            );
            self.state = PanelState::Uninitialized;
        }
        result
    }

    fn run_init_sequence(&mut self) -> Result<(), EpdError> {
        let controller = self.config.controller;
        let geometry = self.framebuffer.geometry();
        log::info!("Initializing {} display", controller.name);

        self.state = PanelState::Resetting;
        self.interface.reset(controller.reset)?;
        self.wait_during_init("hardware reset")?;

        self.state = PanelState::Initializing;
        self.interface.cmd(Cmd::SW_RESET)?;
        self.wait_during_init("software reset")?;

        self.interface
            .cmd_with_data(Cmd::DRIVER_CONTROL, &controller.driver_output(&geometry))?;
        self.interface
            .cmd_with_data(Cmd::DATA_ENTRY_MODE, &[Flag::DATA_ENTRY_INCRY_INCRX])?;
        self.interface
            .cmd_with_data(Cmd::SET_RAMX_START_END, &controller.ram_x_window(&geometry))?;
        self.interface
            .cmd_with_data(Cmd::SET_RAMY_START_END, &controller.ram_y_window(&geometry))?;
        self.interface.cmd_with_data(
            Cmd::BORDER_WAVEFORM_CONTROL,
            &[Flag::BORDER_WAVEFORM_FOLLOW_LUT | Flag::BORDER_WAVEFORM_LUT1],
        )?;
        if let Some(update_control_1) = controller.update_control_1 {
            self.interface
                .cmd_with_data(Cmd::DISPLAY_UPDATE_CONTROL, &update_control_1)?;
        }
        self.interface
            .cmd_with_data(controller.temp_control_cmd, &[Flag::INTERNAL_TEMP_SENSOR])?;
        if let Some(lut) = controller.lut {
            log::debug!("Writing {} byte LUT", lut.len());
            self.interface.cmd_with_data(Cmd::WRITE_LUT_REGISTER, lut)?;
        }

        self.state = PanelState::Idle;
        log::info!("{} initialization complete", controller.name);
        Ok(())
    }

    fn wait_during_init(&mut self, step: &str) -> Result<(), EpdError> {
        if let BusyWait::TimedOut { waited_ms } = self.interface.wait_until_idle()? {
            log::warn!(
                "BUSY still high {} ms after {}, continuing initialization",
                waited_ms,
                step
            );
        }
        Ok(())
    }

    /// Refuse to talk to a sleeping or uninitialized controller and settle a
    /// refresh that timed out earlier
    fn ready_for_commands(&mut self) -> Result<(), EpdError> {
        match self.state {
            PanelState::Sleeping => Err(EpdError::Asleep),
            PanelState::Uninitialized | PanelState::Resetting | PanelState::Initializing => {
                Err(EpdError::NotInitialized)
            }
            PanelState::Busy => match self.interface.wait_until_idle()? {
                BusyWait::Ready { .. } => {
                    self.state = PanelState::Idle;
                    Ok(())
                }
                BusyWait::TimedOut { waited_ms } => Err(EpdError::StillBusy { waited_ms }),
            },
            PanelState::Idle => Ok(()),
        }
    }

    /// Set RAM X and Y counters to origin (0, 0)
    fn set_ram_counters(&mut self) -> Result<(), EpdError> {
        self.interface.cmd_with_data(Cmd::SET_RAMX_COUNTER, &[0x00])?;
        self.interface
            .cmd_with_data(Cmd::SET_RAMY_COUNTER, &[0x00, 0x00])
    }

    /// Full refresh and wait for it
    fn refresh(&mut self) -> Result<BusyWait, EpdError> {
        self.interface
            .cmd_with_data(Cmd::UPDATE_DISPLAY_CTRL2, &[Flag::DISPLAY_UPDATE_FULL])?;
        self.interface.cmd(Cmd::MASTER_ACTIVATE)?;
        self.state = PanelState::Busy;

        let outcome = self.interface.wait_until_idle()?;
        if outcome.is_ready() {
            self.state = PanelState::Idle;
            log::info!("Refresh complete after {} ms", outcome.waited_ms());
        }
        Ok(outcome)
    }

    /// Upload the framebuffer and run a full refresh
    ///
    /// This is the only call that makes drawing visible. It blocks for the
    /// physical refresh, bounded by the busy-wait timeout.
    pub fn display_frame(&mut self) -> Result<BusyWait, EpdError> {
        self.ready_for_commands()?;
        log::info!(
            "Uploading frame ({} bytes)",
            self.framebuffer.as_bytes().len()
        );

        self.set_ram_counters()?;
        self.interface
            .cmd_with_data(Cmd::WRITE_BW_DATA, self.framebuffer.as_bytes())?;
        self.refresh()
    }

    /// Whiten the framebuffer and the controller RAM, then refresh
    ///
    /// Controllers with a red plane get it whitened too so it cannot bleed
    /// into the black and white image.
    pub fn clear_screen(&mut self) -> Result<BusyWait, EpdError> {
        self.ready_for_commands()?;
        log::info!("Clearing screen");
        self.framebuffer.clear();

        self.set_ram_counters()?;
        self.interface
            .cmd_with_data(Cmd::WRITE_BW_DATA, self.framebuffer.as_bytes())?;
        if self.config.controller.has_red_ram {
            self.set_ram_counters()?;
            self.interface
                .cmd_with_data(Cmd::WRITE_RED_DATA, self.framebuffer.as_bytes())?;
        }
        self.refresh()
    }

    /// Enter deep sleep. Sleeping again is a no-op.
    pub fn sleep(&mut self) -> Result<(), EpdError> {
        if self.state == PanelState::Sleeping {
            log::debug!("Already in deep sleep");
            return Ok(());
        }
        self.ready_for_commands()?;

        log::info!("Entering deep sleep");
        self.interface
            .cmd_with_data(Cmd::DEEP_SLEEP_MODE, &[Flag::DEEP_SLEEP_MODE_1])?;
        self.interface.delay_ms(SLEEP_SETTLE_MS);
        self.state = PanelState::Sleeping;
        Ok(())
    }

    /// Leave deep sleep through a full reset and re-init
    ///
    /// The framebuffer is kept, the controller RAM is not.
    pub fn wake(&mut self) -> Result<(), EpdError> {
        log::info!("Waking display from {:?}", self.state);
        self.initialize()
    }

    /// Put the controller to sleep and release the handle
    pub fn shutdown(mut self) -> Result<(), EpdError> {
        self.sleep()
    }

    /// Draw into the framebuffer through `embedded-graphics`
    pub fn canvas(&mut self) -> Canvas<'_> {
        Canvas::new(&mut self.framebuffer, self.config.orientation)
    }

    /// Convert a pixel block into the framebuffer without refreshing
    pub fn blit(&mut self, area: &Area, format: PixelFormat, pixels: &[u8]) -> Result<(), EpdError> {
        let orientation = self.config.orientation;
        let framebuffer = &mut self.framebuffer;
        let physical_height = framebuffer.geometry().height();

        convert::decode(area, format, pixels, |x, y, color| {
            let (px, py) = orientation.to_physical(x, y, physical_height);
            framebuffer.set_pixel(px, py, color);
        })
    }

    /// Take a rendered block from a graphics layer and show it
    ///
    /// `on_consumed` runs once the block is in the framebuffer, before the
    /// slow refresh, so the caller may reuse its render buffer right away.
    pub fn flush(
        &mut self,
        area: &Area,
        format: PixelFormat,
        pixels: &[u8],
        on_consumed: impl FnOnce(),
    ) -> Result<BusyWait, EpdError> {
        self.blit(area, format, pixels)?;
        on_consumed();
        self.display_frame()
    }
}

impl<SPI, BSY, DC, RST, DELAY> Epd<SPI, BSY, DC, RST, DELAY> {
    /// Set one pixel in logical coordinates; off-screen pixels are ignored
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        let (px, py) = self.to_physical(x, y);
        self.framebuffer.set_pixel(px, py, color);
    }

    /// Color of a pixel in logical coordinates
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        let (px, py) = self.to_physical(x, y);
        self.framebuffer.pixel(px, py)
    }

    /// Black rectangle between two logical corners, inclusive
    pub fn draw_rectangle(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, filled: bool) {
        let ((px0, py0), (px1, py1)) = self.config.orientation.rect_to_physical(
            (x0, y0),
            (x1, y1),
            self.framebuffer.geometry().height(),
        );
        self.framebuffer.draw_rectangle(px0, py0, px1, py1, filled);
    }

    /// Whiten the framebuffer, the panel keeps its image until the next refresh
    pub fn clear(&mut self) {
        self.framebuffer.clear();
    }

    /// Replace the framebuffer with pre-rendered RAM data
    pub fn load(&mut self, data: &[u8]) -> Result<(), EpdError> {
        self.framebuffer.load(data)
    }

    /// Read-only view of the framebuffer in controller RAM layout
    pub fn framebuffer_bytes(&self) -> &[u8] {
        self.framebuffer.as_bytes()
    }

    /// Current session state
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Physical panel geometry
    pub fn geometry(&self) -> Geometry {
        self.framebuffer.geometry()
    }

    /// Drawing area as (width, height) in logical coordinates
    pub fn logical_size(&self) -> (u16, u16) {
        self.config
            .orientation
            .logical_size(&self.framebuffer.geometry())
    }

    /// Controller descriptor in use
    pub fn controller(&self) -> &Controller {
        &self.config.controller
    }

    /// Drawing orientation
    pub fn orientation(&self) -> Orientation {
        self.config.orientation
    }

    /// Wiring this driver was configured with
    pub fn pins(&self) -> &PinBinding {
        &self.config.pins
    }

    fn to_physical(&self, x: i32, y: i32) -> (i32, i32) {
        self.config
            .orientation
            .to_physical(x, y, self.framebuffer.geometry().height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_the_weact_module() {
        let config = PanelConfig::default();
        assert_eq!(config.controller, Controller::SSD1680);
        assert_eq!(config.orientation, Orientation::Portrait);
        assert_eq!(config.pins, PinBinding::weact_default());
        assert_eq!(config.pins.spi_clock_hz, 4_000_000);
    }

    #[test]
    fn oversized_panel_fails_before_touching_the_bus() {
        use embedded_hal_mock::eh1::delay::NoopDelay;
        use embedded_hal_mock::eh1::digital::Mock as PinMock;
        use embedded_hal_mock::eh1::spi::Mock as SpiMock;

        let mut spi = SpiMock::<u8>::new(&[]);
        let mut busy = PinMock::new(&[]);
        let mut dc = PinMock::new(&[]);
        let mut rst = PinMock::new(&[]);

        let config = PanelConfig {
            controller: Controller::SSD1680.with_size(300, 250),
            ..PanelConfig::default()
        };
        let result = Epd::new(
            spi.clone(),
            busy.clone(),
            dc.clone(),
            rst.clone(),
            NoopDelay,
            config,
        );
        assert!(matches!(
            result,
            Err(EpdError::Geometry {
                width: 300,
                height: 250
            })
        ));

        spi.done();
        busy.done();
        dc.done();
        rst.done();
    }
}

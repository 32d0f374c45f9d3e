//! WeAct 2.13" e-paper demo for the ESP32-S3 DevKit
//!
//! Clears the panel, draws orientation marks in the four corners, a title, a
//! filled and an outlined rectangle, refreshes once and puts the panel to sleep.

#[cfg(target_os = "espidf")]
mod demo {
    use anyhow::{anyhow, Context};

    use embedded_graphics::mono_font::{iso_8859_15::FONT_10X20, MonoTextStyle};
    use embedded_graphics::pixelcolor::BinaryColor;
    use embedded_graphics::prelude::*;
    use embedded_graphics::text::{Alignment, Text};

    use esp_idf_svc::hal::delay::Delay;
    use esp_idf_svc::hal::gpio::{self, Pull};
    use esp_idf_svc::hal::peripherals::Peripherals;
    use esp_idf_svc::hal::prelude::*;
    use esp_idf_svc::hal::spi;

    use weact_epaper::{BusyWait, Color, Epd, EpdError, PanelConfig, PinBinding};

    /// Length of the corner marks in pixels
    const MARK: i32 = 10;

    fn epd_error(error: EpdError) -> anyhow::Error {
        anyhow!("e-paper: {error}")
    }

    fn report(step: &str, outcome: BusyWait) {
        match outcome {
            BusyWait::Ready { waited_ms } => log::info!("{} done in {} ms", step, waited_ms),
            BusyWait::TimedOut { waited_ms } => {
                log::warn!("{} still busy after {} ms", step, waited_ms)
            }
        }
    }

    pub fn run() -> anyhow::Result<()> {
        // It is necessary to call this function once. Otherwise some patches to the runtime
        // implemented by esp-idf-sys might not link properly. See https://github.com/esp-rs/esp-idf-template/issues/71
        esp_idf_svc::sys::link_patches();

        // Bind the log crate to the ESP Logging facilities
        esp_idf_svc::log::EspLogger::initialize_default();

        log::info!("Starting WeAct E-Paper demo");

        let peripherals = Peripherals::take().context("Could not take peripherals")?;
        let pins = peripherals.pins;
        let config = PanelConfig {
            pins: PinBinding::weact_default(),
            ..PanelConfig::default()
        };

        // GPIO numbers below follow PinBinding::weact_default()
        log::info!("Configuring SPI at {} Hz", config.pins.spi_clock_hz);
        let spi = spi::SpiDeviceDriver::new_single(
            peripherals.spi2,
            pins.gpio6,                    // SCK
            pins.gpio7,                    // MOSI
            Option::<gpio::AnyIOPin>::None, // No MISO needed for display
            Some(pins.gpio10),             // CS
            &spi::SpiDriverConfig::new(),
            &spi::SpiConfig::new().baudrate(config.pins.spi_clock_hz.Hz().into()),
        )
        .context("Could not create SPI device driver")?;

        let mut busy = gpio::PinDriver::input(pins.gpio18).context("BUSY pin")?;
        busy.set_pull(Pull::Up).context("BUSY pull-up")?;
        let dc = gpio::PinDriver::output(pins.gpio9).context("DC pin")?;
        let rst = gpio::PinDriver::output(pins.gpio4).context("RST pin")?;

        let mut epd =
            Epd::new(spi, busy, dc, rst, Delay::default(), config).map_err(epd_error)?;

        report("Clear", epd.clear_screen().map_err(epd_error)?);

        let (width, height) = epd.logical_size();
        let (right, bottom) = (i32::from(width) - 1, i32::from(height) - 1);

        // Corner marks: a short line along each edge, so rotation mistakes show
        for (x, y, dx, dy) in [
            (0, 0, 1, 1),
            (right, 0, -1, 1),
            (0, bottom, 1, -1),
            (right, bottom, -1, -1),
        ] {
            for i in 0..MARK {
                epd.set_pixel(x + dx * i, y, Color::Black);
                epd.set_pixel(x, y + dy * i, Color::Black);
            }
        }

        let style = MonoTextStyle::new(&FONT_10X20, BinaryColor::On);
        let center = i32::from(width) / 2;
        Text::with_alignment("WeAct", Point::new(center, 30), style, Alignment::Center)
            .draw(&mut epd.canvas())?;
        Text::with_alignment(
            "E-Paper",
            Point::new(center, 52),
            style,
            Alignment::Center,
        )
        .draw(&mut epd.canvas())?;

        // Filled block at the bottom, outlined frame around the middle
        epd.draw_rectangle(center - 40, bottom - 70, center + 39, bottom - 11, true);
        epd.draw_rectangle(10, 70, right - 10, bottom - 90, false);

        report("Refresh", epd.display_frame().map_err(epd_error)?);

        epd.shutdown().map_err(epd_error)?;
        log::info!("Display asleep, demo finished");
        Ok(())
    }
}

#[cfg(target_os = "espidf")]
fn main() -> anyhow::Result<()> {
    demo::run()
}

#[cfg(not(target_os = "espidf"))]
fn main() {
    eprintln!("weact-epaper drives real hardware and only runs on ESP-IDF targets");
}

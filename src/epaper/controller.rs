//! Controller descriptors
//!
//! The WeAct 2.13" module shipped with two controller generations that speak
//! the same register protocol with small differences: reset timing, the
//! temperature sensor opcode, whether Display Update Control 1 is needed, and
//! whether a waveform LUT has to be uploaded. A [`Controller`] value carries
//! those differences so a single driver handles both.

use super::cmd::Cmd;
use super::error::EpdError;
use super::flag::Flag;
use super::framebuffer::Geometry;
use super::{HEIGHT, WIDTH};

/// Full refresh LUT for the SSD1675, which has no usable waveform in OTP
///
/// 5 voltage rows of 7 phases followed by 7 timing groups of 5 bytes.
pub const SSD1675_LUT_FULL_UPDATE: [u8; 70] = [
    0x80, 0x60, 0x40, 0x00, 0x00, 0x00, 0x00, // LUT0: Phase A
    0x10, 0x60, 0x20, 0x00, 0x00, 0x00, 0x00, // LUT1: Phase B
    0x80, 0x60, 0x40, 0x00, 0x00, 0x00, 0x00, // LUT2: Phase C
    0x10, 0x60, 0x20, 0x00, 0x00, 0x00, 0x00, // LUT3: Phase D
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // LUT4: unused
    0x03, 0x03, 0x00, 0x00, 0x02, // TP0: frame timing
    0x09, 0x09, 0x00, 0x00, 0x02, // TP1
    0x03, 0x03, 0x00, 0x00, 0x02, // TP2: gate timing
    0x00, 0x00, 0x00, 0x00, 0x00, // TP3
    0x00, 0x00, 0x00, 0x00, 0x00, // TP4
    0x00, 0x00, 0x00, 0x00, 0x00, // TP5
    0x00, 0x00, 0x00, 0x00, 0x00, // TP6
];

/// Reset line timing, in milliseconds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResetTiming {
    /// Hold time with the line released, before and after the pulse
    pub settle_ms: u32,
    /// Hold time with the line asserted (low)
    pub pulse_ms: u32,
}

/// Everything that differs between controller generations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Controller {
    /// Name used in logs
    pub name: &'static str,
    /// Panel width in pixels (source lines)
    pub width: u16,
    /// Panel height in pixels (gate lines)
    pub height: u16,
    /// Widest panel the RAM X address can cover
    pub max_width: u16,
    /// Most gate lines the controller can drive
    pub max_height: u16,
    /// Reset pulse timing
    pub reset: ResetTiming,
    /// Opcode that selects the internal temperature sensor
    pub temp_control_cmd: u8,
    /// Payload for Display Update Control 1, if the controller needs it
    pub update_control_1: Option<[u8; 2]>,
    /// Waveform to upload during init; `None` uses the one in OTP
    pub lut: Option<&'static [u8]>,
    /// Whether the red RAM plane exists and should be whitened on clear
    pub has_red_ram: bool,
}

impl Controller {
    /// SSD1680 as found on the current WeAct 2.13" (122x250 portrait)
    pub const SSD1680: Controller = Controller {
        name: "SSD1680",
        width: WIDTH,
        height: HEIGHT,
        max_width: 176,
        max_height: 296,
        reset: ResetTiming {
            settle_ms: 20,
            pulse_ms: 2,
        },
        temp_control_cmd: Cmd::TEMP_CONTROL,
        update_control_1: Some([
            Flag::DISPLAY_UPDATE_NORMAL,
            Flag::DISPLAY_UPDATE_SOURCE_S8_S167,
        ]),
        lut: None,
        has_red_ram: true,
    };

    /// SSD1675 as found on older WeAct 2.13" modules (250x122 native)
    pub const SSD1675: Controller = Controller {
        name: "SSD1675",
        width: 250,
        height: 122,
        max_width: 256,
        max_height: 296,
        reset: ResetTiming {
            settle_ms: 200,
            pulse_ms: 10,
        },
        temp_control_cmd: Cmd::TEMP_CONTROL_SSD1675,
        update_control_1: None,
        lut: Some(&SSD1675_LUT_FULL_UPDATE as &[u8]),
        has_red_ram: false,
    };

    /// Same controller driving a panel of another size
    pub const fn with_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Framebuffer geometry for this panel, if the controller can address it
    pub fn geometry(&self) -> Result<Geometry, EpdError> {
        if self.width == 0
            || self.height == 0
            || self.width > self.max_width
            || self.height > self.max_height
        {
            return Err(EpdError::Geometry {
                width: self.width,
                height: self.height,
            });
        }
        Ok(Geometry::new(self.width, self.height))
    }

    /// Driver Output Control payload: gate count minus one (9 bits, little endian)
    /// followed by the scan direction byte
    pub fn driver_output(&self, geometry: &Geometry) -> [u8; 3] {
        let last_gate = geometry.height().saturating_sub(1);
        [
            (last_gate & 0xFF) as u8,
            ((last_gate >> 8) & 0x01) as u8,
            Flag::DRIVER_OUTPUT_GATE_SCAN_FROM_G0,
        ]
    }

    /// RAM X window, in bytes
    pub fn ram_x_window(&self, geometry: &Geometry) -> [u8; 2] {
        [0x00, geometry.stride().saturating_sub(1) as u8]
    }

    /// RAM Y window, in gate lines, little endian start and end
    pub fn ram_y_window(&self, geometry: &Geometry) -> [u8; 4] {
        let last_gate = geometry.height().saturating_sub(1);
        [0x00, 0x00, (last_gate & 0xFF) as u8, (last_gate >> 8) as u8]
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::SSD1680
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ssd1680_register_payloads() {
        let controller = Controller::SSD1680;
        let geometry = controller.geometry().unwrap();

        assert_eq!(controller.driver_output(&geometry), [0xF9, 0x00, 0x00]);
        assert_eq!(controller.ram_x_window(&geometry), [0x00, 0x0F]);
        assert_eq!(controller.ram_y_window(&geometry), [0x00, 0x00, 0xF9, 0x00]);
    }

    #[test]
    fn ssd1675_register_payloads() {
        let controller = Controller::SSD1675;
        let geometry = controller.geometry().unwrap();

        assert_eq!(controller.driver_output(&geometry), [0x79, 0x00, 0x00]);
        assert_eq!(controller.ram_x_window(&geometry), [0x00, 0x1F]);
        assert_eq!(controller.ram_y_window(&geometry), [0x00, 0x00, 0x79, 0x00]);
        assert_eq!(controller.lut.map(<[u8]>::len), Some(70));
    }

    #[test]
    fn gate_count_high_bit_is_kept() {
        let controller = Controller::SSD1680.with_size(128, 296);
        let geometry = controller.geometry().unwrap();

        // 295 = 0x127
        assert_eq!(controller.driver_output(&geometry), [0x27, 0x01, 0x00]);
        assert_eq!(controller.ram_y_window(&geometry), [0x00, 0x00, 0x27, 0x01]);
    }

    #[test]
    fn rejects_panels_the_controller_cannot_address() {
        assert!(matches!(
            Controller::SSD1680.with_size(200, 250).geometry(),
            Err(EpdError::Geometry {
                width: 200,
                height: 250
            })
        ));
        assert!(Controller::SSD1680.with_size(0, 10).geometry().is_err());
        assert!(Controller::SSD1680.with_size(10, 0).geometry().is_err());
    }
}

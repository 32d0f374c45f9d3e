/// Register payloads used by the init and refresh sequences.
///
/// The values are shared by the SSD1680 and SSD1675 controllers.
pub struct Flag;
#[allow(missing_docs)]
impl Flag {
    // Driver Output Control (0x01), third byte
    pub const DRIVER_OUTPUT_GATE_SCAN_FROM_G0: u8 = 0x00;

    // Data Entry Mode (0x11) flags
    pub const DATA_ENTRY_INCRY_INCRX: u8 = 0x03; // Y increment, X increment, X first

    // Deep Sleep Mode (0x10) flags
    pub const DEEP_SLEEP_MODE_1: u8 = 0x01; // RAM retained

    // Temperature Sensor Control (0x18) flags
    pub const INTERNAL_TEMP_SENSOR: u8 = 0x80;

    // Display Update Control 1 (0x21): normal RAM content, source output S8..S167
    pub const DISPLAY_UPDATE_NORMAL: u8 = 0x00;
    pub const DISPLAY_UPDATE_SOURCE_S8_S167: u8 = 0x80;

    // Display Update Control 2 (0x22)
    pub const DISPLAY_UPDATE_FULL: u8 = 0xF7; // clock, analog, temp, LUT, display mode 1, power off

    // Border Waveform Control (0x3C) flags
    pub const BORDER_WAVEFORM_FOLLOW_LUT: u8 = 0x04;
    pub const BORDER_WAVEFORM_LUT1: u8 = 0x01;

    // RAM byte patterns
    pub const RAM_ALL_WHITE: u8 = 0xFF;
    pub const RAM_ALL_BLACK: u8 = 0x00;
}

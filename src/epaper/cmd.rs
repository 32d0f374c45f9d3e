pub struct Cmd;
impl Cmd {
    // Init
    pub const DRIVER_CONTROL: u8 = 0x01;
    pub const DEEP_SLEEP_MODE: u8 = 0x10;
    pub const DATA_ENTRY_MODE: u8 = 0x11;
    pub const SW_RESET: u8 = 0x12;
    pub const TEMP_CONTROL: u8 = 0x18;
    pub const DISPLAY_UPDATE_CONTROL: u8 = 0x21;
    pub const WRITE_LUT_REGISTER: u8 = 0x32;
    pub const BORDER_WAVEFORM_CONTROL: u8 = 0x3C;
    pub const SET_RAMX_START_END: u8 = 0x44;
    pub const SET_RAMY_START_END: u8 = 0x45;

    // SSD1675 reuses the temperature register write for sensor selection
    pub const TEMP_CONTROL_SSD1675: u8 = 0x1A;

    // Update
    pub const SET_RAMX_COUNTER: u8 = 0x4E;
    pub const SET_RAMY_COUNTER: u8 = 0x4F;
    pub const WRITE_BW_DATA: u8 = 0x24;
    pub const WRITE_RED_DATA: u8 = 0x26;
    pub const UPDATE_DISPLAY_CTRL2: u8 = 0x22;
    pub const MASTER_ACTIVATE: u8 = 0x20;
}

/*
Both WeAct generations share this set:
0x12 - Software Reset
0x01 - Driver Output Control
0x11 - Data Entry Mode
0x18 - Temperature Sensor Control (0x1A on SSD1675)
0x3C - Border Waveform Control
0x21 - Display Update Control 1 (SSD1680 only)
0x22 - Display Update Control 2
0x20 - Master Activation
0x32 - Write LUT (SSD1675 only)
0x44 - Set RAM X Address Start/End
0x45 - Set RAM Y Address Start/End
0x4E - Set RAM X Address Counter
0x4F - Set RAM Y Address Counter
0x24 - Write RAM (black/white)
0x26 - Write RAM (red)
0x10 - Deep Sleep Mode
*/

//! SSD1306 command encoding
//!
//! Every I2C transaction starts with a control byte. `0x00` marks the rest
//! of the transaction as command bytes; `0x40` marks it as GDDRAM data.
//!
//! ```text
//! command frame: [0x00, opcode, param...]   2-3 bytes
//! data frame:    [0x40, column 0 .. column 127]   129 bytes
//! ```

use crate::config::PanelConfig;
use crate::framebuffer::{HEIGHT, WIDTH};

/// Control byte: the following bytes are commands
pub const CONTROL_COMMAND: u8 = 0x00;

/// Control byte: the following bytes are display data
pub const CONTROL_DATA: u8 = 0x40;

/// Size of one page data frame
pub const DATA_FRAME_LEN: usize = WIDTH + 1;

/// Number of commands in the power-up sequence
pub const INIT_SEQUENCE_LEN: usize = 16;

/// SSD1306 opcodes
pub mod opcode {
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
    pub const SET_SEG_REMAP: u8 = 0xA0;
    pub const DISPLAY_FOLLOW_RAM: u8 = 0xA4;
    pub const DISPLAY_ALL_ON: u8 = 0xA5;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_PAGE_START: u8 = 0xB0;
    pub const SET_COM_SCAN_INC: u8 = 0xC0;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOMH_DESELECT: u8 = 0xDB;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
}

/// GDDRAM addressing mode (0x20 parameter)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressingMode {
    Horizontal = 0x00,
    Vertical = 0x01,
    Page = 0x02,
}

/// A single SSD1306 command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Panel on (`true`) or sleep (`false`)
    DisplayOn(bool),
    /// Clock divide ratio / oscillator frequency
    ClockDivider(u8),
    /// Multiplex ratio, in lines minus one
    MultiplexRatio(u8),
    /// Vertical display offset
    DisplayOffset(u8),
    /// RAM row mapped to the top of the panel (0-63)
    StartLine(u8),
    /// Internal charge pump
    ChargePump(bool),
    /// GDDRAM addressing mode
    AddressingMode(AddressingMode),
    /// Column 127 mapped to SEG0
    SegmentRemap(bool),
    /// COM scan from COM[N-1] down to COM0
    ComScanReversed(bool),
    /// COM pins hardware configuration
    ComPins(u8),
    /// Contrast (0-255)
    Contrast(u8),
    /// Pre-charge period
    Precharge(u8),
    /// VCOMH deselect level
    VcomhDeselect(u8),
    /// Light every pixel regardless of RAM (`false` follows RAM)
    EntireDisplayOn(bool),
    /// Inverse video
    Invert(bool),
    /// Page pointer for page addressing (0-7)
    PageStart(u8),
    /// Lower nibble of the column pointer
    LowerColumn(u8),
    /// Upper nibble of the column pointer
    UpperColumn(u8),
}

impl Command {
    /// Encode into a wire frame, control byte included
    pub const fn frame(self) -> CommandFrame {
        match self {
            Command::DisplayOn(on) => {
                CommandFrame::op(if on { opcode::DISPLAY_ON } else { opcode::DISPLAY_OFF })
            }
            Command::ClockDivider(v) => CommandFrame::op_param(opcode::SET_CLOCK_DIV, v),
            Command::MultiplexRatio(v) => CommandFrame::op_param(opcode::SET_MUX_RATIO, v),
            Command::DisplayOffset(v) => CommandFrame::op_param(opcode::SET_DISPLAY_OFFSET, v),
            Command::StartLine(line) => {
                CommandFrame::op(opcode::SET_START_LINE | (line & 0x3F))
            }
            Command::ChargePump(on) => {
                CommandFrame::op_param(opcode::SET_CHARGE_PUMP, if on { 0x14 } else { 0x10 })
            }
            Command::AddressingMode(mode) => {
                CommandFrame::op_param(opcode::SET_MEMORY_MODE, mode as u8)
            }
            Command::SegmentRemap(remap) => {
                CommandFrame::op(opcode::SET_SEG_REMAP | remap as u8)
            }
            Command::ComScanReversed(reversed) => CommandFrame::op(if reversed {
                opcode::SET_COM_SCAN_DEC
            } else {
                opcode::SET_COM_SCAN_INC
            }),
            Command::ComPins(v) => CommandFrame::op_param(opcode::SET_COM_PINS, v),
            Command::Contrast(v) => CommandFrame::op_param(opcode::SET_CONTRAST, v),
            Command::Precharge(v) => CommandFrame::op_param(opcode::SET_PRECHARGE, v),
            Command::VcomhDeselect(v) => CommandFrame::op_param(opcode::SET_VCOMH_DESELECT, v),
            Command::EntireDisplayOn(on) => CommandFrame::op(if on {
                opcode::DISPLAY_ALL_ON
            } else {
                opcode::DISPLAY_FOLLOW_RAM
            }),
            Command::Invert(inverted) => {
                CommandFrame::op(if inverted { opcode::SET_INVERSE } else { opcode::SET_NORMAL })
            }
            Command::PageStart(page) => CommandFrame::op(opcode::SET_PAGE_START + (page & 0x07)),
            Command::LowerColumn(col) => CommandFrame::op(opcode::SET_LOW_COLUMN | (col & 0x0F)),
            Command::UpperColumn(col) => {
                CommandFrame::op(opcode::SET_HIGH_COLUMN | (col & 0x0F))
            }
        }
    }
}

/// Encoded command frame, at most 3 bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandFrame {
    bytes: [u8; 3],
    len: u8,
}

impl CommandFrame {
    const fn op(opcode: u8) -> Self {
        Self {
            bytes: [CONTROL_COMMAND, opcode, 0],
            len: 2,
        }
    }

    const fn op_param(opcode: u8, param: u8) -> Self {
        Self {
            bytes: [CONTROL_COMMAND, opcode, param],
            len: 3,
        }
    }

    /// Bytes to put on the wire
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }
}

/// Power-up sequence for a 128x64 panel
///
/// Addressing mode is set before any data transfer, and the panel is only
/// switched on as the last step.
pub const fn init_sequence(config: &PanelConfig) -> [Command; INIT_SEQUENCE_LEN] {
    [
        Command::DisplayOn(false),
        Command::ClockDivider(config.clock_divider),
        Command::MultiplexRatio((HEIGHT - 1) as u8),
        Command::DisplayOffset(0),
        Command::StartLine(0),
        Command::ChargePump(true),
        Command::AddressingMode(AddressingMode::Horizontal),
        Command::SegmentRemap(config.segment_remap),
        Command::ComScanReversed(config.com_scan_reversed),
        Command::ComPins(config.com_pins),
        Command::Contrast(config.contrast),
        Command::Precharge(config.precharge),
        Command::VcomhDeselect(config.vcomh_deselect),
        Command::EntireDisplayOn(false),
        Command::Invert(config.inverted),
        Command::DisplayOn(true),
    ]
}

/// Commands that point the panel at column 0 of `page`
pub const fn page_select(page: u8) -> [Command; 3] {
    [
        Command::PageStart(page),
        Command::LowerColumn(0),
        Command::UpperColumn(0),
    ]
}

/// Data frame carrying one full page
pub fn data_frame(page: &[u8; WIDTH]) -> [u8; DATA_FRAME_LEN] {
    let mut frame = [0u8; DATA_FRAME_LEN];
    frame[0] = CONTROL_DATA;
    frame[1..].copy_from_slice(page);
    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_init_sequence_bytes() {
        let expected: [&[u8]; INIT_SEQUENCE_LEN] = [
            &[0x00, 0xAE],
            &[0x00, 0xD5, 0x80],
            &[0x00, 0xA8, 0x3F],
            &[0x00, 0xD3, 0x00],
            &[0x00, 0x40],
            &[0x00, 0x8D, 0x14],
            &[0x00, 0x20, 0x00],
            &[0x00, 0xA1],
            &[0x00, 0xC8],
            &[0x00, 0xDA, 0x12],
            &[0x00, 0x81, 0x7F],
            &[0x00, 0xD9, 0xF1],
            &[0x00, 0xDB, 0x40],
            &[0x00, 0xA4],
            &[0x00, 0xA6],
            &[0x00, 0xAF],
        ];

        let sequence = init_sequence(&PanelConfig::default());
        for (cmd, bytes) in sequence.iter().zip(expected.iter()) {
            assert_eq!(cmd.frame().as_bytes(), *bytes, "{:?}", cmd);
        }
    }

    #[test]
    fn test_init_sequence_follows_config() {
        let config = PanelConfig::new().with_contrast(0xCF).with_inverted(true);
        let sequence = init_sequence(&config);

        assert_eq!(sequence[10].frame().as_bytes(), &[0x00, 0x81, 0xCF]);
        assert_eq!(sequence[14].frame().as_bytes(), &[0x00, 0xA7]);
    }

    #[test]
    fn test_page_select_bytes() {
        for page in 0..8u8 {
            let cmds = page_select(page);
            assert_eq!(cmds[0].frame().as_bytes(), &[0x00, 0xB0 + page]);
            assert_eq!(cmds[1].frame().as_bytes(), &[0x00, 0x00]);
            assert_eq!(cmds[2].frame().as_bytes(), &[0x00, 0x10]);
        }
    }

    #[test]
    fn test_unflipped_orientation() {
        assert_eq!(Command::SegmentRemap(false).frame().as_bytes(), &[0x00, 0xA0]);
        assert_eq!(Command::ComScanReversed(false).frame().as_bytes(), &[0x00, 0xC0]);
    }

    #[test]
    fn test_charge_pump_off() {
        assert_eq!(Command::ChargePump(false).frame().as_bytes(), &[0x00, 0x8D, 0x10]);
    }

    #[test]
    fn test_data_frame() {
        let mut page = [0u8; WIDTH];
        page[0] = 0xAA;
        page[127] = 0x55;

        let frame = data_frame(&page);
        assert_eq!(frame.len(), 129);
        assert_eq!(frame[0], 0x40);
        assert_eq!(frame[1], 0xAA);
        assert_eq!(frame[128], 0x55);
    }
}

//! Panel configuration
//!
//! Values written by the SSD1306 power-up sequence. The defaults match a
//! common 0.96" 128x64 I2C module with the internal charge pump.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default 7-bit I2C address (SA0 low)
pub const OLED_ADDRESS: u8 = 0x3C;

/// Alternate 7-bit I2C address (SA0 high)
pub const OLED_ADDRESS_ALT: u8 = 0x3D;

/// SSD1306 panel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelConfig {
    /// 7-bit I2C address of the panel
    pub address: u8,
    /// Display clock divide ratio / oscillator frequency (0xD5 parameter)
    pub clock_divider: u8,
    /// Contrast (0-255)
    pub contrast: u8,
    /// Pre-charge period (0xD9 parameter)
    pub precharge: u8,
    /// VCOMH deselect level (0xDB parameter)
    pub vcomh_deselect: u8,
    /// COM pins hardware configuration (0xDA parameter)
    pub com_pins: u8,
    /// Map column 127 to SEG0 (horizontal flip)
    pub segment_remap: bool,
    /// Scan COM[N-1] to COM0 (vertical flip)
    pub com_scan_reversed: bool,
    /// Start with lit pixels dark and dark pixels lit
    pub inverted: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelConfig {
    /// Default configuration at [`OLED_ADDRESS`]
    pub const fn new() -> Self {
        Self {
            address: OLED_ADDRESS,
            clock_divider: 0x80,
            contrast: 0x7F,
            precharge: 0xF1,
            vcomh_deselect: 0x40,
            com_pins: 0x12,
            segment_remap: true,
            com_scan_reversed: true,
            inverted: false,
        }
    }

    /// Use a different bus address
    pub const fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Use a different contrast level
    pub const fn with_contrast(mut self, contrast: u8) -> Self {
        self.contrast = contrast;
        self
    }

    /// Start the panel inverted
    pub const fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }
}

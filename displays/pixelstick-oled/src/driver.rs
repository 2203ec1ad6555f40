//! SSD1306 OLED Display Driver
//!
//! Driver for 128x64 SSD1306-based OLED displays via I2C.
//!
//! [`Ssd1306`] owns the bus, the panel configuration and a full
//! [`Framebuffer`]. Drawing calls only touch the framebuffer; the panel is
//! refreshed by [`update()`](Ssd1306::update), which always transfers all 8
//! pages. Some primitives (`clear`, `draw_square`, `draw_string`) refresh
//! the panel themselves, others (`draw_pixel`, `draw_border`) leave that to
//! the caller so several shapes can be batched into one transfer.
//!
//! # Lifecycle
//!
//! 1. [`Ssd1306::new()`]: takes the bus, no I2C traffic.
//! 2. [`Ssd1306::init()`]: power-up sequence, then a blank frame.
//! 3. Draw, then [`Ssd1306::update()`].

use pixelstick_hal::I2cBus;

use crate::command::{data_frame, init_sequence, page_select, Command};
use crate::config::PanelConfig;
use crate::error::OledError;
use crate::framebuffer::{BorderStyle, Framebuffer};

/// Horizontal cursor advance per character (5 px glyph + 1 px spacing)
pub const CHAR_ADVANCE: u16 = 6;

/// SSD1306 OLED driver
pub struct Ssd1306<B> {
    bus: B,
    config: PanelConfig,
    /// Frame buffer (1 bit per pixel, organized as pages)
    buffer: Framebuffer,
    /// Set once the power-up sequence has been sent
    initialized: bool,
}

impl<B> Ssd1306<B>
where
    B: I2cBus,
{
    /// Create a driver with the default [`PanelConfig`]
    pub fn new(bus: B) -> Self {
        Self::with_config(bus, PanelConfig::default())
    }

    /// Create a driver with a custom panel configuration
    ///
    /// No I2C traffic is generated until [`init()`](Self::init).
    pub fn with_config(bus: B, config: PanelConfig) -> Self {
        Self {
            bus,
            config,
            buffer: Framebuffer::new(),
            initialized: false,
        }
    }

    /// Initialize the display
    ///
    /// Sends the power-up sequence one command per transaction, then clears
    /// the framebuffer and pushes the blank frame. Calling it again re-runs
    /// the whole sequence and clears the screen again.
    ///
    /// # Errors
    ///
    /// [`OledError::Bus`] on the first failed write; the driver is left
    /// uninitialized.
    pub fn init(&mut self) -> Result<(), OledError<B::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("SSD1306 init at {=u8:#x}", self.config.address);

        self.initialized = false;
        for command in init_sequence(&self.config) {
            self.command(command)?;
        }

        self.initialized = true;
        self.buffer.clear();
        if let Err(e) = self.update() {
            self.initialized = false;
            return Err(e);
        }

        #[cfg(feature = "defmt")]
        defmt::info!("SSD1306 initialized");
        Ok(())
    }

    /// Clear the framebuffer and push the blank frame
    pub fn clear(&mut self) -> Result<(), OledError<B::Error>> {
        self.buffer.clear();
        self.update()
    }

    /// Transfer the whole framebuffer to the panel
    ///
    /// For each page: select the page, reset the column pointer to 0, then
    /// send the 128 column bytes in one data frame.
    pub fn update(&mut self) -> Result<(), OledError<B::Error>> {
        self.ensure_initialized()?;

        let address = self.config.address;
        for (page, bytes) in self.buffer.pages() {
            for command in page_select(page) {
                Self::write_to(&mut self.bus, address, command.frame().as_bytes())?;
            }
            Self::write_to(&mut self.bus, address, &data_frame(bytes))?;
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("SSD1306 frame sent");
        Ok(())
    }

    /// Set or clear one pixel in the framebuffer
    ///
    /// Out-of-bounds coordinates are ignored. The panel is not refreshed.
    pub fn draw_pixel(&mut self, x: u16, y: u16, on: bool) {
        self.buffer.set_pixel(x, y, on);
    }

    /// Fill `[x, x + width) × [y, y + height)`, then refresh the panel
    ///
    /// Cells outside the panel are dropped.
    pub fn draw_square(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
    ) -> Result<(), OledError<B::Error>> {
        self.buffer.fill_rect(x, y, width, height);
        self.update()
    }

    /// Draw a panel-edge border on top of the current content
    ///
    /// Neither clears nor refreshes.
    pub fn draw_border(&mut self, style: BorderStyle) {
        self.buffer.draw_border(style);
    }

    /// Show only a border: clear, draw it, refresh
    pub fn set_border(&mut self, style: BorderStyle) -> Result<(), OledError<B::Error>> {
        self.clear()?;
        self.draw_border(style);
        self.update()
    }

    /// Advance a text cursor over `text`, then refresh the panel
    ///
    /// No glyphs are rasterized: the cursor moves [`CHAR_ADVANCE`] pixels
    /// per character and nothing is drawn. `y` is accepted for the future
    /// glyph renderer. Returns the cursor x after the last character.
    pub fn draw_string(
        &mut self,
        x: u16,
        _y: u16,
        text: &str,
    ) -> Result<u16, OledError<B::Error>> {
        let cursor = text
            .chars()
            .fold(x, |cursor, _| cursor.saturating_add(CHAR_ADVANCE));
        self.update()?;
        Ok(cursor)
    }

    /// Clear the screen and write `text` at the origin
    pub fn display_message(&mut self, text: &str) -> Result<(), OledError<B::Error>> {
        self.clear()?;
        self.draw_string(0, 0, text)?;
        self.update()
    }

    /// Set display contrast (0-255)
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), OledError<B::Error>> {
        self.ensure_initialized()?;
        self.command(Command::Contrast(contrast))?;
        self.config.contrast = contrast;
        Ok(())
    }

    /// Turn display on/off
    pub fn set_display_on(&mut self, on: bool) -> Result<(), OledError<B::Error>> {
        self.ensure_initialized()?;
        self.command(Command::DisplayOn(on))
    }

    /// Invert display colors
    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), OledError<B::Error>> {
        self.ensure_initialized()?;
        self.command(Command::Invert(inverted))?;
        self.config.inverted = inverted;
        Ok(())
    }

    /// The framebuffer as last drawn
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.buffer
    }

    /// Mutable framebuffer, e.g. for embedded-graphics drawing
    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer {
        &mut self.buffer
    }

    /// Current panel configuration
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Whether [`init()`](Self::init) has completed
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Give the bus back
    pub fn release(self) -> B {
        self.bus
    }

    fn ensure_initialized(&self) -> Result<(), OledError<B::Error>> {
        if self.initialized {
            Ok(())
        } else {
            #[cfg(feature = "defmt")]
            defmt::warn!("SSD1306 transfer before init");
            Err(OledError::NotInitialized)
        }
    }

    /// Send a command to the display
    fn command(&mut self, command: Command) -> Result<(), OledError<B::Error>> {
        self.write(command.frame().as_bytes())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), OledError<B::Error>> {
        Self::write_to(&mut self.bus, self.config.address, bytes)
    }

    fn write_to(bus: &mut B, address: u8, bytes: &[u8]) -> Result<(), OledError<B::Error>> {
        bus.write(address, bytes).map_err(|e| {
            #[cfg(feature = "defmt")]
            defmt::warn!("SSD1306 write of {} bytes failed", bytes.len());
            OledError::Bus(e)
        })
    }
}

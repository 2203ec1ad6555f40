//! SSD1306 128x64 OLED driver for pixelstick
//!
//! This crate provides:
//! - [`Framebuffer`]: the 1024-byte packed bitmap, with pixel, rectangle and
//!   border primitives that silently clip at the panel edge
//! - [`Ssd1306`]: the blocking I2C driver that owns the bus and framebuffer,
//!   runs the power-up sequence and pushes full frames page by page
//! - [`command`]: the wire encoding of every command the driver sends
//! - an embedded-graphics `DrawTarget` for [`Framebuffer`]
//!
//! # Quick Start
//!
//! ```ignore
//! use pixelstick_hal::HalI2c;
//! use pixelstick_oled::{BorderStyle, Ssd1306};
//!
//! let mut oled = Ssd1306::new(HalI2c::new(i2c));
//! oled.init()?;
//!
//! // Once per loop iteration
//! oled.clear()?;
//! oled.draw_square(x, y, 8, 8)?;
//! oled.draw_border(BorderStyle::Solid);
//! oled.update()?;
//! ```
//!
//! # Crate Features
//!
//! - **`defmt`**: structured logging and `defmt::Format` derives.
//! - **`serde`**: `Serialize`/`Deserialize` for [`PanelConfig`].

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod config;
pub mod driver;
pub mod error;
pub mod framebuffer;
pub mod graphics;

// Re-export key types
pub use config::{PanelConfig, OLED_ADDRESS, OLED_ADDRESS_ALT};
pub use driver::{Ssd1306, CHAR_ADVANCE};
pub use error::OledError;
pub use framebuffer::{BorderStyle, Framebuffer, BUFFER_SIZE, HEIGHT, PAGES, WIDTH};

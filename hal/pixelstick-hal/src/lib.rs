//! pixelstick Hardware Abstraction Layer
//!
//! Defines the bus traits the display driver is written against. A board
//! crate sets up the peripheral (pins, clock speed) and hands the driver
//! something implementing [`I2cBus`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  pixelstick-oled (SSD1306 driver)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pixelstick-hal (this crate - traits)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  any embedded-hal 1.0 I2C (via HalI2c)  │
//! └─────────────────────────────────────────┘
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod i2c;

pub use i2c::{HalI2c, I2cBus, I2cBusError};

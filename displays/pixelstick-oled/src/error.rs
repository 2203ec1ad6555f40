//! Error types for the OLED display driver.

/// Errors that can occur during OLED panel transfers.
///
/// Drawing into the framebuffer never fails; out-of-bounds pixels are
/// dropped. Only operations that talk to the panel return this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OledError<E> {
    /// A bus write failed. The rest of the operation's frames were not sent
    /// and the framebuffer is unchanged.
    Bus(E),
    /// A panel transfer was attempted before
    /// [`Ssd1306::init()`](crate::Ssd1306::init) succeeded.
    NotInitialized,
}

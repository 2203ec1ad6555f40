//! embedded-graphics support
//!
//! [`Framebuffer`] is a [`DrawTarget`] for [`BinaryColor`], so primitives and
//! images from embedded-graphics can be drawn into it and pushed with
//! [`Ssd1306::update()`](crate::Ssd1306::update).

use core::convert::Infallible;

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Size};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::Pixel;

use crate::framebuffer::{Framebuffer, HEIGHT, WIDTH};

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for Framebuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            // Negative coordinates fail the conversion and are dropped like
            // any other off-panel pixel
            if let (Ok(x), Ok(y)) = (u16::try_from(point.x), u16::try_from(point.y)) {
                self.set_pixel(x, y, color.is_on());
            }
        }
        Ok(())
    }
}

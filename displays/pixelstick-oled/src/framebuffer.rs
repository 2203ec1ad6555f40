//! Packed 1-bit framebuffer
//!
//! The buffer mirrors the SSD1306 GDDRAM layout: 8 pages of 128 columns,
//! each byte holding 8 vertically stacked pixels. Byte `(y / 8) * 128 + x`
//! holds column `x` of page `y / 8`, and bit `y % 8` is the pixel (bit 0 is
//! the top row of the page).
//!
//! Every drawing operation silently drops out-of-bounds pixels. Shapes that
//! cross the panel edge are clipped one pixel at a time.

/// Panel width in pixels
pub const WIDTH: usize = 128;

/// Panel height in pixels
pub const HEIGHT: usize = 64;

/// Number of 8-row pages
pub const PAGES: usize = HEIGHT / 8;

/// Framebuffer size in bytes
pub const BUFFER_SIZE: usize = WIDTH * PAGES;

/// Border drawing style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BorderStyle {
    /// Every edge pixel lit
    #[default]
    Solid,
    /// Every other edge pixel lit, starting at index 0
    Dotted,
}

impl BorderStyle {
    /// Distance between lit pixels along an edge
    const fn step(self) -> usize {
        match self {
            BorderStyle::Solid => 1,
            BorderStyle::Dotted => 2,
        }
    }
}

impl From<bool> for BorderStyle {
    /// `true` selects a solid border, `false` a dotted one
    fn from(solid: bool) -> Self {
        if solid {
            BorderStyle::Solid
        } else {
            BorderStyle::Dotted
        }
    }
}

/// 128x64 monochrome bitmap in page order
#[derive(Clone, PartialEq, Eq)]
pub struct Framebuffer {
    pages: [[u8; WIDTH]; PAGES],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Framebuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let lit = self.as_bytes().iter().map(|b| b.count_ones()).sum::<u32>();
        f.debug_struct("Framebuffer").field("lit", &lit).finish()
    }
}

impl Framebuffer {
    /// Create an all-off framebuffer
    pub const fn new() -> Self {
        Self {
            pages: [[0; WIDTH]; PAGES],
        }
    }

    /// Page, column and bit mask for an in-bounds pixel
    fn locate(x: u16, y: u16) -> Option<(usize, usize, u8)> {
        let (x, y) = (x as usize, y as usize);
        if x >= WIDTH || y >= HEIGHT {
            return None;
        }
        Some((y / 8, x, 1 << (y % 8)))
    }

    /// Set (`on`) or clear a single pixel
    ///
    /// Out-of-bounds coordinates are ignored.
    pub fn set_pixel(&mut self, x: u16, y: u16, on: bool) {
        let Some((page, column, mask)) = Self::locate(x, y) else {
            return;
        };

        let byte = &mut self.pages[page][column];
        if on {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
    }

    /// Read a single pixel; out-of-bounds pixels read as off
    pub fn pixel(&self, x: u16, y: u16) -> bool {
        Self::locate(x, y)
            .is_some_and(|(page, column, mask)| self.pages[page][column] & mask != 0)
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        for page in self.pages.iter_mut() {
            page.fill(0);
        }
    }

    /// Light every in-bounds pixel of `[x, x + width) × [y, y + height)`
    pub fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16) {
        for dx in 0..width {
            for dy in 0..height {
                // Overflowed cells saturate out of bounds, never wrap
                self.set_pixel(x.saturating_add(dx), y.saturating_add(dy), true);
            }
        }
    }

    /// Light the outline along all four panel edges
    ///
    /// Existing content is kept.
    pub fn draw_border(&mut self, style: BorderStyle) {
        let step = style.step();
        let (right, bottom) = ((WIDTH - 1) as u16, (HEIGHT - 1) as u16);

        for x in (0..WIDTH as u16).step_by(step) {
            self.set_pixel(x, 0, true);
            self.set_pixel(x, bottom, true);
        }
        for y in (0..HEIGHT as u16).step_by(step) {
            self.set_pixel(0, y, true);
            self.set_pixel(right, y, true);
        }
    }

    /// One page (8 rows) of column bytes
    ///
    /// # Panics
    /// If `index >= PAGES`.
    pub fn page(&self, index: usize) -> &[u8; WIDTH] {
        &self.pages[index]
    }

    /// Iterate pages in transfer order (0 to 7)
    pub fn pages(&self) -> impl Iterator<Item = (u8, &[u8; WIDTH])> + '_ {
        self.pages.iter().enumerate().map(|(p, bytes)| (p as u8, bytes))
    }

    /// Raw buffer in GDDRAM order, `BUFFER_SIZE` bytes long
    pub fn as_bytes(&self) -> &[u8] {
        self.pages.as_flattened()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit_count(fb: &Framebuffer) -> u32 {
        fb.as_bytes().iter().map(|b| b.count_ones()).sum()
    }

    #[test]
    fn test_new_buffer_is_blank() {
        let fb = Framebuffer::new();
        assert_eq!(fb.as_bytes().len(), 1024);
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_pixel_packing() {
        let mut fb = Framebuffer::new();
        fb.set_pixel(10, 20, true);

        // (20 / 8) * 128 + 10
        assert_eq!(fb.as_bytes()[266], 0x10);
        assert_eq!(fb.page(2)[10], 1 << (20 % 8));
        assert_eq!(lit_count(&fb), 1);
        assert!(fb.pixel(10, 20));
    }

    #[test]
    fn test_pixel_clear_keeps_neighbours() {
        let mut fb = Framebuffer::new();
        fb.set_pixel(5, 8, true);
        fb.set_pixel(5, 9, true);
        fb.set_pixel(5, 8, false);

        assert_eq!(fb.as_bytes()[128 + 5], 0b0000_0010);
    }

    #[test]
    fn test_corner_pixels() {
        let mut fb = Framebuffer::new();
        fb.set_pixel(0, 0, true);
        fb.set_pixel(127, 63, true);

        assert_eq!(fb.as_bytes()[0], 0x01);
        assert_eq!(fb.as_bytes()[BUFFER_SIZE - 1], 0x80);
    }

    #[test]
    fn test_out_of_bounds_ignored() {
        let mut fb = Framebuffer::new();
        fb.set_pixel(128, 0, true);
        fb.set_pixel(0, 64, true);
        fb.set_pixel(u16::MAX, u16::MAX, true);

        assert_eq!(lit_count(&fb), 0);
        assert!(!fb.pixel(128, 0));
    }

    #[test]
    fn test_fill_rect_full_page_column() {
        let mut fb = Framebuffer::new();
        fb.fill_rect(0, 0, 8, 8);

        assert!(fb.as_bytes()[..8].iter().all(|&b| b == 0xFF));
        assert!(fb.as_bytes()[8..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_fill_rect_clips_at_edge() {
        let mut fb = Framebuffer::new();
        fb.fill_rect(124, 60, 10, 10);

        // Only the 4x4 in-bounds corner survives
        assert_eq!(lit_count(&fb), 16);
        assert!(fb.pixel(127, 63));
        assert!(!fb.pixel(0, 0));
    }

    #[test]
    fn test_fill_rect_does_not_wrap() {
        let mut fb = Framebuffer::new();
        fb.fill_rect(u16::MAX - 1, 0, 4, 1);
        assert_eq!(lit_count(&fb), 0);
    }

    #[test]
    fn test_fill_rect_empty() {
        let mut fb = Framebuffer::new();
        fb.fill_rect(10, 10, 0, 5);
        fb.fill_rect(10, 10, 5, 0);
        assert_eq!(lit_count(&fb), 0);
    }

    #[test]
    fn test_solid_border() {
        let mut fb = Framebuffer::new();
        fb.draw_border(BorderStyle::Solid);

        for x in 0..128 {
            assert!(fb.pixel(x, 0));
            assert!(fb.pixel(x, 63));
        }
        for y in 0..64 {
            assert!(fb.pixel(0, y));
            assert!(fb.pixel(127, y));
        }
        // 2 * 128 + 2 * 64 minus the 4 shared corners
        assert_eq!(lit_count(&fb), 380);
        assert!(!fb.pixel(1, 1));
    }

    #[test]
    fn test_dotted_border() {
        let mut fb = Framebuffer::new();
        fb.draw_border(BorderStyle::Dotted);

        assert!(fb.pixel(0, 0));
        assert!(!fb.pixel(1, 0));
        assert!(fb.pixel(2, 0));
        assert!(fb.pixel(126, 63));
        assert!(!fb.pixel(127, 63));
        assert!(fb.pixel(127, 62));
        assert!(fb.pixel(0, 63));
        assert!(!fb.pixel(0, 1));
        assert!(!fb.pixel(127, 1));
        assert!(!fb.pixel(127, 0));
    }

    #[test]
    fn test_border_keeps_content() {
        let mut fb = Framebuffer::new();
        fb.set_pixel(64, 32, true);
        fb.draw_border(BorderStyle::Dotted);
        assert!(fb.pixel(64, 32));
    }

    #[test]
    fn test_border_style_from_bool() {
        assert_eq!(BorderStyle::from(true), BorderStyle::Solid);
        assert_eq!(BorderStyle::from(false), BorderStyle::Dotted);
    }

    #[test]
    fn test_clear() {
        let mut fb = Framebuffer::new();
        fb.draw_border(BorderStyle::Solid);
        fb.clear();
        assert_eq!(fb, Framebuffer::new());
    }

    #[test]
    fn test_page_slices() {
        let mut fb = Framebuffer::new();
        fb.set_pixel(3, 17, true);

        assert!(fb.page(0).iter().all(|&b| b == 0));
        assert_eq!(fb.page(2)[3], 0x02);
        assert_eq!(fb.pages().count(), PAGES);
        assert_eq!(fb.pages().last().map(|(p, _)| p), Some(7));
    }
}

use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// # Frame Buffer
/// The Chip-8 display is composed of 64x32 black/white pixels.
/// Rows are stored top to bottom and the buffer is indexed as (x, y).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    pixels: [[bool; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
}

impl FrameBuffer {
    pub fn new() -> Self {
        FrameBuffer {
            pixels: [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
        }
    }

    pub fn clear(&mut self) {
        self.pixels = [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
    }

    /// Whether the pixel at (x, y) is on; coordinates wrap around the screen.
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        self.pixels[y % DISPLAY_HEIGHT][x % DISPLAY_WIDTH]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool; DISPLAY_WIDTH]> {
        self.pixels.iter()
    }

    /// XORs a sprite onto the screen with its top left corner at (x, y).
    ///
    /// Each byte of `sprite` is one 8 pixel row, most significant bit leftmost.
    /// Pixels that fall off the right or bottom edge wrap around to the opposite side.
    ///
    /// Returns whether any pixel that was on got turned off.
    pub fn draw_sprite(&mut self, x: usize, y: usize, sprite: &[u8]) -> bool {
        let mut collision = false;
        for (row, byte) in sprite.iter().enumerate() {
            let py = (y + row) % DISPLAY_HEIGHT;
            for bit in 0..8 {
                if byte & (0x80 >> bit) == 0 {
                    continue;
                }
                let px = (x + bit) % DISPLAY_WIDTH;
                let pixel = &mut self.pixels[py][px];
                collision |= *pixel;
                *pixel = !*pixel;
            }
        }
        collision
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(frame: &FrameBuffer) -> Vec<(usize, usize)> {
        let mut pixels = Vec::new();
        for (y, row) in frame.rows().enumerate() {
            for (x, &on) in row.iter().enumerate() {
                if on {
                    pixels.push((x, y));
                }
            }
        }
        pixels
    }

    #[test]
    fn test_draws_rows_msb_first() {
        let mut frame = FrameBuffer::new();
        let collision = frame.draw_sprite(1, 1, &[0xC0, 0x01]);
        assert!(!collision);
        assert_eq!(lit(&frame), vec![(1, 1), (2, 1), (8, 2)]);
    }

    #[test]
    fn test_wraps_both_axes() {
        let mut frame = FrameBuffer::new();
        frame.draw_sprite(62, 31, &[0xF0, 0x80]);
        assert_eq!(lit(&frame), vec![(62, 0), (0, 31), (1, 31), (62, 31), (63, 31)]);
    }

    #[test]
    fn test_redrawing_erases_and_collides() {
        let mut frame = FrameBuffer::new();
        assert!(!frame.draw_sprite(10, 10, &[0xFF, 0x81, 0xFF]));
        assert!(frame.draw_sprite(10, 10, &[0xFF, 0x81, 0xFF]));
        assert_eq!(frame, FrameBuffer::new());
    }

    #[test]
    fn test_collision_spans_the_whole_sprite() {
        let mut frame = FrameBuffer::new();
        frame.draw_sprite(0, 0, &[0x80]);
        // only the first row collides; later rows mustn't reset it
        assert!(frame.draw_sprite(0, 0, &[0x80, 0x40, 0x20]));
    }

    #[test]
    fn test_clear() {
        let mut frame = FrameBuffer::new();
        frame.draw_sprite(0, 0, &[0xFF]);
        frame.clear();
        assert!(!frame.is_set(0, 0));
        assert_eq!(frame, FrameBuffer::new());
    }
}

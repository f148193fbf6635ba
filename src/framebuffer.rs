pub const SCREEN_WIDTH: usize = 64;
pub const SCREEN_HEIGHT: usize = 32;
pub const SCREEN_PIXELS: usize = SCREEN_WIDTH * SCREEN_HEIGHT;

/// Monochrome display memory. One byte per pixel, each 0 or 1, row-major
/// from the top-left corner.
#[derive(Clone, PartialEq, Eq)]
pub struct Framebuffer {
    cells: [u8; SCREEN_PIXELS],
}

impl Framebuffer {
    pub fn new() -> Self {
        Framebuffer {
            cells: [0; SCREEN_PIXELS],
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        self.cells[x + y * SCREEN_WIDTH]
    }

    /// XOR an 8-pixel-wide sprite into the display, one byte per row.
    ///
    /// The start position wraps onto the screen. With `clip` set, pixels
    /// past the right or bottom edge are dropped; otherwise they wrap round
    /// to the opposite edge. Returns true if any lit pixel was turned off.
    pub fn draw_sprite(&mut self, x: u8, y: u8, sprite: &[u8], clip: bool) -> bool {
        let start_x = x as usize % SCREEN_WIDTH;
        let start_y = y as usize % SCREEN_HEIGHT;

        let mut collision = false;
        for (row, &sprite_byte) in sprite.iter().enumerate() {
            let mut py = start_y + row;
            if py >= SCREEN_HEIGHT {
                if clip {
                    break;
                }
                py %= SCREEN_HEIGHT;
            }
            for bit in 0..8 {
                let mut px = start_x + bit;
                if px >= SCREEN_WIDTH {
                    if clip {
                        break;
                    }
                    px %= SCREEN_WIDTH;
                }
                let sprite_pixel = get_bit(sprite_byte, bit);
                let cell = &mut self.cells[px + py * SCREEN_WIDTH];
                if *cell == 1 && sprite_pixel == 1 {
                    collision = true;
                }
                *cell ^= sprite_pixel;
            }
        }
        collision
    }
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// bit `n` counted from the most significant end, so bit 0 is the leftmost pixel
fn get_bit(value: u8, n: usize) -> u8 {
    debug_assert!(n < 8, "bit index out of range");
    (value >> (7 - n)) & 1
}

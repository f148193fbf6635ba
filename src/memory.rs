use crate::error::{Chip8Error, Result};

// NB. addresses are u16 as per the chip-8; lengths are usize to stop endless casting

/// Represents the addressable memory of the machine
pub trait MemoryMap {
    /// read one byte; addresses wrap at the top of RAM
    fn read_byte(&self, addr: u16) -> u8;

    /// write one byte; addresses wrap at the top of RAM
    fn write_byte(&mut self, addr: u16, value: u8);

    /// get a big-endian two-byte word (instruction fetch)
    fn get_word(&self, addr: u16) -> u16 {
        ((self.read_byte(addr) as u16) << 8) | (self.read_byte(addr.wrapping_add(1)) as u16)
    }

    /// get a r/o slice of the underlying memory
    fn get_ro_slice(&self, addr: u16, len: usize) -> &[u8];
}

/// Defines the CHIP-8 memory map (4K):
///   0x0000-0x004f  unused
///   0x0050-0x009f  built-in font, 16 glyphs of 5 bytes
///   0x00a0-0x01ff  unused
///   0x0200-0x0fff  program
///
/// the call stack and display live outside of emulated RAM
pub struct Chip8MemoryMap {
    bytes: Box<[u8]>,
}

impl MemoryMap for Chip8MemoryMap {
    fn read_byte(&self, addr: u16) -> u8 {
        self.bytes[mask(addr)]
    }

    fn write_byte(&mut self, addr: u16, value: u8) {
        self.bytes[mask(addr)] = value;
    }

    fn get_ro_slice(&self, addr: u16, len: usize) -> &[u8] {
        let a = mask(addr);
        &self.bytes[a..(a + len)]
    }
}

/// how much RAM we have
pub const CHIP8_RAM_SIZE_BYTES: usize = 4096;

/// where the program is loaded
pub const CHIP8_PROGRAM_ADDR: u16 = 0x0200;

/// biggest program that fits between the load address and the top of RAM
pub const CHIP8_MAX_PROGRAM_SIZE: usize = CHIP8_RAM_SIZE_BYTES - CHIP8_PROGRAM_ADDR as usize;

pub const CHIP8_FONT_ADDR: u16 = 0x050;
pub const CHIP8_FONT_GLYPH_BYTES: u16 = 5;

fn mask(addr: u16) -> usize {
    addr as usize & (CHIP8_RAM_SIZE_BYTES - 1)
}

impl Chip8MemoryMap {
    /// zeroed RAM with the font baked in
    pub fn new() -> Self {
        let mut bytes = vec![0u8; CHIP8_RAM_SIZE_BYTES].into_boxed_slice();
        let font = CHIP8_FONT_ADDR as usize;
        bytes[font..font + CHIP8_FONT.len()].copy_from_slice(&CHIP8_FONT);
        Chip8MemoryMap { bytes }
    }

    /// RAM with the font and a program loaded at 0x200
    pub fn with_program(program: &[u8]) -> Result<Self> {
        let mut mm = Self::new();
        mm.load_program(program)?;
        Ok(mm)
    }

    /// load a CHIP-8 program at 0x200
    pub fn load_program(&mut self, program: &[u8]) -> Result<()> {
        if program.len() > CHIP8_MAX_PROGRAM_SIZE {
            return Err(Chip8Error::ProgramTooLarge {
                size: program.len(),
                max_size: CHIP8_MAX_PROGRAM_SIZE,
            });
        }
        let a = CHIP8_PROGRAM_ADDR as usize;
        self.bytes[a..a + program.len()].copy_from_slice(program);
        log::debug!("loaded {} byte program at {:#05x}", program.len(), a);
        Ok(())
    }
}

impl Default for Chip8MemoryMap {
    fn default() -> Self {
        Self::new()
    }
}

/// the usual hex digit font; one byte per scanline, high nibble only
pub const CHIP8_FONT: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_zeroed() {
        let m = Chip8MemoryMap::new();
        // NB. memory is zeroed from 0x200 because before that we bake in the font
        assert_eq!(m.bytes[0x200..], [0; 0xe00]);
        assert_eq!(m.bytes[..0x50], [0; 0x50]);
    }

    #[test]
    fn test_font_baked_in() {
        let m = Chip8MemoryMap::new();
        assert_eq!(m.get_ro_slice(CHIP8_FONT_ADDR, 80), &CHIP8_FONT);
        // glyph for 'A'
        assert_eq!(
            m.get_ro_slice(CHIP8_FONT_ADDR + 0xa * CHIP8_FONT_GLYPH_BYTES, 5),
            &[0xF0, 0x90, 0xF0, 0x90, 0x90]
        );
    }

    #[test]
    fn test_read_word() {
        let mut m = Chip8MemoryMap::new();
        for (a, b) in [0u8, 1, 2, 3, 4, 5, 6, 7].iter().enumerate() {
            m.write_byte(0x300 + a as u16, *b);
        }
        assert_eq!(m.get_word(0x304), 0x0405);
    }

    #[test]
    fn test_addresses_wrap() {
        let mut m = Chip8MemoryMap::new();
        m.write_byte(0x1003, 0xab);
        assert_eq!(m.read_byte(0x003), 0xab);
        m.write_byte(0x0fff, 0x12);
        m.write_byte(0x0000, 0x34);
        assert_eq!(m.get_word(0x0fff), 0x1234);
    }

    #[test]
    #[should_panic]
    fn test_read_too_much_panic() {
        let m = Chip8MemoryMap::new();
        let _ = m.get_ro_slice(4089, 8);
    }

    #[test]
    fn test_program_load_ok() -> Result<()> {
        let dst = Chip8MemoryMap::with_program(&[0x00, 0xe0])?; // clear screen
        assert_eq!(dst.get_ro_slice(0x200, 2), &[0x00, 0xe0]);
        Ok(())
    }

    #[test]
    fn test_program_exactly_fills_ram() -> Result<()> {
        let prog = vec![0xaa; CHIP8_MAX_PROGRAM_SIZE];
        let m = Chip8MemoryMap::with_program(&prog)?;
        assert_eq!(m.read_byte(0x0fff), 0xaa);
        Ok(())
    }

    #[test]
    fn test_program_too_large() {
        let prog = vec![0; 4096 - 0x200 + 1];
        match Chip8MemoryMap::with_program(&prog) {
            Err(Chip8Error::ProgramTooLarge { size, max_size }) => {
                assert_eq!(size, 3585);
                assert_eq!(max_size, 3584);
            }
            _ => panic!("oversized program was accepted"),
        }
    }
}

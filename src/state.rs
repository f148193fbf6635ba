use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::memory::{Chip8MemoryMap, CHIP8_PROGRAM_ADDR};

pub const REGISTER_COUNT: usize = 16;
pub const KEY_COUNT: usize = 16;

/// index of the flag register
pub const VF: usize = 0xf;

/// Everything the emulated machine remembers between cycles.
///
/// Plain data; the interpreter is the only thing that mutates it.
pub struct Chip8State {
    pub memory: Chip8MemoryMap,
    pub display: Framebuffer,
    /// V0..VF
    pub v: [u8; REGISTER_COUNT],
    /// I; 12 bits are meaningful but it is never clamped
    pub i: u16,
    pub pc: u16,
    pub stack: Vec<u16>,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub keys: [bool; KEY_COUNT],
}

impl Chip8State {
    pub fn new(program: &[u8]) -> Result<Self> {
        Ok(Chip8State {
            memory: Chip8MemoryMap::with_program(program)?,
            display: Framebuffer::new(),
            v: [0; REGISTER_COUNT],
            i: 0,
            pc: CHIP8_PROGRAM_ADDR,
            stack: Vec::new(),
            delay_timer: 0,
            sound_timer: 0,
            keys: [false; KEY_COUNT],
        })
    }

    /// count both timers down by one, stopping at zero
    pub fn timers_tick(&mut self) {
        self.delay_timer = self.delay_timer.saturating_sub(1);
        self.sound_timer = self.sound_timer.saturating_sub(1);
    }
}

//! # interpreter
//!
//! One `step()` is one CHIP-8 instruction: fetch the big-endian word at PC,
//! move PC on by two, decode, then execute. Anything that jumps, returns or
//! blocks simply overwrites (or winds back) the already-advanced PC.
//!
//! The host drives it with a fixed tick: `run_cycles(budget)` followed by one
//! `timers_tick()`. Keys are handed over with `set_key` between batches.
//!
//! A fatal error halts the interpreter for good; further steps report the
//! same error again without touching the machine.
use crate::config::Config;
use crate::error::{Chip8Error, Result};
use crate::instruction::Instruction;
use crate::keywait::{WaitForKey, WaitState};
use crate::memory::{MemoryMap, CHIP8_FONT_ADDR, CHIP8_FONT_GLYPH_BYTES};
use crate::quirks::Quirks;
use crate::random::{RandomSource, SeededRandom};
use crate::state::{Chip8State, KEY_COUNT, VF};

/// what the host should do after a step
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// keep executing instructions in the current tick
    Continue,
    /// stop this tick's batch; the display-wait quirk is holding a draw back
    WaitForNextTick,
}

pub struct Chip8Interpreter {
    state: Chip8State,
    wait_for_key: WaitForKey,
    quirks: Quirks,
    random: Box<dyn RandomSource>,
    drew_this_tick: bool,
    fault: Option<Chip8Error>,
}

impl Chip8Interpreter {
    /// set up a machine with `program` loaded at 0x200
    pub fn new(program: &[u8], quirks: Quirks, random: Box<dyn RandomSource>) -> Result<Self> {
        let state = Chip8State::new(program)?;
        log::debug!("interpreter ready, quirks {:?}", quirks);
        Ok(Chip8Interpreter {
            state,
            wait_for_key: WaitForKey::new(),
            quirks,
            random,
            drew_this_tick: false,
            fault: None,
        })
    }

    pub fn from_config(program: &[u8], config: &Config) -> Result<Self> {
        Self::new(
            program,
            config.quirks,
            Box::new(SeededRandom::new(config.seed)),
        )
    }

    pub fn state(&self) -> &Chip8State {
        &self.state
    }

    /// 64x32 cells, each 0 or 1, row-major
    pub fn framebuffer(&self) -> &[u8] {
        self.state.display.cells()
    }

    pub fn key_wait_state(&self) -> WaitState {
        self.wait_for_key.state()
    }

    pub fn is_halted(&self) -> bool {
        self.fault.is_some()
    }

    pub fn set_key(&mut self, key: u8, pressed: bool) -> Result<()> {
        if key as usize >= KEY_COUNT {
            return Err(Chip8Error::KeyOutOfRange { key });
        }
        self.state.keys[key as usize] = pressed;
        Ok(())
    }

    /// count the delay and sound timers down; once per host tick
    pub fn timers_tick(&mut self) {
        self.state.timers_tick();
        self.drew_this_tick = false;
    }

    /// run up to `cycles` instructions, stopping early if asked to wait
    pub fn run_cycles(&mut self, cycles: u32) -> Result<()> {
        for _ in 0..cycles {
            if self.step()? == StepOutcome::WaitForNextTick {
                break;
            }
        }
        Ok(())
    }

    /// fetch, decode and execute one instruction
    pub fn step(&mut self) -> Result<StepOutcome> {
        if let Some(fault) = &self.fault {
            return Err(fault.clone());
        }
        let pc = self.state.pc;
        let opcode = self.state.memory.get_word(pc);
        self.state.pc = pc.wrapping_add(2);

        let outcome = Instruction::decode(opcode).and_then(|instruction| {
            log::trace!("{:#05x}: {:04x} {:?}", pc, opcode, instruction);
            self.execute(instruction)
        });
        if let Err(e) = &outcome {
            log::warn!("halting at {:#05x}: {}", pc, e);
            self.fault = Some(e.clone());
        }
        outcome
    }

    fn skip_if(&mut self, condition: bool) {
        if condition {
            self.state.pc = self.state.pc.wrapping_add(2);
        }
    }

    fn key_in(&self, x: usize) -> Result<usize> {
        let value = self.state.v[x];
        if value as usize >= KEY_COUNT {
            return Err(Chip8Error::RegisterOutOfRange { register: x, value });
        }
        Ok(value as usize)
    }

    fn execute(&mut self, instruction: Instruction) -> Result<StepOutcome> {
        use Instruction::*;
        let s = &mut self.state;
        match instruction {
            ClearScreen => s.display.clear(),
            Return => s.pc = s.stack.pop().ok_or(Chip8Error::StackUnderflow)?,
            Jump { nnn } => s.pc = nnn,
            Call { nnn } => {
                s.stack.push(s.pc);
                s.pc = nnn;
            }
            SkipEqImm { x, nn } => {
                let c = s.v[x] == nn;
                self.skip_if(c);
            }
            SkipNeImm { x, nn } => {
                let c = s.v[x] != nn;
                self.skip_if(c);
            }
            SkipEqReg { x, y } => {
                let c = s.v[x] == s.v[y];
                self.skip_if(c);
            }
            SkipNeReg { x, y } => {
                let c = s.v[x] != s.v[y];
                self.skip_if(c);
            }
            LoadImm { x, nn } => s.v[x] = nn,
            AddImm { x, nn } => s.v[x] = s.v[x].wrapping_add(nn),
            Move { x, y } => s.v[x] = s.v[y],
            Or { x, y } => {
                s.v[x] |= s.v[y];
                if self.quirks.vf_reset {
                    s.v[VF] = 0;
                }
            }
            And { x, y } => {
                s.v[x] &= s.v[y];
                if self.quirks.vf_reset {
                    s.v[VF] = 0;
                }
            }
            Xor { x, y } => {
                s.v[x] ^= s.v[y];
                if self.quirks.vf_reset {
                    s.v[VF] = 0;
                }
            }
            // the flag is written last, so it wins when x is F
            AddReg { x, y } => {
                let (sum, carry) = s.v[x].overflowing_add(s.v[y]);
                s.v[x] = sum;
                s.v[VF] = carry as u8;
            }
            Sub { x, y } => {
                let no_borrow = s.v[x] >= s.v[y];
                s.v[x] = s.v[x].wrapping_sub(s.v[y]);
                s.v[VF] = no_borrow as u8;
            }
            SubReverse { x, y } => {
                let no_borrow = s.v[y] >= s.v[x];
                s.v[x] = s.v[y].wrapping_sub(s.v[x]);
                s.v[VF] = no_borrow as u8;
            }
            ShiftRight { x, y } => {
                let src = if self.quirks.shifting { s.v[x] } else { s.v[y] };
                s.v[x] = src >> 1;
                s.v[VF] = src & 0x01;
            }
            ShiftLeft { x, y } => {
                let src = if self.quirks.shifting { s.v[x] } else { s.v[y] };
                s.v[x] = src << 1;
                s.v[VF] = src >> 7;
            }
            LoadIndex { nnn } => s.i = nnn,
            JumpOffset { nnn } => {
                let offset = if self.quirks.jumping {
                    s.v[(nnn >> 8) as usize]
                } else {
                    s.v[0]
                };
                s.pc = nnn + offset as u16;
            }
            Random { x, nn } => s.v[x] = self.random.next_byte() & nn,
            Draw { x, y, n } => return Ok(self.draw(x, y, n)),
            SkipKeyDown { x } => {
                let key = self.key_in(x)?;
                let c = self.state.keys[key];
                self.skip_if(c);
            }
            SkipKeyUp { x } => {
                let key = self.key_in(x)?;
                let c = !self.state.keys[key];
                self.skip_if(c);
            }
            LoadDelay { x } => s.v[x] = s.delay_timer,
            WaitKey { x } => self.wait_for_key.execute(s, x),
            SetDelay { x } => s.delay_timer = s.v[x],
            SetSound { x } => s.sound_timer = s.v[x],
            AddIndex { x } => {
                let sum = s.i.wrapping_add(s.v[x] as u16);
                s.v[VF] = (sum > 0x0fff) as u8;
                s.i = sum;
            }
            LoadGlyph { x } => s.i = CHIP8_FONT_ADDR + s.v[x] as u16 * CHIP8_FONT_GLYPH_BYTES,
            StoreBcd { x } => {
                let value = s.v[x];
                s.memory.write_byte(s.i, value / 100);
                s.memory.write_byte(s.i.wrapping_add(1), value / 10 % 10);
                s.memory.write_byte(s.i.wrapping_add(2), value % 10);
            }
            StoreRegisters { x } => {
                for r in 0..=x {
                    s.memory.write_byte(s.i.wrapping_add(r as u16), s.v[r]);
                }
                if !self.quirks.memory {
                    s.i = s.i.wrapping_add(x as u16 + 1);
                }
            }
            LoadRegisters { x } => {
                for r in 0..=x {
                    s.v[r] = s.memory.read_byte(s.i.wrapping_add(r as u16));
                }
                if !self.quirks.memory {
                    s.i = s.i.wrapping_add(x as u16 + 1);
                }
            }
        }
        Ok(StepOutcome::Continue)
    }

    fn draw(&mut self, x: usize, y: usize, n: u8) -> StepOutcome {
        if self.quirks.display_wait {
            if self.drew_this_tick {
                // try again next tick
                self.state.pc = self.state.pc.wrapping_sub(2);
                return StepOutcome::WaitForNextTick;
            }
            self.drew_this_tick = true;
        }

        let s = &mut self.state;
        let sprite: Vec<u8> = (0..n as u16)
            .map(|row| s.memory.read_byte(s.i.wrapping_add(row)))
            .collect();
        let collision = s
            .display
            .draw_sprite(s.v[x], s.v[y], &sprite, self.quirks.clipping);
        s.v[VF] = collision as u8;

        if self.quirks.display_wait {
            StepOutcome::WaitForNextTick
        } else {
            StepOutcome::Continue
        }
    }
}

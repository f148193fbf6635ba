//! A classic CHIP-8 virtual machine.
//!
//! ## Design
//!
//! * 4K of RAM, sixteen 8-bit registers, a call stack, a 64x32 monochrome
//!   display, two 60Hz countdown timers and a 16 key hex keypad
//! * classic CHIP-8 instructions only; no SUPER-CHIP or XO-CHIP
//! * not clock-accurate: the host runs a fixed budget of instructions per
//!   tick, then counts the timers down once
//! * no sound; the sound timer counts down but nothing beeps
//! * abstract display and input so we can plug alternatives; starting with
//!   a TUI in-console
//!
//! Model
//!
//! Host
//!  |-- display, input, config
//!  |-- interpreter(program, quirks, random source)
//!  |    |-- state: memory(font, program), framebuffer, registers, stack,
//!  |    |          timers, keys
//!  |    |-- instruction decoder
//!  |    |-- wait-for-key state machine (FX0A)
//!  |    `-- sprite renderer (DXYN), in the framebuffer
//!  `-- main loop, once per tick
//!       |-- input.poll(); interpreter.set_key(..) for all 16 keys
//!       |-- interpreter.run_cycles(cycles_per_tick)
//!       |-- interpreter.timers_tick()
//!       |-- display.draw(interpreter.framebuffer())
//!       `-- sleep for the rest of the tick
pub mod config;
pub mod display;
pub mod error;
pub mod framebuffer;
pub mod host;
pub mod input;
pub mod instruction;
pub mod interpreter;
pub mod keywait;
pub mod memory;
pub mod quirks;
pub mod random;
pub mod state;

pub use error::{Chip8Error, Result};
pub use interpreter::{Chip8Interpreter, StepOutcome};
pub use quirks::{Quirk, Quirks};

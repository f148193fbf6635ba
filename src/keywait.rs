//! FX0A, the one instruction that blocks.
//!
//! The instruction re-runs itself by winding the program counter back over
//! itself until some key has gone down and come back up again. Keys that were
//! already held when the wait started don't count.
use crate::state::{Chip8State, KEY_COUNT};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum WaitState {
    #[default]
    Idle,
    WaitingForPress,
    WaitingForRelease,
}

#[derive(Debug, Default)]
pub struct WaitForKey {
    state: WaitState,
    keys_on_entry: [bool; KEY_COUNT],
    captured: u8,
}

impl WaitForKey {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> WaitState {
        self.state
    }

    /// run one cycle of FX0A; expects `pc` to already point past the instruction
    pub fn execute(&mut self, machine: &mut Chip8State, x: usize) {
        match self.state {
            WaitState::Idle => {
                self.keys_on_entry = machine.keys;
                self.state = WaitState::WaitingForPress;
                machine.pc = machine.pc.wrapping_sub(2);
            }
            WaitState::WaitingForPress => {
                let newly_pressed =
                    (0..KEY_COUNT).find(|&k| !self.keys_on_entry[k] && machine.keys[k]);
                if let Some(key) = newly_pressed {
                    self.captured = key as u8;
                    self.state = WaitState::WaitingForRelease;
                }
                machine.pc = machine.pc.wrapping_sub(2);
            }
            WaitState::WaitingForRelease => {
                if machine.keys[self.captured as usize] {
                    machine.pc = machine.pc.wrapping_sub(2);
                } else {
                    machine.v[x] = self.captured;
                    self.state = WaitState::Idle;
                }
            }
        }
    }
}

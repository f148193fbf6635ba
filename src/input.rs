use crate::state::KEY_COUNT;
use crossterm::event::{poll, read, Event, KeyCode, KeyModifiers};
use crossterm::terminal;
use std::collections::{HashMap, VecDeque};
use std::io;
use std::time::Duration;

/// map of the left-hand side of a qwerty keyboard onto the COSMAC hex keypad
///   1 2 3 4      1 2 3 C
///   q w e r  =>  4 5 6 D
///   a s d f      7 8 9 E
///   z x c v      A 0 B F
const CHIP8_CONVENTIONAL_KEYMAP: [(char, u8); 16] = [
    ('x', 0x00),
    ('1', 0x01),
    ('2', 0x02),
    ('3', 0x03),
    ('q', 0x04),
    ('w', 0x05),
    ('e', 0x06),
    ('a', 0x07),
    ('s', 0x08),
    ('d', 0x09),
    ('z', 0x0a),
    ('c', 0x0b),
    ('4', 0x0c),
    ('r', 0x0d),
    ('f', 0x0e),
    ('v', 0x0f),
];

/// terminals only tell us about presses (and auto-repeat), so a key counts
/// as held for this many polls after we last heard about it
const KEY_HOLD_POLLS: u8 = 6;

/// things the user can ask the host for, besides pressing CHIP-8 keys
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HostCommand {
    Quit,
    TogglePause,
    Reset,
}

/// reads keypresses
pub trait Input {
    /// catch up with the input device, once per host tick; returns any host
    /// commands seen since the last poll
    fn poll(&mut self) -> Result<Vec<HostCommand>, io::Error>;

    /// which of the 16 hex keys are down right now
    fn keys(&self) -> [bool; KEY_COUNT];
}

/// keyboard input from a raw-mode terminal, using crossterm
pub struct TermInput {
    keymap: HashMap<char, u8>,
    held: [u8; KEY_COUNT],
}

impl TermInput {
    pub fn new() -> Result<Self, io::Error> {
        terminal::enable_raw_mode()?;
        Ok(TermInput {
            keymap: HashMap::from(CHIP8_CONVENTIONAL_KEYMAP),
            held: [0; KEY_COUNT],
        })
    }
}

impl Drop for TermInput {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

impl Input for TermInput {
    fn poll(&mut self) -> Result<Vec<HostCommand>, io::Error> {
        for h in self.held.iter_mut() {
            *h = h.saturating_sub(1);
        }

        let mut commands = Vec::new();
        while poll(Duration::from_millis(0))? {
            if let Event::Key(evt) = read()? {
                match evt.code {
                    KeyCode::Char('c') if evt.modifiers.contains(KeyModifiers::CONTROL) => {
                        commands.push(HostCommand::Quit)
                    }
                    KeyCode::Char('p') => commands.push(HostCommand::TogglePause),
                    KeyCode::Char(key) => match self.keymap.get(&key.to_ascii_lowercase()) {
                        Some(&mapped_key) => self.held[mapped_key as usize] = KEY_HOLD_POLLS,
                        None => log::debug!("can't map {:?} to a COSMAC key", key),
                    },
                    KeyCode::Backspace => commands.push(HostCommand::Reset),
                    KeyCode::Esc => commands.push(HostCommand::Quit),
                    _ => {}
                }
            }
        }
        Ok(commands)
    }

    fn keys(&self) -> [bool; KEY_COUNT] {
        self.held.map(|h| h > 0)
    }
}

/// dummy Input implementation for testing
pub struct DummyInput {
    keys: [bool; KEY_COUNT],
    commands: VecDeque<Vec<HostCommand>>,
}

impl DummyInput {
    pub fn new(pressed: &[u8]) -> Self {
        let mut keys = [false; KEY_COUNT];
        for &k in pressed {
            keys[k as usize] = true;
        }
        DummyInput {
            keys,
            commands: VecDeque::new(),
        }
    }

    pub fn set_key(&mut self, key: u8, pressed: bool) {
        self.keys[key as usize] = pressed;
    }

    /// commands handed out by successive polls
    pub fn queue_commands(&mut self, commands: &[HostCommand]) {
        self.commands.push_back(Vec::from(commands));
    }
}

impl Input for DummyInput {
    fn poll(&mut self) -> Result<Vec<HostCommand>, io::Error> {
        Ok(self.commands.pop_front().unwrap_or_default())
    }

    fn keys(&self) -> [bool; KEY_COUNT] {
        self.keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keymap_covers_every_key() {
        let mut seen = [false; KEY_COUNT];
        for (_, k) in CHIP8_CONVENTIONAL_KEYMAP {
            seen[k as usize] = true;
        }
        assert_eq!(seen, [true; KEY_COUNT]);
    }

    #[test]
    fn test_dummy_input() -> Result<(), io::Error> {
        let mut i = DummyInput::new(&[0x1, 0xf]);
        i.queue_commands(&[HostCommand::TogglePause]);
        assert_eq!(i.poll()?, vec![HostCommand::TogglePause]);
        assert!(i.poll()?.is_empty());
        let keys = i.keys();
        assert!(keys[0x1] && keys[0xf] && !keys[0x0]);
        i.set_key(0x1, false);
        assert!(!i.keys()[0x1]);
        Ok(())
    }
}

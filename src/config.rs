use crate::quirks::Quirks;
use std::time::Duration;

pub const DEFAULT_INSTRUCTIONS_PER_SECOND: u32 = 700;
pub const DEFAULT_TICKS_PER_SECOND: u32 = 60;

/// How fast to run and which interpreter flavour to emulate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// instructions executed per timer tick
    pub cycles_per_tick: u32,
    /// timer ticks (and frames) per second
    pub ticks_per_second: u32,
    pub quirks: Quirks,
    /// PRNG seed for CXNN; None seeds from the OS
    pub seed: Option<u64>,
}

impl Config {
    pub fn new(instructions_per_second: u32, ticks_per_second: u32) -> Self {
        let ticks_per_second = ticks_per_second.max(1);
        Config {
            cycles_per_tick: (instructions_per_second / ticks_per_second).max(1),
            ticks_per_second,
            quirks: Quirks::default(),
            seed: None,
        }
    }

    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_second
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(DEFAULT_INSTRUCTIONS_PER_SECOND, DEFAULT_TICKS_PER_SECOND)
    }
}

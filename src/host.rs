//! The environment around the interpreter: sets everything up and runs the
//! main loop at a fixed tick.
//!
//! Each tick: poll input, hand the key states to the interpreter, run the
//! cycle budget, count the timers down once, present the framebuffer, then
//! sleep away whatever is left of the tick.
use crate::config::Config;
use crate::display::Display;
use crate::error::Chip8Error;
use crate::input::{HostCommand, Input};
use crate::interpreter::Chip8Interpreter;
use std::error::Error;
use std::time::Instant;

/// what came of one host tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    Quit,
    /// the program hit a fatal error; stop stepping
    Faulted(Chip8Error),
}

pub struct Host<'a> {
    interpreter: Chip8Interpreter,
    display: &'a mut dyn Display,
    input: &'a mut dyn Input,
    config: Config,
    program: Vec<u8>,
    paused: bool,
}

impl<'a> Host<'a> {
    pub fn new(
        program: &[u8],
        config: Config,
        display: &'a mut dyn Display,
        input: &'a mut dyn Input,
    ) -> Result<Host<'a>, Chip8Error> {
        let interpreter = Chip8Interpreter::from_config(program, &config)?;
        Ok(Host {
            interpreter,
            display,
            input,
            config,
            program: Vec::from(program),
            paused: false,
        })
    }

    pub fn interpreter(&self) -> &Chip8Interpreter {
        &self.interpreter
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// start the same program again on a fresh machine
    pub fn reset(&mut self) -> Result<(), Chip8Error> {
        self.interpreter = Chip8Interpreter::from_config(&self.program, &self.config)?;
        log::info!("reset");
        Ok(())
    }

    pub fn tick(&mut self) -> Result<TickOutcome, Box<dyn Error>> {
        for command in self.input.poll()? {
            match command {
                HostCommand::Quit => return Ok(TickOutcome::Quit),
                HostCommand::TogglePause => {
                    self.paused = !self.paused;
                    log::info!("{}", if self.paused { "paused" } else { "resumed" });
                }
                HostCommand::Reset => self.reset()?,
            }
        }

        if !self.paused {
            for (key, pressed) in self.input.keys().into_iter().enumerate() {
                self.interpreter.set_key(key as u8, pressed)?;
            }
            if let Err(e) = self.interpreter.run_cycles(self.config.cycles_per_tick) {
                log::error!("emulation stopped: {}", e);
                return Ok(TickOutcome::Faulted(e));
            }
            self.interpreter.timers_tick();
        }

        self.display.draw(self.interpreter.framebuffer())?;
        Ok(TickOutcome::Running)
    }

    /// run until the user quits, the program faults, or `max_ticks` pass
    pub fn main_loop(&mut self, max_ticks: Option<u64>) -> Result<TickOutcome, Box<dyn Error>> {
        let tick_duration = self.config.tick_duration();
        let mut ticks = 0;
        loop {
            if max_ticks.map_or(false, |max| ticks >= max) {
                return Ok(TickOutcome::Running);
            }
            let started = Instant::now();
            match self.tick()? {
                TickOutcome::Running => {}
                outcome => return Ok(outcome),
            }
            ticks += 1;
            if let Some(remaining) = tick_duration.checked_sub(started.elapsed()) {
                spin_sleep::sleep(remaining);
            }
        }
    }
}

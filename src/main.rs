use std::error::Error;
use std::path::PathBuf;

use chip8vm::config::{Config, DEFAULT_INSTRUCTIONS_PER_SECOND, DEFAULT_TICKS_PER_SECOND};
use chip8vm::display::MonoTermDisplay;
use chip8vm::framebuffer::{SCREEN_HEIGHT, SCREEN_WIDTH};
use chip8vm::host::{Host, TickOutcome};
use chip8vm::input::TermInput;
use chip8vm::Quirk;
use clap::Parser;

/// Run a CHIP-8 program in the terminal.
///
/// Keys 1234/qwer/asdf/zxcv are the hex keypad; p pauses, backspace resets
/// and esc quits.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// the program to run
    rom: PathBuf,

    /// instructions executed per second
    #[arg(long, default_value_t = DEFAULT_INSTRUCTIONS_PER_SECOND)]
    ips: u32,

    /// timer ticks (and frames) per second
    #[arg(long, default_value_t = DEFAULT_TICKS_PER_SECOND)]
    tick_rate: u32,

    /// seed for the random number generator
    #[arg(long)]
    seed: Option<u64>,

    /// turn a quirk on
    #[arg(long = "quirk", value_enum)]
    quirks_on: Vec<Quirk>,

    /// turn a quirk off
    #[arg(long = "no-quirk", value_enum)]
    quirks_off: Vec<Quirk>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut config = Config::new(args.ips, args.tick_rate);
    config.seed = args.seed;
    for &quirk in &args.quirks_on {
        config.quirks.set(quirk, true);
    }
    for &quirk in &args.quirks_off {
        config.quirks.set(quirk, false);
    }

    // load a program
    let program = std::fs::read(&args.rom)?;

    let outcome = {
        let mut display = MonoTermDisplay::new(SCREEN_WIDTH, SCREEN_HEIGHT)?;
        if let Some(name) = args.rom.file_name() {
            display.set_title(&format!("CHIP-8: {}", name.to_string_lossy()));
        }
        let mut input = TermInput::new()?;
        let mut host = Host::new(&program, config, &mut display, &mut input)?;
        let outcome = host.main_loop(None)?;
        outcome
    };

    // shove some junk on stdout to stop the cli messing up the last frame
    for _ in 0..2 {
        println!();
    }
    match outcome {
        TickOutcome::Faulted(e) => Err(e.into()),
        _ => Ok(()),
    }
}

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::info;

use emu8_core::{Chip8, Config, Quirks, DEFAULT_CLOCK_SPEED};
use emu8_display::Display;

mod audio;
mod keymap;
mod run;

use audio::{Beeper, Mute, Sound};
use run::{run, Settings};

/// Runs a Chip-8 ROM in an SDL2 window.
///
/// Keys 1-4, Q-R, A-F and Z-V stand in for the hex keypad.
/// Hold Space to fast forward, press Escape to quit.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the ROM to run
    rom: PathBuf,

    /// Instructions executed per second
    #[arg(long, default_value_t = DEFAULT_CLOCK_SPEED)]
    clock_speed: u32,

    /// Size of each Chip-8 pixel on screen
    #[arg(long, default_value_t = 10)]
    scale: u32,

    /// Seed for the random number generator; random if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Leave I unchanged after FX55/FX65 instead of advancing it past the copied bytes
    #[arg(long)]
    no_load_store_increment: bool,

    /// Don't beep
    #[arg(long)]
    mute: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut chip8 = Chip8::with_config(Config {
        quirks: Quirks {
            load_store_increments_i: !args.no_load_store_increment,
        },
        seed: args.seed,
    });

    // Load ROM
    let rom = fs::read(&args.rom)
        .with_context(|| format!("unable to read ROM {}", args.rom.display()))?;
    chip8
        .load_program(&rom)
        .with_context(|| format!("unable to load ROM {}", args.rom.display()))?;
    info!("successfully loaded {} ({} bytes)", args.rom.display(), rom.len());

    // Get SDL2 context
    let sdl = sdl2::init().map_err(|e| anyhow!(e)).context("unable to initialize SDL2")?;
    let mut display = Display::new(&sdl, "Emu-8", args.scale)
        .map_err(|e| anyhow!(e))
        .context("unable to open a window")?;
    let mut sound: Box<dyn Sound> = if args.mute {
        Box::new(Mute)
    } else {
        Box::new(
            Beeper::new(&sdl)
                .map_err(|e| anyhow!(e))
                .context("unable to open an audio device")?,
        )
    };

    let settings = Settings {
        clock_speed: args.clock_speed,
    };
    run(&mut chip8, &sdl, &mut display, sound.as_mut(), &settings)
}

use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use log::info;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;

use emu8_core::{Chip8, Status, TIMER_FREQUENCY};
use emu8_display::Display;

use crate::audio::Sound;
use crate::keymap::keymap;

/// How the host drives a `Chip8`
pub struct Settings {
    /// Instructions executed per second
    pub clock_speed: u32,
}

/// Runs the event loop until the window is closed or the Chip-8 halts.
///
/// Instructions are executed at `settings.clock_speed` while the timers are
/// ticked from their own 60Hz clock, so changing one never affects the other.
pub fn run(
    chip8: &mut Chip8,
    sdl: &sdl2::Sdl,
    display: &mut Display,
    sound: &mut dyn Sound,
    settings: &Settings,
) -> Result<()> {
    let mut events = sdl.event_pump().map_err(|e| anyhow!(e))?;

    // Set initial timing
    let cycle_time = Duration::from_secs(1) / settings.clock_speed.max(1);
    let timer_period = Duration::from_secs(1) / TIMER_FREQUENCY;
    let mut last_cycle = Instant::now();
    let mut last_timer_tick = Instant::now();

    // Whether or not the configured clock speed should be respected
    let mut fast_forward = false;

    display.render(chip8.framebuffer()).map_err(|e| anyhow!(e))?;

    'event: loop {
        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'event,
                Event::Window {
                    win_event: WindowEvent::FocusLost,
                    ..
                } => chip8.release_keys(),
                Event::KeyDown {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.set_key(kc, true),
                    (Keycode::Space, _) => fast_forward = true,
                    (Keycode::Escape, _) => break 'event,
                    _ => continue,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.set_key(kc, false),
                    (Keycode::Space, _) => fast_forward = false,
                    _ => continue,
                },
                _ => continue,
            };
        }

        // Update state
        let result = chip8.step();
        if let Status::Halted(fault) = result.status {
            return Err(fault.into());
        }
        if result.display_changed {
            display.render(chip8.framebuffer()).map_err(|e| anyhow!(e))?;
        }

        while last_timer_tick.elapsed() >= timer_period {
            chip8.tick_timers();
            last_timer_tick += timer_period;
        }
        sound.set_active(chip8.is_sound_active());

        // Handle timing
        let current_time = Instant::now();
        let elapsed_cycle_time = current_time - last_cycle;
        if !fast_forward && cycle_time > elapsed_cycle_time {
            std::thread::sleep(cycle_time - elapsed_cycle_time);
        }
        last_cycle = Instant::now();
    }

    sound.set_active(false);
    info!("window closed; exiting");
    Ok(())
}

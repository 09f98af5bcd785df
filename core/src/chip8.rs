use log::{debug, error, trace, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{Config, Quirks};
use crate::constants::{MAX_PROGRAM_SIZE, PROGRAM_START};
use crate::error::{Fault, LoadError, OpcodeError};
use crate::framebuffer::FrameBuffer;
use crate::instruction::from_op;
use crate::operations::Effect;
use crate::state::{Mode, State};

/// The outcome of a single cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Ok,
    /// The fetched opcode isn't part of the instruction set; it was skipped
    UnknownOpcode(OpcodeError),
    /// A fatal fault occurred; `step` won't execute anything else
    Halted(Fault),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepResult {
    pub status: Status,
    /// Whether the frame buffer changed during this cycle
    pub display_changed: bool,
}

impl StepResult {
    fn new(status: Status, display_changed: bool) -> Self {
        StepResult {
            status,
            display_changed,
        }
    }
}

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`
///  - the fault that `halted` it, if any
///  - the `config` (quirks and seed) it was created with
///
/// Supplies interfaces for:
/// - loading roms
/// - pressing and releasing keys
/// - advancing the CPU one cycle at a time
/// - advancing its timers
/// - inspecting its frame buffer for rendering by some display
/// - checking whether a beep should be playing
pub struct Chip8 {
    state: State,
    config: Config,
    halted: Option<Fault>,
}

impl Chip8 {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Chip8 {
            state: State::new(Self::rng(&config)),
            config,
            halted: None,
        }
    }

    fn rng(config: &Config) -> StdRng {
        match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Resets everything to its power-on state: empty memory apart from the
    /// sprite sheet, cleared registers, stack, timers, keys and screen, pc at 0x200.
    pub fn initialize(&mut self) {
        self.state = State::new(Self::rng(&self.config));
        self.halted = None;
    }

    /// Load a rom into memory at 0x200
    ///
    /// # Arguments
    /// * `rom` the raw program, at most `MAX_PROGRAM_SIZE` bytes
    pub fn load_program(&mut self, rom: &[u8]) -> Result<(), LoadError> {
        if rom.is_empty() {
            return Err(LoadError::Empty);
        }
        let too_large = LoadError::TooLarge {
            size: rom.len(),
            max_size: MAX_PROGRAM_SIZE,
        };
        if rom.len() > MAX_PROGRAM_SIZE {
            return Err(too_large);
        }
        self.state
            .memory
            .load(PROGRAM_START as usize, rom)
            .map_err(|_| too_large)?;
        debug!("loaded {} byte ROM at {:#05X}", rom.len(), PROGRAM_START);
        Ok(())
    }

    /// Set the pressed status of key; it's seen by the next `step`
    ///
    /// # Arguments
    /// * `key` the 8-bit representation of the key, 0x0..=0xF
    /// * `pressed` whether it's currently held down
    pub fn set_key(&mut self, key: u8, pressed: bool) {
        self.state.keypad.set(key, pressed);
    }

    /// Marks every key as released, e.g. when the host loses keyboard focus
    pub fn release_keys(&mut self) {
        self.state.keypad.release_all();
    }

    /// Advances the CPU by a single cycle
    /// - does nothing if a fault has already halted the CPU
    /// - resolves a pending FX0A if a key is pressed, otherwise idles
    /// - gets and executes the next opcode
    pub fn step(&mut self) -> StepResult {
        if let Some(fault) = self.halted {
            return StepResult::new(Status::Halted(fault), false);
        }

        if let Mode::WaitingForKey(register) = self.state.mode {
            if let Some(key) = self.state.keypad.first_pressed() {
                debug!("key {:X} pressed; stored in V{:X}", key, register);
                self.state.v[register] = key;
                self.state.mode = Mode::Running;
                self.state.advance();
            }
            return StepResult::new(Status::Ok, false);
        }

        match self.execute() {
            Ok(Ok(effect)) => StepResult::new(Status::Ok, effect == Effect::Redraw),
            Ok(Err(unknown)) => {
                warn!("skipping {}", unknown);
                self.state.advance();
                StepResult::new(Status::UnknownOpcode(unknown), false)
            }
            Err(fault) => {
                error!("halting: {}", fault);
                self.halted = Some(fault);
                StepResult::new(Status::Halted(fault), false)
            }
        }
    }

    /// Fetches and runs the instruction at the pc.
    /// The outer error is fatal, the inner one is an opcode that could be skipped.
    fn execute(&mut self) -> Result<Result<Effect, OpcodeError>, Fault> {
        let op = self.state.fetch()?;
        trace!(
            "{} v{:02X?} i{:04X} pc{:04X}",
            op,
            self.state.v,
            self.state.i,
            self.state.pc
        );

        let operation = match from_op(op) {
            Some(operation) => operation,
            None => {
                return Ok(Err(OpcodeError {
                    opcode: op,
                    address: self.state.pc,
                }))
            }
        };

        operation(op, &mut self.state, &self.config.quirks).map(Ok)
    }

    /// Counts the delay and sound timers down by one.
    /// Should be called at `TIMER_FREQUENCY` regardless of how fast `step` is called.
    pub fn tick_timers(&mut self) {
        self.state.timers.tick();
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    /// Whether a beep should currently be playing
    pub fn is_sound_active(&self) -> bool {
        self.state.timers.is_sound_active()
    }

    pub fn is_halted(&self) -> bool {
        self.halted.is_some()
    }

    pub fn quirks(&self) -> &Quirks {
        &self.config.quirks
    }

    /// Read-only access to the machine's registers, memory and so on
    pub fn state(&self) -> &State {
        &self.state
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}

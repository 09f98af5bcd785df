pub use chip8::{Chip8, Status, StepResult};
pub use config::{Config, Quirks};
pub use constants::{DEFAULT_CLOCK_SPEED, TIMER_FREQUENCY};
pub use error::{Fault, LoadError, OpcodeError};
pub use framebuffer::FrameBuffer;
pub use keypad::Keypad;
pub use memory::Memory;
pub use opcode::Opcode;
pub use stack::Stack;
pub use state::{Mode, State};
pub use timers::Timers;

mod chip8;
mod config;
pub mod constants;
mod error;
mod framebuffer;
mod instruction;
mod keypad;
mod memory;
mod opcode;
mod operations;
mod stack;
mod state;
mod timers;

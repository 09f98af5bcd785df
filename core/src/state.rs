use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::PROGRAM_START;
use crate::error::Fault;
use crate::framebuffer::FrameBuffer;
use crate::keypad::Keypad;
use crate::memory::Memory;
use crate::opcode::Opcode;
use crate::stack::Stack;
use crate::timers::Timers;

/// Whether the interpreter is executing instructions or parked on FX0A
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Running,
    /// Waiting for any key to be pressed; it'll be stored in the given register
    WaitingForKey(usize),
}

/// A snapshot of the Chip8 internal state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the carry flag
/// - (i) a 16-bit memory address register; only the low 12 bits are meaningful
///
/// Counter
/// - (pc) a 16-bit program counter
///
/// Timers
/// - 2 8-bit timers (delay & sound)
///
/// ## Memory
/// - a 16 frame stack of return addresses
/// - 4096 bytes of addressable memory
/// - 64x32 frame buffer
///
/// ## Input
/// - the pressed status of keys 0..F
/// - emulation halts in `Mode::WaitingForKey` until some key is pressed
#[derive(Clone, Debug)]
pub struct State {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub stack: Stack,
    pub timers: Timers,
    pub memory: Memory,
    pub frame_buffer: FrameBuffer,
    pub keypad: Keypad,
    pub mode: Mode,
    pub rng: StdRng,
}

impl State {
    pub fn new(rng: StdRng) -> Self {
        State {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_START,
            stack: Stack::new(),
            timers: Timers::default(),
            memory: Memory::with_sprite_sheet(),
            frame_buffer: FrameBuffer::new(),
            keypad: Keypad::default(),
            mode: Mode::Running,
            rng,
        }
    }

    /// A state whose random numbers are always the same; handy for tests.
    pub fn seeded(seed: u64) -> Self {
        State::new(StdRng::seed_from_u64(seed))
    }

    /// Moves on to the next instruction
    pub fn advance(&mut self) {
        self.pc += 2;
    }

    /// Skips the next instruction if `condition` holds, otherwise moves on to it
    pub fn skip_if(&mut self, condition: bool) {
        self.pc += if condition { 4 } else { 2 };
    }

    /// The opcode pointed at by the pc
    pub fn fetch(&self) -> Result<Opcode, Fault> {
        self.memory.read_word(self.pc as usize).map(Opcode)
    }
}

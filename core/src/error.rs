use thiserror::Error;

use crate::opcode::Opcode;

/// Reasons a ROM can be rejected by `Chip8::load_program`.
/// Memory is left untouched whenever one of these is returned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LoadError {
    #[error("ROM is empty")]
    Empty,

    #[error("ROM is too large ({size} bytes), max size is {max_size} bytes")]
    TooLarge { size: usize, max_size: usize },
}

/// An instruction that matches nothing in the instruction set.
/// Execution carries on past it.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("unknown opcode {opcode} at {address:#05X}")]
pub struct OpcodeError {
    pub opcode: Opcode,
    pub address: u16,
}

/// # Faults
/// Conditions the interpreter can't recover from.
/// Once one is raised the machine is halted and won't execute anything else.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    #[error("stack overflow: subroutine call at {address:#05X} with a full call stack")]
    StackOverflow { address: u16 },

    #[error("stack underflow: return at {address:#05X} with an empty call stack")]
    StackUnderflow { address: u16 },

    #[error("memory access out of bounds at address {address:#06X}")]
    MemoryOutOfBounds { address: usize },
}

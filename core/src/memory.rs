use std::fmt;

use crate::constants::{MEMORY_SIZE, SPRITE_SHEET};
use crate::error::Fault;

/// # Memory
/// 4096 bytes of addressable memory.
/// - `0x000..0x050` holds the sprite sheet
/// - `0x200..0x1000` holds the loaded ROM and whatever data it writes
///
/// Every accessor is bounds checked and reports the first address that falls
/// outside of memory instead of panicking.
#[derive(Clone)]
pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
}

impl Memory {
    pub fn new() -> Self {
        Memory {
            bytes: [0; MEMORY_SIZE],
        }
    }

    /// Memory as it is at power on: empty apart from the sprite sheet at 0x000
    pub fn with_sprite_sheet() -> Self {
        let mut memory = Memory::new();
        memory.bytes[..SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);
        memory
    }

    pub fn read(&self, addr: usize) -> Result<u8, Fault> {
        self.bytes
            .get(addr)
            .copied()
            .ok_or(Fault::MemoryOutOfBounds { address: addr })
    }

    pub fn write(&mut self, addr: usize, byte: u8) -> Result<(), Fault> {
        let cell = self
            .bytes
            .get_mut(addr)
            .ok_or(Fault::MemoryOutOfBounds { address: addr })?;
        *cell = byte;
        Ok(())
    }

    /// Two subsequent bytes combined big-endian.
    pub fn read_word(&self, addr: usize) -> Result<u16, Fault> {
        let word = self.slice(addr, 2)?;
        Ok(u16::from(word[0]) << 8 | u16::from(word[1]))
    }

    /// A read-only view of `len` bytes starting at `addr`
    pub fn slice(&self, addr: usize, len: usize) -> Result<&[u8], Fault> {
        Self::check_range(addr, len)?;
        Ok(&self.bytes[addr..addr + len])
    }

    /// A writable view of `len` bytes starting at `addr`
    pub fn slice_mut(&mut self, addr: usize, len: usize) -> Result<&mut [u8], Fault> {
        Self::check_range(addr, len)?;
        Ok(&mut self.bytes[addr..addr + len])
    }

    /// Copies `data` into memory starting at `addr`.
    /// Nothing is written unless all of `data` fits.
    pub fn load(&mut self, addr: usize, data: &[u8]) -> Result<(), Fault> {
        self.slice_mut(addr, data.len())?.copy_from_slice(data);
        Ok(())
    }

    fn check_range(addr: usize, len: usize) -> Result<(), Fault> {
        if addr >= MEMORY_SIZE {
            return Err(Fault::MemoryOutOfBounds { address: addr });
        }
        if len > MEMORY_SIZE - addr {
            return Err(Fault::MemoryOutOfBounds {
                address: MEMORY_SIZE,
            });
        }
        Ok(())
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Memory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Memory")
            .field("size", &MEMORY_SIZE)
            .finish_non_exhaustive()
    }
}

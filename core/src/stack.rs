use crate::constants::STACK_SIZE;
use crate::error::Fault;

/// # Call Stack
/// Stores return addresses when subroutines are called.
/// `sp` always points at the next free slot, so it doubles as the call depth.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stack {
    frames: [u16; STACK_SIZE],
    sp: usize,
}

impl Stack {
    pub fn new() -> Self {
        Stack {
            frames: [0; STACK_SIZE],
            sp: 0,
        }
    }

    /// Pushes the address of the calling instruction.
    ///
    /// # Arguments
    /// * `addr` the PC of the call; reported in the fault if the stack is full
    pub fn push(&mut self, addr: u16) -> Result<(), Fault> {
        let frame = self
            .frames
            .get_mut(self.sp)
            .ok_or(Fault::StackOverflow { address: addr })?;
        *frame = addr;
        self.sp += 1;
        Ok(())
    }

    /// Pops the most recent return address.
    ///
    /// # Arguments
    /// * `pc` the PC of the return; reported in the fault if the stack is empty
    pub fn pop(&mut self, pc: u16) -> Result<u16, Fault> {
        if self.sp == 0 {
            return Err(Fault::StackUnderflow { address: pc });
        }
        self.sp -= 1;
        Ok(self.frames[self.sp])
    }

    pub fn len(&self) -> usize {
        self.sp
    }

    pub fn is_empty(&self) -> bool {
        self.sp == 0
    }

    /// The live return addresses, oldest first.
    pub fn frames(&self) -> &[u16] {
        &self.frames[..self.sp]
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_in_reverse_order() {
        let mut stack = Stack::new();
        stack.push(0x200).unwrap();
        stack.push(0x300).unwrap();
        assert_eq!(stack.frames(), &[0x200, 0x300]);
        assert_eq!(stack.pop(0x0), Ok(0x300));
        assert_eq!(stack.pop(0x0), Ok(0x200));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_overflows_past_sixteen_frames() {
        let mut stack = Stack::new();
        for addr in 0..STACK_SIZE as u16 {
            assert_eq!(stack.push(addr), Ok(()));
        }
        assert_eq!(stack.len(), STACK_SIZE);
        assert_eq!(
            stack.push(0x400),
            Err(Fault::StackOverflow { address: 0x400 })
        );
        assert_eq!(stack.len(), STACK_SIZE);
    }

    #[test]
    fn test_underflows_when_empty() {
        let mut stack = Stack::new();
        assert_eq!(
            stack.pop(0x202),
            Err(Fault::StackUnderflow { address: 0x202 })
        );
        assert_eq!(stack.len(), 0);
    }
}

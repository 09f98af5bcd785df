use log::debug;
use rand::Rng;

use crate::config::Quirks;
use crate::constants::FONT_HEIGHT;
use crate::error::Fault;
use crate::opcode::Opcode;
use crate::state::{Mode, State};

/// What an operation did that the outside world may care about
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    Continue,
    /// The frame buffer was modified and should be redrawn
    Redraw,
}

type Outcome = Result<Effect, Fault>;

/// clear
pub fn clr(_op: Opcode, state: &mut State, _quirks: &Quirks) -> Outcome {
    state.frame_buffer.clear();
    state.advance();
    Ok(Effect::Redraw)
}

/// PC = STACK.pop() + 2
pub fn rts(_op: Opcode, state: &mut State, _quirks: &Quirks) -> Outcome {
    state.pc = state.stack.pop(state.pc)? + 0x2;
    Ok(Effect::Continue)
}

/// PC = addr
pub fn jump(op: Opcode, state: &mut State, _quirks: &Quirks) -> Outcome {
    state.pc = op.nnn();
    Ok(Effect::Continue)
}

/// STACK.push(PC); PC = addr
pub fn call(op: Opcode, state: &mut State, _quirks: &Quirks) -> Outcome {
    state.stack.push(state.pc)?;
    state.pc = op.nnn();
    Ok(Effect::Continue)
}

/// if Vx == kk then pc += 2
pub fn ske(op: Opcode, state: &mut State, _quirks: &Quirks) -> Outcome {
    state.skip_if(state.v[op.x()] == op.nn());
    Ok(Effect::Continue)
}

/// if Vx != kk then pc += 2
pub fn skne(op: Opcode, state: &mut State, _quirks: &Quirks) -> Outcome {
    state.skip_if(state.v[op.x()] != op.nn());
    Ok(Effect::Continue)
}

/// if Vx == Vy then pc += 2
pub fn skre(op: Opcode, state: &mut State, _quirks: &Quirks) -> Outcome {
    state.skip_if(state.v[op.x()] == state.v[op.y()]);
    Ok(Effect::Continue)
}

/// Vx = kk
pub fn load(op: Opcode, state: &mut State, _quirks: &Quirks) -> Outcome {
    state.v[op.x()] = op.nn();
    state.advance();
    Ok(Effect::Continue)
}

/// Vx += kk
/// Overflow wraps and, unlike `addr`, leaves VF alone
pub fn add(op: Opcode, state: &mut State, _quirks: &Quirks) -> Outcome {
    state.v[op.x()] = state.v[op.x()].wrapping_add(op.nn());
    state.advance();
    Ok(Effect::Continue)
}

/// Vx = Vy
pub fn mv(op: Opcode, state: &mut State, _quirks: &Quirks) -> Outcome {
    state.v[op.x()] = state.v[op.y()];
    state.advance();
    Ok(Effect::Continue)
}

/// Vx |= Vy
pub fn or(op: Opcode, state: &mut State, _quirks: &Quirks) -> Outcome {
    state.v[op.x()] |= state.v[op.y()];
    state.advance();
    Ok(Effect::Continue)
}

/// Vx &= Vy
pub fn and(op: Opcode, state: &mut State, _quirks: &Quirks) -> Outcome {
    state.v[op.x()] &= state.v[op.y()];
    state.advance();
    Ok(Effect::Continue)
}

/// Vx ^= Vy
pub fn xor(op: Opcode, state: &mut State, _quirks: &Quirks) -> Outcome {
    state.v[op.x()] ^= state.v[op.y()];
    state.advance();
    Ok(Effect::Continue)
}

/// Vx += Vy; VF = overflow
pub fn addr(op: Opcode, state: &mut State, _quirks: &Quirks) -> Outcome {
    let (res, over) = state.v[op.x()].overflowing_add(state.v[op.y()]);
    state.v[op.x()] = res;
    state.v[0xF] = over as u8;
    state.advance();
    Ok(Effect::Continue)
}

/// Vx -= Vy; VF = !underflow
pub fn sub(op: Opcode, state: &mut State, _quirks: &Quirks) -> Outcome {
    let (res, under) = state.v[op.x()].overflowing_sub(state.v[op.y()]);
    state.v[op.x()] = res;
    state.v[0xF] = !under as u8;
    state.advance();
    Ok(Effect::Continue)
}

/// Vx >>= 1; VF = shifted out bit
pub fn shr(op: Opcode, state: &mut State, _quirks: &Quirks) -> Outcome {
    let vx = state.v[op.x()];
    state.v[op.x()] = vx >> 1;
    state.v[0xF] = vx & 0x1;
    state.advance();
    Ok(Effect::Continue)
}

/// Vx = Vy - Vx; VF = !underflow
pub fn subn(op: Opcode, state: &mut State, _quirks: &Quirks) -> Outcome {
    let (res, under) = state.v[op.y()].overflowing_sub(state.v[op.x()]);
    state.v[op.x()] = res;
    state.v[0xF] = !under as u8;
    state.advance();
    Ok(Effect::Continue)
}

/// Vx <<= 1; VF = shifted out bit
pub fn shl(op: Opcode, state: &mut State, _quirks: &Quirks) -> Outcome {
    let vx = state.v[op.x()];
    state.v[op.x()] = vx << 1;
    state.v[0xF] = (vx >> 7) & 0x1;
    state.advance();
    Ok(Effect::Continue)
}

/// if Vx != Vy then pc += 2
pub fn skrne(op: Opcode, state: &mut State, _quirks: &Quirks) -> Outcome {
    state.skip_if(state.v[op.x()] != state.v[op.y()]);
    Ok(Effect::Continue)
}

/// I = addr
pub fn loadi(op: Opcode, state: &mut State, _quirks: &Quirks) -> Outcome {
    state.i = op.nnn();
    state.advance();
    Ok(Effect::Continue)
}

/// PC = V0 + addr
/// The result can point past the end of memory, which faults on the next fetch
pub fn jumpi(op: Opcode, state: &mut State, _quirks: &Quirks) -> Outcome {
    state.pc = op.nnn() + u16::from(state.v[0x0]);
    Ok(Effect::Continue)
}

/// Vx = rand_byte & kk
pub fn rand(op: Opcode, state: &mut State, _quirks: &Quirks) -> Outcome {
    let rand_byte: u8 = state.rng.gen();
    state.v[op.x()] = rand_byte & op.nn();
    state.advance();
    Ok(Effect::Continue)
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs a sprite from memory i..i+n at position x, y on the FrameBuffer with wrapping.
/// VF = whether any pixels were erased
pub fn draw(op: Opcode, state: &mut State, _quirks: &Quirks) -> Outcome {
    let x = state.v[op.x()] as usize;
    let y = state.v[op.y()] as usize;
    let sprite = state.memory.slice(state.i as usize, op.n() as usize)?;
    let collision = state.frame_buffer.draw_sprite(x, y, sprite);
    state.v[0xF] = collision as u8;
    state.advance();
    Ok(Effect::Redraw)
}

/// if Vx.pressed then pc += 2
pub fn skpr(op: Opcode, state: &mut State, _quirks: &Quirks) -> Outcome {
    state.skip_if(state.keypad.is_pressed(state.v[op.x()]));
    Ok(Effect::Continue)
}

/// if !Vx.pressed then pc += 2
pub fn skup(op: Opcode, state: &mut State, _quirks: &Quirks) -> Outcome {
    state.skip_if(!state.keypad.is_pressed(state.v[op.x()]));
    Ok(Effect::Continue)
}

/// Vx = DT
pub fn moved(op: Opcode, state: &mut State, _quirks: &Quirks) -> Outcome {
    state.v[op.x()] = state.timers.delay;
    state.advance();
    Ok(Effect::Continue)
}

/// await keypress for Vx
/// The pc stays put; the driver resolves the wait on a later cycle.
pub fn keyd(op: Opcode, state: &mut State, _quirks: &Quirks) -> Outcome {
    debug!("waiting for a key to store in V{:X}", op.x());
    state.mode = Mode::WaitingForKey(op.x());
    Ok(Effect::Continue)
}

/// DT = Vx
pub fn loads(op: Opcode, state: &mut State, _quirks: &Quirks) -> Outcome {
    state.timers.delay = state.v[op.x()];
    state.advance();
    Ok(Effect::Continue)
}

/// ST = Vx
pub fn ld(op: Opcode, state: &mut State, _quirks: &Quirks) -> Outcome {
    state.timers.sound = state.v[op.x()];
    state.advance();
    Ok(Effect::Continue)
}

/// I += Vx
/// I stays within the 12-bit address space
pub fn addi(op: Opcode, state: &mut State, _quirks: &Quirks) -> Outcome {
    state.i = (state.i + u16::from(state.v[op.x()])) & 0x0FFF;
    state.advance();
    Ok(Effect::Continue)
}

/// I = Vx * 5
/// Set I to the memory address of the sprite for Vx
/// See constants::SPRITE_SHEET for more details
pub fn ldspr(op: Opcode, state: &mut State, _quirks: &Quirks) -> Outcome {
    state.i = u16::from(state.v[op.x()]) * FONT_HEIGHT;
    state.advance();
    Ok(Effect::Continue)
}

/// mem[I..I+3] = bcd(Vx)
/// Store BCD repr of Vx in memory starting at address i
pub fn bcd(op: Opcode, state: &mut State, _quirks: &Quirks) -> Outcome {
    let vx = state.v[op.x()];
    let bcd = [vx / 100, vx / 10 % 10, vx % 10];
    state.memory.load(state.i as usize, &bcd)?;
    state.advance();
    Ok(Effect::Continue)
}

/// mem[I..=I+x] = V0..=Vx
pub fn stor(op: Opcode, state: &mut State, quirks: &Quirks) -> Outcome {
    let count = op.x() + 1;
    state.memory.load(state.i as usize, &state.v[..count])?;
    if quirks.load_store_increments_i {
        state.i += count as u16;
    }
    state.advance();
    Ok(Effect::Continue)
}

/// V0..=Vx = mem[I..=I+x]
pub fn read(op: Opcode, state: &mut State, quirks: &Quirks) -> Outcome {
    let count = op.x() + 1;
    let bytes = state.memory.slice(state.i as usize, count)?;
    state.v[..count].copy_from_slice(bytes);
    if quirks.load_store_increments_i {
        state.i += count as u16;
    }
    state.advance();
    Ok(Effect::Continue)
}

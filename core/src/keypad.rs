use log::warn;

use crate::constants::KEY_COUNT;

/// # Keypad
/// Chip-8 input is generated with a hexadecimal keypad:
/// ```text
/// |1|2|3|C|
/// |4|5|6|D|
/// |7|8|9|E|
/// |A|0|B|F|
/// ```
/// The host writes the pressed status of each key; the interpreter only reads it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Keypad {
    keys: [bool; KEY_COUNT],
}

impl Keypad {
    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 8-bit representation of the key, 0x0..=0xF
    /// * `pressed` whether the key is held down
    pub fn set(&mut self, key: u8, pressed: bool) {
        match self.keys.get_mut(key as usize) {
            Some(state) => *state = pressed,
            None => warn!("ignoring state change for nonexistent key {:#04X}", key),
        }
    }

    /// Only the low nibble of `key` is considered since registers can hold
    /// values past the last key.
    pub fn is_pressed(&self, key: u8) -> bool {
        self.keys[(key & 0xF) as usize]
    }

    /// The lowest-indexed key that's currently held down, if any
    pub fn first_pressed(&self) -> Option<u8> {
        self.keys.iter().position(|&pressed| pressed).map(|key| key as u8)
    }

    pub fn release_all(&mut self) {
        self.keys = [false; KEY_COUNT];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracks_pressed_keys() {
        let mut keypad = Keypad::default();
        keypad.set(0xE, true);
        assert!(keypad.is_pressed(0xE));
        keypad.set(0xE, false);
        assert!(!keypad.is_pressed(0xE));
    }

    #[test]
    fn test_ignores_nonexistent_keys() {
        let mut keypad = Keypad::default();
        keypad.set(0x10, true);
        assert_eq!(keypad, Keypad::default());
    }

    #[test]
    fn test_masks_register_values_to_a_key() {
        let mut keypad = Keypad::default();
        keypad.set(0x3, true);
        assert!(keypad.is_pressed(0x13));
    }

    #[test]
    fn test_first_pressed_picks_lowest_key() {
        let mut keypad = Keypad::default();
        assert_eq!(keypad.first_pressed(), None);
        keypad.set(0xB, true);
        keypad.set(0x4, true);
        assert_eq!(keypad.first_pressed(), Some(0x4));
        keypad.release_all();
        assert_eq!(keypad.first_pressed(), None);
    }
}

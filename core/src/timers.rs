/// # Timers
/// Two 8-bit countdown timers, each decremented once per tick until they reach 0.
/// The host ticks them at `TIMER_FREQUENCY`, independently of how fast
/// instructions are executed.
/// - `delay` can be read and written by programs
/// - `sound` beeps for as long as it's above 0
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Timers {
    pub delay: u8,
    pub sound: u8,
}

impl Timers {
    pub fn tick(&mut self) {
        self.delay = self.delay.saturating_sub(1);
        self.sound = self.sound.saturating_sub(1);
    }

    pub fn is_sound_active(&self) -> bool {
        self.sound > 0
    }
}

use sdl2::audio::{AudioCallback, AudioDevice, AudioSpecDesired};

const BEEP_FREQUENCY: f32 = 440.0;
const BEEP_VOLUME: f32 = 0.1;

struct SquareWave {
    phase_inc: f32,
    phase: f32,
    volume: f32,
}

impl AudioCallback for SquareWave {
    type Channel = f32;

    fn callback(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = if self.phase <= 0.5 {
                self.volume
            } else {
                -self.volume
            };
            self.phase = (self.phase + self.phase_inc) % 1.0;
        }
    }
}

/// Plays a tone for as long as the Chip-8 sound timer is running
pub trait Sound {
    fn set_active(&mut self, active: bool);
}

pub struct Beeper {
    device: AudioDevice<SquareWave>,
    playing: bool,
}

impl Beeper {
    pub fn new(sdl: &sdl2::Sdl) -> Result<Self, String> {
        let audio = sdl.audio()?;
        let desired = AudioSpecDesired {
            freq: Some(44_100),
            channels: Some(1),
            samples: None,
        };
        let device = audio.open_playback(None, &desired, |spec| SquareWave {
            phase_inc: BEEP_FREQUENCY / spec.freq as f32,
            phase: 0.0,
            volume: BEEP_VOLUME,
        })?;
        Ok(Beeper {
            device,
            playing: false,
        })
    }
}

impl Sound for Beeper {
    fn set_active(&mut self, active: bool) {
        if active == self.playing {
            return;
        }
        if active {
            self.device.resume();
        } else {
            self.device.pause();
        }
        self.playing = active;
    }
}

pub struct Mute;

impl Sound for Mute {
    fn set_active(&mut self, _active: bool) {}
}

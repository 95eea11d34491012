//! Buzzer melody mode.
//!
//! Plays [`MELODY`] over and over. The button is only checked between two
//! passes, so a press is honored once the current pass and its trailing
//! pause have finished.

use embedded_hal::delay::DelayNs;

use crate::config::ControllerConfig;
use crate::latch::PressLatch;
use crate::peripherals::{PwmChannel, PwmConfig, PwmOutput};

/// A note of a melody. A frequency of zero is a rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Note {
    pub frequency_hz: u16,
    pub duration_ms: u16,
}

impl Note {
    /// Creates a note.
    pub const fn new(frequency_hz: u16, duration_ms: u16) -> Self {
        Self {
            frequency_hz,
            duration_ms,
        }
    }

    /// Returns `true` if this note is silent.
    #[inline]
    pub const fn is_rest(&self) -> bool {
        self.frequency_hz == 0
    }
}

/// Opening theme played by the buzzer mode.
pub const MELODY: [Note; 16] = [
    Note::new(659, 150),
    Note::new(659, 150),
    Note::new(659, 150),
    Note::new(523, 150),
    Note::new(659, 150),
    Note::new(784, 300),
    Note::new(392, 300),
    Note::new(523, 150),
    Note::new(392, 300),
    Note::new(330, 300),
    Note::new(440, 150),
    Note::new(494, 150),
    Note::new(466, 150),
    Note::new(440, 150),
    Note::new(392, 300),
    Note::new(659, 300),
];

/// PWM wrap value producing `frequency_hz` from `clock_hz`.
///
/// The counter runs from 0 to the wrap inclusive, hence the `- 1`.
#[inline]
pub fn reload_value(clock_hz: u32, frequency_hz: u16) -> u32 {
    (clock_hz / u32::from(frequency_hz).max(1)).saturating_sub(1)
}

/// Time one pass over `melody` takes, in milliseconds.
///
/// Every sounded note is followed by `gap_ms` of silence; rests are not.
pub fn pass_duration_ms(melody: &[Note], gap_ms: u32) -> u32 {
    melody
        .iter()
        .map(|note| {
            let gap = if note.is_rest() { 0 } else { gap_ms };
            u32::from(note.duration_ms) + gap
        })
        .sum()
}

/// Plays every note of `melody` once.
///
/// The buzzer is silent when this returns. The latch is not consulted.
pub fn play_pass<P, T>(pwm: &mut P, delay: &mut T, melody: &[Note], config: &ControllerConfig)
where
    P: PwmOutput,
    T: DelayNs,
{
    for note in melody {
        if note.is_rest() {
            pwm.set_level(PwmChannel::Buzzer, 0);
            delay.delay_ms(u32::from(note.duration_ms));
            continue;
        }

        let top = reload_value(config.system_clock_hz, note.frequency_hz);
        pwm.configure(PwmChannel::Buzzer, PwmConfig::DEFAULT.with_wrap(top));
        pwm.set_level(PwmChannel::Buzzer, top / 2);
        delay.delay_ms(u32::from(note.duration_ms));

        pwm.set_level(PwmChannel::Buzzer, 0);
        delay.delay_ms(config.note_gap_ms);
    }
}

/// Runs the buzzer mode until the button is pressed.
///
/// The buzzer is silent and the press is consumed when this returns.
pub fn run<P, T>(pwm: &mut P, delay: &mut T, latch: &PressLatch, config: &ControllerConfig)
where
    P: PwmOutput,
    T: DelayNs,
{
    #[cfg(feature = "defmt")]
    defmt::info!("buzzer mode: start");

    pwm.configure(PwmChannel::Buzzer, PwmConfig::DEFAULT);

    while !latch.is_set() {
        play_pass(pwm, delay, &MELODY, config);
        delay.delay_ms(config.melody_pause_ms);
    }

    pwm.set_level(PwmChannel::Buzzer, 0);
    latch.clear();

    #[cfg(feature = "defmt")]
    defmt::info!("buzzer mode: stop");
}

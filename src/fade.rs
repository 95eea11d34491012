//! Complementary red/green fade mode.
//!
//! A single level drives the red LED directly and the green LED inversely.
//! The level is a 16-bit counter updated with wrapping arithmetic and never
//! clamped: the step that crosses full scale wraps around and the ramp keeps
//! rising from there until the counter lands exactly on full scale.

use embedded_hal::delay::DelayNs;

use crate::config::{ControllerConfig, LEVEL_MAX};
use crate::latch::PressLatch;
use crate::peripherals::{PwmChannel, PwmConfig, PwmOutput};

const FULL_SCALE: u16 = LEVEL_MAX as u16;

/// Fade position and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FadeLevel {
    level: u16,
    ascending: bool,
}

impl FadeLevel {
    /// Level 0, ascending.
    pub const fn new() -> Self {
        Self {
            level: 0,
            ascending: true,
        }
    }

    /// Current level.
    #[inline]
    pub const fn level(&self) -> u16 {
        self.level
    }

    /// Returns `true` while the level is rising.
    #[inline]
    pub const fn is_ascending(&self) -> bool {
        self.ascending
    }

    /// Advances the fade by one step.
    ///
    /// Rising, the direction flips once the stored level equals full scale.
    /// Falling, it flips once the stored level is at or below `step`.
    pub fn advance(&mut self, step: u16) {
        if self.ascending {
            self.level = self.level.wrapping_add(step);
            if self.level == FULL_SCALE {
                self.ascending = false;
            }
        } else {
            self.level = self.level.wrapping_sub(step);
            if self.level <= step {
                self.ascending = true;
            }
        }
    }

    /// Red channel level.
    #[inline]
    pub fn red_level(&self) -> u16 {
        self.level
    }

    /// Green channel level, `65535 - level`.
    #[inline]
    pub fn green_level(&self) -> u16 {
        FULL_SCALE - self.level
    }
}

impl Default for FadeLevel {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs the fade mode until the button is pressed.
///
/// Both LEDs are off and the press is consumed when this returns.
pub fn run<P, T>(pwm: &mut P, delay: &mut T, latch: &PressLatch, config: &ControllerConfig)
where
    P: PwmOutput,
    T: DelayNs,
{
    #[cfg(feature = "defmt")]
    defmt::info!("rgb fade mode: start");

    pwm.configure(PwmChannel::LedRed, PwmConfig::DEFAULT);
    pwm.configure(PwmChannel::LedGreen, PwmConfig::DEFAULT);

    let mut fade = FadeLevel::new();

    while !latch.is_set() {
        fade.advance(config.fade_step);
        pwm.set_level(PwmChannel::LedRed, u32::from(fade.red_level()));
        pwm.set_level(PwmChannel::LedGreen, u32::from(fade.green_level()));

        delay.delay_ms(config.fade_interval_ms);
    }

    pwm.set_level(PwmChannel::LedRed, 0);
    pwm.set_level(PwmChannel::LedGreen, 0);
    latch.clear();

    #[cfg(feature = "defmt")]
    defmt::info!("rgb fade mode: stop");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FADE_STEP;

    #[test]
    fn crossing_full_scale_wraps_and_keeps_rising() {
        let mut fade = FadeLevel::new();
        for step in 1..=20u16 {
            fade.advance(FADE_STEP);
            assert_eq!(fade.level(), step * FADE_STEP);
        }

        // 65100 + 3255 = 68355 wraps to 2819.
        fade.advance(FADE_STEP);
        assert_eq!(fade.level(), 2_819);
        assert!(fade.is_ascending());
        assert_eq!(fade.green_level(), 62_716);

        fade.advance(FADE_STEP);
        assert_eq!(fade.level(), 6_074);
        assert!(fade.is_ascending());
    }

    #[test]
    fn flips_only_on_exact_full_scale() {
        let mut fade = FadeLevel::new();
        let mut steps = 0u32;
        while fade.is_ascending() {
            fade.advance(FADE_STEP);
            steps += 1;
        }
        assert_eq!(steps, 28_409);
        assert_eq!(fade.level(), 65_535);
    }

    #[test]
    fn falls_to_remainder_below_one_step() {
        let mut fade = FadeLevel {
            level: FULL_SCALE,
            ascending: false,
        };
        for _ in 0..19 {
            fade.advance(FADE_STEP);
            assert!(!fade.is_ascending());
        }

        fade.advance(FADE_STEP);
        assert_eq!(fade.level(), 435);
        assert!(fade.is_ascending());
    }

    #[test]
    fn complementary_outputs() {
        let mut fade = FadeLevel::new();
        fade.advance(FADE_STEP);
        assert_eq!(fade.red_level(), 3_255);
        assert_eq!(fade.green_level(), 62_280);
        assert_eq!(
            u32::from(fade.red_level()) + u32::from(fade.green_level()),
            LEVEL_MAX
        );
    }
}

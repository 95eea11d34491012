//! Joystick-controlled LED brightness mode.
//!
//! The vertical axis dims the red LED as it rises, the horizontal axis
//! brightens the blue LED. The two LEDs follow different axes.

use embedded_hal::delay::DelayNs;

use crate::config::{ControllerConfig, SAMPLE_MAX, SAMPLE_TO_LEVEL_SCALE};
use crate::latch::PressLatch;
use crate::peripherals::{AnalogChannel, AnalogSampler, PwmChannel, PwmConfig, PwmOutput};

/// One reading of both joystick axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JoystickSample {
    pub x: u16,
    pub y: u16,
}

impl JoystickSample {
    /// Creates a sample from raw axis values.
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Samples the horizontal then the vertical axis.
    pub fn read<A: AnalogSampler>(sampler: &mut A) -> Self {
        let x = sampler.sample(AnalogChannel::Horizontal);
        let y = sampler.sample(AnalogChannel::Vertical);
        Self { x, y }
    }

    /// Red LED level: `(4095 - y) × 16`.
    pub fn red_level(&self) -> u32 {
        u32::from(SAMPLE_MAX - self.y.min(SAMPLE_MAX)) * SAMPLE_TO_LEVEL_SCALE
    }

    /// Blue LED level: `x × 16`.
    pub fn blue_level(&self) -> u32 {
        u32::from(self.x.min(SAMPLE_MAX)) * SAMPLE_TO_LEVEL_SCALE
    }
}

/// Runs the joystick mode until the button is pressed.
///
/// Both LEDs are off and the press is consumed when this returns.
pub fn run<A, P, T>(
    sampler: &mut A,
    pwm: &mut P,
    delay: &mut T,
    latch: &PressLatch,
    config: &ControllerConfig,
) where
    A: AnalogSampler,
    P: PwmOutput,
    T: DelayNs,
{
    #[cfg(feature = "defmt")]
    defmt::info!("joystick mode: start");

    pwm.configure(PwmChannel::LedRed, PwmConfig::DEFAULT);
    pwm.configure(PwmChannel::LedBlue, PwmConfig::DEFAULT);

    while !latch.is_set() {
        let sample = JoystickSample::read(sampler);
        pwm.set_level(PwmChannel::LedRed, sample.red_level());
        pwm.set_level(PwmChannel::LedBlue, sample.blue_level());

        delay.delay_ms(config.joystick_poll_ms);
    }

    pwm.set_level(PwmChannel::LedRed, 0);
    pwm.set_level(PwmChannel::LedBlue, 0);
    latch.clear();

    #[cfg(feature = "defmt")]
    defmt::info!("joystick mode: stop");
}

//! Hardware abstraction traits for the controller's collaborators.
//!
//! The controller never touches registers directly. Board crates implement
//! these traits on top of their HAL (ADC, PWM slices, display driver) and hand
//! the implementations to the [`ModeEngine`](crate::ModeEngine) through a
//! [`Board`]. Blocking delays use [`embedded_hal::delay::DelayNs`].

use crate::config::LEVEL_MAX;

/// Analog input channels of the joystick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnalogChannel {
    /// Vertical axis (VRy). Drives menu navigation and the red LED.
    Vertical,
    /// Horizontal axis (VRx). Drives the blue LED.
    Horizontal,
}

impl AnalogChannel {
    /// Converter input index of this channel.
    pub const fn index(self) -> u8 {
        match self {
            AnalogChannel::Vertical => 0,
            AnalogChannel::Horizontal => 1,
        }
    }
}

/// Trait for abstracting the analog-to-digital converter.
///
/// Implementations are treated as infallible. Handle any hardware errors
/// internally.
pub trait AnalogSampler {
    /// Routes the converter to the given input.
    fn select_channel(&mut self, channel: AnalogChannel);

    /// Performs one conversion on the selected input.
    ///
    /// Returns a value in `0..=4095`.
    fn read(&mut self) -> u16;

    /// Selects `channel` and performs one conversion.
    fn sample(&mut self, channel: AnalogChannel) -> u16 {
        self.select_channel(channel);
        self.read()
    }
}

/// PWM output channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PwmChannel {
    LedRed,
    LedGreen,
    LedBlue,
    Buzzer,
}

/// Counter configuration of a PWM channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PwmConfig {
    /// Integer clock divider. `1` runs the counter at the system clock.
    pub divider: u8,

    /// Counter wrap (top) value. Levels are compared against it.
    pub wrap: u32,
}

impl PwmConfig {
    /// Full 16-bit range at the undivided system clock.
    pub const DEFAULT: Self = Self {
        divider: 1,
        wrap: LEVEL_MAX,
    };

    /// Same divider, different wrap.
    pub const fn with_wrap(self, wrap: u32) -> Self {
        Self {
            divider: self.divider,
            wrap,
        }
    }
}

impl Default for PwmConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Trait for abstracting the PWM peripheral.
///
/// Implementations are treated as infallible. Levels above the configured wrap
/// are the implementation's concern; hardware usually saturates at full duty.
pub trait PwmOutput {
    /// Applies a counter configuration to the channel and enables it.
    fn configure(&mut self, channel: PwmChannel, config: PwmConfig);

    /// Sets the compare level (duty) of the channel.
    fn set_level(&mut self, channel: PwmChannel, level: u32);
}

/// Trait for abstracting a monochrome text display.
///
/// Drawing goes to a frame buffer; nothing is visible until [`present`](Display::present).
pub trait Display {
    /// Clears the frame buffer.
    fn clear(&mut self);

    /// Draws `text` with its top-left corner at (`x`, `y`).
    ///
    /// `scale` is an integer glyph magnification, `1` being the native font.
    fn draw_text(&mut self, x: i32, y: i32, scale: u8, text: &str);

    /// Draws the one pixel outline of a rectangle.
    fn draw_empty_rect(&mut self, x: i32, y: i32, width: u32, height: u32);

    /// Pushes the frame buffer to the panel.
    fn present(&mut self);
}

/// The peripherals owned by the main control loop.
///
/// Only the control thread touches these. The button interrupt sees nothing
/// but the [`PressLatch`](crate::PressLatch).
#[derive(Debug)]
pub struct Board<A, P, D, T> {
    pub sampler: A,
    pub pwm: P,
    pub display: D,
    pub delay: T,
}

impl<A, P, D, T> Board<A, P, D, T> {
    /// Bundles the peripherals.
    pub fn new(sampler: A, pwm: P, display: D, delay: T) -> Self {
        Self {
            sampler,
            pwm,
            display,
            delay,
        }
    }
}

//! Compile-time constants and runtime controller configuration.
//!
//! Timing, thresholds, scales and display geometry live here so they can be
//! tuned in one place. [`ControllerConfig`] carries the subset that a board
//! crate may want to override at runtime.

// Analog input

/// Largest value the analog sampler returns (12-bit converter).
pub const SAMPLE_MAX: u16 = 4095;

/// Multiplier mapping a 12-bit sample onto the 16-bit PWM range.
pub const SAMPLE_TO_LEVEL_SCALE: u32 = 16;

/// Width of the navigation zone scale a raw vertical sample is mapped onto.
pub const NAV_ZONE_SPAN: u32 = 40;

// PWM output

/// Full-scale PWM level (and default wrap) for the LED channels.
pub const LEVEL_MAX: u32 = 65535;

/// Reference system clock of the target (RP2040 default `clk_sys`).
pub const DEFAULT_SYSTEM_CLOCK_HZ: u32 = 125_000_000;

// Timing (milliseconds)

/// Delay at the end of every main-loop iteration.
pub const TICK_INTERVAL_MS: u32 = 50;

/// Settle delay after a successful menu navigation step.
pub const NAV_SETTLE_MS: u32 = 100;

/// Joystick mode sampling interval.
pub const JOYSTICK_POLL_MS: u32 = 50;

/// RGB fade step interval.
pub const FADE_INTERVAL_MS: u32 = 10;

/// Silence between two played notes.
pub const NOTE_GAP_MS: u32 = 20;

/// Pause after a complete pass over the melody.
pub const MELODY_PAUSE_MS: u32 = 500;

// Menu navigation thresholds (in navigation zone units)

/// Zones strictly below this move the selection to the next entry.
pub const NAV_NEXT_BELOW: u32 = 15;

/// Zones strictly above this move the selection to the previous entry.
pub const NAV_PREVIOUS_ABOVE: u32 = 25;

// RGB fade

/// Level increment applied on every fade step.
pub const FADE_STEP: u16 = 3255;

// Display geometry (SSD1306 128x64)

/// Panel width in pixels.
pub const DISPLAY_WIDTH: u32 = 128;

/// Panel height in pixels.
pub const DISPLAY_HEIGHT: u32 = 64;

/// Vertical distance between two menu rows, also the render offset per entry.
pub const MENU_ROW_HEIGHT: u8 = 12;

// Reference board wiring (Raspberry Pi Pico)
//
// Board crates own pin configuration; these document the wiring the timings
// above were tuned against.
//
//   LED blue       → GPIO12
//   LED red        → GPIO13
//   LED green      → GPIO11
//   Joystick SW    → GPIO22 (pull-up, falling edge)
//   Joystick VRy   → GPIO26 / ADC0
//   Joystick VRx   → GPIO27 / ADC1
//   Buzzer         → GPIO21
//   I²C SDA / SCL  → GPIO15 / GPIO14 (i2c1, 400 kHz)

/// Blue LED, PWM driven.
pub const PIN_LED_BLUE: u8 = 12;
/// Red LED, PWM driven.
pub const PIN_LED_RED: u8 = 13;
/// Green LED, PWM driven.
pub const PIN_LED_GREEN: u8 = 11;
/// Joystick push button, active low. Its falling edge feeds the press latch.
pub const PIN_BUTTON: u8 = 22;
/// Joystick vertical axis, ADC input 0.
pub const PIN_JOYSTICK_Y: u8 = 26;
/// Joystick horizontal axis, ADC input 1.
pub const PIN_JOYSTICK_X: u8 = 27;
/// Buzzer, PWM driven.
pub const PIN_BUZZER: u8 = 21;
/// Display I²C data line.
pub const PIN_I2C_SDA: u8 = 15;
/// Display I²C clock line.
pub const PIN_I2C_SCL: u8 = 14;

/// I²C address of the display.
pub const DISPLAY_I2C_ADDRESS: u8 = 0x3C;

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Navigation thresholds overlap or exceed the zone span.
    InvalidNavigationZones {
        /// Configured "next" threshold.
        next_below: u32,
        /// Configured "previous" threshold.
        previous_above: u32,
    },

    /// Fade step is zero or not below full scale.
    InvalidFadeStep(u16),

    /// System clock frequency is zero.
    ZeroSystemClock,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::InvalidNavigationZones {
                next_below,
                previous_above,
            } => {
                write!(
                    f,
                    "invalid navigation zones: next below {} must be less than previous above {}, which must not exceed {}",
                    next_below, previous_above, NAV_ZONE_SPAN
                )
            }
            ConfigError::InvalidFadeStep(step) => {
                write!(f, "fade step {} must be in 1..{}", step, LEVEL_MAX)
            }
            ConfigError::ZeroSystemClock => {
                write!(f, "system clock frequency must be non-zero")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Runtime-tunable controller parameters.
///
/// `Default` yields the reference values the firmware was tuned with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControllerConfig {
    /// Delay at the end of every main-loop iteration.
    pub tick_interval_ms: u32,

    /// Settle delay after a navigation step.
    pub nav_settle_ms: u32,

    /// Zones below this select the next entry.
    pub nav_next_below: u32,

    /// Zones above this select the previous entry.
    pub nav_previous_above: u32,

    /// Joystick mode sampling interval.
    pub joystick_poll_ms: u32,

    /// Fade level increment per step.
    pub fade_step: u16,

    /// Fade step interval.
    pub fade_interval_ms: u32,

    /// Silence between notes.
    pub note_gap_ms: u32,

    /// Pause after each melody pass.
    pub melody_pause_ms: u32,

    /// Clock feeding the buzzer PWM slice.
    pub system_clock_hz: u32,
}

impl ControllerConfig {
    /// Reference configuration.
    pub const DEFAULT: Self = Self {
        tick_interval_ms: TICK_INTERVAL_MS,
        nav_settle_ms: NAV_SETTLE_MS,
        nav_next_below: NAV_NEXT_BELOW,
        nav_previous_above: NAV_PREVIOUS_ABOVE,
        joystick_poll_ms: JOYSTICK_POLL_MS,
        fade_step: FADE_STEP,
        fade_interval_ms: FADE_INTERVAL_MS,
        note_gap_ms: NOTE_GAP_MS,
        melody_pause_ms: MELODY_PAUSE_MS,
        system_clock_hz: DEFAULT_SYSTEM_CLOCK_HZ,
    };

    /// Checks that the configuration can drive the controller.
    ///
    /// # Returns
    /// * `Ok(())` - Configuration is usable
    /// * `Err` - The first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.nav_next_below >= self.nav_previous_above
            || self.nav_previous_above > NAV_ZONE_SPAN
        {
            return Err(ConfigError::InvalidNavigationZones {
                next_below: self.nav_next_below,
                previous_above: self.nav_previous_above,
            });
        }

        if self.fade_step == 0 || u32::from(self.fade_step) >= LEVEL_MAX {
            return Err(ConfigError::InvalidFadeStep(self.fade_step));
        }

        if self.system_clock_hz == 0 {
            return Err(ConfigError::ZeroSystemClock);
        }

        Ok(())
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

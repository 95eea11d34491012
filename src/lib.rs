#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ModeEngine`**: Owns the peripherals, the `SystemState` and the `MenuSelection`; navigates the menu and dispatches to the modes
//! - **`PressLatch`**: The one flag shared with the button interrupt
//! - **`SystemState`**: `Menu` or one of the three running modes
//! - **`MenuSelection`**: Highlighted entry (1..=3) and its render offset
//! - **`AnalogSampler`**, **`PwmOutput`**, **`Display`**: Traits to implement for your hardware
//! - **`Board`**: Bundle of the peripherals owned by the control loop
//! - **`ControllerConfig`**: Timings and thresholds, validated into a `ConfigError`
//!
//! Blocking delays go through `embedded_hal::delay::DelayNs`. Every mode loop
//! sleeps between iterations and polls the latch as its only exit condition.

pub mod config;
pub mod peripherals;
pub mod latch;
pub mod types;
pub mod menu;
pub mod joystick;
pub mod buzzer;
pub mod fade;
pub mod engine;
#[cfg(feature = "graphics")]
pub mod graphics;

pub use config::{ConfigError, ControllerConfig};
pub use peripherals::{AnalogChannel, AnalogSampler, Board, Display, PwmChannel, PwmConfig, PwmOutput};
pub use latch::PressLatch;
pub use types::{MenuSelection, Navigation, SystemState};
pub use joystick::JoystickSample;
pub use buzzer::{MELODY, Note};
pub use fade::FadeLevel;
pub use engine::ModeEngine;
#[cfg(feature = "graphics")]
pub use graphics::GraphicsDisplay;

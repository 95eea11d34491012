//! Shared test infrastructure for joystick-menu integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::collections::VecDeque;

use embedded_hal::delay::DelayNs;
use joystick_menu::{
    AnalogChannel, AnalogSampler, Board, Display, PressLatch, PwmChannel, PwmConfig, PwmOutput,
};

/// Raw reading of an axis at rest.
pub const CENTER: u16 = 2048;

// ============================================================================
// Mock Delay
// ============================================================================

/// Delay that advances a virtual clock and presses the button at scheduled times
pub struct ScriptedDelay<'a> {
    latch: &'a PressLatch,
    elapsed_ms: u64,
    presses: VecDeque<u64>,
    calls: Vec<u32>,
}

impl<'a> ScriptedDelay<'a> {
    pub fn new(latch: &'a PressLatch) -> Self {
        Self {
            latch,
            elapsed_ms: 0,
            presses: VecDeque::new(),
            calls: Vec::new(),
        }
    }

    /// Press the button once the virtual clock reaches `at_ms`
    pub fn press_at(&mut self, at_ms: u64) {
        self.presses.push_back(at_ms);
    }

    /// Press the button `after_ms` from now
    pub fn press_in(&mut self, after_ms: u64) {
        let at = self.elapsed_ms + after_ms;
        self.press_at(at);
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Every delay requested so far, in milliseconds
    pub fn calls(&self) -> &[u32] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    fn advance(&mut self, ms: u32) {
        self.calls.push(ms);
        self.elapsed_ms += u64::from(ms);

        while let Some(&at) = self.presses.front() {
            if at > self.elapsed_ms {
                break;
            }
            self.presses.pop_front();
            self.latch.on_falling_edge();
        }
    }
}

impl DelayNs for ScriptedDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.advance(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.advance(ms);
    }
}

// ============================================================================
// Mock PWM
// ============================================================================

fn slot(channel: PwmChannel) -> usize {
    match channel {
        PwmChannel::LedRed => 0,
        PwmChannel::LedGreen => 1,
        PwmChannel::LedBlue => 2,
        PwmChannel::Buzzer => 3,
    }
}

/// PWM that records every level and configuration change
pub struct MockPwm {
    levels: [u32; 4],
    configs: [Option<PwmConfig>; 4],
    history: Vec<(PwmChannel, u32)>,
    config_history: Vec<(PwmChannel, PwmConfig)>,
}

impl MockPwm {
    pub fn new() -> Self {
        Self {
            levels: [0; 4],
            configs: [None; 4],
            history: Vec::new(),
            config_history: Vec::new(),
        }
    }

    pub fn level(&self, channel: PwmChannel) -> u32 {
        self.levels[slot(channel)]
    }

    pub fn config(&self, channel: PwmChannel) -> Option<PwmConfig> {
        self.configs[slot(channel)]
    }

    pub fn history(&self) -> &[(PwmChannel, u32)] {
        &self.history
    }

    pub fn config_history(&self) -> &[(PwmChannel, PwmConfig)] {
        &self.config_history
    }

    /// Levels written to one channel, in order
    pub fn levels_for(&self, channel: PwmChannel) -> Vec<u32> {
        self.history
            .iter()
            .filter(|(c, _)| *c == channel)
            .map(|(_, level)| *level)
            .collect()
    }

    pub fn all_off(&self) -> bool {
        self.levels.iter().all(|level| *level == 0)
    }
}

impl PwmOutput for MockPwm {
    fn configure(&mut self, channel: PwmChannel, config: PwmConfig) {
        self.configs[slot(channel)] = Some(config);
        self.config_history.push((channel, config));
    }

    fn set_level(&mut self, channel: PwmChannel, level: u32) {
        self.levels[slot(channel)] = level;
        self.history.push((channel, level));
    }
}

// ============================================================================
// Mock Analog Sampler
// ============================================================================

/// Sampler returning queued readings per channel, then a resting value
pub struct MockSampler {
    selected: Option<AnalogChannel>,
    vertical: VecDeque<u16>,
    horizontal: VecDeque<u16>,
    rest_vertical: u16,
    rest_horizontal: u16,
    reads: Vec<AnalogChannel>,
}

impl MockSampler {
    /// Both axes at rest in the dead zone
    pub fn centered() -> Self {
        Self::holding(CENTER, CENTER)
    }

    /// Stick held at (`x`, `y`)
    pub fn holding(x: u16, y: u16) -> Self {
        Self {
            selected: None,
            vertical: VecDeque::new(),
            horizontal: VecDeque::new(),
            rest_vertical: y,
            rest_horizontal: x,
            reads: Vec::new(),
        }
    }

    /// Queue vertical readings returned before the resting value
    pub fn with_vertical(mut self, readings: &[u16]) -> Self {
        self.vertical.extend(readings);
        self
    }

    /// Channels read so far, in order
    pub fn reads(&self) -> &[AnalogChannel] {
        &self.reads
    }
}

impl AnalogSampler for MockSampler {
    fn select_channel(&mut self, channel: AnalogChannel) {
        self.selected = Some(channel);
    }

    fn read(&mut self) -> u16 {
        let channel = self.selected.expect("channel selected before read");
        self.reads.push(channel);
        match channel {
            AnalogChannel::Vertical => self.vertical.pop_front().unwrap_or(self.rest_vertical),
            AnalogChannel::Horizontal => {
                self.horizontal.pop_front().unwrap_or(self.rest_horizontal)
            }
        }
    }
}

// ============================================================================
// Mock Display
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    Clear,
    Text {
        x: i32,
        y: i32,
        scale: u8,
        text: String,
    },
    Rect {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
    Present,
}

/// Display that records draw commands
pub struct RecordingDisplay {
    commands: Vec<DrawCommand>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn last(&self) -> Option<&DrawCommand> {
        self.commands.last()
    }

    pub fn presents(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| **c == DrawCommand::Present)
            .count()
    }

    /// Y coordinate of the most recent highlight rectangle
    pub fn last_highlight_y(&self) -> Option<i32> {
        self.commands.iter().rev().find_map(|c| match c {
            DrawCommand::Rect { y, .. } => Some(*y),
            _ => None,
        })
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }
}

impl Display for RecordingDisplay {
    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn draw_text(&mut self, x: i32, y: i32, scale: u8, text: &str) {
        self.commands.push(DrawCommand::Text {
            x,
            y,
            scale,
            text: text.to_string(),
        });
    }

    fn draw_empty_rect(&mut self, x: i32, y: i32, width: u32, height: u32) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
        });
    }

    fn present(&mut self) {
        self.commands.push(DrawCommand::Present);
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub type TestBoard<'a> = Board<MockSampler, MockPwm, RecordingDisplay, ScriptedDelay<'a>>;

/// Board with a centered stick and nothing recorded yet
pub fn test_board(latch: &PressLatch) -> TestBoard<'_> {
    Board::new(
        MockSampler::centered(),
        MockPwm::new(),
        RecordingDisplay::new(),
        ScriptedDelay::new(latch),
    )
}

/// Deterministic pseudo-random readings in `0..=4095`
pub fn pseudo_random_samples(seed: u32, count: usize) -> Vec<u16> {
    let mut state = seed;
    (0..count)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            ((state >> 16) % 4096) as u16
        })
        .collect()
}

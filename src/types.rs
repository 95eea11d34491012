//! Core types of the mode state machine.

use crate::config::{MENU_ROW_HEIGHT, NAV_ZONE_SPAN, SAMPLE_MAX};

/// The state of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SystemState {
    /// Menu is shown and navigated with the joystick.
    Menu,
    /// Joystick axes drive the red and blue LEDs.
    RunningJoystick,
    /// The buzzer plays the melody in a loop.
    RunningBuzzer,
    /// Red and green LEDs fade against each other.
    RunningRgb,
}

impl SystemState {
    /// Running state launched by a menu entry.
    ///
    /// Returns `None` for indices outside `1..=3`.
    pub const fn for_selection(index: u8) -> Option<Self> {
        match index {
            1 => Some(SystemState::RunningJoystick),
            2 => Some(SystemState::RunningBuzzer),
            3 => Some(SystemState::RunningRgb),
            _ => None,
        }
    }
}

/// The highlighted menu entry, always within `1..=3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MenuSelection {
    index: u8,
}

impl MenuSelection {
    /// First selectable entry.
    pub const FIRST: u8 = 1;

    /// Last selectable entry.
    pub const LAST: u8 = 3;

    /// Selection on the first entry.
    pub const fn new() -> Self {
        Self { index: Self::FIRST }
    }

    /// One-based index of the entry.
    #[inline]
    pub const fn index(self) -> u8 {
        self.index
    }

    /// Vertical pixel offset of the highlight, `12 × index`.
    #[inline]
    pub const fn offset(self) -> u8 {
        self.index * MENU_ROW_HEIGHT
    }

    /// Moves to the next entry unless already on the last one.
    ///
    /// Returns `true` if the selection moved.
    pub fn advance(&mut self) -> bool {
        if self.index < Self::LAST {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Moves to the previous entry unless already on the first one.
    ///
    /// Returns `true` if the selection moved.
    pub fn retreat(&mut self) -> bool {
        if self.index > Self::FIRST {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Applies a navigation request.
    ///
    /// Returns `true` if the selection moved.
    pub fn navigate(&mut self, navigation: Navigation) -> bool {
        match navigation {
            Navigation::Next => self.advance(),
            Navigation::Previous => self.retreat(),
            Navigation::Hold => false,
        }
    }
}

impl Default for MenuSelection {
    fn default() -> Self {
        Self::new()
    }
}

/// Menu navigation request derived from the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Navigation {
    /// Stick pushed towards the low end: move down the list.
    Next,
    /// Stick pushed towards the high end: move up the list.
    Previous,
    /// Stick in the dead zone.
    Hold,
}

impl Navigation {
    /// Maps a raw vertical sample onto a navigation request.
    ///
    /// The sample is scaled onto `0..=40`; zones strictly below `next_below`
    /// request [`Next`](Navigation::Next), zones strictly above
    /// `previous_above` request [`Previous`](Navigation::Previous).
    pub fn from_sample(raw: u16, next_below: u32, previous_above: u32) -> Self {
        let zone = navigation_zone(raw);
        if zone < next_below {
            Navigation::Next
        } else if zone > previous_above {
            Navigation::Previous
        } else {
            Navigation::Hold
        }
    }
}

/// Scales a raw sample onto the navigation zone span.
#[inline]
pub fn navigation_zone(raw: u16) -> u32 {
    u32::from(raw.min(SAMPLE_MAX)) * NAV_ZONE_SPAN / u32::from(SAMPLE_MAX)
}

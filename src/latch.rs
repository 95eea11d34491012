//! The single flag shared between the button interrupt and the control loop.

use core::sync::atomic::{AtomicBool, Ordering};

/// A one-slot mailbox signalling "the button was pressed".
///
/// The interrupt handler calls [`on_falling_edge`](PressLatch::on_falling_edge);
/// the control loop polls [`is_set`](PressLatch::is_set) and clears the flag
/// once per observed press. Only plain atomic loads and stores are used, so
/// the latch works on cores without compare-and-swap.
///
/// `const`-constructible, so it can live in a `static` reachable from the
/// interrupt handler:
///
/// ```
/// use joystick_menu::PressLatch;
///
/// static PRESS: PressLatch = PressLatch::new();
///
/// fn button_irq() {
///     PRESS.on_falling_edge();
/// }
///
/// button_irq();
/// assert!(PRESS.take());
/// assert!(!PRESS.is_set());
/// ```
#[derive(Debug, Default)]
pub struct PressLatch {
    pressed: AtomicBool,
}

impl PressLatch {
    /// Creates a cleared latch.
    pub const fn new() -> Self {
        Self {
            pressed: AtomicBool::new(false),
        }
    }

    /// Interrupt-side entry point. Sets the latch.
    #[inline]
    pub fn on_falling_edge(&self) {
        self.pressed.store(true, Ordering::Release);
    }

    /// Returns `true` if a press is pending.
    #[inline]
    pub fn is_set(&self) -> bool {
        self.pressed.load(Ordering::Acquire)
    }

    /// Consumes a pending press.
    #[inline]
    pub fn clear(&self) {
        self.pressed.store(false, Ordering::Release);
    }

    /// Clears the latch if set.
    ///
    /// # Returns
    /// `true` if a press was pending.
    pub fn take(&self) -> bool {
        if self.is_set() {
            self.clear();
            true
        } else {
            false
        }
    }
}

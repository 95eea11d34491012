//! [`Display`] adapter for embedded-graphics draw targets.
//!
//! Wraps any `DrawTarget<Color = BinaryColor>`, such as an SSD1306 in
//! buffered graphics mode, so the menu can be rendered with it.

use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_10X20};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use crate::peripherals::Display;

/// A [`Display`] backed by an embedded-graphics draw target.
///
/// Drawing errors are ignored, matching the fire-and-forget display contract.
/// `present` calls the flush function given at construction, e.g.
/// `|d| { let _ = d.flush(); }` for an SSD1306.
pub struct GraphicsDisplay<D> {
    target: D,
    present: fn(&mut D),
}

impl<D> GraphicsDisplay<D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    /// Wraps `target`; `present` pushes its buffer to the panel.
    pub fn new(target: D, present: fn(&mut D)) -> Self {
        Self { target, present }
    }

    /// The wrapped draw target.
    pub fn target(&self) -> &D {
        &self.target
    }

    /// Returns the wrapped draw target.
    pub fn into_inner(self) -> D {
        self.target
    }
}

fn font_for_scale(scale: u8) -> &'static MonoFont<'static> {
    if scale <= 1 { &FONT_6X10 } else { &FONT_10X20 }
}

impl<D> Display for GraphicsDisplay<D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    fn clear(&mut self) {
        let _ = self.target.clear(BinaryColor::Off);
    }

    fn draw_text(&mut self, x: i32, y: i32, scale: u8, text: &str) {
        let style = MonoTextStyle::new(font_for_scale(scale), BinaryColor::On);
        let _ = Text::with_baseline(text, Point::new(x, y), style, Baseline::Top)
            .draw(&mut self.target);
    }

    fn draw_empty_rect(&mut self, x: i32, y: i32, width: u32, height: u32) {
        let _ = Rectangle::new(Point::new(x, y), Size::new(width, height))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut self.target);
    }

    fn present(&mut self) {
        (self.present)(&mut self.target);
    }
}

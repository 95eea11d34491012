//! Main menu rendering.

use crate::peripherals::Display;

/// Menu title.
pub const TITLE: &str = "Menu";

/// Entry labels, in selection order.
pub const LABELS: [&str; 3] = ["Joystick LED", "Play Buzzer", "RGB LED"];

const TITLE_POS: (i32, i32) = (52, 2);
const LABEL_X: i32 = 6;
const FIRST_LABEL_Y: i32 = 18;
const LABEL_SPACING: i32 = 12;
const HIGHLIGHT_X: i32 = 2;
const HIGHLIGHT_WIDTH: u32 = 120;
const HIGHLIGHT_HEIGHT: u32 = 12;

/// Draws a complete menu frame and presents it.
///
/// `offset` is the selection's render offset
/// ([`MenuSelection::offset`](crate::MenuSelection::offset)); the highlight
/// rectangle is drawn two pixels below it.
pub fn render<D: Display>(display: &mut D, offset: u8) {
    display.clear();
    display.draw_text(TITLE_POS.0, TITLE_POS.1, 1, TITLE);
    display.draw_empty_rect(
        HIGHLIGHT_X,
        i32::from(offset) + 2,
        HIGHLIGHT_WIDTH,
        HIGHLIGHT_HEIGHT,
    );

    let mut y = FIRST_LABEL_Y;
    for label in LABELS {
        display.draw_text(LABEL_X, y, 1, label);
        y += LABEL_SPACING;
    }

    display.present();
}

//! Navigation view-model.
//!
//! Pure functions from scroll position to what the nav chrome should
//! look like. The rendering layer applies the result; nothing here
//! touches state.

/// Section ids in page order.
pub const SECTIONS: [&str; 4] = ["home", "blog", "product", "about"];

/// Offset added to the scroll position before comparing section tops, so
/// a section activates slightly before it reaches the top of the view.
const ACTIVATION_MARGIN: i64 = 120;

const DOT_ACTIVE_WIDTH: u16 = 20;
const DOT_IDLE_WIDTH: u16 = 6;

/// Scroll depth past which the navbar is drawn in its "scrolled" style.
const NAVBAR_SCROLL_THRESHOLD: i64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavViewModel {
    pub active_section: &'static str,
    pub dot_widths: Vec<u16>,
    pub navbar_scrolled: bool,
}

/// Compute the nav chrome for a scroll position.
///
/// `offsets` pairs each section id with its top position, in page order.
/// The active section is the last one whose top is at or above the
/// scroll position plus the activation margin; before the first section
/// the first entry is active.
pub fn nav_view_model(offsets: &[(&'static str, i64)], scroll_y: i64) -> NavViewModel {
    let probe = scroll_y + ACTIVATION_MARGIN;

    let mut active = offsets.first().map(|(id, _)| *id).unwrap_or("home");
    for (id, top) in offsets {
        if *top <= probe {
            active = id;
        }
    }

    let dot_widths = offsets
        .iter()
        .map(|(id, _)| {
            if *id == active {
                DOT_ACTIVE_WIDTH
            } else {
                DOT_IDLE_WIDTH
            }
        })
        .collect();

    NavViewModel {
        active_section: active,
        dot_widths,
        navbar_scrolled: scroll_y > NAVBAR_SCROLL_THRESHOLD,
    }
}

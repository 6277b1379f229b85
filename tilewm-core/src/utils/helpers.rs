//! Display lookups shared by display server implementations.
use crate::models::Xyhw;

/// The display holding `rect`'s top-left corner, falling back to the first display.
pub fn output_for(displays: &[Xyhw], rect: Xyhw) -> Option<&Xyhw> {
    displays
        .iter()
        .find(|display| display.contains_point(rect.top_left()))
        .or_else(|| displays.first())
}

/// Resize `rect` to the size of the output it is on. Without any output the rectangle is
/// returned unchanged.
pub fn size_to_output(displays: &[Xyhw], rect: Xyhw) -> Xyhw {
    match output_for(displays, rect) {
        Some(output) => Xyhw::new(rect.top_left(), output.size()),
        None => rect,
    }
}

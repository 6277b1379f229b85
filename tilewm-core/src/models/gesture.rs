use super::{Handle, Point, SurfaceHandle};
use serde::{Deserialize, Serialize};

/// Pointer bookkeeping for an in-progress drag or resize.
///
/// Drag and resize share the one slot.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Gesture<H: Handle> {
    /// Last cursor position seen by click, drag or resize.
    pub old_cursor: Point,
    /// The surface the last drag or resize acted on. Tried first on the next one.
    #[serde(bound = "")]
    pub working_surface: Option<SurfaceHandle<H>>,
}

impl<H: Handle> Gesture<H> {
    /// Forget the working surface if it is `surface`.
    pub fn release(&mut self, surface: &SurfaceHandle<H>) {
        if self.working_surface.as_ref() == Some(surface) {
            self.working_surface = None;
        }
    }
}

#[cfg(test)]
mod mock_display_server;

use crate::display_action::DisplayAction;
use crate::models::Handle;
use crate::models::{Point, Size, Xyhw};
use crate::models::{SessionHandle, SurfaceHandle, SurfaceParameters};
use crate::DisplayEvent;

#[cfg(test)]
pub use self::mock_display_server::{MockDisplayServer, MockSurface};

/// A surface as seen by the window manager. The display server owns it, the manager only moves
/// and resizes it.
pub trait Surface {
    fn top_left(&self) -> Point;

    fn size(&self) -> Size;

    fn move_to(&mut self, top_left: Point);

    fn resize(&mut self, size: Size);

    /// Whether `point` hits the part of the surface that accepts input.
    fn input_area_contains(&self, point: Point) -> bool;

    fn geometry(&self) -> Xyhw {
        Xyhw::new(self.top_left(), self.size())
    }
}

pub trait DisplayServer<H: Handle> {
    type Surface: Surface;

    fn get_next_events(&mut self) -> Vec<DisplayEvent<H>>;

    fn surface(&self, handle: &SurfaceHandle<H>) -> Option<&Self::Surface>;

    fn surface_mut(&mut self, handle: &SurfaceHandle<H>) -> Option<&mut Self::Surface>;

    /// The surface that stands for the session, usually its first one.
    fn default_surface(&self, session: &SessionHandle<H>) -> Option<SurfaceHandle<H>>;

    fn focused_surface(&self) -> Option<SurfaceHandle<H>>;

    /// Build a surface for `session` from parameters already adjusted by the policy.
    fn create_surface(
        &mut self,
        session: &SessionHandle<H>,
        params: &SurfaceParameters<H>,
    ) -> Option<SurfaceHandle<H>>;

    /// `rect` resized to the output it is on.
    fn size_to_output(&self, rect: Xyhw) -> Xyhw;

    fn execute_action(&mut self, _act: DisplayAction<H>) {}
}

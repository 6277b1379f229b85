//! Every surface fills its output.
use super::WindowManagementPolicy;
use crate::display_servers::DisplayServer;
use crate::models::{Handle, Point, SessionHandle, SurfaceHandle, SurfaceParameters};
use crate::models::{WindowState, Xyhw};
use crate::state::State;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Fullscreen;

impl<H: Handle> WindowManagementPolicy<H> for Fullscreen {
    fn handle_click<S: DisplayServer<H>>(
        &self,
        _state: &mut State<H>,
        _server: &mut S,
        _cursor: Point,
    ) {
    }

    fn handle_drag<S: DisplayServer<H>>(
        &self,
        _state: &mut State<H>,
        _server: &mut S,
        _cursor: Point,
        _old_cursor: Point,
    ) -> bool {
        false
    }

    fn handle_resize<S: DisplayServer<H>>(
        &self,
        _state: &mut State<H>,
        _server: &mut S,
        _cursor: Point,
        _old_cursor: Point,
    ) -> bool {
        false
    }

    fn handle_place_new_surface<S: DisplayServer<H>>(
        &self,
        _state: &State<H>,
        server: &S,
        _session: &SessionHandle<H>,
        mut params: SurfaceParameters<H>,
    ) -> SurfaceParameters<H> {
        let rect = server.size_to_output(Xyhw::new(params.top_left, params.size));
        params.size = rect.size();
        params
    }

    fn handle_set_state<S: DisplayServer<H>>(
        &self,
        _state: &mut State<H>,
        _server: &mut S,
        _surface: &SurfaceHandle<H>,
        value: WindowState,
    ) -> WindowState {
        value
    }

    fn handle_session_info_updated<S: DisplayServer<H>>(
        &self,
        _state: &mut State<H>,
        _server: &mut S,
    ) {
    }

    fn handle_displays_updated<S: DisplayServer<H>>(&self, _state: &mut State<H>, _server: &mut S) {
    }
}

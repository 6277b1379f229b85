//! Every session gets its own strip of the screen.
//!
//! - Click or tap a tile to focus its session.
//! - Alt + primary button drags a surface, Alt + middle button resizes it.
//! - Alt, Shift or Ctrl + F11 toggles maximized, vertically and horizontally maximized.
use super::WindowManagementPolicy;
use crate::display_action::DisplayAction;
use crate::display_servers::{DisplayServer, Surface};
use crate::models::{Handle, Point, SessionHandle, SurfaceHandle, SurfaceParameters};
use crate::models::{WindowState, Xyhw};
use crate::state::State;
use crate::surface_geometry::{self, clip_to_tile};
use crate::tile_allocator::update_tiles;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tiling;

impl<H: Handle> WindowManagementPolicy<H> for Tiling {
    fn handle_click<S: DisplayServer<H>>(
        &self,
        state: &mut State<H>,
        server: &mut S,
        cursor: Point,
    ) {
        if let Some(session) = state.session_under(cursor) {
            server.execute_action(DisplayAction::FocusSession(session));
        }
    }

    fn handle_drag<S: DisplayServer<H>>(
        &self,
        state: &mut State<H>,
        server: &mut S,
        cursor: Point,
        old_cursor: Point,
    ) -> bool {
        apply_to_grabbed_surface(state, server, cursor, old_cursor, |surface, to, from, tile| {
            surface_geometry::drag(surface, to, from, tile)
        })
    }

    fn handle_resize<S: DisplayServer<H>>(
        &self,
        state: &mut State<H>,
        server: &mut S,
        cursor: Point,
        old_cursor: Point,
    ) -> bool {
        apply_to_grabbed_surface(state, server, cursor, old_cursor, |surface, to, from, tile| {
            surface_geometry::resize(surface, to, from, tile)
        })
    }

    fn handle_place_new_surface<S: DisplayServer<H>>(
        &self,
        state: &State<H>,
        _server: &S,
        session: &SessionHandle<H>,
        mut params: SurfaceParameters<H>,
    ) -> SurfaceParameters<H> {
        let Some(tile) = state.session(session).map(|s| s.tile) else {
            tracing::debug!("No tile for session {:?}, placing surface as requested", session);
            return params;
        };
        params.top_left = params.top_left + (tile.top_left() - Point::default());
        clip_to_tile(&mut params, tile);
        params
    }

    fn handle_new_surface<S: DisplayServer<H>>(
        &self,
        _state: &mut State<H>,
        _server: &mut S,
        session: &SessionHandle<H>,
        surface: &SurfaceHandle<H>,
    ) {
        tracing::trace!("Surface {:?} added to session {:?}", surface, session);
    }

    fn handle_delete_surface<S: DisplayServer<H>>(
        &self,
        _state: &mut State<H>,
        _server: &mut S,
        surface: &SurfaceHandle<H>,
    ) {
        tracing::trace!("Surface {:?} going away", surface);
    }

    fn handle_set_state<S: DisplayServer<H>>(
        &self,
        state: &mut State<H>,
        server: &mut S,
        handle: &SurfaceHandle<H>,
        value: WindowState,
    ) -> WindowState {
        let Some(info) = state.surface(handle) else {
            tracing::debug!("Surface {:?} is not managed, ignoring state {:?}", handle, value);
            return WindowState::Unknown;
        };
        let current = info.state;
        if !value.is_supported() {
            return current;
        }
        let Some(tile) = state.session(&info.session).map(|s| s.tile) else {
            return current;
        };
        let Some(surface) = server.surface_mut(handle) else {
            tracing::debug!("Surface {:?} is gone, ignoring state {:?}", handle, value);
            return current;
        };
        let Some(info) = state.surface_mut(handle) else {
            return current;
        };

        if info.is_restored() {
            info.restore_rect = surface.geometry();
        }
        if info.state == value {
            return info.state;
        }

        if let Some(target) = value.placement(tile, info.restore_rect) {
            surface.move_to(target.top_left());
            surface.resize(target.size());
        }
        info.state = value;
        value
    }

    fn handle_session_info_updated<S: DisplayServer<H>>(
        &self,
        state: &mut State<H>,
        server: &mut S,
    ) {
        update_tiles(state, server);
    }

    fn handle_displays_updated<S: DisplayServer<H>>(&self, state: &mut State<H>, server: &mut S) {
        update_tiles(state, server);
    }
}

/// Find the surface grabbed by the pointer and apply `act` to it, inside its session's tile.
///
/// The surface of the last drag or resize is tried first, then the session's default surface,
/// then the rest of the session's surfaces. The one that takes it becomes the working surface.
fn apply_to_grabbed_surface<H, S, F>(
    state: &mut State<H>,
    server: &mut S,
    cursor: Point,
    old_cursor: Point,
    act: F,
) -> bool
where
    H: Handle,
    S: DisplayServer<H>,
    F: Fn(&mut S::Surface, Point, Point, Xyhw) -> bool,
{
    let Some(session) = state.session_under(cursor) else {
        return false;
    };
    if state.session_under(old_cursor) != Some(session) {
        return false;
    }
    let Some(info) = state.session(&session) else {
        return false;
    };
    let tile = info.tile;

    let mut candidates: Vec<SurfaceHandle<H>> = vec![];
    candidates.extend(state.gesture.working_surface);
    candidates.extend(server.default_surface(&session));
    candidates.extend(info.surfaces.iter().copied());

    for handle in candidates {
        let Some(surface) = server.surface_mut(&handle) else {
            continue;
        };
        if act(surface, cursor, old_cursor, tile) {
            state.gesture.working_surface = Some(handle);
            return true;
        }
    }
    false
}

//! Window management strategies.
mod fullscreen;
mod tiling;

use crate::display_servers::DisplayServer;
use crate::errors::TileError;
use crate::models::{Handle, Point, SessionHandle, SurfaceHandle, SurfaceParameters};
use crate::models::WindowState;
use crate::state::State;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use fullscreen::Fullscreen;
pub use tiling::Tiling;

pub const TILING: &str = "tiling";
pub const FULLSCREEN: &str = "fullscreen";

/// What a window management strategy decides. The manager keeps the bookkeeping, a policy only
/// moves surfaces and hands out focus.
pub trait WindowManagementPolicy<H: Handle> {
    fn handle_click<S: DisplayServer<H>>(
        &self,
        state: &mut State<H>,
        server: &mut S,
        cursor: Point,
    );

    /// Returns true if a surface was moved.
    fn handle_drag<S: DisplayServer<H>>(
        &self,
        state: &mut State<H>,
        server: &mut S,
        cursor: Point,
        old_cursor: Point,
    ) -> bool;

    /// Returns true if a surface was resized.
    fn handle_resize<S: DisplayServer<H>>(
        &self,
        state: &mut State<H>,
        server: &mut S,
        cursor: Point,
        old_cursor: Point,
    ) -> bool;

    /// Adjust a client's request before the surface is built.
    fn handle_place_new_surface<S: DisplayServer<H>>(
        &self,
        state: &State<H>,
        server: &S,
        session: &SessionHandle<H>,
        params: SurfaceParameters<H>,
    ) -> SurfaceParameters<H>;

    fn handle_new_surface<S: DisplayServer<H>>(
        &self,
        _state: &mut State<H>,
        _server: &mut S,
        _session: &SessionHandle<H>,
        _surface: &SurfaceHandle<H>,
    ) {
    }

    fn handle_delete_surface<S: DisplayServer<H>>(
        &self,
        _state: &mut State<H>,
        _server: &mut S,
        _surface: &SurfaceHandle<H>,
    ) {
    }

    /// Returns the state the surface is in afterwards.
    fn handle_set_state<S: DisplayServer<H>>(
        &self,
        state: &mut State<H>,
        server: &mut S,
        surface: &SurfaceHandle<H>,
        value: WindowState,
    ) -> WindowState;

    fn handle_session_info_updated<S: DisplayServer<H>>(
        &self,
        state: &mut State<H>,
        server: &mut S,
    );

    fn handle_displays_updated<S: DisplayServer<H>>(&self, state: &mut State<H>, server: &mut S);
}

/// The strategy picked at startup.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    Tiling,
    Fullscreen,
}

impl FromStr for Policy {
    type Err = TileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            TILING => Ok(Self::Tiling),
            FULLSCREEN => Ok(Self::Fullscreen),
            _ => Err(TileError::UnknownWindowManager(s.to_owned())),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tiling => f.write_str(TILING),
            Self::Fullscreen => f.write_str(FULLSCREEN),
        }
    }
}

macro_rules! dispatch {
    ($policy:expr, $method:ident($($arg:expr),*)) => {
        match $policy {
            Policy::Tiling => Tiling.$method($($arg),*),
            Policy::Fullscreen => Fullscreen.$method($($arg),*),
        }
    };
}

impl<H: Handle> WindowManagementPolicy<H> for Policy {
    fn handle_click<S: DisplayServer<H>>(
        &self,
        state: &mut State<H>,
        server: &mut S,
        cursor: Point,
    ) {
        dispatch!(self, handle_click(state, server, cursor));
    }

    fn handle_drag<S: DisplayServer<H>>(
        &self,
        state: &mut State<H>,
        server: &mut S,
        cursor: Point,
        old_cursor: Point,
    ) -> bool {
        dispatch!(self, handle_drag(state, server, cursor, old_cursor))
    }

    fn handle_resize<S: DisplayServer<H>>(
        &self,
        state: &mut State<H>,
        server: &mut S,
        cursor: Point,
        old_cursor: Point,
    ) -> bool {
        dispatch!(self, handle_resize(state, server, cursor, old_cursor))
    }

    fn handle_place_new_surface<S: DisplayServer<H>>(
        &self,
        state: &State<H>,
        server: &S,
        session: &SessionHandle<H>,
        params: SurfaceParameters<H>,
    ) -> SurfaceParameters<H> {
        dispatch!(self, handle_place_new_surface(state, server, session, params))
    }

    fn handle_new_surface<S: DisplayServer<H>>(
        &self,
        state: &mut State<H>,
        server: &mut S,
        session: &SessionHandle<H>,
        surface: &SurfaceHandle<H>,
    ) {
        dispatch!(self, handle_new_surface(state, server, session, surface));
    }

    fn handle_delete_surface<S: DisplayServer<H>>(
        &self,
        state: &mut State<H>,
        server: &mut S,
        surface: &SurfaceHandle<H>,
    ) {
        dispatch!(self, handle_delete_surface(state, server, surface));
    }

    fn handle_set_state<S: DisplayServer<H>>(
        &self,
        state: &mut State<H>,
        server: &mut S,
        surface: &SurfaceHandle<H>,
        value: WindowState,
    ) -> WindowState {
        dispatch!(self, handle_set_state(state, server, surface, value))
    }

    fn handle_session_info_updated<S: DisplayServer<H>>(
        &self,
        state: &mut State<H>,
        server: &mut S,
    ) {
        dispatch!(self, handle_session_info_updated(state, server));
    }

    fn handle_displays_updated<S: DisplayServer<H>>(&self, state: &mut State<H>, server: &mut S) {
        dispatch!(self, handle_displays_updated(state, server));
    }
}

//! Surface Information
use super::{Handle, SessionHandle, SurfaceHandle, WindowState, Xyhw};
use serde::{Deserialize, Serialize};

/// Per-surface bookkeeping. The surface itself belongs to the display server.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SurfaceInfo<H: Handle> {
    #[serde(bound = "")]
    pub handle: SurfaceHandle<H>,
    #[serde(bound = "")]
    pub session: SessionHandle<H>,
    pub state: WindowState,
    /// Geometry to go back to when the surface is restored. Only re-captured when the surface
    /// leaves the restored state.
    pub restore_rect: Xyhw,
    #[serde(bound = "")]
    pub parent: Option<SurfaceHandle<H>>,
    #[serde(bound = "")]
    pub children: Vec<SurfaceHandle<H>>,
}

impl<H: Handle> SurfaceInfo<H> {
    #[must_use]
    pub fn new(handle: SurfaceHandle<H>, session: SessionHandle<H>, geometry: Xyhw) -> Self {
        Self {
            handle,
            session,
            state: WindowState::Restored,
            restore_rect: geometry,
            parent: None,
            children: vec![],
        }
    }

    #[must_use]
    pub fn is_restored(&self) -> bool {
        self.state == WindowState::Restored
    }
}

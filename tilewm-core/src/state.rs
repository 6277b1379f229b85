//! Everything the window manager knows about sessions, surfaces and displays.
use crate::config::Config;
use crate::models::{Gesture, Handle, Point, SessionHandle, SessionInfo, SurfaceHandle};
use crate::models::{SurfaceInfo, Xyhw};
use crate::utils::modmask_lookup::ModMask;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct State<H: Handle> {
    /// Connected sessions in the order they arrived. Tiles are handed out in this order.
    #[serde(bound = "")]
    pub sessions: Vec<SessionInfo<H>>,
    #[serde(bound = "")]
    pub surfaces: Vec<SurfaceInfo<H>>,
    pub displays: Vec<Xyhw>,
    #[serde(bound = "")]
    pub gesture: Gesture<H>,
    pub mousekey: ModMask,
}

impl<H: Handle> State<H> {
    pub(crate) fn new(config: &impl Config) -> Self {
        Self {
            sessions: vec![],
            surfaces: vec![],
            displays: vec![],
            gesture: Gesture::default(),
            mousekey: config.mousekey_mask(),
        }
    }

    #[must_use]
    pub fn session(&self, handle: &SessionHandle<H>) -> Option<&SessionInfo<H>> {
        self.sessions.iter().find(|s| &s.handle == handle)
    }

    pub fn session_mut(&mut self, handle: &SessionHandle<H>) -> Option<&mut SessionInfo<H>> {
        self.sessions.iter_mut().find(|s| &s.handle == handle)
    }

    #[must_use]
    pub fn surface(&self, handle: &SurfaceHandle<H>) -> Option<&SurfaceInfo<H>> {
        self.surfaces.iter().find(|s| &s.handle == handle)
    }

    pub fn surface_mut(&mut self, handle: &SurfaceHandle<H>) -> Option<&mut SurfaceInfo<H>> {
        self.surfaces.iter_mut().find(|s| &s.handle == handle)
    }

    /// The first session whose tile holds `point`.
    #[must_use]
    pub fn session_under(&self, point: Point) -> Option<SessionHandle<H>> {
        self.sessions
            .iter()
            .find(|s| s.tile.contains_point(point))
            .map(|s| s.handle)
    }

    /// Bounding rectangle of every display, `None` without displays.
    #[must_use]
    pub fn display_area(&self) -> Option<Xyhw> {
        Xyhw::bounding(&self.displays)
    }
}

use super::{Handle, SessionHandle, SurfaceHandle, Xyhw};
use serde::{Deserialize, Serialize};

/// Per-session bookkeeping: the tile handed to the session and its surfaces in creation order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SessionInfo<H: Handle> {
    #[serde(bound = "")]
    pub handle: SessionHandle<H>,
    pub tile: Xyhw,
    #[serde(bound = "")]
    pub surfaces: Vec<SurfaceHandle<H>>,
}

impl<H: Handle> SessionInfo<H> {
    #[must_use]
    pub fn new(handle: SessionHandle<H>) -> Self {
        Self {
            handle,
            tile: Xyhw::default(),
            surfaces: vec![],
        }
    }
}

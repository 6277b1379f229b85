use super::{Handle, Point, Size, SurfaceHandle};
use serde::{Deserialize, Serialize};

/// A request to create a surface, adjusted by the policy before the surface is built.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct SurfaceParameters<H: Handle> {
    pub top_left: Point,
    pub size: Size,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, bound = "")]
    pub parent: Option<SurfaceHandle<H>>,
}

impl<H: Handle> SurfaceParameters<H> {
    #[must_use]
    pub fn new(top_left: Point, size: Size) -> Self {
        Self {
            top_left,
            size,
            name: None,
            parent: None,
        }
    }

    #[must_use]
    pub fn with_parent(mut self, parent: SurfaceHandle<H>) -> Self {
        self.parent = Some(parent);
        self
    }
}

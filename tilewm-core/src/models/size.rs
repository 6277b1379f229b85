use super::Displacement;
use serde::{Deserialize, Serialize};

/// Width and height of a surface or display area.
#[derive(Serialize, Deserialize, Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    pub w: i32,
    pub h: i32,
}

impl Size {
    #[must_use]
    pub const fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }

    #[must_use]
    pub const fn as_displacement(self) -> Displacement {
        Displacement {
            dx: self.w,
            dy: self.h,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }
}

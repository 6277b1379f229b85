use super::{Point, Size, Xyhw};
use crate::errors::TileError;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// Presentation state of a surface.
///
/// The integer values are stable and are what a display server exchanges with its clients.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum WindowState {
    Unknown,
    #[default]
    Restored,
    Minimized,
    Maximized,
    MaximizedVert,
    Fullscreen,
    MaximizedHorz,
}

impl WindowState {
    /// States the tiling policy knows how to lay out.
    #[must_use]
    pub const fn is_supported(self) -> bool {
        matches!(
            self,
            Self::Restored | Self::Maximized | Self::MaximizedHorz | Self::MaximizedVert
        )
    }

    /// Where a surface in this state goes, given its session's tile and the geometry it had
    /// while restored. `None` for unsupported states.
    #[must_use]
    pub const fn placement(self, tile: Xyhw, restore: Xyhw) -> Option<Xyhw> {
        let placed = match self {
            Self::Restored => restore,
            Self::Maximized => tile,
            Self::MaximizedHorz => Xyhw::new(
                Point::new(tile.x(), restore.y()),
                Size::new(tile.w(), restore.h()),
            ),
            Self::MaximizedVert => Xyhw::new(
                Point::new(restore.x(), tile.y()),
                Size::new(restore.w(), tile.h()),
            ),
            Self::Unknown | Self::Minimized | Self::Fullscreen => return None,
        };
        Some(placed)
    }
}

impl From<WindowState> for i32 {
    fn from(state: WindowState) -> Self {
        match state {
            WindowState::Unknown => 0,
            WindowState::Restored => 1,
            WindowState::Minimized => 2,
            WindowState::Maximized => 3,
            WindowState::MaximizedVert => 4,
            WindowState::Fullscreen => 5,
            WindowState::MaximizedHorz => 6,
        }
    }
}

impl TryFrom<i32> for WindowState {
    type Error = TileError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Unknown),
            1 => Ok(Self::Restored),
            2 => Ok(Self::Minimized),
            3 => Ok(Self::Maximized),
            4 => Ok(Self::MaximizedVert),
            5 => Ok(Self::Fullscreen),
            6 => Ok(Self::MaximizedHorz),
            _ => Err(TileError::InvalidWindowState(value)),
        }
    }
}

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TileError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TileError {
    /// The configured policy name is neither `tiling` nor `fullscreen`.
    #[error("Unknown window manager: {0}")]
    UnknownWindowManager(String),
    #[error("Invalid window state value: {0}")]
    InvalidWindowState(i32),
}

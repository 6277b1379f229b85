//! Window management policy and tiling engine.
// We deny clippy pedantic lints, primarily to keep code as correct as possible
// Remember, the goal of tilewm is to do one thing and to do that one thing
// well: decide where surfaces go.
#![warn(clippy::pedantic)]
// Each of these lints are globally allowed because they otherwise make a lot
// of noise. However, work to ensure that each use of one of these is correct
// would be very much appreciated.
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
pub mod config;
mod display_action;
mod display_event;
pub mod display_servers;
pub mod errors;
mod event_loop;
mod handlers;
pub mod input_event;
pub mod models;
pub mod policies;
pub mod state;
pub mod surface_geometry;
pub mod tile_allocator;
pub mod utils;

pub use config::Config;
pub use display_action::DisplayAction;
pub use display_event::DisplayEvent;
pub use display_servers::{DisplayServer, Surface};
pub use errors::{Result, TileError};
pub use input_event::InputEvent;
pub use models::Manager;
pub use models::WindowState;
pub use policies::{Policy, WindowManagementPolicy};
pub use state::State;

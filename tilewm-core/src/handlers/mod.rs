mod display_config_handler;
pub mod display_event_handler;
mod event_tracker;
mod mouse_handler;
mod session_handler;
mod surface_handler;

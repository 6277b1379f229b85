//! Objects (such as surfaces and sessions) used to develop `tilewm`.
mod gesture;
mod handle;
mod manager;
mod point;
mod session;
mod size;
mod surface;
mod surface_parameters;
mod window_state;
mod xyhw;

pub use gesture::Gesture;
pub use handle::Handle;
#[cfg(test)]
pub(crate) use handle::MockHandle;
pub use handle::{SessionHandle, SurfaceHandle};
pub use manager::Manager;
pub use point::{Displacement, Point};
pub use session::SessionInfo;
pub use size::Size;
pub use surface::SurfaceInfo;
pub use surface_parameters::SurfaceParameters;
pub use window_state::WindowState;
pub use xyhw::Xyhw;

use crate::models::Handle;
use crate::models::SessionHandle;
use crate::models::SurfaceHandle;
use crate::models::WindowState;
use serde::{Deserialize, Serialize};

/// These are requests from the window manager.
/// The display server should act on these actions.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum DisplayAction<H: Handle> {
    /// Give input focus to a session.
    #[serde(bound = "")]
    FocusSession(SessionHandle<H>),

    /// The state a surface ended up in after a state request.
    #[serde(bound = "")]
    SetState(SurfaceHandle<H>, WindowState),
}

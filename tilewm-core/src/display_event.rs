use crate::input_event::InputEvent;
use crate::models::{Handle, SessionHandle, SurfaceHandle, SurfaceParameters, WindowState, Xyhw};
use serde::{Deserialize, Serialize};

/// Notifications from the display server, processed one at a time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum DisplayEvent<H: Handle> {
    #[serde(bound = "")]
    SessionCreate(SessionHandle<H>),
    #[serde(bound = "")]
    SessionDestroy(SessionHandle<H>),
    /// A client asks for a new surface. It is placed by the policy before it is built.
    #[serde(bound = "")]
    SurfaceCreate(SessionHandle<H>, SurfaceParameters<H>),
    #[serde(bound = "")]
    SurfaceDestroy(SurfaceHandle<H>),
    /// A client asks for its surface to change state.
    #[serde(bound = "")]
    SurfaceStateRequest(SurfaceHandle<H>, WindowState),
    /// The display configuration changed. Carries the full new set of outputs.
    DisplaysUpdated(Vec<Xyhw>),
    Input(InputEvent),
}

use crate::display_servers::DisplayServer;
use crate::models::{Handle, Manager};
use crate::DisplayEvent;

impl<H: Handle, SERVER: DisplayServer<H>> Manager<H, SERVER> {
    /// Apply one notification from the display server.
    /// Returns true if anything changed, or for input, if the event was consumed.
    pub fn display_event_handler(&mut self, event: DisplayEvent<H>) -> bool {
        match event {
            DisplayEvent::SessionCreate(session) => self.add_session(session),
            DisplayEvent::SessionDestroy(session) => self.remove_session(&session),
            DisplayEvent::SurfaceCreate(session, params) => {
                self.add_surface(&session, params).is_some()
            }
            DisplayEvent::SurfaceDestroy(surface) => self.remove_surface(&surface),
            DisplayEvent::SurfaceStateRequest(surface, value) => {
                self.set_surface_state(&surface, value).is_some()
            }
            DisplayEvent::DisplaysUpdated(displays) => {
                self.update_displays(displays);
                true
            }
            DisplayEvent::Input(input) => self.handle_input_event(&input),
        }
    }
}

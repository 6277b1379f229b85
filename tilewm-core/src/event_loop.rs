use crate::display_servers::DisplayServer;
use crate::models::{Handle, Manager};

impl<H: Handle, SERVER: DisplayServer<H>> Manager<H, SERVER> {
    /// Handle events until the display server has nothing more to report.
    /// Returns how many were handled.
    pub fn process_events(&mut self) -> usize {
        let mut handled = 0;
        loop {
            let events = self.display_server.get_next_events();
            if events.is_empty() {
                break;
            }
            for event in events {
                tracing::trace!("Handling {:?}", event);
                self.display_event_handler(event);
                handled += 1;
            }
        }
        handled
    }
}

use crate::display_servers::DisplayServer;
use crate::models::{Handle, Manager, Xyhw};
use crate::policies::WindowManagementPolicy;

impl<H: Handle, SERVER: DisplayServer<H>> Manager<H, SERVER> {
    /// Replace the display layout and re-tile.
    pub fn update_displays(&mut self, displays: Vec<Xyhw>) {
        tracing::debug!("Displays updated: {:?}", displays);
        self.state.displays = displays;
        self.policy
            .handle_displays_updated(&mut self.state, &mut self.display_server);
    }

    pub fn add_display(&mut self, display: Xyhw) {
        let mut displays = self.state.displays.clone();
        displays.push(display);
        self.update_displays(displays);
    }

    /// Returns false if the display was not part of the layout.
    pub fn remove_display(&mut self, display: &Xyhw) -> bool {
        let Some(index) = self.state.displays.iter().position(|d| d == display) else {
            return false;
        };
        let mut displays = self.state.displays.clone();
        displays.remove(index);
        self.update_displays(displays);
        true
    }
}

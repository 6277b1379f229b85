use crate::display_servers::DisplayServer;
use crate::models::{Handle, Manager, Point};
use crate::policies::WindowManagementPolicy;

impl<H: Handle, SERVER: DisplayServer<H>> Manager<H, SERVER> {
    pub fn click(&mut self, cursor: Point) {
        self.policy
            .handle_click(&mut self.state, &mut self.display_server, cursor);
        self.state.gesture.old_cursor = cursor;
    }

    /// Continue a drag from the last cursor position. Returns true if a surface moved.
    pub fn drag(&mut self, cursor: Point) -> bool {
        let old_cursor = self.state.gesture.old_cursor;
        let moved =
            self.policy
                .handle_drag(&mut self.state, &mut self.display_server, cursor, old_cursor);
        self.state.gesture.old_cursor = cursor;
        moved
    }

    /// Continue a resize from the last cursor position. Returns true if a surface changed size.
    pub fn resize(&mut self, cursor: Point) -> bool {
        let old_cursor = self.state.gesture.old_cursor;
        let resized =
            self.policy
                .handle_resize(&mut self.state, &mut self.display_server, cursor, old_cursor);
        self.state.gesture.old_cursor = cursor;
        resized
    }
}

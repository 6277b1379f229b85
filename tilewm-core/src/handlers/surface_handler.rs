use crate::display_action::DisplayAction;
use crate::display_servers::{DisplayServer, Surface};
use crate::models::{Handle, Manager, SessionHandle, SurfaceHandle, SurfaceInfo};
use crate::models::{SurfaceParameters, WindowState, Xyhw};
use crate::policies::WindowManagementPolicy;

impl<H: Handle, SERVER: DisplayServer<H>> Manager<H, SERVER> {
    /// Let the policy adjust a client's request for a new surface.
    pub fn place_new_surface(
        &self,
        session: &SessionHandle<H>,
        params: SurfaceParameters<H>,
    ) -> SurfaceParameters<H> {
        self.policy
            .handle_place_new_surface(&self.state, &self.display_server, session, params)
    }

    /// Place, build and start managing a surface for `session`.
    ///
    /// Returns `None` if the session is not managed or the display server could not build the
    /// surface.
    pub fn add_surface(
        &mut self,
        session: &SessionHandle<H>,
        params: SurfaceParameters<H>,
    ) -> Option<SurfaceHandle<H>> {
        if self.state.session(session).is_none() {
            tracing::debug!("Session {:?} is not managed, not creating a surface", session);
            return None;
        }
        let placed = self.place_new_surface(session, params);
        let handle = self.display_server.create_surface(session, &placed)?;
        let geometry = self
            .display_server
            .surface(&handle)
            .map_or_else(|| Xyhw::new(placed.top_left, placed.size), Surface::geometry);

        let mut info = SurfaceInfo::new(handle, *session, geometry);
        info.parent = placed.parent;
        if let Some(parent) = placed.parent {
            if let Some(parent_info) = self.state.surface_mut(&parent) {
                parent_info.children.push(handle);
            }
        }
        self.state.surfaces.push(info);
        if let Some(session_info) = self.state.session_mut(session) {
            session_info.surfaces.push(handle);
        }

        self.policy
            .handle_new_surface(&mut self.state, &mut self.display_server, session, &handle);
        Some(handle)
    }

    /// Stop managing a surface the display server has destroyed.
    pub fn remove_surface(&mut self, handle: &SurfaceHandle<H>) -> bool {
        if self.state.surface(handle).is_none() {
            tracing::debug!("Surface {:?} is not managed", handle);
            return false;
        }
        self.policy
            .handle_delete_surface(&mut self.state, &mut self.display_server, handle);
        self.forget_surface(handle)
    }

    /// Drop a surface's bookkeeping: its info, its parent and child links, its place in the
    /// session and the gesture slot.
    pub(crate) fn forget_surface(&mut self, handle: &SurfaceHandle<H>) -> bool {
        let Some(index) = self.state.surfaces.iter().position(|s| &s.handle == handle) else {
            return false;
        };
        let info = self.state.surfaces.remove(index);
        if let Some(parent) = info.parent {
            if let Some(parent_info) = self.state.surface_mut(&parent) {
                parent_info.children.retain(|c| c != handle);
            }
        }
        for child in &info.children {
            if let Some(child_info) = self.state.surface_mut(child) {
                child_info.parent = None;
            }
        }
        if let Some(session_info) = self.state.session_mut(&info.session) {
            session_info.surfaces.retain(|s| s != handle);
        }
        self.state.gesture.release(handle);
        true
    }

    /// Ask the policy to move a surface to `value`. The state it ends up in is recorded and sent
    /// back to the display server.
    ///
    /// Returns `None` for surfaces that are not managed.
    pub fn set_surface_state(
        &mut self,
        handle: &SurfaceHandle<H>,
        value: WindowState,
    ) -> Option<WindowState> {
        self.state.surface(handle)?;
        let result = self.policy.handle_set_state(
            &mut self.state,
            &mut self.display_server,
            handle,
            value,
        );
        if let Some(info) = self.state.surface_mut(handle) {
            info.state = result;
        }
        self.display_server.execute_action(DisplayAction::SetState(*handle, result));
        Some(result)
    }

    /// Put the focused surface into `value`, or back to restored if it is already there.
    pub fn toggle(&mut self, value: WindowState) -> Option<WindowState> {
        let Some(handle) = self.display_server.focused_surface() else {
            tracing::debug!("Nothing focused to toggle {:?}", value);
            return None;
        };
        let current = self.state.surface(&handle)?.state;
        let target = if current == value {
            WindowState::Restored
        } else {
            value
        };
        self.set_surface_state(&handle, target)
    }
}

#[cfg(test)]
mod tests {
    use crate::display_action::DisplayAction;
    use crate::display_servers::MockDisplayServer;
    use crate::models::{Manager, MockHandle, Point, SessionHandle, Size, SurfaceHandle};
    use crate::models::{SurfaceParameters, WindowState, Xyhw};

    fn rect(x: i32, y: i32, w: i32, h: i32) -> Xyhw {
        Xyhw::new(Point::new(x, y), Size::new(w, h))
    }

    fn params(x: i32, y: i32, w: i32, h: i32) -> SurfaceParameters<MockHandle> {
        SurfaceParameters::new(Point::new(x, y), Size::new(w, h))
    }

    fn two_sessions(window_manager: &str) -> Manager<MockHandle, MockDisplayServer> {
        let mut manager = Manager::new_test(window_manager);
        manager.display_server.displays = vec![rect(0, 0, 1000, 800)];
        manager.update_displays(vec![rect(0, 0, 1000, 800)]);
        manager.add_session(SessionHandle(1));
        manager.add_session(SessionHandle(2));
        manager
    }

    #[test]
    fn new_surfaces_should_land_in_their_session_tile() {
        let mut manager = two_sessions("tiling");
        let handle = manager
            .add_surface(&SessionHandle(2), params(10, 20, 800, 100))
            .unwrap();
        let expected = rect(510, 20, 490, 100);
        assert_eq!(manager.display_server.geometry(&handle), Some(expected));

        let info = manager.state.surface(&handle).unwrap();
        assert_eq!(info.restore_rect, expected);
        assert_eq!(info.state, WindowState::Restored);
        assert_eq!(manager.state.sessions[1].surfaces, vec![handle]);
    }

    #[test]
    fn surfaces_for_unknown_sessions_should_not_be_created() {
        let mut manager = two_sessions("tiling");
        assert_eq!(manager.add_surface(&SessionHandle(9), params(0, 0, 10, 10)), None);
        assert!(manager.display_server.surfaces.is_empty());
    }

    #[test]
    fn fullscreen_surfaces_should_fill_their_output() {
        let mut manager = two_sessions("fullscreen");
        let handle = manager
            .add_surface(&SessionHandle(1), params(0, 0, 10, 10))
            .unwrap();
        assert_eq!(manager.display_server.geometry(&handle), Some(rect(0, 0, 1000, 800)));
    }

    #[test]
    fn children_should_be_linked_and_unlinked() {
        let mut manager = two_sessions("tiling");
        let parent = manager
            .add_surface(&SessionHandle(1), params(0, 0, 200, 200))
            .unwrap();
        let child = manager
            .add_surface(&SessionHandle(1), params(10, 10, 50, 50).with_parent(parent))
            .unwrap();
        assert_eq!(manager.state.surface(&parent).unwrap().children, vec![child]);
        assert_eq!(manager.state.surface(&child).unwrap().parent, Some(parent));

        manager.display_server.destroy_surface(&child);
        assert!(manager.remove_surface(&child));
        assert!(manager.state.surface(&parent).unwrap().children.is_empty());
        assert_eq!(manager.state.sessions[0].surfaces, vec![parent]);
    }

    #[test]
    fn removing_a_parent_should_orphan_its_children() {
        let mut manager = two_sessions("tiling");
        let parent = manager
            .add_surface(&SessionHandle(1), params(0, 0, 200, 200))
            .unwrap();
        let child = manager
            .add_surface(&SessionHandle(1), params(10, 10, 50, 50).with_parent(parent))
            .unwrap();
        manager.state.gesture.working_surface = Some(parent);

        assert!(manager.remove_surface(&parent));
        assert_eq!(manager.state.surface(&child).unwrap().parent, None);
        assert_eq!(manager.state.gesture.working_surface, None);
        assert!(!manager.remove_surface(&parent));
    }

    #[test]
    fn state_changes_should_be_recorded_and_reported() {
        let mut manager = two_sessions("tiling");
        let handle = manager
            .add_surface(&SessionHandle(1), params(10, 10, 100, 50))
            .unwrap();
        let result = manager.set_surface_state(&handle, WindowState::Maximized);
        assert_eq!(result, Some(WindowState::Maximized));
        assert_eq!(
            manager.state.surface(&handle).unwrap().state,
            WindowState::Maximized
        );
        assert_eq!(
            manager.display_server.actions.last(),
            Some(&DisplayAction::SetState(handle, WindowState::Maximized))
        );
        assert_eq!(
            manager.set_surface_state(&SurfaceHandle(42), WindowState::Maximized),
            None
        );
    }

    #[test]
    fn fullscreen_state_requests_should_be_echoed_without_moving_anything() {
        let mut manager = two_sessions("fullscreen");
        let handle = manager
            .add_surface(&SessionHandle(1), params(0, 0, 10, 10))
            .unwrap();
        let before = manager.display_server.geometry(&handle);
        assert_eq!(
            manager.set_surface_state(&handle, WindowState::Maximized),
            Some(WindowState::Maximized)
        );
        assert_eq!(manager.display_server.geometry(&handle), before);
    }

    #[test]
    fn toggle_should_flip_between_the_state_and_restored() {
        let mut manager = two_sessions("tiling");
        let handle = manager
            .add_surface(&SessionHandle(1), params(10, 10, 100, 50))
            .unwrap();
        manager.display_server.focused = Some(handle);

        assert_eq!(manager.toggle(WindowState::Maximized), Some(WindowState::Maximized));
        assert_eq!(manager.display_server.geometry(&handle), Some(rect(0, 0, 500, 800)));
        assert_eq!(manager.toggle(WindowState::Maximized), Some(WindowState::Restored));
        assert_eq!(manager.display_server.geometry(&handle), Some(rect(10, 10, 100, 50)));
    }

    #[test]
    fn toggle_without_focus_should_do_nothing() {
        let mut manager = two_sessions("tiling");
        assert_eq!(manager.toggle(WindowState::Maximized), None);
    }
}

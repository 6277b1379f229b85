use crate::display_servers::DisplayServer;
use crate::models::{Handle, Manager, SessionHandle, SessionInfo};
use crate::policies::WindowManagementPolicy;

impl<H: Handle, SERVER: DisplayServer<H>> Manager<H, SERVER> {
    /// Start managing a newly connected session and make room for it.
    /// Returns false if the session was already known.
    pub fn add_session(&mut self, session: SessionHandle<H>) -> bool {
        if self.state.session(&session).is_some() {
            tracing::debug!("Session {:?} is already managed", session);
            return false;
        }
        self.state.sessions.push(SessionInfo::new(session));
        self.policy
            .handle_session_info_updated(&mut self.state, &mut self.display_server);
        true
    }

    /// Forget a session and every surface it had, then hand its room to the others.
    pub fn remove_session(&mut self, session: &SessionHandle<H>) -> bool {
        let Some(index) = self
            .state
            .sessions
            .iter()
            .position(|s| &s.handle == session)
        else {
            tracing::debug!("Session {:?} is not managed", session);
            return false;
        };
        let surfaces = self.state.sessions.remove(index).surfaces;
        for surface in &surfaces {
            self.forget_surface(surface);
        }

        self.policy
            .handle_session_info_updated(&mut self.state, &mut self.display_server);
        true
    }
}

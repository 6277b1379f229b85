use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::errors::Result;
use crate::models::Handle;
use crate::policies::Policy;
use crate::state::State;

/// Maintains current program state.
#[derive(Debug)]
pub struct Manager<H: Handle, SERVER> {
    pub state: State<H>,
    pub policy: Policy,
    pub display_server: SERVER,
}

impl<H, SERVER> Manager<H, SERVER>
where
    H: Handle,
    SERVER: DisplayServer<H>,
{
    /// # Errors
    ///
    /// Fails when the configured window manager is not one of the known policies.
    pub fn new(config: &impl Config, display_server: SERVER) -> Result<Self> {
        let policy = config.window_manager().parse::<Policy>()?;
        tracing::debug!("Managing surfaces with the {} policy", policy);
        Ok(Self {
            state: State::new(config),
            policy,
            display_server,
        })
    }
}

#[cfg(test)]
impl Manager<crate::models::MockHandle, crate::display_servers::MockDisplayServer> {
    pub fn new_test(window_manager: &str) -> Self {
        let config = crate::config::TestConfig {
            window_manager: window_manager.to_string(),
        };
        Self::new(&config, crate::display_servers::MockDisplayServer::default())
            .expect("test managers use a known window manager")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TestConfig;
    use crate::display_servers::MockDisplayServer;
    use crate::errors::TileError;
    use crate::models::MockHandle;

    #[test]
    fn an_unknown_window_manager_should_fail_startup() {
        let config = TestConfig {
            window_manager: "stacking".to_string(),
        };
        let result: Result<Manager<MockHandle, MockDisplayServer>> =
            Manager::new(&config, MockDisplayServer::default());
        assert_eq!(
            result.err(),
            Some(TileError::UnknownWindowManager("stacking".to_string()))
        );
    }

    #[test]
    fn the_configured_policy_should_be_selected() {
        assert_eq!(Manager::new_test("tiling").policy, Policy::Tiling);
        assert_eq!(Manager::new_test("fullscreen").policy, Policy::Fullscreen);
    }
}

//! Running recorded sessions against the headless display server.
use crate::Config;
use anyhow::Result;
use headless_display_server::{HeadlessDisplayServer, HeadlessHandle, Script};
use serde_json::json;
use tilewm_core::Manager;

pub type HeadlessManager = Manager<HeadlessHandle, HeadlessDisplayServer>;

/// Play `script` through a manager built from `config`.
///
/// # Errors
///
/// Errors if the configured window manager is unknown.
pub fn run_script(config: &Config, script: Script) -> Result<HeadlessManager> {
    let mut manager = Manager::new(config, HeadlessDisplayServer::new(script))?;
    let handled = manager.process_events();
    tracing::info!("Replayed {} display events", handled);
    Ok(manager)
}

/// The manager's state and every surface as the display server sees it.
#[must_use]
pub fn report(manager: &HeadlessManager) -> serde_json::Value {
    json!({
        "window_manager": manager.policy.to_string(),
        "state": manager.state,
        "surfaces": manager.display_server.snapshot(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::file_handler::load_script;
    use headless_display_server::Step;
    use std::fs;
    use tempfile::TempDir;
    use tilewm_core::models::{Point, Size, WindowState, Xyhw};
    use tilewm_core::TileError;

    const SCRIPT: &str = r#"(
        displays: [(x: 0, y: 0, h: 800, w: 1000)],
        steps: [
            Connect(1),
            Connect(2),
            Create(session: 1, top_left: (x: 10, y: 10), size: (w: 100, h: 50)),
            Create(session: 2, top_left: (x: 0, y: 0), size: (w: 200, h: 100), name: "editor"),
            Press(at: (x: 20, y: 20)),
            Key(keysym: 0xffc8, modifiers: ["Alt"]),
        ],
    )"#;

    fn script() -> Script {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.ron");
        fs::write(&path, SCRIPT).unwrap();
        load_script(&path).unwrap()
    }

    fn rect(x: i32, y: i32, w: i32, h: i32) -> Xyhw {
        Xyhw::new(Point::new(x, y), Size::new(w, h))
    }

    #[test]
    fn a_recorded_session_should_replay_end_to_end() {
        let manager = run_script(&Config::default(), script()).unwrap();

        let surfaces = manager.display_server.snapshot();
        assert_eq!(surfaces.len(), 2);
        assert_eq!(surfaces[0].geometry, rect(0, 0, 500, 800));
        assert_eq!(surfaces[0].state, Some(WindowState::Maximized));
        assert!(surfaces[0].focused);
        assert_eq!(surfaces[1].geometry, rect(500, 0, 200, 100));
        assert_eq!(manager.state.sessions[1].tile, rect(500, 0, 500, 800));
    }

    #[test]
    fn fullscreen_should_size_surfaces_to_the_output() {
        let config = Config {
            window_manager: "fullscreen".to_owned(),
            ..Config::default()
        };
        let manager = run_script(&config, script()).unwrap();
        for surface in manager.display_server.snapshot() {
            assert_eq!(surface.geometry.size(), Size::new(1000, 800));
        }
    }

    #[test]
    fn an_unknown_window_manager_should_stop_the_replay() {
        let config = Config {
            window_manager: "stacking".to_owned(),
            ..Config::default()
        };
        let err = run_script(&config, script()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<TileError>(),
            Some(&TileError::UnknownWindowManager("stacking".to_owned()))
        );
        assert_eq!(err.to_string(), "Unknown window manager: stacking");
    }

    #[test]
    fn the_report_should_carry_state_and_surfaces() {
        let script = Script {
            displays: vec![rect(0, 0, 1000, 800)],
            steps: vec![Step::Connect(7)],
        };
        let manager = run_script(&Config::default(), script).unwrap();
        let report = report(&manager);
        assert_eq!(report["window_manager"], "tiling");
        assert_eq!(report["state"]["sessions"].as_array().map(Vec::len), Some(1));
        assert_eq!(report["surfaces"].as_array().map(Vec::len), Some(0));
    }
}

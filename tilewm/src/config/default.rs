use super::Config;

impl Default for Config {
    fn default() -> Self {
        Self {
            window_manager: "tiling".to_owned(),
            mousekey: Some("Alt".into()),
            log_level: "warn".to_owned(),
        }
    }
}

//! `tilewm` general configuration

mod checks;
mod default;
mod modifier;

pub use self::modifier::Modifier;

use crate::utils::file_handler;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// General configuration, read from `config.ron`.
///
/// ```ron
/// (
///     window_manager: "tiling",
///     mousekey: "Alt",
///     log_level: "warn",
/// )
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// `tiling` or `fullscreen`
    pub window_manager: String,
    /// Modifiers which have to be held to move and resize surfaces with the pointer.
    pub mousekey: Option<Modifier>,
    /// `tracing` filter directives, as in `RUST_LOG`.
    pub log_level: String,
}

#[must_use]
pub fn load() -> Config {
    load_from_file()
        .map_err(|err| eprintln!("ERROR LOADING CONFIG: {err:?}"))
        .unwrap_or_default()
}

/// # Errors
///
/// Function will throw an error if `BaseDirectories` doesn't exist, if user doesn't have
/// permissions to place config.ron, if the config file cannot be read or parsed, or if the
/// default config cannot be written on first start.
fn load_from_file() -> Result<Config> {
    tracing::debug!("Loading config file");
    file_handler::load_config_file(None)
}

impl tilewm_core::Config for Config {
    fn window_manager(&self) -> &str {
        &self.window_manager
    }

    fn mousekey(&self) -> Vec<String> {
        self.mousekey
            .as_ref()
            .unwrap_or(&"Alt".into())
            .clone()
            .into()
    }
}

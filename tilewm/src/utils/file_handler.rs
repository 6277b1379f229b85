use crate::Config;
use anyhow::{Context, Result};
use headless_display_server::Script;
use ron::{
    extensions::Extensions,
    ser::{to_string_pretty, PrettyConfig},
    Options,
};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use xdg::BaseDirectories;

const COMMENT_HEADER: &str = r#"// tilewm configuration
//
// window_manager: "tiling" shares the display between sessions, "fullscreen" gives every
//                 surface a whole output.
// mousekey:       modifier(s) held to drag (primary button) or resize (middle button).
// log_level:      tracing filter directives, e.g. "warn" or "info,tilewm_core=trace".

"#;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ConfigFileType {
    RonFile,
    TomlFile,
}

#[must_use]
pub fn check_file_type(path: &Path) -> ConfigFileType {
    if path.extension() == Some(std::ffi::OsStr::new("toml")) {
        ConfigFileType::TomlFile
    } else {
        ConfigFileType::RonFile
    }
}

/// # Errors
///
/// Errors if the XDG base directories cannot be resolved or the config directory cannot be
/// created.
pub fn get_default_path() -> Result<PathBuf> {
    let path = BaseDirectories::with_prefix("tilewm")?.place_config_file("config.ron")?;
    Ok(path)
}

/// Loads configuration from either specified file (preferred) or default.
///
/// # Errors
///
/// Errors if a file cannot be read or parsed, or if the default config cannot be written on first
/// start.
pub fn load_config_file(fspath: Option<PathBuf>) -> Result<Config> {
    match fspath {
        Some(path) => read_config(&path),
        None => load_or_create(&get_default_path()?),
    }
}

/// Read `ron_file`, or the `toml` file next to it, or write a default `ron_file`.
pub(crate) fn load_or_create(ron_file: &Path) -> Result<Config> {
    // the fallback for `toml` can be removed once toml gets eventually deprecated
    let toml_file = ron_file.with_extension("toml");
    if ron_file.exists() {
        tracing::debug!("Config file '{}' found.", ron_file.to_string_lossy());
        read_config(ron_file)
    } else if toml_file.exists() {
        tracing::debug!("Config file '{}' found.", toml_file.to_string_lossy());
        tracing::info!("You are using TOML as config language which will be deprecated in the future.\nPlease consider migrating you config to RON.");
        read_config(&toml_file)
    } else {
        tracing::debug!("Config file not found. Using default config file.");
        let config = Config::default();
        write_to_file(ron_file, &config)?;
        Ok(config)
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Cannot read config file {}", path.display()))?;
    let config = match check_file_type(path) {
        ConfigFileType::RonFile => Options::default()
            .with_default_extension(Extensions::IMPLICIT_SOME)
            .from_str(&contents)
            .with_context(|| format!("Cannot parse {}", path.display()))?,
        ConfigFileType::TomlFile => toml::from_str(&contents)
            .with_context(|| format!("Cannot parse {}", path.display()))?,
    };
    Ok(config)
}

/// # Errors
///
/// Errors if serialization of the config or writing to file fails.
pub fn write_to_file(ron_file: &Path, config: &Config) -> Result<(), anyhow::Error> {
    let ron_pretty_conf = PrettyConfig::new()
        .depth_limit(2)
        .extensions(Extensions::IMPLICIT_SOME);
    let ron = to_string_pretty(&config, ron_pretty_conf)?;
    let ron_with_header = String::from(COMMENT_HEADER) + &ron;
    let mut file = File::create(ron_file)?;
    file.write_all(ron_with_header.as_bytes())?;
    Ok(())
}

/// # Errors
///
/// Errors if the replay script cannot be read or is not a valid RON script.
pub fn load_script(path: impl AsRef<Path>) -> Result<Script> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Cannot read replay script {}", path.display()))?;
    let script = Options::default()
        .with_default_extension(Extensions::IMPLICIT_SOME)
        .from_str(&contents)
        .with_context(|| format!("Cannot parse replay script {}", path.display()))?;
    Ok(script)
}

use anyhow::{Context, Result};
use clap::{arg, command};
use std::path::PathBuf;
use tilewm::replay::{report, run_script};
use tilewm::utils::file_handler::{load_config_file, load_script};

fn main() -> Result<()> {
    let matches = command!("tilewm Replay")
        .about("Plays a recorded session through the window manager without a display")
        .help_template(tilewm::utils::get_help_template())
        .args(&[
            arg!(-c --config <FILE> "Sets the config file to use. Uses the default config file otherwise."),
            arg!(--"window-manager" <NAME> "Overrides the configured window manager: tiling or fullscreen."),
            arg!(<SCRIPT> "The replay script (RON) to play."),
        ])
        .get_matches();

    let mut config = match matches.get_one::<String>("config") {
        Some(path) => load_config_file(Some(PathBuf::from(path)))?,
        None => tilewm::load(),
    };
    if let Some(window_manager) = matches.get_one::<String>("window-manager") {
        config.window_manager.clone_from(window_manager);
    }

    tilewm::utils::log::setup_logging(&config.log_level);
    tracing::info!(
        "tilewm-replay {} ({}) booting...",
        env!("CARGO_PKG_VERSION"),
        git_version::git_version!(fallback = option_env!("GIT_HASH").unwrap_or("NONE"))
    );

    let script_path = matches
        .get_one::<String>("SCRIPT")
        .context("missing replay script")?;
    let script = load_script(script_path)?;
    let manager = run_script(&config, script)?;

    let output = serde_json::to_string_pretty(&report(&manager))?;
    println!("{output}");
    Ok(())
}

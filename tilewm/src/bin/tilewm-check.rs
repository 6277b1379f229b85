use anyhow::Result;
use clap::{arg, command};
use std::path::PathBuf;
use tilewm::utils::file_handler::{check_file_type, get_default_path, load_config_file};
use tilewm::utils::file_handler::ConfigFileType;

fn main() -> Result<()> {
    let matches = command!("tilewm Check")
        .about("Checks syntax of the configuration file")
        .help_template(tilewm::utils::get_help_template())
        .args(&[
            arg!(-v --verbose "Outputs received configuration file."),
            arg!([INPUT] "Sets the input file to use. Uses the default config file otherwise."),
        ])
        .get_matches();

    let config_file = matches.get_one::<String>("INPUT").map(PathBuf::from);
    let verbose = matches.get_flag("verbose");

    println!(
        "\x1b[0;94m::\x1b[0m tilewm version: {}",
        env!("CARGO_PKG_VERSION")
    );
    println!(
        "\x1b[0;94m::\x1b[0m tilewm git hash: {}",
        git_version::git_version!(fallback = option_env!("GIT_HASH").unwrap_or("NONE"))
    );

    println!("\x1b[0;94m::\x1b[0m Loading configuration . . .");
    let path = match &config_file {
        Some(path) => {
            println!("\x1b[1;35mNote: Using file {} \x1b[0m", path.display());
            path.clone()
        }
        None => get_default_path()?,
    };
    if verbose {
        dbg!(&path);
    }
    if check_file_type(&path) == ConfigFileType::TomlFile {
        println!("\x1b[1;93mWARN: TOML as config format is about to be deprecated.\n      Please consider migrating to RON.\x1b[0m");
    }

    match load_config_file(config_file) {
        Ok(config) => {
            println!("\x1b[0;92m    -> Configuration loaded OK \x1b[0m");
            if verbose {
                dbg!(&config);
            }
            println!("\x1b[0;94m::\x1b[0m Checking configuration . . .");
            if config.check(verbose) {
                println!("\x1b[0;92m    -> Configuration OK \x1b[0m");
            }
        }
        Err(e) => {
            println!("Configuration failed. Reason: {e:?}");
        }
    }

    Ok(())
}

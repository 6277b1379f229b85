use super::Config;
use tilewm_core::utils::modmask_lookup::{into_mod, ModMask};
use tilewm_core::Policy;
use tracing_subscriber::EnvFilter;

impl Config {
    pub fn check_window_manager(&self, verbose: bool) -> bool {
        if verbose {
            println!("Checking window_manager.");
        }
        match self.window_manager.parse::<Policy>() {
            Ok(policy) => {
                if verbose {
                    println!("Surfaces will be managed by the {policy} policy.");
                }
                true
            }
            Err(err) => {
                println!("\x1b[1;91mERROR:\x1b[0m\x1b[1m {err} \x1b[0m");
                false
            }
        }
    }

    pub fn check_mousekey(&self, verbose: bool) -> bool {
        if verbose {
            println!("Checking if mousekey is set.");
        }
        let Some(mousekey) = &self.mousekey else {
            return true;
        };
        if verbose {
            println!("Mousekey is set.");
        }
        if mousekey.is_empty() {
            println!("Your mousekey is set to nothing, this will cause surfaces to move/resize with just a mouse press.");
            return true;
        }
        let invalid: Vec<String> = mousekey
            .into_iter()
            .filter(|m| into_mod(m) == ModMask::Zero)
            .collect();
        if !invalid.is_empty() {
            println!("\x1b[1;91mERROR:\x1b[0m\x1b[1m Mousekey `{mousekey}` has invalid modifiers: {invalid:?} \x1b[0m");
            return false;
        }
        if verbose {
            println!("Mousekey is okay.");
        }
        true
    }

    pub fn check_log_level(&self, verbose: bool) -> bool {
        if verbose {
            println!("Trying to parse log_level.");
        }
        match EnvFilter::builder().parse(&self.log_level) {
            Ok(_) => {
                if verbose {
                    println!("Log level is ok.");
                }
                true
            }
            Err(err) => {
                println!("Log level is invalid: {err}");
                false
            }
        }
    }

    /// Run every check, returns true if all of them passed.
    pub fn check(&self, verbose: bool) -> bool {
        let window_manager = self.check_window_manager(verbose);
        let mousekey = self.check_mousekey(verbose);
        let log_level = self.check_log_level(verbose);
        window_manager && mousekey && log_level
    }
}

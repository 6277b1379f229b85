mod config;
pub mod replay;
pub mod utils;

pub use config::*;

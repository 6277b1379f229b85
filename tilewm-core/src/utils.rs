//! Various shared functions that `tilewm` uses.
pub mod helpers;
pub mod modmask_lookup;

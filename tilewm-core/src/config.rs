use crate::utils::modmask_lookup::{into_modmask, ModMask};

pub trait Config {
    /// Name of the window management policy, `tiling` or `fullscreen`.
    fn window_manager(&self) -> &str;

    /// Modifier names which, held while moving the pointer, turn the motion into a drag or
    /// resize.
    fn mousekey(&self) -> Vec<String>;

    fn mousekey_mask(&self) -> ModMask {
        into_modmask(&self.mousekey())
    }
}

#[cfg(test)]
#[allow(clippy::module_name_repetitions)]
pub struct TestConfig {
    pub window_manager: String,
}

#[cfg(test)]
impl Config for TestConfig {
    fn window_manager(&self) -> &str {
        &self.window_manager
    }
    fn mousekey(&self) -> Vec<String> {
        vec!["Alt".to_string()]
    }
}

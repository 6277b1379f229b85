use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Represents the state of modifier keys
    #[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[serde(transparent)]
    pub struct ModMask: u16 {
        /// Used as the zero value
        const Zero = 0;
        const Shift = 1;
        const Control = 1 << 1;
        /// Mod1
        const Alt = 1 << 2;
        /// Mod4
        const Super = 1 << 3;
        const NumLock = 1 << 4;
        const CapsLock = 1 << 5;
    }
}

bitflags! {
    /// Represents the state of the mouse buttons
    #[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[serde(transparent)]
    pub struct Button: u8 {
        /// Used as the zero value
        const Zero = 0;
        /// Main button (left click for right-handed)
        const Button1 = 1;
        /// Middle button (pressing the scroll wheel)
        const Button2 = 1 << 1;
        /// Secondary button (right click for right-handed)
        const Button3 = 1 << 2;
    }
}

#[must_use]
pub fn into_modmask(keys: &[String]) -> ModMask {
    keys.iter()
        .fold(ModMask::Zero, |mask, key| mask | into_mod(key))
}

/// Drop the lock keys, so that a binding still matches with NumLock or CapsLock on.
#[must_use]
pub fn clean_modmask(mask: ModMask) -> ModMask {
    mask.difference(ModMask::NumLock | ModMask::CapsLock)
}

/// Unknown names map to [`ModMask::Zero`].
#[must_use]
pub fn into_mod(key: &str) -> ModMask {
    match key {
        "Shift" => ModMask::Shift,
        "Control" | "Ctrl" => ModMask::Control,
        "Mod1" | "Alt" => ModMask::Alt,
        "Mod4" | "Super" => ModMask::Super,
        _ => ModMask::Zero,
    }
}

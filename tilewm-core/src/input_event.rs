//! Raw input as delivered by the input layer.
use crate::models::Point;
use crate::utils::modmask_lookup::{Button, ModMask};
use serde::{Deserialize, Serialize};

pub type XKeysym = u32;

pub const XK_F11: XKeysym = 0xffc8;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Pointer(PointerEvent),
    Touch(TouchEvent),
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Down,
    Repeat,
    Up,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub action: KeyAction,
    pub keysym: XKeysym,
    pub modifiers: ModMask,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    ButtonDown,
    ButtonUp,
    Motion,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub action: PointerAction,
    pub position: Point,
    /// Buttons held down while the event happened.
    pub buttons: Button,
    pub modifiers: ModMask,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchAction {
    Down,
    Change,
    Up,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchContact {
    pub id: i32,
    pub action: TouchAction,
    pub position: Point,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TouchEvent {
    pub contacts: Vec<TouchContact>,
    pub modifiers: ModMask,
}

impl KeyEvent {
    #[must_use]
    pub const fn down(keysym: XKeysym, modifiers: ModMask) -> Self {
        Self {
            action: KeyAction::Down,
            keysym,
            modifiers,
        }
    }
}

impl PointerEvent {
    #[must_use]
    pub const fn new(
        action: PointerAction,
        position: Point,
        buttons: Button,
        modifiers: ModMask,
    ) -> Self {
        Self {
            action,
            position,
            buttons,
            modifiers,
        }
    }
}

use serde::{Deserialize, Serialize};
use tilewm_core::input_event::{TouchContact, XKeysym};
use tilewm_core::models::{Point, Size, Xyhw};

/// A recorded session: the starting display layout and what happens afterwards.
///
/// ```ron
/// (
///     displays: [(x: 0, y: 0, h: 800, w: 1000)],
///     steps: [
///         Connect(1),
///         Create(session: 1, top_left: (x: 10, y: 10), size: (w: 100, h: 50)),
///         Key(keysym: 0xffc8, modifiers: ["Alt"]),
///     ],
/// )
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Script {
    pub displays: Vec<Xyhw>,
    pub steps: Vec<Step>,
}

/// One thing happening on the display server. Sessions are named by the script, surfaces are
/// numbered from 1 in the order they are created.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Step {
    Connect(u32),
    Disconnect(u32),
    Create {
        session: u32,
        top_left: Point,
        size: Size,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        parent: Option<u32>,
    },
    Destroy(u32),
    /// A client asks for a state by its integer value, 3 is maximized.
    RequestState(u32, i32),
    Displays(Vec<Xyhw>),
    Key {
        keysym: XKeysym,
        #[serde(default)]
        modifiers: Vec<String>,
    },
    /// Button pressed at a point. Buttons are numbered like X11: 1 primary, 2 middle, 3 secondary.
    Press {
        at: Point,
        #[serde(default = "primary")]
        button: u8,
        #[serde(default)]
        modifiers: Vec<String>,
    },
    /// Pointer moved with `button` held.
    Motion {
        to: Point,
        #[serde(default = "primary")]
        button: u8,
        #[serde(default)]
        modifiers: Vec<String>,
    },
    Touch {
        contacts: Vec<TouchContact>,
        #[serde(default)]
        modifiers: Vec<String>,
    },
}

const fn primary() -> u8 {
    1
}

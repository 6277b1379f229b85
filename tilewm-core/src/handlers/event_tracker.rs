//! Turns raw input into window management gestures.
use crate::display_servers::DisplayServer;
use crate::input_event::{InputEvent, KeyAction, KeyEvent, PointerAction, PointerEvent};
use crate::input_event::{TouchAction, TouchContact, TouchEvent, XK_F11};
use crate::models::{Handle, Manager, Point, WindowState};
use crate::utils::modmask_lookup::{clean_modmask, Button, ModMask};

impl<H: Handle, SERVER: DisplayServer<H>> Manager<H, SERVER> {
    /// Returns true if the event was used up and should not reach the client.
    pub fn handle_input_event(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key(key) => self.handle_key_event(key),
            InputEvent::Pointer(pointer) => self.handle_pointer_event(pointer),
            InputEvent::Touch(touch) => self.handle_touch_event(touch),
        }
    }

    /// Alt, Shift or Ctrl + F11 toggle the focused surface between restored and maximized,
    /// vertically maximized or horizontally maximized.
    pub fn handle_key_event(&mut self, event: &KeyEvent) -> bool {
        if event.action != KeyAction::Down || event.keysym != XK_F11 {
            return false;
        }
        let modifiers = clean_modmask(event.modifiers);
        let target = if modifiers == ModMask::Alt {
            WindowState::Maximized
        } else if modifiers == ModMask::Shift {
            WindowState::MaximizedVert
        } else if modifiers == ModMask::Control {
            WindowState::MaximizedHorz
        } else {
            return false;
        };
        self.toggle(target);
        true
    }

    /// Button presses click. Motion with the mousekey held drags with the primary button and
    /// resizes with the middle one.
    pub fn handle_pointer_event(&mut self, event: &PointerEvent) -> bool {
        match event.action {
            PointerAction::ButtonDown => {
                self.click(event.position);
                false
            }
            PointerAction::Motion if self.mousekey_held(event.modifiers) => {
                if event.buttons == Button::Button1 {
                    self.drag(event.position);
                    true
                } else if event.buttons == Button::Button2 {
                    self.resize(event.position);
                    true
                } else {
                    false
                }
            }
            PointerAction::Motion | PointerAction::ButtonUp => false,
        }
    }

    /// Touches are handled like a pointer at the average of all contacts: a new contact clicks,
    /// contacts moving with the mousekey held drag.
    pub fn handle_touch_event(&mut self, event: &TouchEvent) -> bool {
        let Some(position) = average_position(&event.contacts) else {
            return false;
        };
        let contacts = &event.contacts;
        if contacts.iter().any(|c| c.action == TouchAction::Down) {
            self.click(position);
            return false;
        }
        if contacts.iter().all(|c| c.action == TouchAction::Change)
            && self.mousekey_held(event.modifiers)
        {
            self.drag(position);
            return true;
        }
        false
    }

    /// An empty mousekey is always held. Extra modifiers don't matter.
    fn mousekey_held(&self, modifiers: ModMask) -> bool {
        clean_modmask(modifiers).contains(self.state.mousekey)
    }
}

fn average_position(contacts: &[TouchContact]) -> Option<Point> {
    if contacts.is_empty() {
        return None;
    }
    let count = contacts.len() as i64;
    let (x, y) = contacts.iter().fold((0_i64, 0_i64), |(x, y), c| {
        (x + i64::from(c.position.x), y + i64::from(c.position.y))
    });
    Some(Point::new((x / count) as i32, (y / count) as i32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_action::DisplayAction;
    use crate::display_servers::MockDisplayServer;
    use crate::models::{MockHandle, SessionHandle, Size, SurfaceHandle, SurfaceParameters, Xyhw};

    fn rect(x: i32, y: i32, w: i32, h: i32) -> Xyhw {
        Xyhw::new(Point::new(x, y), Size::new(w, h))
    }

    /// One session owning a focused 100x50 surface at (10, 10) on a 1000x800 display.
    fn focused_surface() -> (Manager<MockHandle, MockDisplayServer>, SurfaceHandle<MockHandle>) {
        let mut manager = Manager::new_test("tiling");
        manager.update_displays(vec![rect(0, 0, 1000, 800)]);
        manager.add_session(SessionHandle(1));
        let params = SurfaceParameters::new(Point::new(10, 10), Size::new(100, 50));
        let surface = manager.add_surface(&SessionHandle(1), params).unwrap();
        manager.display_server.focused = Some(surface);
        (manager, surface)
    }

    fn f11(modifiers: ModMask) -> InputEvent {
        InputEvent::Key(KeyEvent::down(XK_F11, modifiers))
    }

    fn motion(x: i32, y: i32, buttons: Button, modifiers: ModMask) -> InputEvent {
        InputEvent::Pointer(PointerEvent::new(
            PointerAction::Motion,
            Point::new(x, y),
            buttons,
            modifiers,
        ))
    }

    fn touch(contacts: &[(TouchAction, i32, i32)]) -> InputEvent {
        InputEvent::Touch(TouchEvent {
            contacts: contacts
                .iter()
                .enumerate()
                .map(|(id, &(action, x, y))| TouchContact {
                    id: id as i32,
                    action,
                    position: Point::new(x, y),
                })
                .collect(),
            modifiers: ModMask::Zero,
        })
    }

    #[test]
    fn alt_f11_should_maximize_and_then_restore() {
        let (mut manager, surface) = focused_surface();
        assert!(manager.handle_input_event(&f11(ModMask::Alt)));
        assert_eq!(manager.display_server.geometry(&surface), Some(rect(0, 0, 1000, 800)));
        assert!(manager.handle_input_event(&f11(ModMask::Alt)));
        assert_eq!(manager.display_server.geometry(&surface), Some(rect(10, 10, 100, 50)));
        assert_eq!(
            manager.state.surface(&surface).unwrap().state,
            WindowState::Restored
        );
    }

    #[test]
    fn shift_and_ctrl_f11_should_maximize_one_direction() {
        let (mut manager, surface) = focused_surface();
        assert!(manager.handle_input_event(&f11(ModMask::Shift)));
        assert_eq!(manager.display_server.geometry(&surface), Some(rect(10, 0, 100, 800)));
        assert!(manager.handle_input_event(&f11(ModMask::Control)));
        assert_eq!(manager.display_server.geometry(&surface), Some(rect(0, 10, 1000, 50)));
    }

    #[test]
    fn lock_keys_should_not_get_in_the_way() {
        let (mut manager, surface) = focused_surface();
        assert!(manager.handle_input_event(&f11(ModMask::Alt | ModMask::NumLock)));
        assert_eq!(
            manager.state.surface(&surface).unwrap().state,
            WindowState::Maximized
        );
    }

    #[test]
    fn other_keys_should_pass_through() {
        let (mut manager, surface) = focused_surface();
        assert!(!manager.handle_input_event(&f11(ModMask::Alt | ModMask::Shift)));
        assert!(!manager.handle_input_event(&f11(ModMask::Zero)));
        let up = KeyEvent {
            action: KeyAction::Up,
            keysym: XK_F11,
            modifiers: ModMask::Alt,
        };
        assert!(!manager.handle_key_event(&up));
        assert!(!manager.handle_key_event(&KeyEvent::down(0x0061, ModMask::Alt)));
        assert_eq!(
            manager.state.surface(&surface).unwrap().state,
            WindowState::Restored
        );
    }

    #[test]
    fn button_down_should_click_without_consuming() {
        let (mut manager, _) = focused_surface();
        let press = InputEvent::Pointer(PointerEvent::new(
            PointerAction::ButtonDown,
            Point::new(20, 20),
            Button::Button1,
            ModMask::Zero,
        ));
        assert!(!manager.handle_input_event(&press));
        assert_eq!(manager.state.gesture.old_cursor, Point::new(20, 20));
        assert_eq!(
            manager.display_server.actions,
            vec![DisplayAction::FocusSession(SessionHandle(1))]
        );
    }

    #[test]
    fn alt_motion_should_drag_or_resize() {
        let (mut manager, surface) = focused_surface();
        manager.click(Point::new(20, 20));
        assert!(manager.handle_input_event(&motion(30, 25, Button::Button1, ModMask::Alt)));
        assert_eq!(manager.display_server.geometry(&surface), Some(rect(20, 15, 100, 50)));

        assert!(manager.handle_input_event(&motion(40, 35, Button::Button2, ModMask::Alt)));
        assert_eq!(manager.display_server.geometry(&surface), Some(rect(20, 15, 200, 100)));
    }

    #[test]
    fn motion_without_the_mousekey_should_pass_through() {
        let (mut manager, surface) = focused_surface();
        manager.click(Point::new(20, 20));
        assert!(!manager.handle_input_event(&motion(30, 25, Button::Button1, ModMask::Zero)));
        assert!(!manager.handle_input_event(&motion(30, 25, Button::Button3, ModMask::Alt)));
        assert_eq!(manager.display_server.geometry(&surface), Some(rect(10, 10, 100, 50)));
    }

    #[test]
    fn extra_modifiers_should_not_stop_a_drag() {
        let (mut manager, surface) = focused_surface();
        manager.click(Point::new(20, 20));
        let mods = ModMask::Alt | ModMask::Shift;
        assert!(manager.handle_input_event(&motion(30, 25, Button::Button1, mods)));
        assert_eq!(manager.display_server.geometry(&surface), Some(rect(20, 15, 100, 50)));
    }

    #[test]
    fn an_empty_mousekey_should_always_be_held() {
        let (mut manager, surface) = focused_surface();
        manager.state.mousekey = ModMask::Zero;
        manager.click(Point::new(20, 20));
        assert!(manager.handle_input_event(&motion(30, 25, Button::Button1, ModMask::Zero)));
        assert_eq!(manager.display_server.geometry(&surface), Some(rect(20, 15, 100, 50)));
    }

    #[test]
    fn touch_down_should_click_at_the_average_position() {
        let (mut manager, _) = focused_surface();
        let event = touch(&[(TouchAction::Down, 10, 20), (TouchAction::Change, 21, 31)]);
        assert!(!manager.handle_input_event(&event));
        assert_eq!(manager.state.gesture.old_cursor, Point::new(15, 25));
    }

    #[test]
    fn a_finger_landing_while_another_lifts_should_still_click() {
        let mut manager = Manager::new_test("tiling");
        manager.update_displays(vec![rect(0, 0, 1000, 800)]);
        manager.add_session(SessionHandle(1));
        manager.add_session(SessionHandle(2));
        let event = touch(&[(TouchAction::Down, 600, 100), (TouchAction::Up, 800, 100)]);
        assert!(!manager.handle_input_event(&event));
        assert_eq!(manager.state.gesture.old_cursor, Point::new(700, 100));
        assert_eq!(
            manager.display_server.actions,
            vec![DisplayAction::FocusSession(SessionHandle(2))]
        );
    }

    #[test]
    fn moving_contacts_should_drag_with_the_mousekey() {
        let (mut manager, surface) = focused_surface();
        let start = touch(&[(TouchAction::Down, 20, 20), (TouchAction::Down, 40, 20)]);
        assert!(!manager.handle_input_event(&start));
        let mut moved = touch(&[(TouchAction::Change, 30, 30), (TouchAction::Change, 50, 30)]);
        assert!(!manager.handle_input_event(&moved));
        assert_eq!(manager.display_server.geometry(&surface), Some(rect(10, 10, 100, 50)));

        if let InputEvent::Touch(event) = &mut moved {
            event.modifiers = ModMask::Alt;
        }
        assert!(manager.handle_input_event(&moved));
        assert_eq!(manager.display_server.geometry(&surface), Some(rect(20, 20, 100, 50)));
    }

    #[test]
    fn lifting_fingers_should_pass_through() {
        let (mut manager, _) = focused_surface();
        let event = touch(&[(TouchAction::Change, 30, 30), (TouchAction::Up, 40, 30)]);
        assert!(!manager.handle_input_event(&event));
        assert_eq!(manager.state.gesture.old_cursor, Point::default());
        assert!(!manager.handle_input_event(&touch(&[])));
    }
}

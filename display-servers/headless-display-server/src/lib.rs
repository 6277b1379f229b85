mod script;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, VecDeque};
use tilewm_core::input_event::{InputEvent, KeyEvent, PointerAction, PointerEvent, TouchEvent};
use tilewm_core::models::{Handle, Point, SessionHandle, Size, SurfaceHandle, SurfaceParameters};
use tilewm_core::models::{WindowState, Xyhw};
use tilewm_core::utils::helpers;
use tilewm_core::utils::modmask_lookup::{into_modmask, Button};
use tilewm_core::{DisplayAction, DisplayEvent, DisplayServer, Surface};

pub use script::{Script, Step};

#[derive(
    Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub struct HeadlessHandle(pub u32);
impl Handle for HeadlessHandle {}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadlessSurface {
    pub top_left: Point,
    pub size: Size,
}

impl Surface for HeadlessSurface {
    fn top_left(&self) -> Point {
        self.top_left
    }

    fn size(&self) -> Size {
        self.size
    }

    fn move_to(&mut self, top_left: Point) {
        self.top_left = top_left;
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
    }

    fn input_area_contains(&self, point: Point) -> bool {
        self.geometry().contains_point(point)
    }
}

/// What a surface looks like once the replay is over.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SurfaceSnapshot {
    pub handle: HeadlessHandle,
    pub session: HeadlessHandle,
    pub geometry: Xyhw,
    /// Last state the window manager reported for the surface.
    pub state: Option<WindowState>,
    pub focused: bool,
}

/// Keeps surfaces in memory and plays back a [`Script`] as display events, one step at a time.
#[derive(Debug, Default)]
pub struct HeadlessDisplayServer {
    surfaces: BTreeMap<HeadlessHandle, HeadlessSurface>,
    sessions: BTreeMap<HeadlessHandle, Vec<HeadlessHandle>>,
    /// As sent to clients.
    states: BTreeMap<HeadlessHandle, i32>,
    displays: Vec<Xyhw>,
    focused_session: Option<HeadlessHandle>,
    initial_events: Vec<DisplayEvent<HeadlessHandle>>,
    pending: VecDeque<Step>,
    next_surface: u32,
}

impl HeadlessDisplayServer {
    #[must_use]
    pub fn new(script: Script) -> Self {
        let initial_events = if script.displays.is_empty() {
            vec![]
        } else {
            vec![DisplayEvent::DisplaysUpdated(script.displays.clone())]
        };
        Self {
            displays: script.displays,
            initial_events,
            pending: script.steps.into(),
            ..Self::default()
        }
    }

    pub fn push_step(&mut self, step: Step) {
        self.pending.push_back(step);
    }

    #[must_use]
    pub fn displays(&self) -> &[Xyhw] {
        &self.displays
    }

    #[must_use]
    pub fn snapshot(&self) -> Vec<SurfaceSnapshot> {
        let focused = self.focused_surface();
        self.sessions
            .iter()
            .flat_map(|(session, surfaces)| surfaces.iter().map(move |s| (*session, *s)))
            .filter_map(|(session, handle)| {
                let surface = self.surfaces.get(&handle)?;
                Some(SurfaceSnapshot {
                    handle,
                    session,
                    geometry: surface.geometry(),
                    state: self
                        .states
                        .get(&handle)
                        .and_then(|v| WindowState::try_from(*v).ok()),
                    focused: focused == Some(SurfaceHandle(handle)),
                })
            })
            .collect()
    }

    fn translate(&mut self, step: Step) -> Option<DisplayEvent<HeadlessHandle>> {
        let event = match step {
            Step::Connect(id) => {
                self.sessions.entry(HeadlessHandle(id)).or_default();
                DisplayEvent::SessionCreate(SessionHandle(HeadlessHandle(id)))
            }
            Step::Disconnect(id) => {
                let Some(surfaces) = self.sessions.remove(&HeadlessHandle(id)) else {
                    tracing::warn!("Session {} was never connected", id);
                    return None;
                };
                for surface in &surfaces {
                    self.surfaces.remove(surface);
                    self.states.remove(surface);
                }
                if self.focused_session == Some(HeadlessHandle(id)) {
                    self.focused_session = None;
                }
                DisplayEvent::SessionDestroy(SessionHandle(HeadlessHandle(id)))
            }
            Step::Create {
                session,
                top_left,
                size,
                name,
                parent,
            } => {
                let params = SurfaceParameters {
                    top_left,
                    size,
                    name,
                    parent: parent.map(|p| SurfaceHandle(HeadlessHandle(p))),
                };
                DisplayEvent::SurfaceCreate(SessionHandle(HeadlessHandle(session)), params)
            }
            Step::Destroy(id) => {
                let handle = HeadlessHandle(id);
                if self.surfaces.remove(&handle).is_none() {
                    tracing::warn!("Surface {} does not exist", id);
                    return None;
                }
                self.states.remove(&handle);
                for surfaces in self.sessions.values_mut() {
                    surfaces.retain(|s| s != &handle);
                }
                DisplayEvent::SurfaceDestroy(SurfaceHandle(handle))
            }
            Step::RequestState(id, value) => match WindowState::try_from(value) {
                Ok(state) => {
                    DisplayEvent::SurfaceStateRequest(SurfaceHandle(HeadlessHandle(id)), state)
                }
                Err(err) => {
                    tracing::warn!("Surface {} asked for a state that does not exist: {}", id, err);
                    return None;
                }
            },
            Step::Displays(displays) => {
                self.displays.clone_from(&displays);
                DisplayEvent::DisplaysUpdated(displays)
            }
            Step::Key { keysym, modifiers } => DisplayEvent::Input(InputEvent::Key(
                KeyEvent::down(keysym, into_modmask(&modifiers)),
            )),
            Step::Press {
                at,
                button,
                modifiers,
            } => DisplayEvent::Input(InputEvent::Pointer(PointerEvent::new(
                PointerAction::ButtonDown,
                at,
                button_mask(button),
                into_modmask(&modifiers),
            ))),
            Step::Motion {
                to,
                button,
                modifiers,
            } => DisplayEvent::Input(InputEvent::Pointer(PointerEvent::new(
                PointerAction::Motion,
                to,
                button_mask(button),
                into_modmask(&modifiers),
            ))),
            Step::Touch {
                contacts,
                modifiers,
            } => DisplayEvent::Input(InputEvent::Touch(TouchEvent {
                contacts,
                modifiers: into_modmask(&modifiers),
            })),
        };
        Some(event)
    }
}

fn button_mask(button: u8) -> Button {
    match button {
        1 => Button::Button1,
        2 => Button::Button2,
        3 => Button::Button3,
        _ => Button::Zero,
    }
}

impl DisplayServer<HeadlessHandle> for HeadlessDisplayServer {
    type Surface = HeadlessSurface;

    fn get_next_events(&mut self) -> Vec<DisplayEvent<HeadlessHandle>> {
        let mut events = std::mem::take(&mut self.initial_events);
        // one step at a time, so a step sees the effect of the ones before it
        while events.is_empty() {
            let Some(step) = self.pending.pop_front() else {
                break;
            };
            events.extend(self.translate(step));
        }
        for event in &events {
            tracing::trace!("DisplayEvent: {:?}", event);
        }
        events
    }

    fn surface(&self, handle: &SurfaceHandle<HeadlessHandle>) -> Option<&HeadlessSurface> {
        self.surfaces.get(&handle.0)
    }

    fn surface_mut(
        &mut self,
        handle: &SurfaceHandle<HeadlessHandle>,
    ) -> Option<&mut HeadlessSurface> {
        self.surfaces.get_mut(&handle.0)
    }

    fn default_surface(
        &self,
        session: &SessionHandle<HeadlessHandle>,
    ) -> Option<SurfaceHandle<HeadlessHandle>> {
        self.sessions
            .get(&session.0)?
            .first()
            .map(|h| SurfaceHandle(*h))
    }

    fn focused_surface(&self) -> Option<SurfaceHandle<HeadlessHandle>> {
        let session = self.focused_session?;
        self.default_surface(&SessionHandle(session))
    }

    fn create_surface(
        &mut self,
        session: &SessionHandle<HeadlessHandle>,
        params: &SurfaceParameters<HeadlessHandle>,
    ) -> Option<SurfaceHandle<HeadlessHandle>> {
        let Some(surfaces) = self.sessions.get_mut(&session.0) else {
            tracing::warn!("Session {:?} is not connected", session);
            return None;
        };
        self.next_surface += 1;
        let handle = HeadlessHandle(self.next_surface);
        surfaces.push(handle);
        self.surfaces.insert(
            handle,
            HeadlessSurface {
                top_left: params.top_left,
                size: params.size,
            },
        );
        Some(SurfaceHandle(handle))
    }

    fn size_to_output(&self, rect: Xyhw) -> Xyhw {
        helpers::size_to_output(&self.displays, rect)
    }

    fn execute_action(&mut self, act: DisplayAction<HeadlessHandle>) {
        tracing::trace!("DisplayAction: {:?}", act);
        match act {
            DisplayAction::FocusSession(session) => self.focused_session = Some(session.0),
            DisplayAction::SetState(surface, state) => {
                self.states.insert(surface.0, i32::from(state));
            }
        }
    }
}

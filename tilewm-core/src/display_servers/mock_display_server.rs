use super::{DisplayServer, Surface};
use crate::display_action::DisplayAction;
use crate::models::{MockHandle, Point, Size, Xyhw};
use crate::models::{SessionHandle, SurfaceHandle, SurfaceParameters};
use crate::utils::helpers;
use crate::DisplayEvent;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockSurface {
    pub top_left: Point,
    pub size: Size,
}

impl Surface for MockSurface {
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

#[derive(Debug, Default, Clone)]
pub struct MockDisplayServer {
    pub surfaces: HashMap<SurfaceHandle<MockHandle>, MockSurface>,
    pub sessions: HashMap<SessionHandle<MockHandle>, Vec<SurfaceHandle<MockHandle>>>,
    pub displays: Vec<Xyhw>,
    pub focused: Option<SurfaceHandle<MockHandle>>,
    pub actions: Vec<DisplayAction<MockHandle>>,
    pub events: Vec<DisplayEvent<MockHandle>>,
    next_handle: MockHandle,
}

impl MockDisplayServer {
    /// Drop a surface the way a client going away would.
    pub fn destroy_surface(&mut self, handle: &SurfaceHandle<MockHandle>) {
        self.surfaces.remove(handle);
        for surfaces in self.sessions.values_mut() {
            surfaces.retain(|s| s != handle);
        }
    }

    pub fn geometry(&self, handle: &SurfaceHandle<MockHandle>) -> Option<Xyhw> {
        self.surfaces.get(handle).map(Surface::geometry)
    }
}

impl DisplayServer<MockHandle> for MockDisplayServer {
    type Surface = MockSurface;

    fn get_next_events(&mut self) -> Vec<DisplayEvent<MockHandle>> {
        std::mem::take(&mut self.events)
    }

    fn surface(&self, handle: &SurfaceHandle<MockHandle>) -> Option<&MockSurface> {
        self.surfaces.get(handle)
    }

    fn surface_mut(&mut self, handle: &SurfaceHandle<MockHandle>) -> Option<&mut MockSurface> {
        self.surfaces.get_mut(handle)
    }

    fn default_surface(
        &self,
        session: &SessionHandle<MockHandle>,
    ) -> Option<SurfaceHandle<MockHandle>> {
        self.sessions.get(session)?.first().copied()
    }

    fn focused_surface(&self) -> Option<SurfaceHandle<MockHandle>> {
        self.focused
    }

    fn create_surface(
        &mut self,
        session: &SessionHandle<MockHandle>,
        params: &SurfaceParameters<MockHandle>,
    ) -> Option<SurfaceHandle<MockHandle>> {
        self.next_handle += 1;
        let handle = SurfaceHandle(self.next_handle);
        self.surfaces.insert(
            handle,
            MockSurface {
                top_left: params.top_left,
                size: params.size,
            },
        );
        self.sessions.entry(*session).or_default().push(handle);
        Some(handle)
    }

    fn size_to_output(&self, rect: Xyhw) -> Xyhw {
        helpers::size_to_output(&self.displays, rect)
    }

    fn execute_action(&mut self, act: DisplayAction<MockHandle>) {
        if let DisplayAction::FocusSession(session) = &act {
            self.focused = self.default_surface(session);
        }
        self.actions.push(act);
    }
}

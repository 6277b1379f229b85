//! Splits the display area into one vertical strip per session.
use crate::display_servers::{DisplayServer, Surface};
use crate::models::{Handle, Point, Size, Xyhw};
use crate::state::State;
use crate::surface_geometry::fit_to_new_tile;

/// Offset and width of strip `index` when `total_width` is cut into `count` strips.
///
/// Every strip is as wide as the others give or take one, and together they cover
/// `[0, total_width)` without gaps or overlap. Zero strips have no extent.
#[must_use]
pub fn strip(total_width: i32, index: usize, count: usize) -> (i32, i32) {
    if count == 0 {
        return (0, 0);
    }
    let total = i64::from(total_width);
    let count = count as i64;
    let index = index as i64;
    let x = total * index / count;
    let next = total * (index + 1) / count;
    (x as i32, (next - x) as i32)
}

/// Hand every session a fresh tile and carry its surfaces over to it.
///
/// Does nothing while there are no sessions or no displays.
pub fn update_tiles<H: Handle>(state: &mut State<H>, server: &mut impl DisplayServer<H>) {
    let Some(area) = state.display_area() else {
        return;
    };
    let count = state.sessions.len();
    if count == 0 {
        return;
    }

    for (index, session) in state.sessions.iter_mut().enumerate() {
        let (x, w) = strip(area.w(), index, count);
        let old_tile = session.tile;
        let new_tile = Xyhw::new(Point::new(area.x() + x, area.y()), Size::new(w, area.h()));
        let displacement = new_tile.top_left() - old_tile.top_left();

        for handle in &session.surfaces {
            let Some(surface) = server.surface_mut(handle) else {
                tracing::debug!("Surface {:?} is gone, leaving it out of the new tile", handle);
                continue;
            };
            let top_left = surface.top_left();
            surface.move_to(top_left + displacement);
            fit_to_new_tile(surface, old_tile, new_tile);
        }

        session.tile = new_tile;
    }
}

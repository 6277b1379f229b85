//! Moving and sizing surfaces inside their session's tile.
use crate::display_servers::Surface;
use crate::models::{Handle, Point, Size, SurfaceParameters, Xyhw};

/// Carry a surface over from `old_tile` to `new_tile`. The surface must already have been moved
/// by the difference between the two tiles.
///
/// A surface that filled the old tile in one direction fills the new tile in that direction.
pub fn fit_to_new_tile(surface: &mut impl Surface, old_tile: Xyhw, new_tile: Xyhw) {
    let displacement = surface.top_left() - new_tile.top_left();
    let old_size = surface.size();

    let scaled_width = if old_size.w == old_tile.w() {
        new_tile.w()
    } else {
        old_size.w
    };
    let scaled_height = if old_size.h == old_tile.h() {
        new_tile.h()
    } else {
        old_size.h
    };

    let w = (new_tile.w() - displacement.dx).min(scaled_width);
    let h = (new_tile.h() - displacement.dy).min(scaled_height);
    surface.resize(Size::new(w, h));
}

/// Shrink a requested size so the surface stays inside `tile` at the requested position.
pub fn clip_to_tile<H: Handle>(params: &mut SurfaceParameters<H>, tile: Xyhw) {
    let displacement = params.top_left - tile.top_left();
    let w = (tile.w() - displacement.dx).min(params.size.w);
    let h = (tile.h() - displacement.dy).min(params.size.h);
    params.size = Size::new(w, h);
}

/// Move the surface grabbed at `from` by `to - from` without letting it cross `bounds`.
///
/// Returns false, and leaves the surface alone, when `from` misses the surface.
pub fn drag(surface: &mut impl Surface, to: Point, from: Point, bounds: Xyhw) -> bool {
    if !surface.input_area_contains(from) {
        return false;
    }
    let top_left = surface.top_left();
    let bottom_right = top_left + surface.size().as_displacement();

    let mut movement = to - from;
    if movement.dx < 0 {
        movement.dx = movement.dx.max((bounds.top_left() - top_left).dx);
    }
    if movement.dy < 0 {
        movement.dy = movement.dy.max((bounds.top_left() - top_left).dy);
    }
    if movement.dx > 0 {
        movement.dx = movement.dx.min((bounds.bottom_right() - bottom_right).dx);
    }
    if movement.dy > 0 {
        movement.dy = movement.dy.min((bounds.bottom_right() - bottom_right).dy);
    }

    surface.move_to(top_left + movement);
    true
}

/// Scale the surface by how far the cursor moved away from its top-left corner.
///
/// Returns false when `old_cursor` misses the surface or the cursor crossed to the other side of
/// the top-left corner.
pub fn resize(surface: &mut impl Surface, cursor: Point, old_cursor: Point, bounds: Xyhw) -> bool {
    if !surface.input_area_contains(old_cursor) {
        return false;
    }
    let top_left = surface.top_left();
    let old_displacement = old_cursor - top_left;
    let new_displacement = cursor - top_left;

    let scale_x = new_displacement.dx as f32 / (old_displacement.dx as f32).max(1.0);
    let scale_y = new_displacement.dy as f32 / (old_displacement.dy as f32).max(1.0);
    if scale_x <= 0.0 || scale_y <= 0.0 {
        return false;
    }

    let old_size = surface.size();
    let limits = (bounds.bottom_right() - top_left).as_size();
    let w = ((scale_x * old_size.w as f32) as i32).min(limits.w);
    let h = ((scale_y * old_size.h as f32) as i32).min(limits.h);

    surface.resize(Size::new(w, h));
    true
}

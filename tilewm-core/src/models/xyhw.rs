//! Rectangles used for surfaces, tiles and displays.
use super::{Point, Size};
use serde::{Deserialize, Serialize};

/// A rectangle. x,y from top left.
///
/// Containment is half open: the left and top edges are inside, the right and bottom edges are
/// not. This keeps neighbouring tiles from both claiming the point on their shared edge.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq, Hash, Copy)]
pub struct Xyhw {
    x: i32,
    y: i32,
    h: i32,
    w: i32,
}

impl Xyhw {
    #[must_use]
    pub const fn new(top_left: Point, size: Size) -> Self {
        Self {
            x: top_left.x,
            y: top_left.y,
            h: size.h,
            w: size.w,
        }
    }

    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }
    #[must_use]
    pub const fn h(&self) -> i32 {
        self.h
    }
    #[must_use]
    pub const fn w(&self) -> i32 {
        self.w
    }

    #[must_use]
    pub const fn top_left(&self) -> Point {
        Point {
            x: self.x,
            y: self.y,
        }
    }

    #[must_use]
    pub const fn size(&self) -> Size {
        Size {
            w: self.w,
            h: self.h,
        }
    }

    /// The first point past the rectangle on both axes.
    #[must_use]
    pub const fn bottom_right(&self) -> Point {
        Point {
            x: self.x + self.w,
            y: self.y + self.h,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    #[must_use]
    pub const fn contains_point(&self, point: Point) -> bool {
        let max_x = self.x + self.w;
        let max_y = self.y + self.h;
        (self.x <= point.x && point.x < max_x) && (self.y <= point.y && point.y < max_y)
    }

    /// The smallest rectangle holding all of the given rectangles.
    ///
    /// Returns `None` when there is nothing to bound.
    pub fn bounding<'a>(rects: impl IntoIterator<Item = &'a Self>) -> Option<Self> {
        rects.into_iter().fold(None, |acc: Option<Self>, rect| {
            let Some(acc) = acc else {
                return Some(*rect);
            };
            let left = acc.x.min(rect.x);
            let top = acc.y.min(rect.y);
            let right = acc.bottom_right().x.max(rect.bottom_right().x);
            let bottom = acc.bottom_right().y.max(rect.bottom_right().y);
            Some(Self {
                x: left,
                y: top,
                w: right - left,
                h: bottom - top,
            })
        })
    }
}

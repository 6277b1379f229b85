use super::Size;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A position in display space. x,y from top left.
#[derive(Serialize, Deserialize, Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// The difference between two points.
#[derive(Serialize, Deserialize, Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Displacement {
    pub dx: i32,
    pub dy: i32,
}

impl Point {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Displacement {
    #[must_use]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    #[must_use]
    pub const fn as_size(self) -> Size {
        Size {
            w: self.dx,
            h: self.dy,
        }
    }
}

impl Sub for Point {
    type Output = Displacement;
    fn sub(self, other: Self) -> Displacement {
        Displacement {
            dx: self.x - other.x,
            dy: self.y - other.y,
        }
    }
}

impl Add<Displacement> for Point {
    type Output = Self;
    fn add(self, other: Displacement) -> Self {
        Self {
            x: self.x + other.dx,
            y: self.y + other.dy,
        }
    }
}

impl Sub<Displacement> for Point {
    type Output = Self;
    fn sub(self, other: Displacement) -> Self {
        Self {
            x: self.x - other.dx,
            y: self.y - other.dy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtracting_points_should_give_the_displacement_between_them() {
        let a = Point::new(480, 20);
        let b = Point::new(500, 0);
        assert_eq!(a - b, Displacement::new(-20, 20));
    }

    #[test]
    fn adding_a_displacement_should_move_the_point() {
        let start = Point::new(10, 10);
        let moved = start + Displacement::new(40, -5);
        assert_eq!(moved, Point::new(50, 5));
        assert_eq!(moved - Displacement::new(40, -5), start);
    }
}

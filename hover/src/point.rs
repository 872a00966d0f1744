use std::ops::Add;

/// A position in page coordinates, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

impl Size {
    pub fn new(w: f64, h: f64) -> Size {
        Size { w, h }
    }
}

/// Top left corner for an overlay of `size` such that it sits centred
/// horizontally on the pointer, with its bottom edge `offset` pixels above it.
pub fn position(pointer: Point, size: Size, offset: f64) -> Point {
    Point {
        x: pointer.x - 0.5 * size.w,
        y: pointer.y - (size.h + offset),
    }
}

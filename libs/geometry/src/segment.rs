//! Line segments.

use serde::{Deserialize, Serialize};

use crate::point::Point;
use crate::transform::{TransformMut, Transformation};

/// A directed line segment from `p0` to `p1`.
#[derive(Debug, Default, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub struct Segment {
    p0: Point,
    p1: Point,
}

impl Segment {
    /// Creates a new segment from `p0` to `p1`.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let seg = Segment::new(Point::new(0., 330.), Point::new(0., 130.));
    /// assert_eq!(seg.length(), 200.);
    /// assert_eq!(seg.midpoint(), Point::new(0., 230.));
    /// ```
    pub const fn new(p0: Point, p1: Point) -> Self {
        Self { p0, p1 }
    }

    /// A horizontal segment of the given length centered on the origin,
    /// running from left to right.
    pub fn horizontal(length: f64) -> Self {
        Self::new(Point::new(-length / 2., 0.), Point::new(length / 2., 0.))
    }

    /// The starting point.
    #[inline]
    pub const fn p0(&self) -> Point {
        self.p0
    }

    /// The ending point.
    #[inline]
    pub const fn p1(&self) -> Point {
        self.p1
    }

    /// The endpoints as a `(start, end)` tuple.
    #[inline]
    pub const fn endpoints(&self) -> (Point, Point) {
        (self.p0, self.p1)
    }

    /// The length of the segment.
    pub fn length(&self) -> f64 {
        self.p0.distance(self.p1)
    }

    /// The point halfway between the endpoints.
    pub fn midpoint(&self) -> Point {
        Point::new((self.p0.x + self.p1.x) / 2., (self.p0.y + self.p1.y) / 2.)
    }
}

impl TransformMut for Segment {
    fn transform_mut(&mut self, trans: Transformation) {
        self.p0.transform_mut(trans);
        self.p1.transform_mut(trans);
    }
}

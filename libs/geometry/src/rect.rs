//! Axis-aligned rectangles.

use serde::{Deserialize, Serialize};

use crate::bbox::Bbox;
use crate::point::Point;
use crate::polygon::Polygon;

/// An axis-aligned rectangle, specified by lower-left and upper-right corners.
///
/// Rectangles are not closed under arbitrary rotation; convert to a [`Polygon`]
/// with [`Rect::to_polygon`] before applying a [`Transformation`](crate::transform::Transformation).
#[derive(Debug, Default, Copy, Clone, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Rect {
    /// The lower-left corner.
    p0: Point,
    /// The upper-right corner.
    p1: Point,
}

impl Rect {
    /// Creates a rectangle from all 4 sides (left, bottom, right, top).
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::from_sides(15., 20., 30., 40.);
    /// assert_eq!(rect.left(), 15.);
    /// assert_eq!(rect.bot(), 20.);
    /// assert_eq!(rect.right(), 30.);
    /// assert_eq!(rect.top(), 40.);
    /// ```
    ///
    /// # Panics
    ///
    /// This method panics if `left > right` or if `bot > top`.
    ///
    /// If you want a fallible constructor, consider using [`Rect::from_sides_option`] instead.
    #[inline]
    pub fn from_sides(left: f64, bot: f64, right: f64, top: f64) -> Self {
        assert!(
            left <= right,
            "Rect::from_sides requires that left ({}) <= right ({})",
            left,
            right
        );
        assert!(
            bot <= top,
            "Rect::from_sides requires that bot ({}) <= top ({})",
            bot,
            top
        );
        Self {
            p0: Point::new(left, bot),
            p1: Point::new(right, top),
        }
    }

    /// Creates a rectangle from all 4 sides (left, bottom, right, top),
    /// but returns `None` if the given sides would make the rectangle empty.
    ///
    /// The rectangle is empty if the left edge is beyond the right edge,
    /// or if the bottom edge is above the top edge.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// assert!(Rect::from_sides_option(0., 0., 10., 10.).is_some());
    /// assert_eq!(Rect::from_sides_option(10., 0., 0., 10.), None);
    /// ```
    pub fn from_sides_option(left: f64, bot: f64, right: f64, top: f64) -> Option<Self> {
        if left > right || bot > top {
            None
        } else {
            Some(Self::from_sides(left, bot, right, top))
        }
    }

    /// Creates a `width` by `height` rectangle centered at `center`.
    ///
    /// Returns `None` unless both `width` and `height` are strictly positive.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::from_center_dims(Point::new(0., 80.), 1300., 100.).unwrap();
    /// assert_eq!(rect.bot(), 30.);
    /// assert_eq!(rect.top(), 130.);
    /// assert_eq!(rect.left(), -650.);
    /// assert!(Rect::from_center_dims(Point::zero(), 0., 10.).is_none());
    /// ```
    pub fn from_center_dims(center: Point, width: f64, height: f64) -> Option<Self> {
        // NaN fails both comparisons.
        if !(width > 0. && height > 0.) {
            return None;
        }
        Self::from_sides_option(
            center.x - width / 2.,
            center.y - height / 2.,
            center.x + width / 2.,
            center.y + height / 2.,
        )
    }

    /// The left edge of the rectangle.
    #[inline]
    pub const fn left(&self) -> f64 {
        self.p0.x
    }

    /// The right edge of the rectangle.
    #[inline]
    pub const fn right(&self) -> f64 {
        self.p1.x
    }

    /// The bottom edge of the rectangle.
    #[inline]
    pub const fn bot(&self) -> f64 {
        self.p0.y
    }

    /// The top edge of the rectangle.
    #[inline]
    pub const fn top(&self) -> f64 {
        self.p1.y
    }

    /// The horizontal extent of the rectangle.
    #[inline]
    pub fn width(&self) -> f64 {
        self.p1.x - self.p0.x
    }

    /// The vertical extent of the rectangle.
    #[inline]
    pub fn height(&self) -> f64 {
        self.p1.y - self.p0.y
    }

    /// Returns the center point of the rectangle.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::from_sides(0., 0., 55., 45.);
    /// assert_eq!(rect.center(), Point::new(27.5, 22.5));
    /// ```
    pub fn center(&self) -> Point {
        Point::new((self.p0.x + self.p1.x) / 2., (self.p0.y + self.p1.y) / 2.)
    }

    /// Converts the rectangle to a counterclockwise polygon,
    /// starting at the lower-left corner.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let poly = Rect::from_sides(0., 0., 2., 1.).to_polygon();
    /// assert_eq!(poly.points()[0], Point::new(0., 0.));
    /// assert_eq!(poly.points()[2], Point::new(2., 1.));
    /// assert!(poly.is_ccw());
    /// ```
    pub fn to_polygon(&self) -> Polygon {
        Polygon::from_verts(vec![
            Point::new(self.left(), self.bot()),
            Point::new(self.right(), self.bot()),
            Point::new(self.right(), self.top()),
            Point::new(self.left(), self.top()),
        ])
    }
}

impl Bbox for Rect {
    fn bbox(&self) -> Option<Rect> {
        Some(*self)
    }
}

//! 2-D points.

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};

use crate::transform::{TransformMut, Transformation};

/// A point in two-dimensional space.
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Point {
    /// The x-coordinate of the point.
    pub x: f64,
    /// The y-coordinate of the point.
    pub y: f64,
}

impl Point {
    /// Creates a new [`Point`] from (x,y) coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the origin, `(0, 0)`.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let origin = Point::zero();
    /// assert_eq!(origin, Point::new(0., 0.));
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0., y: 0. }
    }

    /// Reflects this point through the x-axis.
    #[inline]
    pub const fn reflect_vert(&self) -> Self {
        Self {
            x: self.x,
            y: -self.y,
        }
    }

    /// The Euclidean distance between `self` and `other`.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let a = Point::new(1., 1.);
    /// let b = Point::new(4., 5.);
    /// assert_eq!(a.distance(b), 5.);
    /// ```
    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl TransformMut for Point {
    fn transform_mut(&mut self, trans: Transformation) {
        let x = trans.a[0][0] * self.x + trans.a[0][1] * self.y + trans.b[0];
        let y = trans.a[1][0] * self.x + trans.a[1][1] * self.y + trans.b[1];
        self.x = x;
        self.y = y;
    }
}

impl std::ops::Neg for Point {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from(value: (f64, f64)) -> Self {
        Self {
            x: value.0,
            y: value.1,
        }
    }
}

impl AbsDiffEq for Point {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Point {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

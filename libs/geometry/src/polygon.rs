//! Simple polygons with floating-point vertex coordinates.

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};

use crate::bbox::Bbox;
use crate::point::Point;
use crate::rect::Rect;
use crate::transform::{TransformMut, Transformation};

/// A polygon, with vertex coordinates given in order.
///
/// The boundary is implicitly closed: there is an edge from the last vertex
/// back to the first. Self-intersection is not checked.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct Polygon {
    /// Vector of points that make up the polygon.
    points: Vec<Point>,
}

impl Polygon {
    /// Creates a polygon with given vertices.
    pub fn from_verts(vec: Vec<Point>) -> Self {
        Self { points: vec }
    }

    /// Returns the bottom y-coordinate in the polygon.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let points = vec![
    ///     Point::new(0., 0.),
    ///     Point::new(1., 2.),
    ///     Point::new(-4., 5.),
    /// ];
    /// let polygon = Polygon::from_verts(points);
    /// assert_eq!(polygon.bot(), 0.);
    /// ```
    pub fn bot(&self) -> f64 {
        self.points
            .iter()
            .map(|point| point.y)
            .fold(f64::INFINITY, f64::min)
    }

    /// Returns the top y-coordinate in the polygon.
    pub fn top(&self) -> f64 {
        self.points
            .iter()
            .map(|point| point.y)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Returns the leftmost x-coordinate in the polygon.
    pub fn left(&self) -> f64 {
        self.points
            .iter()
            .map(|point| point.x)
            .fold(f64::INFINITY, f64::min)
    }

    /// Returns the rightmost x-coordinate in the polygon.
    pub fn right(&self) -> f64 {
        self.points
            .iter()
            .map(|point| point.x)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Returns a the vector of points representing the polygon.
    pub fn points(&self) -> &Vec<Point> {
        &self.points
    }

    /// The number of vertices in the polygon.
    #[inline]
    pub fn num_verts(&self) -> usize {
        self.points.len()
    }

    /// Iterates over the edges of the polygon, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// The signed area of the polygon, computed with the shoelace formula.
    ///
    /// Positive for counterclockwise vertex order.
    pub fn signed_area(&self) -> f64 {
        self.edges()
            .map(|(p, q)| p.x * q.y - q.x * p.y)
            .sum::<f64>()
            / 2.
    }

    /// The enclosed area of the polygon.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let triangle = Polygon::from_verts(vec![
    ///     Point::new(0., 0.),
    ///     Point::new(4., 0.),
    ///     Point::new(0., 3.),
    /// ]);
    /// assert_eq!(triangle.area(), 6.);
    /// ```
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Returns `true` if the vertices are in counterclockwise order.
    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.
    }

    /// Returns the center point of the polygon.
    ///
    /// Returns a point with x-coordinate equal to the average of all x-coordinates
    /// and y-coordinate equal to the average of all y-coordinates.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let points = vec![
    ///     Point::new(0., 0.),
    ///     Point::new(1., 2.),
    ///     Point::new(-4., 4.),
    /// ];
    /// let polygon = Polygon::from_verts(points);
    /// assert_eq!(polygon.center(), Point::new(-1., 2.));
    /// ```
    pub fn center(&self) -> Point {
        let n = self.points.len() as f64;
        let x = self.points.iter().map(|point| point.x).sum::<f64>() / n;
        let y = self.points.iter().map(|point| point.y).sum::<f64>() / n;
        Point::new(x, y)
    }

    /// Determines if a point lies strictly inside the polygon,
    /// using the even-odd rule.
    ///
    /// Points exactly on the boundary may be classified either way.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let points = vec![
    ///     Point::new(-4., 0.),
    ///     Point::new(0., 0.),
    ///     Point::new(1., 2.),
    ///     Point::new(2., 2.),
    ///     Point::new(-4., 5.),
    /// ];
    /// let polygon = Polygon::from_verts(points);
    /// assert!(polygon.contains(&Point::new(-2., 2.)));
    /// assert!(!polygon.contains(&Point::new(0., 4.)));
    /// assert!(!polygon.contains(&Point::new(-5., 3.)));
    /// ```
    pub fn contains(&self, p: &Point) -> bool {
        let mut inside = false;
        for (a, b) in self.edges() {
            if (a.y > p.y) != (b.y > p.y) {
                let x = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
                if p.x < x {
                    inside = !inside;
                }
            }
        }
        inside
    }

    /// Returns the polygon with its vertices reflected through the x-axis.
    ///
    /// Vertex order is reversed so that orientation is preserved.
    pub fn reflect_vert(&self) -> Self {
        Self {
            points: self.points.iter().rev().map(Point::reflect_vert).collect(),
        }
    }
}

impl Bbox for Polygon {
    fn bbox(&self) -> Option<Rect> {
        if self.points.is_empty() {
            return None;
        }
        Rect::from_sides_option(self.left(), self.bot(), self.right(), self.top())
    }
}

impl TransformMut for Polygon {
    fn transform_mut(&mut self, trans: Transformation) {
        self.points.transform_mut(trans);
    }
}

impl AbsDiffEq for Polygon {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.points.len() == other.points.len()
            && self
                .points
                .iter()
                .zip(other.points.iter())
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Polygon {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.points.len() == other.points.len()
            && self
                .points
                .iter()
                .zip(other.points.iter())
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

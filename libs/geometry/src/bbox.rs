//! Axis-aligned rectangular bounding boxes.

use crate::rect::Rect;

/// A geometric shape that has a bounding box.
///
/// # Examples
///
/// ```
/// # use geometry::prelude::*;
/// let rect = Rect::from_sides(0., 0., 100., 200.);
/// assert_eq!(rect.bbox(), Some(Rect::from_sides(0., 0., 100., 200.)));
/// let poly = Polygon::from_verts(vec![
///     Point::new(-10., 25.),
///     Point::new(0., 16.),
///     Point::new(40., -20.),
/// ]);
/// assert_eq!(poly.bbox(), Some(Rect::from_sides(-10., -20., 40., 25.)));
/// ```
pub trait Bbox {
    /// Computes the axis-aligned rectangular bounding box.
    ///
    /// If empty, this method should return `None`.
    /// Zero-area shapes are not empty: a degenerate polygon whose vertices
    /// all coincide has a zero-area bounding box.
    fn bbox(&self) -> Option<Rect>;
}

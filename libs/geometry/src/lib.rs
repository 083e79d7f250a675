//! 2-D floating-point geometry for parametric layout generators.
//!
//! Coordinates are `f64` in whatever length unit the caller chooses.
//! Rotations by arbitrary angles are supported; Manhattan rotations
//! are computed exactly.
//!
//! # Examples
//!
//! Create a [rectangle](crate::rect::Rect) and turn it into a [polygon](crate::polygon::Polygon):
//!
//! ```
//! # use geometry::prelude::*;
//! let rect = Rect::from_sides(10., 20., 30., 40.);
//! let poly = rect.to_polygon();
//! assert_eq!(poly.area(), 400.);
//! ```
#![warn(missing_docs)]

extern crate self as geometry;

pub mod bbox;
pub mod boolean;
pub mod point;
pub mod polygon;
pub mod prelude;
pub mod rect;
pub mod segment;
pub mod transform;

/// Wraps the given angle to the interval `[0, 360)` degrees.
///
/// # Examples
///
/// ```
/// use geometry::wrap_angle;
///
/// assert_eq!(wrap_angle(10.), 10.);
/// assert_eq!(wrap_angle(-10.), 350.);
/// assert_eq!(wrap_angle(-740.), 340.);
/// assert_eq!(wrap_angle(-359.), 1.);
/// assert_eq!(wrap_angle(-1.), 359.);
/// assert_eq!(wrap_angle(725.), 5.);
/// assert_eq!(wrap_angle(360.), 0.);
/// assert_eq!(wrap_angle(-360.), 0.);
/// ```
pub fn wrap_angle(angle: f64) -> f64 {
    ((angle % 360.) + 360.) % 360.
}

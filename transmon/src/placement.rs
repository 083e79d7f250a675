//! Rigid-body placement of generated geometry.

use geometry::prelude::*;

use crate::params::DimensionSet;

/// A rotation about the origin followed by a translation.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Placement {
    /// Where the component's origin lands.
    pub origin: Point,
    /// Counterclockwise rotation, in degrees.
    pub orientation: f64,
}

impl Placement {
    pub fn new(origin: impl Into<Point>, orientation: f64) -> Self {
        Self {
            origin: origin.into(),
            orientation,
        }
    }

    /// The placement described by the position and orientation options.
    pub fn from_dims(dims: &DimensionSet) -> Self {
        Self::new(dims.position(), dims.orientation)
    }

    /// The [`Transformation`] applied to every shape and pin.
    pub fn transformation(&self) -> Transformation {
        Transformation::builder()
            .point(self.origin)
            .angle(self.orientation)
            .build()
    }

    /// Places a shape.
    pub fn place<T: Transform>(&self, shape: T) -> T {
        let trans = self.transformation();
        tracing::trace!(?trans, "applying placement");
        shape.transform(trans)
    }

    /// Places a single point.
    pub fn place_point(&self, point: Point) -> Point {
        self.place(point)
    }
}

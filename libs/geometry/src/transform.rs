//! Transformation types and traits.

use approx::{AbsDiffEq, RelativeEq};
use impl_trait_for_tuples::impl_for_tuples;
use serde::{Deserialize, Serialize};

use crate::point::Point;
use crate::wrap_angle;

/// A rigid-body transformation: a rotation about the origin followed by a translation.
///
/// This object does not support scaling or shear, and as such all transformation
/// matrices are orthogonal with determinant 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transformation {
    /// The rotation matrix.
    pub(crate) a: [[f64; 2]; 2],
    /// The x-y translation applied after the rotation.
    pub(crate) b: [f64; 2],
}

impl Default for Transformation {
    fn default() -> Self {
        Self::identity()
    }
}

/// The matrix for a counterclockwise rotation by `angle` degrees.
///
/// Manhattan angles (0, 90, 180, 270 and their equivalents modulo 360)
/// produce exact matrices, so that axis-aligned geometry stays axis-aligned.
fn rotation_matrix(angle: f64) -> [[f64; 2]; 2] {
    let angle = wrap_angle(angle);
    if angle.fract() == 0. {
        match angle as i64 {
            0 => return [[1., 0.], [0., 1.]],
            90 => return [[0., -1.], [1., 0.]],
            180 => return [[-1., 0.], [0., -1.]],
            270 => return [[0., 1.], [-1., 0.]],
            _ => (),
        }
    }
    let (sin, cos) = angle.to_radians().sin_cos();
    [[cos, -sin], [sin, cos]]
}

/// Multiplies two 2x2 matrices, returning a new 2x2 matrix.
fn matmul(a: &[[f64; 2]; 2], b: &[[f64; 2]; 2]) -> [[f64; 2]; 2] {
    [
        [
            a[0][0] * b[0][0] + a[0][1] * b[1][0],
            a[0][0] * b[0][1] + a[0][1] * b[1][1],
        ],
        [
            a[1][0] * b[0][0] + a[1][1] * b[1][0],
            a[1][0] * b[0][1] + a[1][1] * b[1][1],
        ],
    ]
}

/// Multiplies a 2x2 matrix by a 2-entry vector, returning a new 2-entry vector.
fn matvec(a: &[[f64; 2]; 2], b: &[f64; 2]) -> [f64; 2] {
    [
        a[0][0] * b[0] + a[0][1] * b[1],
        a[1][0] * b[0] + a[1][1] * b[1],
    ]
}

/// Finds the inverse of an orthogonal matrix.
///
/// The inverse of a rotation matrix is its transpose.
fn orthogonal_matinv(a: &[[f64; 2]; 2]) -> [[f64; 2]; 2] {
    [[a[0][0], a[1][0]], [a[0][1], a[1][1]]]
}

impl Transformation {
    /// Returns the identity transform, leaving any transformed object unmodified.
    pub fn identity() -> Self {
        Self {
            a: [[1., 0.], [0., 1.]],
            b: [0., 0.],
        }
    }

    /// Returns a translation by `(x,y)`.
    pub fn translate(x: f64, y: f64) -> Self {
        Self {
            a: [[1., 0.], [0., 1.]],
            b: [x, y],
        }
    }

    /// Returns a counterclockwise rotation about the origin by `angle` degrees.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let p = Point::new(1., 0.).transform(Transformation::rotate(90.));
    /// assert_eq!(p, Point::new(0., 1.));
    /// ```
    pub fn rotate(angle: f64) -> Self {
        Self {
            a: rotation_matrix(angle),
            b: [0., 0.],
        }
    }

    /// Returns a new [`TransformationBuilder`].
    #[inline]
    pub fn builder() -> TransformationBuilder {
        TransformationBuilder::default()
    }

    /// Creates a transform that rotates by `angle` degrees about the origin,
    /// then translates by `offset`.
    pub fn from_offset_and_angle(offset: Point, angle: f64) -> Self {
        Self::builder().point(offset).angle(angle).build()
    }

    /// Create a new [`Transformation`] that is the cascade of `parent` and `child`.
    ///
    /// The child is applied first. Note this operation *is not* commutative:
    /// rotating by 90 degrees and then translating by `(1, 0)` lands `(1, 0)` at `(1, 1)`,
    /// whereas translating first lands it at `(0, 2)`.
    pub fn cascade(parent: Transformation, child: Transformation) -> Transformation {
        // The result-transform's origin is the parent's origin,
        // plus the parent-transformed child's origin
        let b = matvec(&parent.a, &child.b);
        let b = [b[0] + parent.b[0], b[1] + parent.b[1]];
        // And the cascade-matrix is the product of the parent's and child's
        let a = matmul(&parent.a, &child.a);
        Self { a, b }
    }

    /// The point representing the translation of this transformation.
    pub fn offset_point(&self) -> Point {
        Point::new(self.b[0], self.b[1])
    }

    /// The counterclockwise rotation encoded by this transformation,
    /// in degrees within `[0, 360)`.
    pub fn angle(&self) -> f64 {
        wrap_angle(self.a[1][0].atan2(self.a[0][0]).to_degrees())
    }

    /// Returns the inverse [`Transformation`] of `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use geometry::transform::Transformation;
    /// use approx::assert_abs_diff_eq;
    ///
    /// let trans = Transformation::cascade(
    ///     Transformation::rotate(30.),
    ///     Transformation::translate(5., 10.),
    /// );
    /// let inv = trans.inv();
    ///
    /// assert_abs_diff_eq!(
    ///     Transformation::cascade(inv, trans),
    ///     Transformation::identity(),
    ///     epsilon = 1e-12
    /// );
    /// ```
    pub fn inv(&self) -> Transformation {
        let a = orthogonal_matinv(&self.a);
        let invb = matvec(&a, &self.b);
        Self {
            a,
            b: [-invb[0], -invb[1]],
        }
    }
}

impl AbsDiffEq for Transformation {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.a
            .iter()
            .flatten()
            .chain(self.b.iter())
            .zip(other.a.iter().flatten().chain(other.b.iter()))
            .all(|(x, y)| x.abs_diff_eq(y, epsilon))
    }
}

impl RelativeEq for Transformation {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.a
            .iter()
            .flatten()
            .chain(self.b.iter())
            .zip(other.a.iter().flatten().chain(other.b.iter()))
            .all(|(x, y)| x.relative_eq(y, epsilon, max_relative))
    }
}

/// A builder for creating transformations from translations and rotation angles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformationBuilder {
    x: f64,
    y: f64,
    angle: f64,
}

impl TransformationBuilder {
    /// Specifies the x-y translation encoded by the transformation.
    pub fn point(&mut self, point: impl Into<Point>) -> &mut Self {
        let point = point.into();
        self.x = point.x;
        self.y = point.y;
        self
    }

    /// Specifies the counterclockwise angle of rotation, in degrees.
    pub fn angle(&mut self, angle: f64) -> &mut Self {
        self.angle = angle;
        self
    }

    /// Builds a [`Transformation`] from the specified parameters.
    pub fn build(&mut self) -> Transformation {
        Transformation {
            a: rotation_matrix(self.angle),
            b: [self.x, self.y],
        }
    }
}

/// A trait for specifying how an object is changed by a [`Transformation`].
#[impl_for_tuples(32)]
pub trait TransformMut {
    /// Applies matrix-vector [`Transformation`] `trans`.
    fn transform_mut(&mut self, trans: Transformation);
}

impl<T: TransformMut> TransformMut for Vec<T> {
    fn transform_mut(&mut self, trans: Transformation) {
        for i in self.iter_mut() {
            i.transform_mut(trans);
        }
    }
}

/// A trait for specifying how an object is changed by a [`Transformation`].
///
/// Takes in an owned copy of the shape and returns the transformed version.
pub trait Transform: TransformMut + Sized {
    /// Applies matrix-vector [`Transformation`] `trans`.
    ///
    /// Creates a new shape at a location equal to the transformation of the original.
    #[inline]
    fn transform(mut self, trans: Transformation) -> Self {
        self.transform_mut(trans);
        self
    }
}

impl<T: TransformMut + Sized> Transform for T {}

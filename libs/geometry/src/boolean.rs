//! Boolean operations on polygons.
//!
//! Delegates to the [`geo`] crate's `BooleanOps`.

use geo::{BooleanOps, LineString, MultiPolygon, Polygon as GeoPolygon};

use crate::point::Point;
use crate::polygon::Polygon;

/// Snap distance for union output, relative to the extent of the inputs.
///
/// `geo` rounds coordinates onto a fixed-precision grid spanning the inputs,
/// which moves vertices by a few parts in 10^10 of that span.
const SNAP_RELATIVE: f64 = 1e-8;

impl Polygon {
    /// Computes the geometric union of `self` and `other`.
    ///
    /// Returns one polygon per connected region of the union. Overlapping or
    /// edge-adjacent inputs merge into a single outline; disjoint inputs produce
    /// multiple parts. Interior rings (holes) are not represented by [`Polygon`]
    /// and are dropped.
    ///
    /// Output vertices that coincide with an input vertex carry that vertex's
    /// exact coordinates.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let a = Rect::from_sides(0., 0., 2., 2.).to_polygon();
    /// let b = Rect::from_sides(1., 1., 3., 3.).to_polygon();
    /// let merged = a.union(&b);
    /// assert_eq!(merged.len(), 1);
    /// assert!(merged[0].points().contains(&Point::new(3., 3.)));
    /// assert!((merged[0].area() - 7.).abs() < 1e-6);
    /// ```
    pub fn union(&self, other: &Polygon) -> Vec<Polygon> {
        let merged: MultiPolygon<f64> = to_geo(self).union(&to_geo(other));
        let anchors = self
            .points()
            .iter()
            .chain(other.points())
            .copied()
            .collect::<Vec<_>>();
        let tolerance = snap_tolerance(&anchors);
        merged
            .into_iter()
            .map(|poly| from_geo(poly, &anchors, tolerance))
            .collect()
    }
}

fn snap_tolerance(anchors: &[Point]) -> f64 {
    let hull = Polygon::from_verts(anchors.to_vec());
    let span = (hull.right() - hull.left()).max(hull.top() - hull.bot());
    span.max(1.) * SNAP_RELATIVE
}

/// Returns the anchor nearest to `p` if it lies within `tolerance`, else `p`.
fn snap(p: Point, anchors: &[Point], tolerance: f64) -> Point {
    anchors
        .iter()
        .map(|a| (a.distance(p), *a))
        .filter(|(d, _)| *d <= tolerance)
        .min_by(|(d0, _), (d1, _)| d0.total_cmp(d1))
        .map_or(p, |(_, a)| a)
}

fn to_geo(poly: &Polygon) -> GeoPolygon<f64> {
    let coords = poly
        .points()
        .iter()
        .map(|p| (p.x, p.y))
        .collect::<Vec<_>>();
    GeoPolygon::new(LineString::from(coords), vec![])
}

fn from_geo(poly: GeoPolygon<f64>, anchors: &[Point], tolerance: f64) -> Polygon {
    let (exterior, _) = poly.into_inner();
    let mut points: Vec<Point> = Vec::new();
    for c in exterior {
        let p = snap(Point::new(c.x, c.y), anchors, tolerance);
        if points.last() != Some(&p) {
            points.push(p);
        }
    }
    // geo rings repeat the first vertex at the end.
    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    Polygon::from_verts(points)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::bbox::Bbox;
    use crate::point::Point;
    use crate::polygon::Polygon;
    use crate::rect::Rect;

    #[test]
    fn union_of_edge_adjacent_shapes_is_connected() {
        let pad = Rect::from_sides(-650., 30., 650., 130.).to_polygon();
        let taper = Polygon::from_verts(vec![
            Point::new(-0.05, 0.04),
            Point::new(0.05, 0.04),
            Point::new(4.95, 30.),
            Point::new(-4.95, 30.),
        ]);
        let merged = pad.union(&taper);
        assert_eq!(merged.len(), 1);
        assert_relative_eq!(
            merged[0].area(),
            pad.area() + taper.area(),
            max_relative = 1e-12
        );
        assert_eq!(
            merged[0].bbox(),
            Some(Rect::from_sides(-650., 0.04, 650., 130.))
        );
    }

    #[test]
    fn union_keeps_input_vertices_exact() {
        let pad = Rect::from_sides(-650., 30., 650., 130.).to_polygon();
        let taper = Polygon::from_verts(vec![
            Point::new(-0.05, 0.04),
            Point::new(0.05, 0.04),
            Point::new(4.95, 30.),
            Point::new(-4.95, 30.),
        ]);
        let merged = pad.union(&taper).remove(0);
        for p in merged.points() {
            assert!(
                pad.points().contains(p) || taper.points().contains(p),
                "vertex {p:?} moved off its input"
            );
        }
        for corner in pad.points().iter().chain(taper.points()) {
            assert!(merged.points().contains(corner), "missing {corner:?}");
        }
    }

    #[test]
    fn union_of_disjoint_shapes_has_two_parts() {
        let a = Rect::from_sides(0., 0., 1., 1.).to_polygon();
        let b = Rect::from_sides(5., 5., 6., 6.).to_polygon();
        assert_eq!(a.union(&b).len(), 2);
    }

    #[test]
    fn union_with_contained_shape_is_outer_shape() {
        let outer = Rect::from_sides(0., 0., 10., 10.).to_polygon();
        let inner = Rect::from_sides(2., 2., 3., 3.).to_polygon();
        let merged = outer.union(&inner);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].bbox(), outer.bbox());
        assert_eq!(merged[0].area(), 100.);
    }
}

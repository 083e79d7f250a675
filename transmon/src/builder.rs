//! Construction of the untransformed transmon geometry.
//!
//! Everything here is centered on the origin with the pads stacked along
//! the y-axis: the top pad above the junction, the bottom pad mirrored below it.

use geometry::prelude::*;

use crate::error::{Error, Result};
use crate::params::DimensionSet;

/// Offsets derived from the pad and CPW dimensions.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Offsets {
    /// Distance from the origin to the center of each pad.
    pub pad_center_offset: f64,
    /// Distance from the origin to the inner edge of each pad.
    pub pad_inner_edge: f64,
    /// Distance from the origin to the center of each CPW feedline.
    pub cpw_y_offset: f64,
}

impl Offsets {
    pub fn new(dims: &DimensionSet) -> Self {
        let pad_center_offset = (dims.pad_separation + dims.pad_width) / 2.;
        Self {
            pad_center_offset,
            pad_inner_edge: dims.pad_separation / 2.,
            cpw_y_offset: pad_center_offset + dims.pad_width / 2. + dims.cpw_length / 2.,
        }
    }
}

/// The transmon geometry before placement.
///
/// Pads include their tapers. Pins are the centerlines of the two CPW
/// feedlines, running from the outer end toward the pads.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseGeometry {
    pub top_pad: Polygon,
    pub bottom_pad: Polygon,
    pub cpw_top: Polygon,
    pub cpw_bottom: Polygon,
    pub cpw_gap_top: Polygon,
    pub cpw_gap_bottom: Polygon,
    pub ground_pocket: Polygon,
    pub jj: Segment,
    pub vpos: Segment,
    pub vneg: Segment,
}

impl TransformMut for BaseGeometry {
    fn transform_mut(&mut self, trans: Transformation) {
        for poly in [
            &mut self.top_pad,
            &mut self.bottom_pad,
            &mut self.cpw_top,
            &mut self.cpw_bottom,
            &mut self.cpw_gap_top,
            &mut self.cpw_gap_bottom,
            &mut self.ground_pocket,
        ] {
            poly.transform_mut(trans);
        }
        // Pins are placed with the same transformation, not re-derived from the polygons.
        (self.jj, self.vpos, self.vneg) = (self.jj, self.vpos, self.vneg).transform(trans);
    }
}

fn positive(quantity: &str, value: f64) -> Result<f64> {
    if value > 0. {
        Ok(value)
    } else {
        Err(Error::degenerate(quantity, value, "must be positive"))
    }
}

fn non_negative(quantity: &str, value: f64) -> Result<f64> {
    if value >= 0. {
        Ok(value)
    } else {
        Err(Error::degenerate(quantity, value, "must not be negative"))
    }
}

/// A rectangle of the given extents, or an error naming the failing quantity.
fn rect(
    center: Point,
    (width_name, width): (&str, f64),
    (height_name, height): (&str, f64),
) -> Result<Polygon> {
    positive(width_name, width)?;
    positive(height_name, height)?;
    Rect::from_center_dims(center, width, height)
        .map(|r| r.to_polygon())
        .ok_or_else(|| Error::degenerate(width_name, width, "rectangle has no area"))
}

/// Builds the top pad, merged with its taper.
fn top_pad(dims: &DimensionSet, offsets: &Offsets) -> Result<Polygon> {
    let half_length = positive("pad_length", dims.pad_length)? / 2.;
    let inner = offsets.pad_inner_edge;
    let outer = inner + positive("pad_width", dims.pad_width)?;
    let pad = Rect::from_sides_option(-half_length, inner, half_length, outer)
        .ok_or_else(|| Error::degenerate("pad_width", dims.pad_width, "rectangle has no area"))?
        .to_polygon();

    let base = dims.inductor_width / 2. - dims.taper_inset;
    if base >= inner {
        return Err(Error::degenerate(
            "taper_height",
            inner - base,
            "taper must have positive height",
        ));
    }
    let taper = Polygon::from_verts(vec![
        Point::new(-dims.jj_length / 2., base),
        Point::new(dims.jj_length / 2., base),
        Point::new(dims.taper_width / 2., inner),
        Point::new(-dims.taper_width / 2., inner),
    ]);

    let mut parts = pad.union(&taper);
    if parts.len() != 1 {
        return Err(Error::degenerate(
            "pad_taper_union",
            parts.len() as f64,
            "pad and taper must merge into exactly one polygon",
        ));
    }
    Ok(parts.remove(0))
}

/// Computes the base geometry for the given dimensions.
pub fn build(dims: &DimensionSet) -> Result<BaseGeometry> {
    let offsets = Offsets::new(dims);
    tracing::debug!(?offsets, "derived transmon offsets");

    positive("jj_length", dims.jj_length)?;
    positive("taper_width", dims.taper_width)?;
    positive("inductor_width", dims.inductor_width)?;
    non_negative("ground_margin", dims.ground_margin)?;
    non_negative("taper_inset", dims.taper_inset)?;
    if offsets.pad_inner_edge < dims.inductor_width / 2. {
        return Err(Error::degenerate(
            "pad_inner_edge",
            offsets.pad_inner_edge,
            "must be at least inductor_width / 2 or the taper inverts",
        ));
    }

    let top_pad = top_pad(dims, &offsets)?;
    let bottom_pad = top_pad.reflect_vert();

    let cpw_top_center = Point::new(0., offsets.cpw_y_offset);
    let cpw_bottom_center = Point::new(0., -offsets.cpw_y_offset);
    let cpw_width = ("cpw_width", dims.cpw_width);
    let cpw_length = ("cpw_length", dims.cpw_length);
    let gap_width = ("cpw_gap_width", dims.cpw_width + 2. * dims.cpw_gap);

    let half_height = offsets.pad_center_offset + dims.pad_width / 2.;
    let ground_pocket = rect(
        Point::zero(),
        ("pocket_width", dims.pad_length + 2. * dims.ground_margin),
        ("pocket_height", 2. * half_height + 2. * dims.ground_margin),
    )?;

    let pin_top = offsets.cpw_y_offset + dims.cpw_length / 2.;
    let pin_bot = offsets.cpw_y_offset - dims.cpw_length / 2.;

    Ok(BaseGeometry {
        top_pad,
        bottom_pad,
        cpw_top: rect(cpw_top_center, cpw_width, cpw_length)?,
        cpw_bottom: rect(cpw_bottom_center, cpw_width, cpw_length)?,
        cpw_gap_top: rect(cpw_top_center, gap_width, cpw_length)?,
        cpw_gap_bottom: rect(cpw_bottom_center, gap_width, cpw_length)?,
        ground_pocket,
        jj: Segment::horizontal(dims.jj_length),
        vpos: Segment::new(Point::new(0., pin_top), Point::new(0., pin_bot)),
        vneg: Segment::new(Point::new(0., -pin_top), Point::new(0., -pin_bot)),
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::options::TransmonOptions;

    fn dims(overrides: &[(&str, &str)]) -> DimensionSet {
        let mut opts = TransmonOptions::default();
        for (k, v) in overrides {
            opts.set(k, *v).unwrap();
        }
        DimensionSet::resolve(&opts).unwrap()
    }

    fn degenerate_quantity(err: Error) -> String {
        match err {
            Error::DegenerateGeometry { quantity, .. } => quantity.to_string(),
            other => panic!("expected DegenerateGeometry, got {other:?}"),
        }
    }

    #[test]
    fn offsets_follow_pad_and_cpw_dimensions() {
        let offsets = Offsets::new(&dims(&[]));
        assert_eq!(offsets.pad_center_offset, 80.);
        assert_eq!(offsets.pad_inner_edge, 30.);
        assert_eq!(offsets.cpw_y_offset, 230.);
    }

    #[test]
    fn pads_include_their_tapers() {
        let d = dims(&[]);
        let geom = build(&d).unwrap();
        let taper_area = (d.jj_length + d.taper_width) / 2. * (30. - (0.05 - 0.01));
        assert_relative_eq!(
            geom.top_pad.area(),
            1300. * 100. + taper_area,
            max_relative = 1e-12
        );
        let base = d.inductor_width / 2. - d.taper_inset;
        assert_eq!(
            geom.top_pad.bbox(),
            Some(Rect::from_sides(-650., base, 650., 130.))
        );
        for corner in [
            Point::new(-650., 30.),
            Point::new(650., 130.),
            Point::new(d.taper_width / 2., 30.),
            Point::new(d.jj_length / 2., base),
        ] {
            assert!(geom.top_pad.points().contains(&corner), "missing {corner:?}");
        }
        assert!(geom.top_pad.is_ccw());
        assert!(geom.bottom_pad.is_ccw());
        assert_eq!(geom.bottom_pad, geom.top_pad.reflect_vert());
    }

    #[test]
    fn feedlines_and_pocket_are_placed_around_the_pads() {
        let geom = build(&dims(&[("ground_margin", "150um")])).unwrap();
        let cpw = geom.cpw_top.bbox().unwrap();
        assert_eq!(cpw.center(), Point::new(0., 230.));
        assert_eq!(cpw.width(), 12.5);
        assert_eq!(cpw.height(), 200.);
        let gap = geom.cpw_gap_bottom.bbox().unwrap();
        assert_eq!(gap.center(), Point::new(0., -230.));
        assert_eq!(gap.width(), 27.5);
        let pocket = geom.ground_pocket.bbox().unwrap();
        assert_eq!(pocket.center(), Point::zero());
        assert_eq!((pocket.width(), pocket.height()), (1600., 560.));
        assert_eq!(geom.jj, Segment::horizontal(0.1));
    }

    #[test]
    fn pins_are_symmetric_about_the_origin() {
        let geom = build(&dims(&[])).unwrap();
        assert_eq!(
            geom.vpos.endpoints(),
            (Point::new(0., 330.), Point::new(0., 130.))
        );
        assert_eq!(geom.vneg.p0(), -geom.vpos.p0());
        assert_eq!(geom.vneg.p1(), -geom.vpos.p1());
    }

    #[test]
    fn feedlines_touch_the_pads() {
        let geom = build(&dims(&[])).unwrap();
        let pad = geom.top_pad.bbox().unwrap();
        let cpw = geom.cpw_top.bbox().unwrap();
        assert_eq!(cpw.bot(), pad.top());
        assert_eq!(cpw.bot(), 130.);
        let pad = geom.bottom_pad.bbox().unwrap();
        let cpw = geom.cpw_bottom.bbox().unwrap();
        assert_eq!(cpw.top(), pad.bot());
    }

    #[test]
    fn non_physical_dimensions_are_rejected() {
        let cases = [
            (("cpw_gap", "-10um"), "cpw_gap_width"),
            (("cpw_width", "0um"), "cpw_width"),
            (("cpw_length", "-1um"), "cpw_length"),
            (("pad_width", "0um"), "pad_width"),
            (("pad_length", "-5um"), "pad_length"),
            (("jj_length", "0um"), "jj_length"),
            (("taper_width", "-1um"), "taper_width"),
            (("ground_margin", "-1um"), "ground_margin"),
            (("taper_inset", "-1nm"), "taper_inset"),
            (("pad_separation", "0.05um"), "pad_inner_edge"),
        ];
        for ((key, value), quantity) in cases {
            let err = build(&dims(&[(key, value)])).unwrap_err();
            assert_eq!(degenerate_quantity(err), quantity, "{key} = {value}");
        }
    }

    #[test]
    fn flat_taper_is_rejected() {
        let err = build(&dims(&[("pad_separation", "0.1um"), ("taper_inset", "0um")]))
            .unwrap_err();
        assert_eq!(degenerate_quantity(err), "taper_height");
    }
}

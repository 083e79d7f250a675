use approx::assert_relative_eq;
use geometry::prelude::*;
use layir::{LayerId, Library, NamedGeometry, SimParams};
use test_log::test;

use crate::assemble::{CONDUCTOR, GROUND_CUTOUT, JUNCTION, VNEG, VPOS};
use crate::error::Error;
use crate::{DifferentialTransmon, TransmonLayout, TransmonOptions};

fn options(overrides: &[(&str, &str)]) -> TransmonOptions {
    let mut opts = TransmonOptions::default();
    for (key, value) in overrides {
        opts.set(key, *value).unwrap();
    }
    opts
}

fn generate(overrides: &[(&str, &str)]) -> TransmonLayout {
    DifferentialTransmon::new("Q1", options(overrides))
        .generate()
        .unwrap()
}

fn polygon<'a>(layout: &'a TransmonLayout, name: &str) -> &'a Polygon {
    layout
        .conductor
        .polygon(name)
        .or_else(|| layout.ground_cutout.polygon(name))
        .unwrap()
}

#[test]
fn generates_example_layout() {
    let layout = generate(&[("ground_margin", "150um")]);

    let top_pad = polygon(&layout, "top_pad");
    assert!(top_pad.contains(&Point::new(0., 80.)));
    let bbox = top_pad.bbox().unwrap();
    assert_eq!((bbox.left(), bbox.right(), bbox.top()), (-650., 650., 130.));

    let cpw_top = polygon(&layout, "cpw_top").bbox().unwrap();
    assert_eq!(cpw_top.center(), Point::new(0., 230.));
    assert_eq!(cpw_top.bot(), bbox.top());

    let pocket = polygon(&layout, "ground_pocket").bbox().unwrap();
    assert_eq!(pocket.center(), Point::zero());
    assert_eq!((pocket.width(), pocket.height()), (1600., 560.));

    assert_eq!(
        layout.vpos.endpoints(),
        (Point::new(0., 330.), Point::new(0., 130.))
    );
    assert_eq!(
        layout.vneg.endpoints(),
        (Point::new(0., -330.), Point::new(0., -130.))
    );
    assert_eq!(layout.junction.segment(), Segment::horizontal(0.1));
    assert_eq!(
        layout.junction.sim_params(),
        &SimParams {
            inductance: layir::Quantity::new(15., "nH"),
            capacitance: layir::Quantity::new(100., "fF"),
        }
    );
}

#[test]
fn ports_are_symmetric_about_the_origin() {
    let layout = generate(&[]);
    let (p0, p1) = layout.vpos.endpoints();
    let (n0, n1) = layout.vneg.endpoints();
    assert_eq!(n0, -p0);
    assert_eq!(n1, -p1);
}

#[test]
fn ports_track_the_transformed_feedlines() {
    let layout = generate(&[("pos_x", "1mm"), ("pos_y", "-2mm"), ("orientation", "30")]);
    for (port, feedline) in [(&layout.vpos, "cpw_top"), (&layout.vneg, "cpw_bottom")] {
        let (p0, p1) = port.endpoints();
        let centerline = Segment::new(p0, p1);
        assert_relative_eq!(
            centerline.midpoint(),
            polygon(&layout, feedline).center(),
            epsilon = 1e-9
        );
        assert_relative_eq!(centerline.length(), 200., epsilon = 1e-9);
    }
}

#[test]
fn ground_pocket_covers_the_conductors() {
    let layout = generate(&[]);
    let conductor_area: f64 = layout.conductor_polygons().map(|(_, p)| p.area()).sum();
    assert!(polygon(&layout, "ground_pocket").area() >= conductor_area);
}

#[test]
fn orientation_90_rotates_counterclockwise() {
    let base = generate(&[]);
    let rotated = generate(&[("orientation", "90")]);
    let quarter_turn = Transformation::rotate(90.);

    let check = |a: &NamedGeometry, b: &NamedGeometry| {
        for ((name, before), (_, after)) in a.iter().zip(b.iter()) {
            assert_eq!(after, &before.clone().transform(quarter_turn), "{name}");
            assert_relative_eq!(after.area(), before.area(), max_relative = 1e-12);
            assert_eq!(after.num_verts(), before.num_verts(), "{name}");
        }
    };
    check(base.conductor.polygons(), rotated.conductor.polygons());
    check(base.ground_cutout.polygons(), rotated.ground_cutout.polygons());

    assert_eq!(
        rotated.vpos.endpoints(),
        (Point::new(-330., 0.), Point::new(-130., 0.))
    );
}

#[test]
fn placement_round_trips() {
    let base = generate(&[]);
    for theta in ["0", "30", "90", "180", "270", "359"] {
        let placed = generate(&[("orientation", theta), ("pos_x", "250um")]);
        let angle: f64 = theta.parse().unwrap();
        let inv = Transformation::from_offset_and_angle(Point::new(250., 0.), angle).inv();
        for (name, poly) in placed.conductor.polygons() {
            assert_relative_eq!(
                &poly.clone().transform(inv),
                base.conductor.polygon(name).unwrap(),
                epsilon = 1e-9
            );
        }
    }
}

#[test]
fn identity_placement_leaves_geometry_in_place() {
    let layout = generate(&[("orientation", "360"), ("pos_x", "0mm")]);
    let base = generate(&[]);
    assert_eq!(layout, base);
}

#[test]
fn negative_cpw_gap_is_degenerate() {
    let err = DifferentialTransmon::new("Q1", options(&[("cpw_gap", "-7um")]))
        .generate()
        .unwrap_err();
    assert!(matches!(err, Error::DegenerateGeometry { .. }), "{err}");
}

#[test]
fn inverted_taper_is_degenerate() {
    let err = DifferentialTransmon::new(
        "Q1",
        options(&[("pad_separation", "1um"), ("inductor_width", "2um")]),
    )
    .generate()
    .unwrap_err();
    assert!(
        matches!(err, Error::DegenerateGeometry { ref quantity, .. } if quantity == "pad_inner_edge"),
        "{err}"
    );
}

#[test]
fn add_to_commits_a_cell() {
    let mut lib = Library::new();
    let id = DifferentialTransmon::new("Q1", options(&[("layer", "2"), ("layer_ground", "5")]))
        .add_to(&mut lib)
        .unwrap();
    let cell = lib.cell(id);
    assert_eq!(cell.name(), "Q1");
    assert_eq!(cell.try_group(CONDUCTOR).unwrap().layer(), LayerId(2));
    assert!(cell.try_group(GROUND_CUTOUT).unwrap().subtract());
    assert_eq!(cell.try_junction(JUNCTION).unwrap().width(), 0.1);
    assert_eq!(cell.port(VPOS).width(), 12.5);
    assert_eq!(cell.port(VNEG).width(), 12.5);
}

#[test]
fn failures_leave_the_library_unchanged() {
    let mut lib = Library::new();
    DifferentialTransmon::new("Q1", TransmonOptions::default())
        .add_to(&mut lib)
        .unwrap();
    let before = lib.try_cell_named("Q1").unwrap().clone();

    let err = DifferentialTransmon::new("Q1", options(&[("pos_x", "5mm")]))
        .add_to(&mut lib)
        .unwrap_err();
    assert!(
        matches!(err, Error::Database(layir::Error::DuplicateCell(_))),
        "{err}"
    );

    let err = DifferentialTransmon::new("Q2", options(&[("pad_width", "wide")]))
        .add_to(&mut lib)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidDimension { .. }), "{err}");

    assert_eq!(lib.len(), 1);
    assert_eq!(lib.try_cell_named("Q1").unwrap(), &before);
    assert!(lib.try_cell_named("Q2").is_none());
}

use geometry::prelude::*;
use test_log::test;

use crate::*;

fn square(side: f64) -> Polygon {
    Rect::from_sides(0., 0., side, side).to_polygon()
}

fn sim_params() -> SimParams {
    SimParams {
        inductance: Quantity::new(15., "nH"),
        capacitance: Quantity::new(100., "fF"),
    }
}

#[test]
fn cell_registers_groups_junctions_and_ports() {
    let mut cell = Cell::new("qubit");
    let mut polys = NamedGeometry::new();
    polys.insert("a".into(), square(1.));
    polys.insert("b".into(), square(2.));
    cell.register_polygon_group("metal", LayerId(1), false, &polys)
        .unwrap();
    cell.register_junction(
        "jj",
        Segment::horizontal(0.1),
        LayerId(1),
        0.1,
        &sim_params(),
    )
    .unwrap();
    cell.register_port("p", (Point::new(0., 10.), Point::new(0., 5.)), 2.5)
        .unwrap();

    let group = cell.try_group("metal").unwrap();
    assert_eq!(group.layer(), LayerId(1));
    assert!(!group.subtract());
    assert_eq!(group.polygons().len(), 2);
    assert_eq!(group.polygon("b").unwrap().area(), 4.);

    let jj = cell.try_junction("jj").unwrap();
    assert_eq!(jj.width(), 0.1);
    assert_eq!(jj.sim_params().inductance.to_string(), "15nH");

    let port = cell.port("p");
    assert_eq!(port.endpoints(), (Point::new(0., 10.), Point::new(0., 5.)));
    assert_eq!(port.width(), 2.5);
}

#[test]
fn duplicate_names_are_rejected() {
    let mut cell = Cell::new("qubit");
    let mut polys = NamedGeometry::new();
    polys.insert("a".into(), square(1.));
    cell.register_polygon_group("metal", LayerId(1), false, &polys)
        .unwrap();
    assert_eq!(
        cell.register_polygon_group("metal", LayerId(2), true, &polys),
        Err(Error::DuplicateGroup {
            cell: "qubit".into(),
            group: "metal".into()
        })
    );
    cell.register_port("p", (Point::zero(), Point::new(1., 0.)), 1.)
        .unwrap();
    assert!(matches!(
        cell.register_port("p", (Point::zero(), Point::new(1., 0.)), 1.),
        Err(Error::DuplicatePort { .. })
    ));
    assert_eq!(cell.try_group("metal").unwrap().layer(), LayerId(1));
}

#[test]
fn empty_groups_are_rejected() {
    let mut cell = Cell::new("qubit");
    assert!(matches!(
        cell.register_polygon_group("metal", LayerId(1), false, &NamedGeometry::new()),
        Err(Error::EmptyGroup { .. })
    ));
    assert!(cell.is_empty());
}

#[test]
fn library_rejects_duplicate_cells() {
    let mut lib = Library::new();
    let id = lib.add_cell(Cell::new("qubit")).unwrap();
    assert_eq!(lib.try_cell_id_named("qubit"), Some(id));

    let mut other = Cell::new("qubit");
    other
        .register_port("p", (Point::zero(), Point::new(1., 0.)), 1.)
        .unwrap();
    assert_eq!(
        lib.add_cell(other),
        Err(Error::DuplicateCell("qubit".into()))
    );
    assert_eq!(lib.len(), 1);
    assert!(lib.cell(id).is_empty());

    let id2 = lib.add_cell(Cell::new("qubit2")).unwrap();
    assert_ne!(id, id2);
    assert_eq!(
        lib.cells().map(|(_, c)| c.name().as_str()).collect::<Vec<_>>(),
        vec!["qubit", "qubit2"]
    );
}

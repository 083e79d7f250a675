//! Layout IR: a minimal design database for generated layout cells.
//!
//! A [`Library`] holds [`Cell`]s. Each cell holds named polygon groups on
//! layers (optionally marked as subtractive masks), junction elements, and
//! ports. Generators populate cells through the [`DesignDatabase`] trait.

pub mod id;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use arcstr::ArcStr;
use geometry::prelude::{Point, Polygon, Segment};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::id::Id;

/// Marker type for [`CellId`].
pub struct Cells;

pub type CellId = Id<Cells>;

/// Named polygons, in insertion order.
pub type NamedGeometry = IndexMap<ArcStr, Polygon>;

/// The [`Error`] result type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A design database error.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A cell with the same name already exists in the library.
    #[error("a cell named `{0}` already exists in the library")]
    DuplicateCell(ArcStr),
    /// A polygon group with the same name already exists in the cell.
    #[error("polygon group `{group}` already registered in cell `{cell}`")]
    DuplicateGroup { cell: ArcStr, group: ArcStr },
    /// A junction with the same name already exists in the cell.
    #[error("junction `{name}` already registered in cell `{cell}`")]
    DuplicateJunction { cell: ArcStr, name: ArcStr },
    /// A port with the same name already exists in the cell.
    #[error("port `{name}` already registered in cell `{cell}`")]
    DuplicatePort { cell: ArcStr, name: ArcStr },
    /// A polygon group contained no polygons.
    #[error("polygon group `{group}` in cell `{cell}` is empty")]
    EmptyGroup { cell: ArcStr, group: ArcStr },
}

/// A layer identifier, as used by downstream export tools.
#[derive(
    Debug, Default, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct LayerId(pub u32);

impl std::fmt::Display for LayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for LayerId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// A numeric value with an attached unit tag.
///
/// The database does not interpret quantities; it carries them through to
/// downstream tools unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    /// The numeric magnitude, in `unit`.
    pub value: f64,
    /// The unit tag, for example `nH` or `fF`.
    pub unit: ArcStr,
}

impl Quantity {
    pub fn new(value: f64, unit: impl Into<ArcStr>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

/// Simulation parameters attached to a junction element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimParams {
    pub inductance: Quantity,
    pub capacitance: Quantity,
}

/// A named set of polygons drawn on one layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonGroup {
    layer: LayerId,
    subtract: bool,
    polygons: NamedGeometry,
}

/// A junction element: a line segment with a drawn width and simulation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Junction {
    segment: Segment,
    layer: LayerId,
    width: f64,
    sim_params: SimParams,
}

/// A location at which this cell should be connected.
///
/// The endpoints define the port's centerline; `width` is the width of the
/// conductor that connects there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Port {
    endpoints: [Point; 2],
    width: f64,
}

/// The registration interface that layout generators write into.
///
/// Implementations decide how names are scoped and what counts as a conflict.
pub trait DesignDatabase {
    /// The error returned when a registration is rejected.
    type Error;

    /// Registers a group of named polygons on `layer`.
    ///
    /// If `subtract` is true, the polygons are removed from the layer's fill
    /// (for example, cutouts from a ground plane) rather than added as metal.
    fn register_polygon_group(
        &mut self,
        group: &str,
        layer: LayerId,
        subtract: bool,
        polygons: &NamedGeometry,
    ) -> Result<(), Self::Error>;

    /// Registers a junction element.
    fn register_junction(
        &mut self,
        name: &str,
        segment: Segment,
        layer: LayerId,
        width: f64,
        sim_params: &SimParams,
    ) -> Result<(), Self::Error>;

    /// Registers a port.
    fn register_port(
        &mut self,
        name: &str,
        endpoints: (Point, Point),
        width: f64,
    ) -> Result<(), Self::Error>;
}

/// A layout cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    name: ArcStr,
    groups: IndexMap<ArcStr, PolygonGroup>,
    junctions: IndexMap<ArcStr, Junction>,
    ports: IndexMap<ArcStr, Port>,
}

/// A collection of uniquely named cells.
#[derive(Debug, Clone)]
pub struct Library {
    cell_id: CellId,
    cells: IndexMap<CellId, Cell>,
    name_map: HashMap<ArcStr, CellId>,
}

impl Default for Library {
    fn default() -> Self {
        Self {
            cell_id: Id::new(),
            cells: Default::default(),
            name_map: Default::default(),
        }
    }
}

impl Library {
    pub fn new() -> Self {
        Default::default()
    }

    /// Adds a completed cell to the library.
    ///
    /// Fails without modifying the library if a cell with the same name exists.
    pub fn add_cell(&mut self, cell: Cell) -> Result<CellId> {
        if self.name_map.contains_key(&cell.name) {
            tracing::error!("a cell named `{}` already exists", cell.name);
            return Err(Error::DuplicateCell(cell.name));
        }
        let id = self.cell_id.alloc();
        tracing::debug!(name = %cell.name, "added cell to library");
        self.name_map.insert(cell.name.clone(), id);
        self.cells.insert(id, cell);
        Ok(id)
    }

    /// Gets the cell with the given ID.
    ///
    /// # Panics
    ///
    /// Panics if no cell has the given ID.
    /// For a non-panicking alternative, see [`try_cell`](Library::try_cell).
    pub fn cell(&self, id: CellId) -> &Cell {
        self.cells.get(&id).unwrap()
    }

    pub fn try_cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(&id)
    }

    /// Gets the cell with the given name.
    pub fn try_cell_named(&self, name: &str) -> Option<&Cell> {
        self.try_cell(*self.name_map.get(name)?)
    }

    /// Gets the cell ID corresponding to the given name.
    pub fn try_cell_id_named(&self, name: &str) -> Option<CellId> {
        self.name_map.get(name).copied()
    }

    /// Iterates over the `(id, cell)` pairs in this library, in insertion order.
    pub fn cells(&self) -> impl Iterator<Item = (CellId, &Cell)> {
        self.cells.iter().map(|(id, cell)| (*id, cell))
    }

    /// The number of cells in the library.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Cell {
    pub fn new(name: impl Into<ArcStr>) -> Self {
        Self {
            name: name.into(),
            groups: Default::default(),
            junctions: Default::default(),
            ports: Default::default(),
        }
    }

    /// The name of the cell.
    #[inline]
    pub fn name(&self) -> &ArcStr {
        &self.name
    }

    /// Iterate over the polygon groups of this cell.
    #[inline]
    pub fn groups(&self) -> impl Iterator<Item = (&ArcStr, &PolygonGroup)> {
        self.groups.iter()
    }

    /// Get a polygon group of this cell by name.
    #[inline]
    pub fn try_group(&self, name: &str) -> Option<&PolygonGroup> {
        self.groups.get(name)
    }

    /// Iterate over the junctions of this cell.
    #[inline]
    pub fn junctions(&self) -> impl Iterator<Item = (&ArcStr, &Junction)> {
        self.junctions.iter()
    }

    /// Get a junction of this cell by name.
    #[inline]
    pub fn try_junction(&self, name: &str) -> Option<&Junction> {
        self.junctions.get(name)
    }

    /// Iterate over the ports of this cell.
    #[inline]
    pub fn ports(&self) -> impl Iterator<Item = (&ArcStr, &Port)> {
        self.ports.iter()
    }

    /// Get a port of this cell by name.
    ///
    /// # Panics
    ///
    /// Panics if the provided port does not exist.
    #[inline]
    pub fn port(&self, name: &str) -> &Port {
        self.try_port(name).unwrap()
    }

    /// Get a port of this cell by name.
    #[inline]
    pub fn try_port(&self, name: &str) -> Option<&Port> {
        self.ports.get(name)
    }

    /// Returns `true` if nothing has been registered in this cell.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.junctions.is_empty() && self.ports.is_empty()
    }
}

impl DesignDatabase for Cell {
    type Error = Error;

    fn register_polygon_group(
        &mut self,
        group: &str,
        layer: LayerId,
        subtract: bool,
        polygons: &NamedGeometry,
    ) -> Result<()> {
        if self.groups.contains_key(group) {
            return Err(Error::DuplicateGroup {
                cell: self.name.clone(),
                group: group.into(),
            });
        }
        if polygons.is_empty() {
            return Err(Error::EmptyGroup {
                cell: self.name.clone(),
                group: group.into(),
            });
        }
        self.groups.insert(
            group.into(),
            PolygonGroup::new(layer, subtract, polygons.clone()),
        );
        Ok(())
    }

    fn register_junction(
        &mut self,
        name: &str,
        segment: Segment,
        layer: LayerId,
        width: f64,
        sim_params: &SimParams,
    ) -> Result<()> {
        if self.junctions.contains_key(name) {
            return Err(Error::DuplicateJunction {
                cell: self.name.clone(),
                name: name.into(),
            });
        }
        self.junctions.insert(
            name.into(),
            Junction::new(segment, layer, width, sim_params.clone()),
        );
        Ok(())
    }

    fn register_port(&mut self, name: &str, endpoints: (Point, Point), width: f64) -> Result<()> {
        if self.ports.contains_key(name) {
            return Err(Error::DuplicatePort {
                cell: self.name.clone(),
                name: name.into(),
            });
        }
        self.ports.insert(name.into(), Port::new(endpoints, width));
        Ok(())
    }
}

impl PolygonGroup {
    #[inline]
    pub fn new(layer: LayerId, subtract: bool, polygons: NamedGeometry) -> Self {
        Self {
            layer,
            subtract,
            polygons,
        }
    }

    #[inline]
    pub fn layer(&self) -> LayerId {
        self.layer
    }

    /// Whether the polygons are removed from, rather than added to, the layer.
    #[inline]
    pub fn subtract(&self) -> bool {
        self.subtract
    }

    #[inline]
    pub fn polygons(&self) -> &NamedGeometry {
        &self.polygons
    }

    /// Get a polygon of this group by name.
    #[inline]
    pub fn polygon(&self, name: &str) -> Option<&Polygon> {
        self.polygons.get(name)
    }
}

impl Junction {
    #[inline]
    pub fn new(segment: Segment, layer: LayerId, width: f64, sim_params: SimParams) -> Self {
        Self {
            segment,
            layer,
            width,
            sim_params,
        }
    }

    #[inline]
    pub fn segment(&self) -> Segment {
        self.segment
    }

    #[inline]
    pub fn layer(&self) -> LayerId {
        self.layer
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn sim_params(&self) -> &SimParams {
        &self.sim_params
    }
}

impl Port {
    #[inline]
    pub fn new(endpoints: (Point, Point), width: f64) -> Self {
        Self {
            endpoints: [endpoints.0, endpoints.1],
            width,
        }
    }

    /// The `(start, end)` points of the port's centerline.
    #[inline]
    pub fn endpoints(&self) -> (Point, Point) {
        (self.endpoints[0], self.endpoints[1])
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }
}

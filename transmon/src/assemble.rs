//! Partitioning of placed geometry into design-database entries.

use arcstr::ArcStr;
use geometry::prelude::Polygon;
use layir::{DesignDatabase, Junction, NamedGeometry, PolygonGroup, Port};

use crate::builder::BaseGeometry;
use crate::params::DimensionSet;

/// Name of the additive metal group.
pub const CONDUCTOR: &str = "conductor";
/// Name of the ground-plane subtraction group.
pub const GROUND_CUTOUT: &str = "ground_cutout";
/// Name of the junction element.
pub const JUNCTION: &str = "jj";
/// Name of the port on the top feedline.
pub const VPOS: &str = "Vpos";
/// Name of the port on the bottom feedline.
pub const VNEG: &str = "Vneg";

/// A fully computed transmon layout, ready to be registered.
#[derive(Debug, Clone, PartialEq)]
pub struct TransmonLayout {
    pub conductor: PolygonGroup,
    pub ground_cutout: PolygonGroup,
    pub junction: Junction,
    pub vpos: Port,
    pub vneg: Port,
}

/// Sorts placed geometry into the conductor, ground cutout, junction and ports.
pub fn assemble(dims: &DimensionSet, placed: BaseGeometry) -> TransmonLayout {
    let BaseGeometry {
        top_pad,
        bottom_pad,
        cpw_top,
        cpw_bottom,
        cpw_gap_top,
        cpw_gap_bottom,
        ground_pocket,
        jj,
        vpos,
        vneg,
    } = placed;

    let conductor: NamedGeometry = [
        (arcstr::literal!("top_pad"), top_pad),
        (arcstr::literal!("bottom_pad"), bottom_pad),
        (arcstr::literal!("cpw_top"), cpw_top),
        (arcstr::literal!("cpw_bottom"), cpw_bottom),
    ]
    .into_iter()
    .collect();
    let ground_cutout: NamedGeometry = [
        (arcstr::literal!("ground_pocket"), ground_pocket),
        (arcstr::literal!("cpw_gap_top"), cpw_gap_top),
        (arcstr::literal!("cpw_gap_bottom"), cpw_gap_bottom),
    ]
    .into_iter()
    .collect();

    TransmonLayout {
        conductor: PolygonGroup::new(dims.layer, false, conductor),
        ground_cutout: PolygonGroup::new(dims.layer_ground, true, ground_cutout),
        junction: Junction::new(jj, dims.layer, dims.inductor_width, dims.sim_params()),
        vpos: Port::new(vpos.endpoints(), dims.cpw_width),
        vneg: Port::new(vneg.endpoints(), dims.cpw_width),
    }
}

impl TransmonLayout {
    /// Registers every group, the junction, and both ports with `db`.
    ///
    /// Stops at the first rejected registration. Callers that need
    /// all-or-nothing behavior should emit into a staging database,
    /// such as a fresh [`layir::Cell`], and commit it afterwards.
    pub fn emit<D: DesignDatabase>(&self, db: &mut D) -> Result<(), D::Error> {
        for (name, group) in [
            (CONDUCTOR, &self.conductor),
            (GROUND_CUTOUT, &self.ground_cutout),
        ] {
            db.register_polygon_group(name, group.layer(), group.subtract(), group.polygons())?;
        }
        db.register_junction(
            JUNCTION,
            self.junction.segment(),
            self.junction.layer(),
            self.junction.width(),
            self.junction.sim_params(),
        )?;
        for (name, port) in [(VPOS, &self.vpos), (VNEG, &self.vneg)] {
            db.register_port(name, port.endpoints(), port.width())?;
        }
        Ok(())
    }

    /// The conductor polygons.
    pub fn conductor_polygons(&self) -> impl Iterator<Item = (&ArcStr, &Polygon)> {
        self.conductor.polygons().iter()
    }
}

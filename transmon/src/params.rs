//! Resolution of raw options into a typed set of dimensions.

use geometry::prelude::Point;
use geometry::wrap_angle;
use layir::{LayerId, Quantity, SimParams};

use crate::error::Result;
use crate::options::TransmonOptions;
use crate::units::{
    parse_angle, parse_layer, parse_length, parse_quantity, CAPACITANCE_UNITS, INDUCTANCE_UNITS,
};

/// The resolved parameters of a differential transmon.
///
/// All lengths are in micrometers. The orientation is in degrees,
/// normalized to `[0, 360)`.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionSet {
    pub pad_width: f64,
    pub pad_length: f64,
    pub pad_separation: f64,
    pub jj_length: f64,
    pub inductor_width: f64,
    pub taper_width: f64,
    pub cpw_width: f64,
    pub cpw_gap: f64,
    pub cpw_length: f64,
    pub ground_margin: f64,
    pub taper_inset: f64,
    pub pos_x: f64,
    pub pos_y: f64,
    pub orientation: f64,
    pub layer: LayerId,
    pub layer_ground: LayerId,
    pub inductance: Quantity,
    pub capacitance: Quantity,
}

impl DimensionSet {
    /// Parses and unit-converts every option.
    ///
    /// Fails with [`InvalidDimension`](crate::error::Error::InvalidDimension)
    /// naming the first option that cannot be parsed. Geometric consistency is
    /// checked later, by the geometry builder.
    pub fn resolve(opts: &TransmonOptions) -> Result<Self> {
        let length = |param: &str, raw: &str| parse_length(param, raw);
        let dims = Self {
            pad_width: length("pad_width", &opts.pad_width)?,
            pad_length: length("pad_length", &opts.pad_length)?,
            pad_separation: length("pad_separation", &opts.pad_separation)?,
            jj_length: length("jj_length", &opts.jj_length)?,
            inductor_width: length("inductor_width", &opts.inductor_width)?,
            taper_width: length("taper_width", &opts.taper_width)?,
            cpw_width: length("cpw_width", &opts.cpw_width)?,
            cpw_gap: length("cpw_gap", &opts.cpw_gap)?,
            cpw_length: length("cpw_length", &opts.cpw_length)?,
            ground_margin: length("ground_margin", &opts.ground_margin)?,
            taper_inset: length("taper_inset", &opts.taper_inset)?,
            pos_x: length("pos_x", &opts.pos_x)?,
            pos_y: length("pos_y", &opts.pos_y)?,
            orientation: wrap_angle(parse_angle("orientation", &opts.orientation)?),
            layer: parse_layer("layer", &opts.layer)?,
            layer_ground: parse_layer("layer_ground", &opts.layer_ground)?,
            inductance: parse_quantity(
                "hfss_inductance",
                &opts.hfss_inductance,
                INDUCTANCE_UNITS,
            )?,
            capacitance: parse_quantity(
                "hfss_capacitance",
                &opts.hfss_capacitance,
                CAPACITANCE_UNITS,
            )?,
        };
        tracing::debug!(?dims, "resolved transmon dimensions");
        Ok(dims)
    }

    /// The position of the component center.
    #[inline]
    pub fn position(&self) -> Point {
        Point::new(self.pos_x, self.pos_y)
    }

    /// The junction simulation parameters.
    pub fn sim_params(&self) -> SimParams {
        SimParams {
            inductance: self.inductance.clone(),
            capacitance: self.capacitance.clone(),
        }
    }
}

impl TryFrom<&TransmonOptions> for DimensionSet {
    type Error = crate::error::Error;

    fn try_from(value: &TransmonOptions) -> Result<Self> {
        Self::resolve(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn defaults_resolve() {
        let dims = DimensionSet::resolve(&TransmonOptions::default()).unwrap();
        assert_eq!(dims.pad_width, 100.);
        assert_eq!(dims.pad_length, 1300.);
        assert_eq!(dims.jj_length, 0.1);
        assert_eq!(dims.taper_inset, 0.01);
        assert_eq!(dims.ground_margin, 50.);
        assert_eq!(dims.layer, LayerId(1));
        assert_eq!(dims.inductance, Quantity::new(15., "nH"));
        assert_eq!(dims.capacitance, Quantity::new(100., "fF"));
        assert_eq!(dims.position(), Point::zero());
    }

    #[test]
    fn orientation_is_normalized() {
        let mut opts = TransmonOptions::default();
        opts.set("orientation", "-90").unwrap();
        assert_eq!(DimensionSet::resolve(&opts).unwrap().orientation, 270.);
        opts.set("orientation", "720").unwrap();
        assert_eq!(DimensionSet::resolve(&opts).unwrap().orientation, 0.);
    }

    #[test]
    fn mixed_units_resolve_to_micrometers() {
        let mut opts = TransmonOptions::default();
        opts.set("pos_x", "1.5mm").unwrap();
        opts.set("pos_y", "-250000nm").unwrap();
        opts.set("pad_length", "0.13cm").unwrap();
        let dims = DimensionSet::try_from(&opts).unwrap();
        assert_eq!(dims.position(), Point::new(1500., -250.));
        assert_eq!(dims.pad_length, 1300.);
    }

    #[test]
    fn first_bad_option_is_reported() {
        let mut opts = TransmonOptions::default();
        opts.set("cpw_width", "12.5").unwrap();
        let err = DimensionSet::resolve(&opts).unwrap_err();
        assert!(matches!(err, Error::InvalidDimension { ref param, .. } if param == "cpw_width"));

        let mut opts = TransmonOptions::default();
        opts.set("hfss_capacitance", "100 farads").unwrap();
        let err = DimensionSet::resolve(&opts).unwrap_err();
        assert!(
            matches!(err, Error::InvalidDimension { ref param, .. } if param == "hfss_capacitance")
        );
    }
}

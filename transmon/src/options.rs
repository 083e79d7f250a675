//! Generator options, as supplied by users before unit resolution.

use std::path::Path;

use arcstr::ArcStr;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

/// The raw, string-valued options of a differential transmon.
///
/// Every value is kept as written (for example `"100um"`) until
/// [`DimensionSet::resolve`](crate::params::DimensionSet::resolve) parses it.
/// Options that are not supplied take the defaults of [`TransmonOptions::default`].
///
/// In TOML, values may be written as strings or as bare numbers;
/// numbers are only meaningful for unit-less options such as `orientation` and `layer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransmonOptions {
    /// Height of each capacitor pad.
    #[serde(deserialize_with = "string_or_number")]
    pub pad_width: ArcStr,
    /// Width of each capacitor pad.
    #[serde(deserialize_with = "string_or_number")]
    pub pad_length: ArcStr,
    /// Gap between the inner edges of the two pads.
    #[serde(deserialize_with = "string_or_number")]
    pub pad_separation: ArcStr,
    /// Length of the junction line.
    #[serde(deserialize_with = "string_or_number")]
    pub jj_length: ArcStr,
    /// Drawn width of the junction; also the taper's base height.
    #[serde(deserialize_with = "string_or_number")]
    pub inductor_width: ArcStr,
    /// Width of each taper where it meets its pad.
    #[serde(deserialize_with = "string_or_number")]
    pub taper_width: ArcStr,
    /// Width of the CPW center conductor.
    #[serde(deserialize_with = "string_or_number")]
    pub cpw_width: ArcStr,
    /// Gap between the CPW center conductor and ground, on each side.
    #[serde(deserialize_with = "string_or_number")]
    pub cpw_gap: ArcStr,
    /// Length of each CPW feedline.
    #[serde(deserialize_with = "string_or_number")]
    pub cpw_length: ArcStr,
    /// Clearance between the pads and the edge of the ground pocket.
    #[serde(deserialize_with = "string_or_number")]
    pub ground_margin: ArcStr,
    /// Conductor and junction layer.
    #[serde(deserialize_with = "string_or_number")]
    pub layer: ArcStr,
    /// Ground-plane cutout layer.
    #[serde(deserialize_with = "string_or_number")]
    pub layer_ground: ArcStr,
    /// Junction inductance, passed through to simulation tools.
    #[serde(deserialize_with = "string_or_number")]
    pub hfss_inductance: ArcStr,
    /// Junction capacitance, passed through to simulation tools.
    #[serde(deserialize_with = "string_or_number")]
    pub hfss_capacitance: ArcStr,
    /// X-coordinate of the component center.
    #[serde(deserialize_with = "string_or_number")]
    pub pos_x: ArcStr,
    /// Y-coordinate of the component center.
    #[serde(deserialize_with = "string_or_number")]
    pub pos_y: ArcStr,
    /// Counterclockwise rotation about the component center, in degrees.
    #[serde(deserialize_with = "string_or_number")]
    pub orientation: ArcStr,
    /// Inset of the taper base from the junction edge.
    ///
    /// Keeps the taper and junction overlapping without coincident vertices.
    #[serde(deserialize_with = "string_or_number")]
    pub taper_inset: ArcStr,
}

impl Default for TransmonOptions {
    fn default() -> Self {
        Self {
            pad_width: arcstr::literal!("100um"),
            pad_length: arcstr::literal!("1300um"),
            pad_separation: arcstr::literal!("60um"),
            jj_length: arcstr::literal!("0.1um"),
            inductor_width: arcstr::literal!("0.1um"),
            taper_width: arcstr::literal!("9.9um"),
            cpw_width: arcstr::literal!("12.5um"),
            cpw_gap: arcstr::literal!("7.5um"),
            cpw_length: arcstr::literal!("200um"),
            ground_margin: arcstr::literal!("50um"),
            layer: arcstr::literal!("1"),
            layer_ground: arcstr::literal!("1"),
            hfss_inductance: arcstr::literal!("15nH"),
            hfss_capacitance: arcstr::literal!("100fF"),
            pos_x: arcstr::literal!("0um"),
            pos_y: arcstr::literal!("0um"),
            orientation: arcstr::literal!("0"),
            taper_inset: arcstr::literal!("0.01um"),
        }
    }
}

impl TransmonOptions {
    /// The names of all recognized options.
    pub const KEYS: [&'static str; 18] = [
        "pad_width",
        "pad_length",
        "pad_separation",
        "jj_length",
        "inductor_width",
        "taper_width",
        "cpw_width",
        "cpw_gap",
        "cpw_length",
        "ground_margin",
        "layer",
        "layer_ground",
        "hfss_inductance",
        "hfss_capacitance",
        "pos_x",
        "pos_y",
        "orientation",
        "taper_inset",
    ];

    fn field_mut(&mut self, key: &str) -> Option<&mut ArcStr> {
        Some(match key {
            "pad_width" => &mut self.pad_width,
            "pad_length" => &mut self.pad_length,
            "pad_separation" => &mut self.pad_separation,
            "jj_length" => &mut self.jj_length,
            "inductor_width" => &mut self.inductor_width,
            "taper_width" => &mut self.taper_width,
            "cpw_width" => &mut self.cpw_width,
            "cpw_gap" => &mut self.cpw_gap,
            "cpw_length" => &mut self.cpw_length,
            "ground_margin" => &mut self.ground_margin,
            "layer" => &mut self.layer,
            "layer_ground" => &mut self.layer_ground,
            "hfss_inductance" => &mut self.hfss_inductance,
            "hfss_capacitance" => &mut self.hfss_capacitance,
            "pos_x" => &mut self.pos_x,
            "pos_y" => &mut self.pos_y,
            "orientation" => &mut self.orientation,
            "taper_inset" => &mut self.taper_inset,
            _ => return None,
        })
    }

    /// Gets the raw value of an option by name.
    pub fn get(&self, key: &str) -> Option<&ArcStr> {
        Some(match key {
            "pad_width" => &self.pad_width,
            "pad_length" => &self.pad_length,
            "pad_separation" => &self.pad_separation,
            "jj_length" => &self.jj_length,
            "inductor_width" => &self.inductor_width,
            "taper_width" => &self.taper_width,
            "cpw_width" => &self.cpw_width,
            "cpw_gap" => &self.cpw_gap,
            "cpw_length" => &self.cpw_length,
            "ground_margin" => &self.ground_margin,
            "layer" => &self.layer,
            "layer_ground" => &self.layer_ground,
            "hfss_inductance" => &self.hfss_inductance,
            "hfss_capacitance" => &self.hfss_capacitance,
            "pos_x" => &self.pos_x,
            "pos_y" => &self.pos_y,
            "orientation" => &self.orientation,
            "taper_inset" => &self.taper_inset,
            _ => return None,
        })
    }

    /// Overrides a single option by name.
    ///
    /// Values are not validated until resolution, but unknown keys are rejected here.
    ///
    /// # Example
    ///
    /// ```
    /// # use transmon::options::TransmonOptions;
    /// let mut opts = TransmonOptions::default();
    /// opts.set("ground_margin", "150um").unwrap();
    /// assert_eq!(opts.ground_margin, "150um");
    /// assert!(opts.set("pad_colour", "red").is_err());
    /// ```
    pub fn set(&mut self, key: &str, value: impl Into<ArcStr>) -> Result<&mut Self> {
        let value = value.into();
        let Some(field) = self.field_mut(key) else {
            return Err(Error::invalid_dimension(key, value, "unrecognized option"));
        };
        *field = value;
        Ok(self)
    }

    /// Parses options from a TOML table, filling in defaults for missing keys.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Reads options from a TOML file, filling in defaults for missing keys.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("reading transmon options from {:?}", path);
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    String(String),
    Integer(i64),
    Float(f64),
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<ArcStr, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawValue::deserialize(deserializer)? {
        RawValue::String(s) => s.into(),
        RawValue::Integer(i) => arcstr::format!("{i}"),
        RawValue::Float(f) => arcstr::format!("{f}"),
    })
}

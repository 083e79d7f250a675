//! Error types and error handling utilities.

use arcstr::ArcStr;

/// A result type returning generator errors.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The error type for transmon generation.
///
/// No partial geometry is registered when any of these are returned.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An option was missing, unparseable, or carried an unrecognized unit.
    #[error("invalid dimension `{param}` = {value:?}: {reason}")]
    InvalidDimension {
        /// The option name.
        param: ArcStr,
        /// The raw option value.
        value: ArcStr,
        /// What was wrong with it.
        reason: ArcStr,
    },
    /// The resolved dimensions produce a non-physical shape.
    #[error("degenerate geometry: `{quantity}` = {value}: {reason}")]
    DegenerateGeometry {
        /// The parameter or derived quantity that violated its constraint.
        quantity: ArcStr,
        /// Its value, in micrometers unless stated otherwise.
        value: f64,
        /// The violated constraint.
        reason: ArcStr,
    },
    /// The design database rejected a registration.
    #[error("error registering geometry: {0}")]
    Database(#[from] layir::Error),
    /// An I/O error while reading an options file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// An options file was not valid TOML, or did not match the option schema.
    #[error("error parsing options: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    pub(crate) fn invalid_dimension(
        param: impl Into<ArcStr>,
        value: impl Into<ArcStr>,
        reason: impl Into<ArcStr>,
    ) -> Self {
        Self::InvalidDimension {
            param: param.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn degenerate(
        quantity: impl Into<ArcStr>,
        value: f64,
        reason: impl Into<ArcStr>,
    ) -> Self {
        Self::DegenerateGeometry {
            quantity: quantity.into(),
            value,
            reason: reason.into(),
        }
    }
}

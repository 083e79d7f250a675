//! Parametric layout generator for a differential transmon qubit.
//!
//! A [`DifferentialTransmon`] turns a set of [`TransmonOptions`] into two
//! capacitor pads joined by tapered leads to a junction, a CPW feedline off
//! each pad, and the ground-plane cutouts around them. The result is a
//! [`TransmonLayout`] that can be registered with any [`layir::DesignDatabase`].
//!
//! # Examples
//!
//! ```
//! use layir::Library;
//! use transmon::{DifferentialTransmon, TransmonOptions};
//!
//! let mut opts = TransmonOptions::default();
//! opts.set("ground_margin", "150um").unwrap();
//!
//! let mut lib = Library::new();
//! let id = DifferentialTransmon::new("Q1", opts).add_to(&mut lib).unwrap();
//! let port = lib.cell(id).port("Vpos");
//! assert_eq!(port.width(), 12.5);
//! ```

pub mod assemble;
pub mod builder;
pub mod error;
pub mod options;
pub mod params;
pub mod placement;
pub mod units;

#[cfg(test)]
mod tests;

use arcstr::ArcStr;
use layir::{Cell, CellId, Library};

pub use crate::assemble::TransmonLayout;
use crate::error::Result;
pub use crate::options::TransmonOptions;
use crate::params::DimensionSet;
use crate::placement::Placement;

/// A named differential transmon component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifferentialTransmon {
    name: ArcStr,
    options: TransmonOptions,
}

impl DifferentialTransmon {
    pub fn new(name: impl Into<ArcStr>, options: TransmonOptions) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }

    #[inline]
    pub fn name(&self) -> &ArcStr {
        &self.name
    }

    #[inline]
    pub fn options(&self) -> &TransmonOptions {
        &self.options
    }

    /// Computes the full layout without registering anything.
    #[tracing::instrument(skip(self), fields(name = %self.name))]
    pub fn generate(&self) -> Result<TransmonLayout> {
        let dims = DimensionSet::resolve(&self.options)?;
        let base = builder::build(&dims)?;
        let placed = Placement::from_dims(&dims).place(base);
        Ok(assemble::assemble(&dims, placed))
    }

    /// Generates the layout and adds it to `lib` as a new cell named after this component.
    ///
    /// Nothing is added to `lib` if any step fails.
    pub fn add_to(&self, lib: &mut Library) -> Result<CellId> {
        let layout = self.generate()?;
        let mut cell = Cell::new(self.name.clone());
        layout.emit(&mut cell).inspect_err(|err| {
            tracing::error!("failed to register transmon `{}`: {}", self.name, err);
        })?;
        let id = lib.add_cell(cell)?;
        tracing::info!("added transmon `{}` to library", self.name);
        Ok(id)
    }
}

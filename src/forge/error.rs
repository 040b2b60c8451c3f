//! Error types for graphene sheet generation.
//!
//! Errors are raised while validating the configuration and loading force field
//! parameters, before any bead is placed or any file is opened.

use crate::model::lattice::DimensionError;
use thiserror::Error;

/// Errors that can occur while building a graphene sheet.
#[derive(Debug, Error)]
pub enum Error {
    /// A lattice count (triangles, rows or layers) was below one.
    #[error("invalid dimension: {name} must be at least 1 (got {value})")]
    InvalidDimension {
        /// Name of the offending count.
        name: &'static str,
        /// The rejected value.
        value: usize,
    },

    /// The lattice has more beads than can be indexed.
    #[error(
        "lattice too large: {triangles_per_row} x {rows_per_layer} x {layer_count} overflows the bead count"
    )]
    LatticeTooLarge {
        triangles_per_row: usize,
        rows_per_layer: usize,
        layer_count: usize,
    },

    /// A physical parameter or name was out of range.
    #[error("invalid parameter '{name}': {detail}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the problem.
        detail: String,
    },

    /// Failed to parse force field parameters TOML.
    #[error("failed to parse force field parameters: {0}")]
    ParameterParse(#[from] toml::de::Error),
}

impl From<DimensionError> for Error {
    fn from(e: DimensionError) -> Self {
        match e {
            DimensionError::Zero { name, value } => Error::InvalidDimension { name, value },
            DimensionError::TooLarge {
                triangles_per_row,
                rows_per_layer,
                layer_count,
            } => Error::LatticeTooLarge {
                triangles_per_row,
                rows_per_layer,
                layer_count,
            },
        }
    }
}

impl Error {
    /// Creates an [`InvalidParameter`](Error::InvalidParameter) error.
    pub fn invalid_parameter(name: &'static str, detail: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            detail: detail.into(),
        }
    }
}

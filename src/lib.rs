//! A pure Rust builder for coarse-grained Martini graphene sheets.
//! It lays out stacked triangulated lattices of beads and enumerates their bonded topology
//! to produce simulation-ready GROMACS coordinate, topology and position restraint files.
//!
//! # Features
//!
//! - **Lattice indexing** — One index formula for every (layer, row, column) site,
//!   with bounds-checked neighbour lookup
//! - **Coordinates** — Bead positions for two interleaved rails per row and
//!   evenly stacked layers, plus the simulation box
//! - **Bonded topology** — Intra-row, inter-row and inter-layer bonds; triangle,
//!   straight, vertex and stacking angles; proper and improper dihedrals
//! - **Tunable parameters** — Force constants, functional forms, layer spacing and
//!   bead properties from an embedded TOML document, overridable at run time
//! - **GROMACS output** — Fixed-width `.gro`, `.itp` and `-posres.itp` writers
//!
//! # Quick Start
//!
//! The main entry point is the [`build_sheet`] function, which takes a [`SheetConfig`]
//! and produces a complete [`GrapheneSheet`]:
//!
//! ```
//! use graphene_forge::{build_sheet, BondKind, ForgeError, SheetConfig};
//!
//! // Two layers of three rows, four triangles per row
//! let config = SheetConfig {
//!     triangles_per_row: 4,
//!     rows_per_layer: 3,
//!     layer_count: 2,
//!     ..SheetConfig::default()
//! };
//!
//! let sheet = build_sheet(&config)?;
//!
//! // (2 * 4 + 1) beads per row, 3 rows, 2 layers
//! assert_eq!(sheet.bead_count(), 54);
//!
//! // Every bead is stacked on its counterpart in the layer below
//! assert_eq!(sheet.topology.bond_count(BondKind::InterLayer), 27);
//!
//! // One position restraint per bead
//! assert_eq!(sheet.restraints.len(), 54);
//!
//! // Title used for the coordinate file and default output prefix
//! assert_eq!(sheet.title(), "Graphene-w4-l3");
//! # Ok::<(), ForgeError>(())
//! ```
//!
//! Writing the three GROMACS files:
//!
//! ```no_run
//! use graphene_forge::io::{write_files, OutputSet};
//! use graphene_forge::{build_sheet, SheetConfig};
//!
//! let sheet = build_sheet(&SheetConfig::default())?;
//! write_files(&sheet, &OutputSet::from_prefix("Graphene-w5-l5"))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`] — GROMACS writers (`.gro`, `.itp`, `-posres.itp`)
//! - [`build_sheet`] — Main generation function
//! - [`SheetConfig`] — Lattice size, bond geometry, bead type and parameter override
//!
//! # Data Types
//!
//! ## Lattice
//!
//! - [`LatticeDimensions`] — Triangles per row, rows per layer, layer count
//! - [`Site`] — A (layer, row, column) lattice position
//! - [`ColumnKind`] — Base (lower rail) or apex (upper rail) column
//!
//! ## Output Structures
//!
//! - [`GrapheneSheet`] — Beads, box, topology and restraints ready for writing
//! - [`Bead`] — Bead index, site and Cartesian position (nm)
//! - [`Topology`] — All bonded records
//! - [`BondTerm`] / [`BondKind`] — Harmonic bonds and their category
//! - [`AngleTerm`] / [`AngleKind`] — Angle records and their category
//! - [`TorsionTerm`] — Proper and improper dihedral records
//! - [`PositionRestraint`] — Per-bead harmonic restraint
//!
//! ## Parameters
//!
//! - [`ForceFieldParams`] — Root of the TOML parameter document

mod forge;
mod model;

pub mod io;

pub use model::bead::Bead;
pub use model::lattice::{ColumnKind, DimensionError, LatticeDimensions, Site};
pub use model::sheet::GrapheneSheet;

pub use model::topology::{
    AngleKind, AngleTerm, BondKind, BondTerm, PositionRestraint, Topology, TorsionTerm,
};

pub use forge::{
    AngleParams, BeadParams, BondParams, DihedralParams, ForceFieldParams, GeometryParams,
    ImproperParams, RestraintParams, SheetConfig, build_sheet,
};

pub use forge::Error as ForgeError;

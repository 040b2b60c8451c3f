//! Core data structures for coarse-grained graphene sheets.
//!
//! - [`lattice`] – Lattice dimensions, sites, and the bead index formula.
//! - [`bead`] – A bead placed at a lattice site.
//! - [`topology`] – Bonded interaction records and position restraints.
//! - [`sheet`] – The complete generated sheet handed to the writers.
//!
//! Every record refers to beads by their 1-based index as computed by
//! [`LatticeDimensions::index`](lattice::LatticeDimensions::index).

pub mod bead;
pub mod lattice;
pub mod sheet;
pub mod topology;

use super::bead::Bead;
use super::lattice::LatticeDimensions;
use super::topology::{PositionRestraint, Topology};

/// A fully generated graphene sheet: beads, bonded topology and restraints.
#[derive(Debug, Clone)]
pub struct GrapheneSheet {
    pub dimensions: LatticeDimensions,
    pub beads: Vec<Bead>,
    /// Rectangular box edge lengths (nm), including the non-periodic margin.
    pub box_size: [f64; 3],
    /// Molecule and residue name.
    pub molecule_name: String,
    pub bead_type: String,
    pub bead_mass: f64,
    pub bead_charge: f64,
    pub nrexcl: u32,
    pub bond_length: f64,
    pub topology: Topology,
    pub restraints: Vec<PositionRestraint>,
}

impl GrapheneSheet {
    #[inline]
    pub fn bead_count(&self) -> usize {
        self.beads.len()
    }

    #[inline]
    pub fn is_multilayer(&self) -> bool {
        self.dimensions.layer_count() > 1
    }

    /// In-plane extent of the lattice (width, length) in nm, without margin.
    pub fn size(&self) -> (f64, f64) {
        let width = self.dimensions.triangles_per_row() as f64 * self.bond_length;
        let length =
            3f64.sqrt() * self.bond_length * self.dimensions.rows_per_layer() as f64;
        (width, length)
    }

    /// Conventional title: `Graphene-w{triangles}-l{rows}`.
    pub fn title(&self) -> String {
        format!(
            "Graphene-w{}-l{}",
            self.dimensions.triangles_per_row(),
            self.dimensions.rows_per_layer()
        )
    }
}

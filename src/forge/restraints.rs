use super::params::RestraintParams;
use crate::model::lattice::LatticeDimensions;
use crate::model::topology::PositionRestraint;

/// One harmonic position restraint per bead, in index order.
pub fn generate_restraints(
    dims: &LatticeDimensions,
    params: &RestraintParams,
) -> Vec<PositionRestraint> {
    (1..=dims.total_atoms())
        .map(|atom| PositionRestraint {
            atom,
            funct: params.funct,
            k_force: params.k,
        })
        .collect()
}

use super::params::ForceFieldParams;
use crate::model::lattice::{ColumnKind, LatticeDimensions, Site};
use crate::model::topology::{BondKind, BondTerm};

pub fn generate_bonds(
    dims: &LatticeDimensions,
    bond_length: f64,
    params: &ForceFieldParams,
) -> Vec<BondTerm> {
    let mut bonds = Vec::new();
    intra_row(dims, bond_length, params, &mut bonds);
    inter_row(dims, bond_length, params, &mut bonds);
    inter_layer(dims, params, &mut bonds);
    bonds
}

fn intra_row(
    dims: &LatticeDimensions,
    bond_length: f64,
    params: &ForceFieldParams,
    out: &mut Vec<BondTerm>,
) {
    let bond = |i, j| BondTerm {
        i,
        j,
        kind: BondKind::IntraRow,
        funct: params.bonds.funct,
        r0: bond_length,
        k_force: params.bonds.intra_row_k,
    };
    let last = dims.atoms_per_row();

    for (layer, row) in dims.rows() {
        for column in 1..=last - 2 {
            let site = Site::new(layer, row, column);
            let m = dims.index(site);
            for step in [1, 2] {
                if let Some(n) = dims.index_at(site, 0, 0, step) {
                    out.push(bond(m, n));
                }
            }
        }

        // Closes the row: the last two beads are not reached by the i -> i+1 step above.
        let tail = Site::new(layer, row, last - 1);
        if let Some(n) = dims.index_at(tail, 0, 0, 1) {
            out.push(bond(dims.index(tail), n));
        }
    }
}

fn inter_row(
    dims: &LatticeDimensions,
    bond_length: f64,
    params: &ForceFieldParams,
    out: &mut Vec<BondTerm>,
) {
    for (layer, row) in dims.inner_rows() {
        for column in 1..dims.atoms_per_row() {
            let site = Site::new(layer, row, column);
            if site.kind() != ColumnKind::Apex {
                continue;
            }
            let m = dims.index(site);
            for offset in [-1, 1] {
                if let Some(n) = dims.index_at(site, 0, 1, offset) {
                    out.push(BondTerm {
                        i: m,
                        j: n,
                        kind: BondKind::InterRow,
                        funct: params.bonds.funct,
                        r0: bond_length,
                        k_force: params.bonds.inter_row_k,
                    });
                }
            }
        }
    }
}

fn inter_layer(dims: &LatticeDimensions, params: &ForceFieldParams, out: &mut Vec<BondTerm>) {
    for site in dims.sites() {
        if let Some(n) = dims.index_at(site, 1, 0, 0) {
            out.push(BondTerm {
                i: dims.index(site),
                j: n,
                kind: BondKind::InterLayer,
                funct: params.bonds.funct,
                r0: params.geometry.layer_spacing,
                k_force: params.bonds.inter_layer_k,
            });
        }
    }
}

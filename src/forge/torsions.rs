use super::params::ForceFieldParams;
use crate::model::lattice::{ColumnKind, LatticeDimensions, Site};
use crate::model::topology::TorsionTerm;

fn torsion([i, j, k, l]: [usize; 4], funct: u8, phi0: f64, k_force: f64) -> TorsionTerm {
    TorsionTerm {
        i,
        j,
        k,
        l,
        funct,
        phi0,
        k_force,
    }
}

/// Sites of every row that has a next row, with columns in `columns`.
fn bridged_sites(
    dims: &LatticeDimensions,
    columns: std::ops::RangeInclusive<usize>,
) -> impl Iterator<Item = Site> + '_ {
    dims.inner_rows().flat_map(move |(layer, row)| {
        columns
            .clone()
            .map(move |column| Site::new(layer, row, column))
    })
}

/// Proper dihedrals keeping neighbouring triangles coplanar.
pub fn generate_dihedrals(dims: &LatticeDimensions, params: &ForceFieldParams) -> Vec<TorsionTerm> {
    let terms = &params.dihedrals;
    let make = |atoms| torsion(atoms, terms.funct, terms.phi0, terms.k);
    let mut out = Vec::new();

    for site in bridged_sites(dims, 2..=dims.atoms_per_row() - 2) {
        let at = |rows, columns| dims.index_at(site, 0, rows, columns);
        let chain_end = at(0, 4);

        match site.kind() {
            ColumnKind::Apex => {
                if let (Some(m), Some(n), Some(q), Some(r)) = (at(0, 0), at(0, 1), at(1, 1), at(1, 3))
                {
                    out.push(make([n, m, q, r]));
                }
                if let (Some(m), Some(n), Some(o), Some(p)) = (at(0, 0), at(0, 1), at(0, 3), chain_end)
                {
                    out.push(make([m, n, o, p]));
                }
            }
            ColumnKind::Base => {
                // Gated on the in-row chain end even though it is not one of the four beads.
                if chain_end.is_none() {
                    continue;
                }
                if let (Some(n), Some(s), Some(q), Some(r)) = (at(0, 1), at(1, 0), at(1, 1), at(1, 3))
                {
                    out.push(make([n, s, q, r]));
                }
            }
        }
    }

    out
}

/// Improper dihedrals pinning each apex triangle to its neighbours.
pub fn generate_impropers(dims: &LatticeDimensions, params: &ForceFieldParams) -> Vec<TorsionTerm> {
    let terms = &params.impropers;
    let make = |atoms| torsion(atoms, terms.funct, terms.phi0, terms.k);
    let mut out = Vec::new();
    let apex = |site: &Site| site.kind() == ColumnKind::Apex;

    for site in bridged_sites(dims, 2..=dims.atoms_per_row() - 2).filter(apex) {
        let at = |rows, columns| dims.index_at(site, 0, rows, columns);
        if let (Some(m), Some(n), Some(o), Some(above)) = (at(0, 0), at(0, 1), at(0, 2), at(1, 1)) {
            out.push(make([n, m, o, above]));
        }
    }

    for site in bridged_sites(dims, 2..=dims.atoms_per_row() - 1).filter(apex) {
        let at = |rows, columns| dims.index_at(site, 0, rows, columns);
        if let (Some(m), Some(left), Some(right), Some(above)) =
            (at(0, 0), at(1, -1), at(1, 1), at(1, 0))
        {
            out.push(make([m, left, right, above]));
        }
    }

    out
}

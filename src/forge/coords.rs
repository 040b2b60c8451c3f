use super::params::GeometryParams;
use crate::model::bead::Bead;
use crate::model::lattice::{ColumnKind, LatticeDimensions, Site};

/// Distance between two consecutive rows of triangles.
#[inline]
pub fn row_spacing(bond_length: f64) -> f64 {
    3f64.sqrt() * bond_length
}

pub fn position(site: Site, bond_length: f64, geometry: &GeometryParams) -> [f64; 3] {
    let spacing = row_spacing(bond_length);
    let x = (site.column - 1) as f64 * (bond_length / 2.0);
    let y = match site.kind() {
        ColumnKind::Base => site.row as f64 * spacing,
        ColumnKind::Apex => spacing / 2.0 + site.row as f64 * spacing,
    };
    let z = site.layer as f64 * geometry.layer_spacing;
    [x, y, z]
}

pub fn place_beads(
    dims: &LatticeDimensions,
    bond_length: f64,
    geometry: &GeometryParams,
) -> Vec<Bead> {
    dims.sites()
        .map(|site| Bead::new(dims.index(site), site, position(site, bond_length, geometry)))
        .collect()
}

/// Box edge lengths; x and z carry the non-periodic margin.
pub fn box_size(
    dims: &LatticeDimensions,
    bond_length: f64,
    geometry: &GeometryParams,
) -> [f64; 3] {
    [
        dims.triangles_per_row() as f64 * bond_length + geometry.box_margin,
        row_spacing(bond_length) * dims.rows_per_layer() as f64,
        geometry.layer_spacing * dims.layer_count() as f64 + geometry.box_margin,
    ]
}

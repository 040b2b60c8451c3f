mod angles;
mod bonds;
mod config;
mod coords;
mod error;
mod params;
mod restraints;
mod torsions;

pub use config::SheetConfig;
pub use error::Error;
pub use params::{
    AngleParams, BeadParams, BondParams, DihedralParams, ForceFieldParams, GeometryParams,
    ImproperParams, RestraintParams,
};

use crate::model::lattice::LatticeDimensions;
use crate::model::sheet::GrapheneSheet;
use crate::model::topology::Topology;

/// Bond angle the coordinate generator assumes.
const EQUILATERAL_ANGLE: f64 = 60.0;

pub fn build_sheet(config: &SheetConfig) -> Result<GrapheneSheet, Error> {
    config.validate()?;

    let dims = LatticeDimensions::new(
        config.triangles_per_row,
        config.rows_per_layer,
        config.layer_count,
    )?;

    let ff_params = params::load_parameters(config.params.as_deref())?;

    if (config.bond_angle - EQUILATERAL_ANGLE).abs() > f64::EPSILON {
        log::warn!(
            "bond angle {} deg is written to the topology, but coordinates assume {} deg triangles",
            config.bond_angle,
            EQUILATERAL_ANGLE
        );
    }

    let beads = coords::place_beads(&dims, config.bond_length, &ff_params.geometry);
    let box_size = coords::box_size(&dims, config.bond_length, &ff_params.geometry);

    let topology = Topology {
        bonds: bonds::generate_bonds(&dims, config.bond_length, &ff_params),
        angles: angles::generate_angles(&dims, config.bond_angle, &ff_params),
        dihedrals: torsions::generate_dihedrals(&dims, &ff_params),
        impropers: torsions::generate_impropers(&dims, &ff_params),
    };
    let restraints = restraints::generate_restraints(&dims, &ff_params.restraints);

    log::debug!(
        "built {} beads: {} bonds, {} angles, {} dihedrals, {} impropers",
        beads.len(),
        topology.bonds.len(),
        topology.angles.len(),
        topology.dihedrals.len(),
        topology.impropers.len()
    );

    Ok(GrapheneSheet {
        dimensions: dims,
        beads,
        box_size,
        molecule_name: config.molecule_name.clone(),
        bead_type: config.bead_type.clone(),
        bead_mass: ff_params.bead.mass,
        bead_charge: ff_params.bead.charge,
        nrexcl: ff_params.bead.nrexcl,
        bond_length: config.bond_length,
        topology,
        restraints,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::topology::{AngleKind, BondKind};
    use std::collections::HashSet;

    fn sheet(nt: usize, nr: usize, nl: usize) -> GrapheneSheet {
        build_sheet(&SheetConfig {
            triangles_per_row: nt,
            rows_per_layer: nr,
            layer_count: nl,
            ..SheetConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn default_sheet_has_expected_counts() {
        let sheet = build_sheet(&SheetConfig::default()).unwrap();
        assert_eq!(sheet.bead_count(), 275);
        assert_eq!(sheet.restraints.len(), 275);
        assert!(sheet.is_multilayer());
        assert!((sheet.box_size[2] - 2.65).abs() < 1e-9);
        assert_eq!(sheet.title(), "Graphene-w5-l5");
    }

    #[test]
    fn single_layer_sheet_has_no_inter_layer_terms() {
        let sheet = sheet(5, 5, 1);
        assert_eq!(sheet.bead_count(), 55);
        assert_eq!(sheet.topology.bond_count(BondKind::InterLayer), 0);
        assert_eq!(sheet.topology.angle_count(AngleKind::InterLayer), 0);
        assert!(!sheet.is_multilayer());
    }

    #[test]
    fn single_triangle_sheet() {
        let sheet = sheet(1, 1, 1);
        assert_eq!(sheet.bead_count(), 3);
        assert_eq!(sheet.topology.bonds.len(), 3);
        assert_eq!(sheet.topology.angles.len(), 3);
        assert!(sheet.topology.dihedrals.is_empty());
        assert!(sheet.topology.impropers.is_empty());
        let (width, length) = sheet.size();
        assert!((width - 0.47).abs() < 1e-9);
        assert!((length - 3f64.sqrt() * 0.47).abs() < 1e-9);
    }

    #[test]
    fn all_references_are_valid_beads() {
        for (nt, nr, nl) in [(1, 1, 1), (3, 4, 2), (5, 5, 5), (2, 1, 3)] {
            let sheet = sheet(nt, nr, nl);
            let indices: HashSet<usize> = sheet.beads.iter().map(|b| b.index).collect();
            assert_eq!(indices.len(), sheet.bead_count());
            assert!(sheet.topology.referenced_indices().all(|i| indices.contains(&i)));
        }
    }

    #[test]
    fn rejects_zero_dimension_before_building() {
        let config = SheetConfig {
            rows_per_layer: 0,
            ..SheetConfig::default()
        };
        assert!(matches!(
            build_sheet(&config),
            Err(Error::InvalidDimension {
                name: "rows_per_layer",
                value: 0
            })
        ));
    }

    #[test]
    fn rejects_overflowing_lattice_before_building() {
        let config = SheetConfig {
            triangles_per_row: usize::MAX / 4,
            rows_per_layer: 5,
            layer_count: 1,
            ..SheetConfig::default()
        };
        let err = build_sheet(&config).unwrap_err();
        assert!(matches!(
            err,
            Error::LatticeTooLarge {
                rows_per_layer: 5,
                layer_count: 1,
                ..
            }
        ));
        assert!(err.to_string().starts_with("lattice too large"));
    }

    #[test]
    fn parameter_override_changes_layer_spacing() {
        let config = SheetConfig {
            layer_count: 2,
            params: Some("[geometry]\nlayer_spacing = 0.5\n".to_string()),
            ..SheetConfig::default()
        };
        let sheet = build_sheet(&config).unwrap();
        let top = sheet.beads.last().unwrap();
        assert!((top.position[2] - 0.5).abs() < 1e-9);
        assert!(
            sheet
                .topology
                .bonds
                .iter()
                .filter(|b| b.kind == BondKind::InterLayer)
                .all(|b| b.r0 == 0.5)
        );
    }

    #[test]
    fn malformed_parameter_override_is_reported() {
        let config = SheetConfig {
            params: Some("[bonds\n".to_string()),
            ..SheetConfig::default()
        };
        assert!(matches!(build_sheet(&config), Err(Error::ParameterParse(_))));
    }

    #[test]
    fn generation_is_deterministic() {
        let a = sheet(4, 3, 2);
        let b = sheet(4, 3, 2);
        assert_eq!(a.topology.bonds, b.topology.bonds);
        assert_eq!(a.topology.angles, b.topology.angles);
        assert_eq!(a.topology.dihedrals, b.topology.dihedrals);
        assert_eq!(a.restraints, b.restraints);
    }
}

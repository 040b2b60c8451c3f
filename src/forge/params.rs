use super::error::Error;
use serde::Deserialize;
use std::sync::OnceLock;

const DEFAULT_PARAMS_TOML: &str = include_str!("../../resources/default.params.toml");

static DEFAULT_PARAMS: OnceLock<ForceFieldParams> = OnceLock::new();

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForceFieldParams {
    #[serde(default)]
    pub geometry: GeometryParams,
    #[serde(default)]
    pub bead: BeadParams,
    #[serde(default)]
    pub bonds: BondParams,
    #[serde(default)]
    pub angles: AngleParams,
    #[serde(default)]
    pub dihedrals: DihedralParams,
    #[serde(default)]
    pub impropers: ImproperParams,
    #[serde(default)]
    pub restraints: RestraintParams,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeometryParams {
    #[serde(default = "default_layer_spacing")]
    pub layer_spacing: f64,
    #[serde(default = "default_box_margin")]
    pub box_margin: f64,
}

fn default_layer_spacing() -> f64 {
    0.33
}
fn default_box_margin() -> f64 {
    1.0
}

impl Default for GeometryParams {
    fn default() -> Self {
        Self {
            layer_spacing: default_layer_spacing(),
            box_margin: default_box_margin(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BeadParams {
    #[serde(default = "default_bead_mass")]
    pub mass: f64,
    #[serde(default)]
    pub charge: f64,
    #[serde(default = "default_nrexcl")]
    pub nrexcl: u32,
}

fn default_bead_mass() -> f64 {
    48.0
}
fn default_nrexcl() -> u32 {
    1
}

impl Default for BeadParams {
    fn default() -> Self {
        Self {
            mass: default_bead_mass(),
            charge: 0.0,
            nrexcl: default_nrexcl(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BondParams {
    #[serde(default = "default_bond_funct")]
    pub funct: u8,
    #[serde(default = "default_intra_row_k")]
    pub intra_row_k: f64,
    #[serde(default = "default_stiff_bond_k")]
    pub inter_row_k: f64,
    #[serde(default = "default_stiff_bond_k")]
    pub inter_layer_k: f64,
}

fn default_bond_funct() -> u8 {
    1
}
fn default_intra_row_k() -> f64 {
    10000.0
}
fn default_stiff_bond_k() -> f64 {
    25000.0
}

impl Default for BondParams {
    fn default() -> Self {
        Self {
            funct: default_bond_funct(),
            intra_row_k: default_intra_row_k(),
            inter_row_k: default_stiff_bond_k(),
            inter_layer_k: default_stiff_bond_k(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AngleParams {
    #[serde(default = "default_angle_funct")]
    pub funct: u8,
    #[serde(default = "default_bonded_k")]
    pub k: f64,
    #[serde(default = "default_straight_angle")]
    pub straight: f64,
    #[serde(default = "default_inter_layer_angle")]
    pub inter_layer: f64,
}

fn default_angle_funct() -> u8 {
    2
}
fn default_bonded_k() -> f64 {
    500.0
}
fn default_straight_angle() -> f64 {
    180.0
}
fn default_inter_layer_angle() -> f64 {
    90.0
}

impl Default for AngleParams {
    fn default() -> Self {
        Self {
            funct: default_angle_funct(),
            k: default_bonded_k(),
            straight: default_straight_angle(),
            inter_layer: default_inter_layer_angle(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DihedralParams {
    #[serde(default = "default_dihedral_funct")]
    pub funct: u8,
    #[serde(default = "default_torsion_phi0")]
    pub phi0: f64,
    #[serde(default = "default_bonded_k")]
    pub k: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImproperParams {
    #[serde(default = "default_improper_funct")]
    pub funct: u8,
    #[serde(default = "default_torsion_phi0")]
    pub phi0: f64,
    #[serde(default = "default_bonded_k")]
    pub k: f64,
}

fn default_dihedral_funct() -> u8 {
    9
}
fn default_improper_funct() -> u8 {
    2
}
fn default_torsion_phi0() -> f64 {
    180.0
}

impl Default for DihedralParams {
    fn default() -> Self {
        Self {
            funct: default_dihedral_funct(),
            phi0: default_torsion_phi0(),
            k: default_bonded_k(),
        }
    }
}

impl Default for ImproperParams {
    fn default() -> Self {
        Self {
            funct: default_improper_funct(),
            phi0: default_torsion_phi0(),
            k: default_bonded_k(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RestraintParams {
    #[serde(default = "default_restraint_funct")]
    pub funct: u8,
    #[serde(default = "default_restraint_k")]
    pub k: [f64; 3],
}

fn default_restraint_funct() -> u8 {
    1
}
fn default_restraint_k() -> [f64; 3] {
    [1000.0; 3]
}

impl Default for RestraintParams {
    fn default() -> Self {
        Self {
            funct: default_restraint_funct(),
            k: default_restraint_k(),
        }
    }
}

pub fn load_parameters(custom_toml: Option<&str>) -> Result<ForceFieldParams, Error> {
    match custom_toml {
        Some(toml) => {
            let params: ForceFieldParams = toml::from_str(toml)?;
            Ok(params)
        }
        None => Ok(get_default_parameters().clone()),
    }
}

pub fn get_default_parameters() -> &'static ForceFieldParams {
    DEFAULT_PARAMS.get_or_init(|| {
        toml::from_str(DEFAULT_PARAMS_TOML)
            .expect("Failed to parse embedded default parameters. This is a library bug.")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_defaults_match_builtin_defaults() {
        let params = get_default_parameters();
        assert_eq!(params.geometry.layer_spacing, 0.33);
        assert_eq!(params.geometry.box_margin, 1.0);
        assert_eq!(params.bead.mass, 48.0);
        assert_eq!(params.bead.nrexcl, 1);
        assert_eq!(params.bonds.intra_row_k, 10000.0);
        assert_eq!(params.bonds.inter_row_k, 25000.0);
        assert_eq!(params.bonds.inter_layer_k, 25000.0);
        assert_eq!(params.angles.k, 500.0);
        assert_eq!(params.dihedrals.funct, 9);
        assert_eq!(params.impropers.funct, 2);
        assert_eq!(params.restraints.k, [1000.0, 1000.0, 1000.0]);
    }

    #[test]
    fn custom_parameters_fill_missing_sections() {
        let custom = r#"
            [bonds]
            intra_row_k = 12000.0

            [geometry]
            layer_spacing = 0.34

            [impropers]
            k = 750.0
        "#;
        let params = load_parameters(Some(custom)).unwrap();
        assert_eq!(params.bonds.intra_row_k, 12000.0);
        assert_eq!(params.bonds.inter_row_k, 25000.0);
        assert_eq!(params.bonds.funct, 1);
        assert_eq!(params.geometry.layer_spacing, 0.34);
        assert_eq!(params.geometry.box_margin, 1.0);
        assert_eq!(params.dihedrals.funct, 9);
        assert_eq!(params.impropers.funct, 2);
        assert_eq!(params.impropers.k, 750.0);
        assert_eq!(params.restraints.k, [1000.0; 3]);
    }

    #[test]
    fn empty_document_yields_defaults() {
        let params = load_parameters(Some("")).unwrap();
        assert_eq!(params.angles.straight, 180.0);
        assert_eq!(params.angles.inter_layer, 90.0);
        assert_eq!(params.impropers.phi0, 180.0);
    }

    #[test]
    fn errors_on_invalid_custom_toml() {
        let invalid = "not valid [[[toml";
        let result = load_parameters(Some(invalid));
        assert!(matches!(result, Err(Error::ParameterParse(_))));
    }
}

use super::error::Error;

/// Immutable description of the sheet to build.
#[derive(Debug, Clone)]
pub struct SheetConfig {
    pub triangles_per_row: usize,
    pub rows_per_layer: usize,
    pub layer_count: usize,
    /// Bead-to-bead distance within a layer (nm).
    pub bond_length: f64,
    /// Interior angle of a lattice triangle (degrees).
    pub bond_angle: f64,
    /// Martini bead type written to the `[ atoms ]` section.
    pub bead_type: String,
    /// Molecule and residue name.
    pub molecule_name: String,
    /// Force field parameter override (TOML text); embedded defaults when `None`.
    pub params: Option<String>,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            triangles_per_row: 5,
            rows_per_layer: 5,
            layer_count: 5,
            bond_length: 0.47,
            bond_angle: 60.0,
            bead_type: "CNP".to_string(),
            molecule_name: "GRA".to_string(),
            params: None,
        }
    }
}

impl SheetConfig {
    /// Checks the physical parameters and names.
    ///
    /// Lattice counts are checked separately when the dimensions are built.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.bond_length.is_finite() || self.bond_length <= 0.0 {
            return Err(Error::invalid_parameter(
                "bond_length",
                format!("must be a positive length (got {})", self.bond_length),
            ));
        }
        // Vertex angles are twice the triangle angle and must stay <= 180.
        if !self.bond_angle.is_finite() || self.bond_angle <= 0.0 || self.bond_angle > 90.0 {
            return Err(Error::invalid_parameter(
                "bond_angle",
                format!("must lie in (0, 90] degrees (got {})", self.bond_angle),
            ));
        }
        check_name("bead_type", &self.bead_type)?;
        check_name("molecule_name", &self.molecule_name)?;
        Ok(())
    }
}

fn check_name(name: &'static str, value: &str) -> Result<(), Error> {
    if value.is_empty() {
        return Err(Error::invalid_parameter(name, "must not be empty"));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(Error::invalid_parameter(
            name,
            format!("must not contain whitespace (got '{value}')"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SheetConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bead_type, "CNP");
        assert_eq!(config.bond_length, 0.47);
    }

    #[test]
    fn rejects_non_positive_bond_length() {
        for bad in [0.0, -0.47, f64::NAN, f64::INFINITY] {
            let config = SheetConfig {
                bond_length: bad,
                ..SheetConfig::default()
            };
            let err = config.validate().unwrap_err();
            assert!(matches!(err, Error::InvalidParameter { name: "bond_length", .. }));
        }
    }

    #[test]
    fn rejects_degenerate_bond_angle() {
        let config = SheetConfig {
            bond_angle: 120.0,
            ..SheetConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidParameter { name: "bond_angle", .. })
        ));
    }

    #[test]
    fn rejects_blank_names() {
        let config = SheetConfig {
            bead_type: "C NP".to_string(),
            ..SheetConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidParameter { name: "bead_type", .. })
        ));

        let config = SheetConfig {
            molecule_name: String::new(),
            ..SheetConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidParameter { name: "molecule_name", .. })
        ));
    }
}

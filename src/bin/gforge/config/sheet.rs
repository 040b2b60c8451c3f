use anyhow::Result;

use graphene_forge::SheetConfig;

use crate::cli::Cli;
use crate::io::read_params_file;

pub fn build_sheet_config(cli: &Cli) -> Result<SheetConfig> {
    let params = cli.io.params.as_deref().map(read_params_file).transpose()?;

    Ok(SheetConfig {
        triangles_per_row: cli.lattice.triangles,
        rows_per_layer: cli.lattice.rows,
        layer_count: cli.lattice.layers,
        bond_length: cli.geometry.bond_length,
        bond_angle: cli.geometry.bond_angle,
        bead_type: cli.geometry.bead_type.clone(),
        params,
        ..SheetConfig::default()
    })
}

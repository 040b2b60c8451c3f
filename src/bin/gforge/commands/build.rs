use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use graphene_forge::io::{Format, OutputSet, write_files};
use graphene_forge::{GrapheneSheet, SheetConfig, build_sheet};

use crate::cli::Cli;
use crate::config::build_sheet_config;
use crate::display::{
    Context as DisplayContext, Progress, print_lattice_info, print_term_distribution,
    print_topology,
};

const TOTAL_STEPS: u8 = 2;

pub fn run_build(cli: Cli, ctx: DisplayContext) -> Result<()> {
    let config = build_sheet_config(&cli)?;

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Building graphene lattice");
    let sheet = build_sheet(&config).context("Sheet generation failed")?;
    progress.complete_step("Building graphene lattice", &build_substeps(&sheet, &config));

    if ctx.interactive {
        print_lattice_info(&sheet);
        print_topology(&sheet);
        print_term_distribution(&sheet);
    }

    let outputs = resolve_outputs(&cli, &sheet);

    progress.step("Writing output");
    write_files(&sheet, &outputs).context("Failed to write output files")?;
    progress.complete_step("Writing output", &write_substeps(&outputs));

    progress.finish();

    print_summary(&sheet)
}

/// Output paths from `-o`, or from the sheet title in the working directory.
fn resolve_outputs(cli: &Cli, sheet: &GrapheneSheet) -> OutputSet {
    let prefix = cli
        .io
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(sheet.title()));
    OutputSet::from_prefix(prefix)
}

fn print_summary(sheet: &GrapheneSheet) -> Result<()> {
    let dims = &sheet.dimensions;
    let (width, length) = sheet.size();
    let mut stdout = io::stdout().lock();

    writeln!(
        stdout,
        "Generated Martini model for Graphene with {} rows of triangles with {} triangles per row ",
        dims.rows_per_layer(),
        dims.triangles_per_row()
    )?;
    writeln!(
        stdout,
        "Generated Martini model for Graphene with size {:.3} x {:.3} nm ",
        width, length
    )?;
    Ok(())
}

fn build_substeps(sheet: &GrapheneSheet, config: &SheetConfig) -> Vec<String> {
    let topology = &sheet.topology;
    let mut steps = vec![
        format!("Place {} beads", sheet.bead_count()),
        format!(
            "Enumerate {} bonds and {} angles",
            topology.bonds.len(),
            topology.angles.len()
        ),
        format!(
            "Enumerate {} dihedrals and {} impropers",
            topology.dihedrals.len(),
            topology.impropers.len()
        ),
    ];

    if sheet.is_multilayer() {
        steps.push(format!(
            "Stack {} layers with inter-layer terms",
            sheet.dimensions.layer_count()
        ));
    }

    if config.params.is_some() {
        steps.push("Apply custom parameters".to_string());
    }

    steps
}

fn write_substeps(outputs: &OutputSet) -> Vec<String> {
    outputs
        .entries()
        .iter()
        .map(|(format, path)| {
            let name = path.file_name().unwrap_or_default().to_string_lossy();
            match format {
                Format::Gro => format!("Write coordinates → {}", name),
                Format::Itp => format!("Write topology → {}", name),
                Format::PosresItp => format!("Write position restraints → {}", name),
            }
        })
        .collect()
}

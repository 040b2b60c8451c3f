use crate::io::error::Error;
use crate::model::sheet::GrapheneSheet;
use std::io::Write;

/// Atom numbers and atom-name digits wrap to stay inside their fixed-width fields.
const ATOM_NUMBER_WRAP: usize = 100_000;
const ATOM_NAME_WRAP: usize = 10_000;

pub fn write<W: Write>(mut writer: W, sheet: &GrapheneSheet) -> Result<(), Error> {
    writeln!(writer, "{}", sheet.title())?;
    writeln!(writer, "  {:3}", sheet.bead_count())?;

    for bead in &sheet.beads {
        let [x, y, z] = bead.position;
        writeln!(
            writer,
            "{:5}{:<5}{:>5}{:5}{:8.3}{:8.3}{:8.3}{:8.4}{:8.4}{:8.4}",
            1,
            fit_left(&sheet.molecule_name, 5),
            atom_name(bead.index),
            bead.index % ATOM_NUMBER_WRAP,
            x,
            y,
            z,
            0.0,
            0.0,
            0.0,
        )?;
    }

    let [bx, by, bz] = sheet.box_size;
    writeln!(writer, "{:10.5}{:10.5}{:10.5}", bx, by, bz)?;
    writer.flush()?;
    Ok(())
}

/// `G` followed by the zero-padded bead index, as used in both .gro and .itp.
pub(crate) fn atom_name(index: usize) -> String {
    format!("G{:03}", index % ATOM_NAME_WRAP)
}

fn fit_left(text: &str, width: usize) -> &str {
    match text.char_indices().nth(width) {
        Some((cut, _)) => &text[..cut],
        None => text,
    }
}

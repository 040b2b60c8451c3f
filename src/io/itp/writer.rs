use crate::io::error::Error;
use crate::io::gro::atom_name;
use crate::model::sheet::GrapheneSheet;
use crate::model::topology::{AngleKind, TorsionTerm};
use std::io::Write;

const BOND_COLUMNS: &str = "; i\t j\t  funct\t length\t force";
const ANGLE_COLUMNS: &str = "; i\t j\t k\t funct\t angle\t force";
const TORSION_COLUMNS: &str = "; i\t j\t k\t l     func\t q0     cq";

/// Writes the molecule topology.
///
/// `posres_name` is the file name placed in the `#include` guarded by `POSRES`.
pub fn write_topology<W: Write>(
    mut writer: W,
    sheet: &GrapheneSheet,
    posres_name: &str,
) -> Result<(), Error> {
    let dims = &sheet.dimensions;
    writeln!(writer, ";")?;
    writeln!(
        writer,
        "; Martini topology for graphene: {} rows of triangles, {} triangles per row, {} layer(s)",
        dims.rows_per_layer(),
        dims.triangles_per_row(),
        dims.layer_count()
    )?;
    writeln!(writer, ";")?;
    writeln!(writer, "; Generated by gforge v{}", env!("CARGO_PKG_VERSION"))?;
    writeln!(writer)?;

    writeln!(writer, "[ moleculetype ]")?;
    writeln!(writer, "; Name\t nrexcl")?;
    writeln!(writer, "{}  {}", sheet.molecule_name, sheet.nrexcl)?;

    writeln!(writer)?;
    writeln!(writer, "[ atoms ]")?;
    writeln!(
        writer,
        "; id\t type\t resnr\t residue\t atom\t cgnr\t charge\t mass"
    )?;
    for bead in &sheet.beads {
        writeln!(
            writer,
            "{:3}    {:>4}   1   {}    {}     {:3}     {}       {}",
            bead.index,
            sheet.bead_type,
            sheet.molecule_name,
            atom_name(bead.index),
            bead.index,
            sheet.bead_charge,
            sheet.bead_mass,
        )?;
    }

    writeln!(writer)?;
    writeln!(writer, "[ bonds ]")?;
    writeln!(writer, "{}", BOND_COLUMNS)?;
    for bond in &sheet.topology.bonds {
        writeln!(
            writer,
            "     {:3}     {:3}       {}   {:4.3}     {}",
            bond.i, bond.j, bond.funct, bond.r0, bond.k_force
        )?;
    }

    writeln!(writer)?;
    writeln!(writer, "[ angles ]")?;
    writeln!(writer, "{}", ANGLE_COLUMNS)?;
    for angle in &sheet.topology.angles {
        write!(
            writer,
            "     {:3}     {:3}     {:3}       {}     {:.1}",
            angle.i, angle.j, angle.k, angle.funct, angle.theta0
        )?;
        // In-plane triangle rows carry one extra space before the force.
        let gap = match angle.kind {
            AngleKind::Triangle => "     ",
            _ => "    ",
        };
        writeln!(writer, "{}{:.1}", gap, angle.k_force)?;
    }

    write_torsions(&mut writer, &sheet.topology.dihedrals)?;
    write_torsions(&mut writer, &sheet.topology.impropers)?;

    writeln!(writer)?;
    writeln!(writer, "; Include Position restraint file")?;
    writeln!(writer, "#ifdef POSRES")?;
    writeln!(writer, "#include \"{}\"", posres_name)?;
    writeln!(writer, "#endif")?;

    writer.flush()?;
    Ok(())
}

fn write_torsions<W: Write>(writer: &mut W, terms: &[TorsionTerm]) -> Result<(), Error> {
    writeln!(writer)?;
    writeln!(writer, "[ dihedrals ]")?;
    writeln!(writer, "{}", TORSION_COLUMNS)?;
    for t in terms {
        writeln!(
            writer,
            "     {:3}     {:3}     {:3}     {:3}       {}     {:.1}     {:.1}",
            t.i, t.j, t.k, t.l, t.funct, t.phi0, t.k_force
        )?;
    }
    Ok(())
}

pub fn write_position_restraints<W: Write>(
    mut writer: W,
    sheet: &GrapheneSheet,
) -> Result<(), Error> {
    writeln!(writer, "[ position_restraints ]")?;
    writeln!(writer, "; ai  funct  fcx    fcy    fcz")?;
    for r in &sheet.restraints {
        let [fx, fy, fz] = r.k_force;
        writeln!(
            writer,
            " {:3}    {}    {}   {}   {}",
            r.atom, r.funct, fx, fy, fz
        )?;
    }
    writer.flush()?;
    Ok(())
}

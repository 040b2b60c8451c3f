use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub mod error;

pub mod gro {
    mod writer;
    pub(crate) use writer::atom_name;
    pub use writer::write;
}

pub mod itp {
    mod writer;
    pub use writer::{write_position_restraints, write_topology};
}

pub use error::Error;

use crate::model::sheet::GrapheneSheet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Gro,
    Itp,
    PosresItp,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Gro => write!(f, "GRO"),
            Format::Itp => write!(f, "ITP"),
            Format::PosresItp => write!(f, "position restraint ITP"),
        }
    }
}

/// Destination paths of the three files written for one sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSet {
    pub gro: PathBuf,
    pub itp: PathBuf,
    pub posres: PathBuf,
}

impl OutputSet {
    /// Derives `{prefix}.gro`, `{prefix}.itp` and `{prefix}-posres.itp`.
    pub fn from_prefix(prefix: impl AsRef<Path>) -> Self {
        let prefix = prefix.as_ref();
        let with_suffix = |suffix: &str| {
            let mut name = prefix.as_os_str().to_os_string();
            name.push(suffix);
            PathBuf::from(name)
        };
        Self {
            gro: with_suffix(".gro"),
            itp: with_suffix(".itp"),
            posres: with_suffix("-posres.itp"),
        }
    }

    /// The three paths with their formats, in write order.
    pub fn entries(&self) -> [(Format, &Path); 3] {
        [
            (Format::Gro, self.gro.as_path()),
            (Format::Itp, self.itp.as_path()),
            (Format::PosresItp, self.posres.as_path()),
        ]
    }

    /// Name the topology uses to include the restraint file.
    pub fn posres_include(&self) -> String {
        self.posres
            .file_name()
            .unwrap_or(self.posres.as_os_str())
            .to_string_lossy()
            .into_owned()
    }
}

/// Writes one sheet in the given format to `path`.
pub fn write_format(
    sheet: &GrapheneSheet,
    format: Format,
    path: &Path,
    outputs: &OutputSet,
) -> Result<(), Error> {
    let file = File::create(path).map_err(|source| Error::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    let result = match format {
        Format::Gro => gro::write(&mut writer, sheet),
        Format::Itp => itp::write_topology(&mut writer, sheet, &outputs.posres_include()),
        Format::PosresItp => itp::write_position_restraints(&mut writer, sheet),
    };
    result
        .and_then(|()| writer.flush().map_err(Error::from))
        .map_err(|e| e.at_path(path))
}

/// Writes the coordinate, topology and restraint files of `sheet`.
pub fn write_files(sheet: &GrapheneSheet, outputs: &OutputSet) -> Result<(), Error> {
    for (format, path) in outputs.entries() {
        write_format(sheet, format, path, outputs)?;
    }
    Ok(())
}

use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    if let Some(hints) = HintCollector::collect(err) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

struct HintCollector {
    hints: Vec<String>,
    has_typed_hints: bool,
}

impl HintCollector {
    fn new() -> Self {
        Self {
            hints: Vec::new(),
            has_typed_hints: false,
        }
    }

    fn collect(err: &Error) -> Option<Vec<String>> {
        let mut collector = Self::new();

        collector.collect_io_hints(err);
        collector.collect_forge_hints(err);

        if !collector.has_typed_hints {
            collector.collect_fallback_hints(err);
        }

        if collector.hints.is_empty() {
            None
        } else {
            Some(collector.hints)
        }
    }

    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn mark_typed(&mut self) {
        self.has_typed_hints = true;
    }

    fn collect_io_hints(&mut self, err: &Error) {
        use graphene_forge::io::Error as IoError;

        let Some(io_err) = err.downcast_ref::<IoError>() else {
            return;
        };

        self.mark_typed();

        match io_err {
            IoError::Create { path, source } => {
                self.add(format!("Could not create '{}'", path.display()));
                if path.parent().is_some_and(|p| !p.as_os_str().is_empty() && !p.exists()) {
                    self.add("The output directory does not exist; create it first");
                }
                self.collect_std_io_hints(source);
            }

            IoError::Write { path, source } => {
                self.add(format!("Writing '{}' stopped part-way", path.display()));
                self.add("The file may be incomplete; rerun after fixing the cause");
                self.collect_std_io_hints(source);
            }

            IoError::Io { source } => {
                self.collect_std_io_hints(source);
            }
        }
    }

    fn collect_std_io_hints(&mut self, source: &std::io::Error) {
        use std::io::ErrorKind;

        match source.kind() {
            ErrorKind::NotFound => {
                self.add("File or directory not found");
                self.add("Check the -o/--output prefix and its directory");
            }

            ErrorKind::PermissionDenied => {
                self.add("Permission denied accessing the file");
                self.add("Check file permissions with `ls -la`");
            }

            ErrorKind::IsADirectory => {
                self.add("The output prefix names a directory");
                self.add("Pass a file prefix such as out/Graphene-w5-l5");
            }

            ErrorKind::StorageFull | ErrorKind::WriteZero => {
                self.add("Failed to write data (disk full?)");
                self.add("Check available disk space");
            }

            _ => {
                self.add("I/O operation failed");
                self.add("Check output path, permissions, and disk space");
            }
        }
    }

    fn collect_forge_hints(&mut self, err: &Error) {
        use graphene_forge::ForgeError;

        let Some(forge_err) = err.downcast_ref::<ForgeError>() else {
            return;
        };

        self.mark_typed();

        match forge_err {
            ForgeError::InvalidDimension { name, .. } => {
                let flag = match *name {
                    "triangles_per_row" => "-nt/--numtriangles",
                    "rows_per_layer" => "-nr/--numrows",
                    _ => "-nl/--numlayers",
                };
                self.add(format!("Pass {} with a value of at least 1", flag));
            }

            ForgeError::LatticeTooLarge { .. } => {
                self.add("The requested lattice has more beads than can be indexed");
                self.add("Reduce -nt/--numtriangles, -nr/--numrows or -nl/--numlayers");
            }

            ForgeError::InvalidParameter { name, .. } => match *name {
                "bond_length" => {
                    self.add("Use a positive bond length in nm, e.g. -bl 0.47");
                }
                "bond_angle" => {
                    self.add("Use a triangle angle in (0, 90] degrees, e.g. -ang 60");
                    self.add("Vertex angles are written as twice this value");
                }
                "bead_type" => {
                    self.add("Use a Martini bead type without spaces, e.g. -bead CNP");
                }
                _ => {
                    self.add(format!("Check the value given for '{}'", name));
                }
            },

            ForgeError::ParameterParse(_) => {
                self.add("Force field parameter file has invalid TOML syntax");
                self.add("Check for missing brackets, quotes, or mistyped numbers");
                self.add("Known sections: geometry, bead, bonds, angles, dihedrals, impropers, restraints");
            }
        }
    }

    fn collect_fallback_hints(&mut self, err: &Error) {
        let msg = error_chain_text(err);

        if msg.contains("parameter file") {
            self.add("Check the path given to --params");
            return;
        }

        if msg.contains("no such file") || msg.contains("not found") {
            self.add("Check that the file path is correct");
            self.add("Verify the file exists and is readable");
            return;
        }

        if msg.contains("permission denied") {
            self.add("Check file permissions with `ls -la`");
            self.add("Ensure you have the required access rights");
        }
    }
}

fn error_chain_text(err: &Error) -> String {
    err.chain()
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join("\n")
        .to_lowercase()
}

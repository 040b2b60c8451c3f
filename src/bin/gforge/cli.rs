use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Args, Parser};

/// Single-dash spellings accepted for compatibility, with their long forms.
const LEGACY_FLAGS: [(&str, &str); 6] = [
    ("-nt", "--numtriangles"),
    ("-nr", "--numrows"),
    ("-nl", "--numlayers"),
    ("-bl", "--bondlength"),
    ("-ang", "--bondangle"),
    ("-bead", "--beadtype"),
];

#[derive(Parser)]
#[command(
    name = "gforge",
    about = "Coarse-grained Martini graphene sheet builder",
    version,
    author,
    before_help = crate::display::banner_for_help()
)]
pub struct Cli {
    #[command(flatten)]
    pub lattice: LatticeOptions,

    #[command(flatten)]
    pub geometry: GeometryOptions,

    #[command(flatten)]
    pub io: IoOptions,
}

/// Lattice size.
#[derive(Args)]
#[command(next_help_heading = "Lattice")]
pub struct LatticeOptions {
    /// Triangles per row (sheet width)
    #[arg(long = "numtriangles", alias = "nt", value_name = "N", default_value_t = 5)]
    pub triangles: usize,

    /// Rows of triangles per layer (sheet length)
    #[arg(long = "numrows", alias = "nr", value_name = "N", default_value_t = 5)]
    pub rows: usize,

    /// Number of stacked layers
    #[arg(long = "numlayers", alias = "nl", value_name = "N", default_value_t = 5)]
    pub layers: usize,
}

/// Bead geometry and type.
#[derive(Args)]
#[command(next_help_heading = "Geometry")]
pub struct GeometryOptions {
    /// In-plane bead-to-bead distance (nm)
    #[arg(
        long = "bondlength",
        alias = "bl",
        value_name = "NM",
        default_value_t = 0.47,
        allow_hyphen_values = true
    )]
    pub bond_length: f64,

    /// Interior angle of the lattice triangles (degrees)
    #[arg(
        long = "bondangle",
        alias = "ang",
        value_name = "DEG",
        default_value_t = 60.0,
        allow_hyphen_values = true
    )]
    pub bond_angle: f64,

    /// Martini bead type
    #[arg(long = "beadtype", alias = "bead", value_name = "TYPE", default_value = "CNP")]
    pub bead_type: String,
}

/// Output options.
#[derive(Args)]
pub struct IoOptions {
    /// Output prefix for .gro, .itp and -posres.itp (default: Graphene-w{N}-l{N})
    #[arg(short, long, value_name = "PREFIX")]
    pub output: Option<PathBuf>,

    /// Custom force field parameters (TOML file)
    #[arg(long, value_name = "FILE")]
    pub params: Option<PathBuf>,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn parse() -> Cli {
    Cli::parse_from(normalize_legacy_flags(std::env::args_os()))
}

/// Rewrites `-nt 5` and `-nt=5` style flags to their long forms.
pub fn normalize_legacy_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;

    for arg in args {
        if passthrough {
            out.push(arg);
            continue;
        }
        let Some(text) = arg.to_str() else {
            out.push(arg);
            continue;
        };
        if text == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }

        let (flag, value) = match text.split_once('=') {
            Some((flag, value)) => (flag, Some(value)),
            None => (text, None),
        };
        let rewritten = LEGACY_FLAGS
            .iter()
            .find(|(legacy, _)| *legacy == flag)
            .map(|(_, long)| match value {
                Some(value) => OsString::from(format!("{long}={value}")),
                None => OsString::from(*long),
            });
        out.push(rewritten.unwrap_or(arg));
    }

    out
}

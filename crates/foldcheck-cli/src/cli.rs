use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Ayeh Bellek",
    version,
    about = "foldcheck - validation of predicted protein-complex structures against experimental references: rigid-body superposition, interaction-level agreement, and interface profiling.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare a predicted complex against its experimental reference (RMSD + interaction agreement).
    Compare(CompareArgs),
    /// Profile a single contact map: type counts, residue pairs, hot spots, distance statistics.
    Analyze(AnalyzeArgs),
    /// Download a structure from the RCSB PDB archive.
    Fetch(FetchArgs),
    /// Generate a PyMOL visualization script for a two-chain complex.
    Render(RenderArgs),
}

/// Arguments for the `compare` subcommand.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Path to the predicted (model) structure in PDB format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub predicted: PathBuf,

    /// Path to the experimental (reference) structure in PDB format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub experimental: PathBuf,

    /// Contact map (Arpeggio JSON) computed on the predicted structure.
    #[arg(long, required = true, value_name = "PATH")]
    pub predicted_contacts: PathBuf,

    /// Contact map (Arpeggio JSON) computed on the experimental structure.
    #[arg(long, required = true, value_name = "PATH")]
    pub experimental_contacts: PathBuf,

    /// Write the plain-text report to this path instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also write the full report as JSON to this path.
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Export the per-type agreement metrics as CSV.
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Minimum interaction count for a residue to qualify as a hot spot.
    #[arg(long, value_name = "INT", default_value_t = foldcheck::interactions::profile::DEFAULT_HOT_SPOT_MIN)]
    pub hot_spot_min: usize,
}

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Contact map (Arpeggio JSON) to profile.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Write the plain-text report to this path instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Export the residue-level interaction records as CSV.
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Minimum interaction count for a residue to qualify as a hot spot.
    #[arg(long, value_name = "INT", default_value_t = foldcheck::interactions::profile::DEFAULT_HOT_SPOT_MIN)]
    pub hot_spot_min: usize,
}

/// Arguments for the `fetch` subcommand.
#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Four-character PDB identifier (e.g. 6M0J).
    #[arg(required = true, value_name = "PDB_ID")]
    pub id: String,

    /// Directory to place the downloaded file in.
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// File format to download.
    #[arg(short, long, value_enum, default_value_t = FetchFormat::Pdb)]
    pub format: FetchFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchFormat {
    /// Legacy PDB format.
    Pdb,
    /// PDBx/mmCIF format.
    Cif,
}

impl FetchFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Pdb => "pdb",
            Self::Cif => "cif",
        }
    }
}

/// Arguments for the `render` subcommand.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Path to the structure to visualize, in PDB format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the generated PyMOL script.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Chain identifier of the first binding partner.
    #[arg(long, value_name = "CHAIN", default_value = "A")]
    pub chain1: String,

    /// Chain identifier of the second binding partner.
    #[arg(long, value_name = "CHAIN", default_value = "B")]
    pub chain2: String,

    /// Interface cutoff distance in Angstroms.
    #[arg(long, value_name = "FLOAT", default_value_t = 5.0)]
    pub interface_distance: f64,
}

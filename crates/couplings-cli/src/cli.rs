use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "couplings - classify residue coupling scores into predicted and observed contacts, and fit 2D embeddings to a viewport.",
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
    /// Rank coupling scores into top-N predicted contacts and mark the correct ones.
    Classify(ClassifyArgs),
    /// List the observed contacts of a dataset, i.e. pairs within a distance cutoff.
    Observed(ObservedArgs),
    /// Compute the scale and translation that center a 2D embedding in a viewport.
    Fit(FitArgs),
}

/// Arguments for the `classify` subcommand.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Path to the coupling-scores CSV file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path to a PDB-derived monomer-contacts CSV. When given, its
    /// distances replace the ones in the coupling-scores file for
    /// classification.
    #[arg(long, value_name = "PATH")]
    pub contacts: Option<PathBuf>,

    /// Path for the predictions CSV output. Omit to print a summary only.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of top-ranked predictions to keep. Negative means no limit.
    /// Defaults to half the chain length.
    #[arg(short = 'n', long, value_name = "INT", allow_hyphen_values = true)]
    pub top_n: Option<isize>,

    /// Minimum separation |i - j| along the chain for an informative pair.
    #[arg(short = 'l', long, value_name = "INT")]
    pub min_separation: Option<usize>,

    /// Maximum distance (Angstroms) for a prediction to count as correct.
    #[arg(short = 'd', long, value_name = "FLOAT")]
    pub distance_cutoff: Option<f64>,

    /// Override the chain length derived from the residue indices.
    #[arg(long, value_name = "INT")]
    pub chain_length: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DatasetFormat {
    /// 13-column coupling_scores.csv
    Couplings,
    /// 3-column contacts_monomer.csv
    Contacts,
}

/// Arguments for the `observed` subcommand.
#[derive(Args, Debug)]
pub struct ObservedArgs {
    /// Path to the dataset CSV file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Format of the input dataset.
    #[arg(short, long, value_enum, default_value_t = DatasetFormat::Couplings)]
    pub format: DatasetFormat,

    /// Maximum distance (Angstroms) for a pair to count as observed.
    #[arg(short = 'd', long, value_name = "FLOAT", default_value_t = 5.0)]
    pub distance_cutoff: f64,

    /// Path for the contacts CSV output. Omit to print a summary only.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `fit` subcommand.
#[derive(Args, Debug)]
pub struct FitArgs {
    /// Path to the nodes CSV file (columns: x, y and optionally category).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Viewport width in pixels.
    #[arg(short = 'W', long, required = true, value_name = "FLOAT")]
    pub width: f64,

    /// Viewport height in pixels.
    #[arg(short = 'H', long, required = true, value_name = "FLOAT")]
    pub height: f64,

    /// Margin added to the bounding box so points stay off the edge.
    #[arg(long, value_name = "FLOAT", default_value_t = 50.0)]
    pub padding: f64,

    /// Fraction of the viewport the layout may occupy.
    #[arg(long, value_name = "FLOAT", default_value_t = 0.85)]
    pub target_fraction: f64,

    /// Vertical shift of the layout center, in pixels.
    #[arg(long, value_name = "FLOAT", default_value_t = 30.0)]
    pub y_offset: f64,

    /// Write the transformed coordinates to this path.
    #[arg(long, value_name = "PATH")]
    pub apply: Option<PathBuf>,
}

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "showcase-scores",
    version,
    about = "Judge-bias-corrected project rankings with attendance blending"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding showcase.toml (defaults to the current directory)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank projects by the kappa-adjusted score
    Kappa(KappaCommand),
    /// Rank projects by the proportional-variance score
    Variance(VarianceCommand),
    /// Blend an adjusted score with attendance for prescreening
    Prescreen(PrescreenCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum MethodArg {
    Kappa,
    Variance,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
    Csv,
}

#[derive(Args)]
pub struct KappaCommand {
    pub scores: PathBuf,
    #[arg(long)]
    pub kappa: Option<f64>,
    /// Keep raw sums instead of rescaling onto [0, 1]
    #[arg(long)]
    pub raw: bool,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct VarianceCommand {
    pub scores: PathBuf,
    /// Keep raw weighted averages instead of rescaling onto [0, 1]
    #[arg(long)]
    pub raw: bool,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct PrescreenCommand {
    pub scores: PathBuf,
    #[arg(long)]
    pub attendance: PathBuf,
    /// Name/number sheet used when scores and attendance use different identifiers
    #[arg(long)]
    pub pairs: Option<PathBuf>,
    #[arg(long, value_enum)]
    pub method: Option<MethodArg>,
    #[arg(long)]
    pub kappa: Option<f64>,
    #[arg(long)]
    pub ratio: Option<f64>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

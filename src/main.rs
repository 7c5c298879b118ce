mod adjust;
mod cli;
mod config;
mod error;
mod ingest;
mod logging;
mod report;
mod types;

use crate::adjust::Adjustment;
use crate::error::{Result, ShowcaseError};
use crate::types::config::{Method, Settings};
use crate::types::report::Ranking;
use crate::types::table::ScoreTable;
use clap::Parser;
use std::path::Path;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let root = match cli.config_dir {
        Some(dir) => {
            if !dir.exists() {
                return Err(ShowcaseError::PathNotFound(dir.display().to_string()));
            }
            dir
        }
        None => std::env::current_dir()?,
    };
    let loaded = config::load_config(&root)?;
    if loaded.is_none() {
        tracing::info!(root = %root.display(), "no showcase.toml found; using defaults");
    }
    let settings = loaded.map(|cfg| cfg.settings()).unwrap_or_default();

    let ranking = match cli.command {
        cli::Commands::Kappa(cmd) => {
            let kappa = cmd.kappa.unwrap_or(settings.kappa);
            let normalize = settings.normalize && !cmd.raw;
            let table = load_scores(&cmd.scores, &settings)?;
            let adjustment = adjust::kappa_adjusted(&table, kappa, normalize)?;
            let mut ranking = build_ranking("kappa", &cmd.scores, adjustment, normalize)?;
            ranking.kappa = Some(kappa);
            emit(&ranking, cmd.format)?;
            ranking
        }
        cli::Commands::Variance(cmd) => {
            let normalize = settings.normalize && !cmd.raw;
            let table = load_scores(&cmd.scores, &settings)?;
            let adjustment = adjust::proportional_variance(&table, normalize);
            let ranking =
                build_ranking("proportional-variance", &cmd.scores, adjustment, normalize)?;
            emit(&ranking, cmd.format)?;
            ranking
        }
        cli::Commands::Prescreen(cmd) => {
            let method = match cmd.method {
                Some(cli::MethodArg::Kappa) => Method::Kappa,
                Some(cli::MethodArg::Variance) => Method::Variance,
                None => settings.method,
            };
            let kappa = cmd.kappa.unwrap_or(settings.kappa);
            let ratio = cmd.ratio.unwrap_or(settings.attendance_ratio);

            let table = load_scores(&cmd.scores, &settings)?;
            // The blend assumes both sides already sit in [0, 1].
            let adjustment = match method {
                Method::Kappa => adjust::kappa_adjusted(&table, kappa, true)?,
                Method::Variance => adjust::proportional_variance(&table, true),
            };

            let attendance = ingest::attendance::read_attendance(
                &cmd.attendance,
                &settings.project_number,
                &settings.attendance_ignored,
            )?;
            let mapping = cmd
                .pairs
                .as_deref()
                .map(|path| {
                    ingest::pairs::read_pairs(
                        path,
                        &settings.project_name,
                        &settings.project_number,
                    )
                })
                .transpose()?;
            let blended = adjust::blend_with_attendance(
                &adjustment.scores,
                &attendance,
                ratio,
                mapping.as_ref(),
            )?;

            let label = match method {
                Method::Kappa => "kappa",
                Method::Variance => "proportional-variance",
            };
            let mut ranking = build_ranking(
                label,
                &cmd.scores,
                Adjustment {
                    scores: blended,
                    degeneracies: adjustment.degeneracies,
                },
                true,
            )?;
            if method == Method::Kappa {
                ranking.kappa = Some(kappa);
            }
            ranking.attendance_ratio = Some(ratio);
            emit(&ranking, cmd.format)?;
            ranking
        }
    };

    if ranking.warnings.is_empty() {
        Ok(exit_code::SUCCESS)
    } else {
        Ok(exit_code::WARNINGS)
    }
}

fn load_scores(path: &Path, settings: &Settings) -> Result<ScoreTable> {
    ingest::scores::read_scores(path, &settings.project_name, &settings.ignored)
}

fn build_ranking(
    method: &str,
    scores_path: &Path,
    adjustment: Adjustment,
    normalize: bool,
) -> Result<Ranking> {
    let mut ranking = Ranking::new(
        method,
        &adjustment.scores,
        report::file_digest(scores_path)?,
    );
    ranking.normalized = normalize;
    ranking.warnings = adjustment.degeneracies;
    Ok(ranking)
}

fn emit(ranking: &Ranking, format: cli::ReportFormat) -> Result<()> {
    let output_format = match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
        cli::ReportFormat::Csv => report::OutputFormat::Csv,
    };
    let rendered = report::render(ranking, output_format)?;
    println!("{rendered}");
    Ok(())
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}

use crate::commands::{
    run_analyze, run_batch, run_classify, run_consolidate, run_pairwise, run_range,
    run_templates, AnalyzeArgs, BatchArgs, ClassifyArgs, ConsolidateArgs, PairwiseArgs,
    RangeArgs, TemplatesArgs,
};
use clap::{Parser, Subcommand};
use talent_fit::config::{AppConfig, ConfigError};
use talent_fit::error::AppError;
use talent_fit::fit::FitEngine;
use talent_fit::telemetry;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "talent-fit",
    about = "Score behavioral fit between candidates, roles, and hiring leaders",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compare two measured profiles dimension by dimension
    Pairwise(PairwiseArgs),
    /// Score a measured profile against a role's ideal ranges
    Range(RangeArgs),
    /// Blend role fit with an optional leader fit
    Consolidate(ConsolidateArgs),
    /// Run a full analysis against a profile directory snapshot
    Analyze(AnalyzeArgs),
    /// Rank a CSV export of candidates for one role
    Batch(BatchArgs),
    /// List the built-in role templates
    Templates(TemplatesArgs),
    /// Show the tier and recommendation for a raw score
    Classify(ClassifyArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(environment = ?config.environment, "configuration loaded");

    let engine = FitEngine::new(config.policy).map_err(ConfigError::InvalidPolicy)?;

    match cli.command {
        Command::Pairwise(args) => run_pairwise(&engine, args),
        Command::Range(args) => run_range(&engine, args),
        Command::Consolidate(args) => run_consolidate(&engine, args),
        Command::Analyze(args) => run_analyze(config.policy, args),
        Command::Batch(args) => run_batch(&engine, args),
        Command::Templates(args) => run_templates(args),
        Command::Classify(args) => run_classify(&engine, args),
    }
}

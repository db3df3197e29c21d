use crate::infra::{
    load_ideal, load_profile, read_json, DirectorySnapshot, InMemoryFitStore,
    InMemoryProfileDirectory,
};
use clap::Args;
use serde::Serialize;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use talent_fit::config::ConfigError;
use talent_fit::error::AppError;
use talent_fit::fit::batch::{rank_csv, BatchRanking};
use talent_fit::fit::recommendation::recommend;
use talent_fit::fit::report::{render_consolidated, render_pairwise, render_range};
use talent_fit::fit::repository::{FitAnalysisRecord, OwnerId, RoleId};
use talent_fit::fit::service::{FitAnalysisRequest, FitAnalysisService};
use talent_fit::fit::templates::{role_template, role_templates};
use talent_fit::fit::{
    ConsolidatedResult, FitEngine, FitPolicy, FitTier, IdealProfile, PairwiseFitResult,
    RangeFitResult, RecommendationContext,
};
use tracing::info;

/// Where the role's ideal profile comes from.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub(crate) struct IdealSource {
    /// Built-in role template key (see `templates`)
    #[arg(long)]
    pub(crate) role_template: Option<String>,
    /// JSON file holding an ideal profile
    #[arg(long)]
    pub(crate) ideal: Option<PathBuf>,
}

impl IdealSource {
    fn load(&self) -> Result<IdealProfile, AppError> {
        load_ideal(self.role_template.as_deref(), self.ideal.as_deref())
    }
}

#[derive(Args, Debug)]
pub(crate) struct PairwiseArgs {
    /// JSON profile record of the first person
    #[arg(long)]
    pub(crate) left: PathBuf,
    /// JSON profile record of the second person
    #[arg(long)]
    pub(crate) right: PathBuf,
    /// Print a text report instead of JSON
    #[arg(long)]
    pub(crate) report: bool,
}

#[derive(Args, Debug)]
pub(crate) struct RangeArgs {
    /// JSON profile record of the candidate
    #[arg(long)]
    pub(crate) candidate: PathBuf,
    #[command(flatten)]
    pub(crate) ideal: IdealSource,
    /// Print a text report instead of JSON
    #[arg(long)]
    pub(crate) report: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ConsolidateArgs {
    /// JSON profile record of the candidate
    #[arg(long)]
    pub(crate) candidate: PathBuf,
    #[command(flatten)]
    pub(crate) ideal: IdealSource,
    /// JSON profile record of the hiring leader
    #[arg(long)]
    pub(crate) leader: Option<PathBuf>,
    /// Print a text report instead of JSON
    #[arg(long)]
    pub(crate) report: bool,
}

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// JSON snapshot with `profiles` and `roles` maps
    #[arg(long)]
    pub(crate) directory: PathBuf,
    #[arg(long)]
    pub(crate) candidate_id: String,
    /// Role id from the snapshot, or a built-in template key
    #[arg(long)]
    pub(crate) role_id: String,
    #[arg(long)]
    pub(crate) leader_id: Option<String>,
    /// Print a text report instead of JSON
    #[arg(long)]
    pub(crate) report: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV export with one candidate per row
    #[arg(long)]
    pub(crate) csv: PathBuf,
    #[command(flatten)]
    pub(crate) ideal: IdealSource,
    /// JSON profile record of the hiring leader
    #[arg(long)]
    pub(crate) leader: Option<PathBuf>,
    /// Print a ranking table instead of JSON
    #[arg(long)]
    pub(crate) report: bool,
}

#[derive(Args, Debug)]
pub(crate) struct TemplatesArgs {
    /// Show a single template
    pub(crate) key: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct ClassifyArgs {
    /// Score on the 0-100 scale
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub(crate) score: u8,
    /// Role name used in the recommendation text
    #[arg(long)]
    pub(crate) role: Option<String>,
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn run_pairwise(engine: &FitEngine, args: PairwiseArgs) -> Result<(), AppError> {
    let left = load_profile(&args.left)?;
    let right = load_profile(&args.right)?;
    let fit = engine.compute_pairwise_fit(&left, &right)?;

    if args.report {
        print!("{}", render_pairwise(&fit));
        Ok(())
    } else {
        print_json(&fit)
    }
}

pub(crate) fn run_range(engine: &FitEngine, args: RangeArgs) -> Result<(), AppError> {
    let candidate = load_profile(&args.candidate)?;
    let ideal = args.ideal.load()?;
    let fit = engine.compute_range_fit(&candidate, &ideal)?;

    if args.report {
        print!("{}", render_range(&fit));
        Ok(())
    } else {
        print_json(&fit)
    }
}

#[derive(Serialize)]
struct ConsolidatedOutput<'a> {
    role_fit: &'a RangeFitResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    leader_fit: Option<&'a PairwiseFitResult>,
    consolidated: &'a ConsolidatedResult,
}

pub(crate) fn run_consolidate(engine: &FitEngine, args: ConsolidateArgs) -> Result<(), AppError> {
    let candidate = load_profile(&args.candidate)?;
    let ideal = args.ideal.load()?;
    let role_fit = engine.compute_range_fit(&candidate, &ideal)?;
    let leader_fit = match &args.leader {
        Some(path) => {
            let leader = load_profile(path)?;
            Some(engine.compute_pairwise_fit(&candidate, &leader)?)
        }
        None => None,
    };
    let consolidated = engine.compute_consolidated_fit(&role_fit, leader_fit.as_ref());

    if args.report {
        print!("{}", render_range(&role_fit));
        if let Some(fit) = &leader_fit {
            print!("\n{}", render_pairwise(fit));
        }
        print!("\n{}", render_consolidated(&consolidated));
        Ok(())
    } else {
        print_json(&ConsolidatedOutput {
            role_fit: &role_fit,
            leader_fit: leader_fit.as_ref(),
            consolidated: &consolidated,
        })
    }
}

pub(crate) fn run_analyze(policy: FitPolicy, args: AnalyzeArgs) -> Result<(), AppError> {
    let snapshot: DirectorySnapshot = read_json(&args.directory)?;
    let directory = InMemoryProfileDirectory::from_snapshot(snapshot)?;
    let store = InMemoryFitStore::default();
    let service = FitAnalysisService::new(Arc::new(directory), Arc::new(store), policy)
        .map_err(ConfigError::InvalidPolicy)?;

    let request = FitAnalysisRequest {
        candidate_id: OwnerId(args.candidate_id),
        role_id: RoleId(args.role_id),
        leader_id: args.leader_id.map(OwnerId),
    };
    let record = service.analyze(&request)?;

    if args.report {
        print!("{}", render_record(&record));
        Ok(())
    } else {
        print_json(&record)
    }
}

fn render_record(record: &FitAnalysisRecord) -> String {
    let mut out = format!(
        "Candidato {} | Função {} | {}\n\n",
        record.candidate_id,
        record.role_id,
        record.analyzed_at.format("%Y-%m-%d %H:%M UTC")
    );
    out.push_str(&render_range(&record.role_fit));
    if let Some(fit) = &record.leader_fit {
        out.push('\n');
        out.push_str(&render_pairwise(fit));
    }
    out.push('\n');
    out.push_str(&render_consolidated(&record.consolidated));
    out
}

pub(crate) fn run_batch(engine: &FitEngine, args: BatchArgs) -> Result<(), AppError> {
    let ideal = args.ideal.load()?;
    let leader = args.leader.as_deref().map(load_profile).transpose()?;
    let file = File::open(&args.csv)?;

    let ranking = rank_csv(engine, file, &ideal, leader.as_ref())?;
    info!(
        ranked = ranking.ranked.len(),
        rejected = ranking.rejected.len(),
        role = %ideal.role_name,
        "batch ranking complete"
    );

    if args.report {
        render_ranking(&ideal.role_name, &ranking);
        Ok(())
    } else {
        print_json(&ranking)
    }
}

fn render_ranking(role_name: &str, ranking: &BatchRanking) {
    println!("Ranking para {role_name}");
    for candidate in &ranking.ranked {
        let leader = candidate
            .leader_score
            .map(|score| format!(" | líder {score}"))
            .unwrap_or_default();
        println!(
            "{:>3}. {} {} - {}/100 ({}) | função {}{}",
            candidate.rank,
            candidate.owner_id,
            candidate.name.as_deref().unwrap_or(""),
            candidate.consolidated_score,
            candidate.tier,
            candidate.role_score,
            leader
        );
    }

    if !ranking.rejected.is_empty() {
        println!("\nLinhas rejeitadas:");
        for row in &ranking.rejected {
            println!("- linha {} ({}): {}", row.row, row.owner_id, row.reason);
        }
    }
}

pub(crate) fn run_templates(args: TemplatesArgs) -> Result<(), AppError> {
    match args.key {
        Some(key) => {
            let template = role_template(&key)
                .ok_or_else(|| AppError::InvalidInput(format!("unknown role template '{key}'")))?;
            print_json(&template)
        }
        None => {
            let catalog: Vec<_> = role_templates()
                .into_iter()
                .map(|(key, profile)| serde_json::json!({ "key": key, "profile": profile }))
                .collect();
            print_json(&catalog)
        }
    }
}

#[derive(Serialize)]
struct Classification {
    score: u8,
    tier: FitTier,
    recommendation: String,
}

pub(crate) fn run_classify(engine: &FitEngine, args: ClassifyArgs) -> Result<(), AppError> {
    let tier = engine.policy().tiers.classify(args.score);
    let context = match args.role {
        Some(role) => RecommendationContext::for_role(role),
        None => RecommendationContext::default(),
    };

    print_json(&Classification {
        score: args.score,
        tier,
        recommendation: recommend(tier, &context),
    })
}

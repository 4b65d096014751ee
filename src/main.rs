use clap::{Args, Parser, Subcommand};
use readiness_engine::assessment::{
    process_submission, AnswerSet, AssessmentContext, AssessmentError, AssessmentKind,
    AssessmentReportSummary, LeadCsvImporter, ProcessedLead, ScoringMode, Submission,
};
use readiness_engine::config::AppConfig;
use readiness_engine::error::AppError;
use readiness_engine::telemetry;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Readiness Engine",
    about = "Score readiness assessments and qualify leads from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a single submission from a JSON answers file
    Score(ScoreArgs),
    /// Batch-import a responses CSV export and classify every lead
    Import(ImportArgs),
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// JSON file mapping dimension ids to scores 1-5
    #[arg(long)]
    answers: PathBuf,
    /// Assessment kind (ai_readiness or career); overrides APP_ASSESSMENT
    #[arg(long)]
    assessment: Option<String>,
    #[arg(long, default_value = "")]
    first_name: String,
    #[arg(long, default_value = "")]
    last_name: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long)]
    organization: Option<String>,
    /// Self-reported role title, e.g. "VP of Engineering"
    #[arg(long)]
    role: Option<String>,
    /// Company size bucket, e.g. "51-200"
    #[arg(long)]
    company_size: Option<String>,
    /// Score an in-progress session: missing answers count as zero
    #[arg(long)]
    partial: bool,
}

#[derive(Args, Debug)]
struct ImportArgs {
    /// Responses CSV export to classify
    #[arg(long)]
    csv: PathBuf,
    /// Assessment kind (ai_readiness or career); overrides APP_ASSESSMENT
    #[arg(long)]
    assessment: Option<String>,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Score(args) => run_score(args, &config),
        Command::Import(args) => run_import(args, &config),
    }
}

fn resolve_kind(requested: Option<&str>, config: &AppConfig) -> Result<AssessmentKind, AppError> {
    match requested {
        Some(value) => AssessmentKind::parse(value)
            .map_err(AssessmentError::from)
            .map_err(AppError::from),
        None => Ok(config.default_assessment),
    }
}

fn run_score(args: ScoreArgs, config: &AppConfig) -> Result<(), AppError> {
    let kind = resolve_kind(args.assessment.as_deref(), config)?;
    let context = AssessmentContext::new(kind);

    let raw = std::fs::read_to_string(&args.answers)?;
    let parsed: BTreeMap<String, u8> = serde_json::from_str(&raw)?;
    let answers = AnswerSet::from_pairs(parsed).map_err(AssessmentError::from)?;

    let submission = Submission {
        first_name: args.first_name,
        last_name: args.last_name,
        email: args.email,
        organization: args.organization,
        role: args.role,
        company_size: args.company_size,
        submitted_at: None,
        answers,
    };

    let mode = if args.partial {
        ScoringMode::Preview
    } else {
        ScoringMode::Final
    };

    let lead = process_submission(submission, &context, mode)?;
    info!(
        kind = kind.key(),
        tier = lead.classification.tier.label(),
        "submission scored"
    );
    render_report(&lead.summary(&context));
    Ok(())
}

fn run_import(args: ImportArgs, config: &AppConfig) -> Result<(), AppError> {
    let kind = resolve_kind(args.assessment.as_deref(), config)?;
    let context = AssessmentContext::new(kind);

    let leads = LeadCsvImporter::from_path(&args.csv, &context)?;
    info!(kind = kind.key(), count = leads.len(), "responses imported");
    render_import(&leads);
    Ok(())
}

fn render_report(summary: &AssessmentReportSummary) {
    println!("{}", summary.assessment_label);
    println!(
        "Score: {}/{} ({}%) - {} band",
        summary.total_score, summary.max_score, summary.normalized_score, summary.band_label
    );
    if summary.is_partial {
        println!("Note: partial submission; unanswered dimensions scored as 0");
    }
    println!(
        "Strongest: {} | Weakest: {}",
        summary.strongest_title, summary.weakest_title
    );

    println!("\nDimension breakdown");
    for entry in &summary.dimension_breakdown {
        println!(
            "- {} [{}]: {}/5 (benchmark {:.1}) - {}",
            entry.title, entry.phase_label, entry.score, entry.benchmark, entry.status_label
        );
        if let Some(description) = entry.level_description {
            println!("    {description}");
        }
    }

    if summary.gaps.is_empty() {
        println!("\nGaps: none");
    } else {
        println!("\nTop gaps");
        for gap in &summary.gaps {
            println!("- {} ({}/5)", gap.title, gap.score);
        }
    }

    println!("\nRecommended next steps");
    for recommendation in &summary.recommendations {
        println!("- {}: {}", recommendation.title, recommendation.details);
    }

    if let (Some(label), Some(reason)) = (summary.tier_label, summary.tier_reason.as_deref()) {
        println!("\nLead tier: {label}");
        println!("Reason: {reason}");
    }
}

fn render_import(leads: &[ProcessedLead]) {
    if leads.is_empty() {
        println!("No leads imported");
        return;
    }

    println!("Imported {} lead(s)\n", leads.len());
    for lead in leads {
        let name = format!(
            "{} {}",
            lead.submission.first_name, lead.submission.last_name
        );
        let name = name.trim();
        let display = if name.is_empty() {
            lead.submission.email.as_str()
        } else {
            name
        };
        println!(
            "- {} <{}> | {}/{} {} | {}",
            display,
            lead.submission.email,
            lead.score.total_score,
            lead.score.max_score,
            lead.score.band.label(),
            lead.classification.tier.label()
        );
        println!("    {}", lead.classification.reason);
    }
}

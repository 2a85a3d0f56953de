use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tickersent_analysis::{
    build_classifier, build_scorer, run_analysis, AnalysisReport, AnalysisRequest, ClassifierKind,
    Confidence, InferenceClient, RequestCache, ScorerKind,
};
use tickersent_core::{load_app_config, AppConfig, Document, Ticker};
use tickersent_fetch::{fetch_ticker_posts, read_posts, FetchError};

mod render;

#[derive(Debug, Parser)]
#[command(name = "tickersent")]
#[command(about = "Social sentiment scanner for stock tickers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch posts for one or more tickers and score them.
    Analyze(AnalyzeArgs),
}

#[derive(Debug, clap::Args)]
struct AnalyzeArgs {
    /// Ticker symbols to analyze.
    #[arg(required = true)]
    tickers: Vec<String>,

    /// Maximum number of relevant posts to score per ticker.
    #[arg(long, default_value_t = 100)]
    limit: usize,

    /// Include low-confidence ticker mentions.
    #[arg(long)]
    include_low: bool,

    /// Relevance classifier variant.
    #[arg(long, value_enum, default_value = "rule")]
    classifier: ClassifierArg,

    /// Sentiment scorer variant.
    #[arg(long, value_enum, default_value = "lexicon")]
    scorer: ScorerArg,

    /// Read posts from a file (one per line) instead of fetching.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Emit the full report as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ClassifierArg {
    Rule,
    Model,
}

impl From<ClassifierArg> for ClassifierKind {
    fn from(arg: ClassifierArg) -> Self {
        match arg {
            ClassifierArg::Rule => ClassifierKind::Rule,
            ClassifierArg::Model => ClassifierKind::Model,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ScorerArg {
    Lexicon,
    Model,
}

impl From<ScorerArg> for ScorerKind {
    fn from(arg: ScorerArg) -> Self {
        match arg {
            ScorerArg::Lexicon => ScorerKind::Lexicon,
            ScorerArg::Model => ScorerKind::Model,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_app_config().context("configuration")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze(args) => analyze(&config, &args).await,
    }
}

async fn analyze(config: &AppConfig, args: &AnalyzeArgs) -> anyhow::Result<()> {
    let classifier_kind = ClassifierKind::from(args.classifier);
    let scorer_kind = ScorerKind::from(args.scorer);
    let min_confidence = if args.include_low {
        Confidence::Low
    } else {
        Confidence::Medium
    };

    // One inference client per process, shared by both model-backed variants.
    let inference = config
        .inference_url
        .as_deref()
        .map(|url| Arc::new(InferenceClient::new(url)));

    let classifier = build_classifier(classifier_kind, inference.as_ref(), config.model_max_chars)?;
    let scorer = build_scorer(scorer_kind, inference.as_ref(), config.model_max_chars)?;

    let mut cache = RequestCache::new();

    for raw in &args.tickers {
        let ticker = match Ticker::parse(raw) {
            Ok(ticker) => ticker,
            Err(e) => {
                eprintln!("warning: skipping ticker {raw:?}: {e}");
                continue;
            }
        };

        let report = if let Some(hit) = cache.get(&ticker, args.limit) {
            tracing::debug!(ticker = %ticker, "request cache hit");
            hit
        } else {
            let documents =
                load_documents(config, &ticker, args.limit, args.input.as_deref()).await?;
            if documents.is_empty() {
                println!("{ticker}: no posts found, try another ticker");
                continue;
            }

            let request = AnalysisRequest::new(
                ticker.clone(),
                args.limit,
                min_confidence,
                classifier_kind,
                scorer_kind,
            )?;
            let report = run_analysis(&request, documents, classifier.as_ref(), scorer.as_ref())
                .await
                .with_context(|| format!("analysis failed for {ticker}"))?;
            cache.insert(args.limit, report)
        };

        if report.is_empty() {
            println!("{ticker}: no relevant documents found");
            continue;
        }
        emit(&report, args.json)?;
    }

    Ok(())
}

async fn load_documents(
    config: &AppConfig,
    ticker: &Ticker,
    limit: usize,
    input: Option<&Path>,
) -> anyhow::Result<Vec<Document>> {
    match input {
        Some(path) => {
            read_posts(path).with_context(|| format!("reading posts from {}", path.display()))
        }
        None => match fetch_ticker_posts(config, ticker, limit).await {
            Ok(documents) => Ok(documents),
            Err(e @ FetchError::CredentialsMissing) => {
                anyhow::bail!("{e}; pass --input FILE to analyze a local file instead")
            }
            Err(e) => Err(e).with_context(|| format!("fetching posts for {ticker}")),
        },
    }
}

fn emit(report: &AnalysisReport, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", render::render_report(report));
    }
    Ok(())
}

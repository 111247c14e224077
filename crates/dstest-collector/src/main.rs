//! DSTest collector CLI
//!
//! Matches the transactions recorded for a test run against the run's suite,
//! persists the verdicts and prints a report.
//!
//! Usage:
//!   dstest-collect collect <RUN_ID> [OPTIONS]
//!   dstest-collect describe <SUITE_ID>
//!   dstest-collect report <RUN_ID>

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use dstest_collector::{
    Collector, CollectorConfig, ConfigApiClient, FileTestRunStore, FileTransactionStore,
    TestRunSource,
};
use dstest_matcher::{format_test_suite, RunReport};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// DSTest collector - verify recorded traffic against test suites
#[derive(Parser, Debug)]
#[command(name = "dstest-collect")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// YAML configuration file
    #[arg(short, long, global = true, env = "DSTEST_CONFIG")]
    config: Option<PathBuf>,

    /// Configuration API base URL
    #[arg(long, global = true, env = "DSTEST_API_URL")]
    api_url: Option<String>,

    /// JSON file of recorded transactions
    #[arg(long, global = true)]
    transactions: Option<PathBuf>,

    /// Directory of persisted test runs
    #[arg(long, global = true)]
    runs_dir: Option<PathBuf>,

    /// Configuration API request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Do not persist matched runs
    #[arg(long, global = true)]
    no_persist: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    output: OutputFormat,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Match recorded transactions against a test run and persist the verdicts
    Collect {
        run_id: String,

        /// Where to read the test run definition from
        #[arg(long, value_enum, default_value = "api")]
        source: RunSource,
    },
    /// Print a test suite from the configuration API
    Describe { suite_id: String },
    /// Print the report of a persisted test run without matching
    Report { run_id: String },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RunSource {
    Api,
    File,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = load_config(&args)?;

    match &args.command {
        Command::Collect { run_id, source } => collect(&config, &args, run_id, *source).await,
        Command::Describe { suite_id } => {
            let client = ConfigApiClient::new(&config.api_url, config.timeout())?;
            let suite = client
                .get_test_suite(suite_id)
                .await
                .with_context(|| format!("Failed to fetch test suite {suite_id}"))?;
            match args.output {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&suite)?),
                OutputFormat::Text => print!("{}", format_test_suite(&suite)),
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Report { run_id } => {
            let store = FileTestRunStore::new(&config.runs_dir);
            let run = store
                .fetch_test_run(run_id)
                .await
                .with_context(|| format!("Failed to load test run {run_id}"))?;
            print_report(&RunReport::from_run(&run), args.output)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .init();
}

fn load_config(args: &Args) -> anyhow::Result<CollectorConfig> {
    let mut config = match &args.config {
        Some(path) => CollectorConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => CollectorConfig::default(),
    };

    if let Some(api_url) = &args.api_url {
        config.api_url = api_url.clone();
    }
    if let Some(path) = &args.transactions {
        config.transactions_path = path.clone();
    }
    if let Some(dir) = &args.runs_dir {
        config.runs_dir = dir.clone();
    }
    if let Some(timeout) = args.timeout {
        config.timeout_secs = timeout;
    }
    if args.no_persist {
        config.persist = false;
    }

    config.validate()?;
    Ok(config)
}

async fn collect(
    config: &CollectorConfig,
    args: &Args,
    run_id: &str,
    source: RunSource,
) -> anyhow::Result<ExitCode> {
    let runs: Arc<dyn TestRunSource> = match source {
        RunSource::Api => Arc::new(ConfigApiClient::new(&config.api_url, config.timeout())?),
        RunSource::File => Arc::new(FileTestRunStore::new(&config.runs_dir)),
    };

    let collector = Collector::new(
        runs,
        FileTransactionStore::new(&config.transactions_path),
        FileTestRunStore::new(&config.runs_dir),
    )
    .with_persist(config.persist);

    let run = collector.collect(run_id).await?;
    let report = RunReport::from_run(&run);
    print_report(&report, args.output)?;

    Ok(if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    })
}

fn print_report(report: &RunReport, output: OutputFormat) -> anyhow::Result<()> {
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Text => print!("{report}"),
    }
    Ok(())
}

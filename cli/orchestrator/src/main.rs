//! Axial coding exercise builder
//!
//! Fetches NFT project descriptions, anonymizes them and writes the student
//! file, instructor key and collection log for an axial coding exercise.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

use std::path::PathBuf;
use std::process::ExitCode;

use axial_cli::{resolve_config, CliError, Overrides, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use config::{Config, SourceKind};
use local::LocalDatasetSource;
use pipeline::extract::run_extract;
use pipeline::{build_source, run_collection, ReportPaths, RunSummary};

/// Command-line interface for axial-coding.
#[derive(Parser, Debug)]
#[command(
    name = "axial-coding",
    about = "Build an anonymized NFT description set for an axial coding exercise",
    version
)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
    /// Configuration file (default: {config_dir}/axial/config.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log filter for stderr diagnostics, e.g. `info` or `pipeline=debug`
    #[arg(long, global = true)]
    log_level: Option<String>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch every configured project and write the three reports
    Collect {
        /// Metadata source: file, query or local
        #[arg(long)]
        source: Option<SourceKind>,
        /// Local clone of the dataset (implies --source local)
        #[arg(long)]
        dataset_dir: Option<PathBuf>,
        /// Directory for the reports
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Print the project names the source knows about
    List {
        /// Metadata source: file, query or local
        #[arg(long)]
        source: Option<SourceKind>,
        /// Local clone of the dataset (implies --source local)
        #[arg(long)]
        dataset_dir: Option<PathBuf>,
    },
    /// Dump the first projects of a local dataset clone
    Extract {
        /// Local clone of the dataset
        #[arg(long)]
        dataset_dir: PathBuf,
        /// How many projects to take, in name order
        #[arg(long, default_value_t = 50)]
        max_projects: usize,
        /// Directory for the JSON and text files
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Write the default configuration as TOML
    InitConfig {
        /// Destination (default: {config_dir}/axial/config.toml)
        #[arg(long)]
        path: Option<PathBuf>,
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let explicit = cli.config.as_deref();
    match cli.cmd {
        Commands::Collect { source, dataset_dir, output_dir } => {
            let overrides =
                Overrides { source, dataset_dir, output_dir, log_level: cli.log_level };
            let config = resolve_config(explicit, overrides)?;
            logging::init(&config.logging.level)?;
            collect(&config).await
        }
        Commands::List { source, dataset_dir } => {
            let overrides =
                Overrides { source, dataset_dir, log_level: cli.log_level, ..Overrides::default() };
            let config = resolve_config(explicit, overrides)?;
            logging::init(&config.logging.level)?;

            let source = build_source(&config.source)?;
            let names = source.list_projects().await?;
            for name in &names {
                println!("{}", name);
            }
            println!("\nTotal: {} projects in {}", names.len(), source.describe());
            Ok(())
        }
        Commands::Extract { dataset_dir, max_projects, output_dir } => {
            let overrides = Overrides {
                source: Some(SourceKind::Local),
                dataset_dir: Some(dataset_dir.clone()),
                output_dir,
                log_level: cli.log_level,
            };
            let config = resolve_config(explicit, overrides)?;
            logging::init(&config.logging.level)?;

            let source = LocalDatasetSource::open(&dataset_dir, &config.source.root)?;
            run_extract(&source, max_projects, &config.output.dir, &mut std::io::stdout()).await?;
            Ok(())
        }
        Commands::InitConfig { path, force } => {
            let path = match path {
                Some(path) => path,
                None => Config::default_path()?,
            };
            if path.exists() && !force {
                return Err(CliError::ConfigExists(path));
            }
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            Config::default().save(&path)?;
            println!("Wrote default configuration to {}", path.display());
            Ok(())
        }
    }
}

async fn collect(config: &Config) -> Result<()> {
    let source = build_source(&config.source)?;
    println!("Collecting NFT descriptions for axial coding");
    println!("Using {}", source.describe());
    println!("{}", "=".repeat(pipeline::RULE_WIDTH));

    let paths = ReportPaths::from(&config.output);
    tracing::info!(
        categories = config.categories.len(),
        output = %config.output.dir.display(),
        "starting collection"
    );
    let summary = run_collection(
        source.as_ref(),
        &config.categories,
        &paths,
        Local::now().naive_local(),
        &mut std::io::stdout(),
    )
    .await?;

    print_completion(config, &paths, &summary);
    if !summary.is_complete() {
        return Err(CliError::IncompleteReports(summary.failures.len()));
    }
    Ok(())
}

fn print_completion(config: &Config, paths: &ReportPaths, summary: &RunSummary) {
    let rule = "=".repeat(60);
    if summary.is_complete() {
        println!("\n{}\n✅ COMPLETE!\n{}", rule, rule);
    } else {
        println!("\n{}\n⚠️  FINISHED WITH ERRORS\n{}", rule, rule);
    }

    println!("\nFiles created:");
    let files = [
        (&paths.student, "Give this to students"),
        (&paths.key, "Keep for reference (maps codes to projects)"),
        (&paths.log, "Documents what was collected"),
    ];
    for (n, (path, note)) in files.iter().filter(|(p, _)| summary.written.contains(*p)).enumerate()
    {
        println!("{}. {} - {}", n + 1, path.display(), note);
    }

    println!(
        "\nExpected outcome: Students should identify {} distinct clusters",
        config.categories.len()
    );
    println!("through axial coding based on content themes.\n");
    for (letter, category) in ('A'..='Z').zip(&config.categories) {
        println!("Cluster {}: {}", letter, category.name);
    }
    println!();
}

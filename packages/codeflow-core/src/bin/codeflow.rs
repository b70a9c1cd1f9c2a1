//! CodeFlow CLI
//!
//! # Usage
//!
//! ```bash
//! # Analyze a file, run every step and save the session
//! codeflow analyze demo.py --run --save
//!
//! # Step three times with a fixed seed and write both exports
//! codeflow analyze demo.py --steps 3 --seed 42 --json out.json --html out.html
//!
//! # List sources of a project, then inspect stored sessions
//! codeflow project ./src --language python
//! codeflow sessions list --limit 5
//! codeflow sessions export 3 --html report.html
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use codeflow_core::config::{ConfigError, DebuggerConfig};
use codeflow_core::errors::{CodeflowError, Result};
use codeflow_core::features::export::{
    export_html, export_json, ExportBundle, ReportData,
};
use codeflow_core::features::parsing::discover_sources;
use codeflow_core::pipeline::{analyze_file, AnalysisRun, StepMode};
use codeflow_core::LanguageId;
use codeflow_storage::{SessionStore, SqliteSessionStore};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "codeflow")]
#[command(about = "Structural analysis and simulated step-through of source files", long_about = None)]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Session database (overrides the configuration)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one source file
    Analyze {
        file: PathBuf,

        /// Language name (python, cpp, java, javascript, other)
        #[arg(short, long)]
        language: Option<String>,

        /// Seed for simulated outcomes
        #[arg(long)]
        seed: Option<u64>,

        /// Step forward this many times
        #[arg(long, conflicts_with = "run")]
        steps: Option<usize>,

        /// Step until the end
        #[arg(long)]
        run: bool,

        /// Store the session in the database
        #[arg(long)]
        save: bool,

        /// Write the JSON export here
        #[arg(long)]
        json: Option<PathBuf>,

        /// Write the HTML report here
        #[arg(long)]
        html: Option<PathBuf>,
    },

    /// List analyzable sources under a directory
    Project {
        dir: PathBuf,

        #[arg(short, long)]
        language: Option<String>,
    },

    /// Stored sessions
    #[command(subcommand)]
    Sessions(SessionCommands),
}

#[derive(Subcommand)]
enum SessionCommands {
    /// Most recent sessions first
    List {
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Print one session as JSON
    Show { id: i64 },

    Delete { id: i64 },

    /// Export a stored session
    Export {
        id: i64,

        #[command(flatten)]
        targets: ExportTargets,
    },
}

#[derive(Args)]
#[group(required = true, multiple = true)]
struct ExportTargets {
    #[arg(long)]
    json: Option<PathBuf>,

    #[arg(long)]
    html: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref(), cli.db) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("codeflow: {}", err);
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(cli.command, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "command failed");
            eprintln!("codeflow: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: Option<&Path>, db: Option<PathBuf>) -> Result<DebuggerConfig> {
    let mut config = match path {
        Some(path) => DebuggerConfig::from_yaml(path)?,
        None => DebuggerConfig::default(),
    };
    if let Some(db) = db {
        config = config.with_database_path(db);
    }
    config.validate()?;
    Ok(config)
}

fn run(command: Commands, config: DebuggerConfig) -> Result<()> {
    match command {
        Commands::Analyze {
            file,
            language,
            seed,
            steps,
            run,
            save,
            json,
            html,
        } => {
            let config = match seed {
                Some(seed) => config.with_seed(seed),
                None => config,
            };
            let mode = match (steps, run) {
                (_, true) => StepMode::RunToEnd,
                (Some(n), false) => StepMode::Steps(n),
                (None, false) => StepMode::Initialize,
            };
            let language = language.as_deref().map(parse_language).transpose()?;
            let analysis = analyze_file(&file, language, mode, &config)?;
            print_run(&analysis);

            if save {
                let store = SqliteSessionStore::open(&config.database_path)?;
                let id = store.save(&analysis.to_new_session()?)?;
                println!("Session saved with ID: {}", id);
            }
            write_exports(
                &analysis.export_bundle()?,
                &analysis.report(),
                json.as_deref(),
                html.as_deref(),
            )
        }

        Commands::Project { dir, language } => {
            let language = match language {
                Some(name) => parse_language(&name)?,
                None => config.default_language,
            };
            let sources = discover_sources(&dir, language);
            info!(dir = %dir.display(), %language, count = sources.len(), "project scanned");
            for path in sources {
                println!("{}", path.display());
            }
            Ok(())
        }

        Commands::Sessions(command) => run_sessions(command, &config),
    }
}

fn run_sessions(command: SessionCommands, config: &DebuggerConfig) -> Result<()> {
    let store = SqliteSessionStore::open(&config.database_path)?;

    match command {
        SessionCommands::List { limit } => {
            for summary in store.list_recent(limit.unwrap_or(config.recent_limit))? {
                println!(
                    "{:>5}  {}  {}",
                    summary.id,
                    summary.timestamp.format("%Y-%m-%d %H:%M:%S"),
                    summary.filename
                );
            }
            Ok(())
        }
        SessionCommands::Show { id } => {
            let session = store.require(id)?;
            println!("{}", serde_json::to_string_pretty(&session)?);
            Ok(())
        }
        SessionCommands::Delete { id } => {
            store.delete(id)?;
            println!("Deleted session {}", id);
            Ok(())
        }
        SessionCommands::Export { id, targets } => {
            let session = store.require(id)?;
            write_exports(
                &ExportBundle::from_session(&session),
                &ReportData::from_session(&session),
                targets.json.as_deref(),
                targets.html.as_deref(),
            )
        }
    }
}

fn parse_language(name: &str) -> Result<LanguageId> {
    LanguageId::from_name(name)
        .ok_or_else(|| ConfigError::UnknownLanguage(name.to_string()).into())
}

fn write_exports(
    bundle: &ExportBundle,
    report: &ReportData,
    json: Option<&Path>,
    html: Option<&Path>,
) -> Result<()> {
    if let Some(path) = json {
        if !export_json(bundle, path) {
            return Err(CodeflowError::export(format!("could not write {}", path.display())));
        }
        println!("Exported to JSON: {}", path.display());
    }
    if let Some(path) = html {
        if !export_html(report, path) {
            return Err(CodeflowError::export(format!("could not write {}", path.display())));
        }
        println!("Exported to HTML: {}", path.display());
    }
    Ok(())
}

fn print_run(run: &AnalysisRun) {
    let info = &run.debug_info;
    println!("{} [{}]", run.filename, run.language);
    println!(
        "  variables: {}  functions: {}  classes: {}  conditionals: {}  loops: {}",
        run.results.variables.len(),
        run.results.functions.len(),
        run.results.classes.len(),
        run.results.conditionals.len(),
        run.results.loops.len()
    );
    for op in run.results.operations() {
        println!("  line {:>4}  {}", op.line, op.kind);
    }

    println!("  steps: {}  executed: {}", info.total_steps, run.timeline.len());
    for entry in &run.timeline {
        let marker = if entry.is_current { ">" } else { " " };
        println!(
            "  {} {:>4}  {:?}  {}",
            marker, entry.index + 1, entry.status, entry.step.description
        );
    }

    println!(
        "  flow graph: {} nodes, {} edges",
        run.flow_graph.nodes.len(),
        run.flow_graph.edges.len()
    );
    if info.error.has_error {
        println!("  error: {}", info.error.message);
    }
}

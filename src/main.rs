mod commands;
mod config;
mod error;
mod framework;
mod output;
mod profile;
mod project;
mod store;
mod templates;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use commands::list::ListKind;
use output::OutputFormat;
use std::env;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DECIDE_DIR: &str = ".decide";

#[derive(Parser)]
#[command(name = "decide", version, about = "Decision support store - stakeholder profiles, frameworks and projects")]
struct Cli {
    /// Directory holding config.json and the record files (default: <repo>/.decide)
    #[arg(long, env = "DECIDE_DIR", global = true)]
    dir: Option<PathBuf>,

    /// Output format (overrides default_output in config.json)
    #[arg(short, long, global = true)]
    output: Option<OutputFormat>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create .decide/ with a config and sample record files
    Init,

    /// Load all record files and check references between them
    Validate,

    /// Show one stakeholder profile
    Stakeholder {
        /// Stakeholder id (email)
        id: String,
    },

    /// Show a decision framework, optionally scoring an option
    Framework {
        /// Framework name
        name: String,

        /// Rating for one criterion, e.g. --rate cost=4
        #[arg(long = "rate", value_name = "CRITERION=VALUE")]
        rates: Vec<String>,
    },

    /// Show a project with its next and overdue milestones
    Project {
        /// Project id
        id: String,

        /// Date to measure milestones against (YYYY-MM-DD, default: today)
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// List records of one kind
    List {
        #[arg(value_enum)]
        kind: ListKind,
    },
}

fn find_repo_root() -> Result<PathBuf, String> {
    let mut dir = env::current_dir()
        .map_err(|e| format!("failed to get current directory: {}", e))?;

    loop {
        if dir.join(DECIDE_DIR).exists() || dir.join(".git").exists() {
            return Ok(dir);
        }
        if !dir.pop() {
            return env::current_dir()
                .map_err(|e| format!("failed to get current directory: {}", e));
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let dir = match cli.dir {
        Some(dir) => dir,
        None => find_repo_root()
            .unwrap_or_else(|e| {
                eprintln!("error: {}", e);
                std::process::exit(1);
            })
            .join(DECIDE_DIR),
    };
    tracing::debug!(dir = %dir.display(), "using decide directory");

    let result = config::load_or_default(&dir).and_then(|config| {
        let format = cli.output.unwrap_or(config.default_output);
        match cli.command {
            Commands::Init => commands::init::run(&dir),
            Commands::Validate => commands::validate::run(&dir, &config),
            Commands::Stakeholder { id } => commands::show::stakeholder(&dir, &config, &id, format),
            Commands::Framework { name, rates } => {
                commands::show::framework(&dir, &config, &name, &rates, format)
            }
            Commands::Project { id, today } => {
                let today = today.unwrap_or_else(|| chrono::Local::now().date_naive());
                commands::show::project(&dir, &config, &id, today, format)
            }
            Commands::List { kind } => commands::list::run(&dir, &config, kind, format),
        }
    });

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

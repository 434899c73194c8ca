use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_ledger::cli::{
    handle_add_command, handle_categories_command, handle_config_command, handle_create_command,
    handle_filter_command, handle_status_command, AddArgs, CreateArgs, FilterArgs, StatusArgs,
};
use budget_ledger::config::paths::LedgerPaths;
use budget_ledger::logging::init_tracing;
use budget_ledger::storage::Storage;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Personal monthly budgeting ledger",
    long_about = "Plan monthly spending per category, record expenses, and compare \
                  what you planned with what you spent, from the command line."
)]
struct Cli {
    /// Base directory for the configuration and data files
    #[arg(long, global = true, value_name = "DIR")]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create (or replace) the budget from a YAML configuration
    Create(CreateArgs),

    /// Record an expense
    Add(AddArgs),

    /// Show planned versus actual spending for the month
    Status(StatusArgs),

    /// List transactions by date, category, and amount
    Filter(FilterArgs),

    /// List the planned categories
    Categories,

    /// Show current configuration and paths
    Config,
}

fn main() {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Usage errors exit 1 like every other failure; help and version exit 0
        Err(e) if e.use_stderr() => {
            eprint!("{}", e.render());
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let paths = LedgerPaths::resolve(cli.dir.as_deref())?;
    tracing::debug!(base = %paths.base_dir().display(), "resolved paths");

    match cli.command {
        Commands::Create(args) => handle_create_command(&paths, args)?,
        Commands::Config => handle_config_command(&paths),
        Commands::Add(args) => handle_add_command(&Storage::open(paths)?, args)?,
        Commands::Status(args) => handle_status_command(&Storage::open(paths)?, args)?,
        Commands::Filter(args) => handle_filter_command(&Storage::open(paths)?, args)?,
        Commands::Categories => handle_categories_command(&Storage::open(paths)?)?,
    }

    Ok(())
}

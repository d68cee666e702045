use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use expense_tracker::audit::AuditLogger;
use expense_tracker::cli::{handle_expense_command, handle_export_command, ExpenseCommands, ExportArgs};
use expense_tracker::config::{Settings, TrackerPaths};
use expense_tracker::services::Ledger;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Personal expense tracker",
    long_about = "Record expenses into a CSV ledger, filter them by category and \
                  date range, and see where the money went by category and month."
)]
struct Cli {
    /// Ledger file to use instead of the configured one
    #[arg(long, global = true, env = "EXPENSE_TRACKER_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Export expenses as CSV, JSON or YAML
    Export(ExportArgs),

    /// Create the data directory, settings file and an empty ledger
    Init,

    /// Show current configuration and paths
    Config,

    /// Show recent entries from the audit log
    Log {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let ledger_path = cli
        .file
        .clone()
        .unwrap_or_else(|| settings.ledger_path(&paths));
    let audit = AuditLogger::new(paths.audit_log());

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            let mut ledger = Ledger::load(&ledger_path)
                .with_context(|| format!("Failed to load {}", ledger_path.display()))?
                .with_audit(audit);
            handle_expense_command(&mut ledger, &settings, cmd)?;
        }
        Some(Commands::Export(args)) => {
            let ledger = Ledger::load(&ledger_path)
                .with_context(|| format!("Failed to load {}", ledger_path.display()))?;
            handle_export_command(&ledger, args)?;
        }
        Some(Commands::Init) => {
            println!("Initializing expense tracker at: {}", paths.base_dir().display());
            settings.save(&paths)?;

            let ledger = Ledger::load(&ledger_path)?;
            if !ledger_path.exists() {
                ledger.save()?;
            }
            println!("Ledger: {} ({} expense(s))", ledger_path.display(), ledger.len());
            println!("Initialization complete!");
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Ledger file:    {}", ledger_path.display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Recent count:    {}", settings.recent_count);
        }
        Some(Commands::Log { count }) => {
            let entries = audit.read_recent(count)?;
            if entries.is_empty() {
                println!("No audit entries yet.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
        None => {
            println!("Expense Tracker - personal expense ledger");
            println!();
            println!("Run 'expense --help' for usage information.");
            println!("Run 'expense add 120 -c Food' to record your first expense.");
        }
    }

    Ok(())
}

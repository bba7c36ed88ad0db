use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use famplan::cli::{
    handle_config_command, handle_plan_command, handle_predict_command, handle_summary_command,
};
use famplan::config::{PlannerPaths, Settings};
use famplan::services::PlannerSession;
use famplan::tui::run_dashboard;

#[derive(Parser)]
#[command(
    name = "famplan",
    version,
    about = "Terminal-based family budget planning dashboard",
    long_about = "famplan is a terminal dashboard for household budgeting: enter \
                  your yearly income sources for a suggested 50/30/20 split, track \
                  the month's expenses by category, and ask the prediction service \
                  for a next-month expense estimate."
)]
struct Cli {
    /// Base address of the expense prediction service
    #[arg(long, env = "FAMPLAN_PREDICTION_URL", global = true)]
    prediction_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard
    #[command(alias = "tui")]
    Dashboard,

    /// Compute a 50/30/20 plan from three yearly income figures
    Plan {
        /// Yearly arecanut revenue
        arecanut: String,
        /// Yearly salary income
        salary: String,
        /// Yearly coconut revenue
        coconut: String,
    },

    /// Aggregate a list of Category:Amount expenses
    Summary {
        /// Expense entries, e.g. Food:1000 Rent:5000 Food:500
        #[arg(required = true)]
        entries: Vec<String>,
    },

    /// Ask the prediction service for next month's expense
    Predict {
        /// Current month's total spent
        #[arg(short, long)]
        spent: String,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = PlannerPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    if let Some(url) = cli.prediction_url {
        settings.prediction_url = url;
    }

    match cli.command {
        Some(Commands::Plan {
            arecanut,
            salary,
            coconut,
        }) => {
            handle_plan_command(&settings, &arecanut, &salary, &coconut)?;
        }
        Some(Commands::Summary { entries }) => {
            handle_summary_command(&settings, &entries)?;
        }
        Some(Commands::Predict { spent }) => {
            handle_predict_command(&settings, &spent)?;
        }
        Some(Commands::Config) => {
            handle_config_command(&paths, &settings)?;
        }
        Some(Commands::Dashboard) | None => {
            run_dashboard(PlannerSession::new(), &settings)?;
        }
    }

    Ok(())
}

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use fundbazaar::cli::list::ListOptions;
use fundbazaar::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct ListArgs {
    /// Match against fund name, manager or category (case-insensitive)
    #[arg(short, long)]
    search: Option<String>,

    /// Shariah compliance to include: Islamic, Conventional (repeatable)
    #[arg(long)]
    shariah: Vec<String>,

    /// Risk profile to include: Low, Medium, High (repeatable)
    #[arg(long)]
    risk: Vec<String>,

    /// Fund type to include: "Mutual Fund", "Pension Fund" (repeatable)
    #[arg(long = "fund-type")]
    fund_type: Vec<String>,

    /// Print matching funds as JSON
    #[arg(long)]
    json: bool,
}

impl From<ListArgs> for ListOptions {
    fn from(args: ListArgs) -> ListOptions {
        ListOptions {
            search: args.search,
            shariah: args.shariah,
            risk: args.risk,
            fund_type: args.fund_type,
            json: args.json,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// List funds matching a search and filters
    List(ListArgs),
    /// Search and filter funds interactively
    Browse,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => fundbazaar::cli::setup::setup().map(|_| ()),
        Some(Commands::List(args)) => {
            fundbazaar::run_command(
                fundbazaar::AppCommand::List(args.into()),
                cli.config_path.as_deref(),
            )
            .await
        }
        Some(Commands::Browse) => {
            fundbazaar::run_command(fundbazaar::AppCommand::Browse, cli.config_path.as_deref())
                .await
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}

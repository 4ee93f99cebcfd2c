pub mod cli;
pub mod core;
pub mod providers;

pub use crate::core::config;

use anyhow::Result;
use tracing::{debug, info};

pub enum AppCommand {
    List(cli::list::ListOptions),
    Browse,
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Fund Bazaar starting...");

    let config = match config_path {
        Some(path) => config::AppConfig::load_from_path(path)?,
        None => config::AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let repository = providers::BazaarProvider::new(config.bazaar_base_url());

    match command {
        AppCommand::List(options) => {
            let mut stdout = std::io::stdout();
            cli::list::run(&repository, &options, &config.nav_currency, &mut stdout).await
        }
        AppCommand::Browse => cli::browse::run(&repository, &config.nav_currency).await,
    }
}

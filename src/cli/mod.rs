//! The `countrylens` command line.

pub mod interactive;
pub mod render;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::Parser;

use crate::config::Config;
use crate::explorer::{Explorer, ExplorerIntent, ExplorerSettings, LoadState};
use crate::model::SortDirection;
use crate::source::{
    CountrySource, FallbackSource, RestCountriesClient, RestSettings, WithFallback,
};

#[derive(Debug, Parser)]
#[command(
    name = "countrylens",
    version,
    about = "Search, sort and page through the countries of the world"
)]
pub struct Cli {
    /// Case-insensitive substring to match against country names
    #[arg(short, long, default_value = "")]
    pub filter: String,

    /// Sort direction: asc or desc (default from config)
    #[arg(short, long)]
    pub sort: Option<SortDirection>,

    /// Zero-based page index
    #[arg(short, long, default_value_t = 0)]
    pub page: usize,

    /// Rows per page (default from config)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Use the built-in sample instead of the network
    #[arg(long)]
    pub offline: bool,

    /// Send the filter upstream as a name search
    #[arg(long)]
    pub remote_search: bool,

    /// Path to config file (default: ~/.config/countrylens/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the page as JSON instead of a table
    #[arg(long, conflicts_with = "interactive")]
    pub json: bool,

    /// Read filter text and commands from stdin
    #[arg(short, long)]
    pub interactive: bool,
}

impl Cli {
    /// Merge command-line overrides onto the configured view settings.
    pub fn explorer_settings(&self, config: &Config) -> ExplorerSettings {
        ExplorerSettings {
            debounce: config.view.debounce(),
            page_size: self.page_size.unwrap_or(config.view.page_size),
            sort: self.sort.unwrap_or(config.view.sort),
            remote_search: self.remote_search || config.view.remote_search,
        }
    }

    fn load_config(&self) -> anyhow::Result<Config> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        Ok(config)
    }
}

/// Entry point for the binary.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.load_config()?;
    tracing::debug!(?config, "configuration loaded");

    if cli.offline {
        return run_with(&cli, &config, FallbackSource).await;
    }

    let client = RestCountriesClient::new(RestSettings::from(&config.source))?;
    if config.source.fallback_on_error {
        run_with(&cli, &config, WithFallback::new(client)).await
    } else {
        run_with(&cli, &config, client).await
    }
}

async fn run_with<S: CountrySource>(cli: &Cli, config: &Config, source: S) -> anyhow::Result<()> {
    let explorer = Explorer::new(Arc::new(source), cli.explorer_settings(config))
        .context("invalid page size")?;

    if cli.interactive {
        return interactive::run(explorer).await;
    }

    explorer.dispatch(ExplorerIntent::SetFilter(cli.filter.clone()));
    explorer.dispatch(ExplorerIntent::SetPage(cli.page));
    explorer.refresh().await.context("fetch task failed")?;

    let state = explorer.state();
    let origin = match &state.load {
        LoadState::Ready { origin } => *origin,
        LoadState::Failed { message } => bail!("Failed to load countries: {message}"),
        other => bail!("Fetch did not complete: {other:?}"),
    };

    let view = state.view()?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render::render_view(&view, origin));
    }
    Ok(())
}

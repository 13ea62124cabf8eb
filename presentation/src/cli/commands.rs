//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for list and detail views
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable list with icons and status lines
    List,
    /// The view model as JSON
    Json,
}

impl From<OutputFormat> for catalog_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::List => catalog_domain::OutputFormat::List,
            OutputFormat::Json => catalog_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for catalog-browser
#[derive(Parser, Debug)]
#[command(name = "catalog-browser")]
#[command(author, version, about = "Browse the ArkhamDB card catalog and the HowBazaar item catalog")]
#[command(long_about = r#"
Catalog browser fetches a public game catalog, shows it as a searchable list
and remembers the last successful result so the next run has something to
show while it refreshes.

Catalogs:
  cards   ArkhamDB player cards (optionally with encounter cards)
  items   HowBazaar items with tooltips, enchantments and quests

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./catalog.toml      Project-level config
3. ~/.config/catalog-browser/config.toml   Global config

Example:
  catalog-browser cards roland
  catalog-browser cards --select 01001 --run 2
  catalog-browser --format json items "fang" --details
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Skip global and project config files (an explicit --config is still read)
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Neither restore nor persist the cached catalog
    #[arg(long, global = true)]
    pub no_cache: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Output format (overrides config)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Browse ArkhamDB cards
    Cards(CardsArgs),
    /// Browse HowBazaar items
    Items(ItemsArgs),
}

#[derive(Args, Debug, Default)]
pub struct CardsArgs {
    /// Fuzzy search over name, code, class, type and traits
    pub query: Option<String>,

    /// Include encounter cards
    #[arg(long, conflicts_with = "no_encounter")]
    pub encounter: bool,

    /// Exclude encounter cards even if the config includes them
    #[arg(long)]
    pub no_encounter: bool,

    /// Show the actions of the card with this code
    #[arg(long, value_name = "CODE")]
    pub select: Option<String>,

    /// Run the Nth action (1-based) of the selected card
    #[arg(long, value_name = "N", requires = "select")]
    pub run: Option<usize>,
}

impl CardsArgs {
    /// Effective encounter flag given the configured default.
    pub fn include_encounter(&self, configured: bool) -> bool {
        if self.encounter {
            true
        } else if self.no_encounter {
            false
        } else {
            configured
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct ItemsArgs {
    /// Fuzzy search over name, size and tags
    pub query: Option<String>,

    /// Show the full detail view of the item with this id
    #[arg(long, value_name = "ID", conflicts_with = "json")]
    pub show: Option<String>,

    /// Show the raw JSON of the item with this id
    #[arg(long, value_name = "ID")]
    pub json: Option<String>,

    /// Print each row's detail pane in full
    #[arg(long)]
    pub details: bool,
}

//! CLI entrypoint for catalog-browser
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use catalog_application::{
    CacheStore, CatalogFetcher, CatalogSession, LoadCatalogInput, LoadCatalogUseCase, LoadPolicy,
    LoadProgressNotifier, NoProgress,
};
use catalog_domain::{CardCatalog, Catalog, Endpoint, ItemCatalog, OutputFormat};
use catalog_infrastructure::{
    ConfigLoader, FileCacheStore, FileConfig, HttpCatalogFetcher, InMemoryCacheStore,
};
use catalog_presentation::{
    ActionOutcome, CardsArgs, Cli, Command, ConsoleHost, DetailView, ItemsArgs, ListView,
    ProgressReporter, SimpleProgress, SystemOpener, ViewTarget, card_list_view, filter_rows,
    item_list_view, resolve_item_view, run_action,
};
use clap::{CommandFactory, Parser};
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting catalog-browser");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = ConfigLoader::load_for_cli(cli.config.as_ref(), !cli.no_config)
        .map_err(|e| anyhow!("Failed to load configuration: {}", e))?;
    for issue in config.validate() {
        warn!("Config issue: {}", issue.message);
    }

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let format: OutputFormat = cli
        .format
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // === Dependency Injection ===
    let fetcher: Arc<dyn CatalogFetcher> = Arc::new(
        HttpCatalogFetcher::new(&config.http.user_agent, config.http.timeout())
            .context("Failed to build HTTP client")?,
    );
    let cache = build_cache(&config, cli.no_cache);
    let progress = build_progress(&config, cli.quiet);
    let policy = config.catalog.to_policy();

    match command {
        Command::Cards(args) => {
            let endpoint = config
                .cards
                .endpoint(args.include_encounter(config.cards.include_encounter));
            let session: CatalogSession<CardCatalog> =
                load_session(fetcher, cache, policy, endpoint, progress.as_ref()).await;
            show_cards(&session, &args, &config, format)
        }
        Command::Items(args) => {
            let endpoint = config.items.endpoint();
            let session: CatalogSession<ItemCatalog> =
                load_session(fetcher, cache, policy, endpoint, progress.as_ref()).await;
            show_items(&session, &args, format)
        }
    }
}

fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    match log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .ok_or_else(|| anyhow!("--log-file needs a file name: {}", path.display()))?;
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

fn build_cache(config: &FileConfig, no_cache: bool) -> Arc<dyn CacheStore> {
    if no_cache || !config.cache.enabled {
        info!("Persistent cache disabled");
        return Arc::new(InMemoryCacheStore::new());
    }
    match config.cache.resolved_dir() {
        Some(dir) => {
            info!("Cache directory: {}", dir.display());
            Arc::new(FileCacheStore::new(dir))
        }
        None => {
            warn!("No cache directory available; results will not persist between runs");
            Arc::new(InMemoryCacheStore::new())
        }
    }
}

fn build_progress(config: &FileConfig, quiet: bool) -> Box<dyn LoadProgressNotifier> {
    if quiet || !config.output.show_progress {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    }
}

/// Restore the previous run's records, then fetch once.
async fn load_session<C: Catalog>(
    fetcher: Arc<dyn CatalogFetcher>,
    cache: Arc<dyn CacheStore>,
    policy: LoadPolicy,
    endpoint: Endpoint,
    progress: &dyn LoadProgressNotifier,
) -> CatalogSession<C> {
    let use_case = LoadCatalogUseCase::<C>::new(fetcher, cache).with_policy(policy);
    let mut session = CatalogSession::new(use_case);
    session.restore(progress);
    session.activate(LoadCatalogInput::new(endpoint), progress).await;
    session
}

fn show_cards(
    session: &CatalogSession<CardCatalog>,
    args: &CardsArgs,
    config: &FileConfig,
    format: OutputFormat,
) -> Result<()> {
    let view = card_list_view(session, &config.cards.card_link_base);

    let Some(code) = &args.select else {
        return print_list(view, args.query.as_deref(), &ConsoleHost::new(), format);
    };

    if let Some(failure) = &view.failure {
        bail!("{}", failure);
    }
    let row = view
        .row(code)
        .ok_or_else(|| anyhow!("No card with code {}", code))?;

    let Some(n) = args.run else {
        match format {
            OutputFormat::Json => println!("{}", ConsoleHost::format_json(row)),
            OutputFormat::List => print!("{}", ConsoleHost::format_actions(row)),
        }
        return Ok(());
    };

    let action = n
        .checked_sub(1)
        .and_then(|i| row.actions.get(i))
        .ok_or_else(|| anyhow!("Card {} has {} actions, no action {}", code, row.actions.len(), n))?;
    let outcome = run_action(action, &SystemOpener, |_| None)?;
    print_outcome(outcome, format);
    Ok(())
}

fn show_items(
    session: &CatalogSession<ItemCatalog>,
    args: &ItemsArgs,
    format: OutputFormat,
) -> Result<()> {
    let target = match (&args.show, &args.json) {
        (Some(id), _) => Some(ViewTarget::ItemDetail { id: id.clone() }),
        (None, Some(id)) => Some(ViewTarget::ItemJson { id: id.clone() }),
        (None, None) => None,
    };

    let Some(target) = target else {
        let view = item_list_view(session);
        let host = ConsoleHost::new().with_expanded_details(args.details);
        return print_list(view, args.query.as_deref(), &host, format);
    };

    if let Some(error) = session.error() {
        bail!("{}", error);
    }
    let items = session.records().unwrap_or_default();
    let detail =
        resolve_item_view(&target, items).ok_or_else(|| anyhow!("No item matches {:?}", target))?;
    print_detail(&detail, format);
    Ok(())
}

fn print_list(
    mut view: ListView,
    query: Option<&str>,
    host: &ConsoleHost,
    format: OutputFormat,
) -> Result<()> {
    if let Some(query) = query {
        view.rows = filter_rows(view.rows, query);
    }

    match format {
        OutputFormat::Json => println!("{}", ConsoleHost::format_json(&view)),
        OutputFormat::List => print!("{}", host.format_list(&view)),
    }

    match view.failure {
        Some(failure) => bail!("{}", failure),
        None => Ok(()),
    }
}

fn print_detail(detail: &DetailView, format: OutputFormat) {
    match format {
        OutputFormat::Json => println!("{}", ConsoleHost::format_json(detail)),
        OutputFormat::List => print!("{}", ConsoleHost::format_detail(detail)),
    }
}

fn print_outcome(outcome: ActionOutcome, format: OutputFormat) {
    match outcome {
        ActionOutcome::Opened(url) => eprintln!("Opened {}", url),
        // Plain content on stdout so it can be piped into a clipboard tool
        ActionOutcome::Copied(content) => println!("{}", content),
        ActionOutcome::Pushed(detail) => print_detail(&detail, format),
    }
}

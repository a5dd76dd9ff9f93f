//! Pokedex - terminal consumer for the catalog client core
//!
//! # Overview
//!
//! This binary stands in for a presentation layer: it wires the HTTP
//! catalog client through the repository into the [`StateManager`], then
//! renders whatever the two state slots publish.
//!
//! # Execution Flow
//!
//! 1. Load settings from `Pokedex Data/Pokedex Config.yaml` (defaults when absent)
//! 2. Initialize logging → logs/pokedex.<date>
//! 3. Create the tokio runtime for fetch tasks
//! 4. Build client → repository → state manager (the list load starts here)
//! 5. Watch the list slot to its terminal state and print it
//! 6. If an entry name was given on the command line, request its detail
//!    and watch the detail slot resolve
//! 7. Log the metrics summary and shut the runtime down
//!
//! # Usage
//!
//! ```text
//! pokedex            # print the catalog list
//! pokedex pikachu    # also fetch and print one detail record
//! ```

use anyhow::Result;
use camino::Utf8Path;
use pokedex::models::LoadState;
use pokedex::{APP_NAME, CatalogRepository, ConfigManager, HttpCatalogClient, StateManager, VERSION};
use std::sync::Arc;
use std::time::Duration;

fn main() -> Result<()> {
    let config_manager = ConfigManager::new("Pokedex Data")?;
    let config = config_manager.load()?;
    let settings = config.catalog_settings;

    // File logging only; stdout belongs to the rendered output below.
    let _guard = pokedex::logging::setup_logging(
        Utf8Path::new("logs"),
        APP_NAME,
        settings.debug_mode,
        false,
    )?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .worker_threads(2)
        .thread_name("pokedex-worker")
        .build()?;

    let client = HttpCatalogClient::new(&settings)?;
    let repository = CatalogRepository::new(Arc::new(client));
    let manager = Arc::new(StateManager::new(repository, runtime.handle().clone()));

    let selection = std::env::args().nth(1);
    runtime.block_on(render(&manager, selection.as_deref()))?;

    manager.metrics().log_summary();
    runtime.shutdown_timeout(Duration::from_secs(5));

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Render the list slot, and optionally one detail record, to stdout.
async fn render(manager: &StateManager, selection: Option<&str>) -> Result<()> {
    let mut list_rx = manager.subscribe_list();

    if list_rx.borrow().is_loading() {
        println!("Loading catalog...");
    }

    let list_state = list_rx.wait_for(|state| state.is_terminal()).await?.clone();
    if let Some(names) = list_state.ready() {
        println!("Catalog: {} entries", names.len());
        for name in names.iter().take(20) {
            println!("  {name}");
        }
        if names.len() > 20 {
            println!("  ... and {} more", names.len() - 20);
        }
    } else if let Some(cause) = list_state.error() {
        println!("Failed to load catalog: {cause}");
    }

    let Some(name) = selection else {
        return Ok(());
    };

    let mut detail_rx = manager.subscribe_detail();
    manager.request_detail(name);
    println!();
    println!("Fetching {name}...");

    let detail_state = detail_rx
        .wait_for(|state| matches!(state, Some(detail) if detail.is_terminal()))
        .await?
        .clone();

    match detail_state {
        Some(LoadState::Ready(detail)) => {
            println!("{}", detail.name);
            println!("  height: {} dm", detail.height);
            println!("  weight: {} hg", detail.weight);
            println!("  types:  {}", detail.types.join(", "));
            for stat in &detail.stats {
                println!("  {}: {}", stat.name, stat.base);
            }
            if let Some(url) = &detail.sprite_url {
                println!("  sprite: {url}");
            }
        }
        _ => {
            println!("No data for {name}");
        }
    }

    Ok(())
}

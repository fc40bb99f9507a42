//! taskboard - a Kanban board in the terminal.
//!
//! Loads the configuration, opens the task storage, bootstraps the board
//! and hands the terminal to the UI until the user quits.

mod logging;

use anyhow::Context;
use taskboard_config::{Config, StorageConfig};
use taskboard_store::{FileStorage, MemoryStorage, Storage};
use taskboard_tui::{App, terminal};
use taskboard_ui::{bootstrap, dom::Document};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    logging::init(&config.logging)?;

    let storage = open_storage(&config.storage)?;
    let controller =
        bootstrap(storage, Document::board_layout()).context("failed to start the board")?;

    // Install before entering raw mode so a panic always restores the terminal
    terminal::install_panic_hook();
    let mut terminal = terminal::setup_terminal()?;

    let result = App::new(controller).run(&mut terminal);

    // Always restore terminal, even if the app failed
    terminal::restore_terminal(&mut terminal)?;
    info!("taskboard exited");
    result
}

fn open_storage(config: &StorageConfig) -> anyhow::Result<Box<dyn Storage>> {
    if config.in_memory {
        info!("using in-memory storage, nothing will be saved");
        return Ok(Box::new(MemoryStorage::new()));
    }
    let path = config.resolve_path()?;
    info!(path = %path.display(), "opening storage");
    let storage = FileStorage::open(&path)
        .with_context(|| format!("failed to open storage at {}", path.display()))?;
    Ok(Box::new(storage))
}

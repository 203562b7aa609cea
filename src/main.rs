mod app;
mod browser;
mod components;
mod config;
mod error;
mod event;
mod handler;
mod loader;
mod storage;
mod tui;
mod ui;

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::app::App;
use crate::browser::Browser;
use crate::config::{AppConfig, BrowserConfig, LogConfig, StorageConfig};
use crate::error::AppError;
use crate::event::{Event, EventHandler};
use crate::loader::CommandLoader;
use crate::storage::LocalStorage;
use crate::tui::{install_panic_hook, Tui};

/// Browse a key archive of NFC, RFID, iButton, Sub-GHz and infrared files.
#[derive(Parser, Debug)]
#[command(name = "archive", version, about)]
struct Cli {
    /// Host directory that stands in for the SD card
    root: Option<PathBuf>,

    /// Config file to load on top of the discovered ones
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tab to open first (e.g. NFC, SubGhz, Favorites)
    #[arg(long)]
    tab: Option<String>,

    /// Write the log here instead of the cache directory
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> AppConfig {
        AppConfig {
            storage: StorageConfig {
                root: self.root.as_ref().map(|p| p.to_string_lossy().into_owned()),
            },
            browser: BrowserConfig {
                start_tab: self.tab.clone(),
                ..Default::default()
            },
            log: LogConfig {
                file: self
                    .log_file
                    .as_ref()
                    .map(|p| p.to_string_lossy().into_owned()),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Send log output to the configured file; the terminal belongs to the UI.
fn init_logging(config: &AppConfig) -> error::Result<()> {
    let path = config.log_file();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_level()))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(|e| AppError::Config(format!("logger: {}", e)))
}

#[tokio::main]
async fn main() -> error::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref(), Some(&cli.overrides()));

    let root = config.storage_root();
    if !root.is_dir() {
        return Err(AppError::InvalidPath(format!(
            "{} is not a directory",
            root.display()
        )));
    }
    let limits = config.list_limits()?;
    let start_tab = config.start_tab()?;

    init_logging(&config)?;
    log::info!("browsing {} from tab {}", root.display(), start_tab.label());

    let storage = LocalStorage::new(&root);
    log::debug!("storage root {}", storage.root().display());
    let loader = CommandLoader::new(config.loader_apps(), storage.clone());
    let mut app = App::new(Browser::new(storage, loader, limits, start_tab));

    install_panic_hook();

    let mut tui = Tui::new()?;
    let mut events = EventHandler::new(Duration::from_millis(250));

    loop {
        tui.draw(&app)?;

        match events.next().await? {
            Event::Key(key) => handler::handle_key_event(&mut app, key),
            Event::Tick => app.clear_expired_status(),
            Event::Resize(_, _) => {}
        }

        if app.should_quit {
            break;
        }
    }

    tui.restore()?;
    log::info!("exit");
    Ok(())
}

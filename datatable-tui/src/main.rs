mod app;
mod cli;
mod error;
mod paths;
mod settings;
mod term;
mod widgets;

use std::fs::{self, File};
use std::sync::Arc;

use clap::Parser;
use datatable_lib::source::{DataSource, FileSource, MockSource};
use datatable_lib::{spawn_fetch, TableConfig, TableView};
use log::{info, warn};
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::app::App;
use crate::cli::Cli;
use crate::error::AppError;
use crate::settings::{SettingsProvider, SqliteBackend};
use crate::term::Terminal;

/// Start logging to `latest.log` in the cache directory, rotating the
/// previous run's log first. Logging stays off if the file can't be created.
fn init_logging() {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else { return };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    if let Ok(log_file) = File::create(&path) {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }
}

async fn open_settings() -> Result<SettingsProvider, AppError> {
    let Some(path) = paths::settings_db() else {
        warn!("No data directory, preferences will not be saved");
        return Ok(SettingsProvider::in_memory());
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    Ok(SettingsProvider::new(SqliteBackend::open(&path).await?))
}

/// Saved preferences, falling back to defaults on any error.
async fn load_config(settings: &SettingsProvider) -> TableConfig {
    match settings.table_config().await {
        Ok(Some(config)) => config,
        Ok(None) => TableConfig::default(),
        Err(e) => {
            warn!("Ignoring unreadable preferences: {}", e);
            TableConfig::default()
        }
    }
}

async fn run(cli: Cli) -> Result<App, AppError> {
    let settings = if cli.no_settings {
        None
    } else {
        match open_settings().await {
            Ok(settings) => Some(settings),
            Err(e) => {
                warn!("Preferences unavailable: {}", e);
                None
            }
        }
    };

    let mut config = TableConfig::default();
    if let Some(settings) = &settings {
        if cli.reset_settings {
            settings.reset_table_config().await?;
        } else {
            config = load_config(settings).await;
        }
    }
    let saved = config.clone();
    let config = cli.apply(config);
    info!("Table config: {:?}", config);

    let source: Arc<dyn DataSource> = match &cli.data {
        Some(path) => Arc::new(FileSource::new(path).with_delay(config.fetch_delay)),
        None => Arc::new(MockSource::from_config(&config)),
    };
    let mut fetch = spawn_fetch(source);

    let mut app = App::new(TableView::new(config)).with_saved_config(saved);
    let mut terminal = Terminal::new()?;
    app::run(&mut app, &mut fetch, &mut terminal, settings.as_ref()).await?;

    Ok(app)
}

/// Print the final selection so it can be piped into other tools.
fn print_selection(app: &App) -> Result<(), AppError> {
    let selection = app.view().selection();
    if !selection.is_empty() {
        println!("{}", selection.to_json()?);
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging();

    match run(cli).await.and_then(|app| print_selection(&app)) {
        Ok(()) => {}
        Err(e) => {
            log::error!("Fatal: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

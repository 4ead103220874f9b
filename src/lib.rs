pub mod breathing;
pub mod chat;
pub mod cli;
pub mod content;
pub mod db;
pub mod safety;
pub mod settings;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use breathing::BreathingController;
use cli::args::{Cli, Commands};
use db::Database;
use safety::CrisisDetector;
use settings::{resolve_data_dir, SettingsStore, DATABASE_FILE, SETTINGS_FILE};

/// Everything a command needs. Built once per process; the keyword list and
/// breathing timings never change after startup.
pub struct AppState {
    pub data_dir: PathBuf,
    pub db: Database,
    pub detector: CrisisDetector,
    pub breathing: BreathingController,
    pub settings: SettingsStore,
}

impl AppState {
    pub fn open(data_dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&data_dir)?;

        let database = Database::new(data_dir.join(DATABASE_FILE))?;
        let settings = SettingsStore::new(data_dir.join(SETTINGS_FILE))?;

        Ok(Self {
            data_dir,
            db: database,
            detector: CrisisDetector::default(),
            breathing: BreathingController::default(),
            settings,
        })
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // RUST_LOG wins over -v when set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data_dir = resolve_data_dir(cli.data_dir)?;
    log::info!("Youthwell starting with data in {}", data_dir.display());

    let state = AppState::open(data_dir)?;
    let command = cli.command.unwrap_or(Commands::Home);
    cli::commands::dispatch(&state, command).await
}

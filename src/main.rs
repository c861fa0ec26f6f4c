use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use grid_snake::audio::{AudioPort, TerminalBell};
use grid_snake::game::{GameConfig, Speed};
use grid_snake::modes::HumanMode;
use grid_snake::persistence::JsonFileStore;
use log::{LevelFilter, info};
use simplelog::{Config, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Snake on a fixed grid, in your terminal")]
struct Cli {
    /// JSON file with game settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width
    #[arg(long)]
    width: Option<usize>,

    /// Grid height
    #[arg(long)]
    height: Option<usize>,

    /// Starting speed level (5 = slowest, 15 = fastest)
    #[arg(long, value_parser = clap::value_parser!(u8).range(Speed::MIN as i64..=Speed::MAX as i64))]
    speed: Option<u8>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Where the best score is kept
    #[arg(long, default_value = ".grid_snake_best.json")]
    best_score_file: PathBuf,

    /// Start with sound muted
    #[arg(long)]
    mute: bool,

    /// Log file (the terminal is taken by the game)
    #[arg(long, default_value = "grid_snake.log")]
    log_file: PathBuf,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }
        if let Some(level) = self.speed {
            config.speed = Speed::new(level)?;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {:?}", cli.log_file))?;
    WriteLogger::init(cli.log_level.into(), Config::default(), log_file)
        .context("Failed to initialize logger")?;

    let config = cli.game_config().context("Invalid game configuration")?;
    info!(
        "starting on a {}x{} grid, speed {}",
        config.grid_width,
        config.grid_height,
        config.speed.level()
    );

    let store = JsonFileStore::new(&cli.best_score_file);
    info!("best score kept in {}", store.path().display());
    let mut audio = AudioPort::new(Box::new(TerminalBell::new(std::io::stdout())));
    audio.set_muted(cli.mute);

    let mut human_mode = HumanMode::new(&config, Box::new(store), audio);
    human_mode.run().await?;

    Ok(())
}

//! Four-in-a-row GUI
//!
//! Play against the computer or another player on a 20x20 board.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use fourmok::config::{AppConfig, ModeConfig};
use fourmok::ui::FourmokApp;
use fourmok::Stone;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    Pve,
    Pvp,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Color {
    Black,
    White,
}

#[derive(Parser, Debug)]
#[command(name = "fourmok", about = "Four-in-a-row on a 20x20 board")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "fourmok.toml")]
    config: PathBuf,

    /// Search depth for the computer player
    #[arg(short, long)]
    depth: Option<u8>,

    /// Game mode
    #[arg(short, long, value_enum)]
    mode: Option<Mode>,

    /// Human color in player-vs-computer games
    #[arg(long, value_enum)]
    human: Option<Color>,
}

impl Cli {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(depth) = self.depth {
            config.ai.depth = depth;
        }
        if let Some(mode) = self.mode {
            config.game.mode = match mode {
                Mode::Pve => ModeConfig::Pve,
                Mode::Pvp => ModeConfig::Pvp,
            };
        }
        if let Some(human) = self.human {
            config.game.human = match human {
                Color::Black => Stone::Black,
                Color::White => Stone::White,
            };
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    cli.apply(&mut config);
    config.validate().context("invalid command-line override")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(
        mode = ?config.game.mode,
        human = ?config.game.human,
        depth = config.ai.depth,
        "starting"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1050.0, 800.0])
            .with_min_inner_size([820.0, 640.0])
            .with_title("Fourmok - four in a row"),
        ..Default::default()
    };

    eframe::run_native(
        "Fourmok",
        options,
        Box::new(move |cc| Ok(Box::new(FourmokApp::new(cc, &config)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}

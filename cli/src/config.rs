use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use lootsweeper_core::{CellCount, Coord, GameConfig};

/// Command line tweaks applied on top of the config file.
#[derive(Args, Debug, Default, Clone, PartialEq)]
pub struct Overrides {
    /// Number of rows
    #[arg(long)]
    pub rows: Option<Coord>,

    /// Number of columns
    #[arg(long)]
    pub cols: Option<Coord>,

    /// Number of mines
    #[arg(short, long)]
    pub mines: Option<CellCount>,

    /// Lives at the start of each game
    #[arg(short, long)]
    pub lives: Option<u8>,
}

impl Overrides {
    pub fn apply(&self, config: &mut GameConfig) {
        if let Some(rows) = self.rows {
            config.size.0 = rows;
        }
        if let Some(cols) = self.cols {
            config.size.1 = cols;
        }
        if let Some(mines) = self.mines {
            config.mines = mines;
        }
        if let Some(lives) = self.lives {
            config.lives = lives;
        }
    }
}

pub fn parse(text: &str) -> Result<GameConfig> {
    toml::from_str(text).context("Could not parse game config")
}

/// Reads the config file (or the built-in defaults), applies `overrides` and validates the result.
pub fn load(path: Option<&Path>, overrides: &Overrides) -> Result<GameConfig> {
    let mut config = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Could not read config {}", path.display()))?;
            parse(&text).with_context(|| format!("In {}", path.display()))?
        }
        None => GameConfig::default(),
    };

    overrides.apply(&mut config);
    config.validate().context("Invalid game config")?;
    log::debug!("Using config: {config:?}");
    Ok(config)
}

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use lootsweeper_core::{
    CueSink, GameConfig, Muted, Profile, RevealOutcome, Session, TreasureCatalog, announce_start, dispatch,
};

use crate::command::Command;

mod command;
mod config;
mod render;
mod sound;

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper with buried treasure", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// TOML file with the game config, defaults to the classic 10x10 board
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: config::Overrides,

    /// Print the final state of every game as JSON
    #[arg(long)]
    json: bool,

    /// Never ring the terminal bell
    #[arg(long)]
    quiet_cues: bool,
}

struct Game {
    config: GameConfig,
    session: Session,
    seed: u64,
}

impl Game {
    fn new(config: GameConfig, seed: u64) -> Result<Self> {
        let session = Session::with_seed(config.clone(), seed).context("Could not start a game")?;
        log::info!("New game, seed: {seed}");
        Ok(Self {
            config,
            session,
            seed,
        })
    }

    fn restart(&mut self, seed: u64) -> Result<()> {
        *self = Self::new(self.config.clone(), seed)?;
        Ok(())
    }

    fn draw(&self, out: &mut impl Write) -> io::Result<()> {
        render::draw(out, &self.session.snapshot(), &self.config.treasures)
    }
}

/// Prints the board after a reveal. The final snapshot and the claim prompt only follow the finishing move.
fn report(out: &mut impl Write, outcome: &RevealOutcome<'_>, catalog: &TreasureCatalog, json: bool) -> Result<()> {
    if !outcome.has_update() {
        writeln!(out, "Nothing to reveal there")?;
    }
    render::draw(out, &outcome.snapshot, catalog)?;

    if outcome.ended_game() {
        if json {
            let snapshot = serde_json::to_string(&outcome.snapshot).context("Could not serialize the board")?;
            writeln!(out, "{snapshot}")?;
        }
        writeln!(out, "Type `claim` to bank {} points or `new` to play again", outcome.snapshot.score)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let config = config::load(args.config.as_deref(), &args.overrides)?;
    let mut game = Game::new(config, args.seed.unwrap_or_else(rand::random))?;
    let mut cues: Box<dyn CueSink> = if args.quiet_cues {
        Box::new(Muted)
    } else {
        Box::new(sound::Bell::new(io::stderr()))
    };
    let mut profile = Profile::default();
    announce_start(cues.as_mut());

    let mut out = io::stdout().lock();
    writeln!(out, "{}", command::HELP)?;
    game.draw(&mut out)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Could not read command")?;
        let command = match command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(out, "error: {err}")?;
                continue;
            }
        };

        match command {
            Command::Reveal(coords) => match game.session.reveal_cell(coords) {
                Ok(outcome) => {
                    dispatch(cues.as_mut(), &outcome);
                    report(&mut out, &outcome, &game.config.treasures, args.json)?;
                }
                Err(err) => writeln!(out, "error: {err}")?,
            },
            Command::Claim => match game.session.claim() {
                Ok(claim) => {
                    profile.credit(claim);
                    writeln!(out, "Claimed {} points, XP is now {}", claim.score, profile.xp)?;
                }
                Err(err) => writeln!(out, "error: {err}")?,
            },
            Command::New => {
                game.restart(rand::random())?;
                announce_start(cues.as_mut());
                game.draw(&mut out)?;
            }
            Command::Help => writeln!(out, "{}", command::HELP)?,
            Command::Quit => break,
        }
    }

    log::debug!("Last seed: {}", game.seed);
    writeln!(
        out,
        "XP: {}  Games: {}  Wins: {}  Best: {}",
        profile.xp, profile.games, profile.wins, profile.best_score
    )?;
    Ok(())
}

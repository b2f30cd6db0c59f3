use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::*;

/// Audio/visual cue for the presentation layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cue {
    Explosion,
    Treasure,
    GameOver,
    /// Background music loops while a game is in progress.
    StartMusic,
    /// Background music ends with the game, won or lost.
    StopMusic,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Could not play {cue:?}: {reason}")]
pub struct CueError {
    pub cue: Cue,
    pub reason: String,
}

/// Receiver for cues. Playback is fire-and-forget, errors are only logged.
pub trait CueSink {
    fn play(&mut self, cue: Cue) -> core::result::Result<(), CueError>;
}

/// Sink that drops every cue.
#[derive(Copy, Clone, Debug, Default)]
pub struct Muted;

impl CueSink for Muted {
    fn play(&mut self, _cue: Cue) -> core::result::Result<(), CueError> {
        Ok(())
    }
}

/// Cues for one reveal, in the order they should play.
pub fn cues_for(outcome: &RevealOutcome<'_>) -> Vec<Cue> {
    let mut cues: Vec<_> = outcome
        .events
        .iter()
        .filter_map(|event| match event {
            RevealEvent::MineHit { .. } => Some(Cue::Explosion),
            RevealEvent::TreasureFound { .. } => Some(Cue::Treasure),
            RevealEvent::SafeZero { .. } | RevealEvent::SafeNumbered { .. } => None,
        })
        .collect();

    if outcome.ended_game() {
        if outcome.snapshot.status == GameStatus::Lost {
            cues.push(Cue::GameOver);
        }
        cues.push(Cue::StopMusic);
    }

    cues
}

/// Plays every cue for `outcome` on `sink`. Failures never reach the game.
pub fn dispatch<S: CueSink + ?Sized>(sink: &mut S, outcome: &RevealOutcome<'_>) {
    for cue in cues_for(outcome) {
        play(sink, cue);
    }
}

/// Starts the background music for a freshly started session.
pub fn announce_start<S: CueSink + ?Sized>(sink: &mut S) {
    play(sink, Cue::StartMusic);
}

fn play<S: CueSink + ?Sized>(sink: &mut S, cue: Cue) {
    if let Err(err) = sink.play(cue) {
        log::warn!("{err}");
    }
}

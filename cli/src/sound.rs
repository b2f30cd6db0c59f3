use std::io::Write;

use lootsweeper_core::{Cue, CueError, CueSink};

const BELL: &[u8] = b"\x07";

/// Terminal "audio": rings the bell for explosions and the end of the game.
pub struct Bell<W: Write> {
    out: W,
}

impl<W: Write> Bell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> CueSink for Bell<W> {
    fn play(&mut self, cue: Cue) -> Result<(), CueError> {
        log::info!("cue: {cue:?}");
        let rings = match cue {
            Cue::Explosion | Cue::GameOver => 1,
            Cue::Treasure | Cue::StartMusic | Cue::StopMusic => 0,
        };

        for _ in 0..rings {
            self.out
                .write_all(BELL)
                .and_then(|()| self.out.flush())
                .map_err(|err| CueError {
                    cue,
                    reason: err.to_string(),
                })?;
        }
        Ok(())
    }
}

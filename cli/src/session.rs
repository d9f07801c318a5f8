use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use minesweep_core::{Board, Coord, Coord2, GameError, GameStatus, RevealOutcome, Snapshot};

use crate::render;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Parses a click given as `x y` or `x,y`.
pub fn parse_click(line: &str) -> Result<Coord2> {
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty());

    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        bail!("expected a click as `x y`, got {line:?}");
    };
    let x: Coord = x.parse().with_context(|| format!("bad x coordinate {x:?}"))?;
    let y: Coord = y.parse().with_context(|| format!("bad y coordinate {y:?}"))?;

    Ok((x, y))
}

/// Feeds clicks from the player into a board until the game ends or input runs out.
pub struct Session {
    board: Board,
    format: OutputFormat,
}

impl Session {
    pub fn new(board: Board, format: OutputFormat) -> Self {
        Self { board, format }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn play(&mut self, input: impl BufRead, mut out: impl Write) -> Result<GameStatus> {
        self.render(&mut out)?;

        for line in input.lines() {
            let line = line.context("failed to read click")?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let coords = match parse_click(line) {
                Ok(coords) => coords,
                Err(err) => {
                    writeln!(out, "{err:#}")?;
                    continue;
                }
            };

            let outcome = match self.board.reveal(coords) {
                Ok(outcome) => outcome,
                Err(GameError::InvalidCoords) => {
                    writeln!(
                        out,
                        "({}, {}) is outside the {}x{} board",
                        coords.0,
                        coords.1,
                        self.board.width(),
                        self.board.height()
                    )?;
                    continue;
                }
                Err(err) => return Err(err.into()),
            };
            log::debug!("Click at {:?}: {:?}", coords, outcome);

            if !outcome.has_update() {
                continue;
            }

            if outcome == RevealOutcome::HitMine {
                self.board.reveal_all_mines();
            }
            self.render(&mut out)?;

            match outcome {
                RevealOutcome::HitMine => writeln!(out, "Game Over!")?,
                RevealOutcome::Won => writeln!(out, "Congratulations, You Won!")?,
                RevealOutcome::NoChange | RevealOutcome::Revealed => {}
            }

            if self.board.is_finished() {
                break;
            }
        }

        Ok(self.board.status())
    }

    fn render(&self, out: &mut impl Write) -> Result<()> {
        let snapshot = Snapshot::from_board(&self.board);
        match self.format {
            OutputFormat::Text => render::render_text(&snapshot, out)?,
            OutputFormat::Json => render::render_json(&snapshot, out)?,
        }
        Ok(())
    }
}

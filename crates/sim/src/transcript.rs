//! Transcript - line-delimited JSON record of a session
//!
//! One JSON object per line, discriminated by `type`:
//! - `start`: settings and the initial board
//! - `move`: the swap, its effects in emission order, and the resulting board
//! - `end`: final tallies

use std::io::Write;

use match3_core::{Board, BoardSnapshot, MoveResult};
use match3_types::{Effect, Position};
use serde::Serialize;

use crate::config::SimConfig;
use crate::error::SimError;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Record<'a, T> {
    Start {
        config: &'a SimConfig,
        board: BoardSnapshot<T>,
    },
    Move {
        seq: u32,
        first: Position,
        second: Position,
        effects: &'a [Effect<T>],
        board: BoardSnapshot<T>,
    },
    End {
        moves: u32,
        matches: u64,
        cascades: u64,
        stuck: bool,
    },
}

/// Final tallies written as the `end` record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub moves: u32,
    pub matches: u64,
    pub cascades: u64,
    pub stuck: bool,
}

pub struct TranscriptWriter<W: Write> {
    out: W,
    seq: u32,
}

impl<W: Write> TranscriptWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, seq: 0 }
    }

    pub fn write_start<T>(&mut self, config: &SimConfig, board: &Board<T>) -> Result<(), SimError>
    where
        T: Clone + Serialize,
    {
        self.write(&Record::Start {
            config,
            board: BoardSnapshot::from(board),
        })
    }

    pub fn write_move<T>(
        &mut self,
        first: Position,
        second: Position,
        result: &MoveResult<T>,
    ) -> Result<(), SimError>
    where
        T: Clone + Serialize,
    {
        self.seq += 1;
        let seq = self.seq;
        self.write(&Record::Move {
            seq,
            first,
            second,
            effects: &result.effects,
            board: BoardSnapshot::from(&result.board),
        })
    }

    pub fn write_end(&mut self, summary: Summary) -> Result<(), SimError> {
        self.write::<()>(&Record::End {
            moves: summary.moves,
            matches: summary.matches,
            cascades: summary.cascades,
            stuck: summary.stuck,
        })?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write<T: Serialize>(&mut self, record: &Record<'_, T>) -> Result<(), SimError> {
        let line = serde_json::to_string(record)?;
        self.out.write_all(line.as_bytes())?;
        self.out.write_all(b"\n")?;
        Ok(())
    }
}

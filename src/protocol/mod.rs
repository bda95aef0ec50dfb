//! Line protocol spoken with an external game manager.
//!
//! ## Message flow
//!
//! ```text
//! agent   -> Othello AI
//! manager -> 1,4,0,1,1            color,limit,minimax,caching,ordering
//! manager -> SCORE 2 2
//! manager -> [[0, 0, 0, 0], [0, 2, 1, 0], [0, 1, 2, 0], [0, 0, 0, 0]]
//! agent   -> 0 1                  column row
//! ...
//! manager -> FINAL 10 6
//! ```
//!
//! Only protocol lines go to the writer. Everything else is logged.
//!
//! ## Usage
//!
//! ```rust
//! use rust_othello::protocol::Session;
//!
//! let input = "1,2,0,0,0\nSCORE 2 2\n[[0,0,0,0],[0,2,1,0],[0,1,2,0],[0,0,0,0]]\nFINAL 3 1\n";
//! let mut output = Vec::new();
//! let summary = Session::new(input.as_bytes(), &mut output).run().unwrap();
//!
//! assert_eq!(summary.moves, 1);
//! assert_eq!(String::from_utf8(output).unwrap(), "Othello AI\n0 1\n");
//! ```

use std::io::{BufRead, Write};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::core::{Board, Color};
use crate::error::{OthelloError, Result};
use crate::search::{depth_limit_from_wire, Algorithm, SearchConfig, Searcher};

/// Name announced when none is configured.
pub const DEFAULT_NAME: &str = "Othello AI";

// =============================================================================
// Messages
// =============================================================================

/// Settings sent by the manager after the agent's name.
#[derive(Clone, Debug, PartialEq)]
pub struct Handshake {
    pub color: Color,
    pub config: SearchConfig,
}

impl Handshake {
    /// Parse `color,limit,minimax,caching,ordering` on top of `base`.
    ///
    /// Settings the manager does not send (evaluator, table size) come from
    /// `base`.
    pub fn parse(line: &str, base: &SearchConfig) -> Result<Self> {
        let fields: Vec<&str> = line.trim().split(',').map(str::trim).collect();
        let &[color, limit, minimax, caching, ordering] = fields.as_slice() else {
            return Err(OthelloError::protocol("expected five comma-separated settings", line));
        };

        let int = |field: &str| {
            field
                .parse::<i64>()
                .map_err(|_| OthelloError::protocol(format!("{field:?} is not an integer"), line))
        };

        let color = u8::try_from(int(color)?)
            .ok()
            .and_then(Color::from_code)
            .ok_or_else(|| OthelloError::protocol("color must be 1 or 2", line))?;
        let depth_limit =
            depth_limit_from_wire(int(limit)?).map_err(|err| OthelloError::protocol(err.to_string(), line))?;
        let algorithm = if int(minimax)? == 1 {
            Algorithm::Minimax
        } else {
            Algorithm::AlphaBeta
        };

        let config = base
            .clone()
            .with_algorithm(algorithm)
            .with_depth_limit(depth_limit)
            .with_caching(int(caching)? == 1)
            .with_ordering(int(ordering)? == 1);

        Ok(Self { color, config })
    }
}

/// A status line from the manager.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// Game in progress; a board follows and a move is expected.
    Score { dark: u32, light: u32 },
    /// Game over.
    Final { dark: u32, light: u32 },
}

impl Status {
    pub fn parse(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace();
        let (Some(tag), Some(dark), Some(light), None) = (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(OthelloError::protocol("expected \"SCORE|FINAL <dark> <light>\"", line));
        };

        let score = |field: &str| {
            field
                .parse::<u32>()
                .map_err(|_| OthelloError::protocol(format!("bad score {field:?}"), line))
        };
        let (dark, light) = (score(dark)?, score(light)?);

        match tag {
            "SCORE" => Ok(Status::Score { dark, light }),
            "FINAL" => Ok(Status::Final { dark, light }),
            other => Err(OthelloError::protocol(format!("unknown status {other:?}"), line)),
        }
    }
}

// =============================================================================
// Session
// =============================================================================

/// What happened during a session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub color: Color,
    /// Moves sent to the manager.
    pub moves: usize,
    /// `(dark, light)` from the `FINAL` line, `None` if input ended first.
    pub final_score: Option<(u32, u32)>,
}

/// One game against the manager over a reader/writer pair.
pub struct Session<R, W> {
    reader: R,
    writer: W,
    name: String,
    base: SearchConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            name: DEFAULT_NAME.to_string(),
            base: SearchConfig::default(),
        }
    }

    /// Name announced on the first line.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Defaults for the settings the handshake does not carry.
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.base = config;
        self
    }

    /// Run the session until `FINAL` or end of input.
    pub fn run(&mut self) -> Result<SessionSummary> {
        let name = self.name.clone();
        self.send(&name)?;

        let Some(line) = self.read_line()? else {
            return Err(OthelloError::protocol("input ended before the handshake", ""));
        };
        let handshake = Handshake::parse(&line, &self.base)?;
        log_settings(&handshake);

        let color = handshake.color;
        let mut searcher = Searcher::new(handshake.config)?;
        let mut summary = SessionSummary {
            color,
            moves: 0,
            final_score: None,
        };

        while let Some(line) = self.read_line()? {
            match Status::parse(&line)? {
                Status::Final { dark, light } => {
                    info!("game over: dark {dark}, light {light}");
                    summary.final_score = Some((dark, light));
                    break;
                }
                Status::Score { dark, light } => {
                    debug!("score: dark {dark}, light {light}");
                    let Some(literal) = self.read_line()? else {
                        return Err(OthelloError::protocol("input ended before the board", line));
                    };
                    let board = Board::from_literal(&literal)
                        .map_err(|err| OthelloError::protocol(err.to_string(), literal.as_str()))?;

                    let result = searcher.search(&board, color);
                    let Some(mv) = result.best_move else {
                        return Err(OthelloError::protocol(format!("no legal move for {color}"), literal));
                    };
                    info!("{color} plays {mv} (value {}, {})", result.value, result.stats);
                    self.send(&mv.to_string())?;
                    summary.moves += 1;
                }
            }
        }

        Ok(summary)
    }

    // Next non-blank line without its terminator, `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                return Ok(Some(trimmed.to_string()));
            }
        }
    }

    fn send(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{line}")?;
        self.writer.flush()?;
        Ok(())
    }
}

fn log_settings(handshake: &Handshake) {
    let config = &handshake.config;
    info!("playing {}", handshake.color);
    info!("running {}", config.algorithm);
    info!("state caching is {}", if config.caching { "on" } else { "off" });
    info!("node ordering is {}", if config.ordering { "on" } else { "off" });
    match config.depth_limit {
        Some(limit) => info!("depth limit is {limit}"),
        None => info!("depth limit is off"),
    }
    if config.algorithm == Algorithm::Minimax && config.ordering {
        warn!("node ordering has no effect on minimax");
    }
}

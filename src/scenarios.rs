//! Built-in scenarios and the serializable scenario format.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::BoardError;
use crate::coord::Coord;
use crate::game::Game;
use crate::pieces::PieceKind;

/// One attacking piece in a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub kind: PieceKind,
    pub at: Coord,
}

/// A complete position setup: the defending king plus the attacking pieces.
///
/// Round-trips through JSON, so scenarios can be shipped as files and fed to
/// the `evaluate` tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioSpec {
    pub name: String,
    pub king: Coord,
    pub attackers: Vec<Placement>,
}

/// Structured errors from scenario construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    King {
        at: Coord,
        source: BoardError,
    },
    Attacker {
        kind: PieceKind,
        at: Coord,
        source: BoardError,
    },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::King { at, source } => {
                write!(
                    f,
                    "cannot place defending king at ({}, {}): {source}",
                    at.x, at.y
                )
            }
            SetupError::Attacker { kind, at, source } => {
                write!(
                    f,
                    "cannot place attacking {kind:?} at ({}, {}): {source}",
                    at.x, at.y
                )
            }
        }
    }
}

impl std::error::Error for SetupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SetupError::King { source, .. } | SetupError::Attacker { source, .. } => Some(source),
        }
    }
}

impl ScenarioSpec {
    /// Builds the game: king first, then attackers in listed order.
    pub fn build(&self) -> Result<Game, SetupError> {
        let mut game = Game::new();
        game.set_defending_king(self.king)
            .map_err(|source| SetupError::King {
                at: self.king,
                source,
            })?;
        for p in &self.attackers {
            game.add_attacker(p.at, p.kind)
                .map_err(|source| SetupError::Attacker {
                    kind: p.kind,
                    at: p.at,
                    source,
                })?;
        }
        Ok(game)
    }
}

fn spec(name: &str, king: (i32, i32), attackers: &[(PieceKind, i32, i32)]) -> ScenarioSpec {
    ScenarioSpec {
        name: name.to_string(),
        king: Coord::new(king.0, king.1),
        attackers: attackers
            .iter()
            .map(|&(kind, x, y)| Placement {
                kind,
                at: Coord::new(x, y),
            })
            .collect(),
    }
}

/// Queen, rook, bishop and knight cornering a king on b2. A checkmate.
pub fn reference() -> ScenarioSpec {
    use PieceKind::*;
    spec(
        "reference",
        (1, 1),
        &[(Queen, 1, 2), (Rook, 1, 0), (Bishop, 5, 5), (Knight, 4, 4)],
    )
}

/// Two rooks and a queen sealing the corner. A checkmate.
pub fn corner_mate() -> ScenarioSpec {
    use PieceKind::*;
    spec(
        "corner_mate",
        (0, 0),
        &[(Rook, 0, 7), (Rook, 7, 0), (Queen, 7, 1)],
    )
}

/// A single adjacent queen: check, but the king slips away. Not a checkmate.
pub fn lone_queen() -> ScenarioSpec {
    use PieceKind::*;
    spec("lone_queen", (1, 1), &[(Queen, 1, 2)])
}

pub fn available_names() -> Vec<&'static str> {
    vec!["reference", "corner_mate", "lone_queen"]
}

pub fn by_name(name: &str) -> Option<ScenarioSpec> {
    match name {
        "reference" => Some(reference()),
        "corner_mate" => Some(corner_mate()),
        "lone_queen" => Some(lone_queen()),
        _ => None,
    }
}

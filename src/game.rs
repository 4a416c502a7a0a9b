use std::fmt;

use rustc_hash::FxHashSet;

use crate::board::{Board, BoardError};
use crate::coord::Coord;
use crate::pieces::{Piece, PieceKind};
use crate::rules::threat;

/// Errors from evaluation queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// `is_check` / `has_escape` / `is_checkmate` called before
    /// [`Game::set_defending_king`].
    NoDefendingKing,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::NoDefendingKing => write!(f, "no defending king configured"),
        }
    }
}

impl std::error::Error for EvalError {}

/// One evaluation's worth of state: the board, the defending king's square, and
/// the attacking pieces' squares in placement order.
///
/// Setup is monotonic (place pieces, optionally remove attackers); queries are
/// pure reads of the current snapshot. Every listed attacker square holds a
/// piece: [`Game::remove_attacker`] keeps board and list in step, so the
/// invariant holds by construction.
#[derive(Debug, Clone, Default)]
pub struct Game {
    board: Board,
    defending_king: Option<Coord>,
    attackers: Vec<Coord>,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            defending_king: None,
            attackers: Vec::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn defending_king(&self) -> Option<Coord> {
        self.defending_king
    }

    #[inline]
    pub fn attackers(&self) -> &[Coord] {
        &self.attackers
    }

    /// Places the defending king at `pos` and records its square.
    ///
    /// On failure the board and the recorded king square are unchanged.
    pub fn set_defending_king(&mut self, pos: Coord) -> Result<(), BoardError> {
        self.board.place(pos, Piece::new(PieceKind::King))?;
        self.defending_king = Some(pos);
        Ok(())
    }

    /// Places an attacking piece at `pos` and appends its square to the
    /// attacker list.
    pub fn add_attacker(&mut self, pos: Coord, kind: PieceKind) -> Result<(), BoardError> {
        self.board.place(pos, Piece::new(kind))?;
        self.attackers.push(pos);
        Ok(())
    }

    /// Removes the attacker at `pos` from the board and the attacker list.
    ///
    /// `Ok(None)` if the square was already empty.
    pub fn remove_attacker(&mut self, pos: Coord) -> Result<Option<Piece>, BoardError> {
        let taken = self.board.remove(pos)?;
        if taken.is_some() {
            self.attackers.retain(|&a| a != pos);
        }
        Ok(taken)
    }

    /// True iff any attacker's movement set contains `target`.
    pub fn is_threatened(&self, target: Coord) -> bool {
        threat::is_threatened(&self.board, &self.attackers, target)
    }

    /// Is the defending king's square threatened?
    pub fn is_check(&self) -> Result<bool, EvalError> {
        let king = self.defending_king.ok_or(EvalError::NoDefendingKing)?;
        Ok(self.is_threatened(king))
    }

    /// Does the defending king have a reachable, unthreatened destination?
    pub fn has_escape(&self) -> Result<bool, EvalError> {
        let king = self.defending_king.ok_or(EvalError::NoDefendingKing)?;
        Ok(threat::has_escape(&self.board, &self.attackers, king))
    }

    /// Checkmate: in check with no escape.
    pub fn is_checkmate(&self) -> Result<bool, EvalError> {
        let king = self.defending_king.ok_or(EvalError::NoDefendingKing)?;
        Ok(threat::is_checkmate(&self.board, &self.attackers, king))
    }

    /// The union of all attacker movement sets.
    pub fn threat_map(&self) -> FxHashSet<Coord> {
        threat::threat_map(&self.board, &self.attackers)
    }
}

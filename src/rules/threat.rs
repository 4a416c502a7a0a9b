use rustc_hash::FxHashSet;

use crate::board::Board;
use crate::coord::Coord;
use crate::pieces::PieceKind;

use super::moves::moves_from;

/// True iff any attacker's movement set contains `target`.
///
/// `attackers` lists the squares of the attacking pieces; each one is looked up
/// on the board for its kind. The scan stops at the first match.
pub fn is_threatened(board: &Board, attackers: &[Coord], target: Coord) -> bool {
    attackers.iter().any(|&from| match board.occupant(from) {
        Some(piece) => moves_from(piece.kind, from).contains(&target),
        None => false,
    })
}

/// True iff the king at `king` has some destination that is reachable (vacant,
/// or occupied by a non-king piece) and not threatened.
///
/// Existence check: returns on the first qualifying square.
pub fn has_escape(board: &Board, attackers: &[Coord], king: Coord) -> bool {
    moves_from(PieceKind::King, king).into_iter().any(|dst| {
        let reachable = match board.occupant(dst) {
            None => true,
            Some(piece) => piece.kind != PieceKind::King,
        };
        reachable && !is_threatened(board, attackers, dst)
    })
}

/// Checkmate: the king's square is threatened and no escape exists.
pub fn is_checkmate(board: &Board, attackers: &[Coord], king: Coord) -> bool {
    is_threatened(board, attackers, king) && !has_escape(board, attackers, king)
}

/// The union of all attacker movement sets.
pub fn threat_map(board: &Board, attackers: &[Coord]) -> FxHashSet<Coord> {
    let mut out = FxHashSet::default();
    for &from in attackers {
        if let Some(piece) = board.occupant(from) {
            out.extend(moves_from(piece.kind, from));
        }
    }
    out
}

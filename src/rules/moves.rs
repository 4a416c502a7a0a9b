use crate::coord::{Coord, BOARD_SIZE};
use crate::pieces::{PieceKind, KING_STEPS, KNIGHT_DELTAS};

/// The movement set of a piece kind from `origin`: every destination square it
/// can reach, filtered to the board.
///
/// Candidates are generated first (possibly off the board) and discarded
/// afterwards. Occupancy plays no role here: a sliding ray runs to the board
/// edge regardless of intervening pieces.
pub fn moves_from(kind: PieceKind, origin: Coord) -> Vec<Coord> {
    let mut out = match kind {
        PieceKind::King => KING_STEPS.iter().map(|&d| origin + d).collect(),
        PieceKind::Knight => KNIGHT_DELTAS.iter().map(|&d| origin + d).collect(),
        PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen => {
            ray_candidates(origin, kind.slide_dirs())
        }
    };
    out.retain(|c| c.is_valid());
    out
}

fn ray_candidates(origin: Coord, dirs: &[Coord]) -> Vec<Coord> {
    let mut out = Vec::with_capacity(dirs.len() * (BOARD_SIZE as usize - 1));
    for &dir in dirs {
        for step in 1..BOARD_SIZE {
            out.push(origin + dir * step);
        }
    }
    out
}

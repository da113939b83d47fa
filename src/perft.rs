use crate::board::{Board, Color, Move};
use crate::movegen::moves_for;
use rayon::prelude::*;

// Pseudo-legal perft using play/unplay on one board (no cloning).
// A position where a king has been captured is a leaf and is not expanded.
pub fn perft(board: &mut Board, side: Color, depth: u32) -> u64 {
    if depth == 0 || board.is_terminal() { return 1; }
    let mut nodes = 0u64;
    for mv in moves_for(board, side) {
        let undo = board.play(mv);
        nodes += perft(board, side.opposite(), depth - 1);
        board.unplay(undo);
    }
    nodes
}

/// Per-root-move counts in generation order, with their total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Divide {
    pub counts: Vec<(Move, u64)>,
    /// Always equal to `perft` at the same depth. A depth-zero or terminal
    /// root has no split and counts as a single node.
    pub total: u64,
}

pub fn divide(board: &mut Board, side: Color, depth: u32) -> Divide {
    if depth == 0 || board.is_terminal() {
        return Divide { counts: Vec::new(), total: 1 };
    }
    let mut counts = Vec::new();
    for mv in moves_for(board, side) {
        let undo = board.play(mv);
        counts.push((mv, perft(board, side.opposite(), depth - 1)));
        board.unplay(undo);
    }
    let total: u64 = counts.iter().map(|(_, n)| n).sum();
    Divide { counts, total }
}

/// Root-split perft: each root move is counted on its own board copy.
pub fn perft_parallel(board: &Board, side: Color, depth: u32) -> u64 {
    if depth == 0 || board.is_terminal() { return 1; }
    let root_moves = moves_for(board, side);
    root_moves.par_iter().map(|&mv| {
        let mut b = board.clone();
        b.play(mv);
        perft(&mut b, side.opposite(), depth - 1)
    }).sum()
}

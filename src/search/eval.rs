use crate::board::{Board, PieceKind};
use crate::movegen::mobility;

/// Piece values in pawns. The king's large finite value stands in for a
/// game-over signal inside the heuristic.
pub const PAWN: i32 = 1;
pub const KNIGHT: i32 = 3;
pub const BISHOP: i32 = 3;
pub const ROOK: i32 = 5;
pub const QUEEN: i32 = 9;
pub const KING: i32 = 100;

/// Utilities are accumulated in tenths of a pawn so the fractional mobility
/// weights stay exact.
pub const TENTHS_PER_PAWN: i32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Opening,
    Midgame,
    Endgame,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvalParams {
    /// Indexed in `PieceKind` declaration order.
    pub values: [i32; 6],
    /// Piece counts at or below this are endgame.
    pub endgame_max_pieces: usize,
    /// Piece counts at or below this (and above the endgame bound) are midgame.
    pub midgame_max_pieces: usize,
    pub opening_mobility_tenths: i32,
    pub midgame_mobility_tenths: i32,
    pub endgame_mobility_tenths: i32,
}

impl Default for EvalParams {
    fn default() -> Self {
        Self {
            values: [PAWN, KNIGHT, BISHOP, ROOK, QUEEN, KING],
            endgame_max_pieces: 11,
            midgame_max_pieces: 22,
            opening_mobility_tenths: 1,
            midgame_mobility_tenths: 3,
            endgame_mobility_tenths: 6,
        }
    }
}

impl EvalParams {
    pub fn value(&self, kind: PieceKind) -> i32 {
        self.values[kind as usize]
    }

    pub fn phase(&self, piece_count: usize) -> Phase {
        if piece_count <= self.endgame_max_pieces { Phase::Endgame }
        else if piece_count <= self.midgame_max_pieces { Phase::Midgame }
        else { Phase::Opening }
    }

    pub fn mobility_tenths(&self, phase: Phase) -> i32 {
        match phase {
            Phase::Opening => self.opening_mobility_tenths,
            Phase::Midgame => self.midgame_mobility_tenths,
            Phase::Endgame => self.endgame_mobility_tenths,
        }
    }
}

/// Exact utility in tenths of a pawn; positive favours White.
pub fn evaluate_tenths(board: &Board, params: &EvalParams) -> i32 {
    let weight = params.mobility_tenths(params.phase(board.count_pieces()));
    let mut material = 0i32;
    let mut mob = 0i32;
    for (pos, piece) in board.pieces() {
        let sign = piece.color.sign();
        material += sign * params.value(piece.kind);
        if piece.kind != PieceKind::King {
            mob += sign * mobility(board, pos) as i32;
        }
    }
    material * TENTHS_PER_PAWN + weight * mob
}

/// Utility in whole pawns, rounded half away from zero.
pub fn evaluate(board: &Board, params: &EvalParams) -> i32 {
    round_tenths(evaluate_tenths(board, params))
}

pub fn round_tenths(tenths: i32) -> i32 {
    let half = TENTHS_PER_PAWN / 2;
    if tenths >= 0 { (tenths + half) / TENTHS_PER_PAWN } else { -((-tenths + half) / TENTHS_PER_PAWN) }
}

/// Material only, in whole pawns.
pub fn material(board: &Board, params: &EvalParams) -> i32 {
    board.pieces().map(|(_, p)| p.color.sign() * params.value(p.kind)).sum()
}

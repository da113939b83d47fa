//! Pseudo-legal move generation. Nothing here checks whether the mover's own
//! king is left capturable.

use crate::board::{Board, Color, Move, Piece, PieceKind, Position};
use std::collections::BTreeSet;

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1), (-1, -2), (1, -2), (2, -1),
    (2, 1), (1, 2), (-1, 2), (-2, 1),
];

const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1), (0, 1),
    (1, -1), (1, 0), (1, 1),
];

const ORTHOGONAL: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL: [(i32, i32); 4] = [(1, 1), (-1, -1), (1, -1), (-1, 1)];

/// Destinations of the piece on `pos`; empty when the square is empty.
pub fn destinations(board: &Board, pos: Position) -> BTreeSet<Position> {
    let mut out = BTreeSet::new();
    let Some(piece) = board.piece_at(pos) else { return out };
    match piece.kind {
        PieceKind::Pawn => pawn(board, pos, piece.color, &mut out),
        PieceKind::Knight => jumps(board, pos, piece.color, &KNIGHT_OFFSETS, &mut out),
        PieceKind::King => jumps(board, pos, piece.color, &KING_OFFSETS, &mut out),
        PieceKind::Rook => slides(board, pos, piece.color, &ORTHOGONAL, &mut out),
        PieceKind::Bishop => slides(board, pos, piece.color, &DIAGONAL, &mut out),
        PieceKind::Queen => {
            slides(board, pos, piece.color, &ORTHOGONAL, &mut out);
            slides(board, pos, piece.color, &DIAGONAL, &mut out);
        }
    }
    out
}

/// Number of destinations for the piece on `pos`.
pub fn mobility(board: &Board, pos: Position) -> usize {
    destinations(board, pos).len()
}

/// Every pseudo-legal move for `color`: sources in row-major order, then
/// destinations in set order. The search breaks ties on this order.
pub fn moves_for(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    for (from, piece) in board.pieces() {
        if piece.color != color { continue; }
        moves.extend(destinations(board, from).into_iter().map(|to| Move::new(from, to)));
    }
    moves
}

/// True when `mv` appears in the generator output for its source square.
pub fn is_pseudo_legal(board: &Board, mv: Move) -> bool {
    destinations(board, mv.from).contains(&mv.to)
}

fn is_opponent(board: &Board, pos: Position, color: Color) -> bool {
    matches!(board.piece_at(pos), Some(Piece { color: c, .. }) if c != color)
}

fn pawn(board: &Board, pos: Position, color: Color, out: &mut BTreeSet<Position>) {
    let dir = color.sign();
    if let Some(step) = pos.offset(dir, 0) {
        if !board.has_piece(step) {
            out.insert(step);
            if pos.row == color.pawn_rank() {
                if let Some(double) = pos.offset(2 * dir, 0) {
                    if !board.has_piece(double) { out.insert(double); }
                }
            }
        }
    }
    for side in [-1, 1] {
        if let Some(diag) = pos.offset(dir, side) {
            if is_opponent(board, diag, color) { out.insert(diag); }
        }
    }
}

fn jumps(board: &Board, pos: Position, color: Color, offsets: &[(i32, i32)], out: &mut BTreeSet<Position>) {
    for &(dr, dc) in offsets {
        let Some(to) = pos.offset(dr, dc) else { continue };
        match board.piece_at(to) {
            None => { out.insert(to); }
            Some(p) if p.color != color => { out.insert(to); }
            Some(_) => {}
        }
    }
}

/// Walks each direction until the edge or the first occupied square, which
/// is included only when it holds an opposing piece.
fn slides(board: &Board, pos: Position, color: Color, dirs: &[(i32, i32)], out: &mut BTreeSet<Position>) {
    for &(dr, dc) in dirs {
        let mut cur = pos;
        while let Some(next) = cur.offset(dr, dc) {
            match board.piece_at(next) {
                None => { out.insert(next); }
                Some(p) => {
                    if p.color != color { out.insert(next); }
                    break;
                }
            }
            cur = next;
        }
    }
}

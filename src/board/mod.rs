//! Board state: an 8x8 grid of owned optional pieces.
//!
//! Callers bounds-check positions before touching the grid (every `Position`
//! built through [`Position::checked`] or [`Position::offset`] already is).
//! The search explores moves by pairing [`Board::apply_move`] with
//! [`Board::undo_move`] instead of cloning the grid.

mod piece;
mod square;

pub use piece::{Color, Piece, PieceKind};
pub use square::{in_bounds, Move, Position, BOARD_SIZE};

use crate::error::ParseError;
use std::fmt;

pub const START_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

/// Everything needed to take back a move made with [`Board::play`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Undo {
    pub mv: Move,
    pub moved: Option<Piece>,
    pub captured: Option<Piece>,
    pub promoted: bool,
}

impl Default for Board {
    fn default() -> Self { Self::startpos() }
}

impl Board {
    pub fn empty() -> Self {
        Self { cells: [[None; BOARD_SIZE]; BOARD_SIZE] }
    }

    pub fn startpos() -> Self {
        let mut board = Self::empty();
        let back = [
            PieceKind::Rook, PieceKind::Knight, PieceKind::Bishop, PieceKind::Queen,
            PieceKind::King, PieceKind::Bishop, PieceKind::Knight, PieceKind::Rook,
        ];
        for (col, &kind) in back.iter().enumerate() {
            board.place(Position::new(0, col), Piece::new(Color::White, kind));
            board.place(Position::new(1, col), Piece::new(Color::White, PieceKind::Pawn));
            board.place(Position::new(6, col), Piece::new(Color::Black, PieceKind::Pawn));
            board.place(Position::new(7, col), Piece::new(Color::Black, kind));
        }
        board
    }

    /// Parses the piece-placement field of a FEN string (rank 8 first).
    pub fn from_placement(placement: &str) -> Result<Self, ParseError> {
        let field = placement.split_whitespace().next().unwrap_or("");
        let ranks: Vec<&str> = field.split('/').collect();
        if ranks.len() != BOARD_SIZE {
            return Err(ParseError::Placement(format!("expected 8 ranks, found {}", ranks.len())));
        }
        let mut board = Self::empty();
        for (i, rank) in ranks.iter().enumerate() {
            let row = BOARD_SIZE - 1 - i;
            let mut col = 0usize;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if skip == 0 || skip > 8 {
                        return Err(ParseError::Placement(format!("bad empty-run '{c}' on rank {}", row + 1)));
                    }
                    col += skip as usize;
                } else {
                    let piece = Piece::from_symbol(c)
                        .ok_or_else(|| ParseError::Placement(format!("unknown piece '{c}'")))?;
                    if col >= BOARD_SIZE {
                        return Err(ParseError::Placement(format!("rank {} overflows", row + 1)));
                    }
                    board.place(Position::new(row, col), piece);
                    col += 1;
                }
                if col > BOARD_SIZE {
                    return Err(ParseError::Placement(format!("rank {} overflows", row + 1)));
                }
            }
            if col != BOARD_SIZE {
                return Err(ParseError::Placement(format!("rank {} has {} squares", row + 1, col)));
            }
        }
        Ok(board)
    }

    /// Inverse of [`Board::from_placement`].
    pub fn placement(&self) -> String {
        let mut out = String::with_capacity(72);
        for row in (0..BOARD_SIZE).rev() {
            let mut run = 0;
            for col in 0..BOARD_SIZE {
                match self.cells[row][col] {
                    Some(p) => {
                        if run > 0 { out.push_str(&run.to_string()); run = 0; }
                        out.push(p.symbol());
                    }
                    None => run += 1,
                }
            }
            if run > 0 { out.push_str(&run.to_string()); }
            if row > 0 { out.push('/'); }
        }
        out
    }

    pub fn has_piece(&self, pos: Position) -> bool {
        self.cells[pos.row][pos.col].is_some()
    }

    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.cells[pos.row][pos.col]
    }

    /// Overwrites the cell; whatever was there is dropped.
    pub fn place(&mut self, pos: Position, piece: Piece) {
        self.cells[pos.row][pos.col] = Some(piece);
    }

    pub fn remove(&mut self, pos: Position) -> Option<Piece> {
        self.cells[pos.row][pos.col].take()
    }

    /// Moves the piece on `mv.from` to `mv.to` and returns the previous
    /// occupant of `mv.to`.
    pub fn apply_move(&mut self, mv: Move) -> Option<Piece> {
        let moving = self.remove(mv.from);
        std::mem::replace(&mut self.cells[mv.to.row][mv.to.col], moving)
    }

    /// Restores both endpoints of `mv` to the given occupants.
    pub fn undo_move(&mut self, mv: Move, moved: Option<Piece>, captured: Option<Piece>) {
        self.cells[mv.from.row][mv.from.col] = moved;
        self.cells[mv.to.row][mv.to.col] = captured;
    }

    /// True when `piece` arriving on `to` is a pawn reaching its far rank.
    pub fn promotes(piece: Piece, to: Position) -> bool {
        piece.kind == PieceKind::Pawn && to.row == piece.color.promotion_rank()
    }

    /// Replaces the piece on `pos` with one of `kind`, keeping its color.
    pub fn promote(&mut self, pos: Position, kind: PieceKind) {
        if let Some(p) = self.piece_at(pos) {
            self.place(pos, Piece::new(p.color, kind));
        }
    }

    /// Applies `mv` and performs promotion to `promotion` if a pawn reaches
    /// its far rank. Returns the record [`Board::unplay`] needs.
    pub fn play_with(&mut self, mv: Move, promotion: PieceKind) -> Undo {
        let moved = self.piece_at(mv.from);
        let captured = self.apply_move(mv);
        let promoted = match moved {
            Some(p) if Self::promotes(p, mv.to) => {
                self.promote(mv.to, promotion);
                true
            }
            _ => false,
        };
        Undo { mv, moved, captured, promoted }
    }

    /// [`Board::play_with`] promoting to a queen, as the engine always does.
    pub fn play(&mut self, mv: Move) -> Undo {
        self.play_with(mv, PieceKind::Queen)
    }

    /// Takes back a [`Board::play`]. A promoted piece is discarded and the
    /// pawn put back on its source square.
    pub fn unplay(&mut self, undo: Undo) {
        self.undo_move(undo.mv, undo.moved, undo.captured);
    }

    pub fn count_pieces(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    pub fn king_count(&self) -> usize {
        self.cells.iter().flatten()
            .filter(|c| matches!(c, Some(p) if p.kind == PieceKind::King))
            .count()
    }

    /// A king has been captured.
    pub fn is_terminal(&self) -> bool {
        self.king_count() < 2
    }

    /// Side whose king is still standing once the board is terminal. None
    /// while both kings stand, and also when no king is left at all.
    pub fn winner(&self) -> Option<Color> {
        if !self.is_terminal() { return None; }
        self.pieces()
            .find(|(_, p)| p.kind == PieceKind::King)
            .map(|(_, p)| p.color)
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| self.piece_at(pos).map(|p| (pos, p)))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..BOARD_SIZE).rev() {
            write!(f, "{} ", row + 1)?;
            for col in 0..BOARD_SIZE {
                let c = self.cells[row][col].map_or('.', |p| p.symbol());
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {}", (b'a' + col as u8) as char)?;
        }
        writeln!(f)
    }
}

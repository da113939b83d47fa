use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    pub fn opposite(self) -> Color {
        match self { Color::White => Color::Black, Color::Black => Color::White }
    }

    /// +1 for White, -1 for Black. Used both as pawn direction and as utility sign.
    pub fn sign(self) -> i32 {
        match self { Color::White => 1, Color::Black => -1 }
    }

    /// Row a pawn of this color starts on.
    pub fn pawn_rank(self) -> usize {
        match self { Color::White => 1, Color::Black => 6 }
    }

    /// Far rank where a pawn of this color promotes.
    pub fn promotion_rank(self) -> usize {
        match self { Color::White => 7, Color::Black => 0 }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self { Color::White => write!(f, "white"), Color::Black => write!(f, "black") }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn, PieceKind::Knight, PieceKind::Bishop,
        PieceKind::Rook, PieceKind::Queen, PieceKind::King,
    ];

    /// Lowercase letter used in placement strings and move suffixes.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_letter(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Kinds a pawn may turn into on its far rank.
    pub fn is_promotion_target(self) -> bool {
        matches!(self, PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self { Self { color, kind } }

    /// Placement letter: uppercase for White, lowercase for Black.
    pub fn symbol(self) -> char {
        let c = self.kind.letter();
        if self.color == Color::White { c.to_ascii_uppercase() } else { c }
    }

    pub fn from_symbol(c: char) -> Option<Piece> {
        let kind = PieceKind::from_letter(c)?;
        let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
        Some(Piece::new(color, kind))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_follow_case_convention() {
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                let p = Piece::new(color, kind);
                assert_eq!(Piece::from_symbol(p.symbol()), Some(p));
            }
        }
        assert_eq!(Piece::new(Color::White, PieceKind::Knight).symbol(), 'N');
        assert_eq!(Piece::new(Color::Black, PieceKind::Queen).symbol(), 'q');
        assert_eq!(Piece::from_symbol('x'), None);
    }

    #[test]
    fn ranks_are_color_indexed() {
        assert_eq!(Color::White.pawn_rank(), 1);
        assert_eq!(Color::Black.pawn_rank(), 6);
        assert_eq!(Color::White.promotion_rank(), 7);
        assert_eq!(Color::Black.promotion_rank(), 0);
    }
}

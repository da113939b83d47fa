use crate::board::{Color, Move, PieceKind, Position};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid square '{0}': expected file a-h and rank 1-8")]
    Square(String),
    #[error("invalid move '{0}': expected coordinate notation like e2e4")]
    Move(String),
    #[error("invalid placement: {0}")]
    Placement(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("game is over")]
    GameOver { winner: Option<Color> },
    #[error("it is {to_move}'s turn")]
    NotYourTurn { to_move: Color },
    #[error("no piece on {0}")]
    EmptySquare(Position),
    #[error("piece on {at} belongs to {owner}")]
    WrongColor { at: Position, owner: Color },
    #[error("{0} is not a valid move")]
    IllegalMove(Move),
    #[error("cannot promote to {0:?}")]
    InvalidPromotion(PieceKind),
    #[error("engine has no move available")]
    NoMove,
    #[error(transparent)]
    Parse(#[from] ParseError),
}

// Chess engine core: board state, pseudo-legal move generation and
// alpha-beta minimax over a capture-the-king game.
pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod search;
pub mod selfplay;

pub use board::{Board, Color, Move, Piece, PieceKind, Position};
pub use error::{GameError, ParseError};
pub use search::alphabeta::{choose_move, SearchParams, SearchResult, Searcher, DEFAULT_MAX_DEPTH};

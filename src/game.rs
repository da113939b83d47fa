//! A human-versus-engine game session. Front ends query the board and the
//! destinations of a selected piece through here, submit the user's move,
//! and ask the engine for its reply.

use crate::board::{Board, Color, Move, Piece, PieceKind, Position};
use crate::error::GameError;
use crate::movegen::destinations;
use crate::search::alphabeta::{SearchParams, SearchResult, Searcher};
use log::info;
use std::collections::BTreeSet;

pub struct Game {
    board: Board,
    user_side: Color,
    to_move: Color,
    history: Vec<Move>,
    params: SearchParams,
}

impl Game {
    /// New game from the starting position; White moves first.
    pub fn new(user_side: Color, params: SearchParams) -> Self {
        Self::from_board(Board::startpos(), user_side, Color::White, params)
    }

    pub fn from_board(board: Board, user_side: Color, to_move: Color, params: SearchParams) -> Self {
        Self { board, user_side, to_move, history: Vec::new(), params }
    }

    pub fn board(&self) -> &Board { &self.board }
    pub fn user_side(&self) -> Color { self.user_side }
    pub fn engine_side(&self) -> Color { self.user_side.opposite() }
    pub fn to_move(&self) -> Color { self.to_move }
    pub fn history(&self) -> &[Move] { &self.history }

    pub fn winner(&self) -> Option<Color> { self.board.winner() }
    pub fn is_over(&self) -> bool { self.board.is_terminal() }

    /// True when the engine owes a move, including an opening move when the
    /// user plays Black.
    pub fn engine_to_move(&self) -> bool {
        !self.is_over() && self.to_move == self.engine_side()
    }

    /// Destinations for the user's piece on `pos`.
    pub fn user_destinations(&self, pos: Position) -> Result<BTreeSet<Position>, GameError> {
        self.check_running()?;
        let piece = self.board.piece_at(pos).ok_or(GameError::EmptySquare(pos))?;
        if piece.color != self.user_side {
            return Err(GameError::WrongColor { at: pos, owner: piece.color });
        }
        Ok(destinations(&self.board, pos))
    }

    /// Applies the user's move. `promotion` picks the piece a pawn becomes on
    /// its far rank and defaults to a queen. Returns the captured piece.
    pub fn play_user_move(&mut self, mv: Move, promotion: Option<PieceKind>) -> Result<Option<Piece>, GameError> {
        self.check_running()?;
        if self.to_move != self.user_side {
            return Err(GameError::NotYourTurn { to_move: self.to_move });
        }
        let promotion = promotion.unwrap_or(PieceKind::Queen);
        if !promotion.is_promotion_target() {
            return Err(GameError::InvalidPromotion(promotion));
        }
        if !self.user_destinations(mv.from)?.contains(&mv.to) {
            return Err(GameError::IllegalMove(mv));
        }
        let undo = self.board.play_with(mv, promotion);
        info!("user {} plays {}", self.user_side, mv);
        self.finish_turn(mv);
        Ok(undo.captured)
    }

    /// Searches for and applies the engine's move.
    pub fn play_engine_move(&mut self) -> Result<(Move, SearchResult), GameError> {
        self.check_running()?;
        let side = self.engine_side();
        if self.to_move != side {
            return Err(GameError::NotYourTurn { to_move: self.to_move });
        }
        let mut searcher = Searcher::new(self.params);
        let result = searcher.search(&mut self.board, side);
        let mv = result.best_move.ok_or(GameError::NoMove)?;
        self.board.play(mv);
        info!("engine {} plays {} (utility {}, {} nodes)", side, mv, result.utility, result.nodes);
        self.finish_turn(mv);
        Ok((mv, result))
    }

    fn check_running(&self) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver { winner: self.winner() });
        }
        Ok(())
    }

    fn finish_turn(&mut self, mv: Move) {
        self.history.push(mv);
        self.to_move = self.to_move.opposite();
        if let Some(w) = self.winner() {
            info!("{} captured the king after {} plies", w, self.history.len());
        }
    }
}

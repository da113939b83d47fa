use crate::board::{Board, Color, Move};
use crate::error::GameError;
use crate::movegen::{is_pseudo_legal, moves_for};
use crate::search::alphabeta::{SearchParams, Searcher};
use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

#[derive(Clone, Debug)]
pub struct SelfPlayParams {
    pub games: usize,
    pub max_plies: usize,
    pub depth: u32,
    pub threads: usize,
    pub seed: u64,
    pub random_plies: usize, // uniformly random moves at the start of each game
}

impl Default for SelfPlayParams {
    fn default() -> Self {
        Self { games: 10, max_plies: 200, depth: 2, threads: 1, seed: 42, random_plies: 4 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    White,
    Black,
    Unfinished,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub game: usize,
    pub moves: Vec<String>,
    pub result: GameResult,
    pub plies: usize,
}

pub fn generate_games(params: &SelfPlayParams) -> Vec<GameRecord> {
    (0..params.games).map(|gi| play_game(params, gi)).collect()
}

pub fn play_game(params: &SelfPlayParams, game: usize) -> GameRecord {
    let mut rng = SmallRng::seed_from_u64(params.seed ^ (game as u64).rotate_left(17));
    let search = SearchParams { max_depth: params.depth, threads: params.threads, ..SearchParams::default() };
    let mut board = Board::startpos();
    let mut side = Color::White;
    let mut moves = Vec::new();
    while moves.len() < params.max_plies && !board.is_terminal() {
        let mv = if moves.len() < params.random_plies {
            select_random_move(&board, side, &mut rng)
        } else {
            Searcher::new(search).search(&mut board, side).best_move
        };
        let Some(m) = mv else { break };
        board.play(m);
        moves.push(m.to_string());
        side = side.opposite();
    }
    let result = match board.winner() {
        Some(Color::White) => GameResult::White,
        Some(Color::Black) => GameResult::Black,
        None => GameResult::Unfinished,
    };
    debug!("selfplay game {} finished after {} plies: {:?}", game, moves.len(), result);
    GameRecord { game, plies: moves.len(), moves, result }
}

fn select_random_move(board: &Board, side: Color, rng: &mut SmallRng) -> Option<Move> {
    let moves = moves_for(board, side);
    if moves.is_empty() { None } else { Some(moves[rng.gen_range(0..moves.len())]) }
}

/// Replays a record from the starting position with White to move. Every
/// move must parse, belong to the side to move and be pseudo-legal, and no
/// move may follow a king capture.
pub fn replay(record: &GameRecord) -> Result<Board, GameError> {
    let mut board = Board::startpos();
    let mut side = Color::White;
    for m in &record.moves {
        let mv: Move = m.parse()?;
        if board.is_terminal() {
            return Err(GameError::GameOver { winner: board.winner() });
        }
        let piece = board.piece_at(mv.from).ok_or(GameError::EmptySquare(mv.from))?;
        if piece.color != side {
            return Err(GameError::WrongColor { at: mv.from, owner: piece.color });
        }
        if !is_pseudo_legal(&board, mv) {
            return Err(GameError::IllegalMove(mv));
        }
        board.play(mv);
        side = side.opposite();
    }
    Ok(board)
}

pub fn write_jsonl<P: AsRef<Path>>(games: &[GameRecord], path: P) -> anyhow::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    for g in games {
        serde_json::to_writer(&mut w, g)?;
        w.write_all(b"\n")?;
    }
    w.flush()?;
    Ok(())
}

pub fn read_jsonl<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<GameRecord>> {
    let rdr = BufReader::new(File::open(path)?);
    let mut out = Vec::new();
    for line in rdr.lines() {
        let line = line?;
        let l = line.trim();
        if l.is_empty() { continue; }
        out.push(serde_json::from_str(l)?);
    }
    Ok(out)
}

use crate::board::{Board, Color, Move};
use crate::movegen::moves_for;
use crate::search::eval::{evaluate_tenths, round_tenths, EvalParams};
use log::{debug, warn};
use rayon::prelude::*;

pub const DEFAULT_MAX_DEPTH: u32 = 4;

#[derive(Debug, Clone, Copy)]
pub struct SearchParams {
    /// Plies searched below the root position; leaves sit at `max_depth + 1`.
    pub max_depth: u32,
    /// Disable to run plain minimax over the same tree.
    pub prune: bool,
    /// More than one thread searches root candidates in parallel on board copies.
    pub threads: usize,
    pub eval: EvalParams,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH, prune: true, threads: 1, eval: EvalParams::default() }
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// None when the root is terminal or the side to move has no moves.
    pub best_move: Option<Move>,
    /// Utility of `best_move` in whole pawns, positive favours White.
    pub utility: i32,
    pub utility_tenths: i32,
    pub nodes: u64,
}

#[derive(Default)]
pub struct Searcher {
    params: SearchParams,
    pub(crate) nodes: u64,
    ply: u32,
}

/// Worst possible utility for `side`; each step starts from it.
fn worst(side: Color) -> i32 {
    match side { Color::White => i32::MIN, Color::Black => i32::MAX }
}

fn improves(side: Color, score: i32, best: i32) -> bool {
    match side { Color::White => score > best, Color::Black => score < best }
}

/// The opponent already has `bound` guaranteed elsewhere, so nothing found
/// here past it can change the parent's choice.
fn cuts(side: Color, best: i32, bound: i32) -> bool {
    match side { Color::White => best >= bound, Color::Black => best <= bound }
}

impl Searcher {
    pub fn new(params: SearchParams) -> Self {
        Self { params, nodes: 0, ply: 0 }
    }

    pub fn params(&self) -> &SearchParams { &self.params }

    /// Picks a move for `side`. The board is mutated during the search and
    /// handed back unchanged.
    pub fn search(&mut self, board: &mut Board, side: Color) -> SearchResult {
        self.nodes = 0;
        self.ply = 0;
        let result = if self.params.threads > 1 && self.params.max_depth > 0 {
            self.search_parallel(board, side)
        } else {
            self.search_root(board, side)
        };
        debug!(
            "search side={} depth={} prune={} best={:?} utility={} nodes={}",
            side, self.params.max_depth, self.params.prune,
            result.best_move.map(|m| m.to_string()), result.utility, result.nodes
        );
        result
    }

    fn leaf(&self, board: &Board) -> i32 {
        evaluate_tenths(board, &self.params.eval)
    }

    fn is_horizon(&self, board: &Board) -> bool {
        board.is_terminal() || self.ply > self.params.max_depth
    }

    fn finish(&self, best_move: Option<Move>, tenths: i32) -> SearchResult {
        SearchResult { best_move, utility: round_tenths(tenths), utility_tenths: tenths, nodes: self.nodes }
    }

    // Root frame: the only place that remembers which move produced the best
    // utility.
    fn search_root(&mut self, board: &mut Board, side: Color) -> SearchResult {
        self.ply = 1;
        self.nodes += 1;
        let moves = if self.is_horizon(board) { Vec::new() } else { moves_for(board, side) };
        if moves.is_empty() {
            let u = self.leaf(board);
            self.ply = 0;
            return self.finish(None, u);
        }
        let mut best = worst(side);
        let mut best_move = None;
        for mv in moves {
            let undo = board.play(mv);
            let score = self.step(board, side.opposite(), best);
            board.unplay(undo);
            if improves(side, score, best) {
                best = score;
                best_move = Some(mv);
            }
        }
        self.ply = 0;
        self.finish(best_move, best)
    }

    /// One recursive step for `side`. `bound` is the best the parent has
    /// already secured; returns the utility in tenths.
    fn step(&mut self, board: &mut Board, side: Color, bound: i32) -> i32 {
        self.ply += 1;
        self.nodes += 1;
        if self.is_horizon(board) {
            self.ply -= 1;
            return self.leaf(board);
        }
        let moves = moves_for(board, side);
        if moves.is_empty() {
            // No pseudo-legal move: score the position as it stands.
            self.ply -= 1;
            return self.leaf(board);
        }
        let mut best = worst(side);
        for mv in moves {
            let undo = board.play(mv);
            let score = self.step(board, side.opposite(), best);
            board.unplay(undo);
            if improves(side, score, best) { best = score; }
            if self.params.prune && cuts(side, best, bound) { break; }
        }
        self.ply -= 1;
        best
    }

    fn search_parallel(&mut self, board: &mut Board, side: Color) -> SearchResult {
        let pool = match rayon::ThreadPoolBuilder::new().num_threads(self.params.threads).build() {
            Ok(pool) => pool,
            Err(e) => {
                warn!("falling back to single-threaded search: {e}");
                return self.search_root(board, side);
            }
        };
        self.nodes = 1;
        let moves = if board.is_terminal() { Vec::new() } else { moves_for(board, side) };
        if moves.is_empty() {
            let u = self.leaf(board);
            return self.finish(None, u);
        }

        let params = self.params;
        let root: &Board = board;
        // Each worker owns a copy and searches with an open window, so its
        // score is exact and the reduction below sees what the sequential
        // root would.
        let results: Vec<(Move, i32, u64)> = pool.install(|| {
            moves.par_iter().map(|&mv| {
                let mut child = root.clone();
                child.play(mv);
                let mut w = Searcher::new(params);
                w.ply = 1;
                let score = w.step(&mut child, side.opposite(), worst(side));
                (mv, score, w.nodes)
            }).collect()
        });

        let mut best = worst(side);
        let mut best_move = None;
        for (mv, score, nodes) in results {
            self.nodes += nodes;
            if improves(side, score, best) {
                best = score;
                best_move = Some(mv);
            }
        }
        self.finish(best_move, best)
    }
}

/// Best move for `side` at `max_depth`, or None when there is nothing to play.
pub fn choose_move(board: &mut Board, side: Color, max_depth: u32) -> Option<Move> {
    let mut s = Searcher::new(SearchParams { max_depth, ..SearchParams::default() });
    s.search(board, side).best_move
}

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use regicide::board::{Board, Color};
use regicide::movegen::moves_for;

/// Boards reached by seeded random pseudo-legal play from the start, each
/// paired with the side to move next.
pub fn random_boards(seed: u64, games: usize, plies: usize) -> Vec<(Board, Color)> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut out = Vec::new();
    for _ in 0..games {
        let mut b = Board::startpos();
        let mut side = Color::White;
        for _ in 0..plies {
            if b.is_terminal() { break; }
            let moves = moves_for(&b, side);
            if moves.is_empty() { break; }
            b.play(moves[rng.gen_range(0..moves.len())]);
            side = side.opposite();
            out.push((b.clone(), side));
        }
    }
    out
}

use regicide::board::{Board, Color, Move, Piece, PieceKind, Position};
use regicide::movegen::moves_for;
use regicide::search::alphabeta::{choose_move, SearchParams, Searcher};
use regicide::search::eval::{evaluate_tenths, round_tenths, EvalParams};

fn searcher(depth: u32) -> Searcher {
    Searcher::new(SearchParams { max_depth: depth, ..SearchParams::default() })
}

fn mv(s: &str) -> Move { s.parse().unwrap() }

#[test]
fn depth_one_pawn_takes_hanging_queen() {
    let mut b = Board::from_placement("7k/8/8/3q4/4P3/8/8/K7").unwrap();
    let r = searcher(1).search(&mut b, Color::White);
    assert_eq!(r.best_move, Some(mv("e4d5")));
    assert!(r.utility > 0, "capturing the queen should favour white: {}", r.utility);
}

#[test]
fn black_minimizes() {
    // Mirror: black pawn e5 can take the white queen on d4.
    let mut b = Board::from_placement("k7/8/8/4p3/3Q4/8/8/7K").unwrap();
    let r = searcher(1).search(&mut b, Color::Black);
    assert_eq!(r.best_move, Some(mv("e5d4")));
    assert!(r.utility < 0);
}

#[test]
fn takes_the_king_when_it_can() {
    let mut b = Board::from_placement("4k3/8/8/8/8/8/8/R3K3").unwrap();
    b.remove("a1".parse().unwrap());
    b.place("e2".parse().unwrap(), Piece::new(Color::White, PieceKind::Rook));
    assert_eq!(choose_move(&mut b, Color::White, 2), Some(mv("e2e8")));
}

#[test]
fn search_restores_board_after_promotion_lines() {
    let mut b = Board::from_placement("7k/P7/8/8/8/8/8/K7").unwrap();
    let before = b.clone();
    let r = searcher(2).search(&mut b, Color::White);
    assert_eq!(r.best_move, Some(mv("a7a8")));
    assert_eq!(b, before);
    assert_eq!(b.piece_at("a7".parse().unwrap()), Some(Piece::new(Color::White, PieceKind::Pawn)));
}

#[test]
fn no_move_at_root_yields_none() {
    // White's king is boxed in by its own immobile pawns.
    let mut b = Board::from_placement("PP5k/PP6/PP6/PP6/PP6/PP6/PP6/KP6").unwrap();
    assert!(moves_for(&b, Color::White).is_empty());
    let r = searcher(3).search(&mut b, Color::White);
    assert_eq!(r.best_move, None);
    assert_eq!(r.utility_tenths, evaluate_tenths(&b, &EvalParams::default()));

    // Black still moves; the immobile white replies are scored as leaves.
    let r = searcher(2).search(&mut b, Color::Black);
    assert!(r.best_move.is_some());
}

#[test]
fn terminal_root_yields_none() {
    let mut b = Board::from_placement("8/8/8/8/8/8/8/4K3").unwrap();
    assert!(b.is_terminal());
    assert_eq!(choose_move(&mut b, Color::White, 4), None);
    assert_eq!(choose_move(&mut b, Color::Black, 4), None);
}

#[test]
fn root_picks_first_best_by_exact_utility() {
    let placement = "r3k2r/pp3ppp/2n5/3q4/4P3/2N5/PP3PPP/R2QK2R";
    let params = EvalParams::default();
    for side in Color::ALL {
        let mut b = Board::from_placement(placement).unwrap();
        let mut expected: Option<(Move, i32)> = None;
        for m in moves_for(&b, side) {
            let undo = b.play(m);
            let u = evaluate_tenths(&b, &params);
            b.unplay(undo);
            let better = match (side, expected) {
                (_, None) => true,
                (Color::White, Some((_, best))) => u > best,
                (Color::Black, Some((_, best))) => u < best,
            };
            if better { expected = Some((m, u)); }
        }
        let r = searcher(1).search(&mut b, side);
        let (m, u) = expected.unwrap();
        assert_eq!(r.best_move, Some(m), "side {side}");
        assert_eq!(r.utility_tenths, u);
        assert_eq!(r.utility, round_tenths(u));
    }
}

#[test]
fn default_depth_is_four() {
    let s = Searcher::default();
    assert_eq!(s.params().max_depth, 4);
    assert_eq!(regicide::DEFAULT_MAX_DEPTH, 4);
}

#[test]
fn engine_move_is_pseudo_legal() {
    let mut b = Board::startpos();
    let m = choose_move(&mut b, Color::White, 2).expect("a move from the start");
    assert!(regicide::movegen::is_pseudo_legal(&b, m));
    let from: Position = m.from;
    assert_eq!(b.piece_at(from).map(|p| p.color), Some(Color::White));
}

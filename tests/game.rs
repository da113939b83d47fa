use regicide::board::{Board, Color, Move, Piece, PieceKind, Position};
use regicide::error::GameError;
use regicide::game::Game;
use regicide::search::alphabeta::SearchParams;

fn sq(s: &str) -> Position { s.parse().unwrap() }
fn mv(s: &str) -> Move { s.parse().unwrap() }

fn shallow() -> SearchParams {
    SearchParams { max_depth: 1, ..SearchParams::default() }
}

#[test]
fn user_move_then_engine_reply() {
    let mut g = Game::new(Color::White, shallow());
    assert!(!g.engine_to_move());
    let dests = g.user_destinations(sq("e2")).unwrap();
    assert_eq!(dests.into_iter().collect::<Vec<_>>(), vec![sq("e3"), sq("e4")]);

    assert_eq!(g.play_user_move(mv("e2e4"), None), Ok(None));
    assert_eq!(g.to_move(), Color::Black);
    assert!(g.engine_to_move());
    assert_eq!(g.play_user_move(mv("d2d4"), None), Err(GameError::NotYourTurn { to_move: Color::Black }));

    let (reply, result) = g.play_engine_move().unwrap();
    assert_eq!(result.best_move, Some(reply));
    assert_eq!(g.board().piece_at(reply.to).map(|p| p.color), Some(Color::Black));
    assert_eq!(g.history(), &[mv("e2e4"), reply]);
    assert_eq!(g.to_move(), Color::White);
}

#[test]
fn engine_opens_when_user_plays_black() {
    let mut g = Game::new(Color::Black, shallow());
    assert!(g.engine_to_move());
    assert_eq!(g.play_user_move(mv("e7e5"), None), Err(GameError::NotYourTurn { to_move: Color::White }));
    g.play_engine_move().unwrap();
    assert!(!g.engine_to_move());
}

#[test]
fn rejects_bad_user_moves() {
    let mut g = Game::new(Color::White, shallow());
    assert_eq!(g.user_destinations(sq("e4")), Err(GameError::EmptySquare(sq("e4"))));
    assert_eq!(
        g.user_destinations(sq("e7")),
        Err(GameError::WrongColor { at: sq("e7"), owner: Color::Black })
    );
    assert_eq!(g.play_user_move(mv("e2e5"), None), Err(GameError::IllegalMove(mv("e2e5"))));
    assert_eq!(g.play_user_move(mv("g1g3"), None), Err(GameError::IllegalMove(mv("g1g3"))));
    assert_eq!(g.board(), &Board::startpos());
    assert!(g.history().is_empty());
}

#[test]
fn promotion_choice_is_applied() {
    let board = Board::from_placement("7k/P7/8/8/8/8/8/K7").unwrap();
    let mut g = Game::from_board(board.clone(), Color::White, Color::White, shallow());
    assert_eq!(
        g.play_user_move(mv("a7a8"), Some(PieceKind::King)),
        Err(GameError::InvalidPromotion(PieceKind::King))
    );
    g.play_user_move(mv("a7a8"), Some(PieceKind::Knight)).unwrap();
    assert_eq!(g.board().piece_at(sq("a8")), Some(Piece::new(Color::White, PieceKind::Knight)));

    let mut g = Game::from_board(board, Color::White, Color::White, shallow());
    g.play_user_move(mv("a7a8"), None).unwrap();
    assert_eq!(g.board().piece_at(sq("a8")), Some(Piece::new(Color::White, PieceKind::Queen)));
}

#[test]
fn engine_promotes_to_queen() {
    let board = Board::from_placement("K7/8/8/8/8/8/p7/7k").unwrap();
    let mut g = Game::from_board(board, Color::White, Color::Black, shallow());
    let (reply, _) = g.play_engine_move().unwrap();
    assert_eq!(reply, mv("a2a1"));
    assert_eq!(g.board().piece_at(sq("a1")), Some(Piece::new(Color::Black, PieceKind::Queen)));
}

#[test]
fn capturing_the_king_ends_the_game() {
    let board = Board::from_placement("4k3/8/8/8/8/8/4R3/4K3").unwrap();
    let mut g = Game::from_board(board, Color::White, Color::White, shallow());
    let captured = g.play_user_move(mv("e2e8"), None).unwrap();
    assert_eq!(captured, Some(Piece::new(Color::Black, PieceKind::King)));
    assert!(g.is_over());
    assert_eq!(g.winner(), Some(Color::White));
    assert!(!g.engine_to_move());
    assert_eq!(g.play_engine_move(), Err(GameError::GameOver { winner: Some(Color::White) }));
}

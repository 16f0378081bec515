use super::*;
use chess_core::{Game, Quiet, Square};
use std::collections::HashMap;

fn no_moves_for_black() -> Board {
    "........
     ........
     ........
     ...p....
     ...P....
     ........
     ........
     K......."
        .parse()
        .unwrap()
}

#[test]
fn random_engine_returns_generated_move() {
    let mut engine = RandomEngine::new();
    let board = Board::startpos();

    for color in [Color::White, Color::Black] {
        let mv = engine.select_move(&board, color).unwrap();
        assert!(moves_for_color(&board, color).contains(&mv));
        assert_eq!(board.piece_at(mv.from).map(|p| p.color), Some(color));
    }
}

#[test]
fn random_engine_handles_no_moves() {
    let mut engine = RandomEngine::with_seed(7);
    let board = no_moves_for_black();

    assert!(engine.select_move(&board, Color::Black).is_none());
    assert!(engine.select_move(&board, Color::White).is_some());
}

#[test]
fn seeded_engines_agree() {
    let mut a = RandomEngine::with_seed(42);
    let mut b = RandomEngine::with_seed(42);
    let mut game_a = Game::new();
    let mut game_b = Game::new();

    for _ in 0..40 {
        let mv_a = game_a.play_selected(&mut a, &mut Quiet).unwrap();
        let mv_b = game_b.play_selected(&mut b, &mut Quiet).unwrap();
        assert_eq!(mv_a, mv_b);
        if mv_a.is_none() {
            break;
        }
    }
    assert_eq!(game_a, game_b);
}

#[test]
fn new_game_replays_seeded_sequence() {
    let mut engine = RandomEngine::with_seed(3);
    let board = Board::startpos();
    let first: Vec<Move> = (0..5)
        .filter_map(|_| engine.select_move(&board, Color::White))
        .collect();
    engine.new_game();
    let again: Vec<Move> = (0..5)
        .filter_map(|_| engine.select_move(&board, Color::White))
        .collect();
    assert_eq!(first, again);
}

#[test]
fn selection_is_weighted_by_move_count() {
    // White has a rook with 14 moves and a king with 3; a uniform pick over
    // the flattened list moves the rook about 14 times in 17.
    let board: Board = "k.......
                        ........
                        ........
                        ........
                        ...R....
                        ........
                        ........
                        .......K"
        .parse()
        .unwrap();
    assert_eq!(moves_for_color(&board, Color::White).len(), 17);

    let rook = Square::new(3, 4);
    let mut rng = StdRng::seed_from_u64(11);
    let mut by_piece: HashMap<Square, u32> = HashMap::new();
    let draws = 3400;
    for _ in 0..draws {
        let mv = select_random_move(&board, Color::White, &mut rng).unwrap();
        *by_piece.entry(mv.from).or_default() += 1;
    }

    let rook_share = f64::from(by_piece[&rook]) / f64::from(draws);
    assert!(
        (0.75..0.9).contains(&rook_share),
        "rook moved in {rook_share:.3} of draws, expected about 0.82"
    );
}

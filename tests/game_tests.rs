//! Game controller behavior: command surface, error handling, purity of
//! read-only queries.

use glasschess::{
    ConfigError, Game, GameError, GameStatus, Piece, Square, MAX_DEPTH, MODULE_NAMES, VERSION,
};

fn fools_mate() -> Game {
    let mut game = Game::new();
    game.make_move(Square(1, 5), Square(2, 5), None).unwrap(); // f3
    game.make_move(Square(6, 4), Square(4, 4), None).unwrap(); // e5
    game.make_move(Square(1, 6), Square(3, 6), None).unwrap(); // g4
    game.make_move(Square(7, 3), Square(3, 7), None).unwrap(); // Qh4#
    game
}

#[test]
fn initial_state_is_the_standard_game() {
    let game = Game::new();
    let state = game.board_state();

    assert_eq!(state.legal_moves.len(), 20);
    assert!(!state.in_check);
    assert_eq!(state.status, GameStatus::InProgress);
    assert_eq!(state.last_move, None);
    assert!(state.captured_by_white.is_empty());
    assert_eq!(
        state.squares[0][4],
        Some((glasschess::Color::White, Piece::King))
    );
}

#[test]
fn legal_move_updates_the_snapshot() {
    let mut game = Game::new();
    let state = game.make_move(Square(1, 4), Square(3, 4), None).unwrap();

    assert_eq!(state.side_to_move, glasschess::Color::Black);
    assert_eq!(state.last_move, Some((Square(1, 4), Square(3, 4))));
    assert_eq!(game.history().len(), 1);
}

#[test]
fn illegal_move_is_rejected_and_state_is_untouched() {
    let mut game = Game::new();
    let before = game.board_state();

    let err = game.make_move(Square(1, 4), Square(4, 4), None).unwrap_err();
    assert_eq!(
        err,
        GameError::IllegalMove {
            from: Square(1, 4),
            to: Square(4, 4),
            promotion: None,
        }
    );
    assert_eq!(game.board_state(), before);
    assert!(game.history().is_empty());
}

#[test]
fn promotion_flag_on_a_normal_move_is_illegal() {
    let mut game = Game::new();
    let err = game
        .make_move(Square(1, 4), Square(3, 4), Some(Piece::Queen))
        .unwrap_err();
    assert!(matches!(err, GameError::IllegalMove { .. }));
}

#[test]
fn underpromotion_places_the_requested_piece() {
    let mut game = Game::from_fen("8/P6k/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let state = game
        .make_move(Square(6, 0), Square(7, 0), Some(Piece::Knight))
        .unwrap();
    assert_eq!(
        state.squares[7][0],
        Some((glasschess::Color::White, Piece::Knight))
    );
}

#[test]
fn checkmate_ends_the_game() {
    let mut game = fools_mate();
    let state = game.board_state();

    assert_eq!(
        state.status,
        GameStatus::Checkmate {
            winner: glasschess::Color::Black
        }
    );
    assert!(state.legal_moves.is_empty());
    assert_eq!(
        game.make_move(Square(1, 0), Square(2, 0), None),
        Err(GameError::GameOver)
    );
}

#[test]
fn ai_move_on_a_finished_game_is_a_null_move() {
    let mut game = fools_mate();
    let before = game.board_state();

    let outcome = game.make_ai_move();
    assert!(outcome.mv.is_none());
    assert_eq!(outcome.evals, 0);
    assert_eq!(outcome.state, before);
}

#[test]
fn ai_move_plays_a_legal_move_and_records_evals() {
    let mut game = Game::new();
    game.set_depth(2).unwrap();

    let outcome = game.make_ai_move();
    let mv = outcome.mv.expect("a move exists");
    assert_eq!(game.history(), &[mv]);
    assert!(outcome.evals > 0);
    assert_eq!(game.last_evals(), outcome.evals);
    assert_eq!(outcome.depth, 2);
}

#[test]
fn hint_is_pure() {
    let mut game = Game::new();
    game.make_move(Square(1, 4), Square(3, 4), None).unwrap();
    let before_state = game.board_state();
    let before_fen = game.fen();
    let before_evals = game.last_evals();

    let hint = game.hint(2).unwrap();
    assert!(hint.best_move.is_some());
    assert_eq!(hint.depth, 2);

    assert_eq!(game.board_state(), before_state);
    assert_eq!(game.fen(), before_fen);
    assert_eq!(game.last_evals(), before_evals);
}

#[test]
fn hint_rejects_out_of_range_depths() {
    let game = Game::new();
    assert_eq!(game.hint(0), Err(ConfigError::InvalidDepth { depth: 0 }));
    assert_eq!(
        game.hint(MAX_DEPTH + 1),
        Err(ConfigError::InvalidDepth {
            depth: MAX_DEPTH + 1
        })
    );
}

#[test]
fn module_toggles_are_validated_and_reflected_in_the_breakdown() {
    let mut game = Game::new();
    assert_eq!(game.eval_breakdown().entries.len(), MODULE_NAMES.len());

    game.set_module("mobility", false).unwrap();
    let breakdown = game.eval_breakdown();
    assert_eq!(breakdown.entries.len(), MODULE_NAMES.len() - 1);
    assert!(breakdown.entries.iter().all(|e| e.name != "mobility"));

    let err = game.set_module("zugzwang_detector", true).unwrap_err();
    assert_eq!(
        err,
        ConfigError::UnknownModule {
            name: "zugzwang_detector".to_string()
        }
    );
}

#[test]
fn depth_setting_is_range_checked() {
    let mut game = Game::new();
    assert!(game.set_depth(0).is_err());
    assert!(game.set_depth(MAX_DEPTH + 1).is_err());
    game.set_depth(5).unwrap();
    assert_eq!(game.config().depth(), 5);
}

#[test]
fn auto_deepen_threshold_must_be_positive() {
    let mut game = Game::new();
    assert_eq!(
        game.set_auto_deepen(true, 0),
        Err(ConfigError::InvalidThreshold { min_evals: 0 })
    );
    game.set_auto_deepen(true, 1_000).unwrap();
    assert!(game.config().auto_deepen());
    assert_eq!(game.config().min_evals(), 1_000);
}

#[test]
fn per_square_moves_match_the_snapshot() {
    let game = Game::new();
    let e2_moves = game.legal_moves_from(Square(1, 4));
    assert_eq!(e2_moves.len(), 2);
    assert!(game.legal_moves_from(Square(4, 4)).is_empty());

    let finished = fools_mate();
    assert!(finished.legal_moves_from(Square(1, 0)).is_empty());
}

#[test]
fn version_is_available_without_an_instance() {
    assert!(!VERSION.is_empty());
    assert!(VERSION.contains('.'));
}

#[cfg(feature = "serde")]
mod serialization {
    use super::*;

    #[test]
    fn board_state_and_breakdown_serialize_to_json() {
        let game = Game::new();

        let state = serde_json::to_string(&game.board_state()).unwrap();
        assert!(state.contains("\"side_to_move\""));

        let breakdown = serde_json::to_string(&game.eval_breakdown()).unwrap();
        assert!(breakdown.contains("\"material\""));
        assert!(breakdown.contains("\"total\""));
    }
}

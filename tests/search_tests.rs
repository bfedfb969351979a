//! Search behavior: tactics, determinism, depth policy.

use glasschess::search::{search, search_at_depth};
use glasschess::{Board, EngineConfig, Square, AUTO_DEEPEN_CEILING};

fn board(fen: &str) -> Board {
    fen.parse().expect("valid fen")
}

#[test]
fn finds_back_rank_mate_in_one() {
    let pos = board("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
    let result = search(&pos, &EngineConfig::default());

    let mv = result.best_move.expect("a move exists");
    assert_eq!((mv.from, mv.to), (Square(0, 0), Square(7, 0)));
    assert!(result.score > 90_000.0);
}

#[test]
fn captures_a_hanging_queen() {
    let pos = board("q3k3/8/8/8/8/8/8/R3K3 w - - 0 1");
    let result = search(&pos, &EngineConfig::default());

    let mv = result.best_move.expect("a move exists");
    assert_eq!((mv.from, mv.to), (Square(0, 0), Square(7, 0)));
}

#[test]
fn repeated_searches_agree() {
    let pos = board("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    let mut config = EngineConfig::default();
    config.set_depth(2).unwrap();

    let first = search(&pos, &config);
    for _ in 0..3 {
        assert_eq!(search(&pos, &config), first);
    }
}

#[test]
fn fixed_depth_search_reports_the_configured_depth() {
    let mut config = EngineConfig::default();
    config.set_depth(2).unwrap();

    let result = search(&Board::new(), &config);
    assert_eq!(result.depth, 2);
    assert!(result.best_move.is_some());
    assert!(result.evals > 0);
}

#[test]
fn auto_deepen_extends_until_enough_evaluations() {
    let mut config = EngineConfig::default();
    config.set_depth(1).unwrap();
    config.set_auto_deepen(true, 5_000).unwrap();

    let result = search(&Board::new(), &config);
    assert!(result.depth > 1);
    assert!(result.evals >= 5_000 || result.depth == AUTO_DEEPEN_CEILING);
}

#[test]
fn auto_deepen_stops_at_the_ceiling_on_sparse_positions() {
    // Locked pawns and cornered kings keep the tree tiny; the depth
    // ceiling has to cut the loop off.
    let pos = board("k7/p7/P7/8/8/8/8/K7 w - - 0 1");
    let mut config = EngineConfig::default();
    config.set_depth(1).unwrap();
    config.set_auto_deepen(true, u64::MAX).unwrap();

    let result = search(&pos, &config);
    assert_eq!(result.depth, AUTO_DEEPEN_CEILING);
}

#[test]
fn explicit_depth_overrides_the_configuration() {
    let mut config = EngineConfig::default();
    config.set_depth(4).unwrap();

    let result = search_at_depth(&Board::new(), 1, &config);
    assert_eq!(result.depth, 1);
    assert!(result.best_move.is_some());
}

#[test]
fn checkmated_position_yields_a_null_move() {
    let pos = board("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 3");
    let result = search(&pos, &EngineConfig::default());
    assert!(result.best_move.is_none());
    assert!(result.score < -90_000.0);
}

#[test]
fn stalemated_position_scores_zero() {
    let pos = board("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    let result = search(&pos, &EngineConfig::default());
    assert!(result.best_move.is_none());
    assert_eq!(result.score, 0.0);
}

#[test]
fn disabled_material_changes_the_chosen_move_space() {
    // With every module off the evaluation is constant, but the search
    // still returns a legal move deterministically.
    let mut config = EngineConfig::default();
    config.set_depth(2).unwrap();
    for name in glasschess::MODULE_NAMES {
        config.set_module(name, false).unwrap();
    }

    let pos = Board::new();
    let result = search(&pos, &config);
    let mv = result.best_move.expect("a move exists");
    assert!(pos.legal_moves().contains(&mv));
    assert_eq!(search(&pos, &config), result);
}

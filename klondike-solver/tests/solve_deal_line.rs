//! Wire-to-win test: parse a deal line, solve it, replay the answer

use klondike_json::parse_deck_line;
use klondike_core::{Game, Move};
use klondike_solver::{SolveStatus, Solver, SolverConfig};
use std::time::Duration;

// Stock of aces through sixes in draw order, tableau of single-suit piles
// that unstack straight onto the foundations: winnable under draw-1
const WINNABLE_LINE: &str = "6C5C4C3C2CAC6D5D4D3D2DAD6H5H4H3H2HAH6S5S4S3S2SAS\
                             7S8S8H9S9H9DTSTHTDTCJSJHJDJC7CQSQHQDQC8C7DKSKHKDKC9C8D7H";

fn replay(start: &Game, moves: &[Move]) -> Game {
    let mut game = start.clone();
    for &mv in moves {
        assert!(game.is_legal(mv), "illegal move {} in winning sequence", mv);
        game.apply(mv);
    }
    game
}

#[test]
fn winnable_line_solves_under_draw_one() {
    assert_eq!(WINNABLE_LINE.len(), 104);
    let deal = parse_deck_line(WINNABLE_LINE).unwrap();
    let game = Game::new(&deal, 1);
    game.check().unwrap();

    let config = SolverConfig {
        timeout: Duration::from_secs(30),
        ..SolverConfig::default()
    };
    let result = Solver::new(game.clone(), &config).solve();
    assert_eq!(result.status, SolveStatus::Solved);

    let moves = result.moves.unwrap();
    let finished = replay(&game, &moves);
    assert!(finished.is_won());
    finished.check().unwrap();
}

#[test]
fn solved_line_repeats_identically() {
    let deal = parse_deck_line(WINNABLE_LINE).unwrap();
    let config = SolverConfig {
        timeout: Duration::from_secs(30),
        ..SolverConfig::default()
    };
    let first = Solver::new(Game::new(&deal, 1), &config).solve();
    let second = Solver::new(Game::new(&deal, 1), &config).solve();
    assert_eq!(first.status, second.status);
    assert_eq!(first.moves, second.moves);
}

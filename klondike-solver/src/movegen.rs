use crate::cache::LruCache;
use crate::fingerprint;
use klondike_core::{Game, Move, Rank, TABLEAU_WIDTH};
use smallvec::SmallVec;

pub(crate) type MoveList = SmallVec<[Move; 64]>;

/// Candidate moves in priority order: aces, other foundation plays,
/// card-revealing tableau moves, waste placements, the draw, and finally
/// the memoized non-revealing tableau-to-tableau moves. Every emitted
/// move is legal.
pub(crate) fn candidate_moves(game: &Game, memo: &mut LruCache<Vec<Move>>) -> MoveList {
    let mut moves = MoveList::new();
    add_ace_moves(game, &mut moves);
    add_foundation_moves(game, &mut moves);
    add_revealing_moves(game, &mut moves);
    add_waste_to_tableau_moves(game, &mut moves);
    add_draw_move(game, &mut moves);
    add_tableau_to_tableau_moves(game, memo, &mut moves);
    moves
}

/// An exposed ace always goes to its foundation
fn add_ace_moves(game: &Game, moves: &mut MoveList) {
    if let Some(card) = game.waste_top() {
        if card.rank == Rank::Ace {
            moves.push(Move::WasteToFoundation);
        }
    }
    for (src, column) in game.tableau().iter().enumerate() {
        if let Some(card) = column.top() {
            if card.rank == Rank::Ace {
                moves.push(Move::TableauToFoundation { src });
            }
        }
    }
}

fn add_foundation_moves(game: &Game, moves: &mut MoveList) {
    if let Some(card) = game.waste_top() {
        if card.rank != Rank::Ace && game.is_legal(Move::WasteToFoundation) {
            moves.push(Move::WasteToFoundation);
        }
    }
    for (src, column) in game.tableau().iter().enumerate() {
        if let Some(card) = column.top() {
            let mv = Move::TableauToFoundation { src };
            if card.rank != Rank::Ace && game.is_legal(mv) {
                moves.push(mv);
            }
        }
    }
}

/// Whole-run tableau moves that expose a face-down card. Without an empty
/// column, sources with few face-down cards come first (the fastest route
/// to a king space); with one available, deep columns come first.
fn add_revealing_moves(game: &Game, moves: &mut MoveList) {
    let mut revealing: SmallVec<[(usize, usize, Move); 16]> = SmallVec::new();
    let mut needs_king_space = true;
    for (src, column) in game.tableau().iter().enumerate() {
        if column.face_up().is_empty() {
            needs_king_space = false;
        } else if !column.face_down().is_empty() {
            for dst in 0..TABLEAU_WIDTH {
                if dst == src {
                    continue;
                }
                let mv = Move::TableauToTableau { src, row: 0, dst };
                if game.is_legal(mv) {
                    revealing.push((column.face_down().len(), src, mv));
                }
            }
        }
    }
    revealing.sort_by(|a, b| {
        if a.0 == b.0 {
            a.1.cmp(&b.1)
        } else if needs_king_space {
            a.0.cmp(&b.0)
        } else {
            b.0.cmp(&a.0)
        }
    });
    moves.extend(revealing.into_iter().map(|(_, _, mv)| mv));
}

fn add_waste_to_tableau_moves(game: &Game, moves: &mut MoveList) {
    for dst in 0..TABLEAU_WIDTH {
        let mv = Move::WasteToTableau { dst };
        if game.is_legal(mv) {
            moves.push(mv);
        }
    }
}

fn add_draw_move(game: &Game, moves: &mut MoveList) {
    if game.is_legal(Move::Draw) {
        moves.push(Move::Draw);
    }
}

/// Tableau-to-tableau moves that reveal nothing, memoized by tableau
/// shape. Rows start at 1: row 0 is either a revealing move (handled
/// above) or shuffles a king between empty columns.
fn add_tableau_to_tableau_moves(game: &Game, memo: &mut LruCache<Vec<Move>>, moves: &mut MoveList) {
    let key = fingerprint::tableau_key(game);
    if let Some(cached) = memo.get(key) {
        // Copy, never alias: callers own their move lists
        moves.extend(cached.iter().copied());
        return;
    }

    let mut fresh = Vec::new();
    for (src, column) in game.tableau().iter().enumerate() {
        for row in 1..column.face_up().len() {
            for dst in 0..TABLEAU_WIDTH {
                if dst == src {
                    continue;
                }
                let mv = Move::TableauToTableau { src, row, dst };
                if game.is_legal(mv) {
                    fresh.push(mv);
                }
            }
        }
    }
    moves.extend(fresh.iter().copied());
    memo.insert(key, fresh);
}

use ahash::AHasher;
use klondike_core::Game;
use std::hash::Hasher;

// Card indices stay below 52, so 0xFF never collides with payload bytes
const SECTION: u8 = 0xFF;

fn hash64(bytes: &[u8]) -> u64 {
    let mut hasher = AHasher::default();
    hasher.write(bytes);
    hasher.finish()
}

/// 64-bit digest of a canonicalized position.
///
/// Two positions sharing a digest are mutually win-equivalent: the tableau
/// section sorts away column-identity permutations, and the full
/// stock+waste sequence (with its waste index) guarantees equal future
/// draw sequences. Encodes, section by section: the flip permission, the
/// waste index plus the whole stock+waste sequence, the foundation tops,
/// and the sorted column keys.
pub(crate) fn state_key(game: &Game, can_flip: bool) -> u64 {
    let mut buf = Vec::with_capacity(96);
    buf.push(can_flip as u8);
    buf.push(SECTION);

    buf.push(game.waste_len() as u8);
    for &card in game.talon() {
        buf.push(card.to_index());
    }
    buf.push(SECTION);

    for &top in game.foundation() {
        buf.push((top + 1) as u8);
    }
    buf.push(SECTION);

    // Columns holding face-down cards keep their identity (index and
    // face-down count); face-up-only columns are interchangeable and sort
    // by their first card; empty columns collapse together at the end.
    let mut columns: Vec<(u8, u8, Vec<u8>)> = Vec::with_capacity(game.tableau().len());
    for (i, column) in game.tableau().iter().enumerate() {
        let mut bytes = Vec::with_capacity(2 + column.face_up().len());
        let sort_key = if !column.face_down().is_empty() {
            bytes.push(i as u8);
            bytes.push(column.face_down().len() as u8);
            (0, i as u8)
        } else if let Some(&first) = column.face_up().first() {
            (1, first.to_index())
        } else {
            (2, 0)
        };
        for &card in column.face_up() {
            bytes.push(card.to_index());
        }
        columns.push((sort_key.0, sort_key.1, bytes));
    }
    columns.sort();
    for (_, _, bytes) in columns {
        buf.extend_from_slice(&bytes);
        buf.push(SECTION);
    }

    hash64(&buf)
}

/// 64-bit digest of the tableau shape alone, keying the memo of
/// non-revealing tableau-to-tableau moves
pub(crate) fn tableau_key(game: &Game) -> u64 {
    let mut buf = Vec::with_capacity(64);
    for (i, column) in game.tableau().iter().enumerate() {
        buf.push(i as u8);
        buf.push(column.face_down().len() as u8);
        for &card in column.face_up() {
            buf.push(card.to_index());
        }
        buf.push(SECTION);
    }
    hash64(&buf)
}

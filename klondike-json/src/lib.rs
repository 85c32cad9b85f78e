mod line;
mod record;

pub use line::{deck_codes, parse_deck_line, ParseError};
pub use record::{MoveRecord, SolveRecord};

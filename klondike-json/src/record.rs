use klondike_core::Move;
use serde::Serialize;

/// One output record per solved deal, emitted as a single JSON line
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveRecord {
    /// "win", "timeout" or "lose"
    pub status: &'static str,
    /// The 52 card codes as read
    pub deck: Vec<String>,
    /// Null unless the deal was solved
    pub winning_moves: Option<Vec<MoveRecord>>,
    pub moves_considered: u64,
    pub elapsed_seconds: u64,
    pub timeout_seconds: u64,
    pub version: String,
}

/// Wire form of a move: numeric kind plus its arguments
#[derive(Debug, Serialize)]
pub struct MoveRecord {
    #[serde(rename = "type")]
    pub kind: u8,
    pub extras: Vec<u8>,
}

impl From<Move> for MoveRecord {
    fn from(mv: Move) -> Self {
        MoveRecord {
            kind: mv.type_code(),
            extras: mv.extras(),
        }
    }
}

impl SolveRecord {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("record serializes")
    }
}

//! Klondike deal solver
//!
//! Depth-first backtracking search over Klondike positions:
//! - priority-ordered move generation (aces and foundation plays first,
//!   card-revealing tableau moves next, deck cycling last)
//! - an LRU seen-state cache keyed by a 64-bit fingerprint that collapses
//!   strategically equivalent positions
//! - an LRU memo of the non-revealing tableau moves valid from a tableau
//!   shape
//! - cycle breakers: a one-shot stock-flip permission and a per-path set
//!   of already-seen face-up runs
//! - a wall-clock timeout checked at every recursion frame

mod cache;
mod fingerprint;
mod movegen;
mod solver;

pub use cache::LruCache;
pub use solver::{
    SolveResult, SolveStatus, Solver, SolverConfig, DEFAULT_MOVE_CACHE_SIZE,
    DEFAULT_STATE_CACHE_SIZE,
};

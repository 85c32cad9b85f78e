use crate::cache::LruCache;
use crate::fingerprint;
use crate::movegen;
use klondike_core::{Card, Game, Move};
use std::collections::HashSet;
use std::time::{Duration, Instant};

pub const DEFAULT_STATE_CACHE_SIZE: usize = 1_000_000;
pub const DEFAULT_MOVE_CACHE_SIZE: usize = 100_000;

// Diagnostic cadence, in recursive calls
const REPORT_INTERVAL: u64 = 5000;

#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Wall-clock budget per solve
    pub timeout: Duration,
    /// Max entries for the seen-state cache
    pub state_cache_size: usize,
    /// Max entries for the tableau move memo
    pub move_cache_size: usize,
    /// Report progress and board snapshots on stderr
    pub verbose: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            timeout: Duration::from_secs(30),
            state_cache_size: DEFAULT_STATE_CACHE_SIZE,
            move_cache_size: DEFAULT_MOVE_CACHE_SIZE,
            verbose: false,
        }
    }
}

/// Outcome of one solve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// A winning sequence was found
    Solved,
    /// The wall clock ran out before the search finished
    Timeout,
    /// The search space was exhausted without a win
    NoSolution,
}

#[derive(Debug, Clone)]
pub struct SolveResult {
    pub status: SolveStatus,
    /// Winning moves in play order; `None` unless solved
    pub moves: Option<Vec<Move>>,
    /// Recursive calls spent on novel states
    pub calls: u64,
    pub elapsed: Duration,
}

/// Depth-first backtracking solver for one deal.
///
/// Owns the two LRU caches for the duration of the solve; build a fresh
/// instance per deal.
pub struct Solver {
    game: Game,
    timeout: Duration,
    verbose: bool,
    start: Instant,
    state_cache: LruCache<()>,
    move_cache: LruCache<Vec<Move>>,
    calls: u64,
}

impl Solver {
    pub fn new(game: Game, config: &SolverConfig) -> Self {
        Solver {
            game,
            timeout: config.timeout,
            verbose: config.verbose,
            start: Instant::now(),
            state_cache: LruCache::new(config.state_cache_size),
            move_cache: LruCache::new(config.move_cache_size),
            calls: 0,
        }
    }

    /// Run the search to completion, timeout included
    pub fn solve(&mut self) -> SolveResult {
        self.start = Instant::now();
        let mut seen_stacks: HashSet<Vec<Card>> = HashSet::new();
        let game = self.game.clone();
        // The flip permission starts spent: the first pass through the
        // deck is free, wrapping it needs a waste play first
        let winning = self.solve_impl(&game, &mut seen_stacks, false, 0);
        let elapsed = self.start.elapsed();
        let status = if winning.is_some() {
            SolveStatus::Solved
        } else if elapsed >= self.timeout {
            SolveStatus::Timeout
        } else {
            SolveStatus::NoSolution
        };
        let moves = winning.map(|mut moves| {
            // Collected tail-first while unwinding
            moves.reverse();
            moves
        });
        SolveResult {
            status,
            moves,
            calls: self.calls,
            elapsed,
        }
    }

    /// Corecursive with [`Solver::try_move`]: collects the candidate moves
    /// for a novel state and attempts them in order. Returns the winning
    /// continuation in reverse order, or `None` on a dead end or timeout.
    fn solve_impl(
        &mut self,
        game: &Game,
        seen_stacks: &mut HashSet<Vec<Card>>,
        can_flip: bool,
        depth: usize,
    ) -> Option<Vec<Move>> {
        if self.start.elapsed() >= self.timeout {
            return None;
        }

        if game.is_won() {
            return Some(Vec::new());
        }

        let key = fingerprint::state_key(game, can_flip);
        if self.state_cache.get(key).is_some() {
            // Equivalent state already explored
            return None;
        }
        self.state_cache.insert(key, ());

        self.calls += 1;
        if self.verbose && self.calls % REPORT_INTERVAL == 0 {
            self.report(game, depth);
        }

        let moves = movegen::candidate_moves(game, &mut self.move_cache);
        for &mv in &moves {
            if let Some(mut winning) = self.try_move(mv, game, seen_stacks, can_flip, depth) {
                winning.push(mv);
                return Some(winning);
            }
        }
        None
    }

    /// Applies one already-validated move, decides whether the branch is
    /// worth exploring, and recurses.
    fn try_move(
        &mut self,
        mv: Move,
        game: &Game,
        seen_stacks: &mut HashSet<Vec<Card>>,
        mut can_flip: bool,
        depth: usize,
    ) -> Option<Vec<Move>> {
        match mv {
            // Drawing on an empty stock wraps the waste around. Allowing
            // that at most once per waste play breaks the loop of cycling
            // the deck forever between tableau shuffles.
            Move::Draw => {
                if game.stock_len() == 0 {
                    if can_flip {
                        can_flip = false;
                    } else {
                        return None;
                    }
                }
            }
            Move::WasteToFoundation | Move::WasteToTableau { .. } => {
                can_flip = true;
            }
            _ => {}
        }

        debug_assert!(game.is_legal(mv), "generator emitted illegal move: {}", mv);
        let mut next = game.clone();
        next.apply(mv);

        // A tableau move that leaves both columns in already-seen shapes
        // only rearranged known material
        let mut inserted: Vec<Vec<Card>> = Vec::new();
        if let Move::TableauToTableau { src, dst, .. } = mv {
            let new_src = next.tableau()[src].face_up().to_vec();
            let new_dst = next.tableau()[dst].face_up().to_vec();
            if seen_stacks.contains(&new_src) && seen_stacks.contains(&new_dst) {
                return None;
            }
            for stack in [new_src, new_dst] {
                if seen_stacks.insert(stack.clone()) {
                    inserted.push(stack);
                }
            }
        }

        let winning = self.solve_impl(&next, seen_stacks, can_flip, depth + 1);

        // Scoped insertion: only what this call added comes back out
        for stack in &inserted {
            seen_stacks.remove(stack);
        }

        winning
    }

    fn report(&self, game: &Game, depth: usize) {
        eprintln!(
            "calls: {}  depth: {}  state cache: {}  move cache: {}  elapsed: {}s",
            self.calls,
            depth,
            self.state_cache.len(),
            self.move_cache.len(),
            self.start.elapsed().as_secs()
        );
        eprintln!("{}", game);
    }
}

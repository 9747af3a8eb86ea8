use crate::prelude::*;

use core::ops::{Deref, DerefMut};
use std::time::Instant;

// Expansions between wall-clock checks.
const CHECK_INTERVAL: u64 = 1024;

pub struct IdaStar {
    config: SearchConfig,
    heuristic: Box<dyn Heuristic>,
}

impl Solver for IdaStar {
    fn init(config: SearchConfig) -> Self {
        let heuristic = config.heuristic.build();
        IdaStar::with_heuristic(config, heuristic)
    }

    fn solve(&self, board: &Board) -> Solution {
        if !board.is_solvable() {
            return Solution {
                outcome: Outcome::Unsolvable,
                stats: Stats::default(),
            };
        }
        self.search(board)
    }
}

impl IdaStar {
    pub fn with_heuristic(config: SearchConfig, heuristic: Box<dyn Heuristic>) -> Self {
        IdaStar { config, heuristic }
    }

    /// Runs the bounded search with growing bounds. Does not check
    /// solvability, see `solve`.
    pub fn search(&self, root: &Board) -> Solution {
        let mut ctx = SearchContext::new(*root, self.config.time_limit);

        let mut bound = self.heuristic.estimate(root);
        let outcome = loop {
            if bound > self.config.depth_limit {
                break Outcome::NotFound;
            }
            ctx.stats.bounds.push(bound);
            log::debug!(
                "Searching f <= {}, {} nodes expanded so far",
                bound,
                ctx.stats.nodes_expanded
            );

            match self.find_solution(&mut ctx, 0, bound) {
                Search::Found(moves) => break Outcome::Solved(moves),
                Search::TimedOut => {
                    log::warn!(
                        "Gave up on {} after {:?} at bound {}",
                        root,
                        ctx.started.elapsed(),
                        bound
                    );
                    break Outcome::TimedOut;
                }
                Search::NotFound(u32::MAX) => break Outcome::NotFound,
                Search::NotFound(next) => bound = next,
            }
        };

        ctx.finish(outcome)
    }

    fn find_solution(&self, ctx: &mut SearchContext, g: u32, bound: u32) -> Search {
        let board = ctx.current();
        ctx.stats.max_depth = ctx.stats.max_depth.max(g);

        let f = g + self.heuristic.estimate(&board);
        if f > bound {
            return Search::NotFound(f);
        }

        if board.is_solved() {
            return Search::Found(ctx.moves.clone());
        }

        if ctx.out_of_time() {
            return Search::TimedOut;
        }
        ctx.stats.nodes_expanded += 1;

        let mut best = u32::MAX;
        let undo = ctx.moves.last().map(|m| m.reverse());
        for successor in board.successors() {
            if Some(successor.direction) == undo || ctx.on_path(&successor.board) {
                continue;
            }

            let mut extended = ctx.extend(successor);
            match self.find_solution(&mut extended, g + 1, bound) {
                Search::NotFound(next) => best = best.min(next),
                found_or_timed_out => return found_or_timed_out,
            }
        }

        Search::NotFound(best)
    }
}

enum Search {
    Found(Vec<Direction>),
    /// Smallest f that exceeded the bound, `u32::MAX` when nothing did.
    NotFound(u32),
    TimedOut,
}

/// Everything one search mutates. Nothing is shared between puzzles.
struct SearchContext {
    path: Vec<Board>,
    moves: Vec<Direction>,

    started: Instant,
    time_limit: Duration,
    next_check: u64,

    stats: Stats,
}

impl SearchContext {
    fn new(root: Board, time_limit: Duration) -> Self {
        SearchContext {
            path: vec![root],
            moves: Vec::new(),
            started: Instant::now(),
            time_limit,
            next_check: 0,
            stats: Stats::default(),
        }
    }

    fn current(&self) -> Board {
        self.path[self.path.len() - 1]
    }

    fn on_path(&self, board: &Board) -> bool {
        self.path.contains(board)
    }

    fn extend(&mut self, successor: Successor) -> Extension<'_> {
        self.path.push(successor.board);
        self.moves.push(successor.direction);
        Extension { ctx: self }
    }

    fn out_of_time(&mut self) -> bool {
        if self.stats.nodes_expanded < self.next_check {
            return false;
        }
        self.next_check = self.stats.nodes_expanded + CHECK_INTERVAL;
        self.started.elapsed() >= self.time_limit
    }

    fn finish(mut self, outcome: Outcome) -> Solution {
        self.stats.elapsed = self.started.elapsed();
        Solution {
            outcome,
            stats: self.stats,
        }
    }
}

/// The path extended by one successor, retracted again on drop.
struct Extension<'a> {
    ctx: &'a mut SearchContext,
}

impl Deref for Extension<'_> {
    type Target = SearchContext;

    fn deref(&self) -> &SearchContext {
        self.ctx
    }
}

impl DerefMut for Extension<'_> {
    fn deref_mut(&mut self) -> &mut SearchContext {
        self.ctx
    }
}

impl Drop for Extension<'_> {
    fn drop(&mut self) {
        self.ctx.path.pop();
        self.ctx.moves.pop();
    }
}

use crate::prelude::*;

mod ida;
pub use ida::*;

pub trait Solver: Sized {
    fn init(config: SearchConfig) -> Self;

    fn solve(&self, board: &Board) -> Solution;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Solved(Vec<Direction>),
    Unsolvable,
    /// Every bound up to the depth limit was searched without reaching the goal.
    NotFound,
    TimedOut,
}

impl Outcome {
    pub fn moves(&self) -> Option<&[Direction]> {
        match self {
            Outcome::Solved(moves) => Some(moves),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    pub max_depth: u32,
    pub nodes_expanded: u64,
    pub elapsed: Duration,
    /// Bound used by each iteration, in order.
    pub bounds: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub outcome: Outcome,
    pub stats: Stats,
}

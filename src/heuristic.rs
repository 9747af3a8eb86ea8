use crate::prelude::*;

use enum_iterator::Sequence;

/// Lower bound on the moves left before a board is solved.
pub trait Heuristic: Sync + Send {
    fn estimate(&self, board: &Board) -> u32;
}

impl<F> Heuristic for F
where
    F: Send + Sync + Fn(&Board) -> u32,
{
    fn estimate(&self, board: &Board) -> u32 {
        (self)(board)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Sequence)]
pub enum HeuristicKind {
    Manhattan,
    LinearConflict,
}

impl HeuristicKind {
    pub fn all() -> impl Iterator<Item = HeuristicKind> {
        enum_iterator::all()
    }

    pub fn build(self) -> Box<dyn Heuristic> {
        match self {
            HeuristicKind::Manhattan => Box::new(Manhattan),
            HeuristicKind::LinearConflict => Box::new(LinearConflict),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HeuristicKind::Manhattan => "manhattan",
            HeuristicKind::LinearConflict => "linear-conflict",
        }
    }
}

impl core::str::FromStr for HeuristicKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<HeuristicKind> {
        HeuristicKind::all()
            .find(|h| h.name() == s)
            .ok_or_else(|| anyhow::anyhow!("Unknown heuristic {}", s))
    }
}

lazy_static::lazy_static! {
    // DISTANCE[tile][index]: moves tile needs from index to its goal cell.
    static ref DISTANCE: [[u8; TILES]; TILES] = {
        let mut table = [[0; TILES]; TILES];
        for tile in 1..TILES {
            let (goal_row, goal_col) = goal_cell(tile as u8);
            for index in 0..TILES {
                let (row, col) = (index / WIDTH, index % WIDTH);
                table[tile][index] = (row.abs_diff(goal_row) + col.abs_diff(goal_col)) as u8;
            }
        }
        table
    };
}

fn goal_cell(tile: u8) -> (usize, usize) {
    let t = tile as usize - 1;
    (t / WIDTH, t % WIDTH)
}

pub struct Manhattan;

impl Heuristic for Manhattan {
    fn estimate(&self, board: &Board) -> u32 {
        board
            .tiles()
            .iter()
            .enumerate()
            .map(|(index, &tile)| DISTANCE[tile as usize][index] as u32)
            .sum()
    }
}

/// Manhattan distance plus two moves for every tile that has to step out of
/// its goal line so the others in that line can pass each other.
pub struct LinearConflict;

impl Heuristic for LinearConflict {
    fn estimate(&self, board: &Board) -> u32 {
        Manhattan.estimate(board) + 2 * (row_conflicts(board) + column_conflicts(board))
    }
}

fn row_conflicts(board: &Board) -> u32 {
    (0..WIDTH)
        .map(|row| {
            let goal_cols = (0..WIDTH)
                .map(|col| board.tiles()[row * WIDTH + col])
                .filter(|&t| t != 0 && goal_cell(t).0 == row)
                .map(|t| goal_cell(t).1);
            line_conflicts(goal_cols)
        })
        .sum()
}

fn column_conflicts(board: &Board) -> u32 {
    (0..WIDTH)
        .map(|col| {
            let goal_rows = (0..WIDTH)
                .map(|row| board.tiles()[row * WIDTH + col])
                .filter(|&t| t != 0 && goal_cell(t).1 == col)
                .map(|t| goal_cell(t).0);
            line_conflicts(goal_rows)
        })
        .sum()
}

// Tiles that must leave the line: those outside the longest run already in
// goal order. For a single reversed pair this is one.
fn line_conflicts(goals: impl Iterator<Item = usize>) -> u32 {
    let goals = goals.collect::<smallvec::SmallVec<[usize; WIDTH]>>();
    let mut longest = [0u32; WIDTH];
    for i in 0..goals.len() {
        let before = (0..i)
            .filter(|&j| goals[j] < goals[i])
            .map(|j| longest[j])
            .max()
            .unwrap_or(0);
        longest[i] = before + 1;
    }
    let in_order = longest.iter().copied().max().unwrap_or(0);
    goals.len() as u32 - in_order
}

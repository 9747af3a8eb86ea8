use crate::prelude::*;

use std::io::Write;

/// Receives the outcome of every puzzle in a batch.
pub trait ResultSink {
    fn record(&mut self, index: usize, board: &Board, solution: &Solution) -> anyhow::Result<()>;

    /// A rejected line, or a batch that could not be read at all.
    fn error(&mut self, error: &PuzzleError) -> anyhow::Result<()>;

    fn finish(&mut self, _summary: &Summary) -> anyhow::Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub solved: usize,
    pub unsolvable: usize,
    pub timed_out: usize,
    pub not_found: usize,
    pub rejected: usize,

    // Over solved puzzles only.
    pub moves: usize,
    pub nodes_expanded: u64,
    pub elapsed: Duration,
}

impl Summary {
    pub fn add(&mut self, solution: &Solution) {
        if let Some(moves) = solution.outcome.moves() {
            self.moves += moves.len();
        }
        match solution.outcome {
            Outcome::Solved(_) => {
                self.solved += 1;
                self.nodes_expanded += solution.stats.nodes_expanded;
                self.elapsed += solution.stats.elapsed;
            }
            Outcome::Unsolvable => self.unsolvable += 1,
            Outcome::TimedOut => self.timed_out += 1,
            Outcome::NotFound => self.not_found += 1,
        }
    }

    pub fn average_moves(&self) -> Option<f64> {
        match self.solved {
            0 => None,
            n => Some(self.moves as f64 / n as f64),
        }
    }

    pub fn average_nodes_expanded(&self) -> Option<f64> {
        match self.solved {
            0 => None,
            n => Some(self.nodes_expanded as f64 / n as f64),
        }
    }

    pub fn average_elapsed(&self) -> Option<Duration> {
        match self.solved {
            0 => None,
            n => Some(self.elapsed / n as u32),
        }
    }
}

const SEPARATOR: &str = "-----------------------";

/// Plain-text report, one block per puzzle.
pub struct TextReport<W: Write> {
    out: W,
}

impl<W: Write> TextReport<W> {
    pub fn new(out: W) -> Self {
        TextReport { out }
    }
}

impl<W: Write> ResultSink for TextReport<W> {
    fn record(
        &mut self,
        index: usize,
        board: &Board,
        solution: &Solution,
    ) -> anyhow::Result<()> {
        writeln!(self.out, "Solving puzzle {}: {}", index, board)?;
        match &solution.outcome {
            Outcome::Solved(moves) if moves.is_empty() => {
                writeln!(self.out, "Path found with steps:")?
            }
            Outcome::Solved(moves) => writeln!(
                self.out,
                "Path found with steps: {}",
                Direction::format_sequence(moves)
            )?,
            Outcome::Unsolvable => writeln!(self.out, "Unsolvable")?,
            Outcome::NotFound => writeln!(self.out, "No solution found")?,
            Outcome::TimedOut => writeln!(self.out, "Timed out")?,
        }
        writeln!(
            self.out,
            "Max search depth reached for puzzle {}: {}",
            index, solution.stats.max_depth
        )?;
        writeln!(self.out, "Nodes expanded: {}", solution.stats.nodes_expanded)?;
        writeln!(self.out, "Time taken {} ms", solution.stats.elapsed.as_millis())?;
        writeln!(self.out, "{}", SEPARATOR)?;
        Ok(())
    }

    fn error(&mut self, error: &PuzzleError) -> anyhow::Result<()> {
        match error {
            PuzzleError::FileUnreadable { .. } => writeln!(self.out, "Batch aborted: {}", error)?,
            PuzzleError::MalformedConfiguration { .. } => {
                writeln!(self.out, "Rejected: {}", error)?;
                writeln!(self.out, "{}", SEPARATOR)?;
            }
        }
        Ok(())
    }

    fn finish(&mut self, summary: &Summary) -> anyhow::Result<()> {
        writeln!(self.out, "Solved: {}", summary.solved)?;
        writeln!(self.out, "Unsolvable: {}", summary.unsolvable)?;
        writeln!(self.out, "Timed out: {}", summary.timed_out)?;
        writeln!(self.out, "Not found: {}", summary.not_found)?;
        writeln!(self.out, "Rejected lines: {}", summary.rejected)?;
        if let (Some(moves), Some(nodes), Some(elapsed)) = (
            summary.average_moves(),
            summary.average_nodes_expanded(),
            summary.average_elapsed(),
        ) {
            writeln!(self.out, "Average solution length: {:.1}", moves)?;
            writeln!(self.out, "Average nodes expanded: {:.1}", nodes)?;
            writeln!(self.out, "Average time taken {} ms", elapsed.as_millis())?;
        }
        self.out.flush()?;
        Ok(())
    }
}

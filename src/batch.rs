use crate::prelude::*;
use crate::report::{ResultSink, Summary};

use std::io::BufRead;
use std::path::Path;

/// Puzzles read from one input, numbered by their line.
#[derive(Debug, Default)]
pub struct Batch {
    pub puzzles: Vec<(usize, Board)>,
    /// The line that stopped parsing. Lines after it were not read.
    pub rejected: Option<PuzzleError>,
}

pub fn load(path: &Path) -> Result<Batch, PuzzleError> {
    let unreadable = |source| PuzzleError::FileUnreadable {
        path: path.to_path_buf(),
        source,
    };
    let file = std::fs::File::open(path).map_err(unreadable)?;
    read_puzzles(std::io::BufReader::new(file)).map_err(unreadable)
}

/// Blank lines are skipped. The first malformed line (including one that is
/// not UTF-8) ends the batch, keeping everything parsed before it. Only a
/// failing read is an error.
pub fn read_puzzles(reader: impl BufRead) -> std::io::Result<Batch> {
    let mut batch = Batch::default();

    for (i, bytes) in reader.split(b'\n').enumerate() {
        let mut bytes = bytes?;
        let number = i + 1;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }

        let parsed = match String::from_utf8(bytes) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => line.parse::<Board>(),
            Err(_) => Err(ConfigError::NotText),
        };

        match parsed {
            Ok(board) => batch.puzzles.push((number, board)),
            Err(reason) => {
                log::warn!("Rejecting line {}: {}", number, reason);
                batch.rejected = Some(PuzzleError::MalformedConfiguration {
                    line: number,
                    reason,
                });
                break;
            }
        }
    }

    Ok(batch)
}

/// Loads `input` and solves it. An unreadable file is reported to `sink`,
/// followed by an empty summary, before the error is returned.
pub fn solve_file<S: Solver>(
    solver: &S,
    input: &Path,
    sink: &mut impl ResultSink,
) -> anyhow::Result<Summary> {
    let batch = match load(input) {
        Ok(batch) => batch,
        Err(err) => {
            sink.error(&err)?;
            sink.finish(&Summary::default())?;
            return Err(err.into());
        }
    };

    log::info!("Loaded {} puzzles from {}", batch.puzzles.len(), input.display());
    run(solver, &batch, sink)
}

/// Solves each puzzle in turn, handing every result to `sink`.
pub fn run<S: Solver>(
    solver: &S,
    batch: &Batch,
    sink: &mut impl ResultSink,
) -> anyhow::Result<Summary> {
    let mut summary = Summary::default();

    for (index, (line, board)) in batch.puzzles.iter().enumerate() {
        let number = index + 1;
        log::info!("Solving puzzle {} (line {}): {}", number, line, board);

        let solution = solver.solve(board);
        match &solution.outcome {
            Outcome::Solved(moves) => log::info!(
                "Puzzle {}: {} moves, {} nodes expanded over {} iterations in {:?}",
                number,
                moves.len(),
                solution.stats.nodes_expanded,
                solution.stats.bounds.len(),
                solution.stats.elapsed
            ),
            Outcome::Unsolvable => log::warn!("Puzzle {} is unsolvable, skipped", number),
            Outcome::NotFound => log::warn!("Puzzle {}: no solution found", number),
            Outcome::TimedOut => log::warn!(
                "Puzzle {} timed out after {} nodes expanded",
                number,
                solution.stats.nodes_expanded
            ),
        }

        summary.add(&solution);
        sink.record(number, board, &solution)?;
    }

    if let Some(err) = &batch.rejected {
        summary.rejected += 1;
        sink.error(err)?;
    }

    sink.finish(&summary)?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Collect {
        records: Vec<(usize, Board, Solution)>,
        errors: Vec<String>,
        finished: Option<Summary>,
    }

    impl ResultSink for Collect {
        fn record(
            &mut self,
            index: usize,
            board: &Board,
            solution: &Solution,
        ) -> anyhow::Result<()> {
            self.records.push((index, *board, solution.clone()));
            Ok(())
        }

        fn error(&mut self, error: &PuzzleError) -> anyhow::Result<()> {
            self.errors.push(error.to_string());
            Ok(())
        }

        fn finish(&mut self, summary: &Summary) -> anyhow::Result<()> {
            self.finished = Some(summary.clone());
            Ok(())
        }
    }

    fn read(s: &str) -> Batch {
        read_puzzles(s.as_bytes()).unwrap()
    }

    fn solve_all(input: &str) -> Collect {
        let mut sink = Collect::default();
        run(&IdaStar::init(SearchConfig::default()), &read(input), &mut sink).unwrap();
        sink
    }

    #[test]
    fn reads_every_line() {
        let batch = read(
            "1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 0\n\n  1 2 3 4 5 6 7 8 9 10 11 12 13 14 0 15  \n",
        );
        assert_eq!(batch.puzzles.len(), 2);
        assert_eq!(batch.puzzles[0].0, 1);
        assert_eq!(batch.puzzles[1].0, 3);
        assert!(batch.rejected.is_none());
    }

    #[test]
    fn malformed_line_keeps_earlier_puzzles() {
        let batch = read(
            "1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 0\n\
             1 2 3 4 5 6 7\n\
             1 2 3 4 5 6 7 8 9 10 11 12 13 14 0 15\n",
        );
        assert_eq!(batch.puzzles.len(), 1);
        match batch.rejected {
            Some(PuzzleError::MalformedConfiguration { line: 2, reason }) => {
                assert_eq!(reason, ConfigError::WrongTileCount(7))
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn invalid_utf8_line_keeps_earlier_puzzles() {
        let batch = read_puzzles(
            &b"1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 0\n1 2 \xff 4\n1 2 3 4 5 6 7 8 9 10 11 12 13 14 0 15\n"[..],
        )
        .unwrap();
        assert_eq!(batch.puzzles.len(), 1);
        assert!(matches!(
            batch.rejected,
            Some(PuzzleError::MalformedConfiguration {
                line: 2,
                reason: ConfigError::NotText
            })
        ));
    }

    #[test]
    fn crlf_line_endings() {
        let batch = read(
            "1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 0\r\n\r\n1 2 3 4 5 6 7 8 9 10 11 12 13 14 0 15\r\n",
        );
        assert_eq!(batch.puzzles.len(), 2);
        assert_eq!(batch.puzzles[1].0, 3);
        assert!(batch.rejected.is_none());
    }

    #[test]
    fn non_permutation_is_malformed() {
        let batch = read("1 2 3 4 5 6 7 8 9 10 11 12 13 14 14 0\n");
        assert!(batch.puzzles.is_empty());
        assert!(matches!(
            batch.rejected,
            Some(PuzzleError::MalformedConfiguration {
                line: 1,
                reason: ConfigError::Duplicate(14)
            })
        ));
    }

    #[test]
    fn missing_file_is_unreadable() {
        let err = load(Path::new("/nonexistent/puzzles.txt")).unwrap_err();
        assert!(matches!(err, PuzzleError::FileUnreadable { .. }));
        assert!(err.to_string().contains("/nonexistent/puzzles.txt"));
    }

    #[test]
    fn unreadable_file_aborts_with_report() {
        let mut sink = Collect::default();
        let solver = IdaStar::init(SearchConfig::default());
        let err = solve_file(&solver, Path::new("/nonexistent/puzzles.txt"), &mut sink)
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PuzzleError>(),
            Some(PuzzleError::FileUnreadable { .. })
        ));
        assert!(sink.records.is_empty());
        assert_eq!(sink.errors.len(), 1);
        assert!(sink.errors[0].starts_with("unable to read puzzle file"));
        assert_eq!(sink.finished, Some(Summary::default()));
    }

    #[test]
    fn solves_file_from_disk() {
        let path =
            std::env::temp_dir().join(format!("fifteen-batch-{}.txt", std::process::id()));
        std::fs::write(
            &path,
            "1 2 3 4 5 6 7 8 9 10 11 12 13 14 0 15\n2 1 3 4 5 6 7 8 9 10 11 12 13 14 15 0\n",
        )
        .unwrap();

        let mut sink = Collect::default();
        let summary =
            solve_file(&IdaStar::init(SearchConfig::default()), &path, &mut sink).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(sink.records.len(), 2);
        assert_eq!(summary.solved, 1);
        assert_eq!(summary.unsolvable, 1);
        assert_eq!(sink.finished, Some(summary));
    }

    #[test]
    fn goal_reports_empty_path() {
        let sink = solve_all("1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 0\n");
        let (_, _, solution) = &sink.records[0];
        assert_eq!(solution.outcome, Outcome::Solved(vec![]));
        assert_eq!(solution.stats.max_depth, 0);
    }

    #[test]
    fn one_move_puzzle() {
        let sink = solve_all("1 2 3 4 5 6 7 8 9 10 11 12 13 14 0 15\n");
        let (_, _, solution) = &sink.records[0];
        assert_eq!(solution.outcome.moves().map(|m| m.len()), Some(1));
        assert_eq!(solution.stats.max_depth, 1);
    }

    #[test]
    fn swapped_pair_is_unsolvable_not_searched() {
        let sink = solve_all("2 1 3 4 5 6 7 8 9 10 11 12 13 14 15 0\n");
        let (_, _, solution) = &sink.records[0];
        assert_eq!(solution.outcome, Outcome::Unsolvable);
        assert_eq!(solution.stats.nodes_expanded, 0);
    }

    #[test]
    fn batch_continues_past_unsolvable_and_reports_rejection() {
        let sink = solve_all(
            "2 1 3 4 5 6 7 8 9 10 11 12 13 14 15 0\n\
             1 2 3 4 5 6 7 8 9 10 11 12 13 14 0 15\n\
             not a puzzle\n\
             1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 0\n",
        );
        assert_eq!(
            sink.records.iter().map(|r| r.0).collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert_eq!(sink.errors.len(), 1);
        assert!(sink.errors[0].contains("line 3"));

        let summary = sink.finished.unwrap();
        assert_eq!(summary.solved, 1);
        assert_eq!(summary.unsolvable, 1);
        assert_eq!(summary.rejected, 1);
    }
}

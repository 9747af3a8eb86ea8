use crate::prelude::*;

use anyhow::Context;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use std::io::Write;

/// Uniform shuffle, retried until the parity check passes.
pub fn random_solvable(rng: &mut impl Rng) -> Board {
    let mut tiles = *Board::solved().tiles();
    loop {
        tiles.shuffle(rng);
        match Board::from_tiles(tiles) {
            Ok(board) if board.is_solvable() => return board,
            _ => {}
        }
    }
}

pub fn write_puzzles(count: usize, rng: &mut impl Rng, mut out: impl Write) -> anyhow::Result<()> {
    for _ in 0..count {
        writeln!(out, "{}", random_solvable(rng))?;
    }
    out.flush()?;
    Ok(())
}

pub fn run(config: &GenerateConfig) -> anyhow::Result<()> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let file = std::fs::File::create(&config.output)
        .with_context(|| format!("Unable to create {}", config.output.display()))?;
    write_puzzles(config.count, &mut rng, std::io::BufWriter::new(file))?;

    log::info!(
        "Wrote {} puzzles to {}",
        config.count,
        config.output.display()
    );
    Ok(())
}

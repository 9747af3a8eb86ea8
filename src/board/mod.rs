use crate::prelude::*;

mod parity;
mod successors;

pub use successors::Successor;

pub const WIDTH: usize = 4;
pub const TILES: usize = WIDTH * WIDTH;

/// A 4x4 configuration in row-major order, 0 is the blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    tiles: [u8; TILES],
    blank: u8,
}

impl Board {
    pub fn solved() -> Board {
        let mut tiles = [0; TILES];
        for (i, t) in tiles.iter_mut().take(TILES - 1).enumerate() {
            *t = i as u8 + 1;
        }
        Board {
            tiles,
            blank: (TILES - 1) as u8,
        }
    }

    /// Checks that `tiles` is a permutation of 0..16.
    pub fn from_tiles(tiles: [u8; TILES]) -> Result<Board, ConfigError> {
        let mut seen = [false; TILES];
        for &t in &tiles {
            let slot = seen
                .get_mut(t as usize)
                .ok_or(ConfigError::OutOfRange(t as u64))?;
            if *slot {
                return Err(ConfigError::Duplicate(t));
            }
            *slot = true;
        }

        let blank = tiles.iter().position(|&t| t == 0).unwrap_or_default() as u8;
        Ok(Board { tiles, blank })
    }

    pub fn tiles(&self) -> &[u8; TILES] {
        &self.tiles
    }

    pub fn blank(&self) -> usize {
        self.blank as usize
    }

    pub fn is_solved(&self) -> bool {
        *self == Board::solved()
    }

    /// Slides the blank one step, or `None` when that would leave the grid.
    pub fn apply(&self, direction: Direction) -> Option<Board> {
        let from = self.blank();
        let to = target_index(from, direction)?;

        let mut next = *self;
        next.tiles.swap(from, to);
        next.blank = to as u8;
        Some(next)
    }

    /// Applies every move in order, failing on the first illegal one.
    pub fn apply_all(
        &self,
        moves: impl IntoIterator<Item = Direction>,
    ) -> anyhow::Result<Board> {
        moves.into_iter().enumerate().try_fold(*self, |board, (i, m)| {
            board
                .apply(m)
                .ok_or_else(|| anyhow::anyhow!("Move {} ({}) leaves the grid", i + 1, m))
        })
    }
}

fn target_index(from: usize, direction: Direction) -> Option<usize> {
    let col = from % WIDTH;
    match direction {
        Direction::Left if col == 0 => return None,
        Direction::Right if col == WIDTH - 1 => return None,
        _ => {}
    }

    let to = from as isize + direction.offset();
    if (0..TILES as isize).contains(&to) {
        Some(to as usize)
    } else {
        None
    }
}

impl core::str::FromStr for Board {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Board, ConfigError> {
        let values = s
            .split_whitespace()
            .map(|tok| {
                tok.parse::<u64>()
                    .map_err(|_| ConfigError::NotANumber(tok.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if values.len() != TILES {
            return Err(ConfigError::WrongTileCount(values.len()));
        }

        let mut tiles = [0; TILES];
        for (slot, v) in tiles.iter_mut().zip(values) {
            if v >= TILES as u64 {
                return Err(ConfigError::OutOfRange(v));
            }
            *slot = v as u8;
        }
        Board::from_tiles(tiles)
    }
}

impl core::fmt::Display for Board {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut first = true;
        for t in &self.tiles {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", t)?;
            first = false;
        }
        Ok(())
    }
}

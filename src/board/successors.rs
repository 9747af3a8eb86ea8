use crate::prelude::*;

use smallvec::SmallVec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Successor {
    pub board: Board,
    pub direction: Direction,
}

impl Board {
    /// Every board one blank slide away, in `Direction::all()` order.
    pub fn successors(&self) -> SmallVec<[Successor; 4]> {
        Direction::all()
            .filter_map(|direction| {
                self.apply(direction)
                    .map(|board| Successor { board, direction })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_blank_at(index: usize) -> Board {
        let mut tiles = *Board::solved().tiles();
        tiles.swap(index, TILES - 1);
        Board::from_tiles(tiles).unwrap()
    }

    #[test]
    fn interior_has_four() {
        for i in [5, 6, 9, 10] {
            assert_eq!(with_blank_at(i).successors().len(), 4, "blank at {}", i);
        }
    }

    #[test]
    fn corner_has_two() {
        for i in [0, 3, 12, 15] {
            assert_eq!(with_blank_at(i).successors().len(), 2, "blank at {}", i);
        }
    }

    #[test]
    fn edge_has_three() {
        for i in [1, 2, 4, 7, 8, 11, 13, 14] {
            assert_eq!(with_blank_at(i).successors().len(), 3, "blank at {}", i);
        }
    }

    #[test]
    fn keeps_generation_order() {
        let dirs = with_blank_at(5)
            .successors()
            .iter()
            .map(|s| s.direction)
            .collect::<Vec<_>>();
        assert_eq!(dirs, Direction::all().collect::<Vec<_>>());

        let dirs = Board::solved()
            .successors()
            .iter()
            .map(|s| s.direction)
            .collect::<Vec<_>>();
        assert_eq!(dirs, vec![Direction::Left, Direction::Up]);
    }

    #[test]
    fn successor_moves_blank_by_offset() {
        let b = with_blank_at(6);
        for s in b.successors() {
            assert_eq!(
                s.board.blank() as isize,
                b.blank() as isize + s.direction.offset()
            );
            assert_eq!(s.board.tiles()[b.blank()], b.tiles()[s.board.blank()]);
        }
    }
}

use crate::prelude::*;

// Rows are counted from the top starting at 0. The goal has its blank in
// row 3 with no inversions, so a board is solvable exactly when the blank
// row and the inversion count have opposite parity.

impl Board {
    /// Ordered pairs of non-blank tiles that appear out of order.
    pub fn inversions(&self) -> usize {
        let tiles = self.tiles();
        tiles
            .iter()
            .enumerate()
            .filter(|&(_, &t)| t != 0)
            .map(|(i, &t)| {
                tiles[i + 1..]
                    .iter()
                    .filter(|&&later| later != 0 && later < t)
                    .count()
            })
            .sum()
    }

    pub fn blank_row(&self) -> usize {
        self.blank() / WIDTH
    }

    pub fn is_solvable(&self) -> bool {
        let row_even = self.blank_row() % 2 == 0;
        let inversions_even = self.inversions() % 2 == 0;
        (row_even && !inversions_even) || (!row_even && inversions_even)
    }
}

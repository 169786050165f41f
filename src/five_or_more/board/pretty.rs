use itertools::Itertools;

use crate::five_or_more::prelude::*;

impl Board {
    /// Pretty-prints the board, one row per line.
    pub fn pretty(&self) -> String {
        let size = self.geometry().size();
        (0..size).map(|row| {
            (0..size).map(|col| Color::repr(self.get(row * size + col))).join(" ")
        }).join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_per_line() {
        let board = Board::from_setup(&"R...G...B".parse::<SetupString>().unwrap());
        assert_eq!(board.pretty(), "R . .\n. G .\n. . B");
    }
}

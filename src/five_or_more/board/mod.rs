pub(crate) mod indexing;
pub(crate) mod lines;
pub(crate) mod pretty;
pub(crate) mod reachability;

use super::prelude::*;

pub use reachability::Path;

/// A square grid of cells, each holding at most one ball, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// The shape of the board; fixes the length of `cells`.
    geometry: Geometry,

    /// One entry per cell, `None` when the cell is empty. Always `geometry.cells()` long.
    cells: Vec<Option<Color>>,
}

impl Default for Board {
    fn default() -> Self {
        Board::new(Geometry::default())
    }
}

impl Board {
    /// Returns a new empty board of the given shape.
    pub fn new(geometry: Geometry) -> Board {
        Board { geometry, cells: vec![None; geometry.cells()] }
    }

    /// Returns the board described by a setup string.
    pub fn from_setup(setup: &SetupString) -> Board {
        Board { geometry: setup.geometry, cells: setup.cells.clone() }
    }

    /// The shape of this board.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// The ball at a cell, if any. The index must be on the board.
    pub fn get(&self, index: usize) -> Option<Color> {
        self.cells[index]
    }

    pub fn is_empty(&self, index: usize) -> bool {
        self.cells[index].is_none()
    }

    /// Every empty cell, recomputed by scanning the board.
    pub fn empty_cells(&self) -> CellSet {
        self.cells.iter().enumerate().filter(|(_, c)| c.is_none()).map(|(i, _)| i).collect()
    }

    /// Every occupied cell.
    pub fn occupied_cells(&self) -> CellSet {
        self.cells.iter().enumerate().filter(|(_, c)| c.is_some()).map(|(i, _)| i).collect()
    }

    /// The number of balls on the board.
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Whether no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Puts a ball on a cell. Callers make sure the cell is empty first.
    pub fn place(&mut self, index: usize, color: Color) -> &mut Self {
        self.cells[index] = Some(color);
        self
    }

    /// Empties a cell; emptying an empty cell does nothing.
    pub fn clear(&mut self, index: usize) -> &mut Self {
        self.cells[index] = None;
        self
    }

    /// Empties every cell in the set.
    pub fn clear_all(&mut self, cells: &CellSet) -> &mut Self {
        cells.iter().for_each(|i| { self.clear(i); });
        self
    }

    /// Empties the whole board.
    pub fn reset(&mut self) -> &mut Self {
        self.cells.fill(None);
        self
    }

    /// Notates the board as a setup string: one character per cell in row-major order.
    pub fn notate(&self) -> String {
        self.cells.iter().map(|c| Color::repr(*c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_and_clear() {
        let mut board = Board::default();
        assert_eq!(board.empty_cells().len(), 81);
        assert_eq!(board.count(), 0);

        board.place(0, Color::Red).place(80, Color::Blue);
        assert_eq!(board.get(0), Some(Color::Red));
        assert!(!board.is_empty(80));
        assert_eq!(board.count(), 2);
        assert_eq!(board.occupied_cells(), CellSet::from_iter([0, 80]));
        assert!(!board.empty_cells().contains(&0));

        board.clear(0).clear(0);
        assert!(board.is_empty(0));
        assert_eq!(board.count(), 1);

        board.reset();
        assert_eq!(board.count(), 0);
    }

    #[test]
    fn full_board() {
        let mut board = Board::new(Geometry::new(2));
        for i in 0..4 {
            assert!(!board.is_full());
            board.place(i, Color::Green);
        }
        assert!(board.is_full());
        assert!(board.empty_cells().is_empty());

        board.clear_all(&CellSet::from_iter([1, 2]));
        assert_eq!(board.notate(), "G..G");
    }

    #[test]
    fn setup_string_round_trip() {
        let setup = "RY..C.G.B".parse::<SetupString>().unwrap();
        let board = Board::from_setup(&setup);
        assert_eq!(board.geometry().size(), 3);
        assert_eq!(board.get(4), Some(Color::Cyan));
        assert_eq!(board.notate(), "RY..C.G.B");
    }
}

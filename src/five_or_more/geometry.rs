use crate::five_or_more::prelude::*;

/// The shape of a square board: maps between coordinates and row-major cell indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Geometry {
    size: usize,
}

impl Default for Geometry {
    fn default() -> Self {
        Geometry::new(DEFAULT_BOARD_SIZE)
    }
}

impl Geometry {
    /// Constructs the geometry of a `size` by `size` board.
    pub fn new(size: usize) -> Geometry {
        Geometry { size }
    }

    /// The side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The number of cells on the board.
    pub fn cells(&self) -> usize {
        self.size * self.size
    }

    /// Determines whether or not the offset lies on the board.
    pub fn in_bounds(&self, offset: &OffsetCoord) -> bool {
        let size = self.size as isize;
        0 <= offset.rows && offset.rows < size && 0 <= offset.cols && offset.cols < size
    }

    /// Determines whether or not the coord lies on the board.
    pub fn contains(&self, coord: &Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// The linear index of an in-bounds coord.
    pub fn to_index(&self, coord: &Coord) -> usize {
        coord.row * self.size + coord.col
    }

    /// The coord of an in-bounds linear index.
    pub fn to_coord(&self, index: usize) -> Coord {
        Coord::new(index / self.size, index % self.size)
    }

    /// Checked form of `to_index`.
    pub fn index(&self, coord: &Coord) -> Result<usize> {
        if self.contains(coord) {
            Ok(self.to_index(coord))
        } else {
            Err(anyhow!("invalid coordinate ({}, {}) on a {}x{} board", coord.row, coord.col, self.size, self.size))
        }
    }

    /// Checked form of `to_coord`.
    pub fn coord(&self, index: usize) -> Result<Coord> {
        if index < self.cells() {
            Ok(self.to_coord(index))
        } else {
            Err(anyhow!("invalid cell index {index} on a {}x{} board", self.size, self.size))
        }
    }

    /// Takes one step from a cell, if the step stays on the board.
    pub fn step(&self, index: usize, offset: &OffsetCoord) -> Option<usize> {
        let candidate = self.to_coord(index) + offset;
        if self.in_bounds(&candidate) {
            Some(self.to_index(&candidate.coerce()))
        } else {
            None
        }
    }

    /// The orthogonal neighbours of a cell, in the fixed order down, up, right, left.
    pub fn neighbours(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        ORTHOGONAL_OFFSETS.iter().filter_map(move |offset| self.step(index, offset))
    }

    /// Walks from a cell in one direction until it leaves the board; the cell itself is excluded.
    pub fn ray(&self, index: usize, direction: OffsetCoord) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(self.step(index, &direction), move |&i| self.step(i, &direction))
    }
}

use std::sync::LazyLock;

use regex::Regex;

use crate::{five_or_more::prelude::{Color, Coord, Geometry}, utils::prelude::*};

/// A string that describes a whole board: one character per cell in row-major order,
/// a colour letter for a ball or `.` for an empty cell. The board size is the square root of its length.
#[derive(Clone, Debug)]
pub struct SetupString {
    pub geometry: Geometry,
    pub cells: Vec<Option<Color>>
}

/// Finds the side length of a square board with `cells` cells, if there is one.
fn _side_length(cells: usize) -> Option<usize> {
    let side = cells.isqrt();
    (side > 0 && side * side == cells).then_some(side)
}

impl std::str::FromStr for SetupString {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let length = s.chars().count();
        let Some(size) = _side_length(length) else {
            return Err(anyhow!("setup string of length {length} does not describe a square board"));
        };
        let cells = s.chars()
            .map(|ch| Color::parse(&ch.to_string()))
            .collect::<Result<Vec<_>>>()?;
        Ok(SetupString { geometry: Geometry::new(size), cells })
    }
}

static CELL_PATTERN: LazyLock<std::result::Result<Regex, regex::Error>> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:(?<index>[0-9]+)|(?<row>[0-9]+)\s*,\s*(?<col>[0-9]+))\s*$")
});

/// A reference to a cell, either by linear index (`40`) or by row and column (`4,4`).
/// Resolving it needs the geometry of the board it refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellString {
    Index(usize),
    Coord(Coord)
}

impl std::str::FromStr for CellString {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let pattern = CELL_PATTERN.as_ref().map_err(|e| anyhow!("bad cell pattern: {e}"))?;
        let Some(matches) = pattern.captures(s) else {
            return Err(anyhow!("could not parse cell {s}"));
        };

        if let Some(index) = matches.name("index") {
            return Ok(CellString::Index(index.as_str().parse::<usize>()?));
        }
        match (matches.name("row"), matches.name("col")) {
            (Some(row), Some(col)) => Ok(CellString::Coord(Coord::new(row.as_str().parse()?, col.as_str().parse()?))),
            _                      => Err(anyhow!("could not parse cell {s}"))
        }
    }
}

impl CellString {
    /// Resolves the cell to a linear index on the given board shape.
    pub fn resolve(&self, geometry: &Geometry) -> Result<usize> {
        match self {
            CellString::Index(index) => geometry.coord(*index).map(|_| *index),
            CellString::Coord(coord) => geometry.index(coord),
        }
    }
}

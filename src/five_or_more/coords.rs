use crate::five_or_more::prelude::*;

/// Simple board coordinate; bounds belong to the geometry it is used with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl std::str::FromStr for Coord {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let Some((row, col)) = s.split_once(',') else {
            return Err(anyhow!("expected a row,col pair for Coord; received {s}"));
        };
        let row = row.trim().parse::<usize>().with_context(|| format!("invalid row in {s}"))?;
        let col = col.trim().parse::<usize>().with_context(|| format!("invalid col in {s}"))?;
        Ok(Coord { row, col })
    }
}

impl Coord {
    /// Constructs a new coord.
    pub fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }
}

// Simple offset pair that can be used to walk the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OffsetCoord {
    pub rows: isize,
    pub cols: isize,
}

/// Offsets that turn a coordinate into one of its orthogonal neighbours, in search order: down, up, right, left.
pub static ORTHOGONAL_OFFSETS: [OffsetCoord; 4] = [
    OffsetCoord::new(1, 0),
    OffsetCoord::new(-1, 0),
    OffsetCoord::new(0, 1),
    OffsetCoord::new(0, -1),
];

/// The four line directions: vertical, horizontal and both diagonals.
/// Each is scanned forwards and backwards from a pivot.
pub static LINE_DIRECTIONS: [OffsetCoord; 4] = [
    OffsetCoord::new(1, 0),
    OffsetCoord::new(0, 1),
    OffsetCoord::new(1, 1),
    OffsetCoord::new(1, -1),
];

impl OffsetCoord {
    /// Coerces the offset into a coordinate unchecked.
    pub fn coerce(&self) -> Coord {
        Coord {
            row: self.rows as usize,
            col: self.cols as usize,
        }
    }

    /// Constructs a new offset coord.
    pub const fn new(rows: isize, cols: isize) -> OffsetCoord {
        OffsetCoord { rows, cols }
    }

    /// The same direction, pointing the other way.
    pub fn reversed(&self) -> OffsetCoord {
        OffsetCoord { rows: -self.rows, cols: -self.cols }
    }
}

// C -> OC

impl From<&Coord> for OffsetCoord {
    fn from(value: &Coord) -> Self {
        OffsetCoord {
            rows: value.row as isize,
            cols: value.col as isize,
        }
    }
}

// OC + OC

impl Add<&OffsetCoord> for &OffsetCoord {
    type Output = OffsetCoord;
    fn add(self, rhs: &OffsetCoord) -> Self::Output {
        OffsetCoord {
            rows: self.rows + rhs.rows,
            cols: self.cols + rhs.cols,
        }
    }
}

impl Add<&OffsetCoord> for OffsetCoord {
    type Output = OffsetCoord;
    fn add(self, rhs: &OffsetCoord) -> Self::Output {
        &self + rhs
    }
}

// C + OC

impl Add<&OffsetCoord> for &Coord {
    type Output = OffsetCoord;
    fn add(self, rhs: &OffsetCoord) -> Self::Output {
        OffsetCoord::from(self) + rhs
    }
}

impl Add<&OffsetCoord> for Coord {
    type Output = OffsetCoord;
    fn add(self, rhs: &OffsetCoord) -> Self::Output {
        &self + rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pairs() {
        assert_eq!("4,7".parse::<Coord>().unwrap(), Coord::new(4, 7));
        assert_eq!(" 0 , 12".parse::<Coord>().unwrap(), Coord::new(0, 12));
        assert!("47".parse::<Coord>().is_err());
        assert!("a,1".parse::<Coord>().is_err());
    }

    #[test]
    fn offsets_walk() {
        let origin = Coord::new(2, 2);
        let step = origin + &LINE_DIRECTIONS[3];
        assert_eq!(step, OffsetCoord::new(3, 1));
        assert_eq!(step + &LINE_DIRECTIONS[3].reversed(), OffsetCoord::from(&origin));
        assert_eq!(&origin + &ORTHOGONAL_OFFSETS[1], OffsetCoord::new(1, 2));
        assert_eq!((origin + &ORTHOGONAL_OFFSETS[3]).coerce(), Coord::new(2, 1));
    }
}

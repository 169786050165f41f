use super::*;

impl Board {
    /// Collects every ball that forms a line of at least `min_line` through the pivot.
    ///
    /// Each of the four directions is scanned both ways from the pivot, stopping at the first cell of
    /// another colour (or the edge). Runs that qualify in several directions are merged, so a ball
    /// shared by two lines appears once. An empty pivot clears nothing.
    pub fn collect_clearable(&self, pivot: usize, min_line: usize) -> CellSet {
        let mut clearable = CellSet::default();
        let Some(color) = self.get(pivot) else {
            return clearable;
        };

        for direction in coords::LINE_DIRECTIONS.iter() {
            let mut run = CellSet::from_iter([pivot]);
            for heading in [*direction, direction.reversed()] {
                self.geometry()
                    .ray(pivot, heading)
                    .take_while(|&i| self.get(i) == Some(color))
                    .for_each(|i| { run.insert(&i); });
            }
            if run.len() >= min_line {
                clearable.union_inplace(&run);
            }
        }
        clearable
    }

    /// Collects the clearable balls for several pivots at once.
    pub fn collect_clearable_from(&self, pivots: &CellSet, min_line: usize) -> CellSet {
        let mut clearable = CellSet::default();
        pivots.iter().for_each(|pivot| {
            clearable.union_inplace(&self.collect_clearable(pivot, min_line));
        });
        clearable
    }
}

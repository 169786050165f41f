use crate::five_or_more::prelude::*;

impl Board {
    /// Gets the ball at a cell, failing on indices off the board.
    pub fn cell(&self, index: usize) -> Result<Option<Color>> {
        self.geometry().coord(index)?;
        Ok(self.get(index))
    }
}

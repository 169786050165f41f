use rand::Rng;

use super::*;

impl Engine {
    /// Drops the given colours onto random empty cells and clears any lines they complete.
    ///
    /// Each colour lands on a cell picked uniformly from the cells still empty. When the board runs
    /// out of room the remaining colours are discarded. Returns the cells that received a ball.
    pub fn spawn_turn(&mut self, colors: &[Color]) -> CellSet {
        let (spawned, _, _) = self.spawn_and_clear(colors);
        self.check_game_over();
        spawned
    }

    /// Spawns, then clears; returns the spawned cells, the cleared cells and the points scored.
    pub(super) fn spawn_and_clear(&mut self, colors: &[Color]) -> (CellSet, CellSet, u32) {
        let mut empties = self.board.empty_cells();
        let mut spawned = CellSet::default();

        for &color in colors {
            if empties.is_empty() {
                log::debug!("board is full; dropping {} of {} spawns", colors.len() - spawned.len(), colors.len());
                break;
            }
            let Some(index) = empties.nth(self.rng.gen_range(0..empties.len())) else {
                break;
            };
            empties.remove(&index);
            self.board.place(index, color);
            self.presenter.render_cell(index, Some(color));
            spawned.insert(&index);
        }

        let cleared = self.board.collect_clearable_from(&spawned, self.rules.min_line);
        let points = self.clear_lines(&cleared);
        (spawned, cleared, points)
    }

    /// Draws `count` colours from the active palette.
    pub(super) fn random_colors(&mut self, count: usize) -> Vec<Color> {
        (0..count).map(|_| Color::random(&mut self.rng, self.rules.palette)).collect()
    }
}

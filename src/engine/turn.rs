use super::*;

impl Engine {
    /// Routes a tap from the host. Taps outside the board are an error; everything else is a normal outcome.
    pub fn handle_cell_tap(&mut self, index: usize) -> Result<TapOutcome> {
        self.board.geometry().coord(index).context("tap outside the board")?;
        self.select_cell(index)
    }

    /// Handles a tap on a cell.
    ///
    /// Tapping a ball selects it, or deselects it if it was already selected. Tapping an empty cell
    /// while a ball is selected tries to move the ball there. Input is dropped while a turn is
    /// resolving and after the game has ended.
    pub fn select_cell(&mut self, index: usize) -> Result<TapOutcome> {
        if self.state != TurnState::Idle {
            log::debug!("ignoring tap on {index} while {:?}", self.state);
            return Ok(TapOutcome::Ignored);
        }

        if self.board.cell(index)?.is_some() {
            if self.selected == Some(index) {
                self.set_selection(None);
                return Ok(TapOutcome::Deselected(index));
            }
            self.set_selection(Some(index));
            self.presenter.haptic_cue(Cue::Select);
            return Ok(TapOutcome::Selected(index));
        }

        match self.selected {
            Some(from) => Ok(TapOutcome::Moved(self.attempt_move(from, index)?)),
            None       => Ok(TapOutcome::NoSelection),
        }
    }

    /// Plays one full turn: walk the ball from `from` to `to`, clear any line it completes, otherwise
    /// spawn the previewed balls and clear what they complete, redraw the preview, then check for a
    /// full board.
    ///
    /// A blocked path is a normal outcome that leaves the board, and the selection, untouched.
    /// Moving a ball onto its own cell is a legal turn that still spawns.
    pub fn attempt_move(&mut self, from: usize, to: usize) -> Result<MoveOutcome> {
        if self.state != TurnState::Idle {
            log::debug!("ignoring move {from} -> {to} while {:?}", self.state);
            return Ok(MoveOutcome::Ignored);
        }

        let Some(color) = self.board.cell(from)? else {
            return Err(anyhow!("there is no ball at cell {from} to move"));
        };
        if from != to && self.board.cell(to)?.is_some() {
            return Err(anyhow!("cannot move onto occupied cell {to}"));
        }

        self.state = TurnState::Resolving;

        let Some(path) = self.board.find_path(from, to) else {
            log::debug!("no path from {from} to {to}");
            self.presenter.haptic_cue(Cue::Blocked);
            self.presenter.set_status("no path");
            self.state = TurnState::Idle;
            return Ok(MoveOutcome::Blocked);
        };
        log::debug!("moving {color} along {}", path.notate());
        self.relocate(&path, color);

        let cleared = self.board.collect_clearable(to, self.rules.min_line);
        let (spawned, spawn_cleared, points) = if cleared.is_empty() {
            let colors = std::mem::take(&mut self.next_colors);
            self.spawn_and_clear(&colors)
        } else {
            (CellSet::default(), CellSet::default(), self.clear_lines(&cleared))
        };

        self.next_colors = self.random_colors(self.rules.balls_per_turn);
        self.presenter.preview_next(&self.next_colors);
        self.set_selection(None);

        let game_over = self.check_game_over();
        Ok(MoveOutcome::Completed(TurnReport { path, cleared, spawned, spawn_cleared, points, game_over }))
    }

    /// Moves the ball on the board once the presenter has animated its walk.
    fn relocate(&mut self, path: &Path, color: Color) {
        self.presenter.animate_move(path);
        self.pacer.pause(self.rules.move_step_delay * path.steps() as u32);

        self.board.clear(path.source()).place(path.destination(), color);
        self.presenter.render_cell(path.source(), None);
        self.presenter.render_cell(path.destination(), Some(color));
    }

    /// Clears a set of balls as one clearing event and scores it. Clearing nothing scores nothing.
    pub(super) fn clear_lines(&mut self, cells: &CellSet) -> u32 {
        if cells.is_empty() {
            return 0;
        }
        self.pacer.pause(self.rules.clear_delay);
        self.board.clear_all(cells);
        for index in cells.iter() {
            self.presenter.render_cell(index, None);
        }

        let points = self.scores.record_clear(cells.len(), &self.rules);
        self.presenter.update_counters(self.scores.score, self.scores.lines, self.scores.level);
        self.presenter.haptic_cue(Cue::Clear);
        log::info!("cleared {} balls for {points} points; score {}", cells.len(), self.scores.score);
        points
    }

    fn set_selection(&mut self, selected: Option<usize>) {
        self.selected = selected;
        self.presenter.highlight(selected);
    }
}

use itertools::Itertools;

use crate::prelude::*;

/// A presenter for a headless host: every event goes to the log, the protocol stream stays clean.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalPresenter;

impl Presenter for TerminalPresenter {
    fn render_cell(&mut self, index: usize, cell: Option<Color>) {
        match cell {
            Some(color) => log::trace!("cell {index} -> {color} ({})", color.hex()),
            None        => log::trace!("cell {index} -> ."),
        }
    }

    fn highlight(&mut self, selected: Option<usize>) {
        log::debug!("selection {:?}", selected);
    }

    fn animate_move(&mut self, path: &Path) {
        log::debug!("ball travels {}", path.notate());
    }

    fn set_status(&mut self, text: &str) {
        log::info!("{text}");
    }

    fn haptic_cue(&mut self, cue: Cue) {
        log::debug!("cue {:?}", cue);
    }

    fn preview_next(&mut self, colors: &[Color]) {
        log::debug!("next {}", colors.iter().join(""));
    }

    fn update_counters(&mut self, score: u32, lines: u32, level: u32) {
        log::debug!("score {score} lines {lines} level {level}");
    }
}

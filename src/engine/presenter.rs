use std::time::Duration;

use crate::five_or_more::prelude::*;

/// Kinds of tactile feedback a presenter may play.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Select,
    Blocked,
    Clear,
    GameOver,
}

/// Everything the engine tells the outside world. The engine never reads anything back,
/// and a presenter has no way to change the board.
///
/// Every hook defaults to doing nothing, so a presenter only implements what it shows.
pub trait Presenter {
    fn render_cell(&mut self, _index: usize, _cell: Option<Color>) {}
    fn highlight(&mut self, _selected: Option<usize>) {}
    fn animate_move(&mut self, _path: &Path) {}
    fn set_status(&mut self, _text: &str) {}
    fn haptic_cue(&mut self, _cue: Cue) {}
    fn preview_next(&mut self, _colors: &[Color]) {}
    fn update_counters(&mut self, _score: u32, _lines: u32, _level: u32) {}
}

/// A presenter that shows nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {}

/// Paces a turn between board mutations so a presenter can keep up.
pub trait Pacer {
    fn pause(&mut self, duration: Duration);
}

/// Never waits.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPacing;

impl Pacer for NoPacing {
    fn pause(&mut self, _duration: Duration) {}
}

/// Blocks the thread for the requested time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SleepPacing;

impl Pacer for SleepPacing {
    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

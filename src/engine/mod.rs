mod presenter;
mod rules;
mod scores;
mod spawn;
mod turn;

use rand::{rngs::StdRng, SeedableRng};

use crate::five_or_more::prelude::*;

pub use presenter::{Cue, NoPacing, NullPresenter, Pacer, Presenter, SleepPacing};
pub use rules::Rules;
pub use scores::Scoreboard;

/// Where the engine is in its turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnState {
    /// Accepting input.
    Idle,
    /// A move is being resolved; input is dropped.
    Resolving,
    /// The board filled up; only a new game leaves this state.
    GameOver,
}

/// What a completed move did to the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub path: Path,
    /// Balls cleared by the moved ball itself. When non-empty, nothing was spawned.
    pub cleared: CellSet,
    pub spawned: CellSet,
    /// Balls cleared by lines the spawned balls completed.
    pub spawn_cleared: CellSet,
    pub points: u32,
    pub game_over: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The engine was not accepting input.
    Ignored,
    /// No clear path joins the two cells; nothing changed.
    Blocked,
    Completed(TurnReport),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TapOutcome {
    Ignored,
    Selected(usize),
    Deselected(usize),
    /// An empty cell was tapped with nothing selected.
    NoSelection,
    Moved(MoveOutcome),
}

/// A single game session: owns the board, the counters, the selection and the turn lock.
pub struct Engine {
    rules: Rules,
    board: Board,
    scores: Scoreboard,
    selected: Option<usize>,
    state: TurnState,
    next_colors: Vec<Color>,
    rng: StdRng,
    presenter: Box<dyn Presenter>,
    pacer: Box<dyn Pacer>,
}

impl Engine {
    /// Creates an engine for the given rules, with an empty board, seeded from entropy.
    /// Call `new_game` to put the first balls down.
    pub fn new(rules: Rules) -> Result<Engine> {
        rules.validate()?;
        Ok(Engine {
            board: Board::new(rules.geometry()),
            scores: Scoreboard::default(),
            selected: None,
            state: TurnState::Idle,
            next_colors: vec![],
            rng: StdRng::from_entropy(),
            presenter: Box::new(NullPresenter),
            pacer: Box::new(NoPacing),
            rules,
        })
    }

    /// Makes every random draw reproducible.
    pub fn with_seed(mut self, seed: u64) -> Engine {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_presenter(mut self, presenter: impl Presenter + 'static) -> Engine {
        self.presenter = Box::new(presenter);
        self
    }

    pub fn with_pacer(mut self, pacer: impl Pacer + 'static) -> Engine {
        self.pacer = Box::new(pacer);
        self
    }

    /// Starts a new game: empties the board, resets counters, selection and lock, draws the
    /// preview, then spawns the opening balls. Returns the cells the opening balls landed on.
    pub fn new_game(&mut self) -> CellSet {
        self.board.reset();
        self.reset_session();

        let opening = self.random_colors(self.rules.initial_balls);
        let (spawned, _, _) = self.spawn_and_clear(&opening);
        log::info!("new game with {} opening balls: {}", spawned.len(), spawned.notate());

        self.check_game_over();
        spawned
    }

    /// Starts a new game from a prepared board, without any opening spawn.
    pub fn start_from(&mut self, board: Board) -> Result<()> {
        if *board.geometry() != self.rules.geometry() {
            return Err(anyhow!(
                "board is {0}x{0} but the rules play on {1}x{1}",
                board.geometry().size(),
                self.rules.board_size
            ));
        }
        self.board = board;
        self.reset_session();
        log::info!("new game from setup {}", self.board.notate());

        self.check_game_over();
        Ok(())
    }

    fn reset_session(&mut self) {
        self.scores = Scoreboard::default();
        self.selected = None;
        self.state = TurnState::Idle;
        self.next_colors = self.random_colors(self.rules.balls_per_turn);

        for index in 0..self.board.geometry().cells() {
            self.presenter.render_cell(index, self.board.get(index));
        }
        self.presenter.highlight(None);
        self.presenter.update_counters(self.scores.score, self.scores.lines, self.scores.level);
        self.presenter.preview_next(&self.next_colors);
    }

    /// Ends the turn: locks the engine for good if the board is full, otherwise reopens it for input.
    fn check_game_over(&mut self) -> bool {
        if self.board.is_full() {
            self.state = TurnState::GameOver;
            self.presenter.haptic_cue(Cue::GameOver);
            self.presenter.set_status("game over");
            log::info!("game over with score {} after {} lines", self.scores.score, self.scores.lines);
            true
        } else {
            self.state = TurnState::Idle;
            false
        }
    }

    // accessors

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    pub fn score(&self) -> u32 {
        self.scores.score
    }

    pub fn lines(&self) -> u32 {
        self.scores.lines
    }

    pub fn level(&self) -> u32 {
        self.scores.level
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state == TurnState::GameOver
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The colours the next spawn will place.
    pub fn next_colors(&self) -> &[Color] {
        &self.next_colors
    }

    /// Looks up the path a move would take, without making it.
    pub fn find_path(&self, from: usize, to: usize) -> Result<Option<Path>> {
        self.board.cell(from)?;
        self.board.cell(to)?;
        Ok(self.board.find_path(from, to))
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    /// Records the cues and statuses the engine emits.
    #[derive(Clone, Default)]
    pub struct Recorder {
        pub cues: Rc<RefCell<Vec<Cue>>>,
        pub statuses: Rc<RefCell<Vec<String>>>,
    }

    impl Presenter for Recorder {
        fn set_status(&mut self, text: &str) {
            self.statuses.borrow_mut().push(text.to_owned());
        }

        fn haptic_cue(&mut self, cue: Cue) {
            self.cues.borrow_mut().push(cue);
        }
    }

    /// A board where no two neighbouring balls (in any line direction) share a colour.
    pub fn patterned(size: usize, holes: &[usize]) -> Board {
        let mut board = Board::new(Geometry::new(size));
        for index in 0..size * size {
            if holes.contains(&index) {
                continue;
            }
            let Coord { row, col } = board.geometry().to_coord(index);
            board.place(index, Color::all()[(row * 3 + col) % PALETTE_SIZE]);
        }
        board
    }

    /// A seeded engine on default rules, started from the given board.
    pub fn engine_from(board: Board) -> (Engine, Recorder) {
        let recorder = Recorder::default();
        let mut engine = Engine::new(Rules::default())
            .unwrap()
            .with_seed(1234)
            .with_presenter(recorder.clone());
        engine.start_from(board).unwrap();
        (engine, recorder)
    }
}

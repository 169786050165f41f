use std::time::Duration;

use crate::five_or_more::prelude::*;

/// The tunable rules of a game. Every field has a builder so hosts can override just what they need.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rules {
    pub board_size: usize,
    pub initial_balls: usize,
    pub balls_per_turn: usize,
    pub points_per_ball: u32,
    pub min_line: usize,
    pub level_every: u32,
    pub palette: usize,

    /// Pause per step while a ball travels along its path.
    pub move_step_delay: Duration,

    /// Pause between a line lighting up and its balls vanishing.
    pub clear_delay: Duration,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            board_size: DEFAULT_BOARD_SIZE,
            initial_balls: DEFAULT_INITIAL_BALLS,
            balls_per_turn: DEFAULT_BALLS_PER_TURN,
            points_per_ball: DEFAULT_POINTS_PER_BALL,
            min_line: DEFAULT_MIN_LINE,
            level_every: DEFAULT_LEVEL_EVERY,
            palette: PALETTE_SIZE,
            move_step_delay: Duration::from_millis(30),
            clear_delay: Duration::from_millis(180),
        }
    }
}

impl Rules {
    /// Gets the default rules.
    pub fn new() -> Rules {
        Rules::default()
    }

    pub fn with_board_size(mut self, board_size: usize) -> Rules {
        self.board_size = board_size;
        self
    }

    pub fn with_initial_balls(mut self, initial_balls: usize) -> Rules {
        self.initial_balls = initial_balls;
        self
    }

    pub fn with_balls_per_turn(mut self, balls_per_turn: usize) -> Rules {
        self.balls_per_turn = balls_per_turn;
        self
    }

    pub fn with_points_per_ball(mut self, points_per_ball: u32) -> Rules {
        self.points_per_ball = points_per_ball;
        self
    }

    pub fn with_min_line(mut self, min_line: usize) -> Rules {
        self.min_line = min_line;
        self
    }

    pub fn with_level_every(mut self, level_every: u32) -> Rules {
        self.level_every = level_every;
        self
    }

    pub fn with_palette(mut self, palette: usize) -> Rules {
        self.palette = palette;
        self
    }

    /// Sets both presentation delays at once.
    pub fn with_delays(mut self, move_step_delay: Duration, clear_delay: Duration) -> Rules {
        self.move_step_delay = move_step_delay;
        self.clear_delay = clear_delay;
        self
    }

    /// Drops every presentation delay.
    pub fn without_delays(self) -> Rules {
        self.with_delays(Duration::ZERO, Duration::ZERO)
    }

    /// The board shape these rules are played on.
    pub fn geometry(&self) -> Geometry {
        Geometry::new(self.board_size)
    }

    /// Rejects rule sets no game can be played with.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(anyhow!("board size must be between 1 and {MAX_BOARD_SIZE}, received {}", self.board_size));
        }
        if !(1..=PALETTE_SIZE).contains(&self.palette) {
            return Err(anyhow!("palette size must be between 1 and {PALETTE_SIZE}, received {}", self.palette));
        }
        if self.min_line < 2 || self.min_line > self.board_size {
            return Err(anyhow!("minimum line length must be between 2 and the board size {}, received {}", self.board_size, self.min_line));
        }
        if self.level_every == 0 {
            return Err(anyhow!("levels must advance every 1 or more lines"));
        }
        Ok(())
    }
}

use clap::Parser;
use crate::prelude::*;

#[derive(Clone, Debug, Default, Parser)]
pub struct ServerOptions {
    #[arg(short, long)]
    pub log_level: Option<String>,

    #[arg(long)]
    pub board_size: Option<usize>,

    #[arg(long)]
    pub initial_balls: Option<usize>,

    #[arg(long)]
    pub balls_per_turn: Option<usize>,

    #[arg(long)]
    pub points_per_ball: Option<u32>,

    #[arg(long)]
    pub min_line: Option<usize>,

    #[arg(long)]
    pub level_every: Option<u32>,

    #[arg(short, long)]
    pub palette: Option<usize>,

    #[arg(short, long)]
    pub seed: Option<u64>,

    #[arg(short, long, default_value_t = false)]
    pub animate: bool,
}

impl ServerOptions {
    pub fn rules(&self) -> Rules {
        let mut rules = Rules::default();

        if let Some(board_size) = self.board_size {
            rules = rules.with_board_size(board_size);
        }
        if let Some(initial_balls) = self.initial_balls {
            rules = rules.with_initial_balls(initial_balls);
        }
        if let Some(balls_per_turn) = self.balls_per_turn {
            rules = rules.with_balls_per_turn(balls_per_turn);
        }
        if let Some(points_per_ball) = self.points_per_ball {
            rules = rules.with_points_per_ball(points_per_ball);
        }
        if let Some(min_line) = self.min_line {
            rules = rules.with_min_line(min_line);
        }
        if let Some(level_every) = self.level_every {
            rules = rules.with_level_every(level_every);
        }
        if let Some(palette) = self.palette {
            rules = rules.with_palette(palette);
        }
        if !self.animate {
            rules = rules.without_delays();
        }

        rules
    }
}

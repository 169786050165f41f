use super::Rules;

/// Score, cleared lines and level. None of them ever go down during a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scoreboard {
    pub score: u32,
    pub lines: u32,
    pub level: u32,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Scoreboard { score: 0, lines: 0, level: 1 }
    }
}

impl Scoreboard {
    /// Records one clearing event of `balls` balls and returns the points it earned.
    /// A single event counts as one line even when it clears several crossing lines.
    pub fn record_clear(&mut self, balls: usize, rules: &Rules) -> u32 {
        let points = u32::try_from(balls).unwrap_or(u32::MAX).saturating_mul(rules.points_per_ball);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(1);
        if self.lines % rules.level_every == 0 {
            self.level += 1;
        }
        points
    }
}

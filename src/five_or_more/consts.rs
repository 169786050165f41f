use rand::Rng;
use crate::utils::prelude::*;

pub const DEFAULT_BOARD_SIZE: usize = 9;
pub const MAX_BOARD_SIZE: usize = 255;
pub const DEFAULT_INITIAL_BALLS: usize = 5;
pub const DEFAULT_BALLS_PER_TURN: usize = 3;
pub const DEFAULT_POINTS_PER_BALL: u32 = 10;
pub const DEFAULT_MIN_LINE: usize = 5;
pub const DEFAULT_LEVEL_EVERY: u32 = 10;
pub const PALETTE_SIZE: usize = 7;

// A ball colour.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    Red = 0,
    Yellow = 1,
    Cyan = 2,
    Green = 3,
    Blue = 4,
    Purple = 5,
    Orange = 6,
}

impl Color {
    /// Gets the full palette in order.
    pub fn all() -> [Color; PALETTE_SIZE] {
        [Color::Red, Color::Yellow, Color::Cyan, Color::Green, Color::Blue, Color::Purple, Color::Orange]
    }

    /// Notates the colour.
    pub fn notate(&self) -> String {
        match self {
            Color::Red    => "R",
            Color::Yellow => "Y",
            Color::Cyan   => "C",
            Color::Green  => "G",
            Color::Blue   => "B",
            Color::Purple => "P",
            Color::Orange => "O",
        }.into()
    }

    /// The display colour a presenter paints the ball with.
    pub fn hex(&self) -> &'static str {
        match self {
            Color::Red    => "#ff1d4d",
            Color::Yellow => "#ffeb0a",
            Color::Cyan   => "#00d4ff",
            Color::Green  => "#00b34f",
            Color::Blue   => "#004bff",
            Color::Purple => "#bf34ff",
            Color::Orange => "#ff7a00",
        }
    }

    /// Parses into a colour; the empty-cell markers parse to None.
    pub fn parse(s: &str) -> Result<Option<Color>> {
        match s {
            "r" | "R"       => Ok(Some(Color::Red)),
            "y" | "Y"       => Ok(Some(Color::Yellow)),
            "c" | "C"       => Ok(Some(Color::Cyan)),
            "g" | "G"       => Ok(Some(Color::Green)),
            "b" | "B"       => Ok(Some(Color::Blue)),
            "p" | "P"       => Ok(Some(Color::Purple)),
            "o" | "O"       => Ok(Some(Color::Orange)),
            "_" | "-" | "." => Ok(None),
            _               => Err(anyhow!("invalid notation {s} for colour"))
        }
    }

    /// Notates a cell, which may be empty.
    pub fn repr(cell: Option<Color>) -> String {
        cell.map_or(".".into(), |c| c.notate())
    }

    /// Draws a colour uniformly from the first `palette` colours.
    pub fn random<R: Rng>(rng: &mut R, palette: usize) -> Color {
        let palette = palette.clamp(1, PALETTE_SIZE);
        Color::all()[rng.gen_range(0..palette)]
    }
}

impl std::str::FromStr for Color {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Color::parse(s)?.ok_or(anyhow!("expected a colour, received the empty marker {s}"))
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.notate())
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use super::*;

    #[test]
    fn notation_is_reversible() {
        for color in Color::all() {
            assert_eq!(color.notate().parse::<Color>().unwrap(), color);
        }
        assert_eq!(Color::parse(".").unwrap(), None);
        assert!(Color::parse("x").is_err());
        assert!(".".parse::<Color>().is_err());
    }

    #[test]
    fn hex_colours_are_distinct() {
        let hexes = Color::all().map(|c| c.hex());
        for (i, hex) in hexes.iter().enumerate() {
            assert!(hex.starts_with('#') && hex.len() == 7);
            assert!(!hexes[i + 1..].contains(hex));
        }
    }

    #[test]
    fn random_respects_palette() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let color = Color::random(&mut rng, 3);
            assert!(color <= Color::Cyan);
        }
    }
}

use std::{fmt, str::FromStr};

use crate::cube::CubeError;

/// The color of a single tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TileColor {
    White,
    Green,
    Blue,
    Red,
    Orange,
    Yellow,
}

impl TileColor {
    pub const ALL: [Self; 6] = {
        use TileColor::*;
        [White, Green, Blue, Red, Orange, Yellow]
    };

    /// The fixed 3-bit code used by absolute bit observations.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            TileColor::Red => 0b001,
            TileColor::Orange => 0b010,
            TileColor::Yellow => 0b011,
            TileColor::Green => 0b100,
            TileColor::Blue => 0b101,
            TileColor::White => 0b110,
        }
    }

    /// Inverse of [`TileColor::code`].
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.code() == code)
    }

    /// The color external renderers should paint this tile with.
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            TileColor::White => (255, 255, 255),
            TileColor::Orange => (255, 165, 0),
            TileColor::Green => (0, 128, 0),
            TileColor::Red => (255, 0, 0),
            TileColor::Blue => (0, 0, 255),
            TileColor::Yellow => (255, 255, 0),
        }
    }

    /// Index of this color in a discrete observation space.
    #[must_use]
    pub const fn observation_index(self) -> u8 {
        match self {
            TileColor::Red => 0,
            TileColor::Orange => 1,
            TileColor::Yellow => 2,
            TileColor::Green => 3,
            TileColor::Blue => 4,
            TileColor::White => 5,
        }
    }

    #[must_use]
    pub const fn label(self) -> char {
        match self {
            TileColor::White => 'W',
            TileColor::Green => 'G',
            TileColor::Blue => 'B',
            TileColor::Red => 'R',
            TileColor::Orange => 'O',
            TileColor::Yellow => 'Y',
        }
    }
}

impl fmt::Display for TileColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for TileColor {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Labels may arrive padded with spaces
        match s.trim() {
            "W" => Ok(TileColor::White),
            "G" => Ok(TileColor::Green),
            "B" => Ok(TileColor::Blue),
            "R" => Ok(TileColor::Red),
            "O" => Ok(TileColor::Orange),
            "Y" => Ok(TileColor::Yellow),
            _ => Err(CubeError::UnknownColor(s.to_owned())),
        }
    }
}

use crate::utils::error::{MowerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Lower-left corner of every plateau.
pub const BOTTOM_LEFT: Coordinates = Coordinates { x: 0, y: 0 };

/// Cardinal orientation of a mower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    pub fn code(self) -> char {
        match self {
            Heading::North => 'N',
            Heading::East => 'E',
            Heading::South => 'S',
            Heading::West => 'W',
        }
    }

    pub fn from_code(code: &str) -> Result<Self> {
        match code {
            "N" => Ok(Heading::North),
            "E" => Ok(Heading::East),
            "S" => Ok(Heading::South),
            "W" => Ok(Heading::West),
            other => Err(MowerError::invalid_argument(format!(
                "'{}' is not a valid heading",
                other
            ))),
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Heading::North | Heading::South)
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Heading::East | Heading::West)
    }

    /// North and East move towards larger coordinates.
    pub fn is_incremental(self) -> bool {
        matches!(self, Heading::North | Heading::East)
    }

    fn index(self) -> usize {
        match self {
            Heading::North => 0,
            Heading::East => 1,
            Heading::South => 2,
            Heading::West => 3,
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Heading {
    type Err = MowerError;

    fn from_str(s: &str) -> Result<Self> {
        Heading::from_code(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Left,
    Right,
}

// Rows indexed by `Heading::index`, columns by rotation (left, right).
const ROTATIONS: [[Heading; 2]; 4] = [
    [Heading::West, Heading::East],
    [Heading::North, Heading::South],
    [Heading::East, Heading::West],
    [Heading::South, Heading::North],
];

/// Quarter turn of `heading` in the given direction.
pub fn rotate(heading: Heading, rotation: Rotation) -> Heading {
    let column = match rotation {
        Rotation::Left => 0,
        Rotation::Right => 1,
    };
    ROTATIONS[heading.index()][column]
}

/// A single instruction understood by a mower.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Left,
    Right,
    Forward,
}

impl Movement {
    pub fn code(self) -> char {
        match self {
            Movement::Left => 'L',
            Movement::Right => 'R',
            Movement::Forward => 'M',
        }
    }

    /// `None` for [`Movement::Forward`].
    pub fn rotation(self) -> Option<Rotation> {
        match self {
            Movement::Left => Some(Rotation::Left),
            Movement::Right => Some(Rotation::Right),
            Movement::Forward => None,
        }
    }

    /// Parses a whole instruction string such as `LMLMLMLMM`.
    pub fn parse_sequence(instructions: &str) -> Result<Vec<Movement>> {
        instructions.chars().map(Movement::try_from).collect()
    }
}

impl TryFrom<char> for Movement {
    type Error = MowerError;

    fn try_from(value: char) -> Result<Self> {
        match value {
            'L' => Ok(Movement::Left),
            'R' => Ok(Movement::Right),
            'M' => Ok(Movement::Forward),
            other => Err(MowerError::invalid_argument(format!(
                "'{}' is not a valid instruction",
                other
            ))),
        }
    }
}

/// A cell of the plateau.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: i64,
    pub y: i64,
}

impl Coordinates {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Builds coordinates from raw tokens, rejecting anything that is not an integer.
    pub fn parse(x: &str, y: &str) -> Result<Self> {
        match (x.trim().parse::<i64>(), y.trim().parse::<i64>()) {
            (Ok(x), Ok(y)) => Ok(Self { x, y }),
            _ => Err(MowerError::InvalidCoordinates {
                x: x.to_string(),
                y: y.to_string(),
            }),
        }
    }

    /// Builds coordinates from a slice that must hold exactly two values.
    pub fn from_slice(values: &[i64]) -> Result<Self> {
        match values {
            [x, y] => Ok(Self::new(*x, *y)),
            other => Err(MowerError::invalid_argument(format!(
                "Invalid coordinates '{:?}'",
                other
            ))),
        }
    }

    /// The neighbouring cell one step towards `heading`, or `None` past the `i64` range.
    pub fn step(self, heading: Heading) -> Option<Self> {
        let delta = if heading.is_incremental() { 1 } else { -1 };
        if heading.is_vertical() {
            Some(Self::new(self.x, self.y.checked_add(delta)?))
        } else {
            Some(Self::new(self.x.checked_add(delta)?, self.y))
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MowerId(Uuid);

impl MowerId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for MowerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MowerId {
    type Err = MowerError;

    // 格式錯誤的 id 與不存在的 id 一樣視為找不到
    fn from_str(s: &str) -> Result<Self> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| MowerError::MowerNotFound { id: s.to_string() })
    }
}

/// Index of a plateau inside the service arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlateauId(pub usize);

impl PlateauId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Position report of a single mower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MowerStatus {
    pub x: i64,
    pub y: i64,
    pub heading: Heading,
}

impl fmt::Display for MowerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.heading)
    }
}

/// Whether the mowers of one input document share a plateau.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum PlateauMode {
    #[default]
    Shared,
    Isolated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

//! Compass quantization of displacement vectors.
//!
//! Angles follow screen coordinates: 0° is rightward and angles grow
//! clockwise because y grows downward, so `D` is 90° and `U` is 270°.

mod sequence;

pub use sequence::{extract_sequences, DirectionSequences};

use std::fmt;

use crate::math::{angle_deg, angle_diff};

/// One of eight 45° compass sectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction8 {
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
    Up,
    UpRight,
}

impl Direction8 {
    /// Sectors in clockwise order starting at 0°.
    pub const ALL: [Self; 8] = [
        Self::Right,
        Self::DownRight,
        Self::Down,
        Self::DownLeft,
        Self::Left,
        Self::UpLeft,
        Self::Up,
        Self::UpRight,
    ];

    /// Short symbol (`"R"`, `"DR"`, …).
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Right => "R",
            Self::DownRight => "DR",
            Self::Down => "D",
            Self::DownLeft => "DL",
            Self::Left => "L",
            Self::UpLeft => "UL",
            Self::Up => "U",
            Self::UpRight => "UR",
        }
    }
}

impl fmt::Display for Direction8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One of the four screen axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction4 {
    Right,
    Down,
    Left,
    Up,
}

impl Direction4 {
    /// Axes in the order [`quantize4`] checks them, with their angles.
    pub const AXES: [(Self, f64); 4] = [
        (Self::Right, 0.0),
        (Self::Down, 90.0),
        (Self::Left, 180.0),
        (Self::Up, 270.0),
    ];

    /// Single-letter symbol.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::Right => 'R',
            Self::Down => 'D',
            Self::Left => 'L',
            Self::Up => 'U',
        }
    }

    /// Arrow glyph for display.
    #[must_use]
    pub fn arrow(self) -> char {
        match self {
            Self::Right => '\u{2192}',
            Self::Down => '\u{2193}',
            Self::Left => '\u{2190}',
            Self::Up => '\u{2191}',
        }
    }

    /// Parses a single-letter symbol.
    #[must_use]
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'R' => Some(Self::Right),
            'D' => Some(Self::Down),
            'L' => Some(Self::Left),
            'U' => Some(Self::Up),
            _ => None,
        }
    }
}

impl fmt::Display for Direction4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Quantizes `(dx, dy)` into one of eight 45° sectors centered on the
/// compass directions. Every vector maps to some sector.
#[must_use]
pub fn quantize8(dx: f64, dy: f64) -> Direction8 {
    let a = (angle_deg(dx, dy) + 22.5) % 360.0;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let sector = (a / 45.0).floor() as usize;
    Direction8::ALL
        .get(sector)
        .copied()
        .unwrap_or(Direction8::Right)
}

/// Snaps `(dx, dy)` to the nearest screen axis if it lies within
/// `tolerance_deg` of it (inclusive).
///
/// Axes are checked in [`Direction4::AXES`] order and only a strictly smaller
/// difference replaces the current best, so an exact tie goes to the axis
/// checked first. Returns `None` when no axis is close enough.
#[must_use]
pub fn quantize4(dx: f64, dy: f64, tolerance_deg: f64) -> Option<Direction4> {
    let a = angle_deg(dx, dy);
    let mut best: Option<(Direction4, f64)> = None;
    for (dir, axis_deg) in Direction4::AXES {
        let diff = angle_diff(a, axis_deg);
        if diff <= tolerance_deg && best.is_none_or(|(_, bd)| diff < bd) {
            best = Some((dir, diff));
        }
    }
    best.map(|(dir, _)| dir)
}

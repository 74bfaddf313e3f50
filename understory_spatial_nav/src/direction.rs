// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation directions.

use core::fmt;
use core::str::FromStr;

/// Direction of spatial navigation, in screen space (y grows downward).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward smaller y.
    Up,
    /// Toward larger y.
    Down,
    /// Toward smaller x.
    Left,
    /// Toward larger x.
    Right,
}

impl Direction {
    /// All directions, in `up, down, left, right` order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Whether travel happens along the x axis.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Whether travel happens along the y axis.
    pub const fn is_vertical(self) -> bool {
        !self.is_horizontal()
    }

    /// The direction pointing the other way.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Direction`] from an unknown name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown navigation direction `{name}` (expected up, down, left, or right)")]
pub struct ParseDirectionError {
    name: alloc::string::String,
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Parse `"up"`, `"down"`, `"left"`, or `"right"`.
    ///
    /// Hosts that receive direction names from markup or key maps can feed
    /// them straight through.
    ///
    /// ```rust
    /// use understory_spatial_nav::Direction;
    ///
    /// assert_eq!("left".parse::<Direction>(), Ok(Direction::Left));
    /// assert!("sideways".parse::<Direction>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(ParseDirectionError { name: s.into() }),
        }
    }
}

#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Mars rover simulation.
//!
//! This crate defines the value types every other crate speaks: the toroidal
//! [`Planet`], the [`Rover`] pose that travels across it, the point
//! [`Obstacle`]s strewn over its surface, the [`Cmd`] alphabet and the
//! [`TravelOutcome`] reported once a batch of commands has been executed.
//! Values are immutable; every movement produces a fresh pose.

use std::{fmt, num::NonZeroU32};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical banner emitted when a mission starts.
pub const WELCOME_BANNER: &str = "Welcome to Mars, Rover!";

/// Cardinal headings a rover can face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Facing increasing `y`.
    North,
    /// Facing increasing `x`.
    East,
    /// Facing decreasing `y`.
    South,
    /// Facing decreasing `x`.
    West,
}

impl Orientation {
    /// Rotates a quarter turn counter-clockwise (N, W, S, E, N).
    #[must_use]
    pub const fn turn_left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// Rotates a quarter turn clockwise (N, E, S, W, N).
    #[must_use]
    pub const fn turn_right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// Unit step taken when driving forward while facing this heading.
    #[must_use]
    pub const fn forward_delta(self) -> (i64, i64) {
        match self {
            Self::North => (0, 1),
            Self::East => (1, 0),
            Self::South => (0, -1),
            Self::West => (-1, 0),
        }
    }

    /// Unit step taken when reversing; the negation of [`Self::forward_delta`].
    #[must_use]
    pub const fn backward_delta(self) -> (i64, i64) {
        let (dx, dy) = self.forward_delta();
        (-dx, -dy)
    }

    /// Single-letter symbol used by the text formats.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Wraps `value` into `[0, bound)` using the mathematical modulo.
#[must_use]
pub fn wrap(value: i64, bound: NonZeroU32) -> u32 {
    // rem_euclid keeps the result in [0, bound), which always fits in u32.
    value.rem_euclid(i64::from(bound.get())) as u32
}

/// Location of a single cell on the planet surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    x: u32,
    y: u32,
}

impl Position {
    /// Creates a new cell position.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Zero-based horizontal coordinate.
    #[must_use]
    pub const fn x(&self) -> u32 {
        self.x
    }

    /// Zero-based vertical coordinate.
    #[must_use]
    pub const fn y(&self) -> u32 {
        self.y
    }
}

/// Toroidal rectangular grid the rover travels on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PlanetSize", into = "PlanetSize")]
pub struct Planet {
    width: NonZeroU32,
    height: NonZeroU32,
}

impl Planet {
    /// Creates a planet, rejecting non-positive dimensions.
    pub fn new(width: i64, height: i64) -> Result<Self, PlanetConstructionError> {
        Ok(Self {
            width: dimension(width)?,
            height: dimension(height)?,
        })
    }

    /// Number of columns on the planet.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width.get()
    }

    /// Number of rows on the planet.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height.get()
    }

    /// Reports whether the position lies inside the planet bounds.
    #[must_use]
    pub const fn contains(&self, position: Position) -> bool {
        position.x < self.width.get() && position.y < self.height.get()
    }

    /// Folds arbitrary signed coordinates back onto the planet surface.
    #[must_use]
    pub fn wrap(&self, x: i64, y: i64) -> Position {
        Position::new(wrap(x, self.width), wrap(y, self.height))
    }
}

fn dimension(value: i64) -> Result<NonZeroU32, PlanetConstructionError> {
    u32::try_from(value)
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or(PlanetConstructionError)
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct PlanetSize {
    width: i64,
    height: i64,
}

impl TryFrom<PlanetSize> for Planet {
    type Error = PlanetConstructionError;

    fn try_from(size: PlanetSize) -> Result<Self, Self::Error> {
        Self::new(size.width, size.height)
    }
}

impl From<Planet> for PlanetSize {
    fn from(planet: Planet) -> Self {
        Self {
            width: i64::from(planet.width()),
            height: i64::from(planet.height()),
        }
    }
}

/// Pose of the rover: where it stands and where it faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rover {
    position: Position,
    orientation: Orientation,
}

impl Rover {
    /// Creates a rover, rejecting negative coordinates.
    ///
    /// Coordinates are not checked against any planet; movement keeps the
    /// rover on the surface by wrapping.
    pub fn new(x: i64, y: i64, orientation: Orientation) -> Result<Self, RoverConstructionError> {
        let x = u32::try_from(x).map_err(|_| RoverConstructionError)?;
        let y = u32::try_from(y).map_err(|_| RoverConstructionError)?;
        Ok(Self::at(Position::new(x, y), orientation))
    }

    /// Creates a rover standing on the provided cell.
    #[must_use]
    pub const fn at(position: Position, orientation: Orientation) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Horizontal coordinate of the rover.
    #[must_use]
    pub const fn x(&self) -> u32 {
        self.position.x
    }

    /// Vertical coordinate of the rover.
    #[must_use]
    pub const fn y(&self) -> u32 {
        self.position.y
    }

    /// Cell the rover occupies.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Heading of the rover.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the same pose relocated to `position`.
    #[must_use]
    pub const fn with_position(self, position: Position) -> Self {
        Self { position, ..self }
    }

    /// Returns the same pose facing `orientation`.
    #[must_use]
    pub const fn with_orientation(self, orientation: Orientation) -> Self {
        Self {
            orientation,
            ..self
        }
    }
}

/// Point obstacle occupying a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Obstacle {
    pos: Position,
}

impl Obstacle {
    /// Creates an obstacle at the provided cell.
    #[must_use]
    pub const fn at(pos: Position) -> Self {
        Self { pos }
    }

    /// Creates an obstacle from raw coordinates.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self::at(Position::new(x, y))
    }

    /// Cell blocked by the obstacle.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.pos
    }
}

/// Single movement instruction understood by the rover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cmd {
    /// Drive one cell ahead.
    Forward,
    /// Reverse one cell.
    Backward,
    /// Quarter turn counter-clockwise in place.
    TurnLeft,
    /// Quarter turn clockwise in place.
    TurnRight,
}

impl Cmd {
    /// Single-letter symbol used by the command grammar.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Forward => 'F',
            Self::Backward => 'B',
            Self::TurnLeft => 'L',
            Self::TurnRight => 'R',
        }
    }
}

impl fmt::Display for Cmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Result of executing one command or a whole command sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TravelOutcome {
    /// Every command ran without a collision.
    Normal {
        /// Pose after the last executed command.
        rover: Rover,
    },
    /// The run was aborted because the next cell held an obstacle.
    Hit {
        /// Last safe pose, immediately before the colliding step.
        rover: Rover,
    },
}

impl TravelOutcome {
    /// Pose carried by the outcome regardless of its kind.
    #[must_use]
    pub const fn rover(&self) -> Rover {
        match self {
            Self::Normal { rover } | Self::Hit { rover } => *rover,
        }
    }

    /// Reports whether the run stopped on an obstacle.
    #[must_use]
    pub const fn is_hit(&self) -> bool {
        matches!(self, Self::Hit { .. })
    }
}

/// Planet dimensions were not strictly positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("width and height must be positive numbers!")]
pub struct PlanetConstructionError;

/// Rover coordinates were negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("Coordinates must not be negative numbers")]
pub struct RoverConstructionError;

#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure parsers turning mission text into validated rover values.
//!
//! Obstacle lists are parsed with [`validation::accumulate`] so every
//! malformed entry is reported at once; all other inputs go through
//! [`validation::fail_fast`] and stop at the first problem.

pub mod validation;

use mars_rover_core::{
    Cmd, Obstacle, Orientation, Planet, PlanetConstructionError, Position, Rover,
};
use thiserror::Error;

use self::validation::{accumulate, fail_fast};

/// Separator between the two planet dimensions.
pub const PLANET_SEPARATOR: char = 'x';
/// Separator between the two coordinates of a cell.
pub const COORDINATE_SEPARATOR: char = ',';
/// Separator between the coordinates and the heading of a rover pose.
pub const POSE_SEPARATOR: char = ':';
/// Separator between commands of a command string.
pub const COMMAND_SEPARATOR: char = ',';

/// A numeric pair token did not have the expected shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum NumPairError {
    /// Missing separator, wrong arity or a token that is not a non-negative integer.
    #[error("expected two non-negative integers")]
    WrongInputString,
}

/// Planet size line could not be parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ParsePlanetError {
    /// The text was not `<width>x<height>`.
    #[error("planet size must look like `<width>x<height>`")]
    NumPair(#[from] NumPairError),
    /// The dimensions parsed but do not describe a valid planet.
    #[error("invalid planet size")]
    Construction(#[from] PlanetConstructionError),
}

/// A single obstacle entry could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("obstacle `{input}` must look like `<x>,<y>`")]
pub struct ParseObstacleError {
    /// Offending obstacle token.
    pub input: String,
    /// Underlying numeric pair failure.
    #[source]
    pub error: NumPairError,
}

/// Heading was not one of `N`, `E`, `S` or `W`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown orientation `{input}`")]
pub struct ParseOrientationError {
    /// Offending heading text.
    pub input: String,
}

/// Rover pose could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseRoverError {
    /// The pose did not split into coordinates and heading.
    #[error("rover pose must look like `<x>,<y>:<orientation>`")]
    Input,
    /// The coordinates were not `<x>,<y>`.
    #[error("rover coordinates must look like `<x>,<y>`")]
    NumPair(#[from] NumPairError),
    /// The heading was not recognised.
    #[error("invalid rover heading")]
    Orientation(#[from] ParseOrientationError),
}

/// Command was not one of `F`, `B`, `L` or `R`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown command `{input}`")]
pub struct ParseCmdError {
    /// Offending command text.
    pub input: String,
}

/// Command string contained an invalid command.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid command `{error}` in `{input}`")]
pub struct ParseCommandsError {
    /// Complete command string as received.
    pub input: String,
    /// First offending token.
    pub error: String,
}

/// Splits `input` on `separator` into exactly two non-negative integers.
pub fn parse_num_pair(separator: char, input: &str) -> Result<(u32, u32), NumPairError> {
    let mut parts = input.split(separator);
    let (Some(first), Some(second), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(NumPairError::WrongInputString);
    };
    Ok((parse_natural(first)?, parse_natural(second)?))
}

fn parse_natural(token: &str) -> Result<u32, NumPairError> {
    if token.is_empty() || !token.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(NumPairError::WrongInputString);
    }
    token.parse().map_err(|_| NumPairError::WrongInputString)
}

/// Parses a planet size line such as `5x4`.
pub fn parse_planet(input: &str) -> Result<Planet, ParsePlanetError> {
    let (width, height) = parse_num_pair(PLANET_SEPARATOR, input)?;
    Ok(Planet::new(i64::from(width), i64::from(height))?)
}

/// Parses a single obstacle such as `1,2`.
pub fn parse_obstacle(input: &str) -> Result<Obstacle, ParseObstacleError> {
    parse_num_pair(COORDINATE_SEPARATOR, input)
        .map(|(x, y)| Obstacle::new(x, y))
        .map_err(|error| ParseObstacleError {
            input: input.to_owned(),
            error,
        })
}

/// Parses a whitespace separated obstacle list, reporting every bad entry.
///
/// An input without any token yields an empty list.
pub fn parse_obstacles(input: &str) -> Result<Vec<Obstacle>, Vec<ParseObstacleError>> {
    accumulate(input.split_whitespace().map(parse_obstacle))
}

/// Parses a one-letter heading.
pub fn parse_orientation(input: &str) -> Result<Orientation, ParseOrientationError> {
    match input {
        "N" => Ok(Orientation::North),
        "E" => Ok(Orientation::East),
        "S" => Ok(Orientation::South),
        "W" => Ok(Orientation::West),
        _ => Err(ParseOrientationError {
            input: input.to_owned(),
        }),
    }
}

/// Parses a rover pose such as `1,3:W`.
///
/// The heading is only inspected once the coordinates parsed.
pub fn parse_rover(input: &str) -> Result<Rover, ParseRoverError> {
    let mut parts = input.split(POSE_SEPARATOR);
    let (Some(coordinates), Some(heading), None) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(ParseRoverError::Input);
    };
    let (x, y) = parse_num_pair(COORDINATE_SEPARATOR, coordinates)?;
    let orientation = parse_orientation(heading)?;
    Ok(Rover::at(Position::new(x, y), orientation))
}

/// Parses a one-letter command.
pub fn parse_command(input: &str) -> Result<Cmd, ParseCmdError> {
    match input {
        "F" => Ok(Cmd::Forward),
        "B" => Ok(Cmd::Backward),
        "L" => Ok(Cmd::TurnLeft),
        "R" => Ok(Cmd::TurnRight),
        _ => Err(ParseCmdError {
            input: input.to_owned(),
        }),
    }
}

/// Parses a comma separated command string such as `F,B,L,R`.
///
/// Stops at the first invalid token; an empty token counts as invalid.
pub fn parse_commands(input: &str) -> Result<Vec<Cmd>, ParseCommandsError> {
    fail_fast(input.split(COMMAND_SEPARATOR).map(|token| {
        parse_command(token).map_err(|error| ParseCommandsError {
            input: input.to_owned(),
            error: error.input,
        })
    }))
}

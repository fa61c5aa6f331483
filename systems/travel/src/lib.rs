#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic travel system that drives a rover across a toroidal planet.
//!
//! Every function is pure: the caller owns the current rover pose and threads
//! it through [`travel`], receiving a fresh pose inside the returned
//! [`TravelOutcome`]. A run stops on the first command that would drive the
//! rover into an obstacle and reports the last safe pose.

use mars_rover_core::{Cmd, Obstacle, Planet, Position, Rover, TravelOutcome};
use thiserror::Error;

/// Drives the rover one cell ahead, wrapping around the planet edges.
#[must_use]
pub fn move_forward(planet: &Planet, rover: Rover) -> Rover {
    shift(planet, rover, rover.orientation().forward_delta())
}

/// Reverses the rover one cell, wrapping around the planet edges.
#[must_use]
pub fn move_backward(planet: &Planet, rover: Rover) -> Rover {
    shift(planet, rover, rover.orientation().backward_delta())
}

fn shift(planet: &Planet, rover: Rover, (dx, dy): (i64, i64)) -> Rover {
    let x = i64::from(rover.x()) + dx;
    let y = i64::from(rover.y()) + dy;
    rover.with_position(planet.wrap(x, y))
}

/// Executes a single command.
///
/// Turning never collides. Driving returns [`TravelOutcome::Hit`] carrying
/// the unmoved rover when the destination cell holds an obstacle.
#[must_use]
pub fn step(planet: &Planet, rover: Rover, obstacles: &[Obstacle], cmd: Cmd) -> TravelOutcome {
    let candidate = match cmd {
        Cmd::TurnLeft => {
            return TravelOutcome::Normal {
                rover: rover.with_orientation(rover.orientation().turn_left()),
            }
        }
        Cmd::TurnRight => {
            return TravelOutcome::Normal {
                rover: rover.with_orientation(rover.orientation().turn_right()),
            }
        }
        Cmd::Forward => move_forward(planet, rover),
        Cmd::Backward => move_backward(planet, rover),
    };

    if is_blocked(obstacles, candidate.position()) {
        TravelOutcome::Hit { rover }
    } else {
        TravelOutcome::Normal { rover: candidate }
    }
}

/// Executes the command sequence left to right, stopping at the first hit.
///
/// An empty sequence yields [`TravelOutcome::Normal`] with the initial rover.
#[must_use]
pub fn travel(
    planet: &Planet,
    rover: Rover,
    obstacles: &[Obstacle],
    cmds: &[Cmd],
) -> TravelOutcome {
    let mut current = rover;
    for &cmd in cmds {
        let outcome = step(planet, current, obstacles, cmd);
        if outcome.is_hit() {
            return outcome;
        }
        current = outcome.rover();
    }
    TravelOutcome::Normal { rover: current }
}

/// Records the outcome of every executed command.
///
/// The sequence stops after the first hit, so its last element always equals
/// [`travel`] for a non-empty command sequence.
#[must_use]
pub fn trace(
    planet: &Planet,
    rover: Rover,
    obstacles: &[Obstacle],
    cmds: &[Cmd],
) -> Vec<TravelOutcome> {
    let mut outcomes = Vec::with_capacity(cmds.len());
    let mut current = rover;
    for &cmd in cmds {
        let outcome = step(planet, current, obstacles, cmd);
        outcomes.push(outcome);
        if outcome.is_hit() {
            break;
        }
        current = outcome.rover();
    }
    outcomes
}

/// Rejects a mission whose rover starts on top of an obstacle.
pub fn guard_initial_position(
    obstacles: &[Obstacle],
    rover: Rover,
) -> Result<(), InitialPositionError> {
    if is_blocked(obstacles, rover.position()) {
        return Err(InitialPositionError {
            position: rover.position(),
        });
    }
    Ok(())
}

fn is_blocked(obstacles: &[Obstacle], position: Position) -> bool {
    obstacles
        .iter()
        .any(|obstacle| obstacle.position() == position)
}

/// The rover's starting cell coincides with an obstacle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("rover cannot start on an obstacle at {}:{}", .position.x(), .position.y())]
pub struct InitialPositionError {
    /// Cell shared by the rover and the obstacle.
    pub position: Position,
}

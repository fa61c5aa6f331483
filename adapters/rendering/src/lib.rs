#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic text rendering for Mars rover adapters.
//!
//! Renderers are pure: they turn a [`TravelOutcome`] (and, for the grid, the
//! planet and its obstacles) into strings that adapters hand to whatever
//! display surface they own.

use std::{collections::HashSet, fmt};

use mars_rover_core::{Obstacle, Planet, Position, TravelOutcome};

/// Prefix marking a status line of an aborted run.
pub const HIT_PREFIX: &str = "O:";
/// Glyph drawn for a cell holding an obstacle.
pub const OBSTACLE_GLYPH: char = '#';
/// Glyph drawn for the cell holding the rover.
pub const ROVER_GLYPH: char = 'O';
/// Glyph drawn for an empty cell.
pub const EMPTY_GLYPH: char = '.';
/// Indentation applied to every grid row inside a [`ConsoleFrame`].
pub const GRID_INDENT: &str = "     ";
/// Label preceding the status line inside a [`ConsoleFrame`].
pub const STATUS_LABEL: &str = "Rover position: ";

/// Renders the compact status line, `x:y:o` or `O:x:y:o` after a hit.
#[must_use]
pub fn render_travel_outcome(outcome: &TravelOutcome) -> String {
    let rover = outcome.rover();
    let status = format!("{}:{}:{}", rover.x(), rover.y(), rover.orientation());
    if outcome.is_hit() {
        format!("{HIT_PREFIX}{status}")
    } else {
        status
    }
}

/// Renders the three-line heading glyph; position and outcome kind are ignored.
#[must_use]
pub fn render_nav(outcome: &TravelOutcome) -> String {
    format!("  ^\n< {} >\n  v", outcome.rover().orientation())
}

/// Returns a renderer drawing the planet grid for any outcome.
pub fn render_planet(
    planet: &Planet,
    obstacles: &[Obstacle],
) -> impl Fn(&TravelOutcome) -> String {
    let view = PlanetView::new(planet, obstacles);
    move |outcome| view.render(outcome)
}

/// Planet surface prepared for repeated grid rendering.
///
/// The first row is the northernmost (`y = height - 1`) and the last row is
/// `y = 0`. Obstacles outside the planet are not drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanetView {
    planet: Planet,
    obstacles: HashSet<Position>,
}

impl PlanetView {
    /// Indexes the obstacles of the provided planet.
    #[must_use]
    pub fn new(planet: &Planet, obstacles: &[Obstacle]) -> Self {
        Self {
            planet: *planet,
            obstacles: obstacles
                .iter()
                .map(Obstacle::position)
                .filter(|&position| planet.contains(position))
                .collect(),
        }
    }

    /// Grid rows from north to south.
    #[must_use]
    pub fn rows(&self, outcome: &TravelOutcome) -> Vec<String> {
        let rover = outcome.rover().position();
        (0..self.planet.height())
            .rev()
            .map(|y| {
                (0..self.planet.width())
                    .map(|x| self.glyph(Position::new(x, y), rover))
                    .collect::<String>()
            })
            .collect()
    }

    /// Grid rows joined with newlines.
    #[must_use]
    pub fn render(&self, outcome: &TravelOutcome) -> String {
        self.rows(outcome).join("\n")
    }

    fn glyph(&self, cell: Position, rover: Position) -> char {
        if cell == rover {
            ROVER_GLYPH
        } else if self.obstacles.contains(&cell) {
            OBSTACLE_GLYPH
        } else {
            EMPTY_GLYPH
        }
    }
}

/// One screen of console output describing the rover after a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsoleFrame {
    /// Heading glyph produced by [`render_nav`].
    pub nav: String,
    /// Indented grid rows from north to south.
    pub grid: Vec<String>,
    /// Status line including [`STATUS_LABEL`].
    pub status: String,
}

impl ConsoleFrame {
    /// Composes the frame shown for `outcome` on the viewed planet.
    #[must_use]
    pub fn compose(view: &PlanetView, outcome: &TravelOutcome) -> Self {
        Self {
            nav: render_nav(outcome),
            grid: view
                .rows(outcome)
                .into_iter()
                .map(|row| format!("{GRID_INDENT}{row}"))
                .collect(),
            status: format!("{STATUS_LABEL}{}", render_travel_outcome(outcome)),
        }
    }

    /// Frame content split into display lines.
    #[must_use]
    pub fn lines(&self) -> Vec<&str> {
        self.nav
            .lines()
            .chain(self.grid.iter().map(String::as_str))
            .chain(std::iter::once(self.status.as_str()))
            .collect()
    }
}

impl fmt::Display for ConsoleFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

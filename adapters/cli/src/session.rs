//! Interactive mission loop wiring parsers, travel and rendering together.

use std::{
    io,
    path::{Path, PathBuf},
};

use mars_rover_core::{Cmd, Obstacle, Planet, Rover, TravelOutcome, WELCOME_BANNER};
use mars_rover_rendering::{ConsoleFrame, PlanetView};
use mars_rover_system_parsing::{
    parse_commands, parse_obstacles, parse_planet, parse_rover, ParseCommandsError,
    ParseObstacleError, ParsePlanetError, ParseRoverError,
};
use mars_rover_system_travel::{guard_initial_position, trace, travel, InitialPositionError};
use thiserror::Error;
use tracing::{error, info};

use crate::console::{LineSink, LineSource};

/// Prompt shown before every command batch.
pub(crate) const PROMPT: &str = "Please, enter commands for the Rover in 'F,B,R,L' format: ";
/// Line written once command input is exhausted.
pub(crate) const FAREWELL: &str = "Mission completed!";

/// Where the mission is read from and how progress is shown.
#[derive(Clone, Debug)]
pub(crate) struct SessionConfig {
    pub(crate) planet_file: PathBuf,
    pub(crate) rover_file: PathBuf,
    pub(crate) replay: bool,
}

/// Failures that end a session.
#[derive(Debug, Error)]
pub(crate) enum SessionError {
    #[error("failed to read `{}`", .filename.display())]
    ReadFile {
        filename: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("planet file must hold a size line followed by an obstacle line")]
    MissingPlanetData,
    #[error("invalid planet")]
    ParsePlanet(#[from] ParsePlanetError),
    #[error("invalid obstacles: {}", describe_all(.0))]
    ParseObstacles(Vec<ParseObstacleError>),
    #[error("invalid rover")]
    ParseRover(#[from] ParseRoverError),
    #[error(transparent)]
    ParseCommands(#[from] ParseCommandsError),
    #[error(transparent)]
    InitialPosition(#[from] InitialPositionError),
    #[error("console I/O failed")]
    Console(#[from] io::Error),
}

fn describe_all(errors: &[ParseObstacleError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validated mission data read at start-up.
#[derive(Debug)]
struct Mission {
    planet: Planet,
    obstacles: Vec<Obstacle>,
    view: PlanetView,
}

impl Mission {
    fn parse(planet_text: &str) -> Result<Self, SessionError> {
        let mut lines = planet_text.split('\n');
        let (Some(size_line), Some(obstacle_line)) = (lines.next(), lines.next()) else {
            return Err(SessionError::MissingPlanetData);
        };

        let planet = parse_planet(size_line.trim())?;
        info!(?planet, "Planet");
        let obstacles =
            parse_obstacles(obstacle_line.trim()).map_err(SessionError::ParseObstacles)?;
        info!(?obstacles, "Obstacles");

        Ok(Self {
            view: PlanetView::new(&planet, &obstacles),
            planet,
            obstacles,
        })
    }
}

/// Runs a mission until command input is exhausted or a failure occurs.
pub(crate) fn run<S, W>(
    config: &SessionConfig,
    source: &mut S,
    sink: &mut W,
) -> Result<(), SessionError>
where
    S: LineSource,
    W: LineSink,
{
    let result = Session::start(config, source, sink)
        .and_then(|mut session| session.drive(source, sink));
    if let Err(failure) = &result {
        error!(error = %failure, "Error detected");
    }
    result
}

#[derive(Debug)]
struct Session {
    mission: Mission,
    rover: Rover,
    replay: bool,
}

impl Session {
    fn start<S, W>(
        config: &SessionConfig,
        source: &mut S,
        sink: &mut W,
    ) -> Result<Self, SessionError>
    where
        S: LineSource,
        W: LineSink,
    {
        sink.write_line(WELCOME_BANNER)?;

        let planet_text = read_file(source, &config.planet_file)?;
        let rover_text = read_file(source, &config.rover_file)?;

        let mission = Mission::parse(&planet_text)?;
        let rover = parse_rover(rover_text.lines().next().unwrap_or_default().trim())?;
        info!(?rover, "Rover");
        guard_initial_position(&mission.obstacles, rover)?;

        let session = Self {
            mission,
            rover,
            replay: config.replay,
        };
        session.show(sink, &TravelOutcome::Normal { rover })?;
        Ok(session)
    }

    fn drive<S, W>(&mut self, source: &mut S, sink: &mut W) -> Result<(), SessionError>
    where
        S: LineSource,
        W: LineSink,
    {
        loop {
            sink.prompt(PROMPT)?;
            let Some(line) = source.read_line()? else {
                sink.write_line(FAREWELL)?;
                return Ok(());
            };

            let cmds = parse_commands(line.trim())?;
            info!("Rover is executing commands: {}", join_cmds(&cmds, ","));

            if self.replay {
                self.replay_batch(sink, &cmds)?;
            } else {
                let mission = &self.mission;
                let outcome = travel(&mission.planet, self.rover, &mission.obstacles, &cmds);
                self.rover = outcome.rover();
                self.show(sink, &outcome)?;
            }
        }
    }

    fn replay_batch<W: LineSink>(
        &mut self,
        sink: &mut W,
        cmds: &[Cmd],
    ) -> Result<(), SessionError> {
        let mission = &self.mission;
        let outcomes = trace(&mission.planet, self.rover, &mission.obstacles, cmds);
        for (executed, outcome) in outcomes.iter().enumerate() {
            self.show(sink, outcome)?;
            let prefix = join_cmds(&cmds[..=executed], " ");
            sink.write_line(&format!("Executing cmds: {prefix}"))?;
        }
        if let Some(last) = outcomes.last() {
            self.rover = last.rover();
        }
        Ok(())
    }

    fn show<W: LineSink>(&self, sink: &mut W, outcome: &TravelOutcome) -> Result<(), SessionError> {
        let frame = ConsoleFrame::compose(&self.mission.view, outcome);
        sink.write_line(&frame.to_string())?;
        Ok(())
    }
}

fn read_file<S: LineSource>(source: &mut S, filename: &Path) -> Result<String, SessionError> {
    source
        .read_file(filename)
        .map_err(|source| SessionError::ReadFile {
            filename: filename.to_path_buf(),
            source,
        })
}

fn join_cmds(cmds: &[Cmd], separator: &str) -> String {
    cmds.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::testing::{RecordingOutput, ScriptedInput};

    const PLANET_FILE: &str = "planet.txt";
    const ROVER_FILE: &str = "rover.txt";

    fn config(replay: bool) -> SessionConfig {
        SessionConfig {
            planet_file: PathBuf::from(PLANET_FILE),
            rover_file: PathBuf::from(ROVER_FILE),
            replay,
        }
    }

    fn frame(nav: char, grid: [&str; 4], status: &str) -> String {
        let mut lines = vec!["  ^".to_owned(), format!("< {nav} >"), "  v".to_owned()];
        lines.extend(grid.iter().map(|row| format!("     {row}")));
        lines.push(format!("Rover position: {status}"));
        lines.join("\n")
    }

    #[test]
    fn happy_path_renders_each_batch() {
        let mut input = ScriptedInput::new(
            [(PLANET_FILE, "5x4\n1,2 0,0 3,4"), (ROVER_FILE, "1,3:W\n")],
            ["F,B,L,R,F\n"],
        );
        let mut output = RecordingOutput::default();

        run(&config(false), &mut input, &mut output).expect("mission succeeds");

        assert_eq!(
            output.lines,
            vec![
                WELCOME_BANNER.to_owned(),
                frame('W', [".O...", ".#...", ".....", "#...."], "1:3:W"),
                frame('W', ["O....", ".#...", ".....", "#...."], "0:3:W"),
                FAREWELL.to_owned(),
            ]
        );
        assert_eq!(output.prompts, 2);
    }

    #[test]
    fn replay_renders_every_executed_command() {
        let mut input = ScriptedInput::new(
            [(PLANET_FILE, "5x4\n1,2"), (ROVER_FILE, "1,3:S")],
            ["F,L"],
        );
        let mut output = RecordingOutput::default();

        run(&config(true), &mut input, &mut output).expect("mission succeeds");

        assert_eq!(
            output.lines,
            vec![
                WELCOME_BANNER.to_owned(),
                frame('S', [".O...", ".#...", ".....", "....."], "1:3:S"),
                frame('S', [".O...", ".#...", ".....", "....."], "O:1:3:S"),
                "Executing cmds: F".to_owned(),
                FAREWELL.to_owned(),
            ]
        );
    }

    #[test]
    fn hit_keeps_the_last_safe_pose_for_the_next_batch() {
        let mut input = ScriptedInput::new(
            [(PLANET_FILE, "3x4\n2,1 2,3"), (ROVER_FILE, "1,1:E")],
            ["F,L", "L,F"],
        );
        let mut output = RecordingOutput::default();

        run(&config(false), &mut input, &mut output).expect("mission succeeds");

        assert_eq!(output.lines[2], frame('E', ["..#", "...", ".O#", "..."], "O:1:1:E"));
        assert_eq!(output.lines[3], frame('N', ["..#", ".O.", "..#", "..."], "1:2:N"));
    }

    #[test]
    fn unreadable_planet_file_aborts_before_prompting() {
        let mut input = ScriptedInput::new([(ROVER_FILE, "1,3:W")], []);
        let mut output = RecordingOutput::default();

        let error =
            run(&config(false), &mut input, &mut output).expect_err("planet file is missing");

        assert!(matches!(
            &error,
            SessionError::ReadFile { filename, .. } if filename == Path::new(PLANET_FILE)
        ));
        assert_eq!(output.lines, vec![WELCOME_BANNER.to_owned()]);
        assert_eq!(output.prompts, 0);
    }

    #[test]
    fn planet_file_needs_an_obstacle_line() {
        let mut input = ScriptedInput::new([(PLANET_FILE, "5x4"), (ROVER_FILE, "1,3:W")], []);
        let mut output = RecordingOutput::default();

        let error =
            run(&config(false), &mut input, &mut output).expect_err("obstacle line missing");

        assert!(matches!(error, SessionError::MissingPlanetData));
    }

    #[test]
    fn trailing_newline_leaves_an_empty_obstacle_line() {
        let mut input = ScriptedInput::new([(PLANET_FILE, "5x4\n"), (ROVER_FILE, "1,3:W")], []);
        let mut output = RecordingOutput::default();

        run(&config(false), &mut input, &mut output).expect("no obstacles is a valid mission");

        assert_eq!(
            output.lines,
            vec![
                WELCOME_BANNER.to_owned(),
                frame('W', [".O...", ".....", ".....", "....."], "1:3:W"),
                FAREWELL.to_owned(),
            ]
        );
    }

    #[test]
    fn every_bad_obstacle_is_reported() {
        let mut input = ScriptedInput::new(
            [(PLANET_FILE, "5x4\na,1 1,1 2,b"), (ROVER_FILE, "1,3:W")],
            [],
        );
        let mut output = RecordingOutput::default();

        let error =
            run(&config(false), &mut input, &mut output).expect_err("obstacles are malformed");

        assert_eq!(
            error.to_string(),
            "invalid obstacles: obstacle `a,1` must look like `<x>,<y>`; \
             obstacle `2,b` must look like `<x>,<y>`"
        );
    }

    #[test]
    fn rover_starting_on_an_obstacle_is_rejected() {
        let mut input = ScriptedInput::new(
            [(PLANET_FILE, "5x4\n1,3"), (ROVER_FILE, "1,3:W")],
            ["F"],
        );
        let mut output = RecordingOutput::default();

        let error = run(&config(false), &mut input, &mut output).expect_err("rover on obstacle");

        assert!(matches!(error, SessionError::InitialPosition(_)));
        assert_eq!(output.prompts, 0);
    }

    #[test]
    fn malformed_commands_abort_the_session() {
        let mut input = ScriptedInput::new(
            [(PLANET_FILE, "5x4\n\n"), (ROVER_FILE, "1,3:W")],
            ["F,X,Y", "F"],
        );
        let mut output = RecordingOutput::default();

        let error =
            run(&config(false), &mut input, &mut output).expect_err("commands are malformed");

        assert_eq!(error.to_string(), "invalid command `X` in `F,X,Y`");
        assert_eq!(output.prompts, 1);
    }
}

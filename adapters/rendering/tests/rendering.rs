use mars_rover_core::{Obstacle, Orientation, Planet, Position, Rover, TravelOutcome};
use mars_rover_rendering::{render_nav, render_planet, render_travel_outcome};

fn rover_at(x: u32, y: u32, orientation: Orientation) -> Rover {
    Rover::at(Position::new(x, y), orientation)
}

#[test]
fn status_line_for_normal_outcome() {
    let outcome = TravelOutcome::Normal {
        rover: rover_at(3, 8, Orientation::North),
    };
    assert_eq!(render_travel_outcome(&outcome), "3:8:N");
}

#[test]
fn status_line_marks_hit_outcome() {
    let outcome = TravelOutcome::Hit {
        rover: rover_at(1, 7, Orientation::East),
    };
    assert_eq!(render_travel_outcome(&outcome), "O:1:7:E");
}

#[test]
fn nav_glyph_shows_heading_only() {
    let headings = [
        (Orientation::North, "< N >"),
        (Orientation::East, "< E >"),
        (Orientation::South, "< S >"),
        (Orientation::West, "< W >"),
    ];

    for (orientation, middle) in headings {
        let rover = rover_at(0, 3, orientation);
        let normal = render_nav(&TravelOutcome::Normal { rover });
        let hit = render_nav(&TravelOutcome::Hit { rover });

        assert_eq!(normal.split('\n').collect::<Vec<_>>(), vec!["  ^", middle, "  v"]);
        assert_eq!(normal, hit, "nav glyph must not depend on the outcome kind");
    }
}

#[test]
fn planet_grid_puts_north_on_top() {
    let planet = Planet::new(3, 4).expect("valid planet");
    let obstacles = [Obstacle::new(2, 1), Obstacle::new(1, 3)];
    let render = render_planet(&planet, &obstacles);

    let normal = render(&TravelOutcome::Normal {
        rover: rover_at(0, 3, Orientation::North),
    });
    let hit = render(&TravelOutcome::Hit {
        rover: rover_at(0, 3, Orientation::East),
    });

    assert_eq!(
        normal.split('\n').collect::<Vec<_>>(),
        vec!["O#.", "...", "..#", "..."]
    );
    assert_eq!(normal, hit);
}

#[test]
fn planet_grid_has_planet_dimensions() {
    let planet = Planet::new(5, 2).expect("valid planet");
    let grid = render_planet(&planet, &[])(&TravelOutcome::Normal {
        rover: rover_at(4, 0, Orientation::West),
    });

    assert_eq!(grid, ".....\n....O");
}

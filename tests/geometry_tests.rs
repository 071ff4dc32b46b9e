mod common;

use battleship_hunt::{
    adjacent_and_diagonal_cells, fleet_overlaps_or_touches, in_bounds, validate_fleet, Coord,
    FleetError,
};
use common::{ship, standard_ships};

#[test]
fn test_bounds_and_neighbourhoods() {
    assert!(in_bounds(Coord::new(0, 0)));
    assert!(in_bounds(Coord::new(9, 9)));
    assert!(!in_bounds(Coord::new(10, 0)));
    assert!(!in_bounds(Coord::new(0, 10)));

    assert_eq!(adjacent_and_diagonal_cells(Coord::new(0, 0)).len(), 3);
    assert_eq!(adjacent_and_diagonal_cells(Coord::new(0, 5)).len(), 5);
    assert_eq!(adjacent_and_diagonal_cells(Coord::new(5, 5)).len(), 8);
    assert_eq!(Coord::new(9, 9).orthogonal_neighbors().count(), 2);
}

#[test]
fn test_labels() {
    assert_eq!(Coord::new(0, 0).to_string(), "A1");
    assert_eq!(Coord::new(9, 9).to_string(), "J10");
    assert_eq!(Coord::new(4, 2).to_string(), "C5");
}

#[test]
fn test_standard_fleet_is_valid() {
    let ships = standard_ships();
    assert_eq!(validate_fleet(&ships), Ok(()));
    assert!(!fleet_overlaps_or_touches(&ships));
}

#[test]
fn test_size_mismatch() {
    let mut ships = standard_ships();
    ships.pop();
    assert_eq!(validate_fleet(&ships), Err(FleetError::SizeMismatch));

    let mut ships = standard_ships();
    ships[9] = ship(&[(6, 9), (7, 9)]);
    assert_eq!(validate_fleet(&ships), Err(FleetError::SizeMismatch));
}

#[test]
fn test_out_of_bounds() {
    let mut ships = standard_ships();
    ships[9] = ship(&[(4, 10)]);
    assert_eq!(validate_fleet(&ships), Err(FleetError::OutOfBounds));
}

#[test]
fn test_not_straight() {
    let mut ships = standard_ships();
    ships[5] = ship(&[(4, 0), (5, 1)]);
    assert_eq!(validate_fleet(&ships), Err(FleetError::NotStraight));
}

#[test]
fn test_gaps() {
    let mut ships = standard_ships();
    ships[2] = ship(&[(2, 4), (2, 5), (2, 7)]);
    assert_eq!(validate_fleet(&ships), Err(FleetError::HasGaps));

    // a repeated cell leaves the run short
    let mut ships = standard_ships();
    ships[5] = ship(&[(4, 0), (4, 0)]);
    assert_eq!(validate_fleet(&ships), Err(FleetError::HasGaps));
}

#[test]
fn test_unordered_cells_are_fine() {
    let mut ships = standard_ships();
    ships[0] = ship(&[(0, 2), (0, 0), (0, 3), (0, 1)]);
    assert_eq!(validate_fleet(&ships), Ok(()));
}

#[test]
fn test_touching_and_overlapping() {
    // diagonal contact with A3-C3
    let mut ships = standard_ships();
    ships[6] = ship(&[(3, 3)]);
    assert!(fleet_overlaps_or_touches(&ships));
    assert_eq!(validate_fleet(&ships), Err(FleetError::TouchOrOverlap));

    let mut ships = standard_ships();
    ships[6] = ship(&[(0, 0)]);
    assert_eq!(validate_fleet(&ships), Err(FleetError::TouchOrOverlap));
}

#[test]
fn test_first_failure_wins() {
    // bounds are checked for the whole fleet before any ship's shape
    let mut ships = standard_ships();
    ships[5] = ship(&[(4, 0), (5, 1)]);
    ships[9] = ship(&[(4, 10)]);
    assert_eq!(validate_fleet(&ships), Err(FleetError::OutOfBounds));

    // shape beats touching
    let mut ships = standard_ships();
    ships[5] = ship(&[(4, 0), (5, 1)]);
    ships[6] = ship(&[(0, 4)]);
    assert_eq!(validate_fleet(&ships), Err(FleetError::NotStraight));

    // composition beats everything else
    let mut ships = standard_ships();
    ships[9] = ship(&[(4, 10), (4, 11)]);
    assert_eq!(validate_fleet(&ships), Err(FleetError::SizeMismatch));
}

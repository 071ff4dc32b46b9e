mod common;

use battleship_hunt::notation::{parse_ship, NotationError};
use battleship_hunt::{validate_fleet, Coord, Fleet, FleetError, Ship, FLEET_SIZES, TOTAL_SHIP_CELLS};
use common::{ship, standard_fleet, standard_ships};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

#[test]
fn test_fleet_new_validates() {
    let fleet = standard_fleet();
    assert_eq!(fleet.len(), FLEET_SIZES.len());
    assert_eq!(fleet.mask().count_ones(), TOTAL_SHIP_CELLS);

    let mut ships = standard_ships();
    ships[6] = ship(&[(3, 3)]);
    assert_eq!(Fleet::new(ships).unwrap_err(), FleetError::TouchOrOverlap);
}

#[test]
fn test_ship_at() {
    let fleet = standard_fleet();
    let hit = fleet.ship_at(Coord::new(2, 5)).unwrap();
    assert_eq!(hit.ship().len(), 3);
    assert!(fleet.ship_at(Coord::new(9, 9)).is_none());
}

#[test]
fn test_random_fleet_is_reproducible() {
    let a = Fleet::random(&mut SmallRng::seed_from_u64(7)).unwrap();
    let b = Fleet::random(&mut SmallRng::seed_from_u64(7)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_random_fleet_largest_first() {
    let fleet = Fleet::random(&mut SmallRng::seed_from_u64(3)).unwrap();
    let sizes: Vec<usize> = fleet.ships().map(Ship::len).collect();
    assert_eq!(sizes, FLEET_SIZES.to_vec());
}

#[test]
fn test_exhausted_budget_terminates() {
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        Fleet::random_with_budget(&mut rng, 0, 5).unwrap_err(),
        FleetError::PlacementExhausted { restarts: 5 }
    );
    assert_eq!(
        Fleet::random_with_budget(&mut rng, 1000, 0).unwrap_err(),
        FleetError::PlacementExhausted { restarts: 0 }
    );
}

#[test]
fn test_parse_ship_notations() {
    let list = parse_ship("A1 A2 A3", 3).unwrap();
    assert_eq!(
        list.cells(),
        &[Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)]
    );
    let range = parse_ship("b4-b6", 3).unwrap();
    assert_eq!(range.cells()[0], Coord::new(3, 1));
    assert_eq!(parse_ship("J10", 1).unwrap().cells(), &[Coord::new(9, 9)]);
    assert_eq!(
        parse_ship("J10", 2).unwrap_err(),
        NotationError::WrongLength { expected: 2, got: 1 }
    );
    assert_eq!(parse_ship("A1-C3", 3).unwrap_err(), NotationError::NotStraight);
    assert_eq!(parse_ship("", 1).unwrap_err(), NotationError::BadFormat);
    assert_eq!(parse_ship("A1,A2", 2).unwrap_err(), NotationError::BadFormat);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_fleets_always_validate(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let fleet = Fleet::random(&mut rng).unwrap();
        let ships: Vec<Ship> = fleet.ships().cloned().collect();
        prop_assert_eq!(validate_fleet(&ships), Ok(()));
        prop_assert_eq!(fleet.mask().count_ones(), TOTAL_SHIP_CELLS);
    }
}

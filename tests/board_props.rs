use battleship_hunt::{Board, Coord, Fleet};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn shots_only_ever_resolve_cells(
        seed in any::<u64>(),
        shots in prop::collection::vec((0usize..11, 0usize..11), 1..150),
    ) {
        let fleet = Fleet::random(&mut SmallRng::seed_from_u64(seed)).unwrap();
        let layout = fleet.mask();
        let mut board = Board::new(fleet);

        for (row, col) in shots {
            let before = *board.history();
            match board.fire(Coord::new(row, col)) {
                Ok(_) => {
                    let after = board.history();
                    prop_assert!(after.resolved().count_ones() > before.resolved().count_ones());
                    prop_assert!(before.hits().is_subset_of(&after.hits()));
                    prop_assert!(before.misses().is_subset_of(&after.misses()));
                }
                Err(_) => prop_assert_eq!(*board.history(), before),
            }
            let history = board.history();
            prop_assert!(history.hits().is_subset_of(&layout));
            prop_assert!((history.misses() & layout).is_empty());
        }
    }
}

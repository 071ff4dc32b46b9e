use battleship_hunt::{BitBoard, BitBoardError};

#[test]
fn test_get_set_bounds() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(bb.is_empty());

    bb.set(1, 1).unwrap();
    assert!(bb.get(1, 1).unwrap());
    assert_eq!(
        bb.set(4, 0).unwrap_err(),
        BitBoardError::IndexOutOfBounds { row: 4, col: 0 }
    );
}

#[test]
fn test_dilate_clips_at_edges() {
    let corner = BitBoard::<u128, 10>::from_iter([(0, 0)]).unwrap();
    let grown = corner.dilate();
    let cells: Vec<_> = grown.iter_set_bits().collect();
    assert_eq!(cells, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);

    let centre = BitBoard::<u128, 10>::from_iter([(5, 5)]).unwrap();
    assert_eq!(centre.dilate().count_ones(), 9);

    let line = BitBoard::<u128, 10>::from_iter([(9, 7), (9, 8), (9, 9)]).unwrap();
    assert_eq!(line.dilate().count_ones(), 8);
}

#[test]
fn test_subset_and_not() {
    let small = BitBoard::<u16, 4>::from_iter([(0, 1)]).unwrap();
    let big = BitBoard::<u16, 4>::from_iter([(0, 1), (3, 3)]).unwrap();
    assert!(small.is_subset_of(&big));
    assert!(!big.is_subset_of(&small));
    assert_eq!((!big).count_ones(), 14);
    assert!((big & !small).get(3, 3).unwrap());
}

use naval_duel::{Cell, Grid, Position};

#[test]
fn new_grid_is_all_empty() {
    for size in 1..=9 {
        let grid = Grid::new(size);
        assert_eq!(grid.size(), size);
        assert_eq!(grid.rows().count(), size);
        assert!(grid.rows().all(|row| row.len() == size));
        assert_eq!(grid.count(Cell::Empty), size * size);
    }
}

#[test]
fn set_then_get_touches_only_that_cell() {
    let mut grid = Grid::new(4);
    grid.set(Position::new(2, 1), Cell::ActiveShip);
    assert_eq!(grid.get(Position::new(2, 1)), Cell::ActiveShip);
    assert_eq!(grid.get(Position::new(1, 2)), Cell::Empty);
    assert_eq!(grid.count(Cell::ActiveShip), 1);

    let row: Vec<_> = grid.rows().nth(1).unwrap().to_vec();
    assert_eq!(row, vec![Cell::Empty, Cell::Empty, Cell::ActiveShip, Cell::Empty]);
}

#[test]
fn contains_checks_both_axes() {
    let grid = Grid::new(3);
    assert!(grid.contains(Position::new(2, 2)));
    assert!(!grid.contains(Position::new(3, 0)));
    assert!(!grid.contains(Position::new(0, 3)));
}

#[test]
#[should_panic(expected = "outside")]
fn out_of_bounds_get_panics() {
    let grid = Grid::new(3);
    grid.get(Position::new(0, 3));
}

#[test]
fn cell_transitions_are_closed() {
    assert_eq!(Cell::Empty.attacked(), Some(Cell::Miss));
    assert_eq!(Cell::ActiveShip.attacked(), Some(Cell::DeadShip));
    assert_eq!(Cell::DeadShip.attacked(), None);
    assert_eq!(Cell::Miss.attacked(), None);
}

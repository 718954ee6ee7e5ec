use naval_duel::{column_letter, parse_coord, CoordError, Position};
use proptest::prelude::*;

#[test]
fn parses_letter_and_digit() {
    assert_eq!(parse_coord("A1", 3), Ok(Position::new(0, 0)));
    assert_eq!(parse_coord("C3", 3), Ok(Position::new(2, 2)));
    assert_eq!(parse_coord("B7", 9), Ok(Position::new(1, 6)));
}

#[test]
fn trims_and_folds_case() {
    assert_eq!(parse_coord("b3", 5), parse_coord("B3", 5));
    assert_eq!(parse_coord("  d2 \n", 5), Ok(Position::new(3, 1)));
}

#[test]
fn rejects_wrong_length() {
    assert_eq!(parse_coord("", 5), Err(CoordError::BadLength));
    assert_eq!(parse_coord("A", 5), Err(CoordError::BadLength));
    assert_eq!(parse_coord("A10", 9), Err(CoordError::BadLength));
    assert_eq!(parse_coord("A 1", 5), Err(CoordError::BadLength));
}

#[test]
fn rejects_column_off_board() {
    assert_eq!(parse_coord("D1", 3), Err(CoordError::BadColumn));
    assert_eq!(parse_coord("11", 3), Err(CoordError::BadColumn));
    assert_eq!(parse_coord("@1", 3), Err(CoordError::BadColumn));
    assert_eq!(parse_coord("é1", 3), Err(CoordError::BadColumn));
}

#[test]
fn rejects_row_off_board() {
    assert_eq!(parse_coord("A0", 3), Err(CoordError::BadRow));
    assert_eq!(parse_coord("A4", 3), Err(CoordError::BadRow));
    assert_eq!(parse_coord("AB", 3), Err(CoordError::BadRow));
}

#[test]
fn column_is_checked_before_row() {
    assert_eq!(parse_coord("Z0", 3), Err(CoordError::BadColumn));
}

#[test]
fn display_matches_input_form() {
    assert_eq!(Position::new(1, 2).to_string(), "B3");
    assert_eq!(column_letter(0), 'A');
}

proptest! {
    #[test]
    fn every_cell_parses_back_in_either_case(size in 1usize..=9, col in 0usize..9, row in 0usize..9) {
        prop_assume!(col < size && row < size);
        let pos = Position::new(col, row);
        let upper = pos.to_string();
        let lower = upper.to_lowercase();
        prop_assert_eq!(parse_coord(&upper, size), Ok(pos));
        prop_assert_eq!(parse_coord(&lower, size), Ok(pos));
    }
}

use super::*;

#[test]
fn test_side_forward() {
    // Near moves toward row 0, Far toward the last row
    assert_eq!(Side::Near.forward(), -1);
    assert_eq!(Side::Far.forward(), 1);
}

#[test]
fn test_cell_validity() {
    assert!(Cell::is_valid(0, 0, 8));
    assert!(Cell::is_valid(7, 7, 8));
    assert!(!Cell::is_valid(-1, 0, 8));
    assert!(!Cell::is_valid(0, -1, 8));
    assert!(!Cell::is_valid(8, 0, 8));
    assert!(!Cell::is_valid(0, 8, 8));
    assert!(Cell::is_valid(9, 9, 10));
}

#[test]
fn test_cell_offset() {
    let cell = Cell::new(5, 0);
    assert_eq!(cell.offset(-1, 1, 8), Some(Cell::new(4, 1)));
    assert_eq!(cell.offset(-1, -1, 8), None);
    assert_eq!(Cell::new(7, 7).offset(1, 1, 8), None);
}

#[test]
fn test_cell_parity() {
    assert!(Cell::new(0, 1).is_playable());
    assert!(Cell::new(5, 0).is_playable());
    assert!(!Cell::new(0, 0).is_playable());
    assert!(!Cell::new(7, 7).is_playable());
}

#[test]
fn test_cell_ordering() {
    let a = Cell::new(0, 7);
    let b = Cell::new(1, 0);
    assert!(a < b);
    assert!(Cell::new(0, 0) < a);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 8);
    assert_eq!(HOME_ROWS, 3);
}

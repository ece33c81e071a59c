use gridlock::{
    check_step, evaluate, is_legal_step, Board, BoardError, BoardState, Cell, Direction,
    MoveError, Orientation, Outcome, Step, Vehicle, VehicleId,
};

fn h(x: usize, y: usize, len: usize) -> Vehicle {
    Vehicle::new(Cell::new(x, y), Orientation::Horizontal, len)
}

fn v(x: usize, y: usize, len: usize) -> Vehicle {
    Vehicle::new(Cell::new(x, y), Orientation::Vertical, len)
}

/// . . B . . .
/// A A B . . .
/// . . B . C .
/// . . . . C .
fn sample() -> Board {
    Board::new(6, 4, 12, vec![h(0, 1, 2), v(2, 0, 3), v(4, 2, 2)]).unwrap()
}

#[test]
fn test_construction_keeps_order() {
    let board = sample();
    assert_eq!(board.width(), 6);
    assert_eq!(board.height(), 4);
    assert_eq!(board.move_budget(), 12);
    assert_eq!(board.moves_used(), 0);
    assert_eq!(board.exit_vehicle(), &h(0, 1, 2));
    assert_eq!(board.vehicle(VehicleId::new(2)), Some(&v(4, 2, 2)));
    assert_eq!(board.vehicle(VehicleId::new(3)), None);
}

#[test]
fn test_too_many_vehicles() {
    let mut vehicles = vec![h(0, 0, 2)];
    for x in 0..26 {
        vehicles.push(v(x, 1, 2));
    }
    assert_eq!(
        Board::new(26, 3, 5, vehicles),
        Err(BoardError::TooManyVehicles(27))
    );
}

#[test]
fn test_blocked_exit_vehicle() {
    let mut board = sample();
    let before = board.clone();
    assert_eq!(
        board.apply_move(VehicleId::new(0), Direction::Right),
        Err(MoveError::Blocked {
            by: VehicleId::new(1)
        })
    );
    assert_eq!(board, before);
    assert!(!is_legal_step(&board, VehicleId::new(0), Step::Forward));
}

#[test]
fn test_clearing_the_path_wins() {
    let mut board = sample();
    let a = VehicleId::new(0);
    let b = VehicleId::new(1);
    let c = VehicleId::new(2);

    board.apply_move(b, Direction::Down).unwrap();
    assert_eq!(
        board.apply_move(a, Direction::Right),
        Err(MoveError::Blocked { by: b }),
        "B still covers row 1"
    );
    assert_eq!(
        board.apply_move(b, Direction::Down),
        Err(MoveError::OutOfBounds)
    );
    board.apply_move(b, Direction::Up).unwrap();
    board.apply_move(c, Direction::Up).unwrap();
    board.apply_move(c, Direction::Up).unwrap();
    assert_eq!(board.apply_move(c, Direction::Up), Err(MoveError::OutOfBounds));
    assert_eq!(board.moves_used(), 4);

    // B is back against the top edge and still blocks row 1
    assert!(check_step(&board, b, Step::Back).is_err());
    assert_eq!(evaluate(&board), Outcome::InProgress);
}

#[test]
fn test_footprint_is_new_position() {
    let board = sample();
    let fp = check_step(&board, VehicleId::new(2), Step::Back).unwrap();
    assert_eq!(fp.anchor(), Cell::new(4, 1));
    assert_eq!(fp.cells(), [Cell::new(4, 1), Cell::new(4, 2)]);
    // checking never moves anything
    assert_eq!(board, sample());
}

#[test]
fn test_board_state_snapshot() {
    let mut board = sample();
    board.apply_move(VehicleId::new(2), Direction::Up).unwrap();
    let state = BoardState::from(&board);
    assert_eq!(state.moves_used, 1);
    assert_eq!(state.moves_remaining(), 11);
    assert_eq!(state.vehicles[2].anchor(), Cell::new(4, 1));
    assert_eq!(state.vehicle_at(Cell::new(2, 2)), Some(VehicleId::new(1)));
    assert_eq!(state.vehicle_at(Cell::new(5, 3)), None);
}

#[test]
fn test_unknown_vehicle_move() {
    let mut board = sample();
    assert_eq!(
        board.apply_move(VehicleId::new(9), Direction::Left),
        Err(MoveError::UnknownVehicle(VehicleId::new(9)))
    );
}

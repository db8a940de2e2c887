//! Tests for the game-state engine through its public API.

use tictactoe_engine::{
    Board, Cell, Game, GameError, GameId, GameStatus, Position, Side, best_move, compute_status,
};

fn board(s: &str) -> Board {
    s.parse().expect("valid board literal")
}

#[test]
fn test_compute_status_x_wins_top_row() {
    let b = Board::from_rows([
        [Cell::Occupied(Side::X), Cell::Occupied(Side::X), Cell::Occupied(Side::X)],
        [Cell::Occupied(Side::O), Cell::Occupied(Side::O), Cell::Empty],
        [Cell::Empty, Cell::Empty, Cell::Empty],
    ]);
    assert_eq!(compute_status(&b), GameStatus::XWon);
}

#[test]
fn test_compute_status_full_board_draw() {
    assert_eq!(compute_status(&board("XOX/OXO/OXO")), GameStatus::Draw);
}

#[test]
fn test_create_as_o_without_board() {
    let game = Game::create(None, Side::O).unwrap();
    assert_eq!(game.player_side(), Side::O);
    assert_eq!(game.turn(), Side::X);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.board(), &Board::new());
}

#[test]
fn test_create_with_first_move_gives_o_the_turn() {
    let game = Game::create(Some(board(".../.X./...")), Side::X).unwrap();
    assert_eq!(game.turn(), Side::O);
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_create_with_finished_board_is_terminal() {
    let mut game = Game::create(Some(board("XXX/OO./...")), Side::X).unwrap();
    assert_eq!(game.status(), GameStatus::XWon);
    assert!(game.is_over());
    assert!(matches!(
        game.apply_move(2, 2, Side::O),
        Err(GameError::GameAlreadyOver { .. })
    ));
}

#[test]
fn test_create_rejects_inconsistent_counts() {
    let result = Game::create(Some(board("XX./X../...")), Side::O);
    assert!(matches!(result, Err(GameError::InvalidBoardState { .. })));
}

#[test]
fn test_create_rejects_two_winning_lines() {
    let result = Game::create(Some(board("OOO/.../XXX")), Side::X);
    assert!(matches!(result, Err(GameError::InvalidBoardState { .. })));
}

#[test]
fn test_second_move_on_same_cell_is_occupied() {
    let mut game = Game::create(None, Side::X).unwrap();
    game.apply_move(0, 0, Side::X).unwrap();

    let before = game.clone();
    let err = game.apply_move(0, 0, Side::O).unwrap_err();
    assert_eq!(
        err,
        GameError::CellOccupied {
            position: Position::new(0, 0).unwrap()
        }
    );
    assert_eq!(game, before);
    assert_eq!(game.board().get(Position::new(0, 0).unwrap()), Cell::Occupied(Side::X));
}

#[test]
fn test_wrong_turn_leaves_game_unchanged() {
    let mut game = Game::create(None, Side::X).unwrap();
    let before = game.clone();

    for _ in 0..3 {
        let err = game.apply_move(1, 1, Side::O).unwrap_err();
        assert_eq!(
            err,
            GameError::WrongTurn {
                expected: Side::X,
                actual: Side::O
            }
        );
        assert_eq!(game, before);
    }
}

#[test]
fn test_row_three_is_out_of_bounds() {
    for initial in [None, Some(board("X../.O./...")), Some(board("XOX/OX./..."))] {
        let mut game = Game::create(initial, Side::X).unwrap();
        let turn = game.turn();
        let before = game.clone();
        assert_eq!(
            game.apply_move(3, 0, turn),
            Err(GameError::OutOfBounds { row: 3, col: 0 })
        );
        assert_eq!(game, before);
    }
}

#[test]
fn test_full_game_to_x_win() {
    let mut game = Game::create_with_id(GameId::from("full"), None, Side::X).unwrap();
    let moves = [
        (1, 1, Side::X),
        (0, 0, Side::O),
        (2, 2, Side::X),
        (0, 2, Side::O),
        (0, 1, Side::X),
        (2, 0, Side::O),
        (2, 1, Side::X),
    ];
    let mut last = GameStatus::InProgress;
    for (row, col, side) in moves {
        last = game.apply_move(row, col, side).unwrap();
    }
    assert_eq!(last, GameStatus::XWon);
    assert_eq!(game.history().len(), 7);
    assert_eq!(game.turn(), Side::X);
}

#[test]
fn test_draw_then_absorbing() {
    let mut game = Game::create(None, Side::O).unwrap();
    // X O X / O X X / O X O
    let moves = [
        (0, 0, Side::X),
        (0, 1, Side::O),
        (0, 2, Side::X),
        (1, 0, Side::O),
        (1, 1, Side::X),
        (2, 2, Side::O),
        (1, 2, Side::X),
        (2, 0, Side::O),
        (2, 1, Side::X),
    ];
    for (row, col, side) in moves {
        game.apply_move(row, col, side).unwrap();
    }
    assert_eq!(game.status(), GameStatus::Draw);

    let before = game.clone();
    for side in [Side::X, Side::O] {
        assert_eq!(
            game.apply_move(0, 0, side),
            Err(GameError::GameAlreadyOver {
                status: GameStatus::Draw
            })
        );
    }
    assert_eq!(game, before);
}

#[test]
fn test_game_roundtrips_through_json() {
    let mut game = Game::create(None, Side::X).unwrap();
    game.apply_move(1, 1, Side::X).unwrap();
    let json = serde_json::to_string(&game).unwrap();
    let back: Game = serde_json::from_str(&json).unwrap();
    assert_eq!(back, game);
}

/// Plays every line of the opponent against a computer using `best_move`
/// and asserts the computer never ends up on the losing side.
fn assert_never_loses(game: &Game, computer: Side) {
    if game.is_over() {
        assert_ne!(
            game.status().winner(),
            Some(computer.opponent()),
            "computer lost on {}",
            game.board().to_compact()
        );
        return;
    }

    if game.turn() == computer {
        let pos = best_move(game.board(), computer).expect("move available");
        let mut next = game.clone();
        next.apply_move(pos.row(), pos.col(), computer).unwrap();
        assert_never_loses(&next, computer);
    } else {
        for pos in game.board().empty_positions() {
            let mut next = game.clone();
            next.apply_move(pos.row(), pos.col(), computer.opponent())
                .unwrap();
            assert_never_loses(&next, computer);
        }
    }
}

#[test]
fn test_minimax_never_loses_as_x() {
    let game = Game::create(None, Side::O).unwrap();
    assert_never_loses(&game, Side::X);
}

#[test]
fn test_minimax_never_loses_as_o() {
    let game = Game::create(None, Side::X).unwrap();
    assert_never_loses(&game, Side::O);
}

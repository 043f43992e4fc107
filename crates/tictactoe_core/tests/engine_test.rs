//! Scenario tests for the tic-tac-toe engine.

use tictactoe_core::{Board, Cell, Game, GameState, Mark, MoveError, Position};

#[test]
fn test_new_game_is_empty_with_x_first() {
    let game = Game::initialize(None).expect("No seed is always valid");
    assert!(game.board().cells().iter().all(|c| *c == Cell::Empty));
    assert_eq!(game.to_move(), Mark::X);
    assert_eq!(game.state(), GameState::InProgress);
}

#[test]
fn test_seed_with_equal_counts_gives_x_the_move() {
    let mut game = Game::initialize(Some("XOXOXOXO_")).expect("Valid seed");
    assert_eq!(game.to_move(), Mark::X);
    assert_eq!(game.board().encode(), "XOXOXOXO_");
    // X at 2, 4 and 6 completes the anti-diagonal.
    assert_eq!(game.state(), GameState::XWins);
    assert_eq!(
        game.apply_move(2, 2, Mark::X),
        Err(MoveError::GameOver(GameState::XWins))
    );
}

#[test]
fn test_main_diagonal_win() {
    let mut game = Game::new();
    assert_eq!(game.apply_move(0, 0, Mark::X), Ok(GameState::InProgress));
    assert_eq!(game.apply_move(0, 1, Mark::O), Ok(GameState::InProgress));
    assert_eq!(game.apply_move(1, 1, Mark::X), Ok(GameState::InProgress));
    assert_eq!(game.apply_move(0, 2, Mark::O), Ok(GameState::InProgress));
    assert_eq!(game.apply_move(2, 2, Mark::X), Ok(GameState::XWins));

    assert_eq!(game.state(), GameState::XWins);
    assert_eq!(game.winner(), Some(Mark::X));
    assert_eq!(game.evaluate_outcome(), GameState::XWins);
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X / X O O / O X X
    let moves = [
        (0, 0, Mark::X),
        (0, 1, Mark::O),
        (0, 2, Mark::X),
        (1, 1, Mark::O),
        (1, 0, Mark::X),
        (1, 2, Mark::O),
        (2, 1, Mark::X),
        (2, 0, Mark::O),
    ];
    let mut game = Game::new();
    for (row, col, mark) in moves {
        assert_eq!(game.apply_move(row, col, mark), Ok(GameState::InProgress));
    }
    assert_eq!(game.apply_move(2, 2, Mark::X), Ok(GameState::Draw));
    assert!(game.is_over());
    assert_eq!(game.winner(), None);
}

#[test]
fn test_last_move_completing_line_on_full_board_wins() {
    // X O X / O X O / O X _ ; X fills the corner and the main diagonal.
    let mut game = Game::from_seed("XOXOXOOX_").unwrap();
    assert_eq!(game.apply_move(2, 2, Mark::X), Ok(GameState::XWins));
    assert!(game.board().is_full());
}

#[test]
fn test_no_move_after_game_over() {
    let mut game = Game::from_seed("OOO_XX_X_").unwrap();
    assert_eq!(game.state(), GameState::OWins);
    let before = game.clone();
    assert_eq!(
        game.apply_move(1, 0, Mark::X),
        Err(MoveError::GameOver(GameState::OWins))
    );
    assert_eq!(game, before);
}

#[test]
fn test_seeded_full_board_starts_drawn() {
    let game = Game::from_seed("XOXXOOOXX").unwrap();
    assert_eq!(game.state(), GameState::Draw);
}

#[test]
fn test_place_by_position() {
    let mut game = Game::new();
    game.place(Position::BottomCenter, Mark::X).unwrap();
    assert_eq!(game.board().cell(2, 1), Some(Cell::Occupied(Mark::X)));
    assert_eq!(
        game.place(Position::BottomCenter, Mark::O),
        Err(MoveError::CellOccupied(Position::BottomCenter))
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        MoveError::CellOccupied(Position::Center).to_string(),
        "Center is already occupied"
    );
    assert_eq!(
        MoveError::NotYourTurn {
            expected: Mark::X,
            got: Mark::O
        }
        .to_string(),
        "It's X's turn, not O's"
    );
}

#[test]
fn test_state_serializes() {
    let json = serde_json::to_string(&GameState::XWins).unwrap();
    assert_eq!(json, "\"XWins\"");
    let board: Board = "X________".parse().unwrap();
    let round: Board = serde_json::from_str(&serde_json::to_string(&board).unwrap()).unwrap();
    assert_eq!(round, board);
}

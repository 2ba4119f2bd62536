//! Command-stream tests for the board drawing operations.
use xodraw::{
    Board, BoardRenderer, Colour, Marker, PenCommand, Pos, RecordingCanvas, Square,
};

/// The four commands of one pen-up reposition plus pen-down line.
fn line(from: (f64, f64), to: (f64, f64)) -> [PenCommand; 4] {
    [
        PenCommand::PenUp,
        PenCommand::MoveTo {
            x: from.0,
            y: from.1,
        },
        PenCommand::PenDown,
        PenCommand::MoveTo { x: to.0, y: to.1 },
    ]
}

#[test]
fn test_new_board_command_sequence() {
    let mut renderer = BoardRenderer::new(RecordingCanvas::new());
    renderer.draw_new_board().unwrap();

    let mut expected = vec![
        PenCommand::Initialise {
            speed: 10,
            size: (240, 240),
        },
        PenCommand::HideCursor,
        PenCommand::SetColour(Colour::WHITE),
    ];
    expected.extend_from_slice(&line((90.0, 30.0), (90.0, 210.0)));
    expected.extend_from_slice(&line((150.0, 30.0), (150.0, 210.0)));
    expected.extend_from_slice(&line((30.0, 90.0), (210.0, 90.0)));
    expected.extend_from_slice(&line((30.0, 150.0), (210.0, 150.0)));

    assert_eq!(renderer.canvas().commands(), expected.as_slice());
}

#[test]
fn test_x_marker_command_sequence() {
    let mut renderer = BoardRenderer::new(RecordingCanvas::new());
    let centre = Pos::new(1, 1).unwrap();
    renderer.draw_marker(Marker::X, centre, Colour::RED).unwrap();

    let mut expected = vec![PenCommand::HideCursor, PenCommand::SetColour(Colour::RED)];
    expected.extend_from_slice(&line((102.0, 102.0), (138.0, 138.0)));
    expected.extend_from_slice(&line((138.0, 102.0), (102.0, 138.0)));

    assert_eq!(renderer.canvas().commands(), expected.as_slice());
}

#[test]
fn test_o_marker_walks_a_circle() {
    let mut renderer = BoardRenderer::new(RecordingCanvas::new());
    let corner = Pos::new(0, 0).unwrap();
    renderer
        .draw_marker(Marker::O, corner, Colour::GREEN)
        .unwrap();

    let commands = renderer.canvas().commands();
    // 5 setup commands, then 120 turn-and-step pairs.
    assert_eq!(commands.len(), 245);
    assert_eq!(
        &commands[..5],
        [
            PenCommand::HideCursor,
            PenCommand::SetColour(Colour::GREEN),
            PenCommand::PenUp,
            PenCommand::MoveTo { x: 42.0, y: 60.0 },
            PenCommand::PenDown,
        ]
    );
    let turns = commands
        .iter()
        .filter(|c| matches!(c, PenCommand::TurnRight(d) if *d == 3.0))
        .count();
    let steps = commands
        .iter()
        .filter(|c| matches!(c, PenCommand::Forward(d) if *d == 1.0))
        .count();
    assert_eq!(turns, 120);
    assert_eq!(steps, 120);
}

#[test]
fn test_marker_case_never_changes_the_drawing() {
    // "x" and "X" parse to the same marker, so their drawings match.
    let lower: Square = "x".parse().unwrap();
    let upper: Square = "X".parse().unwrap();

    let mut first = BoardRenderer::new(RecordingCanvas::new());
    first
        .draw_marker(lower, Pos::new(0, 2).unwrap(), Colour::RED)
        .unwrap();
    let mut second = BoardRenderer::new(RecordingCanvas::new());
    second
        .draw_marker(upper, Pos::new(0, 2).unwrap(), Colour::RED)
        .unwrap();

    assert_eq!(first.canvas().commands(), second.canvas().commands());
}

#[test]
fn test_empty_square_draw_is_inert() {
    let mut renderer = BoardRenderer::new(RecordingCanvas::new());
    renderer
        .draw_marker(Square::Empty, Pos::new(2, 2).unwrap(), Colour::WHITE)
        .unwrap();

    assert_eq!(
        renderer.canvas().commands(),
        [
            PenCommand::HideCursor,
            PenCommand::SetColour(Colour::WHITE),
        ]
    );
}

#[test]
fn test_win_line_joins_cell_centres() {
    let mut renderer = BoardRenderer::new(RecordingCanvas::new());
    renderer
        .draw_win(
            Pos::new(0, 0).unwrap(),
            Pos::new(2, 2).unwrap(),
            Colour::YELLOW,
        )
        .unwrap();

    let mut expected = vec![
        PenCommand::HideCursor,
        PenCommand::SetColour(Colour::YELLOW),
    ];
    expected.extend_from_slice(&line((60.0, 60.0), (180.0, 180.0)));

    assert_eq!(renderer.canvas().commands(), expected.as_slice());
}

#[test]
fn test_win_line_accepts_any_cell_pair() {
    // No alignment rule: the line is purely geometric.
    let mut renderer = BoardRenderer::new(RecordingCanvas::new());
    renderer
        .draw_win(
            Pos::new(0, 0).unwrap(),
            Pos::new(1, 2).unwrap(),
            Colour::CYAN,
        )
        .unwrap();

    let commands = renderer.canvas().commands();
    assert_eq!(
        commands.last(),
        Some(&PenCommand::MoveTo { x: 180.0, y: 120.0 })
    );
}

#[test]
fn test_draw_board_without_state_is_blank_board() {
    let mut with_none = BoardRenderer::new(RecordingCanvas::new());
    with_none.draw_board(None, false).unwrap();

    let mut blank = BoardRenderer::new(RecordingCanvas::new());
    blank.draw_new_board().unwrap();

    assert_eq!(with_none.canvas().commands(), blank.canvas().commands());
}

#[test]
fn test_draw_board_blank_grid_then_inert_cells() {
    let mut renderer = BoardRenderer::new(RecordingCanvas::new());
    renderer.draw_board(Some(&Board::new()), false).unwrap();

    // 19 grid commands, then two inert commands per empty cell.
    let commands = renderer.canvas().commands();
    assert_eq!(commands.len(), 19 + 9 * 2);
    assert!(matches!(
        commands[0],
        PenCommand::Initialise { speed: 10, .. }
    ));
    assert_eq!(commands[19], PenCommand::HideCursor);
    assert_eq!(commands[20], PenCommand::SetColour(Colour::WHITE));
}

#[test]
fn test_draw_board_keeps_session_for_marked_board() {
    let mut board = Board::new();
    board.set(Pos::new(0, 0).unwrap(), Square::Marked(Marker::X));

    let mut renderer = BoardRenderer::new(RecordingCanvas::new());
    renderer.draw_board(Some(&board), false).unwrap();

    let commands = renderer.canvas().commands();
    // One X (10 commands) plus eight inert cells: no fresh session.
    assert_eq!(commands.len(), 10 + 8 * 2);
    assert!(!commands
        .iter()
        .any(|c| matches!(c, PenCommand::Initialise { .. })));
    // The X draws first, in the palette's X colour.
    assert_eq!(commands[1], PenCommand::SetColour(Colour::RED));
    assert_eq!(commands[3], PenCommand::MoveTo { x: 42.0, y: 42.0 });
}

#[test]
fn test_draw_board_new_board_forces_fresh_session() {
    let mut board = Board::new();
    board.set(Pos::new(1, 1).unwrap(), Square::Marked(Marker::O));

    let mut renderer = BoardRenderer::new(RecordingCanvas::new());
    renderer.draw_board(Some(&board), true).unwrap();

    let commands = renderer.canvas().commands();
    assert!(matches!(
        commands[0],
        PenCommand::Initialise { speed: 10, .. }
    ));
    // Grid, then 8 inert cells, then the 245-command O.
    assert_eq!(commands.len(), 19 + 8 * 2 + 245);
}

#[test]
fn test_draw_board_row_major_order() {
    let mut board = Board::new();
    board.set(Pos::new(0, 1).unwrap(), Square::Marked(Marker::X));
    board.set(Pos::new(2, 0).unwrap(), Square::Marked(Marker::O));

    let mut renderer = BoardRenderer::new(RecordingCanvas::new());
    renderer.draw_board(Some(&board), false).unwrap();

    let commands = renderer.canvas().commands();
    let red = commands
        .iter()
        .position(|c| *c == PenCommand::SetColour(Colour::RED));
    let green = commands
        .iter()
        .position(|c| *c == PenCommand::SetColour(Colour::GREEN));
    assert!(red.unwrap() < green.unwrap());
}

#[test]
fn test_styled_board_uses_style_geometry() {
    use xodraw::BoardStyle;

    let style = BoardStyle::default().with_size(90).with_margin(10);
    let mut renderer = BoardRenderer::with_style(RecordingCanvas::new(), style);
    renderer.draw_new_board().unwrap();

    let commands = renderer.canvas().commands();
    assert_eq!(
        commands[0],
        PenCommand::Initialise {
            speed: 10,
            size: (110, 110),
        }
    );
    // First grid line sits one 30-pixel cell in from the margin.
    assert_eq!(commands[4], PenCommand::MoveTo { x: 40.0, y: 10.0 });
}

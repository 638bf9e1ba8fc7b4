use tui_blockfall::core::{Board, PieceFactory};
use tui_blockfall::term::{FrameBuffer, GameView, Viewport};
use tui_blockfall::types::{MoveDirection, PieceKind};

fn board_of(kinds: &[PieceKind]) -> Board {
    Board::with_factory(22, 10, PieceFactory::sequence(kinds.iter().copied()))
}

fn text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let board = board_of(&[PieceKind::O]);
    let view = GameView::default();

    // 10 cols * 2 + border by 22 rows + border.
    let fb = view.render(&board, None, Viewport::new(22, 24));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 23).unwrap().ch, '└');
    assert_eq!(fb.get(21, 23).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut board = board_of(&[PieceKind::I]);
    board.hard_drop();

    let fb = GameView::default().render(&board, None, Viewport::new(22, 24));

    // Column 5, row 21 sits at x = 1 + 5*2, y = 1 + 21.
    assert_eq!(fb.get(11, 22).unwrap().ch, '█');
    assert_eq!(fb.get(12, 22).unwrap().ch, '█');
    assert_eq!(fb.get(1, 22).unwrap().ch, '·');
}

#[test]
fn term_view_draws_active_piece() {
    let board = board_of(&[PieceKind::O]);
    let fb = GameView::default().render(&board, None, Viewport::new(22, 24));

    // O at (5,0) covers columns 5-6 of rows 0-1.
    for (x, y) in [(11, 1), (14, 1), (11, 2), (14, 2)] {
        assert_eq!(fb.get(x, y).unwrap().ch, '█', "({x},{y})");
    }
    assert_eq!(fb.get(9, 1).unwrap().ch, '·');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut board = board_of(&[PieceKind::I, PieceKind::I, PieceKind::O, PieceKind::L]);
    for _ in 0..5 {
        board.try_move(MoveDirection::Left);
    }
    board.hard_drop();
    board.try_move(MoveDirection::Left);
    board.hard_drop();
    for _ in 0..3 {
        board.try_move(MoveDirection::Right);
    }
    board.hard_drop();
    assert_eq!(board.cleared_rows(), 1);

    let fb = GameView::default().render(&board, None, Viewport::new(60, 24));
    let all = text(&fb);
    assert!(all.contains("CLEARED"));
    assert!(all.contains("NEXT"));

    let lines: Vec<&str> = all.lines().collect();
    let label = lines.iter().position(|l| l.contains("CLEARED")).unwrap();
    assert!(lines[label + 1].contains('1'));
}

#[test]
fn term_view_narrow_viewport_skips_panel() {
    let board = board_of(&[PieceKind::O]);
    let fb = GameView::default().render(&board, None, Viewport::new(22, 24));
    assert!(!text(&fb).contains("NEXT"));
}

#[test]
fn term_view_centers_board_on_tall_viewports() {
    let board = board_of(&[PieceKind::O]);
    let fb = GameView::default().render(&board, None, Viewport::new(22, 30));

    // start_y = (30 - 24) / 2 = 3.
    assert_eq!(fb.get(0, 3).unwrap().ch, '┌');
}

#[test]
fn term_view_overlays_banner() {
    let board = board_of(&[PieceKind::O]);
    let view = GameView::default();

    let fb = view.render(&board, Some("GAME OVER"), Viewport::new(40, 24));
    assert!(text(&fb).contains("GAME OVER"));

    let fb = view.render(&board, None, Viewport::new(40, 24));
    assert!(!text(&fb).contains("GAME OVER"));
}

#[test]
fn term_view_handles_tiny_viewport() {
    let board = board_of(&[PieceKind::O]);
    let fb = GameView::default().render(&board, Some("GAME OVER"), Viewport::new(5, 3));
    assert_eq!((fb.width(), fb.height()), (5, 3));
}

#[test]
fn term_view_clips_boards_wider_than_the_terminal() {
    let board = Board::with_factory(22, 40_000, PieceFactory::sequence([PieceKind::O]));
    let fb = GameView::default().render(&board, Some("GAME OVER"), Viewport::new(80, 24));

    assert_eq!((fb.width(), fb.height()), (80, 24));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    // Columns past the right edge are dropped, so the edge shows grid cells.
    assert_eq!(fb.get(79, 1).unwrap().ch, '·');
}

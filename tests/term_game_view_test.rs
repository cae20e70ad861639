use term_tetris::core::{ActivePiece, GameSession, GameSnapshot, Phase};
use term_tetris::term::{GameView, Viewport};
use term_tetris::types::{PauseItem, PieceKind, SessionEnd};

fn text(fb: &term_tetris::term::FrameBuffer) -> Vec<String> {
    (0..fb.height()).map(|y| fb.row_text(y)).collect()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameSession::new(1).snapshot();
    let view = GameView::default();

    // Field 10*2 x 20 plus border => 22x22, plus title and HUD rows.
    let vp = Viewport::new(22, 24);
    let fb = view.render(&snap, vp);

    assert_eq!(fb.get(0, 2).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 2).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 23).unwrap().ch, '└');
    assert_eq!(fb.get(21, 23).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = GameSnapshot::default();
    snap.field[19][0] = PieceKind::I.color_tag();

    let view = GameView::default();
    let fb = view.render(&snap, Viewport::new(22, 24));

    // Inside border: (1, 3) origin. Each cell is 2 chars wide.
    let y0 = 3 + 19;
    assert_eq!(fb.get(1, y0).unwrap().ch, '█');
    assert_eq!(fb.get(2, y0).unwrap().ch, '█');
    assert_ne!(fb.get(3, y0).unwrap().ch, '█');
}

#[test]
fn term_view_hides_cells_above_field() {
    let mut snap = GameSnapshot::default();
    let mut piece = ActivePiece::spawn(PieceKind::I);
    piece.shape = piece.shape.rotated_cw();
    piece.y = -3;
    snap.active = Some(piece);

    let view = GameView::default();
    let fb = view.render(&snap, Viewport::new(22, 24));

    let filled = fb.cells().iter().filter(|c| c.ch == '█').count();
    // One visible cell, two columns wide.
    assert_eq!(filled, 2);
}

#[test]
fn term_view_draws_controls_when_wide_enough() {
    let snap = GameSnapshot::default();
    let view = GameView::default();

    let wide = text(&view.render(&snap, Viewport::new(80, 24)));
    assert!(wide.iter().any(|row| row.contains("CONTROLS")));

    let narrow = text(&view.render(&snap, Viewport::new(30, 24)));
    assert!(!narrow.iter().any(|row| row.contains("CONTROLS")));
}

#[test]
fn term_view_overlays_follow_phase() {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();

    snap.phase = Phase::Paused(PauseItem::Exit);
    let rows = text(&view.render(&snap, Viewport::new(80, 24)));
    assert!(rows.iter().any(|r| r.contains("> Exit")));

    snap.phase = Phase::GameOver(SessionEnd::ToppedOut);
    snap.score = 800;
    let rows = text(&view.render(&snap, Viewport::new(80, 24)));
    assert!(rows.iter().any(|r| r.contains("GAME OVER!")));
    assert!(rows.iter().any(|r| r.contains("Final Score: 800")));

    snap.phase = Phase::GameOver(SessionEnd::Exited);
    let rows = text(&view.render(&snap, Viewport::new(80, 24)));
    assert!(!rows.iter().any(|r| r.contains("GAME OVER!")));
}

#[test]
fn term_view_reuses_framebuffer_across_sizes() {
    let view = GameView::default();
    let snap = GameSnapshot::default();
    let mut fb = term_tetris::term::FrameBuffer::new(1, 1);

    view.render_into(&snap, Viewport::new(80, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (80, 24));
    view.render_into(&snap, Viewport::new(40, 30), &mut fb);
    assert_eq!((fb.width(), fb.height()), (40, 30));
}

//! Rendering tests that combine several widgets.

use devboard_protocol::{TaskId, TaskStatus};
use ratatui::{buffer::Buffer, layout::Rect, style::Modifier};

use super::{HintMode, render_board, render_help_overlay, render_status_bar, render_task_form};
use crate::form::TaskForm;
use crate::test_utils::{buffer_to_string, sample_view};
use crate::view::CardMark;

#[test]
fn snapshot_status_bar_board_hints() {
    let area = Rect::new(0, 0, 40, 3);
    let mut buf = Buffer::empty(area);

    render_status_bar(None, HintMode::Board, area, &mut buf);

    insta::assert_snapshot!(buffer_to_string(&buf), @r"
    ┌──────────────────────────────────────┐
    │n New  m Move  d Delete  ←→↑↓ Navigate│
    └──────────────────────────────────────┘
    ");
}

#[test]
fn board_reflects_drag_in_progress() {
    let mut view = sample_view();
    let id = TaskId::new("task_001");
    view.set_mark(&id, CardMark::Lifted, true);
    view.set_drop_target(TaskStatus::Done, true);

    let area = Rect::new(0, 0, 90, 20);
    let mut buf = Buffer::empty(area);
    render_board(&view, 0, Some(0), area, &mut buf);

    let content = buffer_to_string(&buf);
    assert!(content.contains("Done (1) ▼"));
    assert!(!content.contains("To Do (1) ▼"));
    // The lifted card is drawn with a thick border
    assert!(content.contains('┏'));
}

#[test]
fn removing_card_is_struck_through() {
    let mut view = sample_view();
    view.set_mark(&TaskId::new("task_002"), CardMark::Removing, true);

    let area = Rect::new(0, 0, 90, 20);
    let mut buf = Buffer::empty(area);
    render_board(&view, 0, None, area, &mut buf);

    let content = buffer_to_string(&buf);
    let (row, line) = content
        .lines()
        .enumerate()
        .find(|(_, line)| line.contains("#sk_002"))
        .expect("card rendered");
    let id_start = line.find("#sk_002").expect("id label");
    // The title follows the id label and a space
    let col = line[..id_start].chars().count() + "#sk_002 ".len();
    let cell = buf.cell((col as u16, row as u16)).expect("cell");
    assert!(cell.modifier.contains(Modifier::CROSSED_OUT));
}

#[test]
fn overlays_draw_over_board() {
    let view = sample_view();
    let area = Rect::new(0, 0, 90, 30);
    let mut buf = Buffer::empty(area);

    render_board(&view, 0, None, area, &mut buf);
    render_task_form(&TaskForm::new(), area, &mut buf);
    let content = buffer_to_string(&buf);
    assert!(content.contains("New task"));
    assert!(content.contains("To Do (1)"));

    render_help_overlay(area, &mut buf);
    let content = buffer_to_string(&buf);
    assert!(content.contains("Help"));
    assert!(content.contains("Press any key to close"));
}

use sectioned::msg::{Message, update::update};

use crate::utils::{create_flat_sections, create_model_from_sections, create_test_model};

mod utils;

#[test]
fn test_move_down_and_up() {
    let mut model = create_test_model(40);

    update(&mut model, Message::MoveDown).unwrap();
    assert_eq!(model.ui_model.cursor_position, 1);

    update(&mut model, Message::MoveUp).unwrap();
    assert_eq!(model.ui_model.cursor_position, 0);

    // Cannot move above the first row
    update(&mut model, Message::MoveUp).unwrap();
    assert_eq!(model.ui_model.cursor_position, 0);
}

#[test]
fn test_move_down_stops_at_last_row() {
    let mut model = create_model_from_sections(create_flat_sections(1, 2), 10);
    for _ in 0..5 {
        update(&mut model, Message::MoveDown).unwrap();
    }
    assert_eq!(model.ui_model.cursor_position, 2);
}

#[test]
fn test_move_down_skips_collapsed_items() {
    let mut model = create_test_model(40);
    update(&mut model, Message::ToggleSection).unwrap();

    update(&mut model, Message::MoveDown).unwrap();
    let row = model.cursor_row().unwrap();
    assert!(row.is_header());
    assert_eq!(row.section(), 1);
}

#[test]
fn test_move_down_scrolls_by_row_height() {
    // One header line and seven two-line rows fill the first 15 lines
    let mut model = create_test_model(5);
    update(&mut model, Message::MoveDown).unwrap();
    update(&mut model, Message::MoveDown).unwrap();
    assert_eq!(model.ui_model.cursor_position, 2);
    assert_eq!(model.ui_model.scroll_offset, 0);

    update(&mut model, Message::MoveDown).unwrap();
    // Rows 1..=3 take six lines, so row 1 has to leave the viewport
    assert_eq!(model.ui_model.scroll_offset, 2);
}

#[test]
fn test_move_up_scrolls_viewport() {
    let mut model = create_test_model(5);
    model.ui_model.cursor_position = 6;
    model.ui_model.scroll_offset = 5;

    update(&mut model, Message::MoveUp).unwrap();
    update(&mut model, Message::MoveUp).unwrap();
    assert_eq!(model.ui_model.cursor_position, 4);
    assert_eq!(model.ui_model.scroll_offset, 4);
}

#[test]
fn test_gg_moves_to_top() {
    let mut model = create_test_model(10);
    model.ui_model.cursor_position = 12;
    model.ui_model.scroll_offset = 8;

    let follow_up = update(&mut model, Message::PendingG).unwrap();
    assert_eq!(follow_up, None);
    assert!(model.pending_g);

    let follow_up = update(&mut model, Message::PendingG).unwrap();
    assert_eq!(follow_up, Some(Message::MoveToTop));
    update(&mut model, Message::MoveToTop).unwrap();

    assert_eq!(model.ui_model.cursor_position, 0);
    assert_eq!(model.ui_model.scroll_offset, 0);
    assert!(!model.pending_g);
}

#[test]
fn test_other_key_cancels_pending_g() {
    let mut model = create_test_model(10);
    update(&mut model, Message::PendingG).unwrap();
    update(&mut model, Message::MoveDown).unwrap();
    assert!(!model.pending_g);

    let follow_up = update(&mut model, Message::PendingG).unwrap();
    assert_eq!(follow_up, None);
}

#[test]
fn test_move_to_bottom() {
    let mut model = create_test_model(40);
    update(&mut model, Message::MoveToBottom).unwrap();
    assert_eq!(model.ui_model.cursor_position, 18);
    // All 32 lines fit in the viewport
    assert_eq!(model.ui_model.scroll_offset, 0);
}

#[test]
fn test_half_page_down_and_up() {
    let mut model = create_model_from_sections(create_flat_sections(1, 30), 10);

    update(&mut model, Message::HalfPageDown).unwrap();
    assert_eq!(model.ui_model.cursor_position, 5);
    assert_eq!(model.ui_model.scroll_offset, 0);

    update(&mut model, Message::HalfPageDown).unwrap();
    assert_eq!(model.ui_model.cursor_position, 10);
    assert_eq!(model.ui_model.scroll_offset, 1);

    update(&mut model, Message::HalfPageUp).unwrap();
    assert_eq!(model.ui_model.cursor_position, 5);
    assert_eq!(model.ui_model.scroll_offset, 1);

    update(&mut model, Message::HalfPageUp).unwrap();
    update(&mut model, Message::HalfPageUp).unwrap();
    assert_eq!(model.ui_model.cursor_position, 0);
    assert_eq!(model.ui_model.scroll_offset, 0);
}

#[test]
fn test_quit() {
    let mut model = create_test_model(10);
    update(&mut model, Message::Quit).unwrap();
    assert_eq!(model.running_state, sectioned::model::RunningState::Done);
}

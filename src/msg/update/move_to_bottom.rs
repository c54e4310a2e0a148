use crate::{model::Model, msg::Message};

pub fn update(model: &mut Model) -> Option<Message> {
    model.ui_model.cursor_position = model.ui_model.rows.len().saturating_sub(1);
    // Adjust scroll so cursor is visible at bottom of viewport
    model.ui_model.scroll_to_cursor();
    None
}

use crate::{model::Model, msg::Message};

pub fn update(model: &mut Model) -> Option<Message> {
    let max_pos = model.ui_model.rows.len().saturating_sub(1);
    if model.ui_model.cursor_position < max_pos {
        model.ui_model.cursor_position += 1;
        // Scroll down if the cursor row no longer fits in the viewport
        model.ui_model.scroll_to_cursor();
    }
    None
}

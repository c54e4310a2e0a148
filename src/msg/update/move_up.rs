use crate::{model::Model, msg::Message};

pub fn update(model: &mut Model) -> Option<Message> {
    if model.ui_model.cursor_position > 0 {
        model.ui_model.cursor_position -= 1;
        // Scroll up if cursor moves above viewport
        model.ui_model.scroll_to_cursor();
    }
    None
}

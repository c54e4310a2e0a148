use crate::{model::Model, msg::Message};

pub fn update(model: &mut Model) -> Option<Message> {
    let half_page = model.ui_model.viewport_height / 2;
    let rows = &model.ui_model.rows;
    // Move up until half a page of lines has been passed
    let mut lines = 0;
    let mut new_pos = model.ui_model.cursor_position;
    while new_pos > 0 && lines < half_page {
        new_pos -= 1;
        lines += rows.row_height(new_pos);
    }
    model.ui_model.cursor_position = new_pos;
    model.ui_model.scroll_to_cursor();
    None
}

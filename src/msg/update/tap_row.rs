use crate::{model::Model, msg::Message};

/// Moves the cursor to the tapped row. Tapping a section header toggles
/// that section.
pub fn update(model: &mut Model, row: usize) -> Option<Message> {
    let tapped = model.ui_model.rows.get(row)?;
    model.ui_model.cursor_position = row;
    model.ui_model.scroll_to_cursor();
    tapped.is_header().then_some(Message::ToggleSection)
}

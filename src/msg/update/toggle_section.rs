use tracing::debug;

use crate::{errors::SectionedResult, model::Model, msg::Message};

/// Collapses or expands the section under the cursor.
///
/// The section model is changed first and the list view reloads that one
/// section afterwards, so the next draw never sees stale row counts.
pub fn update(model: &mut Model) -> SectionedResult<Option<Message>> {
    let Some(row) = model.cursor_row() else {
        return Ok(None);
    };
    let section = row.section();

    let collapsed = model.sections.toggle(section)?;
    model.ui_model.rows.reload_section(&model.sections, section)?;

    // Keep the cursor on the header; item rows may just have disappeared
    if let Some(header) = model.ui_model.rows.header_row(section) {
        model.ui_model.cursor_position = header;
    }
    model.ui_model.clamp_to_rows();
    model.ui_model.scroll_to_cursor();

    debug!(
        section,
        collapsed,
        rows = model.ui_model.rows.len(),
        "section toggled from cursor"
    );
    Ok(None)
}

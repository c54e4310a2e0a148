use crate::{
    errors::SectionedResult,
    model::Model,
    msg::Message,
};

mod dismiss_popup;
mod half_page_down;
mod half_page_up;
mod move_down;
mod move_to_bottom;
mod move_to_top;
mod move_up;
mod quit;
mod show_popup;
mod tap_row;
mod toggle_section;

/// Processes a [`Message`], modifying the passed model.
///
/// Returns a follow up [`Message`] for sequences of actions,
/// e.g. a tap on a header is followed by a [`Message::ToggleSection`].
///
/// Errors are index errors between the list view and the section model and
/// are not recoverable.
pub fn update(model: &mut Model, msg: Message) -> SectionedResult<Option<Message>> {
    // Any key other than the second 'g' cancels a pending "gg"
    if msg != Message::PendingG {
        model.pending_g = false;
    }

    let follow_up = match msg {
        Message::Quit => quit::update(model),
        Message::MoveUp => move_up::update(model),
        Message::MoveDown => move_down::update(model),
        Message::HalfPageUp => half_page_up::update(model),
        Message::HalfPageDown => half_page_down::update(model),
        Message::MoveToTop => move_to_top::update(model),
        Message::MoveToBottom => move_to_bottom::update(model),
        Message::PendingG => {
            if model.pending_g {
                model.pending_g = false;
                Some(Message::MoveToTop)
            } else {
                model.pending_g = true;
                None
            }
        }
        Message::ToggleSection => toggle_section::update(model)?,
        Message::TapRow(row) => tap_row::update(model, row),
        Message::ShowPopup(content) => show_popup::update(model, content),
        Message::DismissPopup => dismiss_popup::update(model),
    };
    Ok(follow_up)
}

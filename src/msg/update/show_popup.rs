use crate::{
    model::{Model, popup::PopupContent},
    msg::Message,
};

pub fn update(model: &mut Model, content: PopupContent) -> Option<Message> {
    model.popup = Some(content);
    None
}

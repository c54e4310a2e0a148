use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::{
    model::{Model, popup::PopupContent},
    msg::Message,
    view::LIST_TOP,
};

/// Maps a key event into a [`Message`] given the application state.
/// If function returns [`None`], no action should be triggered.
pub fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
    // If a popup is showing, only allow dismissing it
    if model.popup.is_some() {
        return match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q' | '?'))
            | (KeyModifiers::CONTROL, KeyCode::Char('g')) => Some(Message::DismissPopup),
            _ => None,
        };
    }

    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Message::Quit),
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => Some(Message::HalfPageUp),
        (KeyModifiers::CONTROL, KeyCode::Char('d')) => Some(Message::HalfPageDown),
        (KeyModifiers::SHIFT, KeyCode::Char('G')) => Some(Message::MoveToBottom),
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('?')) => {
            Some(Message::ShowPopup(PopupContent::Help))
        }
        (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Message::Quit),
        (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => Some(Message::MoveUp),
        (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => Some(Message::MoveDown),
        (KeyModifiers::NONE, KeyCode::Char('g')) => Some(Message::PendingG),
        (KeyModifiers::NONE, KeyCode::Home) => Some(Message::MoveToTop),
        (KeyModifiers::NONE, KeyCode::End) => Some(Message::MoveToBottom),
        (KeyModifiers::NONE, KeyCode::Tab | KeyCode::Enter | KeyCode::Char(' ')) => {
            Some(Message::ToggleSection)
        }
        _ => None,
    }
}

/// Maps a mouse event into a [`Message`]. A left click selects the row
/// under the pointer; the wheel moves the cursor.
pub fn handle_mouse(mouse: MouseEvent, model: &Model) -> Option<Message> {
    if model.popup.is_some() {
        return match mouse.kind {
            MouseEventKind::Down(_) => Some(Message::DismissPopup),
            _ => None,
        };
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let line = mouse.row.checked_sub(LIST_TOP)? as usize;
            if line >= model.ui_model.viewport_height {
                return None;
            }
            model.ui_model.row_at_line(line).map(Message::TapRow)
        }
        MouseEventKind::ScrollDown => Some(Message::MoveDown),
        MouseEventKind::ScrollUp => Some(Message::MoveUp),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Theme;
    use crate::data;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn create_key_event(modifiers: KeyModifiers, code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn create_mouse_event(kind: MouseEventKind, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column: 4,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn create_test_model() -> Model {
        let mut model = Model::new(data::default_model(), Theme::default()).unwrap();
        model.ui_model.viewport_height = 20;
        model
    }

    #[test]
    fn test_toggle_keys() {
        let model = create_test_model();
        for code in [KeyCode::Tab, KeyCode::Enter, KeyCode::Char(' ')] {
            let key = create_key_event(KeyModifiers::NONE, code);
            assert_eq!(handle_key(key, &model), Some(Message::ToggleSection));
        }
    }

    #[test]
    fn test_movement_keys() {
        let model = create_test_model();
        let key = create_key_event(KeyModifiers::NONE, KeyCode::Char('j'));
        assert_eq!(handle_key(key, &model), Some(Message::MoveDown));
        let key = create_key_event(KeyModifiers::NONE, KeyCode::Up);
        assert_eq!(handle_key(key, &model), Some(Message::MoveUp));
        let key = create_key_event(KeyModifiers::SHIFT, KeyCode::Char('G'));
        assert_eq!(handle_key(key, &model), Some(Message::MoveToBottom));
        let key = create_key_event(KeyModifiers::NONE, KeyCode::Char('g'));
        assert_eq!(handle_key(key, &model), Some(Message::PendingG));
    }

    #[test]
    fn test_popup_only_allows_dismiss() {
        let mut model = create_test_model();
        model.popup = Some(PopupContent::Help);

        let key = create_key_event(KeyModifiers::NONE, KeyCode::Tab);
        assert_eq!(handle_key(key, &model), None);
        let key = create_key_event(KeyModifiers::NONE, KeyCode::Esc);
        assert_eq!(handle_key(key, &model), Some(Message::DismissPopup));
    }

    #[test]
    fn test_click_maps_to_row() {
        let model = create_test_model();
        // First list line is the "Mac" header
        let click = create_mouse_event(MouseEventKind::Down(MouseButton::Left), LIST_TOP);
        assert_eq!(handle_mouse(click, &model), Some(Message::TapRow(0)));
        // MacBook spans the next two lines
        let click = create_mouse_event(MouseEventKind::Down(MouseButton::Left), LIST_TOP + 2);
        assert_eq!(handle_mouse(click, &model), Some(Message::TapRow(1)));
    }

    #[test]
    fn test_click_outside_list_is_ignored() {
        let model = create_test_model();
        let click = create_mouse_event(MouseEventKind::Down(MouseButton::Left), 0);
        assert_eq!(handle_mouse(click, &model), None);
        let click = create_mouse_event(MouseEventKind::Down(MouseButton::Left), LIST_TOP + 20);
        assert_eq!(handle_mouse(click, &model), None);
    }
}

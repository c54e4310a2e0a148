use crate::model::popup::PopupContent;

pub mod update;

#[derive(PartialEq, Eq, Debug)]
pub enum Message {
    /// Quit application
    Quit,
    /// Move one row up
    MoveUp,
    /// Move one row down
    MoveDown,
    /// Move half a page up
    HalfPageUp,
    /// Move half a page down
    HalfPageDown,
    /// Move cursor to the first row
    MoveToTop,
    /// Move cursor to the last row
    MoveToBottom,
    /// First 'g' press, waiting for second 'g' to trigger MoveToTop
    PendingG,
    /// Collapse or expand the section under the cursor
    ToggleSection,
    /// A click on the row at the given index of the row table
    TapRow(usize),

    /// Show a popup with the given content
    ShowPopup(PopupContent),
    /// Dismiss the current popup
    DismissPopup,
}

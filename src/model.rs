use crate::config::Theme;
use crate::errors::OutOfRange;

pub use row_table::{Row, RowTable};
pub use section::{Item, Section};
pub use section_list::SectionListModel;

pub mod popup;
pub mod row_table;
pub mod section;
pub mod section_list;

use popup::PopupContent;

/// The whole state of the application
#[derive(Debug)]
pub struct Model {
    /// Running state of the application
    pub running_state: RunningState,
    /// Sections, items and their collapse state
    pub sections: SectionListModel,
    /// The model passed to the view function to render the list.
    pub ui_model: UiModel,
    /// Color scheme
    pub theme: Theme,
    /// Modal popup that requires user action to dismiss
    pub popup: Option<PopupContent>,
    /// First 'g' of a "gg" sequence was pressed
    pub pending_g: bool,
}

impl Model {
    /// Creates the application model with every row of `sections` loaded
    /// into the list view.
    pub fn new(sections: SectionListModel, theme: Theme) -> Result<Self, OutOfRange> {
        let rows = RowTable::build(&sections)?;
        Ok(Self {
            running_state: RunningState::Running,
            sections,
            ui_model: UiModel {
                rows,
                ..Default::default()
            },
            theme,
            popup: None,
            pending_g: false,
        })
    }

    /// The row under the cursor, if any
    pub fn cursor_row(&self) -> Option<Row> {
        self.ui_model.rows.get(self.ui_model.cursor_position)
    }
}

#[derive(Debug, Default, Clone)]
pub struct UiModel {
    /// Rows currently loaded into the list view
    pub rows: RowTable,
    /// Index into `rows`
    pub cursor_position: usize,
    /// First row shown at the top of the viewport
    pub scroll_offset: usize,
    /// Height of the list area in terminal lines
    pub viewport_height: usize,
}

impl UiModel {
    /// Adjusts `scroll_offset` so the whole cursor row fits in the viewport.
    pub fn scroll_to_cursor(&mut self) {
        if self.cursor_position < self.scroll_offset {
            self.scroll_offset = self.cursor_position;
            return;
        }
        if self.viewport_height == 0 {
            return;
        }
        let cursor_end = self.cursor_position + 1;
        while self.scroll_offset < self.cursor_position
            && self.rows.height_between(self.scroll_offset, cursor_end) > self.viewport_height
        {
            self.scroll_offset += 1;
        }
    }

    /// Records a new viewport height and scrolls so the cursor row stays
    /// visible in it.
    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height;
        self.scroll_to_cursor();
    }

    /// Keeps cursor and scroll offset inside the row table after it shrank.
    pub fn clamp_to_rows(&mut self) {
        let max_pos = self.rows.len().saturating_sub(1);
        self.cursor_position = self.cursor_position.min(max_pos);
        self.scroll_offset = self.scroll_offset.min(max_pos);
    }

    /// Maps a line offset inside the viewport onto the row drawn there.
    pub fn row_at_line(&self, line: usize) -> Option<usize> {
        let mut top = 0;
        for index in self.scroll_offset..self.rows.len() {
            let height = self.rows.row_height(index);
            if line < top + height {
                return Some(index);
            }
            top += height;
        }
        None
    }
}

#[derive(Default, PartialEq, Eq, Debug)]
pub enum RunningState {
    #[default]
    Running,
    Done,
}

/// A leaf record shown as one row of its section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    /// Secondary text; may be empty.
    pub detail: String,
}

impl Item {
    pub fn new(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detail: detail.into(),
        }
    }
}

/// A named, ordered group of items with its own collapse state.
///
/// The item list is fixed at construction. Only [`Section::collapsed`]
/// changes, and only through
/// [`SectionListModel::toggle`](super::SectionListModel::toggle).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    items: Vec<Item>,
    collapsed: bool,
}

impl Section {
    /// Creates an expanded section.
    pub fn new(name: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            name: name.into(),
            items,
            collapsed: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn collapsed(&self) -> bool {
        self.collapsed
    }

    /// Number of rows the list view should show for this section.
    pub fn visible_rows(&self) -> usize {
        if self.collapsed { 0 } else { self.items.len() }
    }

    pub(super) fn toggle(&mut self) -> bool {
        self.collapsed = !self.collapsed;
        self.collapsed
    }
}

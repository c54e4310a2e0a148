use tracing::debug;

use crate::errors::OutOfRange;

use super::section::{Item, Section};

/// Source of truth for section/row counts and collapse state.
///
/// A collapsed section reports zero rows instead of rows with zero height,
/// so the list view never builds or measures rows it would not show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionListModel {
    sections: Vec<Section>,
}

impl SectionListModel {
    /// Creates a model over `sections`. Their order is the display order.
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Returns 0 for a collapsed section, otherwise its item count.
    pub fn row_count(&self, section: usize) -> Result<usize, OutOfRange> {
        Ok(self.section(section)?.visible_rows())
    }

    /// Returns the item at `row`. Rows at or beyond [`Self::row_count`] are
    /// out of range, which includes every row of a collapsed section.
    pub fn item(&self, section: usize, row: usize) -> Result<&Item, OutOfRange> {
        let s = self.section(section)?;
        let rows = s.visible_rows();
        if row >= rows {
            return Err(OutOfRange::row(row, rows));
        }
        Ok(&s.items()[row])
    }

    pub fn section_name(&self, section: usize) -> Result<&str, OutOfRange> {
        Ok(self.section(section)?.name())
    }

    pub fn is_collapsed(&self, section: usize) -> Result<bool, OutOfRange> {
        Ok(self.section(section)?.collapsed())
    }

    /// Number of items in the section, whether or not it is collapsed.
    pub fn item_count(&self, section: usize) -> Result<usize, OutOfRange> {
        Ok(self.section(section)?.items().len())
    }

    /// Flips the collapsed flag of one section and returns the new value.
    ///
    /// Callers must reload the section in the list view afterwards, before
    /// the next redraw.
    pub fn toggle(&mut self, section: usize) -> Result<bool, OutOfRange> {
        let len = self.sections.len();
        let s = self
            .sections
            .get_mut(section)
            .ok_or(OutOfRange::section(section, len))?;
        let collapsed = s.toggle();
        debug!(section, name = s.name(), collapsed, "toggled section");
        Ok(collapsed)
    }

    fn section(&self, section: usize) -> Result<&Section, OutOfRange> {
        self.sections
            .get(section)
            .ok_or(OutOfRange::section(section, self.sections.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::IndexKind;

    fn create_model() -> SectionListModel {
        SectionListModel::new(vec![
            Section::new("A", vec![Item::new("a0", "first"), Item::new("a1", "")]),
            Section::new("B", vec![Item::new("b0", "")]),
            Section::new("Empty", vec![]),
        ])
    }

    #[test]
    fn test_row_count_defaults_to_item_count() {
        let model = create_model();
        assert_eq!(model.section_count(), 3);
        assert_eq!(model.row_count(0), Ok(2));
        assert_eq!(model.row_count(1), Ok(1));
        assert_eq!(model.row_count(2), Ok(0));
    }

    #[test]
    fn test_row_count_out_of_range() {
        let model = create_model();
        assert_eq!(model.row_count(3), Err(OutOfRange::section(3, 3)));
    }

    #[test]
    fn test_toggle_is_an_involution() {
        let mut model = create_model();
        for section in 0..model.section_count() {
            let before = model.is_collapsed(section).unwrap();
            model.toggle(section).unwrap();
            model.toggle(section).unwrap();
            assert_eq!(model.is_collapsed(section).unwrap(), before);
        }
    }

    #[test]
    fn test_toggle_only_touches_one_section() {
        let mut model = create_model();
        assert_eq!(model.toggle(0), Ok(true));
        assert_eq!(model.row_count(0), Ok(0));
        assert_eq!(model.row_count(1), Ok(1));
        assert_eq!(model.is_collapsed(1), Ok(false));
        assert_eq!(model.item_count(0), Ok(2));
    }

    #[test]
    fn test_toggle_out_of_range() {
        let mut model = create_model();
        let error = model.toggle(7).unwrap_err();
        assert_eq!(error.kind, IndexKind::Section);
        assert_eq!(model, create_model());
    }

    #[test]
    fn test_item_lookup() {
        let model = create_model();
        assert_eq!(model.item(0, 1).unwrap().name, "a1");
        assert_eq!(model.item(0, 0).unwrap().detail, "first");
        assert_eq!(model.item(0, 2), Err(OutOfRange::row(2, 2)));
        assert_eq!(model.item(9, 0), Err(OutOfRange::section(9, 3)));
    }

    #[test]
    fn test_item_in_collapsed_section_is_out_of_range() {
        let mut model = create_model();
        model.toggle(0).unwrap();
        assert_eq!(model.item(0, 0), Err(OutOfRange::row(0, 0)));
        // Other sections are unaffected
        assert_eq!(model.item(1, 0).unwrap().name, "b0");
    }

    #[test]
    fn test_section_name() {
        let model = create_model();
        assert_eq!(model.section_name(1), Ok("B"));
        assert!(model.section_name(3).is_err());
    }
}

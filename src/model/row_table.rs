use tracing::debug;

use crate::errors::{OutOfRange, SectionedError, SectionedResult};

use super::section_list::SectionListModel;

/// A single renderable row of the list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    /// The tappable header of a section
    Header { section: usize },
    /// One item of an expanded section
    Item { section: usize, row: usize },
}

impl Row {
    pub fn section(&self) -> usize {
        match self {
            Row::Header { section } | Row::Item { section, .. } => *section,
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, Row::Header { .. })
    }
}

/// The list view's flattened rows: each section header followed by the
/// rows the model reported for that section when it was last (re)loaded.
///
/// The table is filled only through the model's query API. After a
/// section changes it has to be told with [`RowTable::reload_section`];
/// until then it keeps showing the stale rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowTable {
    rows: Vec<Row>,
    /// Row count per section as of the last load
    counts: Vec<usize>,
    /// Whether each item row's detail label is empty, by row index
    detail_empty: Vec<bool>,
}

impl RowTable {
    pub fn build(model: &SectionListModel) -> Result<Self, OutOfRange> {
        let mut table = Self::default();
        for section in 0..model.section_count() {
            table.rows.push(Row::Header { section });
            table.detail_empty.push(false);
            let count = model.row_count(section)?;
            for row in 0..count {
                table.rows.push(Row::Item { section, row });
                table.detail_empty.push(model.item(section, row)?.detail.is_empty());
            }
            table.counts.push(count);
        }
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn get(&self, index: usize) -> Option<Row> {
        self.rows.get(index).copied()
    }

    /// Index of the header row of `section`.
    pub fn header_row(&self, section: usize) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| *row == Row::Header { section })
    }

    /// Height of a row in terminal lines. Item rows stack name and detail;
    /// the detail label takes no space when it is empty.
    pub fn row_height(&self, index: usize) -> usize {
        match self.rows.get(index) {
            Some(Row::Header { .. }) => 1,
            Some(Row::Item { .. }) if self.detail_empty[index] => 1,
            Some(Row::Item { .. }) => 2,
            None => 0,
        }
    }

    /// Total height in lines of rows `start..end`.
    pub fn height_between(&self, start: usize, end: usize) -> usize {
        (start..end.min(self.rows.len()))
            .map(|i| self.row_height(i))
            .sum()
    }

    /// Re-measures one section: its cached rows are replaced with the rows
    /// the model reports now. Other sections are left untouched.
    pub fn reload_section(
        &mut self,
        model: &SectionListModel,
        section: usize,
    ) -> Result<(), OutOfRange> {
        let header = self
            .header_row(section)
            .ok_or(OutOfRange::section(section, self.counts.len()))?;
        let start = header + 1;
        let end = start + self.counts[section];
        let count = model.row_count(section)?;

        let mut rows = Vec::with_capacity(count);
        let mut detail_empty = Vec::with_capacity(count);
        for row in 0..count {
            rows.push(Row::Item { section, row });
            detail_empty.push(model.item(section, row)?.detail.is_empty());
        }
        self.rows.splice(start..end, rows);
        self.detail_empty.splice(start..end, detail_empty);

        debug!(
            section,
            old_rows = self.counts[section],
            new_rows = count,
            "reloaded section"
        );
        self.counts[section] = count;
        Ok(())
    }

    /// Verifies that every section shows as many rows as the model
    /// reports. A mismatch means the model was changed without reloading.
    pub fn check_consistency(&self, model: &SectionListModel) -> SectionedResult<()> {
        if self.counts.len() != model.section_count() {
            return Err(OutOfRange::section(self.counts.len(), model.section_count()).into());
        }
        for (section, &cached) in self.counts.iter().enumerate() {
            let actual = model.row_count(section)?;
            if cached != actual {
                return Err(SectionedError::InconsistentRowCount {
                    section,
                    cached,
                    actual,
                });
            }
        }
        Ok(())
    }
}

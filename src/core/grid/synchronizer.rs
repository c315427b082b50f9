//! Grid state and synchronization with pasted data

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::cell::{Cell, CellPosition};
use super::options::GridOptions;
use crate::core::clipboard::{parse_clipboard, ParsedRow, PastePayload};
use crate::utils::diagnostics::{Diagnostic, DroppedValue, PasteReport};
use crate::utils::error::PasteGridResult;

/// Lifecycle of the replacement column
///
/// `Absent -> Present` happens at most once per reset cycle, either through
/// bounded growth during a paste or through an explicit add. Only
/// [`Grid::reset`] goes back to `Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplacementColumn {
    #[default]
    Absent,
    Present,
}

/// Editable grid of string cells
///
/// Every row always holds exactly [`Grid::column_count`] cells, and every
/// cell's stamped column index matches its position. While the replacement
/// column is present it is the last cell of every row.
#[derive(Debug, Clone)]
pub struct Grid {
    options: GridOptions,
    rows: Vec<Vec<Cell>>,
    replacement: ReplacementColumn,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(GridOptions::default())
    }
}

impl Grid {
    /// Create a grid with `options.initial_rows` empty rows
    pub fn new(options: GridOptions) -> Self {
        let mut grid = Grid {
            options,
            rows: Vec::new(),
            replacement: ReplacementColumn::Absent,
        };
        grid.populate();
        grid
    }

    /// Like [`Grid::new`], rejecting options that fail
    /// [`GridOptions::validate`]
    pub fn try_new(options: GridOptions) -> PasteGridResult<Self> {
        options.validate()?;
        Ok(Grid::new(options))
    }

    /// Build a grid holding a saved table of values.
    ///
    /// Values are merged from `A1` with paste semantics: a table one column
    /// wider than the base columns brings the replacement column with it,
    /// anything wider is dropped.
    pub fn from_values(options: GridOptions, values: &[ParsedRow]) -> Self {
        let mut grid = Grid::new(options);
        grid.merge_rows(values, CellPosition::new(0, 0));
        grid
    }

    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn base_column_count(&self) -> usize {
        self.options.base_columns
    }

    pub fn column_count(&self) -> usize {
        match self.replacement {
            ReplacementColumn::Absent => self.options.base_columns,
            ReplacementColumn::Present => self.options.base_columns + 1,
        }
    }

    pub fn replacement_column(&self) -> ReplacementColumn {
        self.replacement
    }

    pub fn has_replacement_column(&self) -> bool {
        self.replacement == ReplacementColumn::Present
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    pub fn value(&self, row: usize, col: usize) -> Option<&str> {
        self.cell(row, col).map(|c| c.value.as_str())
    }

    /// Current physical column index of a cell
    pub fn column_index_of(&self, cell: &Cell) -> usize {
        cell.col_index()
    }

    /// Column labels, replacement column included when present
    pub fn headers(&self) -> Vec<String> {
        let mut headers: Vec<String> = (0..self.options.base_columns)
            .map(|col| self.options.header(col))
            .collect();
        if self.has_replacement_column() {
            headers.push(self.options.replacement_header.clone());
        }
        headers
    }

    /// Snapshot of all values
    pub fn to_values(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|c| c.value.clone()).collect())
            .collect()
    }

    // ========================================================================
    // Structural changes
    // ========================================================================

    /// Append empty rows until row `index` exists. Returns the number of rows
    /// created; never removes rows.
    pub fn ensure_row_exists(&mut self, index: usize) -> usize {
        let mut created = 0;
        while self.rows.len() <= index {
            self.push_row();
            created += 1;
        }
        if created > 0 {
            debug!(created, rows = self.rows.len(), "grid rows added");
        }
        created
    }

    /// Add the replacement column if it is absent, the grid is narrower than
    /// `target_count` and `target_count` fits within one extra column.
    /// Returns whether the column was added.
    pub fn ensure_column_exists(&mut self, target_count: usize) -> bool {
        if self.replacement == ReplacementColumn::Absent
            && self.column_count() < target_count
            && target_count <= self.options.max_columns()
        {
            self.add_replacement_column()
        } else {
            false
        }
    }

    /// Append one empty row. Returns its index.
    pub fn add_row(&mut self) -> usize {
        self.push_row();
        self.rows.len() - 1
    }

    /// Add the replacement column to every row. No-op returning `false` when
    /// it already exists.
    pub fn add_replacement_column(&mut self) -> bool {
        if self.replacement == ReplacementColumn::Present {
            return false;
        }

        let col = self.options.base_columns;
        for row in &mut self.rows {
            row.push(Cell::replacement(col));
        }
        self.replacement = ReplacementColumn::Present;
        self.restamp_column_indices();

        debug!(column = col, "replacement column added");
        true
    }

    /// Drop every row and the replacement column, then recreate the initial
    /// empty rows
    pub fn reset(&mut self) {
        self.rows.clear();
        self.replacement = ReplacementColumn::Absent;
        self.populate();
        debug!(rows = self.rows.len(), "grid reset");
    }

    fn populate(&mut self) {
        for _ in 0..self.options.initial_rows {
            self.push_row();
        }
        self.restamp_column_indices();
    }

    fn push_row(&mut self) {
        let base = self.options.base_columns;
        let mut row: Vec<Cell> = (0..base).map(Cell::data).collect();
        if self.has_replacement_column() {
            row.push(Cell::replacement(base));
        }
        self.rows.push(row);
    }

    fn restamp_column_indices(&mut self) {
        for row in &mut self.rows {
            for (index, cell) in row.iter_mut().enumerate() {
                cell.stamp(index);
            }
        }
    }

    // ========================================================================
    // Writes
    // ========================================================================

    /// Overwrite a cell's text. No-op returning `false` if the cell does not
    /// exist.
    pub fn write_value(&mut self, row: usize, col: usize, value: impl Into<String>) -> bool {
        match self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                cell.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Direct edit of one cell
    pub fn set_value(&mut self, position: CellPosition, value: impl Into<String>) -> bool {
        self.write_value(position.row, position.col, value)
    }

    /// Parse a paste event and merge it at its anchor
    pub fn paste(&mut self, payload: &PastePayload) -> PasteReport {
        let parsed = parse_clipboard(payload);
        let mut report = self.merge_rows(&parsed.rows, payload.anchor);
        report.source = Some(parsed.source);
        report
    }

    /// Merge parsed rows into the grid, anchored at `anchor`.
    ///
    /// Rows are merged independently: each one grows the grid as needed and
    /// writes its values left to right. Values with no cell to land in (past
    /// the replacement column) are dropped one by one and listed in the
    /// report; cells outside the pasted region are left untouched.
    ///
    /// The anchor must be an existing row. Otherwise nothing is written or
    /// created and every value is reported as dropped.
    pub fn merge_rows(&mut self, rows: &[ParsedRow], anchor: CellPosition) -> PasteReport {
        let mut report = PasteReport::new(anchor);
        report.rows_parsed = rows.len();
        let max_columns = self.options.max_columns();

        if anchor.row >= self.rows.len() {
            for (offset, values) in rows.iter().enumerate() {
                for (col_offset, value) in values.iter().enumerate() {
                    report.dropped.push(DroppedValue {
                        position: anchor.offset(offset, col_offset).unwrap_or(anchor),
                        value: value.clone(),
                    });
                }
            }
            if !report.dropped.is_empty() {
                report.add(
                    Diagnostic::warning(format!(
                        "paste target {} is outside the grid ({} rows); nothing was pasted",
                        anchor,
                        self.rows.len()
                    ))
                    .with_position(anchor)
                    .with_suggestion("paste into an existing cell"),
                );
            }
            debug!(anchor = %anchor, rows = self.rows.len(), "paste target outside grid");
            return report;
        }

        for (offset, values) in rows.iter().enumerate() {
            // anchor.row < row count, so this cannot overflow
            let row = anchor.row + offset;
            report.rows_created += self.ensure_row_exists(row);

            // Wider rows still get the one extra column; their tail is dropped
            if anchor.col < max_columns {
                let target = (anchor.col + values.len()).min(max_columns);
                if self.ensure_column_exists(target) {
                    report.column_added = true;
                }
            }

            for (col_offset, value) in values.iter().enumerate() {
                let position = CellPosition::new(row, anchor.col.saturating_add(col_offset));
                if self.write_value(position.row, position.col, value.as_str()) {
                    report.values_written += 1;
                } else {
                    trace!(cell = %position, "pasted value dropped");
                    report.dropped.push(DroppedValue {
                        position,
                        value: value.clone(),
                    });
                }
            }
        }

        if report.column_added {
            report.add(Diagnostic::info(format!(
                "column {} '{}' added to hold the extra pasted column",
                CellPosition::col_to_letter(self.options.base_columns),
                self.options.replacement_header
            )));
        }
        if let Some(first) = report.dropped.first() {
            report.add(
                Diagnostic::warning(format!(
                    "{} pasted value{} beyond column {} could not be placed",
                    report.dropped.len(),
                    if report.dropped.len() == 1 { "" } else { "s" },
                    CellPosition::col_to_letter(self.column_count().saturating_sub(1))
                ))
                .with_position(first.position)
                .with_suggestion(format!(
                    "the grid holds at most {} columns; paste narrower data or start further left",
                    max_columns
                )),
            );
        }

        debug!(
            anchor = %anchor,
            rows = report.rows_parsed,
            written = report.values_written,
            dropped = report.dropped.len(),
            "paste merged"
        );
        report
    }
}

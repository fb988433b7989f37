//! Tradespace table state: paging, sorting, filtering and the current page.
//!
//! DESIGN
//! ======
//! The query is plain data. Every user action goes through a method that
//! edits it and bumps the draw counter, and the table component refetches
//! whenever the counter changes. A response is applied only if it answers
//! the latest draw, so a slow earlier page can never overwrite a newer one.

#[cfg(test)]
#[path = "tradespace_test.rs"]
mod tradespace_test;

use crate::net::types::{DesignPage, TradespaceRow};
use crate::util::format;

/// Page sizes offered by the length selector.
pub const PAGE_LENGTHS: [u32; 4] = [10, 25, 50, 100];

/// Table columns in server index order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableColumn {
    Results,
    Timestamp,
    Designer,
    Model,
    Valid,
    Cost,
    Value,
    Profit,
    Roi,
}

impl TableColumn {
    pub const ALL: [TableColumn; 9] = [
        TableColumn::Results,
        TableColumn::Timestamp,
        TableColumn::Designer,
        TableColumn::Model,
        TableColumn::Valid,
        TableColumn::Cost,
        TableColumn::Value,
        TableColumn::Profit,
        TableColumn::Roi,
    ];

    pub fn index(self) -> usize {
        match self {
            TableColumn::Results => 0,
            TableColumn::Timestamp => 1,
            TableColumn::Designer => 2,
            TableColumn::Model => 3,
            TableColumn::Valid => 4,
            TableColumn::Cost => 5,
            TableColumn::Value => 6,
            TableColumn::Profit => 7,
            TableColumn::Roi => 8,
        }
    }

    /// Column name sent to the server.
    pub fn name(self) -> &'static str {
        match self {
            TableColumn::Results => "id",
            TableColumn::Timestamp => "timestamp",
            TableColumn::Designer => "designer",
            TableColumn::Model => "model",
            TableColumn::Valid => "valid",
            TableColumn::Cost => "cost",
            TableColumn::Value => "value",
            TableColumn::Profit => "profit",
            TableColumn::Roi => "roi",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            TableColumn::Results => "Results",
            TableColumn::Timestamp => "Timestamp",
            TableColumn::Designer => "Designer",
            TableColumn::Model => "Model",
            TableColumn::Valid => "Valid",
            TableColumn::Cost => "Cost",
            TableColumn::Value => "Value",
            TableColumn::Profit => "Profit",
            TableColumn::Roi => "ROI",
        }
    }

    pub fn orderable(self) -> bool {
        !matches!(self, TableColumn::Results)
    }

    pub fn searchable(self) -> bool {
        matches!(self, TableColumn::Results | TableColumn::Designer | TableColumn::Model)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }
}

/// Everything the listing endpoint needs to produce one page.
#[derive(Clone, Debug, PartialEq)]
pub struct TableQuery {
    pub draw: u64,
    pub start: u32,
    pub length: u32,
    pub sort_column: TableColumn,
    pub sort_dir: SortDir,
    pub search: String,
    /// Search value on the validity column; `None` until the box is touched.
    pub valid_only: Option<bool>,
}

impl Default for TableQuery {
    fn default() -> Self {
        Self {
            draw: 0,
            start: 0,
            length: PAGE_LENGTHS[0],
            sort_column: TableColumn::Timestamp,
            sort_dir: SortDir::Desc,
            search: String::new(),
            valid_only: None,
        }
    }
}

impl TableQuery {
    /// Query parameters in the paged-list convention the server reads.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("draw".to_owned(), self.draw.to_string()),
            ("start".to_owned(), self.start.to_string()),
            ("length".to_owned(), self.length.to_string()),
            ("search[value]".to_owned(), self.search.clone()),
            ("search[regex]".to_owned(), "false".to_owned()),
            ("order[0][column]".to_owned(), self.sort_column.index().to_string()),
            ("order[0][dir]".to_owned(), self.sort_dir.as_str().to_owned()),
        ];
        for column in TableColumn::ALL {
            let i = column.index();
            let search = match (column, self.valid_only) {
                (TableColumn::Valid, Some(valid)) => valid.to_string(),
                _ => String::new(),
            };
            params.push((format!("columns[{i}][name]"), column.name().to_owned()));
            params.push((format!("columns[{i}][searchable]"), column.searchable().to_string()));
            params.push((format!("columns[{i}][orderable]"), column.orderable().to_string()));
            params.push((format!("columns[{i}][search][value]"), search));
        }
        params
    }
}

/// Table contents plus the query that produced (or will produce) them.
#[derive(Clone, Debug, Default)]
pub struct TradespaceState {
    pub query: TableQuery,
    pub rows: Vec<TradespaceRow>,
    pub records_total: u64,
    pub records_filtered: u64,
    pub loading: bool,
}

impl TradespaceState {
    /// Request a fresh draw with the current parameters.
    pub fn redraw(&mut self) {
        self.query.draw += 1;
        self.loading = true;
    }

    /// Back to an empty table with default parameters. The draw counter
    /// still advances so responses already in flight are discarded.
    pub fn reset(&mut self) {
        let draw = self.query.draw + 1;
        *self = Self::default();
        self.query.draw = draw;
    }

    /// Sort by `column`, toggling direction if it is already the sort key.
    pub fn sort_by(&mut self, column: TableColumn) {
        if !column.orderable() {
            return;
        }
        if self.query.sort_column == column {
            self.query.sort_dir = self.query.sort_dir.flipped();
        } else {
            self.query.sort_column = column;
            self.query.sort_dir = SortDir::Asc;
        }
        self.query.start = 0;
        self.redraw();
    }

    pub fn set_valid_only(&mut self, valid_only: bool) {
        self.query.valid_only = Some(valid_only);
        self.query.start = 0;
        self.redraw();
    }

    pub fn set_search(&mut self, search: String) {
        if self.query.search == search {
            return;
        }
        self.query.search = search;
        self.query.start = 0;
        self.redraw();
    }

    pub fn set_length(&mut self, length: u32) {
        self.query.length = length.max(1);
        self.query.start = 0;
        self.redraw();
    }

    /// Zero-based index of the current page.
    pub fn page_index(&self) -> u32 {
        self.query.start / self.query.length.max(1)
    }

    pub fn page_count(&self) -> u32 {
        let length = u64::from(self.query.length.max(1));
        u32::try_from(self.records_filtered.div_ceil(length)).unwrap_or(u32::MAX)
    }

    pub fn has_previous(&self) -> bool {
        self.query.start > 0
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.query.start) + u64::from(self.query.length) < self.records_filtered
    }

    pub fn go_to_page(&mut self, page: u32) {
        let last = self.page_count().saturating_sub(1);
        self.query.start = page.min(last) * self.query.length.max(1);
        self.redraw();
    }

    pub fn previous_page(&mut self) {
        if self.has_previous() {
            self.go_to_page(self.page_index().saturating_sub(1));
        }
    }

    pub fn next_page(&mut self) {
        if self.has_next() {
            self.go_to_page(self.page_index() + 1);
        }
    }

    /// Apply a server page. Returns `false` (and changes nothing) when the
    /// page answers an older draw than the latest request.
    pub fn apply_page(&mut self, page: DesignPage) -> bool {
        if page.draw < self.query.draw {
            return false;
        }
        self.rows = page.designs;
        self.records_total = page.records_total;
        self.records_filtered = page.records_filtered;
        self.loading = false;
        true
    }

    /// Up to `span` page indices centred on the current page.
    pub fn page_window(&self, span: u32) -> Vec<u32> {
        let count = self.page_count();
        if count == 0 || span == 0 {
            return Vec::new();
        }
        let span = span.min(count);
        let first = self.page_index().saturating_sub(span / 2).min(count - span);
        (first..first + span).collect()
    }

    /// Summary line shown under the table.
    pub fn info_line(&self) -> String {
        let filtered = self.records_filtered;
        let mut line = if filtered == 0 || self.rows.is_empty() {
            format!("Showing 0 to 0 of {filtered} entries")
        } else {
            let first = u64::from(self.query.start) + 1;
            let last = u64::from(self.query.start) + self.rows.len() as u64;
            format!("Showing {first} to {last} of {filtered} entries")
        };
        if filtered != self.records_total {
            line.push_str(&format!(" (filtered from {} total entries)", self.records_total));
        }
        line
    }
}

/// Cost and Value cell text, bound to the row totals the server sorts on.
pub fn money_cells(row: &TradespaceRow) -> [String; 2] {
    [format::money(row.total_cost), format::money(row.total_revenue)]
}

/// Confirmation prompt shown before a delete.
pub fn delete_prompt(design_id: &str) -> String {
    format!("Delete design {design_id}?")
}

//! Structured table model.
//!
//! Rows are built from typed cells, never from markup strings. Text only
//! meets HTML at serialization time, where it is escaped (see
//! [`crate::dom::html`]).

/// One table cell: plain text, or a link with a display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableCell {
    Text(String),
    Link { href: String, label: String },
}

impl TableCell {
    pub fn text(value: impl Into<String>) -> Self {
        TableCell::Text(value.into())
    }

    pub fn link(href: impl Into<String>, label: impl Into<String>) -> Self {
        TableCell::Link {
            href: href.into(),
            label: label.into(),
        }
    }

    /// The cell's visible text content.
    pub fn text_content(&self) -> &str {
        match self {
            TableCell::Text(value) => value,
            TableCell::Link { label, .. } => label,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow {
    cells: Vec<TableCell>,
}

impl TableRow {
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[TableCell] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&TableCell> {
        self.cells.get(index)
    }
}

/// The mutable body of the PR table. Rows append in arrival order.
#[derive(Debug, Clone, Default)]
pub struct TableBody {
    rows: Vec<TableRow>,
}

impl TableBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_keep_append_order() {
        let mut body = TableBody::new();
        body.append_row(TableRow::new(vec![TableCell::text("first")]));
        body.append_row(TableRow::new(vec![TableCell::text("second")]));

        assert_eq!(body.len(), 2);
        assert_eq!(body.rows()[0].cell(0).unwrap().text_content(), "first");
        assert_eq!(body.rows()[1].cell(0).unwrap().text_content(), "second");
    }

    #[test]
    fn link_cell_exposes_label_as_text() {
        let cell = TableCell::link("http://x/1", "Link");
        assert_eq!(cell.text_content(), "Link");
    }
}

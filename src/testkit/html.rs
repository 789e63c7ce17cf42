//! Result table page builders.

/// One table row: a date label and a raw result cell.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    pub label: &'a str,
    pub result: &'a str,
}

impl<'a> Row<'a> {
    pub const fn new(label: &'a str, result: &'a str) -> Self {
        Self { label, result }
    }

    /// Cells with the label first and the result at `column`.
    ///
    /// Cells in between hold filler text.
    pub fn cells(&self, column: usize) -> Vec<String> {
        let mut cells = vec!["-".to_string(); column.max(1) + 1];
        cells[0] = self.label.to_string();
        cells[column.max(1)] = self.result.to_string();
        cells
    }
}

/// Page with results in column 1.
pub fn result_page(rows: &[Row<'_>]) -> String {
    result_page_at(rows, 1)
}

/// Page with results in `column` (label in column 0).
pub fn result_page_at(rows: &[Row<'_>], column: usize) -> String {
    let rows: Vec<Vec<String>> = rows.iter().map(|row| row.cells(column)).collect();
    table_page(&rows)
}

/// Page wrapping arbitrary cell rows in a `<tbody>`, with a header row
/// and surrounding markup the scanner has to skip.
pub fn table_page(rows: &[Vec<String>]) -> String {
    let mut html = String::from(
        "<html><head><title>Results</title></head><body>\n\
         <table class=\"history\">\n<thead><tr><th>Date</th><th>Result</th></tr></thead>\n<TBODY>\n",
    );
    for row in rows {
        html.push_str("  <tr>");
        for cell in row {
            html.push_str("<td>");
            html.push_str(cell);
            html.push_str("</td>");
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</TBODY>\n</table></body></html>\n");
    html
}

/// Page with no result table at all.
pub fn page_without_table() -> String {
    "<html><body><p>Maintenance</p></body></html>".to_string()
}

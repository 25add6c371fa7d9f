//! Low-level CSV handling for the PDF-extracted tables.
//!
//! The extractor writes CRLF line endings and keeps a cell's internal line
//! breaks as bare carriage returns inside quoted cells, so a record is
//! terminated by LF only and an interior CR is cell content.

/// Split a file into logical records: LF terminates a record, one trailing
/// CR per record is the CRLF artifact and is stripped, interior CRs stay.
pub fn logical_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = text
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l).to_string())
        .collect();
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

/// Split one record into cells: comma-separated, with double-quoted cells
/// that may contain commas, carriage returns, and `""` quote escapes.
pub fn split_cells(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    cell.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                cell.push(c);
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => cells.push(std::mem::take(&mut cell)),
                _ => cell.push(c),
            }
        }
    }
    cells.push(cell);
    cells
}

/// A cell-split table: one header record plus data records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Build a table from logical records; the first record is the header.
    pub fn from_lines(lines: &[String]) -> Self {
        let mut records = lines.iter().map(|l| split_cells(l));
        let header = records.next().unwrap_or_default();
        Self {
            header,
            rows: records.collect(),
        }
    }

    /// Index of the column whose header cell equals `name`.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h.trim() == name)
    }

    /// Drop every column whose cells are empty across all data rows.
    ///
    /// The PDF extractor pads pages to a common width, leaving whole
    /// columns of empty cells that would otherwise shift field lookups.
    pub fn drop_empty_columns(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let keep: Vec<bool> = (0..self.header.len())
            .map(|i| {
                self.rows
                    .iter()
                    .any(|row| row.get(i).is_some_and(|c| !c.trim().is_empty()))
            })
            .collect();
        self.header = filter_by(&keep, std::mem::take(&mut self.header));
        for row in &mut self.rows {
            *row = filter_by(&keep, std::mem::take(row));
        }
    }
}

fn filter_by(keep: &[bool], cells: Vec<String>) -> Vec<String> {
    cells
        .into_iter()
        .enumerate()
        .filter(|(i, _)| keep.get(*i).copied().unwrap_or(true))
        .map(|(_, c)| c)
        .collect()
}

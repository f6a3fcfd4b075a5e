use calamine::{open_workbook_auto_from_rs, Data, Reader};
use std::io::Cursor;

use super::types::{ParsedTable, PreviewError};

/// Reads the first sheet of an XLS/XLSX workbook.
pub fn parse_spreadsheet(data: &[u8]) -> Result<ParsedTable, PreviewError> {
    let start = std::time::Instant::now();
    let cursor = Cursor::new(data);

    let mut workbook = open_workbook_auto_from_rs(cursor)?;
    tracing::debug!("Workbook opened in {:?}", start.elapsed());

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(PreviewError::NoSheets)??;

    let rows = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();

    Ok(ParsedTable::from_rows(rows))
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        _ => cell.to_string(),
    }
}

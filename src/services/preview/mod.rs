pub mod csv;
pub mod spreadsheet;
pub mod types;

pub use types::{FileHandle, InMemoryFile, LocalFile, PreviewError, PreviewIssue, PREVIEW_ROW_LIMIT};

use crate::models::{ExtractedFileInfo, FilePreviewData, PreviewRow};
use crate::services::filename::{
    extract_filename_info,
    utils::{extension_of, is_spreadsheet_extension},
};
use types::ParsedTable;

pub const SUPPLIER_NOT_DETECTED: &str = "Could not detect supplier from filename";
pub const NO_HEADERS_FOUND: &str = "No headers found in file";
pub const NO_DATA_ROWS_FOUND: &str = "No data rows found in file";

/// Reads a dropped file and builds the import preview. Never fails: read
/// and parse problems come back in `validation_errors`.
pub async fn preview_file<F: FileHandle>(file: &F) -> FilePreviewData {
    let name = file.name();
    match file.read_bytes().await {
        Ok(data) => preview_bytes(name, &data),
        Err(e) => {
            tracing::error!("Failed to read {}: {}", name, e);
            read_failure(extract_filename_info(name), &e)
        }
    }
}

/// Parse-and-validate half of [`preview_file`] for bytes already in hand.
pub fn preview_bytes(filename: &str, data: &[u8]) -> FilePreviewData {
    let start = std::time::Instant::now();
    let extracted = extract_filename_info(filename);
    let extension = extension_of(filename);
    let is_spreadsheet = is_spreadsheet_extension(&extension);

    tracing::info!(
        "Previewing {} ({} bytes, type {:?})",
        filename,
        data.len(),
        extracted.file_type
    );

    let mut issues = Vec::new();
    if extracted.detected_supplier.is_none() {
        issues.push(PreviewIssue::Blocking(SUPPLIER_NOT_DETECTED.to_string()));
    }

    let parsed = if is_spreadsheet {
        spreadsheet::parse_spreadsheet(data).map_err(|e| {
            tracing::warn!("Excel parsing failed for {}: {}", filename, e);
            let message = format!("Excel parsing failed: {}", e);
            // Advisory once the supplier is known: the import re-parses server-side.
            if extracted.detected_supplier.is_some() {
                PreviewIssue::Advisory(message)
            } else {
                PreviewIssue::Blocking(message)
            }
        })
    } else {
        csv::parse_csv(data).map_err(|e| {
            tracing::warn!("CSV parsing failed for {}: {}", filename, e);
            PreviewIssue::Blocking(format!("CSV parsing failed: {}", e))
        })
    };

    let table = match parsed {
        Ok(table) => {
            if table.headers.is_empty() {
                issues.push(PreviewIssue::Blocking(NO_HEADERS_FOUND.to_string()));
            }
            if table.total_rows() == 0 {
                issues.push(PreviewIssue::Blocking(NO_DATA_ROWS_FOUND.to_string()));
            }
            table
        }
        Err(issue) => {
            issues.push(issue);
            ParsedTable::default()
        }
    };

    let preview = build_preview(extracted, table, issues, is_spreadsheet);
    tracing::info!(
        "Preview of {} done in {:?}: {} rows, supported={}",
        filename,
        start.elapsed(),
        preview.total_rows,
        preview.is_supported
    );
    preview
}

fn build_preview(
    extracted: ExtractedFileInfo,
    table: ParsedTable,
    issues: Vec<PreviewIssue>,
    is_spreadsheet: bool,
) -> FilePreviewData {
    let (blocking, advisory): (Vec<_>, Vec<_>) =
        issues.into_iter().partition(PreviewIssue::is_blocking);
    let validation_errors: Vec<String> = blocking.iter().map(|i| i.message().to_string()).collect();
    let advisories = advisory.iter().map(|i| i.message().to_string()).collect();

    let is_supported = extracted.detected_supplier.is_some()
        && (validation_errors.is_empty() || is_spreadsheet);

    let preview_rows = table
        .rows
        .iter()
        .take(PREVIEW_ROW_LIMIT)
        .map(|row| zip_row(&table.headers, row))
        .collect();

    FilePreviewData {
        detected_parser: extracted.detected_supplier,
        file_type: extracted.file_type,
        total_rows: table.total_rows(),
        headers: table.headers,
        preview_rows,
        is_supported,
        validation_errors,
        advisories,
        order_info: extracted.order_info,
        filename: extracted.filename,
    }
}

fn zip_row(headers: &[String], cells: &[String]) -> PreviewRow {
    headers
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            let value = cells.get(idx).cloned().unwrap_or_default();
            (header.clone(), serde_json::Value::String(value))
        })
        .collect()
}

fn read_failure(extracted: ExtractedFileInfo, err: &std::io::Error) -> FilePreviewData {
    FilePreviewData {
        detected_parser: None,
        file_type: extracted.file_type,
        headers: Vec::new(),
        preview_rows: Vec::new(),
        total_rows: 0,
        is_supported: false,
        validation_errors: vec![format!("Failed to read file: {}", err)],
        advisories: Vec::new(),
        order_info: extracted.order_info,
        filename: extracted.filename,
    }
}

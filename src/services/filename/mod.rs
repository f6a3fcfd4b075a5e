//! Infers supplier, format and order metadata from an export's filename.
//!
//! Pure string work: no I/O, and every input (including `""`) produces a
//! well-formed [`ExtractedFileInfo`].

pub mod patterns;
pub mod utils;

use crate::models::{ExtractedFileInfo, OrderInfo, Supplier};
use patterns::{
    EXTENSION_RULES, LCSC_EXPORT, ORDER_DATE_PATTERNS, ORDER_NUMBER_PATTERNS, SUPPLIER_KEYWORDS,
};
use utils::{extension_of, file_type_of, normalize_compact_date};

pub fn extract_filename_info(filename: &str) -> ExtractedFileInfo {
    let file_type = file_type_of(filename);

    if let Some(info) = extract_lcsc_export(filename, &file_type) {
        tracing::debug!(filename, order = ?info.order_info, "matched LCSC export filename");
        return info;
    }

    let detected_supplier = detect_supplier(filename);
    let order_info = extract_order_info(filename);

    tracing::debug!(
        filename,
        supplier = ?detected_supplier,
        order_number = ?order_info.order_number,
        order_date = ?order_info.order_date,
        "extracted filename info"
    );

    ExtractedFileInfo {
        detected_supplier,
        file_type,
        order_info,
        filename: filename.to_string(),
    }
}

/// Kept for older call sites. The parser hint is ignored; detection is
/// always automatic.
pub fn extract_order_info_from_filename(filename: &str, _parser_type: Option<&str>) -> OrderInfo {
    extract_filename_info(filename).order_info
}

fn extract_lcsc_export(filename: &str, file_type: &str) -> Option<ExtractedFileInfo> {
    let caps = LCSC_EXPORT.captures(filename)?;
    let order_date = caps.get(1).and_then(|m| normalize_compact_date(m.as_str()));
    let order_number = caps.get(2).map(|m| m.as_str().to_string());

    Some(ExtractedFileInfo {
        detected_supplier: Some(Supplier::Lcsc),
        file_type: file_type.to_string(),
        order_info: OrderInfo {
            order_number,
            order_date,
            notes: Some(format!("Auto-extracted from LCSC filename: {}", filename)),
        },
        filename: filename.to_string(),
    })
}

fn detect_supplier(filename: &str) -> Option<Supplier> {
    let lowered = filename.to_lowercase();

    let by_keyword = SUPPLIER_KEYWORDS.iter().find_map(|(supplier, keywords)| {
        keywords
            .iter()
            .any(|keyword| lowered.contains(keyword))
            .then_some(*supplier)
    });
    if by_keyword.is_some() {
        return by_keyword;
    }

    let extension = extension_of(filename);
    EXTENSION_RULES
        .iter()
        .find(|rule| rule.matches(&extension, &lowered))
        .map(|rule| rule.supplier)
}

fn extract_order_info(filename: &str) -> OrderInfo {
    let order_number = ORDER_NUMBER_PATTERNS
        .iter()
        .find_map(|pattern| pattern.extract(filename));

    // Runs even when a number was found, but never reuses the number's text.
    let order_date = ORDER_DATE_PATTERNS
        .iter()
        .filter_map(|pattern| pattern.candidate(filename))
        .find(|candidate| order_number.as_deref() != Some(candidate.raw))
        .map(|candidate| candidate.value);

    let notes = (order_number.is_some() || order_date.is_some())
        .then(|| format!("Auto-extracted from filename: {}", filename));

    OrderInfo {
        order_number,
        order_date,
        notes,
    }
}

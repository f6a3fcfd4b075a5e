//! Ordered rule tables for filename heuristics.
//!
//! Every table is evaluated top to bottom and the first hit wins. A filename
//! with several numeric runs resolves by table order, not by best match;
//! keep the order stable.
//!
//! Digits and letters are ASCII only: `[0-9]` rather than `\d`, and
//! case-insensitive patterns use `(?i-u)` so folding stays ASCII too.

use once_cell::sync::Lazy;
use regex::Regex;

use super::utils::{is_plausible_date, normalize_compact_date};
use crate::models::Supplier;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("filename pattern must compile")
}

/// `LCSC_Exported__20241222_232703.csv`, with the prefix optional.
pub static LCSC_EXPORT: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i-u)^(?:LCSC_Exported__)?([0-9]{8})_([0-9]{6})\.csv$"));

/// Substring hints, checked against the lowercased filename.
pub const SUPPLIER_KEYWORDS: &[(Supplier, &[&str])] = &[
    (Supplier::Lcsc, &["lcsc"]),
    (Supplier::DigiKey, &["digikey", "digi-key", "dk_", "dk_products"]),
    (Supplier::Mouser, &["mouser", "mouse", "cart", "order"]),
];

/// Last-resort guesses keyed on the extension.
pub struct ExtensionRule {
    pub extensions: &'static [&'static str],
    pub digit_run: Regex,
    pub keywords: &'static [&'static str],
    pub supplier: Supplier,
}

impl ExtensionRule {
    pub fn matches(&self, extension: &str, lowered: &str) -> bool {
        self.extensions.contains(&extension)
            && (self.digit_run.is_match(lowered)
                || self.keywords.iter().any(|keyword| lowered.contains(keyword)))
    }
}

pub static EXTENSION_RULES: Lazy<Vec<ExtensionRule>> = Lazy::new(|| {
    vec![
        // Mouser is the one that hands out Excel exports named after the order.
        ExtensionRule {
            extensions: &["xls", "xlsx"],
            digit_run: compile(r"[0-9]{6,}"),
            keywords: &[],
            supplier: Supplier::Mouser,
        },
        ExtensionRule {
            extensions: &["csv"],
            digit_run: compile(r"[0-9]{8,}"),
            keywords: &["export", "parts"],
            supplier: Supplier::DigiKey,
        },
    ]
});

pub struct OrderNumberPattern {
    pub name: &'static str,
    pub regex: Regex,
    /// Skip the capture when it reads as a `YYYYMMDD` date.
    pub rejects_dates: bool,
}

impl OrderNumberPattern {
    pub fn extract(&self, filename: &str) -> Option<String> {
        let value = self.regex.captures(filename)?.get(1)?.as_str();
        if self.rejects_dates && is_plausible_date(value) {
            return None;
        }
        Some(value.to_string())
    }
}

pub static ORDER_NUMBER_PATTERNS: Lazy<Vec<OrderNumberPattern>> = Lazy::new(|| {
    vec![
        OrderNumberPattern {
            name: "order_prefix",
            regex: compile(r"(?i-u)order[_-]([a-z0-9]+)"),
            rejects_dates: false,
        },
        OrderNumberPattern {
            name: "po_prefix",
            regex: compile(r"(?i-u)po[_-]([a-z0-9]+)"),
            rejects_dates: false,
        },
        OrderNumberPattern {
            name: "products_suffix",
            regex: compile(r"(?i-u)products[_-]?([0-9]+)"),
            rejects_dates: false,
        },
        OrderNumberPattern {
            name: "dk_products_suffix",
            regex: compile(r"(?i-u)dk[_-]products[_-]?([0-9]+)"),
            rejects_dates: false,
        },
        OrderNumberPattern {
            name: "letter_prefixed",
            regex: compile(r"([A-Z]{2,}[0-9]{4,})"),
            rejects_dates: false,
        },
        OrderNumberPattern {
            name: "long_digit_run",
            regex: compile(r"([0-9]{8,})"),
            rejects_dates: true,
        },
    ]
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateForm {
    /// Reported exactly as matched, separators included.
    Raw,
    /// `YYYYMMDD`, validated and rewritten as `YYYY-MM-DD`.
    Compact,
}

pub struct OrderDatePattern {
    pub name: &'static str,
    pub regex: Regex,
    pub form: DateForm,
}

/// A date candidate: the matched text and the value to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateCandidate<'a> {
    pub raw: &'a str,
    pub value: String,
}

impl OrderDatePattern {
    pub fn candidate<'a>(&self, filename: &'a str) -> Option<DateCandidate<'a>> {
        let raw = self.regex.captures(filename)?.get(1)?.as_str();
        let value = match self.form {
            DateForm::Raw => raw.to_string(),
            DateForm::Compact => normalize_compact_date(raw)?,
        };
        Some(DateCandidate { raw, value })
    }
}

pub static ORDER_DATE_PATTERNS: Lazy<Vec<OrderDatePattern>> = Lazy::new(|| {
    vec![
        OrderDatePattern {
            name: "iso_separated",
            regex: compile(r"([0-9]{4}[-_][0-9]{2}[-_][0-9]{2})"),
            form: DateForm::Raw,
        },
        OrderDatePattern {
            name: "us_separated",
            regex: compile(r"([0-9]{2}[-_][0-9]{2}[-_][0-9]{4})"),
            form: DateForm::Raw,
        },
        OrderDatePattern {
            name: "compact",
            regex: compile(r"([0-9]{8})"),
            form: DateForm::Compact,
        },
    ]
});

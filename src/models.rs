use serde::{Deserialize, Serialize};
use std::fmt;

/// Parts vendors whose order exports we know how to recognise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Supplier {
    DigiKey,
    Lcsc,
    Mouser,
}

impl Supplier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Supplier::DigiKey => "digikey",
            Supplier::Lcsc => "lcsc",
            Supplier::Mouser => "mouser",
        }
    }
}

impl fmt::Display for Supplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl OrderInfo {
    pub fn is_empty(&self) -> bool {
        self.order_number.is_none() && self.order_date.is_none() && self.notes.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFileInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_supplier: Option<Supplier>,
    pub file_type: String,
    pub order_info: OrderInfo,
    pub filename: String,
}

/// One sample row keyed by header, in header order.
pub type PreviewRow = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilePreviewData {
    pub detected_parser: Option<Supplier>,
    pub file_type: String,
    pub headers: Vec<String>,
    pub preview_rows: Vec<PreviewRow>,
    pub total_rows: usize,
    pub is_supported: bool,
    pub validation_errors: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub advisories: Vec<String>,
    pub order_info: OrderInfo,
    pub filename: String,
}

//! Supplier order-file intake: recognises DigiKey, LCSC and Mouser exports
//! from their filenames and previews their contents before an import.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod routes;
pub mod services;

pub use models::{ExtractedFileInfo, FilePreviewData, OrderInfo, Supplier};
pub use services::{
    extract_filename_info, extract_order_info_from_filename, preview_bytes, preview_file,
};

// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: config::Config,
}

impl AppState {
    pub fn new(config: config::Config) -> Self {
        Self { config }
    }
}

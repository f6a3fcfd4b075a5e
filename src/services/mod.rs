pub mod filename;
pub mod preview;

pub use filename::{extract_filename_info, extract_order_info_from_filename};
pub use preview::{preview_bytes, preview_file};

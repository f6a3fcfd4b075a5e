use order_intake::services::preview::{preview_file, InMemoryFile, LocalFile};
use order_intake::Supplier;
use rust_xlsxwriter::Workbook;
use std::io::Write;

fn mouser_workbook(data_rows: u32) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, header) in ["Mouser No", "Mfr. No", "Qty", "Unit Price"].iter().enumerate() {
        sheet.write_string(0, col as u16, *header).unwrap();
    }
    for i in 1..=data_rows {
        sheet.write_string(i, 0, format!("595-PART{}", i).as_str()).unwrap();
        sheet.write_string(i, 1, format!("MFR{}", i).as_str()).unwrap();
        sheet.write_number(i, 2, f64::from(i * 10)).unwrap();
        sheet.write_number(i, 3, 0.5 * f64::from(i)).unwrap();
    }
    workbook
        .add_worksheet()
        .write_string(0, 0, "not the first sheet")
        .unwrap();
    workbook.save_to_buffer().unwrap()
}

const DIGIKEY_CSV: &str = "\u{feff}Index,Quantity,Part Number,Manufacturer Part Number,Description\n\
1,10,296-1395-5-ND,LM358P,\"IC OPAMP GP 2 CIRCUIT 8DIP\"\n\
2,25,311-10.0KCRCT-ND,RC0603FR-0710KL,RES 10K OHM 1% 1/10W 0603\n\
\n\
3,5,1276-1935-1-ND,CL10B104KB8NNNC,CAP CER 0.1UF 50V X7R 0603\n";

#[tokio::test]
async fn well_formed_csv_is_supported() {
    let file = InMemoryFile::new("DK_PRODUCTS_88269818.csv", DIGIKEY_CSV);
    let preview = preview_file(&file).await;

    assert_eq!(preview.detected_parser, Some(Supplier::DigiKey));
    assert_eq!(preview.file_type, "CSV");
    assert_eq!(
        preview.headers,
        vec!["Index", "Quantity", "Part Number", "Manufacturer Part Number", "Description"]
    );
    assert_eq!(preview.total_rows, 3);
    assert_eq!(preview.preview_rows.len(), 3);
    assert_eq!(preview.preview_rows[0]["Description"], "IC OPAMP GP 2 CIRCUIT 8DIP");
    assert_eq!(preview.preview_rows[2]["Manufacturer Part Number"], "CL10B104KB8NNNC");
    assert!(preview.validation_errors.is_empty());
    assert!(preview.is_supported);
    assert_eq!(preview.order_info.order_number.as_deref(), Some("88269818"));
}

#[tokio::test]
async fn undetected_supplier_is_listed_first() {
    let file = InMemoryFile::new("random_file.csv", DIGIKEY_CSV);
    let preview = preview_file(&file).await;

    assert_eq!(preview.detected_parser, None);
    assert_eq!(
        preview.validation_errors.first().map(String::as_str),
        Some("Could not detect supplier from filename")
    );
    assert_eq!(preview.validation_errors.len(), 1);
    assert!(!preview.is_supported);
    // content is still previewed
    assert_eq!(preview.total_rows, 3);
}

#[tokio::test]
async fn corrupt_blob_named_csv_still_resolves() {
    let blob: Vec<u8> = (0..4096u32).map(|i| (i * 131 % 251) as u8).collect();
    let file = InMemoryFile::new("mouser_cart.csv", blob);
    let preview = preview_file(&file).await;

    assert_eq!(preview.detected_parser, Some(Supplier::Mouser));
    assert_eq!(preview.file_type, "CSV");
    assert!(preview.preview_rows.len() <= 5);
}

#[tokio::test]
async fn unbalanced_quote_does_not_swallow_following_lines() {
    let file = InMemoryFile::new("mouser_cart.csv", "Part,Desc\nR1,\"10k 1/4W\nR2,22k\nR3,33k\n");
    let preview = preview_file(&file).await;

    assert_eq!(preview.total_rows, 3);
    assert_eq!(preview.preview_rows[0]["Desc"], "10k 1/4W");
    assert_eq!(preview.preview_rows[2]["Part"], "R3");
    assert!(preview.is_supported);
}

#[tokio::test]
async fn xlsx_workbook_is_previewed() {
    let file = InMemoryFile::new("271360826.xlsx", mouser_workbook(8));
    let preview = preview_file(&file).await;

    assert_eq!(preview.detected_parser, Some(Supplier::Mouser));
    assert_eq!(preview.file_type, "XLSX");
    assert_eq!(preview.headers, vec!["Mouser No", "Mfr. No", "Qty", "Unit Price"]);
    assert_eq!(preview.total_rows, 8);
    assert_eq!(preview.preview_rows.len(), 5);
    assert_eq!(preview.preview_rows[0]["Mouser No"], "595-PART1");
    assert_eq!(preview.preview_rows[0]["Qty"], "10");
    assert_eq!(preview.preview_rows[0]["Unit Price"], "0.5");
    assert_eq!(preview.preview_rows[4]["Qty"], "50");
    assert_eq!(preview.preview_rows[4]["Unit Price"], "2.5");
    assert!(preview.validation_errors.is_empty());
    assert!(preview.advisories.is_empty());
    assert!(preview.is_supported);
}

#[tokio::test]
async fn xlsx_with_only_headers_is_still_supported_for_known_supplier() {
    let file = InMemoryFile::new("mouser_order.xlsx", mouser_workbook(0));
    let preview = preview_file(&file).await;

    assert_eq!(preview.total_rows, 0);
    assert_eq!(preview.validation_errors, vec!["No data rows found in file"]);
    assert!(preview.is_supported);
}

#[tokio::test]
async fn corrupt_spreadsheet_with_supplier_is_tolerated() {
    let file = InMemoryFile::new("271360826.xlsx", &b"PK\x03\x04 truncated"[..]);
    let preview = preview_file(&file).await;

    assert_eq!(preview.detected_parser, Some(Supplier::Mouser));
    assert_eq!(preview.file_type, "XLSX");
    assert!(preview.is_supported);
    assert!(preview.validation_errors.is_empty());
    assert!(preview.headers.is_empty());
    assert_eq!(preview.total_rows, 0);
    assert_eq!(preview.advisories.len(), 1);
}

#[tokio::test]
async fn corrupt_spreadsheet_without_supplier_is_reported() {
    let file = InMemoryFile::new("book.xlsx", &b"garbage"[..]);
    let preview = preview_file(&file).await;

    assert!(!preview.is_supported);
    assert_eq!(preview.validation_errors[0], "Could not detect supplier from filename");
    assert!(preview.validation_errors[1].starts_with("Excel parsing failed"));
}

#[tokio::test]
async fn missing_local_file_resolves_with_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let file = LocalFile::new(dir.path().join("DK_PRODUCTS_1.csv"));
    let preview = preview_file(&file).await;

    assert!(!preview.is_supported);
    assert_eq!(preview.detected_parser, None);
    assert!(preview.headers.is_empty());
    assert!(preview.preview_rows.is_empty());
    assert_eq!(preview.total_rows, 0);
    assert_eq!(preview.validation_errors.len(), 1);
    assert!(preview.validation_errors[0].starts_with("Failed to read file"));
}

#[tokio::test]
async fn local_file_is_read_and_named_after_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("LCSC_Exported__20241222_232703.csv");
    let mut handle = std::fs::File::create(&path).unwrap();
    handle
        .write_all(b"LCSC Part Number,Quantity\nC25804,100\nC1525,50\n")
        .unwrap();
    drop(handle);

    let preview = preview_file(&LocalFile::new(&path)).await;

    assert_eq!(preview.filename, "LCSC_Exported__20241222_232703.csv");
    assert_eq!(preview.detected_parser, Some(Supplier::Lcsc));
    assert_eq!(preview.total_rows, 2);
    assert!(preview.is_supported);
    assert_eq!(preview.order_info.order_date.as_deref(), Some("2024-12-22"));
}

#[test]
fn preview_can_be_driven_without_a_runtime_macro() {
    let file = InMemoryFile::new("digikey_export.csv", "A,B\n1,2\n");
    let preview = tokio_test::block_on(preview_file(&file));
    assert_eq!(preview.total_rows, 1);
    assert!(preview.is_supported);
}

/// Uppercased text after the last `.`, or empty when there is none.
pub fn file_type_of(filename: &str) -> String {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_uppercase())
        .unwrap_or_default()
}

pub fn extension_of(filename: &str) -> String {
    file_type_of(filename).to_lowercase()
}

pub fn is_spreadsheet_extension(ext: &str) -> bool {
    matches!(ext, "xls" | "xlsx")
}

/// Reads an eight digit `YYYYMMDD` run as a plausible calendar date:
/// year 1900-2100, month 1-12, day 1-31. Days are not checked per month.
pub fn parse_compact_date(digits: &str) -> Option<(u32, u32, u32)> {
    if digits.len() != 8 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let year: u32 = digits[0..4].parse().ok()?;
    let month: u32 = digits[4..6].parse().ok()?;
    let day: u32 = digits[6..8].parse().ok()?;

    if !(1900..=2100).contains(&year) || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }

    Some((year, month, day))
}

pub fn is_plausible_date(digits: &str) -> bool {
    parse_compact_date(digits).is_some()
}

/// `YYYYMMDD` -> `YYYY-MM-DD`, only for plausible dates.
pub fn normalize_compact_date(digits: &str) -> Option<String> {
    parse_compact_date(digits)
        .map(|(year, month, day)| format!("{:04}-{:02}-{:02}", year, month, day))
}

use csv::ReaderBuilder;

use super::types::{ParsedTable, PreviewError};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// One physical line is one row: quotes never join lines, so the row count
/// always matches the file's non-blank line count.
pub fn parse_csv(data: &[u8]) -> Result<ParsedTable, PreviewError> {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    // Same decoding a browser text() read would apply.
    let text = String::from_utf8_lossy(data);

    let rows = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_line)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ParsedTable::from_rows(rows))
}

fn parse_line(line: &str) -> Result<Vec<String>, PreviewError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());

    match reader.records().next() {
        Some(record) => Ok(record?.iter().map(|cell| cell.to_string()).collect()),
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_bom_and_quotes() {
        let table = parse_csv(b"\xEF\xBB\xBF\"Part\",\"Qty\"\n\"R1\",10\n").unwrap();
        assert_eq!(table.headers, vec!["Part", "Qty"]);
        assert_eq!(table.rows, vec![vec!["R1".to_string(), "10".to_string()]]);
    }

    #[test]
    fn skips_blank_lines_anywhere() {
        let table = parse_csv(b"\n\nA,B\n\n1,2\n   \r\n3,4\n\n").unwrap();
        assert_eq!(table.headers, vec!["A", "B"]);
        assert_eq!(table.total_rows(), 2);
    }

    #[test]
    fn crlf_and_ragged_rows() {
        let table = parse_csv(b"A,B,C\r\n1\r\n1,2,3,4\r\n").unwrap();
        assert_eq!(table.rows[0], vec!["1"]);
        assert_eq!(table.rows[1].len(), 4);
    }

    #[test]
    fn unbalanced_quote_stays_on_its_line() {
        let table = parse_csv(b"Part,Desc\nR1,\"10k 1/4W\nR2,22k\nR3,33k\n").unwrap();
        assert_eq!(table.total_rows(), 3);
        assert_eq!(table.rows[0], vec!["R1", "10k 1/4W"]);
        assert_eq!(table.rows[1], vec!["R2", "22k"]);
        assert_eq!(table.rows[2], vec!["R3", "33k"]);
    }

    #[test]
    fn quoted_newline_does_not_merge_lines() {
        let table = parse_csv(b"Part,Desc\nR1,\"a\nb\"\nR2,x\n").unwrap();
        assert_eq!(table.total_rows(), 3);
        assert_eq!(table.rows[2], vec!["R2", "x"]);
    }

    #[test]
    fn quoted_commas_inside_a_line() {
        let table = parse_csv(b"Part,Desc\nC1,\"CAP, 100nF\"\n").unwrap();
        assert_eq!(table.rows[0], vec!["C1", "CAP, 100nF"]);
    }

    #[test]
    fn empty_input_has_no_headers() {
        let table = parse_csv(b"").unwrap();
        assert!(table.headers.is_empty());
        assert_eq!(table.total_rows(), 0);
    }

    #[test]
    fn binary_noise_does_not_fail() {
        let noise: Vec<u8> = (0u8..=255).cycle().take(2048).collect();
        assert!(parse_csv(&noise).is_ok());
    }
}

//! CSV parsing with encoding detection.
//!
//! Turns the raw bytes of a source file into typed [`InputRow`]s keyed by
//! header name. The transform only reads two columns; everything else in the
//! source file is ignored and column order does not matter.

use crate::error::{CsvError, CsvResult};

/// Header of the column holding the composite definition string.
pub const DEFINITION_COLUMN: &str = "Definition Name";

/// Header of the column copied verbatim into the output.
pub const QUANTITY_COLUMN: &str = "Quantity";

/// One data line of a source file, reduced to the columns the transform
/// reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRow {
    /// Value of the `Definition Name` column
    pub definition_name: String,
    /// Value of the `Quantity` column
    pub quantity: String,
}

impl InputRow {
    pub fn new(definition_name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            definition_name: definition_name.into(),
            quantity: quantity.into(),
        }
    }
}

/// Result of parsing with metadata
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed data rows, in file order
    pub rows: Vec<InputRow>,
    /// Encoding the bytes were decoded with
    pub encoding: String,
    /// Column headers as found in the file
    pub headers: Vec<String>,
}

/// Detect the encoding of raw bytes.
///
/// Valid UTF-8 is always reported as `utf-8`; only other inputs go through
/// chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    if std::str::from_utf8(bytes).is_ok() {
        return "utf-8".to_string();
    }

    let charset = chardet::detect(bytes).0;
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        "" => "utf-8".to_string(),
        other => other.to_string(),
    }
}

/// Decode bytes to a string using the given encoding label.
///
/// Unknown labels fall back to lossy UTF-8. A leading byte-order mark is
/// dropped.
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    let decoded = match encoding_rs::Encoding::for_label(encoding.as_bytes()) {
        Some(enc) => enc.decode(bytes).0.into_owned(),
        None => String::from_utf8_lossy(bytes).into_owned(),
    };

    match decoded.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => decoded,
    }
}

/// Parse comma-delimited text into typed rows.
///
/// The first line is the header. Empty content yields no rows. A header
/// without the definition or quantity column is an error, as is any
/// malformed record.
///
/// # Example
/// ```
/// use csv_extend::parse_csv;
///
/// let csv = "Definition Name,Quantity\nWidget 10x20 1010,5";
/// let rows = parse_csv(csv).unwrap();
///
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].quantity, "5");
/// ```
pub fn parse_csv(content: &str) -> CsvResult<Vec<InputRow>> {
    parse_with_headers(content).map(|(_, rows)| rows)
}

/// Parse raw bytes: detect encoding, decode, then parse.
pub fn parse_bytes(bytes: &[u8]) -> CsvResult<ParseResult> {
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding);
    let (headers, rows) = parse_with_headers(&content)?;

    Ok(ParseResult {
        rows,
        encoding,
        headers,
    })
}

fn parse_with_headers(content: &str) -> CsvResult<(Vec<String>, Vec<InputRow>)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.is_empty() {
        return Ok((headers, Vec::new()));
    }

    let definition_idx = column_index(&headers, DEFINITION_COLUMN)?;
    let quantity_idx = column_index(&headers, QUANTITY_COLUMN)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let cell = |idx: usize| record.get(idx).unwrap_or_default();
        rows.push(InputRow::new(cell(definition_idx), cell(quantity_idx)));
    }

    Ok((headers, rows))
}

/// Position of `name` in the header. A repeated header resolves to its
/// last occurrence.
fn column_index(headers: &[String], name: &str) -> CsvResult<usize> {
    headers
        .iter()
        .rposition(|h| h == name)
        .ok_or_else(|| CsvError::MissingColumn(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_csv() {
        let csv = "Definition Name,Quantity\nWidget 10x20 1010,5\nShelf 300x40 0000,2";
        let rows = parse_csv(csv).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], InputRow::new("Widget 10x20 1010", "5"));
        assert_eq!(rows[1], InputRow::new("Shelf 300x40 0000", "2"));
    }

    #[test]
    fn test_column_order_and_extra_columns() {
        let csv = "Id,Quantity,Material,Definition Name\n7,3,Oak,Door 600x1800 1100";
        let rows = parse_csv(csv).unwrap();

        assert_eq!(rows, vec![InputRow::new("Door 600x1800 1100", "3")]);
    }

    #[test]
    fn test_quoted_values() {
        let csv = "Definition Name,Quantity\n\"Top, left 10x20 1010\",\"4\"";
        let rows = parse_csv(csv).unwrap();

        assert_eq!(rows[0].definition_name, "Top, left 10x20 1010");
        assert_eq!(rows[0].quantity, "4");
    }

    #[test]
    fn test_empty_content_has_no_rows() {
        assert!(parse_csv("").unwrap().is_empty());
    }

    #[test]
    fn test_header_only() {
        assert!(parse_csv("Definition Name,Quantity\n").unwrap().is_empty());
    }

    #[test]
    fn test_missing_column_error() {
        let result = parse_csv("Definition Name,Count\nWidget 10x20 1010,5");
        match result {
            Err(CsvError::MissingColumn(col)) => assert_eq!(col, "Quantity"),
            other => panic!("expected missing column, got {:?}", other),
        }
    }

    #[test]
    fn test_repeated_column_uses_last_occurrence() {
        let csv = "Definition Name,Quantity,Quantity\nWidget 10x20 1010,1,7";
        let rows = parse_csv(csv).unwrap();

        assert_eq!(rows, vec![InputRow::new("Widget 10x20 1010", "7")]);

        let csv = "Definition Name,Quantity,Definition Name\nOld 1x1 0000,2,Shelf 300x40 0000";
        let rows = parse_csv(csv).unwrap();

        assert_eq!(rows, vec![InputRow::new("Shelf 300x40 0000", "2")]);
    }

    #[test]
    fn test_unequal_record_length_error() {
        let result = parse_csv("Definition Name,Quantity\nWidget 10x20 1010,5,extra");
        assert!(matches!(result, Err(CsvError::Csv(_))));
    }

    #[test]
    fn test_bom_is_stripped() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"Definition Name,Quantity\nWidget 10x20 1010,5");

        let result = parse_bytes(&bytes).unwrap();
        assert_eq!(result.encoding, "utf-8");
        assert_eq!(result.headers, vec!["Definition Name", "Quantity"]);
        assert_eq!(result.rows.len(), 1);
    }

    #[test]
    fn test_utf8_detected_directly() {
        assert_eq!(detect_encoding("Étagère 10x20 1010".as_bytes()), "utf-8");
    }

    #[test]
    fn test_latin1_decoding() {
        // "Société" in ISO-8859-1
        let bytes: &[u8] = &[0x53, 0x6F, 0x63, 0x69, 0xE9, 0x74, 0xE9];
        let decoded = decode_content(bytes, "iso-8859-1");
        assert_eq!(decoded, "Société");
    }

    #[test]
    fn test_unknown_label_falls_back_to_utf8() {
        assert_eq!(decode_content(b"plain", "no-such-charset"), "plain");
    }
}

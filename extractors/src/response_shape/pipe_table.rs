use shared_types::Record;

/// Normalize a header cell into a record key: lowercased, edges trimmed,
/// each run of internal whitespace collapsed to a single underscore.
///
/// `"Altitude M"`, `"altitude_m"` and `" ALTITUDE   M "` all normalize to
/// `"altitude_m"`, and normalizing twice is a no-op.
pub fn normalize_column_name(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

fn split_cells(line: &str) -> Vec<&str> {
    line.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .collect()
}

/// Parse a pipe-delimited grid into ordered records.
///
/// The first non-empty line is the header; every later non-empty line whose
/// non-empty cell count equals the header's becomes one record, in source
/// order. Anything else (too few lines, no usable header, arity-mismatched
/// rows) is dropped silently. The input is free text from a generative
/// model, so this never errors.
pub fn extract_records(text: &str) -> Vec<Record> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    // A table needs a header line and at least one body line.
    if lines.len() < 2 {
        return Vec::new();
    }

    let headers: Vec<String> = split_cells(lines[0])
        .into_iter()
        .map(normalize_column_name)
        .collect();

    if headers.is_empty() {
        return Vec::new();
    }

    let mut records = Vec::new();

    for line in &lines[1..] {
        let values = split_cells(line);

        // Arity mismatch: malformed or ornamental row, skipped.
        if values.len() != headers.len() {
            continue;
        }

        let mut record = Record::new();
        for (header, value) in headers.iter().zip(values) {
            record.insert(header.clone(), Some(value.to_string()));
        }
        records.push(record);
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_TABLE: &str = "Image ID | Latitude | Longitude\n\
        img001 | 12.5 | 45.2\n\
        img002 | 13.1 | 46.0";

    #[test]
    fn test_normalize_column_name() {
        assert_eq!(normalize_column_name("Altitude M"), "altitude_m");
        assert_eq!(normalize_column_name("altitude_m"), "altitude_m");
        assert_eq!(normalize_column_name(" ALTITUDE   M "), "altitude_m");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_column_name("Image  ID");
        assert_eq!(normalize_column_name(&once), once);
    }

    #[test]
    fn test_well_formed_table() {
        let records = extract_records(SAMPLE_TABLE);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["image_id"], Some("img001".to_string()));
        assert_eq!(records[0]["latitude"], Some("12.5".to_string()));
        assert_eq!(records[0]["longitude"], Some("45.2".to_string()));
        assert_eq!(records[1]["image_id"], Some("img002".to_string()));
    }

    #[test]
    fn test_records_preserve_row_and_key_order() {
        let records = extract_records(SAMPLE_TABLE);

        let keys: Vec<&String> = records[0].keys().collect();
        assert_eq!(keys, ["image_id", "latitude", "longitude"]);
        assert_eq!(records[1]["latitude"], Some("13.1".to_string()));
    }

    #[test]
    fn test_fewer_than_two_lines_yields_nothing() {
        assert!(extract_records("").is_empty());
        assert!(extract_records("Image ID | Latitude").is_empty());
        assert!(extract_records("Image ID | Latitude\n\n   \n").is_empty());
    }

    #[test]
    fn test_arity_mismatch_drops_row() {
        let records = extract_records("Image ID | Lat\nimg001 | 12.5 | extra");
        assert!(records.is_empty());
    }

    #[test]
    fn test_arity_mismatch_drops_only_bad_rows() {
        let records = extract_records(
            "Image ID | Lat\nimg001 | 12.5 | extra\nimg002 | 13.1\nimg003",
        );

        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["image_id"], Some("img002".to_string()));
    }

    #[test]
    fn test_values_kept_as_trimmed_strings() {
        let records = extract_records("Count\n  0042  ");
        assert_eq!(records[0]["count"], Some("0042".to_string()));
    }

    #[test]
    fn test_header_without_pipes_is_single_column() {
        let records = extract_records("Name\nimg001 | 12.5");
        assert!(records.is_empty());

        let records = extract_records("Name\nimg001");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["name"], Some("img001".to_string()));
    }

    #[test]
    fn test_separator_row_dropped_only_by_arity() {
        // Three dashed cells against two headers: dropped by the arity rule.
        let records = extract_records("Image ID | Lat\n---|---|---\nimg001 | 12.5");
        assert_eq!(records.len(), 1);

        // Two dashed cells against two headers: no special casing, so the
        // separator comes through as a record.
        let records = extract_records("Image ID | Lat\n--- | ---\nimg001 | 12.5");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["image_id"], Some("---".to_string()));
    }

    #[test]
    fn test_duplicate_normalized_headers_last_wins() {
        let records = extract_records("Image ID | image_id\nfirst | second");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].len(), 1);
        assert_eq!(records[0]["image_id"], Some("second".to_string()));
    }

    #[test]
    fn test_leading_blank_lines_before_header() {
        let records = extract_records("\n\nImage ID | Lat\nimg001 | 12.5");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["lat"], Some("12.5".to_string()));
    }
}

mod pipe_table;

pub use pipe_table::{extract_records, normalize_column_name};

use shared_types::StructuredResult;

/// Classify a raw model answer and shape it for the client.
///
/// A `%` anywhere in the text makes it a percentage-style answer and the
/// whole trimmed text becomes the payload; percentage detection always wins
/// over tabular detection, even when the text also contains pipes. Anything
/// else is treated as tabular and run through the pipe-table extractor —
/// text with no recognizable structure degrades to a tabular result with
/// zero records, never an error.
pub fn shape_response(raw: &str) -> StructuredResult {
    let text = raw.trim();

    if text.contains('%') {
        StructuredResult::percentage(text.to_string())
    } else {
        let records = extract_records(text);
        StructuredResult::tabular(text.to_string(), records)
    }
}

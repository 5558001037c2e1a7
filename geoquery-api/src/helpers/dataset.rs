use anyhow::Context;
use std::path::Path;

/// Load the dataset JSON file and render it as a prompt fragment.
///
/// The file must be valid JSON; it is re-serialized pretty-printed so the
/// model sees a consistent layout regardless of how the file is formatted
/// on disk.
pub fn load_dataset(path: &Path) -> anyhow::Result<String> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset file at {}", path.display()))?;

    let value: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("Dataset file at {} is not valid JSON", path.display()))?;

    let rendered = serde_json::to_string_pretty(&value)?;
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_dataset() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"image_id":"img001","latitude":12.5,"longitude":45.2}}]"#
        )
        .unwrap();

        let rendered = load_dataset(file.path()).unwrap();
        assert!(rendered.contains("\"image_id\": \"img001\""));
        assert!(rendered.contains("\"latitude\": 12.5"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_dataset(Path::new("/nonexistent/dataset.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read dataset file"));
    }

    #[test]
    fn test_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_dataset(file.path()).unwrap_err();
        assert!(err.to_string().contains("is not valid JSON"));
    }
}

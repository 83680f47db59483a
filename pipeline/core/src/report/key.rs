use std::path::Path;

use types::AnonymizedEntry;

use super::write_text;
use crate::error::ReportError;

/// Instructor key: the entries as a pretty-printed JSON array.
pub fn render_instructor_key(entries: &[AnonymizedEntry]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(entries)
}

/// Write the instructor key.
pub fn write_instructor_key(path: &Path, entries: &[AnonymizedEntry]) -> Result<(), ReportError> {
    let json = render_instructor_key(entries)
        .map_err(|source| ReportError::Serialize { path: path.to_path_buf(), source })?;
    write_text(path, &json)
}

#[cfg(test)]
mod tests {
    use types::ProjectRecord;

    use super::*;

    #[test]
    fn test_render_instructor_key() {
        let entry = AnonymizedEntry::new(
            "NFTCC763C6B",
            ProjectRecord {
                description: "Ｅｎｔｅｒ the Garden 花".to_string(),
                project_name: "Azuki".to_string(),
                category: "CATEGORY_B_FANTASY_ART".to_string(),
                total_supply: Some("10000".to_string()),
                contract_address: None,
                official_url: Some("https://www.azuki.com".to_string()),
                opensea_url: None,
            },
        );

        let json = render_instructor_key(&[entry.clone()]).expect("json");
        assert!(json.starts_with("[\n  {\n    \"code\": \"NFTCC763C6B\",\n    \"description\""));
        // Non-ASCII stays readable
        assert!(json.contains("花"));

        let parsed: Vec<AnonymizedEntry> = serde_json::from_str(&json).expect("parse back");
        assert_eq!(parsed, vec![entry]);
    }
}

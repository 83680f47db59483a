//! Where a project's metadata lives inside the dataset.
//!
//! Every project occupies one directory under the dataset root, named exactly
//! like the project, holding a `metadata_dashboard.json` file.

/// Default dataset root directory.
pub const DEFAULT_DATASET_ROOT: &str = "NFT1000";

/// File name of a project's metadata dashboard.
pub const METADATA_FILE: &str = "metadata_dashboard.json";

/// Path segments of a project's metadata file relative to the dataset.
///
/// Backends join or percent-encode these as their addressing scheme requires;
/// project names may contain spaces, dots and ampersands.
pub fn metadata_segments<'a>(root: &'a str, project: &'a str) -> [&'a str; 3] {
    [root, project, METADATA_FILE]
}

/// Slash-joined metadata path, as used in diagnostics.
pub fn metadata_path(root: &str, project: &str) -> String {
    metadata_segments(root, project).join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_path() {
        assert_eq!(
            metadata_path(DEFAULT_DATASET_ROOT, "Bored Ape Kennel Club"),
            "NFT1000/Bored Ape Kennel Club/metadata_dashboard.json"
        );
        assert_eq!(metadata_segments("root", "a.b")[2], METADATA_FILE);
    }
}

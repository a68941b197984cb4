use ignore::WalkBuilder;
use std::collections::BTreeSet;
use std::path::Path;
#[cfg(feature = "logging")]
use tracing;

/// Lowercase suffix after the last `.` of `name`, if there is a non-empty one.
fn extension_of(name: &str) -> Option<String> {
    let trimmed = name.trim_start_matches('.');
    match trimmed.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => Some(ext.to_lowercase()),
        _ => None,
    }
}

/// Collects the distinct extensions of all non-hidden files under `root`.
///
/// Hidden directories are not entered. No other directory is excluded, so
/// the result shows what an `--extensions` list could select from.
pub fn list_extensions(root: &Path) -> BTreeSet<String> {
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .hidden(true)
        .follow_links(false)
        .build();
    let mut found = BTreeSet::new();
    for result in walker {
        let entry = match result {
            Ok(entry) => entry,
            Err(_e) => {
                #[cfg(feature = "logging")]
                tracing::debug!("Skipping unreadable entry: {}", _e);
                continue;
            }
        };
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        if let Some(ext) = extension_of(&entry.file_name().to_string_lossy()) {
            found.insert(ext);
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_uses_last_suffix() {
        assert_eq!(extension_of("archive.TAR.GZ").as_deref(), Some("gz"));
        assert_eq!(extension_of("Makefile"), None);
        assert_eq!(extension_of("trailing."), None);
    }
}

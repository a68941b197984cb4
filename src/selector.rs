//! Inclusion predicates shared by the tree view and the content dump.

use crate::options::SelectionConfig;

fn is_hidden(name: &str, config: &SelectionConfig) -> bool {
    !config.include_hidden && name.starts_with('.')
}

/// Returns true if a directory named `name` should be descended into.
///
/// Only hidden names and literal members of the exclusion set are rejected;
/// extension rules never apply to directories.
pub fn is_dir_included(name: &str, config: &SelectionConfig) -> bool {
    !is_hidden(name, config) && !config.excluded_dir_names.contains(name)
}

/// Returns true if a file named `name` belongs in the snapshot.
///
/// With an extension allow-list the lowercase name must end in `.<ext>`.
/// Without one, every file passes except the well-known deny-listed names.
pub fn is_file_included(name: &str, config: &SelectionConfig) -> bool {
    if is_hidden(name, config) {
        return false;
    }
    let lower = name.to_lowercase();
    if config.allowed_extensions.is_empty() {
        return !config.default_deny_filenames.contains(&lower);
    }
    config.allowed_extensions.iter().any(|ext| {
        lower
            .strip_suffix(ext.as_str())
            .is_some_and(|stem| stem.ends_with('.'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::SnapshotBuilder;

    fn default_config() -> SelectionConfig {
        SelectionConfig::default()
    }

    #[test]
    fn hidden_entries_are_rejected() {
        let config = default_config();
        assert!(!is_file_included(".env", &config));
        assert!(!is_dir_included(".git", &config));
    }

    #[test]
    fn deny_list_is_case_insensitive() {
        let config = default_config();
        assert!(!is_file_included("README.md", &config));
        assert!(!is_file_included("LICENSE", &config));
        assert!(!is_file_included("package-lock.json", &config));
        assert!(is_file_included("main.py", &config));
        assert!(is_file_included("Makefile", &config));
    }

    #[test]
    fn allow_list_matches_exact_suffix() {
        let config = SnapshotBuilder::new(".").extensions(["py"]).build().selection;
        assert!(is_file_included("main.py", &config));
        assert!(is_file_included("MAIN.PY", &config));
        assert!(!is_file_included("main.pyc", &config));
        assert!(!is_file_included("happy", &config));
        assert!(!is_file_included("readme.md", &config));
    }

    #[test]
    fn allow_list_ignores_deny_list() {
        let config = SnapshotBuilder::new(".").extensions(["md"]).build().selection;
        assert!(is_file_included("README.md", &config));
    }

    #[test]
    fn dir_exclusion_is_literal() {
        let config = default_config();
        assert!(!is_dir_included("node_modules", &config));
        assert!(is_dir_included("Node_Modules", &config));
        assert!(is_dir_included("src", &config));
    }
}

//! Opaque payload records and file-name helpers.
//!
//! Payload contents are carried as raw bytes and never inspected; only the
//! file name takes part in ordering decisions.

use std::path::{Path, PathBuf};

/// One payload file: its path plus unmodified contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    path: PathBuf,
    contents: Vec<u8>,
}

impl FileRecord {
    /// Creates a record from a path and its raw contents.
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }

    /// The path this record was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The final component of the path, when it is valid UTF-8.
    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name()?.to_str()
    }

    /// The raw contents, byte for byte as read.
    pub fn contents(&self) -> &[u8] {
        &self.contents
    }

    /// Consumes the record, returning its contents.
    pub fn into_contents(self) -> Vec<u8> {
        self.contents
    }
}

/// Returns the file-name portion before the first `.`.
///
/// The stem is what gets parsed as a BEM identifier, so multi-extension names
/// collapse to their entity: `button.min.css` and `button.css` share the stem
/// `button`. Returns `None` when the name has no non-empty stem (dotfiles,
/// paths without a final component, non-UTF-8 names).
///
/// # Examples
///
/// ```
/// use std::path::Path;
///
/// use strata_core::file::file_stem;
///
/// assert_eq!(file_stem(Path::new("blocks/menu__item.css")), Some("menu__item"));
/// assert_eq!(file_stem(Path::new("button.min.css")), Some("button"));
/// assert_eq!(file_stem(Path::new(".gitignore")), None);
/// ```
pub fn file_stem(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    let stem = name.split('.').next()?;
    if stem.is_empty() { None } else { Some(stem) }
}

/// Extracts the owner stem from a declaration file name.
///
/// A declaration file is named `<owner>.<marker>.yaml` (or `.yml`). Returns
/// the `<owner>` part, or `None` when the name does not follow that shape.
///
/// # Examples
///
/// ```
/// use strata_core::file::declaration_owner;
///
/// assert_eq!(declaration_owner("button.deps.yaml", "deps"), Some("button"));
/// assert_eq!(declaration_owner("button.deps.yml", "deps"), Some("button"));
/// assert_eq!(declaration_owner("button.css", "deps"), None);
/// ```
pub fn declaration_owner<'a>(file_name: &'a str, marker: &str) -> Option<&'a str> {
    let rest = file_name
        .strip_suffix(".yaml")
        .or_else(|| file_name.strip_suffix(".yml"))?;
    let owner = rest.strip_suffix(marker)?.strip_suffix('.')?;
    if owner.is_empty() { None } else { Some(owner) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_round_trip() {
        let record = FileRecord::new("blocks/button.css", b".button {}".to_vec());

        assert_eq!(record.path(), Path::new("blocks/button.css"));
        assert_eq!(record.file_name(), Some("button.css"));
        assert_eq!(record.contents(), b".button {}");
        assert_eq!(record.into_contents(), b".button {}".to_vec());
    }

    #[test]
    fn test_contents_stay_raw() {
        let bytes = vec![0u8, 159, 146, 150];
        let record = FileRecord::new("odd.css", bytes.clone());

        assert_eq!(record.contents(), bytes.as_slice());
    }

    #[test]
    fn test_file_stem_plain() {
        assert_eq!(file_stem(Path::new("button.css")), Some("button"));
        assert_eq!(file_stem(Path::new("a/b/menu__item_current.css")), Some("menu__item_current"));
    }

    #[test]
    fn test_file_stem_multi_extension() {
        assert_eq!(file_stem(Path::new("button.min.css")), Some("button"));
        assert_eq!(file_stem(Path::new("button.deps.yaml")), Some("button"));
    }

    #[test]
    fn test_file_stem_without_extension() {
        assert_eq!(file_stem(Path::new("Makefile")), Some("Makefile"));
    }

    #[test]
    fn test_file_stem_degenerate() {
        assert_eq!(file_stem(Path::new(".hidden")), None);
        assert_eq!(file_stem(Path::new("dir/")), Some("dir"));
        assert_eq!(file_stem(Path::new("")), None);
    }

    #[test]
    fn test_declaration_owner() {
        assert_eq!(declaration_owner("button.deps.yaml", "deps"), Some("button"));
        assert_eq!(declaration_owner("menu__item.deps.yml", "deps"), Some("menu__item"));
        assert_eq!(declaration_owner("button.links.yaml", "links"), Some("button"));
    }

    #[test]
    fn test_declaration_owner_rejects_other_shapes() {
        assert_eq!(declaration_owner("button.css", "deps"), None);
        assert_eq!(declaration_owner("button.deps.json", "deps"), None);
        assert_eq!(declaration_owner("buttondeps.yaml", "deps"), None);
        assert_eq!(declaration_owner(".deps.yaml", "deps"), None);
        assert_eq!(declaration_owner("button.yaml", "deps"), None);
    }
}

//! Ordered mapping from artifact path to rendered content.

use std::path::Path;

use eyre::{Context, Result};
use indexmap::IndexMap;

/// Generated artifacts keyed by forward-slash relative path.
///
/// Insertion order is preserved so emitters control presentation order, and
/// identical inputs always produce an identical map. This is the entire
/// surface the generation core exposes; writers, archivers, and preview
/// renderers consume it without further transformation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileMap {
    files: IndexMap<String, String>,
}

impl FileMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an artifact. Re-inserting a path replaces its content.
    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(p, c)| (p.as_str(), c.as_str()))
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    /// Write every artifact under `base`, creating parent directories as
    /// needed. Returns the number of files written.
    pub fn write_to(&self, base: &Path) -> Result<usize> {
        for (path, content) in &self.files {
            let target = base.join(path);
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent).wrap_err_with(|| {
                    format!("failed to create directory `{}`", parent.display())
                })?;
            }
            std::fs::write(&target, content)
                .wrap_err_with(|| format!("failed to write `{}`", target.display()))?;
        }
        Ok(self.files.len())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let mut files = FileMap::new();
        files.insert("b.ts", "b");
        files.insert("a.ts", "a");

        let paths: Vec<_> = files.paths().collect();
        assert_eq!(paths, ["b.ts", "a.ts"]);
    }

    #[test]
    fn reinsert_replaces_content() {
        let mut files = FileMap::new();
        files.insert("models.ts", "first");
        files.insert("models.ts", "second");

        assert_eq!(files.len(), 1);
        assert_eq!(files.get("models.ts"), Some("second"));
    }

    #[test]
    fn write_to_creates_nested_directories() {
        let temp = TempDir::new().unwrap();
        let mut files = FileMap::new();
        files.insert("index.ts", "export * from \"./common/base\";\n");
        files.insert("common/base.ts", "export type JsonValue = any;\n");

        let written = files.write_to(temp.path()).unwrap();
        assert_eq!(written, 2);

        let base = fs::read_to_string(temp.path().join("common/base.ts")).unwrap();
        assert_eq!(base, "export type JsonValue = any;\n");
        assert!(temp.path().join("index.ts").exists());
    }
}

//! Lazy, pruning directory traversal.
//!
//! Excluded directories are dropped before the walker descends into them,
//! so their contents are never opened.

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use walkdir::{DirEntry, WalkDir};

use crate::{Error, ResourcePath, Result};

/// A file found by a [`ResourceWalker`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceFile {
    /// Full path on disk.
    pub path: PathBuf,
    /// Location relative to the walk root.
    pub relative: ResourcePath,
}

/// Walks a directory tree and yields its files as [`ResourceFile`]s.
///
/// A root that does not exist yields nothing. Every call to
/// [`ResourceWalker::files`] starts an independent traversal.
///
/// # Example
///
/// ```ignore
/// let walker = ResourceWalker::new("generated/data/minecraft/recipes")
///     .exclude([".cache", "tmp"])
///     .suffix(".json");
///
/// for file in walker.files() {
///     let file = file?;
///     println!("{}", file.relative);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ResourceWalker {
    root: PathBuf,
    exclude: Vec<String>,
    suffix: Option<String>,
}

impl ResourceWalker {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            exclude: Vec::new(),
            suffix: None,
        }
    }

    /// Never descend into directories with any of these names.
    pub fn exclude<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(names.into_iter().map(Into::into));
        self
    }

    /// Only yield files whose name ends with `suffix`; the suffix is
    /// stripped to form the stem. Names are matched as raw bytes, so a
    /// matching file with a non UTF-8 name is an error rather than skipped.
    ///
    /// Without a suffix every file is yielded and only the final
    /// extension is stripped.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Start a traversal.
    pub fn files(&self) -> Files<'_> {
        let inner = self.root.is_dir().then(|| {
            let iter = WalkDir::new(&self.root)
                .sort_by_file_name()
                .into_iter()
                .filter_entry(|entry| !self.is_excluded(entry));
            Box::new(iter) as Box<dyn Iterator<Item = walkdir::Result<DirEntry>> + '_>
        });
        Files {
            walker: self,
            inner,
        }
    }

    fn is_excluded(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && self
                .exclude
                .iter()
                .any(|name| entry.file_name() == OsStr::new(name))
    }

    fn matches_suffix(&self, entry: &DirEntry) -> bool {
        self.suffix.as_ref().is_none_or(|suffix| {
            entry
                .file_name()
                .as_encoded_bytes()
                .ends_with(suffix.as_bytes())
        })
    }

    fn resource_file(&self, entry: DirEntry) -> Result<ResourceFile> {
        let name = entry
            .file_name()
            .to_str()
            .ok_or_else(|| Error::non_utf8_path(entry.path()))?;
        let stem = match &self.suffix {
            Some(suffix) => name.strip_suffix(suffix.as_str()).unwrap_or(name),
            None => Path::new(name)
                .file_stem()
                .and_then(OsStr::to_str)
                .unwrap_or(name),
        };
        let relative = ResourcePath::relative_to(&self.root, entry.path(), stem)
            .ok_or_else(|| Error::non_utf8_path(entry.path()))?;
        Ok(ResourceFile {
            path: entry.into_path(),
            relative,
        })
    }

    /// The non-excluded directories directly under the root, in name order.
    ///
    /// A root that does not exist has no children.
    pub fn child_dirs(&self) -> Result<Vec<(String, PathBuf)>> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }

        let entries = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.is_excluded(entry));

        let mut dirs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| self.walk_error(source))?;
            if !entry.file_type().is_dir() {
                continue;
            }
            let name = entry
                .file_name()
                .to_str()
                .ok_or_else(|| Error::non_utf8_path(entry.path()))?
                .to_string();
            dirs.push((name, entry.into_path()));
        }
        Ok(dirs)
    }

    fn walk_error(&self, source: walkdir::Error) -> Box<Error> {
        Box::new(Error::Walk {
            root: self.root.clone(),
            source,
        })
    }
}

impl<'a> IntoIterator for &'a ResourceWalker {
    type Item = Result<ResourceFile>;
    type IntoIter = Files<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.files()
    }
}

/// Iterator over the files of one traversal.
pub struct Files<'a> {
    walker: &'a ResourceWalker,
    inner: Option<Box<dyn Iterator<Item = walkdir::Result<DirEntry>> + 'a>>,
}

impl Iterator for Files<'_> {
    type Item = Result<ResourceFile>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.as_mut()?.next()? {
                Ok(entry) => entry,
                Err(source) => return Some(Err(self.walker.walk_error(source))),
            };
            if !entry.file_type().is_file() || !self.walker.matches_suffix(&entry) {
                continue;
            }
            return Some(self.walker.resource_file(entry));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "{}").unwrap();
    }

    fn collect(walker: &ResourceWalker) -> Vec<String> {
        walker
            .files()
            .map(|f| f.unwrap().relative.to_string())
            .collect()
    }

    #[test]
    fn test_walk_yields_relative_paths() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a.json");
        touch(temp.path(), "nested/deeper/b.json");
        touch(temp.path(), "nested/c.json");

        let walker = ResourceWalker::new(temp.path()).suffix(".json");
        let files = walker.files().map(|f| f.unwrap()).collect::<Vec<_>>();

        let names: Vec<_> = files.iter().map(|f| f.relative.to_string()).collect();
        assert_eq!(names, ["a", "nested/c", "nested/deeper/b"]);
        assert_eq!(files[2].relative.segments(), ["nested", "deeper"]);
        assert_eq!(files[2].path, temp.path().join("nested/deeper/b.json"));
    }

    #[test]
    fn test_walk_prunes_excluded_dirs_at_any_depth() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "keep.json");
        touch(temp.path(), ".cache/skip.json");
        touch(temp.path(), "nested/tmp/skip.json");
        touch(temp.path(), "nested/keep.json");

        let walker = ResourceWalker::new(temp.path())
            .exclude([".cache", "tmp"])
            .suffix(".json");

        assert_eq!(collect(&walker), ["keep", "nested/keep"]);
    }

    #[test]
    fn test_excluded_name_only_prunes_directories() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "tmp");

        let walker = ResourceWalker::new(temp.path()).exclude(["tmp"]);
        assert_eq!(collect(&walker), ["tmp"]);
    }

    #[test]
    fn test_root_named_like_excluded_dir_is_still_walked() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "tmp/a.json");

        let walker = ResourceWalker::new(temp.path().join("tmp")).exclude(["tmp"]);
        assert_eq!(collect(&walker), ["a"]);
    }

    #[test]
    fn test_suffix_filters_and_strips_exactly() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a.json");
        touch(temp.path(), "b.min.json");
        touch(temp.path(), "notes.txt");

        let walker = ResourceWalker::new(temp.path()).suffix(".json");
        assert_eq!(collect(&walker), ["a", "b.min"]);

        let walker = ResourceWalker::new(temp.path()).suffix(".min.json");
        assert_eq!(collect(&walker), ["b"]);
    }

    #[test]
    fn test_without_suffix_strips_final_extension() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "b.min.json");
        touch(temp.path(), "notes.txt");

        let walker = ResourceWalker::new(temp.path());
        assert_eq!(collect(&walker), ["b.min", "notes"]);
    }

    #[test]
    fn test_missing_root_is_empty() {
        let temp = TempDir::new().unwrap();
        let walker = ResourceWalker::new(temp.path().join("absent")).suffix(".json");

        assert_eq!(walker.files().count(), 0);
    }

    #[test]
    fn test_walk_is_restartable() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "x/y.json");
        touch(temp.path(), "z.json");

        let walker = ResourceWalker::new(temp.path()).suffix(".json");
        assert_eq!(collect(&walker), collect(&walker));

        let mut count = 0;
        for file in &walker {
            file.unwrap();
            count += 1;
        }
        assert_eq!(count, 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_name_is_an_error() {
        use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

        let temp = TempDir::new().unwrap();
        touch(temp.path(), "ok.json");
        let bad = temp.path().join(OsStr::from_bytes(b"caf\xe9.json"));
        if fs::write(&bad, "{}").is_err() {
            // Some filesystems refuse non UTF-8 names outright.
            return;
        }
        fs::write(temp.path().join(OsStr::from_bytes(b"caf\xe9.txt")), "").unwrap();

        let walker = ResourceWalker::new(temp.path()).suffix(".json");
        let results: Vec<_> = walker.files().collect();

        assert_eq!(results.len(), 2);
        let err = results.iter().find_map(|r| r.as_ref().err()).unwrap();
        assert!(matches!(&**err, Error::NonUtf8Path { path } if *path == bad));

        let walker = ResourceWalker::new(temp.path());
        assert_eq!(walker.files().filter(Result::is_err).count(), 2);
    }

    #[test]
    fn test_child_dirs_skip_files_and_excluded_names() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "zeta/a.json");
        touch(temp.path(), "alpha/b.json");
        touch(temp.path(), ".cache/c.json");
        touch(temp.path(), "stray.json");
        fs::create_dir_all(temp.path().join("tmp")).unwrap();

        let walker = ResourceWalker::new(temp.path()).exclude([".cache", "tmp"]);
        let dirs = walker.child_dirs().unwrap();

        let names: Vec<_> = dirs.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["alpha", "zeta"]);
        assert_eq!(dirs[0].1, temp.path().join("alpha"));
    }

    #[test]
    fn test_child_dirs_of_missing_root() {
        let temp = TempDir::new().unwrap();
        let walker = ResourceWalker::new(temp.path().join("absent"));
        assert!(walker.child_dirs().unwrap().is_empty());
    }
}

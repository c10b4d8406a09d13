//! File system walker with pattern-based filtering.
//!
//! Lists candidate document files under a root directory. A missing or
//! unreadable root, or any walk error below it, fails the whole listing.

use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::core::error::{Result, SearchError};

/// File system walker with pattern-based filtering
pub struct FileWalker {
    /// Patterns to include (e.g., "*.txt")
    include_patterns: Vec<Pattern>,

    /// Descend into subdirectories
    recursive: bool,
}

impl FileWalker {
    /// Create a new file walker
    ///
    /// # Arguments
    ///
    /// * `include_patterns` - Glob patterns matched against file names
    /// * `recursive` - Whether to walk below the root directory
    ///
    /// # Returns
    ///
    /// A new `FileWalker` instance or an error if a pattern is invalid
    pub fn new(include_patterns: &[String], recursive: bool) -> Result<Self> {
        let include = include_patterns
            .iter()
            .map(|p| {
                Pattern::new(p).map_err(|e| {
                    SearchError::ConfigError(format!("Invalid include pattern '{p}': {e}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            include_patterns: include,
            recursive,
        })
    }

    /// Collect all matching files from a directory, sorted by file name
    /// within each directory.
    pub fn collect_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.is_dir() {
            return Err(SearchError::InvalidPath(format!(
                "Documents directory not found: {}",
                root.display()
            )));
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };
        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .max_depth(max_depth)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| should_process_entry(e, root))
        {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_file() && self.matches_patterns(entry.path()) {
                        files.push(entry.path().to_path_buf());
                    }
                }
                Err(e) => {
                    return Err(SearchError::InvalidPath(format!(
                        "Cannot walk documents directory {}: {e}",
                        root.display()
                    )));
                }
            }
        }

        Ok(files)
    }

    /// Check if a file name matches any include pattern.
    ///
    /// Only names with an extension qualify, so a dotfile such as `.txt`
    /// (stem `.txt`, no extension) is never a document.
    fn matches_patterns(&self, path: &Path) -> bool {
        if path.extension().is_none() {
            return false;
        }

        match path.file_name().and_then(|f| f.to_str()) {
            Some(name) => self.include_patterns.iter().any(|p| p.matches(name)),
            None => false,
        }
    }
}

/// Skip hidden directories below the root
fn should_process_entry(entry: &DirEntry, root: &Path) -> bool {
    let path = entry.path();

    if path == root {
        return true;
    }

    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        if name.starts_with('.') && entry.file_type().is_dir() {
            return false;
        }
    }

    true
}

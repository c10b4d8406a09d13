//! Document crawling.
//!
//! Walks the documents directory, reads each matching file and keys its
//! content by a display name derived from the file stem.

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::core::config::DocumentsConfig;
use crate::core::error::{Result, SearchError};
use crate::core::indexer::FileWalker;
use crate::core::text::transform::push_titlecase;
use crate::core::types::{Document, DocumentMap};

/// Reads documents found by a [`FileWalker`]
pub struct DocumentCrawler {
    walker: FileWalker,
}

impl DocumentCrawler {
    pub fn new(config: &DocumentsConfig) -> Result<Self> {
        let walker = FileWalker::new(&config.include_patterns, config.recursive)?;
        Ok(Self { walker })
    }

    /// Crawl `root` and return its documents keyed by derived name
    ///
    /// The first file that cannot be read as UTF-8 text aborts the crawl.
    /// When two files derive the same name the later one (in walk order)
    /// replaces the earlier.
    pub fn crawl(&self, root: &Path) -> Result<DocumentMap> {
        let start = Instant::now();

        tracing::info!("Crawling documents in {:?}", root);
        let files = self.walker.collect_files(root)?;
        tracing::debug!("Found {} candidate files", files.len());

        let mut documents = DocumentMap::new();

        for path in &files {
            let doc = read_document(path)?;
            tracing::debug!("Loaded {:?} as {:?}", path, doc.name);

            if documents.insert(doc.name.clone(), doc.content).is_some() {
                tracing::warn!(
                    "Document name {:?} is derived from more than one file, keeping {:?}",
                    doc.name,
                    path
                );
            }
        }

        tracing::info!(
            "Crawl complete: {} documents loaded in {}ms",
            documents.len(),
            start.elapsed().as_millis()
        );

        Ok(documents)
    }
}

/// Read a single file into a [`Document`]
pub fn read_document(path: &Path) -> Result<Document> {
    let content = fs::read_to_string(path).map_err(|e| {
        SearchError::UnreadableDocument(format!("{}: {e}", path.display()))
    })?;
    let name = document_name(path).ok_or_else(|| {
        SearchError::InvalidPath(format!("Cannot derive a document name from {path:?}"))
    })?;

    Ok(Document { name, content })
}

/// Derive a display name from a file path: stem, underscores to spaces,
/// then title case where any non-letter starts a new word.
///
/// `the_old_man.txt` becomes `The Old Man`, `road-trip_2nd.txt` becomes
/// `Road-Trip 2Nd`.
pub fn document_name(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_string_lossy();
    Some(title_name(&stem.replace('_', " ")))
}

fn title_name(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_cased = false;

    for c in text.chars() {
        let cased = c.is_lowercase() || c.is_uppercase();
        if cased && previous_cased {
            out.extend(c.to_lowercase());
        } else if cased {
            push_titlecase(&mut out, c);
        } else {
            out.push(c);
        }
        previous_cased = cased;
    }

    out
}

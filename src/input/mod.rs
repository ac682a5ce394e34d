use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use unicode_normalization::UnicodeNormalization;

use crate::core::model::Document;

/// Loads the block-level JSON dump produced by the upstream extraction
/// layer. Span text is NFC-normalized on the way in so character counts
/// downstream are stable for scanned sources.
#[derive(Debug, Clone)]
pub struct DocumentReader {
    path: PathBuf,
}

impl DocumentReader {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> Result<Document> {
        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read document dump {}", self.path.display()))?;
        let mut document: Document = serde_json::from_str(&data)
            .with_context(|| format!("malformed document dump {}", self.path.display()))?;

        for page in &mut document.pages {
            for block in &mut page.blocks {
                if let crate::core::model::Block::Text { lines } = block {
                    for line in lines {
                        for span in &mut line.spans {
                            span.text = span.text.nfc().collect();
                        }
                    }
                }
            }
        }

        Ok(document)
    }
}

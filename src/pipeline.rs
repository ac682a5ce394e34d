use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::model::{Document, Entry, Lexicon};
use crate::core::rules::RuleSet;
use crate::export::{Exporter, JsonExporter, TextExporter};
use crate::input::DocumentReader;
use crate::segment::{post_process, EntryAccumulator};

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Label recorded as `metadata.source` in the output.
    pub source: String,
    /// First page to visit, 0-indexed.
    pub start_page: usize,
    /// End-exclusive page bound; `None` runs to the last page.
    pub end_page: Option<usize>,
}

impl PipelineConfig {
    pub fn new(input: PathBuf, output: PathBuf, source: String) -> Self {
        Self {
            input,
            output,
            source,
            start_page: 0,
            end_page: None,
        }
    }

    pub fn with_page_range(mut self, start_page: usize, end_page: Option<usize>) -> Self {
        self.start_page = start_page;
        self.end_page = end_page;
        self
    }
}

/// What a pipeline run produced, including the pre-cleanup entry count for
/// progress reporting.
#[derive(Debug, Clone)]
pub struct ExtractionOutcome {
    pub lexicon: Lexicon,
    pub raw_entry_count: usize,
}

/// Single sequential pass over the configured page range. Correctness
/// depends on observing blocks in source order: a definition may continue
/// across any number of blocks and page boundaries.
pub fn segment_document(
    document: &Document,
    rules: &RuleSet,
    start_page: usize,
    end_page: Option<usize>,
) -> Vec<Entry> {
    let end_page = end_page.unwrap_or(usize::MAX);
    let mut accumulator = EntryAccumulator::new(rules);

    for page in &document.pages {
        if page.page_idx < start_page || page.page_idx >= end_page {
            continue;
        }
        for block in &page.blocks {
            accumulator.feed_block(block, page.page_idx);
        }
    }

    accumulator.finish()
}

pub fn build_lexicon(config: &PipelineConfig) -> Result<ExtractionOutcome> {
    let reader = DocumentReader::new(config.input.clone());
    let document = reader.read()?;

    let rules = RuleSet::default();
    let raw = segment_document(&document, &rules, config.start_page, config.end_page);
    let raw_entry_count = raw.len();
    let entries = post_process(raw, &rules);

    Ok(ExtractionOutcome {
        lexicon: Lexicon::new(config.source.clone(), entries),
        raw_entry_count,
    })
}

pub fn export_lexicon(lexicon: &Lexicon, output: &Path) -> Result<()> {
    let json_exporter = JsonExporter::new(output.to_path_buf());
    json_exporter.export(lexicon)?;

    let text_exporter = TextExporter::new(output.to_path_buf());
    text_exporter.export(lexicon)?;

    Ok(())
}

use std::fs;
use std::path::PathBuf;

use anyhow::Result;

use crate::core::model::{Entry, Lexicon};
use crate::export::Exporter;

/// Writes a plain-text listing (`entries.txt`) for eyeballing a run without
/// a JSON viewer.
#[derive(Debug, Clone)]
pub struct TextExporter {
    out_dir: PathBuf,
}

impl TextExporter {
    pub fn new(out_dir: PathBuf) -> Self {
        Self { out_dir }
    }

    fn format_entry(entry: &Entry) -> String {
        let marker = if entry.is_cross_ref { " [XREF]" } else { "" };
        format!(
            "{}{} (p.{})\n{}\n",
            entry.term, marker, entry.page, entry.definition
        )
    }
}

impl Exporter for TextExporter {
    fn export(&self, lexicon: &Lexicon) -> Result<()> {
        fs::create_dir_all(&self.out_dir)?;

        let mut text = format!(
            "{} — {} entries ({} definitions, {} cross-references)\n\n",
            lexicon.metadata.source,
            lexicon.metadata.total_entries,
            lexicon.metadata.entries_with_definitions,
            lexicon.metadata.cross_references
        );
        for entry in &lexicon.entries {
            text.push_str(&Self::format_entry(entry));
            text.push('\n');
        }

        let path = self.out_dir.join("entries.txt");
        fs::write(path, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_cross_reference_marker() {
        let entry = Entry {
            term: "aureole".to_string(),
            definition: "See halo.".to_string(),
            page: 5,
            is_cross_ref: true,
        };
        let formatted = TextExporter::format_entry(&entry);
        assert!(formatted.starts_with("aureole [XREF] (p.5)"));
        assert!(formatted.contains("See halo."));
    }
}

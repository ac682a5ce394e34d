use std::fs;
use std::path::PathBuf;

use anyhow::Result;

use crate::core::model::Lexicon;
use crate::export::Exporter;

/// Writes the extraction result as `entries.json`, the contract consumed by
/// the presentation layer.
#[derive(Debug, Clone)]
pub struct JsonExporter {
    out_dir: PathBuf,
}

impl JsonExporter {
    pub fn new(out_dir: PathBuf) -> Self {
        Self { out_dir }
    }
}

impl Exporter for JsonExporter {
    fn export(&self, lexicon: &Lexicon) -> Result<()> {
        fs::create_dir_all(&self.out_dir)?;
        let path = self.out_dir.join("entries.json");
        let data = serde_json::to_string_pretty(lexicon)?;
        fs::write(path, data)?;
        Ok(())
    }
}

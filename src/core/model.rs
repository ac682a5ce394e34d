use serde::{Deserialize, Serialize};

/// Block-level dump of a paginated source document, as produced by the
/// upstream extraction layer. Only text content is carried; the corpus is
/// typographically uniform, so no font or position metadata survives here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub pages: Vec<Page>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub page_idx: usize,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    Text { lines: Vec<Line> },
    Image,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line {
    pub spans: Vec<Span>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
}

/// One extracted headword record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entry {
    pub term: String,
    pub definition: String,
    /// 1-indexed page on which the term was first seen.
    pub page: usize,
    pub is_cross_ref: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lexicon {
    pub metadata: Metadata,
    pub entries: Vec<Entry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub source: String,
    pub total_entries: usize,
    pub entries_with_definitions: usize,
    pub cross_references: usize,
}

impl Document {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn block_count(&self) -> usize {
        self.pages.iter().map(|p| p.blocks.len()).sum()
    }

    pub fn text_block_count(&self) -> usize {
        self.pages
            .iter()
            .flat_map(|p| p.blocks.iter())
            .filter(|b| matches!(b, Block::Text { .. }))
            .count()
    }
}

impl Block {
    /// Full text of the block, one string per source line, or `None` for
    /// non-text blocks.
    pub fn line_texts(&self) -> Option<Vec<String>> {
        match self {
            Block::Text { lines } => Some(lines.iter().map(Line::text).collect()),
            Block::Image => None,
        }
    }

    /// The whole block joined line-by-line. Non-text blocks yield `None`.
    pub fn text_content(&self) -> Option<String> {
        self.line_texts().map(|lines| lines.join("\n"))
    }

    /// Concatenation of the first line's spans, trimmed. The entry detector
    /// inspects only this.
    pub fn first_line(&self) -> Option<String> {
        match self {
            Block::Text { lines } => lines.first().map(|l| l.text().trim().to_string()),
            Block::Image => None,
        }
    }
}

impl Line {
    /// Spans concatenated without separators; spans are fragments of one
    /// physical line.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

impl Lexicon {
    /// Assemble the output document, deriving the metadata counts from the
    /// entry list.
    pub fn new(source: String, entries: Vec<Entry>) -> Self {
        let cross_references = entries.iter().filter(|e| e.is_cross_ref).count();
        let metadata = Metadata {
            source,
            total_entries: entries.len(),
            entries_with_definitions: entries.len() - cross_references,
            cross_references,
        };
        Self { metadata, entries }
    }
}

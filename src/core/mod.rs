pub mod model;
pub mod rules;

pub use model::{Block, Document, Entry, Lexicon, Line, Metadata, Page, Span};
pub use rules::RuleSet;

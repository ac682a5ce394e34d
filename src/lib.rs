pub mod core;
pub mod export;
pub mod input;
pub mod pipeline;
pub mod segment;

pub use crate::core::model::{Document, Entry, Lexicon, Metadata};
pub use crate::core::rules::RuleSet;

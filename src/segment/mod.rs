//! Heuristic entry segmentation over a block-level document dump.
//!
//! The stream of page blocks is folded in document order: each text block
//! either opens a new entry (its first line matches a heading pattern) or
//! continues the one currently open. Pattern-level rejection lives in
//! [`term_check`], block-level artifact filtering in [`block_filter`], and
//! a final drop/merge pass in [`postprocess`].

pub mod accumulator;
pub mod block_filter;
pub mod heading;
pub mod postprocess;
pub mod term_check;

pub use accumulator::EntryAccumulator;
pub use postprocess::post_process;

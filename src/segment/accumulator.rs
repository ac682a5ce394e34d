use std::sync::LazyLock;

use regex::Regex;

use crate::core::model::{Block, Entry};
use crate::core::rules::RuleSet;
use crate::segment::block_filter::{is_page_number, is_running_header};
use crate::segment::heading::detect_heading;

static XREF_SEE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[Ss]ee\s+").unwrap());
static XREF_PAREN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\([Ss]ee\s").unwrap());

/// Where the traversal currently stands: either between entries, or inside
/// one whose definition is still being gathered.
enum State {
    Idle,
    Collecting {
        term: String,
        page_idx: usize,
        buffer: Vec<String>,
    },
}

/// Stateful stitcher that folds the block stream into entries.
///
/// Blocks must be fed strictly in document order; an open entry keeps
/// collecting across block and page boundaries until the next detected
/// heading (or the end of input) closes it.
pub struct EntryAccumulator<'r> {
    rules: &'r RuleSet,
    state: State,
    entries: Vec<Entry>,
}

impl<'r> EntryAccumulator<'r> {
    pub fn new(rules: &'r RuleSet) -> Self {
        Self {
            rules,
            state: State::Idle,
            entries: Vec::new(),
        }
    }

    /// Consumes the next block in document order. `page_idx` is the 0-based
    /// page the block sits on.
    pub fn feed_block(&mut self, block: &Block, page_idx: usize) {
        let Some(full_text) = block.text_content() else {
            return;
        };
        let full_text = full_text.trim();
        if full_text.is_empty() {
            return;
        }

        let Some(first_line) = block.first_line() else {
            return;
        };
        if first_line.is_empty() {
            return;
        }

        // A block that is entirely a running header or a bare page number is
        // an artifact of the scan, not content.
        if is_running_header(full_text) || is_page_number(full_text) {
            return;
        }

        let lines = block.line_texts().unwrap_or_default();

        match detect_heading(&first_line, self.rules) {
            Some(term) => {
                self.finalize_open_entry();

                // Definition starts with whatever follows the term on the
                // first line, then the block's remaining lines.
                let mut buffer = Vec::new();
                let rest_of_first = first_line[term.len()..].trim();
                if !rest_of_first.is_empty() {
                    buffer.push(rest_of_first.to_string());
                }
                for line in lines.iter().skip(1) {
                    push_content_line(&mut buffer, line);
                }

                self.state = State::Collecting {
                    term,
                    page_idx,
                    buffer,
                };
            }
            None => {
                if let State::Collecting { buffer, .. } = &mut self.state {
                    for line in &lines {
                        push_content_line(buffer, line);
                    }
                }
            }
        }
    }

    /// Closes any open entry and returns everything accumulated so far, in
    /// document order.
    pub fn finish(mut self) -> Vec<Entry> {
        self.finalize_open_entry();
        self.entries
    }

    fn finalize_open_entry(&mut self) {
        let state = std::mem::replace(&mut self.state, State::Idle);
        let State::Collecting {
            term,
            page_idx,
            buffer,
        } = state
        else {
            return;
        };
        if buffer.is_empty() {
            return;
        }

        let definition = clean_definition(&buffer.join(" "));
        if definition.is_empty() {
            return;
        }

        let is_cross_ref = is_cross_reference(&definition);
        self.entries.push(Entry {
            term,
            definition,
            page: page_idx + 1,
            is_cross_ref,
        });
    }
}

fn push_content_line(buffer: &mut Vec<String>, line: &str) {
    let line = line.trim();
    // Header and page-number lines can sit inside an otherwise ordinary
    // block; they are dropped rather than appended to the definition.
    if !line.is_empty() && !is_running_header(line) && !is_page_number(line) {
        buffer.push(line.to_string());
    }
}

/// Normalizes a raw definition: collapse whitespace runs, drop soft hyphens
/// left by line-break dehyphenation, and mend the double spaces their
/// removal leaves behind.
pub fn clean_definition(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let cleaned = collapsed.replace('\u{ad}', "");
    cleaned.replace("  ", " ").trim().to_string()
}

/// A definition that is nothing but a "See ..." pointer to another
/// headword.
pub fn is_cross_reference(definition: &str) -> bool {
    let d = definition.trim();
    if d.chars().count() >= 120 {
        return false;
    }
    XREF_SEE_RE.is_match(d) || XREF_PAREN_RE.is_match(d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{Line, Span};
    use pretty_assertions::assert_eq;

    fn block(lines: &[&str]) -> Block {
        Block::Text {
            lines: lines
                .iter()
                .map(|text| Line {
                    spans: vec![Span {
                        text: (*text).to_string(),
                    }],
                })
                .collect(),
        }
    }

    fn run(blocks: &[(&[&str], usize)]) -> Vec<Entry> {
        let rules = RuleSet::default();
        let mut acc = EntryAccumulator::new(&rules);
        for (lines, page_idx) in blocks {
            acc.feed_block(&block(lines), *page_idx);
        }
        acc.finish()
    }

    #[test]
    fn single_block_entry() {
        let entries = run(&[(
            &["mandrake The mandrake is a fertility symbol and protective charm."],
            2,
        )]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].term, "mandrake");
        assert_eq!(
            entries[0].definition,
            "The mandrake is a fertility symbol and protective charm."
        );
        assert_eq!(entries[0].page, 3);
        assert!(!entries[0].is_cross_ref);
    }

    #[test]
    fn continuation_block_is_appended() {
        let entries = run(&[
            (
                &["mandrake The mandrake is a fertility symbol and protective charm."],
                0,
            ),
            (&["It was harvested under strict ritual conditions."], 0),
        ]);
        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0].definition,
            "The mandrake is a fertility symbol and protective charm. \
             It was harvested under strict ritual conditions."
        );
    }

    #[test]
    fn continuation_carries_across_pages() {
        let entries = run(&[
            (&["phoenix The phoenix rises from its own ashes every"], 4),
            (&["five hundred years, renewed and made young again."], 5),
        ]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].page, 5);
        assert!(entries[0]
            .definition
            .ends_with("renewed and made young again."));
    }

    #[test]
    fn new_heading_closes_the_open_entry() {
        let entries = run(&[
            (
                &["mandrake The mandrake is a fertility symbol and protective charm."],
                0,
            ),
            (
                &["mistletoe The mistletoe was cut with a golden sickle."],
                0,
            ),
        ]);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].term, "mandrake");
        assert_eq!(entries[1].term, "mistletoe");
    }

    #[test]
    fn cross_reference_entry() {
        let entries = run(&[(&["aureole See halo."], 0)]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].term, "aureole");
        assert_eq!(entries[0].definition, "See halo.");
        assert!(entries[0].is_cross_ref);
    }

    #[test]
    fn running_header_block_is_dropped() {
        let entries = run(&[
            (&["AUTOMOBILE"], 0),
            (
                &["mandrake The mandrake is a fertility symbol and protective charm."],
                0,
            ),
            (&["AUTOMOBILE"], 0),
        ]);
        assert_eq!(entries.len(), 1);
        assert!(!entries[0].definition.contains("AUTOMOBILE"));
    }

    #[test]
    fn page_number_block_is_dropped() {
        let entries = run(&[
            (
                &["mandrake The mandrake is a fertility symbol and protective charm."],
                0,
            ),
            (&["311"], 0),
            (&["It was harvested under strict ritual conditions."], 0),
        ]);
        assert_eq!(entries.len(), 1);
        assert!(!entries[0].definition.contains("311"));
    }

    #[test]
    fn header_line_inside_block_is_dropped() {
        let entries = run(&[(
            &[
                "mandrake The mandrake is a fertility symbol and protective charm.",
                "MANDRAKE",
                "It was harvested under strict ritual conditions.",
            ],
            0,
        )]);
        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0].definition,
            "The mandrake is a fertility symbol and protective charm. \
             It was harvested under strict ritual conditions."
        );
    }

    #[test]
    fn idle_continuation_blocks_are_ignored() {
        let entries = run(&[
            (&["some stray prose before any entry begins at all."], 0),
            (
                &["mandrake The mandrake is a fertility symbol and protective charm."],
                0,
            ),
        ]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].term, "mandrake");
    }

    #[test]
    fn trailing_entry_is_finalized_at_end_of_input() {
        let entries = run(&[
            (
                &["mandrake The mandrake is a fertility symbol and protective charm."],
                0,
            ),
            (&["It was harvested under strict"], 0),
        ]);
        assert_eq!(entries.len(), 1);
        assert!(entries[0].definition.ends_with("under strict"));
    }

    #[test]
    fn image_blocks_are_skipped() {
        let rules = RuleSet::default();
        let mut acc = EntryAccumulator::new(&rules);
        acc.feed_block(
            &block(&[
                "mandrake The mandrake is a fertility symbol and protective charm.",
            ]),
            0,
        );
        acc.feed_block(&Block::Image, 0);
        let entries = acc.finish();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn clean_definition_is_idempotent() {
        let raw = "The  man\u{ad}drake   is a\tfertility symbol.";
        let once = clean_definition(raw);
        let twice = clean_definition(&once);
        assert_eq!(once, twice);
        assert_eq!(once, "The mandrake is a fertility symbol.");
    }

    #[test]
    fn long_see_definitions_are_not_cross_references() {
        let long = format!("See {}", "halo and many other radiant things ".repeat(5));
        assert!(!is_cross_reference(&long));
        assert!(is_cross_reference("(see also simurg)"));
    }
}

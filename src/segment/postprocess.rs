use std::collections::HashSet;

use crate::core::model::Entry;
use crate::core::rules::RuleSet;
use crate::segment::term_check::is_valid_term;

/// Final cleanup over the raw accumulator output: drop entries that slipped
/// past the pattern-level checks, then fold case-insensitive duplicate
/// terms into the earliest accepted entry.
///
/// Emission order equals order of first acceptance; merged continuations do
/// not move an entry.
pub fn post_process(entries: Vec<Entry>, rules: &RuleSet) -> Vec<Entry> {
    let mut cleaned: Vec<Entry> = Vec::new();
    let mut seen_terms: HashSet<String> = HashSet::new();

    for entry in entries {
        if entry.term.chars().count() < 2 {
            continue;
        }
        if entry.definition.chars().count() < 10 && !entry.is_cross_ref {
            continue;
        }
        if entry.term.ends_with(['.', ':', ';']) {
            continue;
        }
        if entry.term.chars().count() > 60 {
            continue;
        }
        let words: Vec<&str> = entry.term.split_whitespace().collect();
        if words.len() == 1
            && rules
                .single_word_exclusions
                .contains(entry.term.to_lowercase().as_str())
        {
            continue;
        }
        // Stricter post-hoc review: composite terms assembled during
        // accumulation can fail checks their pieces passed.
        if !is_valid_term(&entry.term, rules) {
            continue;
        }

        let term_lower = entry.term.to_lowercase();
        if seen_terms.contains(&term_lower) {
            // Likely a continuation that re-announced its headword; append
            // to the entry that already owns the term.
            if let Some(prev) = cleaned
                .iter_mut()
                .find(|prev| prev.term.to_lowercase() == term_lower)
            {
                prev.definition.push(' ');
                prev.definition.push_str(&entry.definition);
            }
            continue;
        }
        seen_terms.insert(term_lower);
        cleaned.push(entry);
    }

    cleaned
}

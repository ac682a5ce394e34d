use crate::core::rules::RuleSet;

/// Internal words that mark a multi-word candidate as a sentence fragment
/// on their own, regardless of how many other fillers appear.
const DECISIVE_INTERNALS: &[&str] = &["the", "is", "was", "are", "were"];

/// Checks whether a pattern-extracted candidate looks like a real headword
/// rather than a sentence fragment.
///
/// Real headwords: "abracadabra", "aqua vitae", "fiery curtain", "Abraham",
/// "Aurora Borealis". Fragments: "death and resurrection of", "pura in the",
/// "blue for", "Cabeiri The".
pub fn is_valid_term(term: &str, rules: &RuleSet) -> bool {
    let words: Vec<&str> = term.split_whitespace().collect();
    let (first, last) = match (words.first(), words.last()) {
        (Some(f), Some(l)) => (f.to_lowercase(), l.to_lowercase()),
        _ => return false,
    };

    if rules.sentence_starters.contains(first.as_str()) {
        return false;
    }
    if rules.fragment_enders.contains(last.as_str()) {
        return false;
    }
    if words.len() > 5 {
        return false;
    }

    // "death and resurrection of" carries "and" + "of"; compound headwords
    // like "aqua vitae" or "lapis lazuli" carry none.
    if words.len() >= 3 {
        let internals: Vec<String> = words[1..].iter().map(|w| w.to_lowercase()).collect();
        let filler_count = internals
            .iter()
            .filter(|w| rules.fragment_internals.contains(w.as_str()))
            .count();
        if filler_count >= 2 {
            return false;
        }
        if internals
            .iter()
            .any(|w| DECISIVE_INTERNALS.contains(&w.as_str()))
        {
            return false;
        }
    }

    true
}

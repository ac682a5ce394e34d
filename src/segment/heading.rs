use std::sync::LazyLock;

use regex::Regex;

use crate::core::rules::RuleSet;
use crate::segment::block_filter::is_running_header;
use crate::segment::term_check::is_valid_term;

// Lowercase term, an optional parenthetical aside that closes on the same
// line, then definition text opening with an uppercase letter or a quote:
// "abracadabra This charm was used..."
// "tower (see also house; ziggurat) The tower..."
static LOWER_TERM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^([a-z][a-z\s,'\-]+?)(?:\s*\([^)]*\))?\s+(["'A-Z].*)"#).unwrap()
});

// Lowercase term followed by a "(see ..." parenthetical that spills past
// the end of the line: "bird (see also anqa; bustard; cock; crane; ..."
static SPILLING_REF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-z][a-z\s,'\-]+?)\s+\([Ss]ee\s[^)]*$").unwrap());

// Run of capitalized words followed by another capitalized word opening the
// definition: "Abraham The Old Testament..." or "Aurora Borealis A manifestation..."
static PROPER_NOUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)\s+([A-Z][a-z].*)").unwrap());

// "aureole See halo." / "mandorla See under almond."
static SEE_REF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-z][a-z\s,'\-]+?)\s+[Ss]ee\s+").unwrap());

// "anqa (see also simurg)" with no further text on the line.
static CLOSED_REF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z][a-z\s,'\-]+?)\s+\([Ss]ee\s+(?:also\s+)?[^)]+\)").unwrap()
});

type Matcher = fn(&str, &RuleSet) -> Option<String>;

/// Pattern rules in priority order; the first one that produces a term wins.
const MATCHERS: [Matcher; 5] = [
    match_lowercase_heading,
    match_spilling_reference,
    match_proper_noun_heading,
    match_see_reference,
    match_closed_reference,
];

/// Decides whether a block's first line opens a new entry, returning the
/// headword if so.
///
/// This is only ever called on the FIRST line of a text block. Entries can
/// begin at block boundaries alone, which is what keeps capitalized words
/// inside continuation prose from being misread as headwords.
pub fn detect_heading(first_line: &str, rules: &RuleSet) -> Option<String> {
    let line = first_line.trim();
    if line.chars().count() < 5 {
        return None;
    }
    MATCHERS.iter().find_map(|matcher| matcher(line, rules))
}

fn match_lowercase_heading(line: &str, rules: &RuleSet) -> Option<String> {
    let caps = LOWER_TERM_RE.captures(line)?;
    let term = trim_term(&caps[1]);
    let rest = &caps[2];
    if term_len_in(&term, 2, 50) && rest.chars().count() >= 10 && is_valid_term(&term, rules) {
        return Some(term);
    }
    None
}

fn match_spilling_reference(line: &str, rules: &RuleSet) -> Option<String> {
    let caps = SPILLING_REF_RE.captures(line)?;
    let term = trim_term(&caps[1]);
    if term_len_in(&term, 2, 50) && is_valid_term(&term, rules) {
        return Some(term);
    }
    None
}

fn match_proper_noun_heading(line: &str, rules: &RuleSet) -> Option<String> {
    let caps = PROPER_NOUN_RE.captures(line)?;

    // The greedy capture swallows the capitalized opening of the definition;
    // trim trailing words that read as common English back off the name.
    // "Abraham The Old" keeps only "Abraham"; "Aurora Borealis" is untouched.
    let mut parts: Vec<&str> = caps[1].split_whitespace().collect();
    while parts.len() > 1 {
        let last = parts.last().unwrap().to_lowercase();
        if rules.trim_words.contains(last.as_str()) {
            parts.pop();
        } else {
            break;
        }
    }
    let term = parts.join(" ");

    let rest = line[term.len()..].trim();
    if term.chars().count() <= 35
        && rest.chars().count() >= 10
        && !is_running_header(&term)
        && is_valid_term(&term, rules)
    {
        return Some(term);
    }
    None
}

fn match_see_reference(line: &str, _rules: &RuleSet) -> Option<String> {
    let caps = SEE_REF_RE.captures(line)?;
    let term = trim_term(&caps[1]);
    if term_len_in(&term, 2, 50) {
        return Some(term);
    }
    None
}

fn match_closed_reference(line: &str, _rules: &RuleSet) -> Option<String> {
    let caps = CLOSED_REF_RE.captures(line)?;
    let term = trim_term(&caps[1]);
    if term_len_in(&term, 2, 50) {
        return Some(term);
    }
    None
}

fn trim_term(raw: &str) -> String {
    raw.trim().trim_end_matches(['.', ',']).to_string()
}

fn term_len_in(term: &str, min: usize, max: usize) -> bool {
    let len = term.chars().count();
    (min..=max).contains(&len)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(line: &str) -> Option<String> {
        detect_heading(line, &RuleSet::default())
    }

    #[test]
    fn lowercase_term_with_capitalized_definition() {
        assert_eq!(
            detect("abracadabra This charm was used against fevers.").as_deref(),
            Some("abracadabra")
        );
        assert_eq!(
            detect("mandrake The mandrake is a fertility symbol and protective charm.").as_deref(),
            Some("mandrake")
        );
    }

    #[test]
    fn compound_lowercase_term() {
        assert_eq!(
            detect("fiery curtain The fiery curtain constitutes a barrier.").as_deref(),
            Some("fiery curtain")
        );
        assert_eq!(
            detect("aqua vitae The alchemists sought this essence.").as_deref(),
            Some("aqua vitae")
        );
    }

    #[test]
    fn term_with_closed_parenthetical_aside() {
        assert_eq!(
            detect("tower (see also house; ziggurat) The tower reaches toward heaven.").as_deref(),
            Some("tower")
        );
    }

    #[test]
    fn term_with_spilling_parenthetical() {
        assert_eq!(
            detect("bird (see also anqa; bustard; cock; crane; crow;").as_deref(),
            Some("bird")
        );
    }

    #[test]
    fn proper_noun_term_trims_definition_words() {
        assert_eq!(
            detect("Abraham The Old Testament patriarch appears widely.").as_deref(),
            Some("Abraham")
        );
    }

    #[test]
    fn proper_noun_compound_is_kept_whole() {
        assert_eq!(
            detect("Aurora Borealis The northern lights burn in the winter sky.").as_deref(),
            Some("Aurora Borealis")
        );
    }

    #[test]
    fn see_cross_reference() {
        assert_eq!(detect("aureole See halo.").as_deref(), Some("aureole"));
        assert_eq!(
            detect("mandorla See under almond.").as_deref(),
            Some("mandorla")
        );
    }

    #[test]
    fn closed_parenthetical_cross_reference() {
        assert_eq!(detect("anqa (see also simurg)").as_deref(), Some("anqa"));
    }

    #[test]
    fn mid_sentence_capitalization_is_rejected() {
        assert_eq!(detect("The African legend says that Both St John baptized there."), None);
        assert_eq!(detect("It Was A dark and stormy night in the village."), None);
    }

    #[test]
    fn short_lines_never_match() {
        assert_eq!(detect("ox A"), None);
        assert_eq!(detect(""), None);
    }

    #[test]
    fn plain_prose_continuation_is_rejected() {
        assert_eq!(
            detect("harvested under strict ritual conditions at night."),
            None
        );
    }

    #[test]
    fn fragment_terms_fail_validation() {
        // "death and resurrection of" ends in a function word.
        assert_eq!(
            detect("death and resurrection of The god dies each winter."),
            None
        );
    }

    #[test]
    fn definition_opening_with_quote_is_accepted() {
        assert_eq!(
            detect("abraxas \"Abraxas\" was engraved on Gnostic gems.").as_deref(),
            Some("abraxas")
        );
    }
}

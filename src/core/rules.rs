use std::collections::HashSet;

/// Words that open ordinary sentences rather than headwords. A candidate
/// term starting with one of these is a continuation fragment.
const SENTENCE_STARTERS: &[&str] = &[
    "the", "a", "an", "in", "on", "at", "by", "for", "to", "of", "it", "its", "this", "that",
    "these", "those", "they", "them", "he", "she", "his", "her", "we", "our", "but", "and", "or",
    "if", "as", "so", "yet", "nor", "not", "no", "all", "any", "both", "each", "every", "some",
    "such", "than", "one", "two", "three", "four", "five", "six", "seven", "eight", "from", "with",
    "into", "upon", "over", "under", "through", "between", "among", "about", "during", "before",
    "after", "since", "while", "when", "where", "which", "what", "who", "how", "there", "here",
    "thus", "hence", "therefore", "however", "moreover", "furthermore", "nevertheless",
    "according", "although", "because", "whether", "like", "many", "most", "much", "more", "less",
    "few", "other", "another", "only", "just", "even", "still", "also", "too",
];

/// Function words no real headword ends with.
const FRAGMENT_ENDERS: &[&str] = &[
    "the", "a", "an", "of", "in", "on", "at", "to", "for", "by", "with", "from", "and", "or",
    "but", "as", "is", "was", "are", "were", "be", "been", "being", "has", "had", "have", "its",
    "his", "her", "he", "she", "it", "they", "we", "our", "their", "that", "this", "those",
    "these", "which", "who", "whom", "not", "no", "nor", "so", "than", "if", "st",
];

/// Filler words that, appearing inside a multi-word candidate, mark it as a
/// sentence fragment rather than a compound headword.
const FRAGMENT_INTERNALS: &[&str] = &[
    "the", "a", "an", "is", "was", "are", "were", "be", "that", "which", "who", "whom", "has",
    "had", "have", "not", "also", "been", "being", "its", "his", "her", "their", "our", "my",
    "your", "can", "could", "would", "should", "will", "shall", "may", "might", "must", "do",
    "does", "did", "very", "just", "even", "still",
];

/// Capitalized words trimmed off the tail of a proper-noun candidate; they
/// belong to the definition ("Abraham The Old ..."), not the name.
const TRIM_WORDS: &[&str] = &[
    "the", "a", "an", "in", "on", "at", "as", "or", "and", "its", "this", "that", "these",
    "those", "all", "old", "one", "two", "for", "but", "not", "from", "with", "new", "first",
    "second", "third", "last", "next", "other", "great", "good", "long", "high", "deep", "early",
    "late", "most", "many", "some", "each", "every", "such",
];

/// Single-word candidates that are common English rather than headwords,
/// caught at the post-processing stage.
const SINGLE_WORD_EXCLUSIONS: &[&str] = &[
    "very", "also", "just", "even", "still", "yet", "only", "often", "always", "never", "rather",
    "quite", "traditional", "finally", "similarly", "conversely", "originally", "essentially",
    "generally", "consequently", "alternatively", "accordingly", "subsequently", "nevertheless",
    "furthermore", "moreover", "whereas", "whereby", "thereby", "nonetheless", "otherwise",
    "indeed", "certainly", "perhaps", "probably", "possibly", "apparently", "recently", "clearly",
    "obviously", "simply", "merely", "purely", "primarily", "mainly", "largely", "partly",
    "already", "sometimes", "everywhere", "anywhere", "nowhere",
];

/// Immutable word-list configuration for the term validator and heading
/// detector. Built once and passed by reference, so both stay pure
/// functions of (text, rules).
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub sentence_starters: HashSet<&'static str>,
    pub fragment_enders: HashSet<&'static str>,
    pub fragment_internals: HashSet<&'static str>,
    pub trim_words: HashSet<&'static str>,
    pub single_word_exclusions: HashSet<&'static str>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            sentence_starters: SENTENCE_STARTERS.iter().copied().collect(),
            fragment_enders: FRAGMENT_ENDERS.iter().copied().collect(),
            fragment_internals: FRAGMENT_INTERNALS.iter().copied().collect(),
            trim_words: TRIM_WORDS.iter().copied().collect(),
            single_word_exclusions: SINGLE_WORD_EXCLUSIONS.iter().copied().collect(),
        }
    }
}

//! Normalization shared by training and classification.
//!
//! Both phases must run exactly this code: any drift between the tokens seen
//! at fit time and at predict time silently degrades accuracy.

use std::collections::HashSet;
use std::sync::LazyLock;
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

/// Characters stripped from every field. The apostrophe is kept so that
/// contractions still match the stopword list.
pub const PUNCTUATION: &str = "!\"#$%&()*+,-./:;<=>?@[\\]^_`{|}~";

/// Closed-class English words that are never modeled.
pub const STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any",
    "are", "aren't", "as", "at", "be", "because", "been", "before", "being", "below",
    "between", "both", "but", "by", "can't", "cannot", "could", "couldn't", "did",
    "didn't", "do", "does", "doesn't", "doing", "don't", "down", "during", "each", "few",
    "for", "from", "further", "had", "hadn't", "has", "hasn't", "have", "haven't",
    "having", "he", "he'd", "he'll", "he's", "her", "here", "here's", "hers", "herself",
    "him", "himself", "his", "how", "how's", "i", "i'd", "i'll", "i'm", "i've", "if", "in",
    "into", "is", "isn't", "it", "it's", "its", "itself", "let's", "me", "more", "most",
    "mustn't", "my", "myself", "no", "nor", "not", "of", "off", "on", "once", "only", "or",
    "other", "ought", "our", "ours", "ourselves", "out", "over", "own", "same", "shan't",
    "she", "she'd", "she'll", "she's", "should", "shouldn't", "so", "some", "such", "than",
    "that", "that's", "the", "their", "theirs", "them", "themselves", "then", "there",
    "there's", "these", "they", "they'd", "they'll", "they're", "they've", "this", "those",
    "through", "to", "too", "under", "until", "up", "very", "was", "wasn't", "we", "we'd",
    "we'll", "we're", "we've", "were", "weren't", "what", "what's", "when", "when's",
    "where", "where's", "which", "while", "who", "who's", "whom", "why", "why's", "with",
    "won't", "would", "wouldn't", "you", "you'd", "you'll", "you're", "you've", "your",
    "yours", "yourself", "yourselves",
];

/// Digit forms outside the decimal-number category that still count as
/// digits: superscripts, subscripts, circled and parenthesized digits.
const DIGIT_FORMS: &[(char, char)] = &[
    ('\u{B2}', '\u{B3}'), ('\u{B9}', '\u{B9}'), ('\u{1369}', '\u{1371}'),
    ('\u{19DA}', '\u{19DA}'), ('\u{2070}', '\u{2070}'), ('\u{2074}', '\u{2079}'),
    ('\u{2080}', '\u{2089}'), ('\u{2460}', '\u{2468}'), ('\u{2474}', '\u{247C}'),
    ('\u{2488}', '\u{2490}'), ('\u{24EA}', '\u{24EA}'), ('\u{24F5}', '\u{24FD}'),
    ('\u{24FF}', '\u{24FF}'), ('\u{2776}', '\u{277E}'), ('\u{2780}', '\u{2788}'),
    ('\u{278A}', '\u{2792}'), ('\u{10A40}', '\u{10A43}'), ('\u{10E60}', '\u{10E68}'),
    ('\u{11052}', '\u{1105A}'), ('\u{1F100}', '\u{1F10A}'),
];

static STOPWORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOPWORDS.iter().copied().collect());

pub fn is_stopword(word: &str) -> bool {
    STOPWORD_SET.contains(word)
}

fn is_digit(c: char) -> bool {
    c.general_category() == GeneralCategory::DecimalNumber
        || DIGIT_FORMS.iter().any(|&(lo, hi)| (lo..=hi).contains(&c))
}

fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(c)
}

/// Normalizes a single whitespace-free field, returning `None` when the
/// field carries no signal (empty, all digits, or a stopword).
pub fn normalize_token(field: &str) -> Option<String> {
    let stripped: String = field.chars().filter(|&c| !is_punctuation(c)).collect();
    let lowered = stripped.to_lowercase();
    let word = lowered.trim();

    if word.is_empty() || word.chars().all(is_digit) || is_stopword(word) {
        return None;
    }

    Some(word.to_string())
}

/// Normalizes every field in order, dropping the ones that carry no signal.
pub fn tokenize<'a, I>(fields: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    fields.into_iter().filter_map(normalize_token).collect()
}

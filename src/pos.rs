//! Part-of-speech tagging.
//!
//! A lexicon-and-suffix tagger producing Penn-Treebank-style tags. Only the
//! leading letter of a tag feeds the lemmatization category table, so the
//! tagger favors robust coarse decisions over fine-grained accuracy.

use log::debug;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Cardinal-number words, tagged `CD` so they stay untouched downstream.
const NUMBER_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    "hundred", "thousand", "million", "billion", "trillion",
];

/// Irregular simple-past forms the suffix rules cannot recognize.
const IRREGULAR_PAST: &[&str] = &[
    "ran", "ate", "went", "saw", "took", "gave", "came", "made", "said", "told", "got", "found",
    "thought", "knew", "began", "broke", "brought", "bought", "caught", "chose", "drank", "drove",
    "fell", "felt", "flew", "forgot", "froze", "grew", "heard", "held", "kept", "left", "lost",
    "meant", "met", "paid", "rode", "rose", "sang", "sat", "slept", "sold", "spoke", "spent",
    "stood", "swam", "taught", "threw", "understood", "woke", "wore", "won", "wrote",
];

/// Irregular past participles.
const IRREGULAR_PARTICIPLE: &[&str] = &[
    "gone", "seen", "taken", "given", "gotten", "known", "begun", "broken", "chosen", "done",
    "drunk", "driven", "eaten", "fallen", "flown", "forgotten", "frozen", "grown", "hidden",
    "ridden", "risen", "sung", "swum", "spoken", "thrown", "woken", "worn", "written",
];

/// Frequent adverbs that do not carry the `-ly` suffix.
const BARE_ADVERBS: &[&str] = &[
    "never", "always", "often", "sometimes", "soon", "already", "still", "yet", "quite",
    "almost", "away", "back", "ever", "far", "fast", "well", "today", "tomorrow", "yesterday",
    "together", "maybe", "perhaps", "indeed", "instead", "anyway", "anywhere", "everywhere",
    "somewhere", "nowhere", "forever", "meanwhile", "moreover", "otherwise", "seldom", "twice",
];

/// Comparative adjectives.
const COMPARATIVES: &[&str] = &[
    "better", "worse", "bigger", "smaller", "larger", "older", "younger", "higher", "lower",
    "stronger", "weaker", "faster", "slower", "easier", "harder", "happier", "earlier", "later",
    "greater", "newer", "longer", "shorter", "deeper", "cheaper", "closer", "wider", "hotter",
    "colder", "warmer", "cooler", "nicer", "safer", "simpler", "richer", "poorer", "lighter",
    "heavier", "darker", "brighter", "freer", "gentler", "further", "farther", "elder",
];

/// Superlative adjectives.
const SUPERLATIVES: &[&str] = &[
    "best", "worst", "biggest", "smallest", "largest", "oldest", "youngest", "highest", "lowest",
    "strongest", "weakest", "fastest", "slowest", "easiest", "hardest", "happiest", "earliest",
    "latest", "greatest", "newest", "longest", "shortest", "deepest", "cheapest", "closest",
    "widest", "hottest", "coldest", "warmest", "coolest", "nicest", "safest", "simplest",
    "richest", "poorest", "lightest", "heaviest", "darkest", "brightest", "freest", "gentlest",
    "furthest", "farthest", "eldest",
];

/// Auxiliaries, modals, and other closed-class forms with fixed tags.
const CLOSED_CLASS: &[(&str, &str)] = &[
    ("be", "VB"),
    ("am", "VBP"),
    ("is", "VBZ"),
    ("are", "VBP"),
    ("was", "VBD"),
    ("were", "VBD"),
    ("been", "VBN"),
    ("being", "VBG"),
    ("have", "VBP"),
    ("has", "VBZ"),
    ("had", "VBD"),
    ("having", "VBG"),
    ("do", "VB"),
    ("does", "VBZ"),
    ("did", "VBD"),
    ("doing", "VBG"),
    ("will", "MD"),
    ("would", "MD"),
    ("can", "MD"),
    ("could", "MD"),
    ("shall", "MD"),
    ("should", "MD"),
    ("may", "MD"),
    ("might", "MD"),
    ("must", "MD"),
];

/// Common `-ing` nouns that the gerund suffix rule would otherwise misread.
const ING_NOUNS: &[&str] = &[
    "thing", "something", "anything", "nothing", "everything", "morning", "evening", "building",
    "ceiling", "feeling", "meeting", "wedding", "clothing", "spring", "string",
];

/// Suffixes that mark derived adjectives.
const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "ish", "able", "ible", "less", "ic", "al"];

/// Lexicon of tokens with known tags, shared read-only across calls.
static LEXICON: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(build_lexicon);

fn build_lexicon() -> HashMap<&'static str, &'static str> {
    let mut lexicon = HashMap::new();

    for word in NUMBER_WORDS {
        lexicon.insert(*word, "CD");
    }
    for word in IRREGULAR_PAST {
        lexicon.insert(*word, "VBD");
    }
    for word in IRREGULAR_PARTICIPLE {
        lexicon.insert(*word, "VBN");
    }
    for word in BARE_ADVERBS {
        lexicon.insert(*word, "RB");
    }
    for word in COMPARATIVES {
        lexicon.insert(*word, "JJR");
    }
    for word in SUPERLATIVES {
        lexicon.insert(*word, "JJS");
    }
    for (word, tag) in CLOSED_CLASS {
        lexicon.insert(*word, *tag);
    }
    for word in ING_NOUNS {
        lexicon.insert(*word, "NN");
    }

    debug!("Built part-of-speech lexicon with {} entries", lexicon.len());
    lexicon
}

/// Tags a single token with a Penn-Treebank-style tag.
///
/// Resolution order: digit strings, lexicon lookup, hyphenated cardinal
/// compounds (`"twenty-one"`), suffix heuristics, then the noun default.
pub fn tag_token(token: &str) -> &'static str {
    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        return "CD";
    }
    if let Some(tag) = LEXICON.get(token) {
        return tag;
    }
    if token.contains('-')
        && token
            .split('-')
            .all(|part| LEXICON.get(part).map_or(false, |tag| *tag == "CD"))
    {
        return "CD";
    }
    suffix_tag(token)
}

/// Tags a sequence of tokens, pairing each token with its tag.
pub fn tag_sequence(tokens: &[String]) -> Vec<(&str, &'static str)> {
    tokens
        .iter()
        .map(|token| (token.as_str(), tag_token(token)))
        .collect()
}

fn suffix_tag(token: &str) -> &'static str {
    let n = token.len();
    if n > 3 && token.ends_with("ly") {
        "RB"
    } else if n > 4 && token.ends_with("ing") {
        "VBG"
    } else if n > 3 && token.ends_with("ed") {
        "VBD"
    } else if ADJECTIVE_SUFFIXES
        .iter()
        .any(|suffix| n > suffix.len() + 1 && token.ends_with(suffix))
    {
        "JJ"
    } else if n > 3
        && token.ends_with('s')
        && !token.ends_with("ss")
        && !token.ends_with("us")
        && !token.ends_with("is")
    {
        "NNS"
    } else {
        "NN"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_strings_are_cardinals() {
        assert_eq!(tag_token("3"), "CD");
        assert_eq!(tag_token("1984"), "CD");
    }

    #[test]
    fn test_number_words_are_cardinals() {
        assert_eq!(tag_token("three"), "CD");
        assert_eq!(tag_token("twenty"), "CD");
        assert_eq!(tag_token("twenty-one"), "CD");
    }

    #[test]
    fn test_suffix_heuristics() {
        assert_eq!(tag_token("quickly"), "RB");
        assert_eq!(tag_token("chasing"), "VBG");
        assert_eq!(tag_token("walked"), "VBD");
        assert_eq!(tag_token("beautiful"), "JJ");
        assert_eq!(tag_token("cats"), "NNS");
    }

    #[test]
    fn test_noun_default() {
        assert_eq!(tag_token("cat"), "NN");
        assert_eq!(tag_token("hello"), "NN");
        assert_eq!(tag_token("2nd"), "NN");
    }

    #[test]
    fn test_short_tokens_avoid_suffix_rules() {
        assert_eq!(tag_token("red"), "NN");
        assert_eq!(tag_token("king"), "NN");
        assert_eq!(tag_token("gas"), "NN");
    }

    #[test]
    fn test_irregular_verbs() {
        assert_eq!(tag_token("ran"), "VBD");
        assert_eq!(tag_token("written"), "VBN");
        assert_eq!(tag_token("is"), "VBZ");
    }

    #[test]
    fn test_ing_nouns() {
        assert_eq!(tag_token("morning"), "NN");
        assert_eq!(tag_token("thing"), "NN");
    }

    #[test]
    fn test_plural_exclusions() {
        assert_eq!(tag_token("glass"), "NN");
        assert_eq!(tag_token("bonus"), "NN");
        assert_eq!(tag_token("basis"), "NN");
    }

    #[test]
    fn test_tag_sequence_pairs() {
        let tokens: Vec<String> = ["three", "cats"].iter().map(|s| s.to_string()).collect();
        let tagged = tag_sequence(&tokens);
        assert_eq!(tagged, vec![("three", "CD"), ("cats", "NNS")]);
    }
}

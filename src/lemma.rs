//! Lemmatization: reduction of tokens to their dictionary base form.
//!
//! Exception tables are consulted first; otherwise ordered suffix
//! detachment rules apply, with doubled-consonant and silent-`e` repair on
//! the detached stem. A token no rule fits is returned unchanged.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The four lemmatization categories.
///
/// Every Penn-Treebank-style tag maps onto one of these; the category
/// selects which exception table and detachment rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LemmaCategory {
    /// Adjectives (`J*` tags).
    Adjective,
    /// Nouns (`N*` tags, and the default for unmatched tags).
    Noun,
    /// Verbs (`V*` tags).
    Verb,
    /// Adverbs (`R*` tags).
    Adverb,
}

impl LemmaCategory {
    /// Maps a Penn-Treebank-style tag to its lemmatization category.
    ///
    /// The mapping is keyed by the tag's leading letter: `J` is adjective,
    /// `N` noun, `V` verb, `R` adverb. Any other letter falls back to noun.
    pub fn from_tag(tag: &str) -> Self {
        match tag.as_bytes().first() {
            Some(b'J') => Self::Adjective,
            Some(b'V') => Self::Verb,
            Some(b'R') => Self::Adverb,
            _ => Self::Noun,
        }
    }
}

type ExceptionMap = HashMap<&'static str, &'static str>;

fn exception_map(pairs: &[(&'static str, &'static str)]) -> ExceptionMap {
    pairs.iter().copied().collect()
}

/// Irregular noun plurals, plus plural-looking forms the rules misread.
static NOUN_EXCEPTIONS: Lazy<ExceptionMap> = Lazy::new(|| {
    exception_map(&[
        ("men", "man"),
        ("women", "woman"),
        ("children", "child"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("geese", "goose"),
        ("mice", "mouse"),
        ("lice", "louse"),
        ("oxen", "ox"),
        ("knives", "knife"),
        ("wives", "wife"),
        ("lives", "life"),
        ("quizzes", "quiz"),
        ("buses", "bus"),
        ("tomatoes", "tomato"),
        ("potatoes", "potato"),
        ("heroes", "hero"),
        ("echoes", "echo"),
        ("shoes", "shoe"),
        ("movies", "movie"),
        ("cookies", "cookie"),
        ("analyses", "analysis"),
        ("crises", "crisis"),
        ("theses", "thesis"),
        ("phenomena", "phenomenon"),
        ("criteria", "criterion"),
        ("indices", "index"),
        ("matrices", "matrix"),
        ("appendices", "appendix"),
        ("news", "news"),
        ("species", "species"),
        ("series", "series"),
        ("lens", "lens"),
    ])
});

/// Irregular verb forms and stems the detachment rules cannot repair.
static VERB_EXCEPTIONS: Lazy<ExceptionMap> = Lazy::new(|| {
    exception_map(&[
        ("am", "be"),
        ("is", "be"),
        ("are", "be"),
        ("was", "be"),
        ("were", "be"),
        ("been", "be"),
        ("being", "be"),
        ("has", "have"),
        ("had", "have"),
        ("having", "have"),
        ("does", "do"),
        ("did", "do"),
        ("done", "do"),
        ("doing", "do"),
        ("goes", "go"),
        ("went", "go"),
        ("gone", "go"),
        ("going", "go"),
        ("ran", "run"),
        ("ate", "eat"),
        ("eaten", "eat"),
        ("saw", "see"),
        ("seen", "see"),
        ("took", "take"),
        ("taken", "take"),
        ("gave", "give"),
        ("given", "give"),
        ("came", "come"),
        ("made", "make"),
        ("said", "say"),
        ("told", "tell"),
        ("got", "get"),
        ("gotten", "get"),
        ("found", "find"),
        ("thought", "think"),
        ("knew", "know"),
        ("known", "know"),
        ("began", "begin"),
        ("begun", "begin"),
        ("broke", "break"),
        ("broken", "break"),
        ("brought", "bring"),
        ("bought", "buy"),
        ("caught", "catch"),
        ("chose", "choose"),
        ("chosen", "choose"),
        ("drank", "drink"),
        ("drunk", "drink"),
        ("drove", "drive"),
        ("driven", "drive"),
        ("fell", "fall"),
        ("fallen", "fall"),
        ("felt", "feel"),
        ("flew", "fly"),
        ("flown", "fly"),
        ("forgot", "forget"),
        ("forgotten", "forget"),
        ("froze", "freeze"),
        ("frozen", "freeze"),
        ("grew", "grow"),
        ("grown", "grow"),
        ("heard", "hear"),
        ("held", "hold"),
        ("hidden", "hide"),
        ("kept", "keep"),
        ("left", "leave"),
        ("lost", "lose"),
        ("meant", "mean"),
        ("met", "meet"),
        ("paid", "pay"),
        ("rode", "ride"),
        ("ridden", "ride"),
        ("rose", "rise"),
        ("risen", "rise"),
        ("sang", "sing"),
        ("sung", "sing"),
        ("sat", "sit"),
        ("slept", "sleep"),
        ("sold", "sell"),
        ("spoke", "speak"),
        ("spoken", "speak"),
        ("spent", "spend"),
        ("stood", "stand"),
        ("swam", "swim"),
        ("swum", "swim"),
        ("taught", "teach"),
        ("threw", "throw"),
        ("thrown", "throw"),
        ("understood", "understand"),
        ("woke", "wake"),
        ("woken", "wake"),
        ("wore", "wear"),
        ("worn", "wear"),
        ("won", "win"),
        ("wrote", "write"),
        ("written", "write"),
        ("dying", "die"),
        ("died", "die"),
        ("lying", "lie"),
        ("lied", "lie"),
        ("tying", "tie"),
        ("tied", "tie"),
        ("used", "use"),
        ("using", "use"),
        ("freed", "free"),
    ])
});

/// Irregular comparatives/superlatives and silent-`e` stems.
static ADJECTIVE_EXCEPTIONS: Lazy<ExceptionMap> = Lazy::new(|| {
    exception_map(&[
        ("better", "good"),
        ("best", "good"),
        ("worse", "bad"),
        ("worst", "bad"),
        ("larger", "large"),
        ("largest", "large"),
        ("simpler", "simple"),
        ("simplest", "simple"),
        ("gentler", "gentle"),
        ("gentlest", "gentle"),
        ("freer", "free"),
        ("freest", "free"),
        ("elder", "old"),
        ("eldest", "old"),
        ("further", "far"),
        ("farther", "far"),
        ("furthest", "far"),
        ("farthest", "far"),
    ])
});

/// Irregular adverbs; regular adverbs are already base forms.
static ADVERB_EXCEPTIONS: Lazy<ExceptionMap> = Lazy::new(|| {
    exception_map(&[
        ("better", "well"),
        ("best", "well"),
        ("further", "far"),
        ("farther", "far"),
    ])
});

/// Reduces a token to its dictionary base form under the given category.
pub fn lemmatize(token: &str, category: LemmaCategory) -> String {
    match category {
        LemmaCategory::Noun => lemmatize_noun(token),
        LemmaCategory::Verb => lemmatize_verb(token),
        LemmaCategory::Adjective => lemmatize_adjective(token),
        LemmaCategory::Adverb => lemmatize_adverb(token),
    }
}

fn lemmatize_noun(token: &str) -> String {
    if let Some(base) = NOUN_EXCEPTIONS.get(token) {
        return (*base).to_string();
    }
    let n = token.len();
    for (suffix, replacement) in [
        ("sses", "ss"),
        ("ches", "ch"),
        ("shes", "sh"),
        ("xes", "x"),
        ("ves", "f"),
        ("ies", "y"),
    ] {
        if n > suffix.len() + 1 && token.ends_with(suffix) {
            return format!("{}{}", &token[..n - suffix.len()], replacement);
        }
    }
    if n > 3
        && token.ends_with('s')
        && !token.ends_with("ss")
        && !token.ends_with("us")
        && !token.ends_with("is")
    {
        return token[..n - 1].to_string();
    }
    token.to_string()
}

fn lemmatize_verb(token: &str) -> String {
    if let Some(base) = VERB_EXCEPTIONS.get(token) {
        return (*base).to_string();
    }
    let n = token.len();

    // -eed keeps its stem unless the head carries at least one
    // vowel-consonant sequence ("agreed" -> "agree", "feed" unchanged).
    if token.ends_with("eed") {
        if measure(&token[..n - 3]) > 0 {
            return token[..n - 1].to_string();
        }
        return token.to_string();
    }

    if n > 4 && (token.ends_with("ies") || token.ends_with("ied")) {
        return format!("{}y", &token[..n - 3]);
    }
    for suffix in ["ches", "shes", "sses", "xes"] {
        if n > suffix.len() + 1 && token.ends_with(suffix) {
            return token[..n - 2].to_string();
        }
    }
    if n > 5 && token.ends_with("ing") {
        let stem = &token[..n - 3];
        if has_vowel(stem) {
            return repair_stem(stem);
        }
        return token.to_string();
    }
    if n > 4 && token.ends_with("ed") {
        let stem = &token[..n - 2];
        if has_vowel(stem) {
            return repair_stem(stem);
        }
        return token.to_string();
    }
    if n > 3
        && token.ends_with('s')
        && !token.ends_with("ss")
        && !token.ends_with("us")
        && !token.ends_with("is")
    {
        return token[..n - 1].to_string();
    }
    token.to_string()
}

fn lemmatize_adjective(token: &str) -> String {
    if let Some(base) = ADJECTIVE_EXCEPTIONS.get(token) {
        return (*base).to_string();
    }
    let n = token.len();
    if n > 5 && (token.ends_with("iest") || token.ends_with("ier")) {
        let cut = if token.ends_with("iest") { 4 } else { 3 };
        return format!("{}y", &token[..n - cut]);
    }
    if n > 4 && token.ends_with("est") {
        return repair_stem(&token[..n - 3]);
    }
    if n > 3 && token.ends_with("er") {
        return repair_stem(&token[..n - 2]);
    }
    token.to_string()
}

fn lemmatize_adverb(token: &str) -> String {
    match ADVERB_EXCEPTIONS.get(token) {
        Some(base) => (*base).to_string(),
        None => token.to_string(),
    }
}

/// Repairs a detached stem: undoubles a final consonant pair and restores
/// a silent `e` after a short consonant-vowel-consonant ending.
fn repair_stem(stem: &str) -> String {
    let bytes = stem.as_bytes();
    let n = bytes.len();
    if n >= 3
        && bytes[n - 1] == bytes[n - 2]
        && !is_vowel_at(bytes, n - 1)
        && !matches!(bytes[n - 1], b'l' | b's' | b'z')
    {
        return stem[..n - 1].to_string();
    }
    if measure(stem) == 1 && ends_cvc(bytes) {
        return format!("{}e", stem);
    }
    stem.to_string()
}

fn has_vowel(stem: &str) -> bool {
    let bytes = stem.as_bytes();
    (0..bytes.len()).any(|i| is_vowel_at(bytes, i))
}

fn is_vowel_at(bytes: &[u8], i: usize) -> bool {
    match bytes[i] {
        b'a' | b'e' | b'i' | b'o' | b'u' => true,
        b'y' => i > 0 && !is_vowel_at(bytes, i - 1),
        _ => false,
    }
}

/// Counts vowel-to-consonant transitions, the `m` of a `[C](VC)^m[V]`
/// decomposition.
fn measure(stem: &str) -> usize {
    let bytes = stem.as_bytes();
    let mut m = 0;
    let mut prev_vowel = false;
    for i in 0..bytes.len() {
        let vowel = is_vowel_at(bytes, i);
        if prev_vowel && !vowel {
            m += 1;
        }
        prev_vowel = vowel;
    }
    m
}

fn ends_cvc(bytes: &[u8]) -> bool {
    let n = bytes.len();
    n >= 3
        && !is_vowel_at(bytes, n - 1)
        && !matches!(bytes[n - 1], b'w' | b'x' | b'y')
        && is_vowel_at(bytes, n - 2)
        && !is_vowel_at(bytes, n - 3)
}

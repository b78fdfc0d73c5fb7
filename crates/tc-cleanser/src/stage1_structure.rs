//! Stage 1: Structural cleaning — case, punctuation, reply markers, URLs,
//! and encoding-artifact fragments.

use regex::Regex;
use std::sync::LazyLock;

/// Hex-looking remnants of multi-byte sequences decoded through a
/// single-byte mapping, removed in this order wherever they occur.
pub const ARTIFACT_FRAGMENTS: [&str; 27] = [
    "xe5", "xbc", "xa0", "xe8", "x89", "xba", "xe2", "x80", "x99",
    "xf0", "x9f", "x98", "x82", "x84", "x8f", "x86", "xc2", "xb2",
    "xa2", "xa4", "x9d", "x8b", "x8e", "xb6", "xa7", "xab", "xaa",
];

/// One ordered rewrite step.
enum Rewrite {
    Literal(&'static str, &'static str),
    Pattern(Regex, &'static str),
}

impl Rewrite {
    fn apply(&self, text: &str) -> String {
        match self {
            Self::Literal(from, to) => text.replace(*from, to),
            Self::Pattern(re, to) => re.replace_all(text, regex::NoExpand(*to)).into_owned(),
        }
    }
}

// The alnum collapse runs before the marker and URL steps; those later
// steps only ever see letters, digits and spaces.
static REWRITES: LazyLock<Vec<Rewrite>> = LazyLock::new(|| {
    let mut rules = vec![
        Rewrite::Literal("\n", " "),
        Rewrite::Pattern(Regex::new(r"[^0-9a-zA-Z]+").unwrap(), " "),
        Rewrite::Literal("rt", " "),
        Rewrite::Literal("user", " "),
        Rewrite::Pattern(
            Regex::new(r"((www\.[^\s]+)|(https?://[^\s]+)|(http?://[^\s]+))").unwrap(),
            " ",
        ),
    ];
    rules.extend(ARTIFACT_FRAGMENTS.iter().map(|f| Rewrite::Literal(*f, " ")));
    rules.push(Rewrite::Pattern(Regex::new(r"  +").unwrap(), " "));
    rules
});

/// Lowercase and strip structural noise. Total over all input.
pub fn clean_structure(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let mut result = text.to_lowercase();
    for rule in REWRITES.iter() {
        result = rule.apply(&result);
    }
    result
}

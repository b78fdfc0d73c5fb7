//! Stage 2: Lexical normalization — word-for-word slang rewrite.

use crate::lexicon::SlangMap;

/// Rewrite each space-separated token through `dict`.
///
/// Splits on single spaces, so empty tokens from leading, trailing or
/// doubled spaces pass through unchanged. Token count and order are kept.
pub fn normalize_slang(text: &str, dict: &SlangMap) -> String {
    normalize_slang_counted(text, dict).0
}

/// Like [`normalize_slang`], also returning how many tokens changed.
pub fn normalize_slang_counted(text: &str, dict: &SlangMap) -> (String, usize) {
    if dict.is_empty() {
        return (text.to_string(), 0);
    }
    let mut replaced = 0;
    let tokens: Vec<&str> = text
        .split(' ')
        .map(|token| {
            let out = dict.lookup(token);
            if out != token {
                replaced += 1;
            }
            out
        })
        .collect();
    (tokens.join(" "), replaced)
}

//! Stage 3: Abuse masking — substring replacement with a fixed mask.

use crate::lexicon::AbuseSet;

pub const MASK: &str = "****";

/// Replace every match of the abusive alternation with [`MASK`].
///
/// Matching is substring-based, so a token inside a longer word is masked
/// too. Overlaps resolve leftmost-first, then by declaration order.
pub fn mask_abuse(text: &str, abusive: &AbuseSet) -> String {
    mask_abuse_counted(text, abusive).0
}

/// Like [`mask_abuse`], also returning the number of masked occurrences.
pub fn mask_abuse_counted(text: &str, abusive: &AbuseSet) -> (String, usize) {
    let Some(re) = abusive.matcher() else {
        return (text.to_string(), 0);
    };
    let masked = re.find_iter(text).count();
    if masked == 0 {
        return (text.to_string(), 0);
    }
    (re.replace_all(text, regex::NoExpand(MASK)).into_owned(), masked)
}

//! Tweet cleanser — staged normalization for short informal Indonesian text.
//!
//! Stages:
//! 1. Structure — lowercase, strip punctuation, reply markers, URLs and
//!    encoding-artifact fragments
//! 2. Slang — word-for-word rewrite through the alay dictionary
//! 3. Abuse — mask abusive substrings with `****`
//!
//! Lexicons are loaded once ([`Lexicon::from_config`]) and shared read-only.

pub mod batch;
pub mod encoding;
pub mod lexicon;
pub mod pipeline;
pub mod stage1_structure;
pub mod stage2_slang;
pub mod stage3_abuse;

pub use lexicon::{load, AbuseSet, Lexicon, LoadOptions, SlangMap};
pub use pipeline::{CleanResult, Cleanser};
pub use stage3_abuse::MASK;

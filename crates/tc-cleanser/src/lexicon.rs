//! Lexicon loading — slang normalization map and abusive-word set.

use encoding_rs::Encoding;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tc_core::{LexiconConfig, LexiconLoadError};

use crate::encoding;

const SLANG_SOURCE: &str = "slang";
const ABUSE_SOURCE: &str = "abusive";

/// Many-to-one mapping from slang token to its canonical form.
#[derive(Debug, Clone, Default)]
pub struct SlangMap {
    entries: HashMap<String, String>,
}

impl SlangMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(original, replacement)` pairs; later pairs override earlier ones.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { entries }
    }

    pub fn insert(&mut self, original: impl Into<String>, replacement: impl Into<String>) {
        self.entries.insert(original.into(), replacement.into());
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    /// Total lookup: unknown tokens map to themselves.
    pub fn lookup<'a>(&'a self, token: &'a str) -> &'a str {
        self.get(token).unwrap_or(token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Abusive tokens in declaration order plus the combined masking pattern.
///
/// The pattern is a single alternation of escaped tokens, so at any position
/// the first declared token that matches wins.
#[derive(Debug, Clone, Default)]
pub struct AbuseSet {
    tokens: Vec<String>,
    members: HashSet<String>,
    matcher: Option<Regex>,
}

impl AbuseSet {
    pub fn new<I, S>(tokens: I) -> Result<Self, LexiconLoadError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        for (i, token) in tokens.into_iter().enumerate() {
            let token = token.into();
            if token.is_empty() {
                return Err(LexiconLoadError::EmptyEntry {
                    source_name: ABUSE_SOURCE.into(),
                    row: i as u64 + 1,
                });
            }
            if set.members.insert(token.clone()) {
                set.tokens.push(token);
            }
        }
        set.matcher = compile_alternation(&set.tokens)?;
        Ok(set)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Case-sensitive exact-token membership.
    pub fn contains(&self, token: &str) -> bool {
        self.members.contains(token)
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn matcher(&self) -> Option<&Regex> {
        self.matcher.as_ref()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

fn compile_alternation(tokens: &[String]) -> Result<Option<Regex>, LexiconLoadError> {
    if tokens.is_empty() {
        return Ok(None);
    }
    let pattern = tokens
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&pattern)
        .map(Some)
        .map_err(|e| LexiconLoadError::Pattern(e.to_string()))
}

/// How lexicon sources are read.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    pub encoding: &'static Encoding,
    /// Header naming the token column of the abusive-word table.
    pub abuse_column: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            encoding: encoding_rs::WINDOWS_1252,
            abuse_column: "ABUSIVE".into(),
        }
    }
}

impl LoadOptions {
    pub fn from_config(config: &LexiconConfig) -> Result<Self, LexiconLoadError> {
        Ok(Self {
            encoding: encoding::resolve(&config.encoding)?,
            abuse_column: config.abuse_column.clone(),
        })
    }
}

/// Both lookup tables, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    pub slang: SlangMap,
    pub abuse: AbuseSet,
}

impl Lexicon {
    pub fn from_config(config: &LexiconConfig) -> Result<Self, LexiconLoadError> {
        let options = LoadOptions::from_config(config)?;
        let slang = read_slang(open(&config.slang_path)?, &path_name(&config.slang_path), options.encoding)?;
        let abuse = read_abuse(open(&config.abuse_path)?, &path_name(&config.abuse_path), &options)?;
        tracing::info!(
            slang_entries = slang.len(),
            abusive_tokens = abuse.len(),
            encoding = options.encoding.name(),
            "lexicons loaded"
        );
        Ok(Self { slang, abuse })
    }
}

fn path_name(path: &Path) -> String {
    path.display().to_string()
}

fn open(path: &Path) -> Result<File, LexiconLoadError> {
    File::open(path).map_err(|source| LexiconLoadError::Io {
        source_name: path_name(path),
        source,
    })
}

/// Load both tables from arbitrary readers.
pub fn load<S: Read, A: Read>(
    slang_source: S,
    abuse_source: A,
    options: &LoadOptions,
) -> Result<(SlangMap, AbuseSet), LexiconLoadError> {
    let slang = read_slang(slang_source, SLANG_SOURCE, options.encoding)?;
    let abuse = read_abuse(abuse_source, ABUSE_SOURCE, options)?;
    Ok((slang, abuse))
}

/// Headerless two-column table: original, replacement.
pub fn read_slang<R: Read>(
    source: R,
    source_name: &str,
    encoding: &'static Encoding,
) -> Result<SlangMap, LexiconLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(source);

    let mut map = SlangMap::new();
    for result in reader.byte_records() {
        let record = result.map_err(|e| malformed(source_name, &e))?;
        let row = row_of(&record);
        let original = required_field(&record, 0, "original", source_name, row, encoding)?;
        let replacement = required_field(&record, 1, "replacement", source_name, row, encoding)?;
        if original.is_empty() {
            return Err(LexiconLoadError::EmptyEntry { source_name: source_name.into(), row });
        }
        map.insert(original, replacement);
    }
    tracing::debug!(source = source_name, entries = map.len(), "slang table read");
    Ok(map)
}

/// Table with a header row; tokens come from the configured column.
pub fn read_abuse<R: Read>(
    source: R,
    source_name: &str,
    options: &LoadOptions,
) -> Result<AbuseSet, LexiconLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let headers = reader.byte_headers().map_err(|e| malformed(source_name, &e))?.clone();
    let mut column = None;
    for (i, raw) in headers.iter().enumerate() {
        let name = encoding::decode_header(raw, options.encoding).ok_or_else(|| {
            LexiconLoadError::Decode {
                source_name: source_name.into(),
                row: 1,
                column: i,
                encoding: options.encoding.name(),
            }
        })?;
        if name == options.abuse_column {
            column = Some(i);
            break;
        }
    }
    let column = column.ok_or_else(|| LexiconLoadError::MissingColumn {
        source_name: source_name.into(),
        row: 1,
        column: options.abuse_column.clone(),
    })?;

    let mut tokens = Vec::new();
    for result in reader.byte_records() {
        let record = result.map_err(|e| malformed(source_name, &e))?;
        let row = row_of(&record);
        let token = required_field(&record, column, &options.abuse_column, source_name, row, options.encoding)?;
        if token.is_empty() {
            return Err(LexiconLoadError::EmptyEntry { source_name: source_name.into(), row });
        }
        tokens.push(token);
    }
    let set = AbuseSet::new(tokens)?;
    tracing::debug!(source = source_name, tokens = set.len(), "abusive table read");
    Ok(set)
}

fn row_of(record: &csv::ByteRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

fn required_field(
    record: &csv::ByteRecord,
    index: usize,
    column_name: &str,
    source_name: &str,
    row: u64,
    encoding: &'static Encoding,
) -> Result<String, LexiconLoadError> {
    let raw = record.get(index).ok_or_else(|| LexiconLoadError::MissingColumn {
        source_name: source_name.into(),
        row,
        column: column_name.into(),
    })?;
    encoding::decode_field(raw, encoding).ok_or_else(|| LexiconLoadError::Decode {
        source_name: source_name.into(),
        row,
        column: index,
        encoding: encoding.name(),
    })
}

fn malformed(source_name: &str, err: &csv::Error) -> LexiconLoadError {
    LexiconLoadError::Malformed {
        source_name: source_name.into(),
        row: err.position().map(|p| p.line()).unwrap_or(0),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf8() -> LoadOptions {
        LoadOptions { encoding: encoding_rs::UTF_8, ..LoadOptions::default() }
    }

    #[test]
    fn test_slang_lookup_identity_fallback() {
        let m = SlangMap::from_pairs([("gpp", "enggak papa")]);
        assert_eq!(m.lookup("gpp"), "enggak papa");
        assert_eq!(m.lookup("ya"), "ya");
        assert_eq!(m.lookup(""), "");
    }

    #[test]
    fn test_slang_last_entry_wins() {
        let m = read_slang("gw,gue\ngw,saya\n".as_bytes(), "t", encoding_rs::UTF_8).unwrap();
        assert_eq!(m.len(), 1);
        assert_eq!(m.lookup("gw"), "saya");
    }

    #[test]
    fn test_slang_missing_replacement_column() {
        let err = read_slang("anakjakarta,anak jakarta\nbgt\n".as_bytes(), "t", encoding_rs::UTF_8).unwrap_err();
        match err {
            LexiconLoadError::MissingColumn { row, column, .. } => {
                assert_eq!(row, 2);
                assert_eq!(column, "replacement");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_slang_decode_error_names_row_and_column() {
        let err = read_slang(b"ok,fine\ncaf\xe9,kafe\n".as_slice(), "t", encoding_rs::UTF_8).unwrap_err();
        match err {
            LexiconLoadError::Decode { row, column, .. } => {
                assert_eq!(row, 2);
                assert_eq!(column, 0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_slang_latin1_decodes() {
        let m = read_slang(b"caf\xe9,kafe\n".as_slice(), "t", encoding_rs::WINDOWS_1252).unwrap();
        assert_eq!(m.lookup("café"), "kafe");
    }

    #[test]
    fn test_slang_empty_original_rejected() {
        let err = read_slang(",kosong\n".as_bytes(), "t", encoding_rs::UTF_8).unwrap_err();
        assert!(matches!(err, LexiconLoadError::EmptyEntry { row: 1, .. }));
    }

    #[test]
    fn test_abuse_reads_named_column() {
        let set = read_abuse("ID,ABUSIVE\n1,bangsat\n2,anjing\n".as_bytes(), "t", &utf8()).unwrap();
        assert_eq!(set.tokens(), &["bangsat".to_string(), "anjing".to_string()]);
        assert!(set.contains("anjing"));
        assert!(!set.contains("Anjing"));
    }

    #[test]
    fn test_abuse_missing_header() {
        let err = read_abuse("WORD\nbangsat\n".as_bytes(), "t", &utf8()).unwrap_err();
        assert!(matches!(err, LexiconLoadError::MissingColumn { row: 1, .. }));
    }

    #[test]
    fn test_abuse_duplicates_keep_first_position() {
        let set = AbuseSet::new(["b", "a", "b"]).unwrap();
        assert_eq!(set.tokens(), &["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn test_abuse_empty_token_rejected() {
        assert!(matches!(
            AbuseSet::new(["ok", ""]),
            Err(LexiconLoadError::EmptyEntry { row: 2, .. })
        ));
    }

    #[test]
    fn test_abuse_pattern_special_tokens_are_literal() {
        let set = AbuseSet::new(["a.b", "c+"]).unwrap();
        let re = set.matcher().unwrap();
        assert!(!re.is_match("axb"));
        assert!(re.is_match("a.b"));
        assert!(!re.is_match("ccc"));
        assert!(re.is_match("c+"));
    }

    #[test]
    fn test_empty_abuse_set_has_no_matcher() {
        assert!(AbuseSet::empty().matcher().is_none());
        assert!(AbuseSet::new(Vec::<String>::new()).unwrap().matcher().is_none());
    }

    #[test]
    fn test_load_both() {
        let (slang, abuse) = load(
            "gpp,enggak papa\n".as_bytes(),
            "ABUSIVE\nbangsat\n".as_bytes(),
            &LoadOptions::default(),
        )
        .unwrap();
        assert_eq!(slang.len(), 1);
        assert_eq!(abuse.len(), 1);
    }

    #[test]
    fn test_from_config_missing_file() {
        let config = LexiconConfig {
            slang_path: "/nonexistent/slang.csv".into(),
            ..LexiconConfig::default()
        };
        let err = Lexicon::from_config(&config).unwrap_err();
        assert!(matches!(err, LexiconLoadError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/slang.csv"));
    }

    #[test]
    fn test_from_config_unknown_encoding() {
        let config = LexiconConfig { encoding: "nope".into(), ..LexiconConfig::default() };
        assert!(matches!(
            Lexicon::from_config(&config),
            Err(LexiconLoadError::UnknownEncoding(_))
        ));
    }
}

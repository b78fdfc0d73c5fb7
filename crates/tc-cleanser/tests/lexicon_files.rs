//! Loading lexicons from files on disk and cleaning with them.

use std::io::Write;
use tc_cleanser::{Cleanser, Lexicon};
use tc_core::{LexiconConfig, LexiconLoadError};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, bytes: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(bytes).unwrap();
    path
}

fn config(dir: &TempDir, slang: &[u8], abuse: &[u8]) -> LexiconConfig {
    LexiconConfig {
        slang_path: write(dir, "new_kamusalay.csv", slang),
        abuse_path: write(dir, "abusive.csv", abuse),
        ..LexiconConfig::default()
    }
}

#[test]
fn test_load_and_clean() {
    let dir = TempDir::new().unwrap();
    let cfg = config(
        &dir,
        b"gpp,enggak papa\nanakjakarta,anak jakarta\nyg,yang\n",
        b"ABUSIVE\nbangsat\nkampret\n",
    );
    let lexicon = Lexicon::from_config(&cfg).unwrap();
    assert_eq!(lexicon.slang.len(), 3);
    assert_eq!(lexicon.abuse.len(), 2);

    let cleanser = Cleanser::from_lexicon(lexicon);
    assert_eq!(cleanser.clean("USER: gpp yg penting KAMPRET!!!"), " enggak papa yang penting **** ");
}

#[test]
fn test_latin1_bytes_tolerated() {
    let dir = TempDir::new().unwrap();
    let cfg = config(&dir, b"caf\xe9,kafe\n", b"ABUSIVE\nbangs\xe4t\n");
    let lexicon = Lexicon::from_config(&cfg).unwrap();
    assert_eq!(lexicon.slang.lookup("caf\u{e9}"), "kafe");
    assert!(lexicon.abuse.contains("bangs\u{e4}t"));
}

#[test]
fn test_utf8_lexicon_with_bom_header() {
    let dir = TempDir::new().unwrap();
    let mut cfg = config(&dir, b"gpp,enggak papa\n", b"\xef\xbb\xbfABUSIVE\nbangsat\n");
    cfg.encoding = "utf-8".into();
    let lexicon = Lexicon::from_config(&cfg).unwrap();
    assert_eq!(lexicon.abuse.tokens(), &["bangsat".to_string()]);
}

#[test]
fn test_strict_encoding_reports_row() {
    let dir = TempDir::new().unwrap();
    let mut cfg = config(&dir, b"gpp,enggak papa\n", b"ABUSIVE\nbangsat\nbangs\xe4t\n");
    cfg.encoding = "utf-8".into();
    let err = Lexicon::from_config(&cfg).unwrap_err();
    match err {
        LexiconLoadError::Decode { row, column, encoding, .. } => {
            assert_eq!(row, 3);
            assert_eq!(column, 0);
            assert_eq!(encoding, "UTF-8");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_custom_abuse_column() {
    let dir = TempDir::new().unwrap();
    let mut cfg = config(&dir, b"", b"id,word\n1,bangsat\n");
    cfg.abuse_column = "word".into();
    let lexicon = Lexicon::from_config(&cfg).unwrap();
    assert!(lexicon.slang.is_empty());
    assert!(lexicon.abuse.contains("bangsat"));
}

#[test]
fn test_missing_abuse_column_is_fatal() {
    let dir = TempDir::new().unwrap();
    let cfg = config(&dir, b"gpp,enggak papa\n", b"WORD\nbangsat\n");
    let err = Lexicon::from_config(&cfg).unwrap_err();
    assert!(matches!(err, LexiconLoadError::MissingColumn { .. }));
    assert!(err.to_string().contains("ABUSIVE"));
}

//! Property-based tests across classification and translation.
//!
//! The per-module tests cover each component alone. This module checks that
//! they agree with each other, and leans on deeply mixed separators, where
//! the last-separator rule is easiest to get wrong.

use super::classify::{basename, dirname, is_absolute, is_drive_absolute, is_root_directory};
use super::normalize::resolve_segments;
use super::translate::MsysTranslator;
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_~-]{1,12}"
}

fn msys_drive_path_strategy() -> impl Strategy<Value = String> {
    ("[a-z]", prop::collection::vec(segment_strategy(), 1..8))
        .prop_map(|(drive, parts)| format!("/{drive}/{}", parts.join("/")))
}

// At least three separator switches between `/` and `\`.
fn alternating_strategy() -> impl Strategy<Value = String> {
    (prop::collection::vec(segment_strategy(), 4..10), any::<bool>()).prop_map(
        |(parts, start_with_slash)| {
            let mut path = String::new();
            for (i, part) in parts.iter().enumerate() {
                if i > 0 {
                    let slash = (i % 2 == 1) == start_with_slash;
                    path.push(if slash { '/' } else { '\\' });
                }
                path.push_str(part);
            }
            path
        },
    )
}

fn translator() -> MsysTranslator {
    MsysTranslator::with_shell_path("c:\\msys64\\usr\\bin\\bash.exe")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Translation keeps the last component
    #[test]
    fn translation_preserves_basename(p in msys_drive_path_strategy()) {
        let native = translator().as_windows_path(&p).unwrap();
        prop_assert_eq!(basename(&native), basename(&p));
    }

    // Translation commutes with dirname for drive paths below the drive root
    #[test]
    fn translation_commutes_with_dirname(p in msys_drive_path_strategy()) {
        let translator = translator();
        let native = translator.as_windows_path(&p).unwrap();
        let parent_then_translate = translator.as_windows_path(dirname(&p)).unwrap();
        prop_assert_eq!(dirname(&native), parent_then_translate.as_str());
    }

    // Translated drive paths are drive-absolute and already normalized
    #[test]
    fn translated_drive_paths_are_clean(p in msys_drive_path_strategy()) {
        let native = translator().as_windows_path(&p).unwrap();
        prop_assert!(is_drive_absolute(&native));
        prop_assert!(is_absolute(&native));
        prop_assert_eq!(resolve_segments(&native).unwrap(), native);
    }

    // Walking dirname from a translated path always ends at its drive root
    #[test]
    fn dirname_chain_reaches_root(p in msys_drive_path_strategy()) {
        let native = translator().as_windows_path(&p).unwrap();
        let mut current = native.as_str();
        let mut steps = 0;
        while !is_root_directory(current) {
            current = dirname(current);
            steps += 1;
            prop_assert!(steps <= native.len());
        }
        prop_assert_eq!(current, &native[..3]);
    }

    // With many alternating separators the last one still decides the split
    #[test]
    fn alternating_separators_split_at_last(p in alternating_strategy()) {
        let pos = p.rfind(['/', '\\']).unwrap();
        prop_assert_eq!(dirname(&p), &p[..pos]);
        prop_assert_eq!(basename(&p), &p[pos + 1..]);
    }

    // Peeling components off a mixed path visits every segment in reverse
    #[test]
    fn alternating_separators_peel_in_order(p in alternating_strategy()) {
        let expected: Vec<&str> = p.split(['/', '\\']).rev().collect();
        let mut peeled = Vec::new();
        let mut current = p.as_str();
        while !current.is_empty() {
            peeled.push(basename(current));
            current = dirname(current);
        }
        prop_assert_eq!(peeled, expected);
    }

    // Translation leaves mixed native paths' segments intact
    #[test]
    fn alternating_separators_translate_losslessly(p in alternating_strategy()) {
        let native = translator().as_windows_path(&p).unwrap();
        let original: Vec<&str> = p.split(['/', '\\']).collect();
        let translated: Vec<&str> = native.split('\\').collect();
        prop_assert_eq!(original, translated);
    }
}

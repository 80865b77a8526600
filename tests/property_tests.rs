//! Property-based tests for the option analysis pipeline
//!
//! These tests verify invariants that should hold for all inputs:
//! - Analysis is total: no input string or context panics
//! - Classification preserves every token
//! - Later occurrences of a singular option override earlier ones
//! - Analysis is deterministic
//! - Every finding id is in the catalog with a consistent severity
//! - No finding is reported twice in one run

use jvmlint::{
    analyze, tokenize, Bit, Category, FindingId, GarbageCollector, JvmContext, JvmOptions, Os,
};
use proptest::prelude::*;
use std::collections::HashSet;

/// Generate one plausible command-line flag, no embedded spaces
fn flag() -> impl Strategy<Value = String> {
    prop_oneof![
        (1u64..=4096, prop_oneof![Just("k"), Just("m"), Just("g")])
            .prop_map(|(size, unit)| format!("-Xmx{size}{unit}")),
        "[A-Z][A-Za-z0-9]{2,20}".prop_map(|name| format!("-XX:+{name}")),
        "[A-Z][A-Za-z0-9]{2,20}".prop_map(|name| format!("-XX:-{name}")),
        "[A-Z][A-Za-z0-9]{2,16}".prop_map(|name| format!("-XX:{name}=42")),
        ("[a-z][a-z0-9.]{0,10}", "[a-zA-Z0-9/_.:]{0,10}")
            .prop_map(|(key, value)| format!("-D{key}={value}")),
        Just("-verbose:gc".to_string()),
        Just("-noverify".to_string()),
        Just("-server".to_string()),
        Just("-Xloggc:gc.log".to_string()),
        Just("-XX:+UseG1GC".to_string()),
        Just("-XX:+UseConcMarkSweepGC".to_string()),
        Just("-XX:+UseParallelOldGC".to_string()),
    ]
}

/// Generate a whole option string, flags mixed with unrecognized noise
fn option_string() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            4 => flag(),
            1 => "[a-zA-Z0-9:=+./]{1,20}".prop_map(|noise| format!("-XX:{noise}")),
        ],
        0..10,
    )
    .prop_map(|flags| flags.join(" "))
}

fn context() -> impl Strategy<Value = JvmContext> {
    (
        prop::option::of(6u32..=21),
        0u32..=200,
        prop_oneof![
            Just(Os::Linux),
            Just(Os::Solaris),
            Just(Os::Windows),
            Just(Os::Unidentified),
        ],
        prop_oneof![Just(Bit::Bit32), Just(Bit::Bit64), Just(Bit::Unknown)],
        any::<bool>(),
        prop_oneof![Just(0u64), (1u64..=512).prop_map(|g| g * 1024 * 1024 * 1024)],
        prop::collection::vec(
            prop_oneof![
                Just(GarbageCollector::ParallelScavenge),
                Just(GarbageCollector::ParallelOld),
                Just(GarbageCollector::Cms),
                Just(GarbageCollector::G1),
                Just(GarbageCollector::Shenandoah),
                Just(GarbageCollector::Zgc),
            ],
            0..3,
        ),
    )
        .prop_map(
            |(major_version, minor_version, os, bit, container, memory, garbage_collectors)| {
                JvmContext {
                    major_version,
                    minor_version,
                    os,
                    bit,
                    container,
                    memory,
                    garbage_collectors,
                }
            },
        )
}

proptest! {
    /// Property: the pipeline is total - any string and any context
    /// produce a report, never a panic
    #[test]
    fn prop_analyze_never_panics(raw in ".*", ctx in context()) {
        let _ = analyze(&raw, &ctx);
    }

    /// Property: parsing keeps every token the tokenizer produced
    #[test]
    fn prop_classification_preserves_tokens(raw in option_string()) {
        let tokens = tokenize(&raw);
        let options = JvmOptions::parse(&raw);
        prop_assert_eq!(tokens.len(), options.tokens().len());
        for undefined in options.undefined() {
            prop_assert!(tokens.iter().any(|token| token == undefined));
        }
    }

    /// Property: flags without embedded spaces round-trip through the
    /// tokenizer unchanged and in order
    #[test]
    fn prop_simple_flags_round_trip(flags in prop::collection::vec(flag(), 0..8)) {
        let raw = flags.join(" ");
        prop_assert_eq!(tokenize(&raw), flags);
    }

    /// Property: the last occurrence of a singular option wins
    #[test]
    fn prop_last_occurrence_wins(sizes in prop::collection::vec(1u64..=64, 2..6)) {
        let raw = sizes
            .iter()
            .map(|gigabytes| format!("-Xmx{gigabytes}g"))
            .collect::<Vec<_>>()
            .join(" ");
        let options = JvmOptions::parse(&raw);
        let expected = format!("-Xmx{}g", sizes.last().unwrap());
        prop_assert_eq!(options.get(Category::MaxHeapSize), Some(expected.as_str()));
    }

    /// Property: analysis is deterministic
    #[test]
    fn prop_analysis_is_deterministic(raw in option_string(), ctx in context()) {
        let first = analyze(&raw, &ctx);
        let second = analyze(&raw, &ctx);
        prop_assert_eq!(first.findings(), second.findings());
        prop_assert_eq!(first.collectors(), second.collectors());
    }

    /// Property: every emitted finding id exists in the catalog, with
    /// the catalog severity and a non-empty rendered message
    #[test]
    fn prop_every_finding_is_cataloged(raw in option_string(), ctx in context()) {
        let report = analyze(&raw, &ctx);
        for finding in report.findings() {
            prop_assert!(FindingId::ALL.contains(&finding.id));
            prop_assert_eq!(finding.severity, finding.id.severity());
            prop_assert!(!finding.message.is_empty());
        }
    }

    /// Property: one run reports each finding at most once
    #[test]
    fn prop_findings_are_unique(raw in option_string(), ctx in context()) {
        let report = analyze(&raw, &ctx);
        let ids: Vec<FindingId> = report.findings().iter().map(|finding| finding.id).collect();
        let unique: HashSet<FindingId> = ids.iter().copied().collect();
        prop_assert_eq!(ids.len(), unique.len());
    }

    /// Property: an empty or unrecognizable input never reports more
    /// than the unrecognized-options finding as an error
    #[test]
    fn prop_noise_only_input_is_mostly_informational(
        noise in prop::collection::vec("[a-zA-Z0-9:=+./]{1,20}", 1..5),
    ) {
        let raw = noise
            .iter()
            .map(|junk| format!("-XX:{junk}"))
            .collect::<Vec<_>>()
            .join(" ");
        let report = analyze(&raw, &JvmContext::new());
        for finding in report.findings() {
            if finding.id == FindingId::DuplicateOptions {
                continue;
            }
            prop_assert_ne!(finding.severity, jvmlint::Severity::Error);
        }
    }
}

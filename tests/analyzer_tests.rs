use jvmlint::{
    analyze, classify, tokenize, Bit, Category, FindingId, GarbageCollector, JvmContext,
    JvmOptions, Severity,
};

fn jdk(major: u32) -> JvmContext {
    JvmContext {
        major_version: Some(major),
        ..JvmContext::default()
    }
}

fn finding_ids(options: &str, context: &JvmContext) -> Vec<FindingId> {
    analyze(options, context)
        .findings()
        .iter()
        .map(|finding| finding.id)
        .collect()
}

#[cfg(test)]
mod tokenization_tests {
    use super::*;

    #[test]
    fn test_boundaries_keep_embedded_spaces() {
        let tokens = tokenize(r#"-Xms256m -Xmx512m -XX:OnError="echo %p" -verbose:gc"#);
        assert_eq!(
            tokens,
            vec![
                "-Xms256m",
                "-Xmx512m",
                r#"-XX:OnError="echo %p""#,
                "-verbose:gc",
            ]
        );
    }

    #[test]
    fn test_whitespace_only_input_is_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_on_out_of_memory_command_stays_whole() {
        let tokens = tokenize("-Xmx2g -XX:OnOutOfMemoryError=kill -9 %p -Xms2g");
        assert_eq!(
            tokens,
            vec!["-Xmx2g", "-XX:OnOutOfMemoryError=kill -9 %p", "-Xms2g"]
        );
    }
}

#[cfg(test)]
mod classification_tests {
    use super::*;

    #[test]
    fn test_every_token_gets_exactly_one_category() {
        let raw = "-Xmx4g -XX:+UseG1GC -Dapp.name=shop -XX:TotalNonsense -javaagent:x.jar";
        let tokens = tokenize(raw);
        let undefined = tokens
            .iter()
            .filter(|token| classify(token) == Category::Undefined)
            .count();
        assert_eq!(tokens.len(), 5);
        assert_eq!(undefined, 1);
    }

    #[test]
    fn test_unrecognized_tokens_are_retained_verbatim() {
        let options = JvmOptions::parse("-XX:TotalNonsense -Xmx1g");
        assert_eq!(options.undefined(), ["-XX:TotalNonsense"]);
    }
}

#[cfg(test)]
mod configuration_tests {
    use super::*;

    #[test]
    fn test_last_occurrence_wins() {
        let options = JvmOptions::parse("-Xmx1g -Xmx2g");
        assert_eq!(options.get(Category::MaxHeapSize), Some("-Xmx2g"));
        assert_eq!(
            options.bytes(Category::MaxHeapSize),
            Some(2 * 1024 * 1024 * 1024)
        );
    }

    #[test]
    fn test_size_suffixes_convert_to_bytes() {
        let options = JvmOptions::parse("-Xmx1500m -Xms1048576 -XX:ThreadStackSize=512");
        assert_eq!(
            options.bytes(Category::MaxHeapSize),
            Some(1500 * 1024 * 1024)
        );
        assert_eq!(options.bytes(Category::InitialHeapSize), Some(1024 * 1024));
        // ThreadStackSize without a unit counts kilobytes.
        assert_eq!(options.bytes(Category::ThreadStackSize), Some(512 * 1024));
    }

    #[test]
    fn test_cms_overrides_parallel_old_in_either_order() {
        for raw in [
            "-XX:+UseParallelOldGC -XX:+UseConcMarkSweepGC",
            "-XX:+UseConcMarkSweepGC -XX:+UseParallelOldGC",
        ] {
            let options = JvmOptions::parse(raw);
            assert_eq!(options.get(Category::UseParallelOldGc), None, "{raw}");
            assert!(!options.slot_entries(Category::UseParallelOldGc).is_empty());
            let ids = finding_ids(raw, &JvmContext::new());
            assert!(ids.contains(&FindingId::ParallelOldCruft), "{raw}");
        }
    }

    #[test]
    fn test_duplicate_options_render_both_tokens() {
        let report = analyze(
            "-XX:MaxMetaspaceSize=1g -XX:MaxMetaspaceSize=2g",
            &JvmContext::new(),
        );
        let duplicate = report
            .findings()
            .iter()
            .find(|finding| finding.id == FindingId::DuplicateOptions)
            .unwrap();
        assert_eq!(duplicate.severity, Severity::Error);
        assert_eq!(
            duplicate.message,
            "Duplicate JVM options: -XX:MaxMetaspaceSize=1g -XX:MaxMetaspaceSize=2g."
        );
    }

    #[test]
    fn test_system_properties_repeat_without_duplicates() {
        let options = JvmOptions::parse("-Dfirst=1 -Dsecond=2 -Dfirst=3");
        assert_eq!(options.get_all(Category::SystemProperty).len(), 3);
        assert_eq!(options.duplicates(), None);
    }
}

#[cfg(test)]
mod collector_tests {
    use super::*;

    #[test]
    fn test_default_collectors_follow_the_jdk_version() {
        let report = analyze("-Xmx1g", &jdk(8));
        assert_eq!(
            report.collectors(),
            [
                GarbageCollector::ParallelScavenge,
                GarbageCollector::ParallelOld,
            ]
        );
        let report = analyze("-Xmx1g", &jdk(11));
        assert_eq!(report.collectors(), [GarbageCollector::G1]);
        let report = analyze("-Xmx1g", &JvmContext::new());
        assert_eq!(report.collectors(), [GarbageCollector::Unknown]);
    }

    #[test]
    fn test_context_collectors_override_flags() {
        let context = JvmContext {
            garbage_collectors: vec![GarbageCollector::Zgc],
            ..JvmContext::default()
        };
        let report = analyze("-XX:+UseG1GC", &context);
        assert_eq!(report.collectors(), [GarbageCollector::Zgc]);
        let ignored = report
            .findings()
            .iter()
            .find(|finding| finding.id == FindingId::GcIgnored)
            .unwrap();
        assert_eq!(ignored.severity, Severity::Error);
    }

    #[test]
    fn test_g1_flags_under_a_parallel_runtime() {
        let context = JvmContext {
            garbage_collectors: vec![
                GarbageCollector::ParallelScavenge,
                GarbageCollector::ParallelOld,
            ],
            ..JvmContext::default()
        };
        let ids = finding_ids("-XX:+UseG1GC", &context);
        assert!(ids.contains(&FindingId::G1IgnoredParallel));
        assert!(!ids.contains(&FindingId::GcIgnored));
    }
}

#[cfg(test)]
mod sizing_rule_tests {
    use super::*;

    #[test]
    fn test_compressed_oops_at_the_32g_boundary() {
        let ids = finding_ids("-Xmx32g -XX:+UseCompressedOops", &JvmContext::new());
        assert!(ids.contains(&FindingId::CompOopsEnabledHeapGt32g));
        // One byte below the limit, expressed without a unit suffix.
        let ids = finding_ids("-Xmx34359738367 -XX:+UseCompressedOops", &JvmContext::new());
        assert!(!ids.contains(&FindingId::CompOopsEnabledHeapGt32g));
    }

    #[test]
    fn test_metaspace_breakdown_message() {
        let report = analyze(
            "-XX:MaxMetaspaceSize=512m -XX:CompressedClassSpaceSize=256m",
            &JvmContext::new(),
        );
        let breakdown = report
            .findings()
            .iter()
            .find(|finding| finding.id == FindingId::MetaspaceClassMetadataAndCompClassSpace)
            .unwrap();
        assert!(breakdown
            .message
            .ends_with("Metaspace(512M) = Class Metadata(256M) + Compressed Class Space(256M)."));
    }

    #[test]
    fn test_metaspace_smaller_than_class_space_messages() {
        let report = analyze("-XX:MaxMetaspaceSize=128m", &JvmContext::new());
        let too_small = report
            .findings()
            .iter()
            .find(|finding| finding.id == FindingId::MetaspaceLtCompClass)
            .unwrap();
        assert!(too_small.message.contains(
            "CompressedClassSpaceSize' = MaxMetaspaceSize(128M) - \
             [2 * InitialBootClassLoaderMetaspaceSize(4M)] = 120M."
        ));
        assert!(too_small.message.contains(
            "Class Metadata Size' = MaxMetaspaceSize(128M) - \
             CompressedClassSpaceSize'(120M) = 8M."
        ));
        // The breakdown message shows the shrunken class space as well.
        let breakdown = report
            .findings()
            .iter()
            .find(|finding| finding.id == FindingId::MetaspaceClassMetadataAndCompClassSpace)
            .unwrap();
        assert!(breakdown
            .message
            .ends_with("Metaspace(128M) = Class Metadata(8M) + Compressed Class Space(120M)."));
    }

    #[test]
    fn test_default_heap_comes_from_machine_memory() {
        // 256G of memory gives a 64G default heap, past the compressed
        // reference limit, so no under-32G advice fires.
        let context = JvmContext {
            memory: 256 * 1024 * 1024 * 1024,
            ..JvmContext::default()
        };
        let ids = finding_ids("-XX:+UseG1GC", &context);
        assert!(!ids.contains(&FindingId::CompOopsDisabledHeapUnknown));
        assert!(!ids.contains(&FindingId::CompOopsDisabledHeapLt32g));
    }
}

#[cfg(test)]
mod version_gate_tests {
    use super::*;

    #[test]
    fn test_perm_gen_flags_flagged_from_jdk8_on() {
        let raw = "-XX:MaxPermSize=256m";
        assert!(finding_ids(raw, &jdk(8)).contains(&FindingId::MaxPermSize));
        assert!(!finding_ids(raw, &jdk(7)).contains(&FindingId::MaxPermSize));
        // Unknown version does not assume JDK8+.
        assert!(!finding_ids(raw, &JvmContext::new()).contains(&FindingId::MaxPermSize));
    }

    #[test]
    fn test_small_gc_log_size_is_a_legacy_check() {
        let raw = "-XX:GCLogFileSize=1m";
        assert!(finding_ids(raw, &jdk(8)).contains(&FindingId::Jdk8GcLogFileSizeSmall));
        assert!(!finding_ids(raw, &jdk(9)).contains(&FindingId::Jdk8GcLogFileSizeSmall));
        // Unknown version is treated as possibly legacy.
        assert!(finding_ids(raw, &JvmContext::new()).contains(&FindingId::Jdk8GcLogFileSizeSmall));
    }

    #[test]
    fn test_loggc_deprecated_from_jdk9() {
        let raw = "-Xloggc:gc.log";
        assert!(finding_ids(raw, &jdk(9)).contains(&FindingId::Jdk9DeprecatedLoggc));
        let ids = finding_ids(raw, &jdk(8));
        assert!(!ids.contains(&FindingId::Jdk9DeprecatedLoggc));
        assert!(ids.contains(&FindingId::Jdk8GcLogFileRotationNotEnabled));
    }
}

#[cfg(test)]
mod logging_rule_tests {
    use super::*;

    #[test]
    fn test_gc_logging_without_a_file_goes_to_stdout() {
        let ids = finding_ids("-XX:+PrintGC", &jdk(8));
        assert!(ids.contains(&FindingId::GcLogStdout));
        let ids = finding_ids("-XX:+PrintGC -Xloggc:gc.log", &jdk(8));
        assert!(!ids.contains(&FindingId::GcLogStdout));
    }

    #[test]
    fn test_well_formed_unified_logging_passes() {
        let raw = "-Xlog:gc*:file=gc.log:time,uptime:filecount=5,filesize=50M";
        let ids = finding_ids(raw, &jdk(11));
        assert!(!ids.contains(&FindingId::Jdk11PrintGcDetailsMissing));
        assert!(!ids.contains(&FindingId::Jdk11GcLogFileSizeSmall));
        assert!(!ids.contains(&FindingId::Jdk11GcLogFileRotationDisabled));
    }

    #[test]
    fn test_unified_logging_without_details() {
        let ids = finding_ids("-Xlog:gc:file=gc.log::filecount=5,filesize=50M", &jdk(11));
        assert!(ids.contains(&FindingId::Jdk11PrintGcDetailsMissing));
    }

    #[test]
    fn test_print_gc_details_missing_when_logging() {
        let ids = finding_ids("-Xloggc:gc.log", &jdk(8));
        assert!(ids.contains(&FindingId::Jdk8PrintGcDetailsMissing));
        let ids = finding_ids("-Xloggc:gc.log -XX:+PrintGCDetails", &jdk(8));
        assert!(!ids.contains(&FindingId::Jdk8PrintGcDetailsMissing));
    }
}

#[cfg(test)]
mod platform_tests {
    use super::*;

    #[test]
    fn test_missing_stack_size_matters_on_32_bit() {
        let context = JvmContext {
            bit: Bit::Bit32,
            ..JvmContext::default()
        };
        assert!(finding_ids("-Xmx1g", &context).contains(&FindingId::ThreadStackSizeNotSet32));
        assert!(!finding_ids("-Xmx1g", &JvmContext::new())
            .contains(&FindingId::ThreadStackSizeNotSet32));
    }

    #[test]
    fn test_d64_is_redundant_on_64_bit() {
        assert!(finding_ids("-d64", &JvmContext::new()).contains(&FindingId::D64Redundant));
        let context = JvmContext {
            bit: Bit::Bit32,
            ..JvmContext::default()
        };
        assert!(!finding_ids("-d64", &context).contains(&FindingId::D64Redundant));
    }
}

#[cfg(test)]
mod report_tests {
    use super::*;

    #[test]
    fn test_findings_follow_rule_order() {
        let ids = finding_ids(
            "-XX:+UseConcMarkSweepGC -XX:MaxMetaspaceSize=256m -Xmx1g",
            &JvmContext::new(),
        );
        let position = |id| ids.iter().position(|&x| x == id).unwrap();
        assert!(position(FindingId::Metaspace) < position(FindingId::HeapDumpOnOomeMissing));
        assert!(
            position(FindingId::HeapDumpOnOomeMissing)
                < position(FindingId::ExplicitGcNotConcurrent)
        );
    }

    #[test]
    fn test_severities_come_from_the_catalog() {
        let report = analyze(
            "-XX:+UseConcMarkSweepGC -XX:-UseParNewGC -Xverify:none -XX:TotalNonsense",
            &jdk(8),
        );
        assert!(!report.findings().is_empty());
        for finding in report.findings() {
            assert_eq!(finding.severity, finding.id.severity(), "{:?}", finding.id);
        }
    }

    #[test]
    fn test_remote_debugging_is_an_error() {
        let report = analyze(
            "-agentlib:jdwp=transport=dt_socket,server=y,suspend=n,address=5005",
            &JvmContext::new(),
        );
        let debug = report
            .findings()
            .iter()
            .find(|finding| finding.id == FindingId::RemoteDebuggingEnabled)
            .unwrap();
        assert_eq!(debug.severity, Severity::Error);
    }

    #[test]
    fn test_findings_serialize_to_json() {
        let report = analyze("-Xverify:none", &JvmContext::new());
        let json = serde_json::to_value(report.findings()).unwrap();
        let rendered = json
            .as_array()
            .unwrap()
            .iter()
            .find(|value| value["id"] == "VerifyNone")
            .unwrap();
        assert_eq!(rendered["severity"], "Warn");
        assert!(rendered["message"].as_str().unwrap().starts_with("-Xverify:none"));
    }
}

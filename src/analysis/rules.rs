//! The rule engine.
//!
//! Each rule is a pure predicate over the folded options, the context,
//! and the resolved collectors, contributing zero or one finding per
//! run. Rules evaluate in a fixed order; the few rules that consult
//! what earlier rules emitted are commented inline.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::catalog::FindingId;
use crate::category::Category;
use crate::collectors::GarbageCollector;
use crate::context::{Bit, JvmContext, Os};
use crate::defaults;
use crate::options::JvmOptions;
use crate::units::{self, GIGABYTE, MEGABYTE};

/// Compressed pointer addressing limit.
const COMPRESSED_POINTER_HEAP_LIMIT: u64 = 32 * GIGABYTE;

static AGENTLIB_JDWP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-agentlib:jdwp=transport=dt_socket.+$").unwrap());
static RUNJDWP_SOCKET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-Xrunjdwp:transport=dt_socket.+$").unwrap());
static HEAP_DUMP_FILE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^.+\.(hprof|bin)$").unwrap());
static XLOG_FILECOUNT_ZERO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-Xlog:gc(.+)filecount=0.*$").unwrap());
static XLOG_FILESIZE_ZERO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-Xlog:gc(.+)filesize=0.*$").unwrap());
static XLOG_FILESIZE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^-Xlog:gc.+filesize={}.*$", units::SIZE_LITERAL)).unwrap()
});
static KILL_NINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^.+kill -9.+$").unwrap());

/// Evaluate every rule against the folded configuration.
///
/// `inferred` is the collector set implied by the flags alone;
/// `effective` is what the JVM actually runs (context evidence wins).
/// An empty token list produces no findings.
pub(crate) fn run(
    options: &JvmOptions,
    context: &JvmContext,
    inferred: &[GarbageCollector],
    effective: &[GarbageCollector],
) -> Vec<FindingId> {
    let mut findings = Vec::new();
    if options.tokens().is_empty() {
        return findings;
    }
    collector_selection(context, inferred, &mut findings);
    remote_debugging(options, &mut findings);
    undefined_options(options, &mut findings);
    metaspace_sizing(options, context, &mut findings);
    heap_dump(options, &mut findings);
    cms_remark_threads(options, &mut findings);
    compressed_pointers(options, context, &mut findings);
    print_and_tiered(options, &mut findings);
    gated_option_groups(options, context, &mut findings);
    gc_log_files(options, context, &mut findings);
    services_and_jit(options, &mut findings);
    collector_combinations(options, context, &mut findings);
    rmi_and_legacy(options, &mut findings);
    logging_and_safepoints(options, context, &mut findings);
    worker_threads(options, &mut findings);
    runtime_behavior(options, context, effective, &mut findings);
    platform_fit(options, context, &mut findings);
    thread_priorities(options, &mut findings);
    closing_checks(options, context, &mut findings);
    log::debug!(
        "{} findings from {} tokens",
        findings.len(),
        options.tokens().len()
    );
    findings
}

/// Flags vs observed collector evidence. Only fires when the context
/// carries positively identified collectors the flags do not imply.
fn collector_selection(
    context: &JvmContext,
    inferred: &[GarbageCollector],
    findings: &mut Vec<FindingId>,
) {
    let observed = &context.garbage_collectors;
    if observed.is_empty() || observed.contains(&GarbageCollector::Unknown) {
        return;
    }
    if !observed.iter().all(|gc| inferred.contains(gc)) {
        if inferred.contains(&GarbageCollector::G1)
            && (observed.contains(&GarbageCollector::ParallelScavenge)
                || observed.contains(&GarbageCollector::ParallelOld))
        {
            findings.push(FindingId::G1IgnoredParallel);
        } else {
            findings.push(FindingId::GcIgnored);
        }
    }
}

fn remote_debugging(options: &JvmOptions, findings: &mut Vec<FindingId>) {
    if options
        .get_all(Category::Agentlib)
        .iter()
        .any(|agent| AGENTLIB_JDWP.is_match(agent))
    {
        findings.push(FindingId::RemoteDebuggingEnabled);
    }
    // The -Xrunjdwp spelling reports the same exposure once.
    if !findings.contains(&FindingId::RemoteDebuggingEnabled)
        && options
            .get_all(Category::RunJdwp)
            .iter()
            .any(|run| RUNJDWP_SOCKET.is_match(run))
    {
        findings.push(FindingId::RemoteDebuggingEnabled);
    }
}

fn undefined_options(options: &JvmOptions, findings: &mut Vec<FindingId>) {
    if !options.undefined().is_empty() {
        findings.push(FindingId::OptsUndefined);
    }
}

fn metaspace_sizing(options: &JvmOptions, context: &JvmContext, findings: &mut Vec<FindingId>) {
    if options.has(Category::MetaspaceSize) || options.has(Category::MaxMetaspaceSize) {
        findings.push(FindingId::Metaspace);
    }
    if options.has(Category::InitialHeapSize)
        && options.has(Category::MaxHeapSize)
        && options.bytes(Category::InitialHeapSize) != options.bytes(Category::MaxHeapSize)
        && options.is_disabled(Category::UseAdaptiveSizePolicy)
    {
        findings.push(FindingId::AdaptiveSizePolicyDisabled);
    }
    // Perm gen options survive on JDK8+ command lines; the JVM ignores them.
    if context.major_at_least(8) {
        if options.has(Category::PermSize) {
            findings.push(FindingId::PermSize);
        }
        if options.has(Category::MaxPermSize) {
            findings.push(FindingId::MaxPermSize);
        }
    }
}

fn heap_dump(options: &JvmOptions, findings: &mut Vec<FindingId>) {
    if !options.has(Category::HeapDumpOnOutOfMemoryError) {
        findings.push(FindingId::HeapDumpOnOomeMissing);
    } else if options.is_disabled(Category::HeapDumpOnOutOfMemoryError) {
        findings.push(FindingId::HeapDumpOnOomeDisabled);
    } else if let Some(path) = options.get(Category::HeapDumpPath) {
        if HEAP_DUMP_FILE.is_match(path) {
            findings.push(FindingId::HeapDumpPathFilename);
        }
    } else {
        findings.push(FindingId::HeapDumpPathMissing);
    }
}

fn cms_remark_threads(options: &JvmOptions, findings: &mut Vec<FindingId>) {
    if !options.is_disabled(Category::UseConcMarkSweepGc)
        && options.is_disabled(Category::CmsParallelInitialMarkEnabled)
    {
        findings.push(FindingId::CmsParallelInitialMarkDisabled);
    }
    if !options.is_disabled(Category::UseConcMarkSweepGc)
        && options.is_disabled(Category::CmsParallelRemarkEnabled)
    {
        findings.push(FindingId::CmsParallelRemarkDisabled);
    }
}

/// Compressed object reference and class pointer checks. Compressed
/// addressing only exists from JDK8 on, and stops working at a 32G max
/// heap; the effective max heap falls back to the quarter-of-memory
/// ergonomic when `-Xmx` is absent and may stay unknown.
fn compressed_pointers(options: &JvmOptions, context: &JvmContext, findings: &mut Vec<FindingId>) {
    if !(context.major_version.is_none() || context.major_at_least(8)) {
        return;
    }
    if options.is_compressed_class_pointers() {
        findings.push(FindingId::MetaspaceClassMetadataAndCompClassSpace);
    } else {
        findings.push(FindingId::MetaspaceClassMetadata);
    }
    let max_heap = if options.has(Category::MaxHeapSize) {
        options.bytes(Category::MaxHeapSize)
    } else {
        defaults::max_heap(context.memory)
    };
    match max_heap {
        Some(heap) if heap >= COMPRESSED_POINTER_HEAP_LIMIT => {
            if options.is_enabled(Category::UseCompressedOops) {
                findings.push(FindingId::CompOopsEnabledHeapGt32g);
            }
            if options.is_enabled(Category::UseCompressedClassPointers) {
                findings.push(FindingId::CompClassEnabledHeapGt32g);
            }
            if options.has(Category::CompressedClassSpaceSize) {
                findings.push(FindingId::CompClassSizeHeapGt32g);
            }
        }
        heap => {
            if !options.is_compressed_oops() {
                findings.push(if heap.is_none() {
                    FindingId::CompOopsDisabledHeapUnknown
                } else {
                    FindingId::CompOopsDisabledHeapLt32g
                });
            }
            if !options.is_compressed_class_pointers() {
                findings.push(if heap.is_none() {
                    FindingId::CompClassDisabledHeapUnknown
                } else {
                    FindingId::CompClassDisabledHeapLt32g
                });
            }
            let compressed_class_space = if options.has(Category::CompressedClassSpaceSize) {
                options.bytes(Category::CompressedClassSpaceSize)
            } else {
                Some(defaults::COMPRESSED_CLASS_SPACE_SIZE)
            };
            if let (Some(max_metaspace), Some(class_space)) =
                (options.bytes(Category::MaxMetaspaceSize), compressed_class_space)
            {
                if max_metaspace < class_space {
                    findings.push(FindingId::MetaspaceLtCompClass);
                }
            }
            if options.is_disabled(Category::UseCompressedOops)
                && options.has(Category::CompressedClassSpaceSize)
            {
                findings.push(FindingId::CompClassSizeCompOopsDisabled);
            }
            if options.is_disabled(Category::UseCompressedClassPointers)
                && options.has(Category::CompressedClassSpaceSize)
            {
                findings.push(FindingId::CompClassSizeCompClassDisabled);
            }
        }
    }
}

fn print_and_tiered(options: &JvmOptions, findings: &mut Vec<FindingId>) {
    if options.has(Category::VerboseClass) {
        findings.push(FindingId::VerboseClass);
    }
    if options.is_enabled(Category::TieredCompilation) {
        findings.push(FindingId::TieredCompilationEnabled);
    } else if options.is_disabled(Category::TieredCompilation) {
        findings.push(FindingId::TieredCompilationDisabled);
    }
    // Shenandoah disables biased locking itself, any polarity of the
    // flag means the user already weighed it.
    if options.is_disabled(Category::UseBiasedLocking) && !options.has(Category::UseShenandoahGc) {
        findings.push(FindingId::BiasedLockingDisabled);
    }
    if options.has(Category::PrintGcCause) {
        if options.is_disabled(Category::PrintGcCause) {
            findings.push(FindingId::Jdk8PrintGcCauseDisabled);
        } else {
            findings.push(FindingId::Jdk8PrintGcCause);
        }
    }
    if options.has(Category::PrintHeapAtGc) {
        findings.push(FindingId::Jdk8PrintHeapAtGc);
    }
    if options.has(Category::PrintTenuringDistribution) {
        findings.push(FindingId::Jdk8PrintTenuringDistribution);
    }
    if options.has(Category::PrintFlsStatistics) {
        findings.push(FindingId::Jdk8PrintFlsStatistics);
    }
}

fn gated_option_groups(options: &JvmOptions, context: &JvmContext, findings: &mut Vec<FindingId>) {
    let g1_prior_u40 = (context.garbage_collectors.contains(&GarbageCollector::G1)
        || options.has(Category::UseG1Gc))
        && context.major_is(8)
        && context.minor_version < 40;
    if options.is_enabled(Category::UnlockExperimentalVmOptions)
        || !options.experimental().is_empty()
    {
        // The one legitimate historical use: the mixed-collection
        // liveness threshold recommended for G1 on JDK8 before u40.
        let u40_exception = g1_prior_u40
            && options.has(Category::G1MixedGcLiveThresholdPercent)
            && options.experimental().len() == 1
            && options.get(Category::G1MixedGcLiveThresholdPercent)
                == options.experimental().first().map(String::as_str);
        if !u40_exception {
            findings.push(FindingId::ExperimentalVmOptionsEnabled);
        }
    }
    if g1_prior_u40 {
        findings.push(FindingId::Jdk8G1PriorU40);
        let threshold_ok = options.number(Category::G1MixedGcLiveThresholdPercent) == Some(85);
        let waste_ok = options.number(Category::G1HeapWastePercent) == Some(5);
        if !(threshold_ok && waste_ok) {
            findings.push(FindingId::Jdk8G1PriorU40Recs);
        }
    }
    if options.is_enabled(Category::UseCGroupMemoryLimitForHeap) {
        if options.has(Category::MaxHeapSize) {
            findings.push(FindingId::CgroupMemoryLimitOverride);
        } else {
            findings.push(FindingId::CgroupMemoryLimit);
        }
    }
    if options.is_enabled(Category::UseFastUnorderedTimeStamps) {
        findings.push(FindingId::FastUnorderedTimestamps);
        // Experimental exposure applies even when the experimental rule
        // above excused the option list.
        if !findings.contains(&FindingId::ExperimentalVmOptionsEnabled) {
            findings.push(FindingId::ExperimentalVmOptionsEnabled);
        }
    }
    if options.has(Category::G1MixedGcLiveThresholdPercent) {
        findings.push(FindingId::G1MixedGcLiveThresholdPercent);
    }
    if options.is_enabled(Category::UnlockDiagnosticVmOptions) || !options.diagnostic().is_empty()
    {
        findings.push(FindingId::DiagnosticVmOptionsEnabled);
    }
    if !options.get_all(Category::Javaagent).is_empty() {
        findings.push(FindingId::Instrumentation);
    }
    if options.is_disabled(Category::ExplicitGcInvokesConcurrentAndUnloadsClasses)
        && options.is_enabled(Category::DisableExplicitGc)
    {
        findings.push(FindingId::CruftExplicitGcInvokesConcurrentAndUnloadsClasses);
    }
}

fn gc_log_files(options: &JvmOptions, context: &JvmContext, findings: &mut Vec<FindingId>) {
    let loggc = options.get(Category::LogGc);
    if (!options.has(Category::UseGcLogFileRotation)
        || options.is_disabled(Category::UseGcLogFileRotation))
        && loggc.is_some_and(|path| !path.contains('%'))
    {
        findings.push(FindingId::Jdk8GcLogFileOverwrite);
    }
    if options.is_disabled(Category::UseGcLogFileRotation) {
        findings.push(FindingId::Jdk8GcLogFileRotationDisabled);
        if options.has(Category::NumberOfGcLogFiles) {
            findings.push(FindingId::Jdk8GcLogFileRotationDisabledNum);
        }
    }
    for entry in options.get_all(Category::Log) {
        if let Some(captures) = XLOG_FILECOUNT_ZERO.captures(entry) {
            findings.push(FindingId::Jdk11GcLogFileRotationDisabled);
            // The two unified rotation rules report one shared
            // overwrite finding between them.
            if !captures[1].contains('%')
                && !findings.contains(&FindingId::Jdk11GcLogFileOverwrite)
            {
                findings.push(FindingId::Jdk11GcLogFileOverwrite);
            }
            break;
        }
    }
    for entry in options.get_all(Category::Log) {
        if let Some(captures) = XLOG_FILESIZE_ZERO.captures(entry) {
            findings.push(FindingId::Jdk11GcLogFileSize0);
            if !captures[1].contains('%')
                && !findings.contains(&FindingId::Jdk11GcLogFileOverwrite)
            {
                findings.push(FindingId::Jdk11GcLogFileOverwrite);
            }
            break;
        }
    }
    if context.major_at_most(8)
        && options
            .bytes(Category::GcLogFileSize)
            .is_some_and(|bytes| bytes < 5 * MEGABYTE)
    {
        findings.push(FindingId::Jdk8GcLogFileSizeSmall);
    }
    // An -Xlog entry without a parseable filesize rotates at the 20M
    // default only when gc logging is not involved; treat it as small.
    if options.get_all(Category::Log).iter().any(|entry| {
        XLOG_FILESIZE
            .captures(entry)
            .and_then(|captures| units::parse_size(&captures[1]))
            .map_or(true, |bytes| bytes < 5 * MEGABYTE)
    }) {
        findings.push(FindingId::Jdk11GcLogFileSizeSmall);
    }
}

fn services_and_jit(options: &JvmOptions, findings: &mut Vec<FindingId>) {
    if options.is_enabled(Category::ManagementServer)
        || options
            .get_all(Category::SystemProperty)
            .iter()
            .any(|property| property == "-Dcom.sun.management.jmxremote")
    {
        findings.push(FindingId::JmxEnabled);
    }
    if !options.get_all(Category::Agentlib).is_empty()
        || !options.get_all(Category::Agentpath).is_empty()
    {
        findings.push(FindingId::NativeAgent);
    }
    if let (Some(new_size), Some(max_heap)) = (
        options.bytes(Category::NewSize),
        options.bytes(Category::MaxHeapSize),
    ) {
        if units::percent_of(new_size, max_heap) >= 50 {
            findings.push(FindingId::NewRatioInverted);
        }
    }
    if options.is_disabled(Category::PrintAdaptiveSizePolicy) {
        findings.push(FindingId::Jdk8PrintAdaptiveResizePolicyDisabled);
    } else if options.is_enabled(Category::PrintAdaptiveSizePolicy) {
        findings.push(FindingId::Jdk8PrintAdaptiveResizePolicyEnabled);
    }
    if options.is_enabled(Category::PrintPromotionFailure) {
        findings.push(FindingId::Jdk8PrintPromotionFailure);
    }
    if options.has(Category::Batch) || options.is_disabled(Category::BackgroundCompilation) {
        findings.push(FindingId::BytecodeBackgroundCompilationDisabled);
    }
    if options.has(Category::Xint) {
        findings.push(FindingId::BytecodeCompileDisabled);
    }
    if options.has(Category::Comp) {
        findings.push(FindingId::BytecodeCompileFirstInvocation);
    }
    if options.is_disabled(Category::ClassUnloading) {
        findings.push(FindingId::ClassUnloadingDisabled);
    }
    if !options.is_disabled(Category::UseConcMarkSweepGc)
        && options.is_disabled(Category::CmsClassUnloadingEnabled)
    {
        findings.push(FindingId::CmsClassUnloadingDisabled);
    }
}

fn collector_combinations(
    options: &JvmOptions,
    context: &JvmContext,
    findings: &mut Vec<FindingId>,
) {
    if !options.is_disabled(Category::UseConcMarkSweepGc)
        && options.is_enabled(Category::CmsIncrementalMode)
        && options.has(Category::CmsInitiatingOccupancyFraction)
    {
        findings.push(FindingId::CmsIncModeWithInitOccupFract);
    }
    if !options.is_disabled(Category::UseConcMarkSweepGc)
        && options.has(Category::CmsInitiatingOccupancyFraction)
        && !options.is_enabled(Category::UseCmsInitiatingOccupancyOnly)
    {
        findings.push(FindingId::CmsInitOccupancyOnlyMissing);
    }
    if options.is_enabled(Category::UseConcMarkSweepGc) {
        if options.is_disabled(Category::UseParNewGc) {
            findings.push(FindingId::Jdk8CmsParNewDisabled);
        } else if options.is_enabled(Category::UseParNewGc) {
            findings.push(FindingId::Jdk8CmsParNewRedundant);
        }
    } else if options.is_disabled(Category::UseConcMarkSweepGc) {
        findings.push(FindingId::CmsDisabled);
    } else if options.has(Category::UseParNewGc)
        && !options.is_disabled(Category::UseParallelOldGc)
    {
        findings.push(FindingId::Jdk8CmsParNewCruft);
    }
    let parallel_default = options.is_default_collector()
        && matches!(context.major_version, Some(7) | Some(8));
    if options.is_enabled(Category::UseParallelGc) || parallel_default {
        if options.is_disabled(Category::UseParallelOldGc) {
            findings.push(FindingId::ParallelScavengeParallelSerialOld);
        } else if options.is_enabled(Category::UseParallelOldGc) {
            findings.push(FindingId::ParallelOldRedundant);
        }
    } else if !options.has(Category::UseParallelOldGc)
        && !options.slot_entries(Category::UseParallelOldGc).is_empty()
    {
        // The value was overridden away (CMS wins over parallel old)
        // but the token was on the command line.
        findings.push(FindingId::ParallelOldCruft);
    }
    if options.is_enabled(Category::DisableExplicitGc) {
        findings.push(FindingId::ExplicitGcDisabled);
        if options.is_enabled(Category::ExplicitGcInvokesConcurrent) {
            findings.push(FindingId::ExplicitGcDisabledConcurrent);
        }
    }
    if options.is_enabled(Category::PrintGcApplicationConcurrentTime) {
        findings.push(FindingId::PrintGcApplicationConcurrentTime);
    }
    if options.is_enabled(Category::PrintClassHistogram) {
        findings.push(FindingId::PrintClassHistogram);
    }
    if options.is_enabled(Category::PrintClassHistogramAfterFullGc) {
        findings.push(FindingId::PrintClassHistogramAfterFullGc);
    }
    if options.is_enabled(Category::PrintClassHistogramBeforeFullGc) {
        findings.push(FindingId::PrintClassHistogramBeforeFullGc);
    }
    match options.number(Category::MaxTenuringThreshold) {
        Some(0) => findings.push(FindingId::TenuringDisabled),
        Some(tenuring) if tenuring > 0 && tenuring < 15 => {
            findings.push(FindingId::MaxTenuringOverride)
        }
        _ => {}
    }
    if options.is_enabled(Category::UseMembar) {
        findings.push(FindingId::UseMembar);
    }
}

fn rmi_and_legacy(options: &JvmOptions, findings: &mut Vec<FindingId>) {
    let explicit_gc_disabled = options.is_enabled(Category::DisableExplicitGc);
    if explicit_gc_disabled {
        if options.sun_rmi_dgc_client_gc_interval().is_some() {
            findings.push(FindingId::RmiDgcClientGcIntervalRedundant);
        }
        if options.sun_rmi_dgc_server_gc_interval().is_some() {
            findings.push(FindingId::RmiDgcServerGcIntervalRedundant);
        }
    }
    // One hour / 24 hours, in milliseconds.
    if !explicit_gc_disabled {
        if let Some(interval) = options.sun_rmi_dgc_client_gc_interval() {
            match units::option_number(interval) {
                Some(millis) if millis < 3_600_000 => {
                    findings.push(FindingId::RmiDgcClientGcIntervalSmall)
                }
                Some(millis) if millis > 86_400_000 => {
                    findings.push(FindingId::RmiDgcClientGcIntervalLarge)
                }
                _ => {}
            }
        }
        if let Some(interval) = options.sun_rmi_dgc_server_gc_interval() {
            match units::option_number(interval) {
                Some(millis) if millis < 3_600_000 => {
                    findings.push(FindingId::RmiDgcServerGcIntervalSmall)
                }
                Some(millis) if millis > 86_400_000 => {
                    findings.push(FindingId::RmiDgcServerGcIntervalLarge)
                }
                _ => {}
            }
        }
    }
    if options.is_enabled(Category::PrintReferenceGc) {
        findings.push(FindingId::Jdk8PrintReferenceGcEnabled);
    }
    if options.is_enabled(Category::PrintStringDeduplicationStatistics) {
        findings.push(FindingId::Jdk8PrintStringDedupStatsEnabled);
    }
    if options.is_enabled(Category::PrintStringTableStatistics) {
        findings.push(FindingId::Jdk8PrintStringTableStatsEnabled);
    }
    if options.is_enabled(Category::TraceClassLoading) {
        findings.push(FindingId::TraceClassLoading);
    }
    if options.is_enabled(Category::TraceClassUnloading) {
        findings.push(FindingId::TraceClassUnloading);
    }
    if options.has(Category::SurvivorRatio) {
        findings.push(FindingId::SurvivorRatio);
    }
    if options.has(Category::TargetSurvivorRatio) {
        findings.push(FindingId::SurvivorRatioTarget);
    }
    if options.has(Category::FlightRecorderOptions) {
        findings.push(FindingId::Jfr);
    }
    if options.is_enabled(Category::EliminateLocks) {
        findings.push(FindingId::EliminateLocksEnabled);
    }
    if options.has(Category::UseVmInterruptibleIo) {
        findings.push(FindingId::Jdk8UseVmInterruptibleIo);
    }
    if options.get(Category::Verify) == Some("-Xverify:none") {
        findings.push(FindingId::VerifyNone);
    }
    if !options.has(Category::MaxHeapSize) {
        findings.push(FindingId::HeapMaxMissing);
    }
    if options.has(Category::Rs) {
        findings.push(FindingId::Rs);
    }
}

fn logging_and_safepoints(
    options: &JvmOptions,
    context: &JvmContext,
    findings: &mut Vec<FindingId>,
) {
    if context.major_at_most(8)
        && options.has(Category::LogGc)
        && !options.has(Category::UseGcLogFileRotation)
    {
        findings.push(FindingId::Jdk8GcLogFileRotationNotEnabled);
    }
    if options.is_gc_logging_to_stdout() {
        findings.push(FindingId::GcLogStdout);
    }
    if options.is_enabled(Category::DisableAttachMechanism) {
        findings.push(FindingId::DisableAttachMechanism);
    }
    if !options.is_disabled(Category::TieredCompilation) && options.has(Category::CompileThreshold)
    {
        findings.push(FindingId::CompileThresholdIgnored);
    }
    if options.is_enabled(Category::UnsyncloadClass) {
        findings.push(FindingId::DiagnosticUnsyncloadClass);
    }
    if options.has(Category::GuaranteedSafepointInterval) {
        findings.push(FindingId::DiagnosticGuaranteedSafepointInterval);
    }
    if options.is_enabled(Category::PrintSafepointStatistics) {
        findings.push(FindingId::DiagnosticPrintSafepointStatistics);
    }
    if options.is_enabled(Category::DebugNonSafepoints) {
        findings.push(FindingId::DiagnosticDebugNonSafepoints);
    }
}

fn worker_threads(options: &JvmOptions, findings: &mut Vec<FindingId>) {
    if options.has(Category::ParallelGcThreads) {
        if options.is_enabled(Category::UseSerialGc) {
            findings.push(FindingId::ParallelGcThreadsSerial);
        } else if options.number(Category::ParallelGcThreads) == Some(1) {
            findings.push(FindingId::ParallelGcThreads1);
        } else {
            findings.push(FindingId::ParallelGcThreads);
        }
    }
    if options.has(Category::CiCompilerCount) {
        findings.push(FindingId::CiCompilerCount);
    }
}

fn runtime_behavior(
    options: &JvmOptions,
    context: &JvmContext,
    effective: &[GarbageCollector],
    findings: &mut Vec<FindingId>,
) {
    if options.has(Category::MinHeapDeltaBytes) {
        findings.push(FindingId::MinHeapDeltaBytes);
    }
    if options.has(Category::Debug) {
        findings.push(FindingId::Debug);
    }
    if context.major_at_least(9) {
        if options.has(Category::LogGc) {
            findings.push(FindingId::Jdk9DeprecatedLoggc);
        }
        if options.has(Category::PrintGc) {
            findings.push(FindingId::Jdk9DeprecatedPrintGc);
        }
        if options.has(Category::PrintGcDetails) {
            findings.push(FindingId::Jdk9DeprecatedPrintGcDetails);
        }
    }
    if options.has(Category::Concurrentio) {
        findings.push(FindingId::Concurrentio);
    }
    if effective.contains(&GarbageCollector::G1)
        && options.is_enabled(Category::G1SummarizeRSetStats)
        && options
            .number(Category::G1SummarizeRSetStatsPeriod)
            .is_some_and(|period| period > 0)
    {
        findings.push(FindingId::G1SummarizeRsetStatsOutput);
    }
    if let Some(command) = options.get(Category::OnOutOfMemoryError) {
        // ExitOnOutOfMemoryError arrived in 8u92.
        if KILL_NINE.is_match(command)
            && (context.major_at_least(9)
                || (context.major_is(8) && context.minor_version >= 92))
        {
            findings.push(FindingId::OnOomeKill);
        } else {
            findings.push(FindingId::OnOome);
        }
    }
    if (effective.contains(&GarbageCollector::Cms) || effective.contains(&GarbageCollector::G1))
        && !options.is_enabled(Category::ExplicitGcInvokesConcurrent)
        && !options.is_enabled(Category::DisableExplicitGc)
    {
        findings.push(FindingId::ExplicitGcNotConcurrent);
    }
}

fn platform_fit(options: &JvmOptions, context: &JvmContext, findings: &mut Vec<FindingId>) {
    if context.bit != Bit::Bit32 {
        if options.has(Category::D64) {
            findings.push(FindingId::D64Redundant);
        }
        if options.has(Category::Server) {
            findings.push(FindingId::ServerRedundant);
        }
        if options.has(Category::Client) {
            findings.push(FindingId::ClientIgnored);
        }
    }
    if context.container
        && !options.is_disabled(Category::UsePerfData)
        && !options.is_enabled(Category::PerfDisableSharedMem)
    {
        findings.push(FindingId::ContainerPerfDataDisk);
    }
    if options.is_disabled(Category::UsePerfData) {
        findings.push(FindingId::PerfDataDisabled);
    }
    if context.major_at_most(8) {
        if !options.has(Category::PrintGcDetails) && options.is_gc_logging_enabled() {
            findings.push(FindingId::Jdk8PrintGcDetailsMissing);
        } else if options.is_disabled(Category::PrintGcDetails) {
            findings.push(FindingId::Jdk8PrintGcDetailsDisabled);
        }
    }
    if context.major_is(11) && !options.get_all(Category::Log).is_empty() {
        let have_details = options
            .get_all(Category::Log)
            .iter()
            .any(|entry| has_gc_star_details(entry));
        if !have_details {
            findings.push(FindingId::Jdk11PrintGcDetailsMissing);
        }
    }
    if !context.container
        && options.has(Category::InitialHeapSize)
        && options.has(Category::MaxHeapSize)
        && options.bytes(Category::InitialHeapSize) != options.bytes(Category::MaxHeapSize)
    {
        findings.push(FindingId::HeapMinNotEqualMax);
    }
    if options.has(Category::LargePageSizeInBytes) {
        match context.os {
            Os::Linux => findings.push(FindingId::LargePageSizeInBytesLinux),
            Os::Windows => findings.push(FindingId::LargePageSizeInBytesWindows),
            _ => {}
        }
    }
    if let Some(stack) = options.get(Category::ThreadStackSize) {
        if let Some(kilobytes) = units::stack_option_kb(stack) {
            if kilobytes < 1 {
                findings.push(FindingId::ThreadStackSizeTiny);
            } else if kilobytes < 128 {
                findings.push(FindingId::ThreadStackSizeSmall);
            } else if kilobytes > 1024 {
                findings.push(FindingId::ThreadStackSizeLarge);
            }
        }
    } else if context.bit == Bit::Bit32 {
        findings.push(FindingId::ThreadStackSizeNotSet32);
    }
}

fn thread_priorities(options: &JvmOptions, findings: &mut Vec<FindingId>) {
    if !options.has(Category::UseThreadPriorities)
        || options.is_enabled(Category::UseThreadPriorities)
    {
        if options.is_enabled(Category::UseThreadPriorities) {
            findings.push(FindingId::UseThreadPrioritiesRedundant);
        }
        if let Some(policy) = options.number(Category::ThreadPriorityPolicy) {
            if policy < 0 {
                findings.push(FindingId::ThreadPriorityPolicyBad);
            } else if policy == 0 {
                findings.push(FindingId::ThreadPriorityPolicyRedundant);
            } else if policy == 1 {
                findings.push(FindingId::ThreadPriorityPolicyAggressive);
            } else {
                findings.push(FindingId::ThreadPriorityPolicyAggressiveBackdoor);
            }
        }
    } else if options.is_disabled(Category::UseThreadPriorities) {
        findings.push(FindingId::UseThreadPrioritiesDisabled);
        if options.has(Category::ThreadPriorityPolicy) {
            findings.push(FindingId::ThreadPriorityPolicyIgnored);
        }
    }
}

fn closing_checks(options: &JvmOptions, context: &JvmContext, findings: &mut Vec<FindingId>) {
    if options.has(Category::CmsWaitDuration) {
        findings.push(FindingId::CmsWaitDuration);
    }
    if options.has(Category::CmsEdenChunksRecordAlways) {
        findings.push(FindingId::CmsEdenChunksRecordAlways);
    }
    if options.is_enabled(Category::UseCondCardMark) {
        findings.push(FindingId::UseCondCardMark);
    }
    if options.unaccounted_disabled_options().is_some() {
        findings.push(FindingId::UnaccountedOptionsDisabled);
    }
    if options.is_enabled(Category::UseParNewGc) {
        if !options.has(Category::UseConcMarkSweepGc) && !options.has(Category::UseParallelOldGc)
        {
            findings.push(FindingId::CmsMissing);
        } else if options.is_disabled(Category::UseParallelOldGc) {
            findings.push(FindingId::ParNewSerialOld);
        }
    }
    if options.duplicates().is_some() {
        findings.push(FindingId::DuplicateOptions);
    }
    if context.os != Os::Unidentified
        && context.os != Os::Solaris
        && options.has(Category::MaxFdLimit)
    {
        findings.push(FindingId::MaxFdLimitIgnored);
    }
    if options.is_disabled(Category::UseGcOverheadLimit) {
        findings.push(FindingId::GcOverheadLimitDisabled);
    }
    if options.is_enabled(Category::IgnoreUnrecognizedVmOptions) {
        findings.push(FindingId::IgnoreUnrecognizedVmOptions);
    }
    if options.is_enabled(Category::UseCmsCompactAtFullCollection) {
        findings.push(FindingId::Jdk8CmsCompactAtFullGcEnabled);
    }
    if options.has(Category::CheckJni) {
        findings.push(FindingId::CheckJniEnabled);
    }
}

/// Full-detail selector `gc*` present with at least one character on
/// either side and not immediately reduced to `=off`.
fn has_gc_star_details(entry: &str) -> bool {
    entry.match_indices("gc*").any(|(at, _)| {
        let rest = &entry[at + 3..];
        at > 0 && !rest.is_empty() && !rest.starts_with("=off")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collectors;

    fn run_with(options: &str, context: &JvmContext) -> Vec<FindingId> {
        let options = JvmOptions::parse(options);
        let inferred = collectors::from_flags(&options, context);
        let effective = collectors::effective(&options, context);
        run(&options, context, &inferred, &effective)
    }

    fn run_str(options: &str) -> Vec<FindingId> {
        run_with(options, &JvmContext::new())
    }

    fn jdk(major: u32, minor: u32) -> JvmContext {
        JvmContext {
            major_version: Some(major),
            minor_version: minor,
            ..JvmContext::default()
        }
    }

    #[test]
    fn empty_input_produces_no_findings() {
        assert!(run_str("").is_empty());
        assert!(run_str("   ").is_empty());
    }

    #[test]
    fn collector_mismatch_names_g1_over_parallel() {
        let context = JvmContext {
            garbage_collectors: vec![
                GarbageCollector::ParallelScavenge,
                GarbageCollector::ParallelOld,
            ],
            ..JvmContext::default()
        };
        let findings = run_with("-XX:+UseG1GC", &context);
        assert!(findings.contains(&FindingId::G1IgnoredParallel));
        assert!(!findings.contains(&FindingId::GcIgnored));

        let context = JvmContext {
            garbage_collectors: vec![GarbageCollector::Zgc],
            ..JvmContext::default()
        };
        assert!(run_with("-XX:+UseSerialGC", &context).contains(&FindingId::GcIgnored));
    }

    #[test]
    fn collector_evidence_subset_is_consistent() {
        let context = JvmContext {
            garbage_collectors: vec![GarbageCollector::Cms],
            ..JvmContext::default()
        };
        let findings = run_with("-XX:+UseConcMarkSweepGC", &context);
        assert!(!findings.contains(&FindingId::GcIgnored));
        assert!(!findings.contains(&FindingId::G1IgnoredParallel));
    }

    #[test]
    fn remote_debugging_reported_once() {
        let findings = run_str(
            "-agentlib:jdwp=transport=dt_socket,server=y,address=8000 \
             -Xrunjdwp:transport=dt_socket,address=8787",
        );
        let count = findings
            .iter()
            .filter(|&&id| id == FindingId::RemoteDebuggingEnabled)
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn compressed_pointer_32g_boundary() {
        let findings = run_str("-Xmx32g");
        assert!(!findings.contains(&FindingId::CompOopsEnabledHeapGt32g));
        let findings = run_str("-Xmx32g -XX:+UseCompressedOops -XX:CompressedClassSpaceSize=1g");
        assert!(findings.contains(&FindingId::CompOopsEnabledHeapGt32g));
        assert!(findings.contains(&FindingId::CompClassSizeHeapGt32g));

        let findings = run_str("-Xmx31g -XX:-UseCompressedOops");
        assert!(findings.contains(&FindingId::CompOopsDisabledHeapLt32g));
        assert!(findings.contains(&FindingId::CompClassDisabledHeapLt32g));
    }

    #[test]
    fn compressed_pointer_unknown_heap() {
        let findings = run_str("-XX:-UseCompressedOops");
        assert!(findings.contains(&FindingId::CompOopsDisabledHeapUnknown));
        // Quarter-of-memory ergonomics resolve the heap when the
        // context knows the machine.
        let context = JvmContext {
            memory: 256 * GIGABYTE,
            ..JvmContext::default()
        };
        let findings = run_with("-XX:-UseCompressedOops", &context);
        assert!(!findings.contains(&FindingId::CompOopsEnabledHeapGt32g));
        assert!(!findings.contains(&FindingId::CompOopsDisabledHeapUnknown));
        // 64G effective heap: the disable is what the JVM does anyway.
        assert!(!findings.contains(&FindingId::CompOopsDisabledHeapLt32g));
    }

    #[test]
    fn metaspace_smaller_than_class_space() {
        let findings = run_str("-XX:MaxMetaspaceSize=256m");
        assert!(findings.contains(&FindingId::MetaspaceLtCompClass));
        let findings = run_str("-XX:MaxMetaspaceSize=256m -XX:CompressedClassSpaceSize=128m");
        assert!(!findings.contains(&FindingId::MetaspaceLtCompClass));
    }

    #[test]
    fn experimental_exception_for_g1_before_u40() {
        let options = "-XX:+UnlockExperimentalVMOptions -XX:G1MixedGCLiveThresholdPercent=85 \
                       -XX:G1HeapWastePercent=5 -XX:+UseG1GC";
        let findings = run_with(options, &jdk(8, 20));
        assert!(!findings.contains(&FindingId::ExperimentalVmOptionsEnabled));
        assert!(findings.contains(&FindingId::Jdk8G1PriorU40));
        assert!(!findings.contains(&FindingId::Jdk8G1PriorU40Recs));
        // Same options on a later JDK lose the excuse.
        let findings = run_with(options, &jdk(8, 40));
        assert!(findings.contains(&FindingId::ExperimentalVmOptionsEnabled));
    }

    #[test]
    fn fast_unordered_timestamps_imply_experimental() {
        let findings = run_str("-XX:+UseFastUnorderedTimeStamps");
        assert!(findings.contains(&FindingId::FastUnorderedTimestamps));
        let count = findings
            .iter()
            .filter(|&&id| id == FindingId::ExperimentalVmOptionsEnabled)
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn tenuring_bands() {
        assert!(run_str("-XX:MaxTenuringThreshold=0").contains(&FindingId::TenuringDisabled));
        assert!(run_str("-XX:MaxTenuringThreshold=7").contains(&FindingId::MaxTenuringOverride));
        let findings = run_str("-XX:MaxTenuringThreshold=15");
        assert!(!findings.contains(&FindingId::TenuringDisabled));
        assert!(!findings.contains(&FindingId::MaxTenuringOverride));
    }

    #[test]
    fn parallel_old_cruft_after_cms_override() {
        let findings = run_str("-XX:+UseParallelOldGC -XX:+UseConcMarkSweepGC");
        assert!(findings.contains(&FindingId::ParallelOldCruft));
        assert!(!findings.contains(&FindingId::ParallelOldRedundant));
    }

    #[test]
    fn parallel_default_jdk8_with_parallel_old_disabled() {
        let findings = run_with("-XX:-UseParallelOldGC", &jdk(8, 0));
        assert!(findings.contains(&FindingId::ParallelScavengeParallelSerialOld));
        // Unknown JDK version is not assumed to default to parallel.
        let findings = run_str("-XX:-UseParallelOldGC");
        assert!(!findings.contains(&FindingId::ParallelScavengeParallelSerialOld));
    }

    #[test]
    fn par_new_without_an_old_collector() {
        assert!(run_str("-XX:+UseParNewGC").contains(&FindingId::CmsMissing));
        let findings = run_str("-XX:+UseParNewGC -XX:-UseParallelOldGC");
        assert!(findings.contains(&FindingId::ParNewSerialOld));
        assert!(!findings.contains(&FindingId::CmsMissing));
    }

    #[test]
    fn unified_logging_detail_quirks() {
        // A bare gc* selector at the end of the entry does not count as
        // detail; there must be a character after the selector.
        let findings = run_with("-Xlog:gc*", &jdk(11, 0));
        assert!(findings.contains(&FindingId::Jdk11PrintGcDetailsMissing));
        let findings = run_with("-Xlog:gc*:file=gc.log", &jdk(11, 0));
        assert!(!findings.contains(&FindingId::Jdk11PrintGcDetailsMissing));
        let findings = run_with("-Xlog:gc*=off:file=gc.log", &jdk(11, 0));
        assert!(findings.contains(&FindingId::Jdk11PrintGcDetailsMissing));
    }

    #[test]
    fn unified_logging_rotation_and_size() {
        let findings = run_with("-Xlog:gc*:file=gc.log::filecount=0,filesize=50M", &jdk(11, 0));
        assert!(findings.contains(&FindingId::Jdk11GcLogFileRotationDisabled));
        assert!(findings.contains(&FindingId::Jdk11GcLogFileOverwrite));
        assert!(!findings.contains(&FindingId::Jdk11GcLogFileSizeSmall));

        let findings = run_with("-Xlog:gc*:file=gc.log::filesize=1M", &jdk(11, 0));
        assert!(findings.contains(&FindingId::Jdk11GcLogFileSizeSmall));
    }

    #[test]
    fn on_oome_kill_needs_a_modern_jdk() {
        let kill = "-XX:OnOutOfMemoryError=kill -9 %p";
        assert!(run_with(kill, &jdk(8, 92)).contains(&FindingId::OnOomeKill));
        assert!(run_with(kill, &jdk(8, 91)).contains(&FindingId::OnOome));
        assert!(run_with(kill, &jdk(17, 0)).contains(&FindingId::OnOomeKill));
        // Unknown version gets the generic advice.
        assert!(run_str(kill).contains(&FindingId::OnOome));
    }

    #[test]
    fn thread_stack_size_buckets() {
        assert!(run_str("-Xss512").contains(&FindingId::ThreadStackSizeTiny));
        assert!(run_str("-Xss64k").contains(&FindingId::ThreadStackSizeSmall));
        assert!(run_str("-Xss2m").contains(&FindingId::ThreadStackSizeLarge));
        let findings = run_str("-Xss512k");
        assert!(!findings.contains(&FindingId::ThreadStackSizeTiny));
        assert!(!findings.contains(&FindingId::ThreadStackSizeSmall));
        assert!(!findings.contains(&FindingId::ThreadStackSizeLarge));
        // -XX:ThreadStackSize is in kilobytes, so 256 means 256K.
        let findings = run_str("-XX:ThreadStackSize=256");
        assert!(!findings.contains(&FindingId::ThreadStackSizeSmall));
    }

    #[test]
    fn thread_priority_policy_branches() {
        assert!(run_str("-XX:ThreadPriorityPolicy=-1")
            .contains(&FindingId::ThreadPriorityPolicyBad));
        assert!(run_str("-XX:ThreadPriorityPolicy=0")
            .contains(&FindingId::ThreadPriorityPolicyRedundant));
        assert!(run_str("-XX:ThreadPriorityPolicy=1")
            .contains(&FindingId::ThreadPriorityPolicyAggressive));
        assert!(run_str("-XX:ThreadPriorityPolicy=42")
            .contains(&FindingId::ThreadPriorityPolicyAggressiveBackdoor));
        let findings = run_str("-XX:-UseThreadPriorities -XX:ThreadPriorityPolicy=1");
        assert!(findings.contains(&FindingId::UseThreadPrioritiesDisabled));
        assert!(findings.contains(&FindingId::ThreadPriorityPolicyIgnored));
        assert!(!findings.contains(&FindingId::ThreadPriorityPolicyAggressive));
    }

    #[test]
    fn explicit_gc_not_concurrent_uses_effective_collectors() {
        let findings = run_str("-XX:+UseConcMarkSweepGC");
        assert!(findings.contains(&FindingId::ExplicitGcNotConcurrent));
        let findings = run_str("-XX:+UseConcMarkSweepGC -XX:+ExplicitGCInvokesConcurrent");
        assert!(!findings.contains(&FindingId::ExplicitGcNotConcurrent));
    }

    #[test]
    fn duplicates_and_unaccounted() {
        let findings = run_str("-Xmx1g -Xmx2g -XX:-UsePerfData");
        assert!(findings.contains(&FindingId::DuplicateOptions));
        assert!(findings.contains(&FindingId::UnaccountedOptionsDisabled));
        // Unrecognized disabled options are reported by the undefined
        // rule instead.
        let findings = run_str("-XX:-NeverSeenBefore");
        assert!(findings.contains(&FindingId::OptsUndefined));
        assert!(!findings.contains(&FindingId::UnaccountedOptionsDisabled));
    }

    #[test]
    fn gc_star_detail_scan() {
        assert!(has_gc_star_details("-Xlog:gc*:file=gc.log"));
        assert!(!has_gc_star_details("-Xlog:gc*"));
        assert!(!has_gc_star_details("-Xlog:gc*=off:file=gc.log"));
        assert!(has_gc_star_details("-Xlog:gc*=info:file=gc.log"));
        assert!(!has_gc_star_details("gc*:stdout"));
    }
}

//! The finding catalog: every diagnostic the rule engine can emit,
//! declared in one place with its severity and message template.
//!
//! Rules only ever push a `FindingId`; the severity and message come
//! from here. A handful of templates are completed at render time with
//! computed text (token lists, metaspace arithmetic).

use serde::{Deserialize, Serialize};

/// Weight of a finding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warn,
    Error,
}

/// Identifier for every diagnostic the analysis can produce, declared
/// in rule evaluation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FindingId {
    G1IgnoredParallel,
    GcIgnored,
    RemoteDebuggingEnabled,
    OptsUndefined,
    Metaspace,
    AdaptiveSizePolicyDisabled,
    PermSize,
    MaxPermSize,
    HeapDumpOnOomeMissing,
    HeapDumpOnOomeDisabled,
    HeapDumpPathMissing,
    HeapDumpPathFilename,
    CmsParallelInitialMarkDisabled,
    CmsParallelRemarkDisabled,
    MetaspaceClassMetadataAndCompClassSpace,
    MetaspaceClassMetadata,
    CompOopsDisabledHeapUnknown,
    CompOopsDisabledHeapLt32g,
    CompClassDisabledHeapUnknown,
    CompClassDisabledHeapLt32g,
    MetaspaceLtCompClass,
    CompClassSizeCompOopsDisabled,
    CompClassSizeCompClassDisabled,
    CompOopsEnabledHeapGt32g,
    CompClassEnabledHeapGt32g,
    CompClassSizeHeapGt32g,
    VerboseClass,
    TieredCompilationEnabled,
    TieredCompilationDisabled,
    BiasedLockingDisabled,
    Jdk8PrintGcCauseDisabled,
    Jdk8PrintGcCause,
    Jdk8PrintHeapAtGc,
    Jdk8PrintTenuringDistribution,
    Jdk8PrintFlsStatistics,
    ExperimentalVmOptionsEnabled,
    Jdk8G1PriorU40,
    Jdk8G1PriorU40Recs,
    CgroupMemoryLimitOverride,
    CgroupMemoryLimit,
    FastUnorderedTimestamps,
    G1MixedGcLiveThresholdPercent,
    DiagnosticVmOptionsEnabled,
    Instrumentation,
    CruftExplicitGcInvokesConcurrentAndUnloadsClasses,
    Jdk8GcLogFileOverwrite,
    Jdk8GcLogFileRotationDisabled,
    Jdk8GcLogFileRotationDisabledNum,
    Jdk11GcLogFileRotationDisabled,
    Jdk11GcLogFileOverwrite,
    Jdk11GcLogFileSize0,
    Jdk8GcLogFileSizeSmall,
    Jdk11GcLogFileSizeSmall,
    JmxEnabled,
    NativeAgent,
    NewRatioInverted,
    Jdk8PrintAdaptiveResizePolicyDisabled,
    Jdk8PrintAdaptiveResizePolicyEnabled,
    Jdk8PrintPromotionFailure,
    BytecodeBackgroundCompilationDisabled,
    BytecodeCompileDisabled,
    BytecodeCompileFirstInvocation,
    ClassUnloadingDisabled,
    CmsClassUnloadingDisabled,
    CmsIncModeWithInitOccupFract,
    CmsInitOccupancyOnlyMissing,
    Jdk8CmsParNewDisabled,
    Jdk8CmsParNewRedundant,
    CmsDisabled,
    Jdk8CmsParNewCruft,
    ParallelScavengeParallelSerialOld,
    ParallelOldRedundant,
    ParallelOldCruft,
    ExplicitGcDisabled,
    ExplicitGcDisabledConcurrent,
    PrintGcApplicationConcurrentTime,
    PrintClassHistogram,
    PrintClassHistogramAfterFullGc,
    PrintClassHistogramBeforeFullGc,
    TenuringDisabled,
    MaxTenuringOverride,
    UseMembar,
    RmiDgcClientGcIntervalRedundant,
    RmiDgcServerGcIntervalRedundant,
    RmiDgcClientGcIntervalSmall,
    RmiDgcClientGcIntervalLarge,
    RmiDgcServerGcIntervalSmall,
    RmiDgcServerGcIntervalLarge,
    Jdk8PrintReferenceGcEnabled,
    Jdk8PrintStringDedupStatsEnabled,
    Jdk8PrintStringTableStatsEnabled,
    TraceClassLoading,
    TraceClassUnloading,
    SurvivorRatio,
    SurvivorRatioTarget,
    Jfr,
    EliminateLocksEnabled,
    Jdk8UseVmInterruptibleIo,
    VerifyNone,
    HeapMaxMissing,
    Rs,
    Jdk8GcLogFileRotationNotEnabled,
    GcLogStdout,
    DisableAttachMechanism,
    CompileThresholdIgnored,
    DiagnosticUnsyncloadClass,
    DiagnosticGuaranteedSafepointInterval,
    DiagnosticPrintSafepointStatistics,
    DiagnosticDebugNonSafepoints,
    ParallelGcThreadsSerial,
    ParallelGcThreads1,
    ParallelGcThreads,
    CiCompilerCount,
    MinHeapDeltaBytes,
    Debug,
    Jdk9DeprecatedLoggc,
    Jdk9DeprecatedPrintGc,
    Jdk9DeprecatedPrintGcDetails,
    Concurrentio,
    G1SummarizeRsetStatsOutput,
    OnOomeKill,
    OnOome,
    ExplicitGcNotConcurrent,
    D64Redundant,
    ServerRedundant,
    ClientIgnored,
    ContainerPerfDataDisk,
    PerfDataDisabled,
    Jdk8PrintGcDetailsMissing,
    Jdk8PrintGcDetailsDisabled,
    Jdk11PrintGcDetailsMissing,
    HeapMinNotEqualMax,
    LargePageSizeInBytesLinux,
    LargePageSizeInBytesWindows,
    ThreadStackSizeNotSet32,
    ThreadStackSizeTiny,
    ThreadStackSizeSmall,
    ThreadStackSizeLarge,
    UseThreadPrioritiesRedundant,
    ThreadPriorityPolicyBad,
    ThreadPriorityPolicyRedundant,
    ThreadPriorityPolicyAggressive,
    ThreadPriorityPolicyAggressiveBackdoor,
    UseThreadPrioritiesDisabled,
    ThreadPriorityPolicyIgnored,
    CmsWaitDuration,
    CmsEdenChunksRecordAlways,
    UseCondCardMark,
    UnaccountedOptionsDisabled,
    CmsMissing,
    ParNewSerialOld,
    DuplicateOptions,
    MaxFdLimitIgnored,
    GcOverheadLimitDisabled,
    IgnoreUnrecognizedVmOptions,
    Jdk8CmsCompactAtFullGcEnabled,
    CheckJniEnabled,
}

impl FindingId {
    /// Every finding the engine can emit, in evaluation order.
    pub const ALL: [FindingId; 157] = [
        FindingId::G1IgnoredParallel,
        FindingId::GcIgnored,
        FindingId::RemoteDebuggingEnabled,
        FindingId::OptsUndefined,
        FindingId::Metaspace,
        FindingId::AdaptiveSizePolicyDisabled,
        FindingId::PermSize,
        FindingId::MaxPermSize,
        FindingId::HeapDumpOnOomeMissing,
        FindingId::HeapDumpOnOomeDisabled,
        FindingId::HeapDumpPathMissing,
        FindingId::HeapDumpPathFilename,
        FindingId::CmsParallelInitialMarkDisabled,
        FindingId::CmsParallelRemarkDisabled,
        FindingId::MetaspaceClassMetadataAndCompClassSpace,
        FindingId::MetaspaceClassMetadata,
        FindingId::CompOopsDisabledHeapUnknown,
        FindingId::CompOopsDisabledHeapLt32g,
        FindingId::CompClassDisabledHeapUnknown,
        FindingId::CompClassDisabledHeapLt32g,
        FindingId::MetaspaceLtCompClass,
        FindingId::CompClassSizeCompOopsDisabled,
        FindingId::CompClassSizeCompClassDisabled,
        FindingId::CompOopsEnabledHeapGt32g,
        FindingId::CompClassEnabledHeapGt32g,
        FindingId::CompClassSizeHeapGt32g,
        FindingId::VerboseClass,
        FindingId::TieredCompilationEnabled,
        FindingId::TieredCompilationDisabled,
        FindingId::BiasedLockingDisabled,
        FindingId::Jdk8PrintGcCauseDisabled,
        FindingId::Jdk8PrintGcCause,
        FindingId::Jdk8PrintHeapAtGc,
        FindingId::Jdk8PrintTenuringDistribution,
        FindingId::Jdk8PrintFlsStatistics,
        FindingId::ExperimentalVmOptionsEnabled,
        FindingId::Jdk8G1PriorU40,
        FindingId::Jdk8G1PriorU40Recs,
        FindingId::CgroupMemoryLimitOverride,
        FindingId::CgroupMemoryLimit,
        FindingId::FastUnorderedTimestamps,
        FindingId::G1MixedGcLiveThresholdPercent,
        FindingId::DiagnosticVmOptionsEnabled,
        FindingId::Instrumentation,
        FindingId::CruftExplicitGcInvokesConcurrentAndUnloadsClasses,
        FindingId::Jdk8GcLogFileOverwrite,
        FindingId::Jdk8GcLogFileRotationDisabled,
        FindingId::Jdk8GcLogFileRotationDisabledNum,
        FindingId::Jdk11GcLogFileRotationDisabled,
        FindingId::Jdk11GcLogFileOverwrite,
        FindingId::Jdk11GcLogFileSize0,
        FindingId::Jdk8GcLogFileSizeSmall,
        FindingId::Jdk11GcLogFileSizeSmall,
        FindingId::JmxEnabled,
        FindingId::NativeAgent,
        FindingId::NewRatioInverted,
        FindingId::Jdk8PrintAdaptiveResizePolicyDisabled,
        FindingId::Jdk8PrintAdaptiveResizePolicyEnabled,
        FindingId::Jdk8PrintPromotionFailure,
        FindingId::BytecodeBackgroundCompilationDisabled,
        FindingId::BytecodeCompileDisabled,
        FindingId::BytecodeCompileFirstInvocation,
        FindingId::ClassUnloadingDisabled,
        FindingId::CmsClassUnloadingDisabled,
        FindingId::CmsIncModeWithInitOccupFract,
        FindingId::CmsInitOccupancyOnlyMissing,
        FindingId::Jdk8CmsParNewDisabled,
        FindingId::Jdk8CmsParNewRedundant,
        FindingId::CmsDisabled,
        FindingId::Jdk8CmsParNewCruft,
        FindingId::ParallelScavengeParallelSerialOld,
        FindingId::ParallelOldRedundant,
        FindingId::ParallelOldCruft,
        FindingId::ExplicitGcDisabled,
        FindingId::ExplicitGcDisabledConcurrent,
        FindingId::PrintGcApplicationConcurrentTime,
        FindingId::PrintClassHistogram,
        FindingId::PrintClassHistogramAfterFullGc,
        FindingId::PrintClassHistogramBeforeFullGc,
        FindingId::TenuringDisabled,
        FindingId::MaxTenuringOverride,
        FindingId::UseMembar,
        FindingId::RmiDgcClientGcIntervalRedundant,
        FindingId::RmiDgcServerGcIntervalRedundant,
        FindingId::RmiDgcClientGcIntervalSmall,
        FindingId::RmiDgcClientGcIntervalLarge,
        FindingId::RmiDgcServerGcIntervalSmall,
        FindingId::RmiDgcServerGcIntervalLarge,
        FindingId::Jdk8PrintReferenceGcEnabled,
        FindingId::Jdk8PrintStringDedupStatsEnabled,
        FindingId::Jdk8PrintStringTableStatsEnabled,
        FindingId::TraceClassLoading,
        FindingId::TraceClassUnloading,
        FindingId::SurvivorRatio,
        FindingId::SurvivorRatioTarget,
        FindingId::Jfr,
        FindingId::EliminateLocksEnabled,
        FindingId::Jdk8UseVmInterruptibleIo,
        FindingId::VerifyNone,
        FindingId::HeapMaxMissing,
        FindingId::Rs,
        FindingId::Jdk8GcLogFileRotationNotEnabled,
        FindingId::GcLogStdout,
        FindingId::DisableAttachMechanism,
        FindingId::CompileThresholdIgnored,
        FindingId::DiagnosticUnsyncloadClass,
        FindingId::DiagnosticGuaranteedSafepointInterval,
        FindingId::DiagnosticPrintSafepointStatistics,
        FindingId::DiagnosticDebugNonSafepoints,
        FindingId::ParallelGcThreadsSerial,
        FindingId::ParallelGcThreads1,
        FindingId::ParallelGcThreads,
        FindingId::CiCompilerCount,
        FindingId::MinHeapDeltaBytes,
        FindingId::Debug,
        FindingId::Jdk9DeprecatedLoggc,
        FindingId::Jdk9DeprecatedPrintGc,
        FindingId::Jdk9DeprecatedPrintGcDetails,
        FindingId::Concurrentio,
        FindingId::G1SummarizeRsetStatsOutput,
        FindingId::OnOomeKill,
        FindingId::OnOome,
        FindingId::ExplicitGcNotConcurrent,
        FindingId::D64Redundant,
        FindingId::ServerRedundant,
        FindingId::ClientIgnored,
        FindingId::ContainerPerfDataDisk,
        FindingId::PerfDataDisabled,
        FindingId::Jdk8PrintGcDetailsMissing,
        FindingId::Jdk8PrintGcDetailsDisabled,
        FindingId::Jdk11PrintGcDetailsMissing,
        FindingId::HeapMinNotEqualMax,
        FindingId::LargePageSizeInBytesLinux,
        FindingId::LargePageSizeInBytesWindows,
        FindingId::ThreadStackSizeNotSet32,
        FindingId::ThreadStackSizeTiny,
        FindingId::ThreadStackSizeSmall,
        FindingId::ThreadStackSizeLarge,
        FindingId::UseThreadPrioritiesRedundant,
        FindingId::ThreadPriorityPolicyBad,
        FindingId::ThreadPriorityPolicyRedundant,
        FindingId::ThreadPriorityPolicyAggressive,
        FindingId::ThreadPriorityPolicyAggressiveBackdoor,
        FindingId::UseThreadPrioritiesDisabled,
        FindingId::ThreadPriorityPolicyIgnored,
        FindingId::CmsWaitDuration,
        FindingId::CmsEdenChunksRecordAlways,
        FindingId::UseCondCardMark,
        FindingId::UnaccountedOptionsDisabled,
        FindingId::CmsMissing,
        FindingId::ParNewSerialOld,
        FindingId::DuplicateOptions,
        FindingId::MaxFdLimitIgnored,
        FindingId::GcOverheadLimitDisabled,
        FindingId::IgnoreUnrecognizedVmOptions,
        FindingId::Jdk8CmsCompactAtFullGcEnabled,
        FindingId::CheckJniEnabled,
    ];

    pub fn severity(self) -> Severity {
        use FindingId::*;
        match self {
            G1IgnoredParallel | GcIgnored | RemoteDebuggingEnabled | Jdk8CmsParNewDisabled
            | ParallelScavengeParallelSerialOld | ParallelGcThreads1 | CmsMissing
            | ParNewSerialOld | DuplicateOptions | Jdk8CmsCompactAtFullGcEnabled => {
                Severity::Error
            }
            AdaptiveSizePolicyDisabled
            | HeapDumpOnOomeDisabled
            | HeapDumpPathFilename
            | CmsParallelInitialMarkDisabled
            | CmsParallelRemarkDisabled
            | CompOopsDisabledHeapUnknown
            | CompOopsDisabledHeapLt32g
            | CompClassDisabledHeapUnknown
            | CompClassDisabledHeapLt32g
            | MetaspaceLtCompClass
            | CompOopsEnabledHeapGt32g
            | CompClassEnabledHeapGt32g
            | CompClassSizeHeapGt32g
            | BiasedLockingDisabled
            | Jdk8PrintGcCauseDisabled
            | ExperimentalVmOptionsEnabled
            | Jdk8G1PriorU40
            | Jdk8G1PriorU40Recs
            | CgroupMemoryLimitOverride
            | CgroupMemoryLimit
            | FastUnorderedTimestamps
            | G1MixedGcLiveThresholdPercent
            | Jdk8GcLogFileOverwrite
            | Jdk8GcLogFileRotationDisabled
            | Jdk8GcLogFileRotationDisabledNum
            | Jdk11GcLogFileRotationDisabled
            | Jdk11GcLogFileOverwrite
            | Jdk11GcLogFileSize0
            | Jdk8GcLogFileSizeSmall
            | Jdk11GcLogFileSizeSmall
            | BytecodeBackgroundCompilationDisabled
            | BytecodeCompileDisabled
            | BytecodeCompileFirstInvocation
            | ClassUnloadingDisabled
            | CmsClassUnloadingDisabled
            | CmsIncModeWithInitOccupFract
            | ExplicitGcDisabled
            | ExplicitGcDisabledConcurrent
            | PrintClassHistogram
            | PrintClassHistogramAfterFullGc
            | PrintClassHistogramBeforeFullGc
            | TenuringDisabled
            | UseMembar
            | RmiDgcClientGcIntervalSmall
            | RmiDgcClientGcIntervalLarge
            | RmiDgcServerGcIntervalSmall
            | RmiDgcServerGcIntervalLarge
            | Jdk8UseVmInterruptibleIo
            | VerifyNone
            | Rs
            | Jdk8GcLogFileRotationNotEnabled
            | DisableAttachMechanism
            | DiagnosticUnsyncloadClass
            | DiagnosticGuaranteedSafepointInterval
            | DiagnosticPrintSafepointStatistics
            | DiagnosticDebugNonSafepoints
            | Concurrentio
            | ExplicitGcNotConcurrent
            | ContainerPerfDataDisk
            | Jdk8PrintGcDetailsMissing
            | Jdk8PrintGcDetailsDisabled
            | ThreadStackSizeNotSet32
            | ThreadStackSizeTiny
            | ThreadStackSizeSmall
            | ThreadStackSizeLarge
            | ThreadPriorityPolicyBad
            | ThreadPriorityPolicyAggressive
            | ThreadPriorityPolicyAggressiveBackdoor
            | UseThreadPrioritiesDisabled
            | ThreadPriorityPolicyIgnored
            | UseCondCardMark
            | CheckJniEnabled => Severity::Warn,
            _ => Severity::Info,
        }
    }

    /// Message template. List-carrying findings end with a colon and
    /// are completed at render time; the two metaspace findings embed a
    /// formula the renderer replaces with computed sizes.
    pub fn template(self) -> &'static str {
        use FindingId::*;
        match self {
            G1IgnoredParallel => {
                "-XX:+UseG1GC is set, but collector evidence shows the parallel collector \
                 running. The G1 option is being ignored."
            }
            GcIgnored => {
                "The collector the JVM is running does not match the collector specified on \
                 the command line. The GC options are being ignored."
            }
            RemoteDebuggingEnabled => {
                "Remote debugging is enabled with the JDWP socket transport. It carries a \
                 large performance and security cost and should not be enabled in production."
            }
            OptsUndefined => "Unrecognized JVM options:",
            Metaspace => {
                "An initial and/or max metaspace size is being set. Unless there is a known \
                 metadata leak, it is generally better to let the JVM manage metaspace growth."
            }
            AdaptiveSizePolicyDisabled => {
                "The adaptive size policy is disabled (-XX:-UseAdaptiveSizePolicy) with \
                 different initial and max heap sizes. The generations are sized from the \
                 initial heap and will not adapt to the workload."
            }
            PermSize => {
                "-XX:PermSize has no effect from JDK8 on. The permanent generation was \
                 replaced by the metaspace; use -XX:MetaspaceSize instead."
            }
            MaxPermSize => {
                "-XX:MaxPermSize has no effect from JDK8 on. The permanent generation was \
                 replaced by the metaspace; use -XX:MaxMetaspaceSize instead."
            }
            HeapDumpOnOomeMissing => {
                "-XX:+HeapDumpOnOutOfMemoryError is not set. Without it the JVM produces no \
                 heap dump on OutOfMemoryError, making root cause analysis much harder."
            }
            HeapDumpOnOomeDisabled => {
                "-XX:-HeapDumpOnOutOfMemoryError disables the heap dump on \
                 OutOfMemoryError, making root cause analysis much harder. Remove the option."
            }
            HeapDumpPathMissing => {
                "-XX:HeapDumpPath is not set, so a heap dump on OutOfMemoryError is written \
                 to the current working directory, which may lack space or be read only."
            }
            HeapDumpPathFilename => {
                "-XX:HeapDumpPath specifies a file name, so a second OutOfMemoryError \
                 overwrites the first dump. Point it at a directory instead."
            }
            CmsParallelInitialMarkDisabled => {
                "-XX:-CMSParallelInitialMarkEnabled forces the CMS initial mark to run \
                 single threaded, lengthening the stop-the-world pause."
            }
            CmsParallelRemarkDisabled => {
                "-XX:-CMSParallelRemarkEnabled forces the CMS remark to run single \
                 threaded, lengthening the stop-the-world pause."
            }
            MetaspaceClassMetadataAndCompClassSpace => {
                "When compressed class pointers are used, the metaspace is the total of two \
                 spaces: Metaspace = Class Metadata + Compressed Class Space."
            }
            MetaspaceClassMetadata => {
                "Compressed class pointers are not being used, so the metaspace is a single \
                 space holding class metadata."
            }
            CompOopsDisabledHeapUnknown => {
                "Compressed object references are disabled with an unknown max heap size. \
                 Compressed references should be enabled on heaps smaller than 32G."
            }
            CompOopsDisabledHeapLt32g => {
                "Compressed object references are disabled on a max heap smaller than 32G, \
                 wasting memory and performance. Remove -XX:-UseCompressedOops."
            }
            CompClassDisabledHeapUnknown => {
                "Compressed class pointers are disabled with an unknown max heap size. \
                 Compressed class pointers should be enabled on heaps smaller than 32G."
            }
            CompClassDisabledHeapLt32g => {
                "Compressed class pointers are disabled on a max heap smaller than 32G, \
                 wasting memory and performance. Remove -XX:-UseCompressedClassPointers."
            }
            MetaspaceLtCompClass => {
                "MaxMetaspaceSize is less than CompressedClassSpaceSize. The JVM shrinks \
                 both spaces to fit: CompressedClassSpaceSize' = MaxMetaspaceSize - [2 * \
                 InitialBootClassLoaderMetaspaceSize]. Class Metadata Size' = \
                 MaxMetaspaceSize - CompressedClassSpaceSize'."
            }
            CompClassSizeCompOopsDisabled => {
                "-XX:CompressedClassSpaceSize is ignored because compressed object \
                 references are disabled (-XX:-UseCompressedOops), so no compressed class \
                 space is allocated."
            }
            CompClassSizeCompClassDisabled => {
                "-XX:CompressedClassSpaceSize is ignored because compressed class pointers \
                 are disabled (-XX:-UseCompressedClassPointers), so no compressed class \
                 space is allocated."
            }
            CompOopsEnabledHeapGt32g => {
                "-XX:+UseCompressedOops is ignored on a max heap of 32G or more. Object \
                 references cannot be compressed on heaps this large."
            }
            CompClassEnabledHeapGt32g => {
                "-XX:+UseCompressedClassPointers is ignored on a max heap of 32G or more. \
                 Class pointers cannot be compressed on heaps this large."
            }
            CompClassSizeHeapGt32g => {
                "-XX:CompressedClassSpaceSize is ignored on a max heap of 32G or more. No \
                 compressed class space is allocated on heaps this large."
            }
            VerboseClass => {
                "-verbose:class logs every class loaded and unloaded. Useful for \
                 troubleshooting, unnecessary otherwise."
            }
            TieredCompilationEnabled => {
                "-XX:+TieredCompilation explicitly enables tiered compilation, the default \
                 since JDK8. The option is redundant."
            }
            TieredCompilationDisabled => {
                "-XX:-TieredCompilation disables tiered compilation, slowing warmup. It is \
                 rarely worth disabling."
            }
            BiasedLockingDisabled => {
                "-XX:-UseBiasedLocking disables an optimization for uncontended locks and \
                 is generally not advised outside latency tuning backed by measurement."
            }
            Jdk8PrintGcCauseDisabled => {
                "-XX:-PrintGCCause removes the collection cause from JDK8 gc logging, \
                 making the log harder to analyze."
            }
            Jdk8PrintGcCause => {
                "-XX:+PrintGCCause is redundant. JDK8 gc logging includes the collection \
                 cause by default."
            }
            Jdk8PrintHeapAtGc => {
                "-XX:+PrintHeapAtGC adds voluminous before/after heap detail to JDK8 gc \
                 logging that analysis tools rarely use."
            }
            Jdk8PrintTenuringDistribution => {
                "-XX:+PrintTenuringDistribution adds object age distribution detail to \
                 JDK8 gc logging. Useful when tuning survivor spaces, noise otherwise."
            }
            Jdk8PrintFlsStatistics => {
                "-XX:PrintFLSStatistics adds CMS free list space statistics to JDK8 gc \
                 logging. Useful when diagnosing CMS fragmentation, noise otherwise."
            }
            ExperimentalVmOptionsEnabled => {
                "Experimental options are unsupported and subject to change or removal \
                 without notice:"
            }
            Jdk8G1PriorU40 => {
                "The G1 collector has known stability and performance issues on JDK8 prior \
                 to update 40. Update to u40 or later."
            }
            Jdk8G1PriorU40Recs => {
                "Recommended G1 settings for JDK8 prior to update 40 are missing: \
                 -XX:+UnlockExperimentalVMOptions -XX:G1MixedGCLiveThresholdPercent=85 \
                 -XX:G1HeapWastePercent=5."
            }
            CgroupMemoryLimitOverride => {
                "-XX:+UseCGroupMemoryLimitForHeap is ignored because the max heap size is \
                 set explicitly. Remove the experimental option."
            }
            CgroupMemoryLimit => {
                "-XX:+UseCGroupMemoryLimitForHeap is experimental and was removed in \
                 JDK11. Use -XX:MaxRAMPercentage, or set the max heap explicitly."
            }
            FastUnorderedTimestamps => {
                "-XX:+UseFastUnorderedTimeStamps reads timestamps without ordering \
                 guarantees, so clock drift can corrupt event ordering. The option is \
                 experimental and not recommended."
            }
            G1MixedGcLiveThresholdPercent => {
                "-XX:G1MixedGCLiveThresholdPercent overrides the liveness threshold for \
                 including old regions in mixed collections. It is experimental and rarely \
                 needs changing."
            }
            DiagnosticVmOptionsEnabled => {
                "Diagnostic options are intended for JVM troubleshooting and are \
                 unsupported for production use:"
            }
            Instrumentation => {
                "A java agent is instrumenting bytecode (-javaagent). Instrumentation \
                 overhead varies with the agent; worth remembering when profiling."
            }
            CruftExplicitGcInvokesConcurrentAndUnloadsClasses => {
                "-XX:-ExplicitGCInvokesConcurrentAndUnloadsClasses has no effect because \
                 explicit GC is disabled (-XX:+DisableExplicitGC). Remove the option."
            }
            Jdk8GcLogFileOverwrite => {
                "The JDK8 gc log is overwritten on every JVM start. Add %t or %p to the \
                 -Xloggc file name, or enable file rotation, to keep history across \
                 restarts."
            }
            Jdk8GcLogFileRotationDisabled => {
                "-XX:-UseGCLogFileRotation disables gc log rotation, so the log grows \
                 without bound and is overwritten on restart."
            }
            Jdk8GcLogFileRotationDisabledNum => {
                "-XX:NumberOfGCLogFiles has no effect while gc log rotation is disabled. \
                 Remove the option or enable -XX:+UseGCLogFileRotation."
            }
            Jdk11GcLogFileRotationDisabled => {
                "Unified gc logging with filecount=0 disables log rotation, so the log \
                 grows without bound."
            }
            Jdk11GcLogFileOverwrite => {
                "The unified gc log is overwritten on every JVM start. Add %t or %p to the \
                 file name to keep history across restarts."
            }
            Jdk11GcLogFileSize0 => {
                "Unified gc logging with filesize=0 disables automatic log rotation, so \
                 the log grows without bound."
            }
            Jdk8GcLogFileSizeSmall => {
                "The gc log file size is less than 5M, so rotation discards useful history \
                 quickly. Use at least 5M."
            }
            Jdk11GcLogFileSizeSmall => {
                "The unified gc log file size is less than 5M, so rotation discards useful \
                 history quickly. Use at least filesize=5M."
            }
            JmxEnabled => {
                "JMX remote management is enabled. Make sure authentication and SSL are \
                 configured; an open JMX port is a serious exposure."
            }
            NativeAgent => {
                "A native agent library is loaded (-agentlib/-agentpath). Native agents \
                 run outside the JVM's safety guarantees; crashes and overhead originate \
                 here surprisingly often."
            }
            NewRatioInverted => {
                "The young generation is at least half of the max heap, leaving the old \
                 generation too small to absorb promotions and risking full collections."
            }
            Jdk8PrintAdaptiveResizePolicyDisabled => {
                "-XX:-PrintAdaptiveSizePolicy is redundant. JDK8 does not log adaptive \
                 resize decisions by default."
            }
            Jdk8PrintAdaptiveResizePolicyEnabled => {
                "-XX:+PrintAdaptiveSizePolicy adds adaptive generation resize detail to \
                 JDK8 gc logging. Useful when diagnosing ergonomics, noise otherwise."
            }
            Jdk8PrintPromotionFailure => {
                "-XX:+PrintPromotionFailure adds promotion failure detail to JDK8 gc \
                 logging. Useful when diagnosing premature promotion, noise otherwise."
            }
            BytecodeBackgroundCompilationDisabled => {
                "Background JIT compilation is disabled (-Xbatch or \
                 -XX:-BackgroundCompilation), so application threads stall while methods \
                 compile."
            }
            BytecodeCompileDisabled => {
                "-Xint disables the JIT compiler entirely. Everything is interpreted, \
                 typically an order of magnitude slower."
            }
            BytecodeCompileFirstInvocation => {
                "-Xcomp forces compilation on first invocation, producing poor-quality \
                 code without profile data and slowing startup."
            }
            ClassUnloadingDisabled => {
                "-XX:-ClassUnloading prevents the JVM from unloading classes, so class \
                 loader leaks grow the metaspace until OutOfMemoryError."
            }
            CmsClassUnloadingDisabled => {
                "-XX:-CMSClassUnloadingEnabled prevents CMS from unloading classes during \
                 concurrent cycles, so the metaspace can only be reclaimed by full \
                 collections."
            }
            CmsIncModeWithInitOccupFract => {
                "CMS incremental mode conflicts with -XX:CMSInitiatingOccupancyFraction. \
                 Incremental mode schedules its own cycles; pick one mechanism."
            }
            CmsInitOccupancyOnlyMissing => {
                "-XX:CMSInitiatingOccupancyFraction is only honored for every cycle \
                 together with -XX:+UseCMSInitiatingOccupancyOnly. Without it the JVM uses \
                 the value as a hint for the first cycle only."
            }
            Jdk8CmsParNewDisabled => {
                "CMS is running with the parallel young collector disabled \
                 (-XX:-UseParNewGC), forcing serial young generation collections. This \
                 combination was deprecated in JDK8 and removed in JDK9."
            }
            Jdk8CmsParNewRedundant => {
                "-XX:+UseParNewGC is redundant. CMS always runs the parallel young \
                 collector unless it is explicitly disabled."
            }
            CmsDisabled => {
                "-XX:-UseConcMarkSweepGC is cruft. CMS is not enabled by default, so \
                 disabling it explicitly has no effect."
            }
            Jdk8CmsParNewCruft => {
                "A UseParNewGC setting without CMS is cruft. The ParNew collector only \
                 runs with -XX:+UseConcMarkSweepGC."
            }
            ParallelScavengeParallelSerialOld => {
                "The parallel scavenge young collector is paired with the serial old \
                 collector (-XX:-UseParallelOldGC), so full collections run single \
                 threaded. Remove -XX:-UseParallelOldGC to collect the old generation in \
                 parallel."
            }
            ParallelOldRedundant => {
                "-XX:+UseParallelOldGC is redundant. The parallel collector runs the \
                 parallel old collector by default."
            }
            ParallelOldCruft => {
                "A UseParallelOldGC setting is being overridden by the collector actually \
                 selected and has no effect. Remove the option."
            }
            ExplicitGcDisabled => {
                "-XX:+DisableExplicitGC silently turns System.gc() into a no-op. Code \
                 depending on explicit collection (direct buffer cleanup, RMI distributed \
                 garbage collection) may accumulate native memory."
            }
            ExplicitGcDisabledConcurrent => {
                "-XX:+ExplicitGCInvokesConcurrent has no effect because explicit GC is \
                 disabled (-XX:+DisableExplicitGC). Remove one of the options."
            }
            PrintGcApplicationConcurrentTime => {
                "-XX:+PrintGCApplicationConcurrentTime logs time between pauses, doubling \
                 gc log volume for detail that is rarely used."
            }
            PrintClassHistogram => {
                "-XX:+PrintClassHistogram adds a full stop-the-world heap inspection pause \
                 on every SIGQUIT thread dump."
            }
            PrintClassHistogramAfterFullGc => {
                "-XX:+PrintClassHistogramAfterFullGC adds a stop-the-world heap inspection \
                 pause after every full collection."
            }
            PrintClassHistogramBeforeFullGc => {
                "-XX:+PrintClassHistogramBeforeFullGC adds a stop-the-world heap \
                 inspection pause before every full collection."
            }
            TenuringDisabled => {
                "-XX:MaxTenuringThreshold=0 promotes every surviving object immediately, \
                 flooding the old generation and defeating the survivor spaces."
            }
            MaxTenuringOverride => {
                "-XX:MaxTenuringThreshold is set below the default of 15, promoting \
                 objects earlier. Make sure survivor space tuning data supports this."
            }
            UseMembar => {
                "-XX:+UseMembar replaces the pseudo-signal memory barrier with a real one, \
                 a measurable slowdown on most platforms. Remove the option unless working \
                 around a known VM bug."
            }
            RmiDgcClientGcIntervalRedundant => {
                "-Dsun.rmi.dgc.client.gcInterval has no effect because explicit GC is \
                 disabled (-XX:+DisableExplicitGC)."
            }
            RmiDgcServerGcIntervalRedundant => {
                "-Dsun.rmi.dgc.server.gcInterval has no effect because explicit GC is \
                 disabled (-XX:+DisableExplicitGC)."
            }
            RmiDgcClientGcIntervalSmall => {
                "-Dsun.rmi.dgc.client.gcInterval is below the one hour default, forcing \
                 frequent full collections for RMI distributed garbage collection."
            }
            RmiDgcClientGcIntervalLarge => {
                "-Dsun.rmi.dgc.client.gcInterval is above 24 hours, delaying RMI \
                 distributed garbage collection and the release of remote references."
            }
            RmiDgcServerGcIntervalSmall => {
                "-Dsun.rmi.dgc.server.gcInterval is below the one hour default, forcing \
                 frequent full collections for RMI distributed garbage collection."
            }
            RmiDgcServerGcIntervalLarge => {
                "-Dsun.rmi.dgc.server.gcInterval is above 24 hours, delaying RMI \
                 distributed garbage collection and the release of remote references."
            }
            Jdk8PrintReferenceGcEnabled => {
                "-XX:+PrintReferenceGC adds reference processing detail to JDK8 gc \
                 logging. Useful when diagnosing reference processing costs, noise \
                 otherwise."
            }
            Jdk8PrintStringDedupStatsEnabled => {
                "-XX:+PrintStringDeduplicationStatistics adds string deduplication detail \
                 to JDK8 gc logging."
            }
            Jdk8PrintStringTableStatsEnabled => {
                "-XX:+PrintStringTableStatistics prints string table statistics at JVM \
                 exit."
            }
            TraceClassLoading => {
                "-XX:+TraceClassLoading logs every class load. Useful for troubleshooting, \
                 unnecessary otherwise."
            }
            TraceClassUnloading => {
                "-XX:+TraceClassUnloading logs every class unload. Useful for \
                 troubleshooting, unnecessary otherwise."
            }
            SurvivorRatio => {
                "-XX:SurvivorRatio fixes the eden to survivor space ratio. With adaptive \
                 sizing this is usually better left to the JVM."
            }
            SurvivorRatioTarget => {
                "-XX:TargetSurvivorRatio overrides the survivor occupancy target of 50%. \
                 Make sure tenuring distribution data supports this."
            }
            Jfr => {
                "Flight recorder options are set (-XX:FlightRecorderOptions). JFR overhead \
                 is low but not zero; confirm the recording settings are intended for \
                 production."
            }
            EliminateLocksEnabled => {
                "-XX:+EliminateLocks is redundant. Lock elision is enabled by default."
            }
            Jdk8UseVmInterruptibleIo => {
                "UseVMInterruptibleIO only ever had an effect on Solaris and was removed \
                 in JDK8. Remove the option."
            }
            VerifyNone => {
                "-Xverify:none disables bytecode verification, removing a safety barrier \
                 against malformed classes. Startup savings are small; do not use in \
                 production."
            }
            HeapMaxMissing => {
                "No max heap size is set, so the JVM ergonomically sizes the heap from \
                 physical memory. Set -Xmx explicitly for a predictable footprint."
            }
            Rs => {
                "-Xrs disables JVM signal handlers, so SIGQUIT thread dumps and clean \
                 shutdown hooks on SIGTERM no longer work."
            }
            Jdk8GcLogFileRotationNotEnabled => {
                "JDK8 gc logging without -XX:+UseGCLogFileRotation neither rotates nor \
                 preserves the log across restarts."
            }
            GcLogStdout => {
                "Gc logging is written to stdout. Fine for containers that capture \
                 stdout; otherwise send it to a file so it survives process management."
            }
            DisableAttachMechanism => {
                "-XX:+DisableAttachMechanism prevents jcmd, jmap, jstack and profilers \
                 from attaching to the JVM, hampering production diagnostics."
            }
            CompileThresholdIgnored => {
                "-XX:CompileThreshold is ignored while tiered compilation is enabled. \
                 Tiered thresholds are controlled by the Tier*CompileThreshold options."
            }
            DiagnosticUnsyncloadClass => {
                "-XX:+UnsyncloadClass enables unsynchronized class loading, a diagnostic \
                 option that can corrupt class loader state. Removed in JDK10."
            }
            DiagnosticGuaranteedSafepointInterval => {
                "-XX:GuaranteedSafepointInterval overrides the forced safepoint interval, \
                 a diagnostic option that adds regular global pauses when lowered."
            }
            DiagnosticPrintSafepointStatistics => {
                "-XX:+PrintSafepointStatistics prints safepoint statistics, a diagnostic \
                 option unsupported for production use."
            }
            DiagnosticDebugNonSafepoints => {
                "-XX:+DebugNonSafepoints extends debug info to non-safepoint locations for \
                 profiler accuracy. It is a diagnostic option; expect a slightly larger \
                 code cache."
            }
            ParallelGcThreadsSerial => {
                "-XX:ParallelGCThreads has no effect with the serial collector. Remove the \
                 option."
            }
            ParallelGcThreads1 => {
                "-XX:ParallelGCThreads=1 runs a parallel collector with a single worker \
                 thread, which is slower than the serial collector. Remove the option or \
                 set it to a value greater than 1."
            }
            ParallelGcThreads => {
                "-XX:ParallelGCThreads overrides the ergonomic worker count. On shared \
                 hosts this is often deliberate; confirm it matches the CPU allocation."
            }
            CiCompilerCount => {
                "-XX:CICompilerCount overrides the ergonomic JIT compiler thread count. \
                 Confirm it matches the CPU allocation."
            }
            MinHeapDeltaBytes => {
                "-XX:MinHeapDeltaBytes overrides the minimum generation resize step. It \
                 rarely needs changing."
            }
            Debug => {
                "-Xdebug has been a no-op since JDK5 and is cruft unless paired with JDWP \
                 options. Remove it."
            }
            Jdk9DeprecatedLoggc => {
                "-Xloggc is deprecated from JDK9 on. Use unified logging: \
                 -Xlog:gc*:file=<file>."
            }
            Jdk9DeprecatedPrintGc => {
                "PrintGC is deprecated from JDK9 on. Use unified logging: -Xlog:gc."
            }
            Jdk9DeprecatedPrintGcDetails => {
                "PrintGCDetails is deprecated from JDK9 on. Use unified logging: -Xlog:gc*."
            }
            Concurrentio => {
                "-Xconcurrentio changes thread scheduling and I/O behavior for ancient \
                 Solaris workloads and lowers the default stack size. Do not use it on \
                 modern JVMs."
            }
            G1SummarizeRsetStatsOutput => {
                "Remembered set summary statistics are written periodically \
                 (-XX:+G1SummarizeRSetStats with a period), an experimental diagnostic \
                 output with measurable overhead."
            }
            OnOomeKill => {
                "OnOutOfMemoryError runs kill -9 to fail fast on OutOfMemoryError. From \
                 JDK8u92 consider -XX:+ExitOnOutOfMemoryError or \
                 -XX:+CrashOnOutOfMemoryError instead."
            }
            OnOome => {
                "-XX:OnOutOfMemoryError runs an external command on OutOfMemoryError. The \
                 JVM state is unreliable at that point; keep the command minimal."
            }
            ExplicitGcNotConcurrent => {
                "System.gc() triggers a full stop-the-world collection even though a \
                 concurrent collector is running. Add -XX:+ExplicitGCInvokesConcurrent, or \
                 disable explicit GC after verifying nothing depends on it."
            }
            D64Redundant => {
                "-d64 is redundant on a 64-bit JVM. The option was removed in JDK10."
            }
            ServerRedundant => {
                "-server is redundant on a 64-bit JVM. The server compiler is always used."
            }
            ClientIgnored => {
                "-client is ignored on a 64-bit JVM. The server compiler is always used."
            }
            ContainerPerfDataDisk => {
                "In a container, hsperfdata written to disk can cause unexpected I/O \
                 stalls on overlay filesystems. Consider -XX:+PerfDisableSharedMem (this \
                 breaks jps/jstat) or mounting /tmp on tmpfs."
            }
            PerfDataDisabled => {
                "-XX:-UsePerfData disables JVM performance counters, so jps and jstat \
                 cannot see the process."
            }
            Jdk8PrintGcDetailsMissing => {
                "JDK8 gc logging is enabled without -XX:+PrintGCDetails, so the log lacks \
                 the per-space detail analysis tools need."
            }
            Jdk8PrintGcDetailsDisabled => {
                "-XX:-PrintGCDetails removes per-space detail from JDK8 gc logging, \
                 producing a log analysis tools cannot do much with."
            }
            Jdk11PrintGcDetailsMissing => {
                "Unified gc logging is configured without gc* detail, so the log lacks the \
                 per-space detail analysis tools need. Use -Xlog:gc*."
            }
            HeapMinNotEqualMax => {
                "The initial heap size differs from the max heap size. Outside containers, \
                 growing the heap costs full collections; consider setting -Xms equal to \
                 -Xmx."
            }
            LargePageSizeInBytesLinux => {
                "-XX:LargePageSizeInBytes has no effect on Linux. The large page size is \
                 taken from the OS configuration."
            }
            LargePageSizeInBytesWindows => {
                "-XX:LargePageSizeInBytes has no effect on Windows. The large page size is \
                 fixed by the OS."
            }
            ThreadStackSizeNotSet32 => {
                "No thread stack size is set on a 32-bit JVM, where the default is small. \
                 Deep call chains risk StackOverflowError; set -Xss explicitly."
            }
            ThreadStackSizeTiny => {
                "The thread stack size rounds down to less than 1K, which almost any call \
                 chain will overflow. This is usually a unit mistake (-Xss512 is 512 \
                 bytes)."
            }
            ThreadStackSizeSmall => {
                "The thread stack size is less than 128K. Framework call chains commonly \
                 need more; expect StackOverflowError under load."
            }
            ThreadStackSizeLarge => {
                "The thread stack size is greater than 1M. Stack memory is native and per \
                 thread; thousands of threads at this size exhaust memory outside the heap."
            }
            UseThreadPrioritiesRedundant => {
                "-XX:+UseThreadPriorities is redundant. Thread priorities are enabled by \
                 default."
            }
            ThreadPriorityPolicyBad => {
                "-XX:ThreadPriorityPolicy is negative, an undefined value. The JVM treats \
                 out-of-range values inconsistently across versions; use 0 or 1."
            }
            ThreadPriorityPolicyRedundant => {
                "-XX:ThreadPriorityPolicy=0 is the default normal priority policy. The \
                 option is redundant."
            }
            ThreadPriorityPolicyAggressive => {
                "-XX:ThreadPriorityPolicy=1 enables the aggressive priority policy, which \
                 needs root on Linux and can starve other processes."
            }
            ThreadPriorityPolicyAggressiveBackdoor => {
                "-XX:ThreadPriorityPolicy set above 1 exploits a missing range check to \
                 get the aggressive policy without root. Undefined behavior; use 0 or 1."
            }
            UseThreadPrioritiesDisabled => {
                "-XX:-UseThreadPriorities makes the JVM ignore java.lang.Thread \
                 priorities. Code calling setPriority() silently loses its effect."
            }
            ThreadPriorityPolicyIgnored => {
                "-XX:ThreadPriorityPolicy has no effect because thread priorities are \
                 disabled (-XX:-UseThreadPriorities)."
            }
            CmsWaitDuration => {
                "-XX:CMSWaitDuration tunes how long the CMS thread waits for a young \
                 collection. It rarely needs changing."
            }
            CmsEdenChunksRecordAlways => {
                "A CMSEdenChunksRecordAlways setting overrides non-standard CMS eden \
                 sampling behavior. It rarely needs changing."
            }
            UseCondCardMark => {
                "-XX:+UseCondCardMark adds a conditional check before card marking, a \
                 tradeoff that only pays off on large multi-socket machines with measured \
                 false sharing."
            }
            UnaccountedOptionsDisabled => {
                "Disabled options not otherwise covered by this analysis: "
            }
            CmsMissing => {
                "-XX:+UseParNewGC without -XX:+UseConcMarkSweepGC pairs the parallel young \
                 collector with the serial old collector. Add -XX:+UseConcMarkSweepGC or \
                 use the parallel collector instead."
            }
            ParNewSerialOld => {
                "-XX:+UseParNewGC with -XX:-UseParallelOldGC pairs the parallel young \
                 collector with the serial old collector. Use CMS or the parallel old \
                 collector for old generation collections."
            }
            DuplicateOptions => "Duplicate JVM options: ",
            MaxFdLimitIgnored => {
                "-XX:+MaxFDLimit only has an effect on Solaris. On this OS the file \
                 descriptor limit comes from the OS; remove the option."
            }
            GcOverheadLimitDisabled => {
                "-XX:-UseGCOverheadLimit removes the guard that turns pathological GC \
                 thrashing into an OutOfMemoryError. The JVM will burn CPU collecting \
                 instead of failing visibly."
            }
            IgnoreUnrecognizedVmOptions => {
                "-XX:+IgnoreUnrecognizedVMOptions makes the JVM silently skip misspelled \
                 or unsupported options, hiding configuration mistakes."
            }
            Jdk8CmsCompactAtFullGcEnabled => {
                "-XX:+UseCMSCompactAtFullCollection is unnecessary with CMS (full \
                 collections already compact) and was removed in JDK9. Remove the option."
            }
            CheckJniEnabled => {
                "-Xcheck:jni adds argument and error checking to every JNI call. Valuable \
                 when debugging native code, a steady tax in production."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_finding() {
        assert_eq!(FindingId::ALL.len(), 157);
        for id in FindingId::ALL {
            assert!(!id.template().is_empty(), "{id:?} has an empty template");
        }
    }

    #[test]
    fn list_templates_end_with_a_colon() {
        for id in [
            FindingId::OptsUndefined,
            FindingId::ExperimentalVmOptionsEnabled,
            FindingId::DiagnosticVmOptionsEnabled,
        ] {
            assert!(id.template().ends_with(':'), "{id:?} should end with a colon");
        }
        assert!(FindingId::DuplicateOptions.template().ends_with(": "));
        assert!(FindingId::UnaccountedOptionsDisabled.template().ends_with(": "));
    }

    #[test]
    fn severity_classes() {
        assert_eq!(FindingId::DuplicateOptions.severity(), Severity::Error);
        assert_eq!(FindingId::ThreadStackSizeTiny.severity(), Severity::Warn);
        assert_eq!(FindingId::HeapMaxMissing.severity(), Severity::Info);
        let errors = FindingId::ALL
            .iter()
            .filter(|id| id.severity() == Severity::Error)
            .count();
        assert_eq!(errors, 10);
    }
}

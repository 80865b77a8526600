//! Canonical vocabulary of recognized JVM options.
//!
//! Every token the tokenizer produces is classified into exactly one
//! [`Category`]. The match order lives in [`crate::matcher`]; this module
//! describes what each category is: how its value is shaped, how repeats
//! of it are tracked, and whether it requires an unlock flag.

use serde::{Deserialize, Serialize};

/// How an option's value is encoded in its text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueShape {
    /// Bare switch with no value (`-server`, `-Xbatch`).
    NoValue,
    /// `-XX:+Name` enables, `-XX:-Name` disables.
    Toggle,
    /// Size literal, optionally suffixed (`-Xmx1g`, `-XX:MetaspaceSize=256m`).
    ByteSize,
    /// Plain number after `=`.
    Number,
    /// Free-form text value.
    Text,
    /// May appear many times; every occurrence is kept.
    Repeatable,
}

/// Unlock flag an option sits behind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuxGroup {
    /// Requires `-XX:+UnlockDiagnosticVMOptions`.
    Diagnostic,
    /// Requires `-XX:+UnlockExperimentalVMOptions`.
    Experimental,
}

/// Canonical option categories, one per recognized option form.
///
/// Classification is first match wins in a fixed order, with
/// [`Category::Undefined`] as the catch-all, so no token is ever lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    // Standard launcher options
    AddExports,
    AddModules,
    AddOpens,
    Agentlib,
    Agentpath,
    Classpath,
    Client,
    D64,
    Javaagent,
    Noverify,
    Server,
    VerboseClass,
    VerboseGc,
    SystemProperty,
    // Non-standard (-X) options
    Batch,
    Bootclasspath,
    CheckJni,
    Comp,
    Concurrentio,
    Debug,
    Xint,
    Log,
    LogGc,
    MaxJitCodeSize,
    NewSize,
    InitialHeapSize,
    MaxHeapSize,
    NoClassGc,
    Rs,
    RunJdwp,
    Verify,
    // Advanced (-XX) options
    ActiveProcessorCount,
    AdaptiveSizePolicyWeight,
    AggressiveHeap,
    AggressiveOpts,
    AlwaysPreTouch,
    AutoBoxCacheMax,
    BackgroundCompilation,
    CiCompilerCount,
    ClassUnloading,
    CmsEdenChunksRecordAlways,
    CmsClassUnloadingEnabled,
    CmsIncrementalMode,
    CmsIncrementalSafetyFactor,
    CmsInitiatingOccupancyFraction,
    CmsParallelInitialMarkEnabled,
    CmsParallelRemarkEnabled,
    CmsScavengeBeforeRemark,
    CmsWaitDuration,
    CompileCommand,
    CompileCommandFile,
    CompileThreshold,
    CompressedClassSpaceSize,
    ConcGcThreads,
    CrashOnOutOfMemoryError,
    DebugNonSafepoints,
    DisableAttachMechanism,
    DisableExplicitGc,
    DoEscapeAnalysis,
    EliminateLocks,
    ErrorFile,
    ExitOnOutOfMemoryError,
    ExplicitGcInvokesConcurrent,
    ExplicitGcInvokesConcurrentAndUnloadsClasses,
    ExtensiveErrorReports,
    MaxFdLimit,
    FlightRecorderOptions,
    G1ConcRefinementThreads,
    G1HeapRegionSize,
    G1HeapWastePercent,
    G1MaxNewSizePercent,
    G1MixedGcCountTarget,
    G1MixedGcLiveThresholdPercent,
    G1NewSizePercent,
    G1ReservePercent,
    G1SummarizeRSetStats,
    G1SummarizeRSetStatsPeriod,
    GcLockerRetryAllocationCount,
    GcLogFileSize,
    GcTimeRatio,
    GuaranteedSafepointInterval,
    HeapBaseMinAddress,
    HeapDumpOnOutOfMemoryError,
    HeapDumpPath,
    IgnoreUnrecognizedVmOptions,
    InitialBootClassLoaderMetaspaceSize,
    InitiatingHeapOccupancyPercent,
    LargePageSizeInBytes,
    LogFile,
    LogVmOutput,
    LoopStripMiningIter,
    MaxGcPauseMillis,
    MaxJavaStackTraceDepth,
    MaxNewSize,
    MetaspaceSize,
    ManagementServer,
    MarkStackSize,
    MarkStackSizeMax,
    MaxDirectMemorySize,
    MaxHeapFreeRatio,
    MaxInlineLevel,
    MaxMetaspaceSize,
    MaxPermSize,
    MaxTenuringThreshold,
    MinHeapDeltaBytes,
    MinHeapFreeRatio,
    NativeMemoryTracking,
    NewRatio,
    NumberOfGcLogFiles,
    OldPlabSize,
    OldSize,
    OmitStackTraceInFastThrow,
    OnError,
    OnOutOfMemoryError,
    OptimizeStringConcat,
    ParallelGcThreads,
    ParallelRefProcEnabled,
    PerfDisableSharedMem,
    PerMethodRecompilationCutoff,
    PermSize,
    PrintAdaptiveSizePolicy,
    PrintClassHistogram,
    PrintClassHistogramAfterFullGc,
    PrintClassHistogramBeforeFullGc,
    PrintCodeCache,
    PrintCommandLineFlags,
    PrintFlagsFinal,
    PrintFlsStatistics,
    PrintGc,
    PrintGcApplicationConcurrentTime,
    PrintGcApplicationStoppedTime,
    PrintGcCause,
    PrintGcDateStamps,
    PrintGcDetails,
    PrintGcTaskTimeStamps,
    PrintGcTimeStamps,
    PrintHeapAtGc,
    PrintPromotionFailure,
    PrintReferenceGc,
    PrintSafepointStatistics,
    PrintStringDeduplicationStatistics,
    PrintStringTableStatistics,
    PrintTenuringDistribution,
    ReservedCodeCacheSize,
    ResizePlab,
    ResizeTlab,
    ShenandoahGcHeuristics,
    ShenandoahGuaranteedGcInterval,
    ShenandoahMinFreeThreshold,
    ShenandoahUncommitDelay,
    SoftRefLruPolicyMsPerMb,
    StringTableSize,
    SurvivorRatio,
    ThreadStackSize,
    TargetSurvivorRatio,
    ThreadPriorityPolicy,
    Tier2CompileThreshold,
    Tier3CompileThreshold,
    Tier4CompileThreshold,
    TieredCompilation,
    TraceClassLoading,
    TraceClassUnloading,
    UnlockDiagnosticVmOptions,
    UnlockExperimentalVmOptions,
    UnsyncloadClass,
    UseAvx,
    UseAdaptiveSizePolicy,
    UseBiasedLocking,
    UseCGroupMemoryLimitForHeap,
    UseCmsCompactAtFullCollection,
    UseCmsInitiatingOccupancyOnly,
    UseCodeCacheFlushing,
    UseCompressedClassPointers,
    UseCompressedOops,
    UseConcMarkSweepGc,
    UseCondCardMark,
    UseContainerSupport,
    UseCountedLoopSafepoints,
    UseDynamicNumberOfCompilerThreads,
    UseDynamicNumberOfGcThreads,
    UseFastAccessorMethods,
    UseFastUnorderedTimeStamps,
    UseG1Gc,
    UseGcLogFileRotation,
    UseGcOverheadLimit,
    UseHugeTlbfs,
    UseMembar,
    UseLargePages,
    UseLargePagesIndividualAllocation,
    UseNuma,
    UseParallelGc,
    UseParallelOldGc,
    UseParNewGc,
    UsePerfData,
    UseSerialGc,
    UseShenandoahGc,
    UseSplitVerifier,
    UseStringDeduplication,
    UseThreadPriorities,
    UseTlab,
    UseVmInterruptibleIo,
    UseZGc,
    // Catch-all for anything unmatched
    Undefined,
}

impl Category {
    pub fn value_shape(self) -> ValueShape {
        use Category::*;
        match self {
            Client | D64 | Noverify | Server | VerboseClass | VerboseGc | Batch | CheckJni
            | Comp | Concurrentio | Debug | Xint | NoClassGc | Rs => ValueShape::NoValue,
            AddExports | AddModules | AddOpens | Agentlib | Agentpath | Javaagent
            | SystemProperty | Bootclasspath | Log | RunJdwp | Undefined => ValueShape::Repeatable,
            MaxJitCodeSize | NewSize | InitialHeapSize | MaxHeapSize | CompressedClassSpaceSize
            | G1HeapRegionSize | GcLogFileSize | HeapBaseMinAddress
            | InitialBootClassLoaderMetaspaceSize | LargePageSizeInBytes | MaxNewSize
            | MetaspaceSize | MarkStackSize | MarkStackSizeMax | MaxDirectMemorySize
            | MaxMetaspaceSize | MaxPermSize | OldSize | PermSize | ReservedCodeCacheSize
            | ThreadStackSize => ValueShape::ByteSize,
            ActiveProcessorCount | AdaptiveSizePolicyWeight | AutoBoxCacheMax | CiCompilerCount
            | CmsIncrementalSafetyFactor | CmsInitiatingOccupancyFraction | CmsWaitDuration
            | CompileThreshold | ConcGcThreads | G1ConcRefinementThreads | G1HeapWastePercent
            | G1MaxNewSizePercent | G1MixedGcCountTarget | G1MixedGcLiveThresholdPercent
            | G1NewSizePercent | G1ReservePercent | G1SummarizeRSetStatsPeriod
            | GcLockerRetryAllocationCount | GcTimeRatio | GuaranteedSafepointInterval
            | InitiatingHeapOccupancyPercent | LoopStripMiningIter | MaxGcPauseMillis
            | MaxJavaStackTraceDepth | MaxHeapFreeRatio | MaxInlineLevel | MaxTenuringThreshold
            | MinHeapDeltaBytes | MinHeapFreeRatio | NumberOfGcLogFiles | OldPlabSize
            | ParallelGcThreads | PerMethodRecompilationCutoff | PrintFlsStatistics
            | ShenandoahGuaranteedGcInterval | ShenandoahMinFreeThreshold
            | ShenandoahUncommitDelay | SoftRefLruPolicyMsPerMb | StringTableSize
            | SurvivorRatio | TargetSurvivorRatio | ThreadPriorityPolicy
            | Tier2CompileThreshold | Tier3CompileThreshold | Tier4CompileThreshold | UseAvx => {
                ValueShape::Number
            }
            Classpath | LogGc | Verify | CompileCommand | CompileCommandFile | ErrorFile
            | FlightRecorderOptions | HeapDumpPath | LogFile | NativeMemoryTracking | NewRatio
            | OnError | OnOutOfMemoryError | ShenandoahGcHeuristics => ValueShape::Text,
            // Everything else is a -XX:[-+] switch.
            _ => ValueShape::Toggle,
        }
    }

    /// Unlock flag this option requires, if any.
    pub fn aux_group(self) -> Option<AuxGroup> {
        use Category::*;
        match self {
            DebugNonSafepoints | GcLockerRetryAllocationCount | GuaranteedSafepointInterval
            | LogVmOutput | PrintSafepointStatistics | UnsyncloadClass => {
                Some(AuxGroup::Diagnostic)
            }
            G1MaxNewSizePercent | G1MixedGcLiveThresholdPercent | G1NewSizePercent
            | ShenandoahGuaranteedGcInterval | ShenandoahUncommitDelay
            | UseCGroupMemoryLimitForHeap | UseFastUnorderedTimeStamps => {
                Some(AuxGroup::Experimental)
            }
            _ => None,
        }
    }

    /// Module-system and agent options repeat legitimately with different
    /// values, so repeats are tracked per token text instead of per
    /// category.
    pub fn tracks_repeats_by_token(self) -> bool {
        use Category::*;
        matches!(self, AddExports | AddModules | AddOpens | Javaagent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlock_groups_are_disjoint() {
        let diagnostic = [
            Category::DebugNonSafepoints,
            Category::GcLockerRetryAllocationCount,
            Category::GuaranteedSafepointInterval,
            Category::LogVmOutput,
            Category::PrintSafepointStatistics,
            Category::UnsyncloadClass,
        ];
        let experimental = [
            Category::G1MaxNewSizePercent,
            Category::G1MixedGcLiveThresholdPercent,
            Category::G1NewSizePercent,
            Category::ShenandoahGuaranteedGcInterval,
            Category::ShenandoahUncommitDelay,
            Category::UseCGroupMemoryLimitForHeap,
            Category::UseFastUnorderedTimeStamps,
        ];
        for category in diagnostic {
            assert_eq!(category.aux_group(), Some(AuxGroup::Diagnostic));
        }
        for category in experimental {
            assert_eq!(category.aux_group(), Some(AuxGroup::Experimental));
        }
        assert_eq!(Category::UseG1Gc.aux_group(), None);
    }

    #[test]
    fn repeatable_categories_accumulate() {
        assert_eq!(Category::SystemProperty.value_shape(), ValueShape::Repeatable);
        assert_eq!(Category::Log.value_shape(), ValueShape::Repeatable);
        assert_eq!(Category::Undefined.value_shape(), ValueShape::Repeatable);
        assert_eq!(Category::MaxHeapSize.value_shape(), ValueShape::ByteSize);
        assert_eq!(Category::UseG1Gc.value_shape(), ValueShape::Toggle);
    }

    #[test]
    fn token_tracked_repeats() {
        assert!(Category::AddExports.tracks_repeats_by_token());
        assert!(Category::Javaagent.tracks_repeats_by_token());
        assert!(!Category::Agentlib.tracks_repeats_by_token());
        assert!(!Category::SystemProperty.tracks_repeats_by_token());
    }
}

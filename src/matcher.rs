//! Ordered option classification.
//!
//! Patterns are tried strictly in order and the first match wins, so the
//! specific forms sit ahead of the generic ones that would shadow them
//! (`-verbose:class` before `-D`, the size-bearing `-X` forms before the
//! bare `-X` switches). Anything unmatched is [`Category::Undefined`].

use once_cell::sync::Lazy;
use regex::Regex;

use crate::category::Category;
use crate::units::SIZE_LITERAL;

/// `(category, pattern)` pairs in match order.
fn pattern_table() -> Vec<(Category, String)> {
    use Category::*;
    let size = SIZE_LITERAL;
    vec![
        (AddExports, r"^--add-exports=.+$".into()),
        (AddModules, r"^--add-modules=.+$".into()),
        (AddOpens, r"^--add-opens=.+$".into()),
        (Agentlib, r"^-agentlib:.+$".into()),
        (Agentpath, r"^-agentpath:.+$".into()),
        (Classpath, r"^-classpath.+$".into()),
        (Client, r"^-client$".into()),
        (D64, r"^-d64$".into()),
        (Javaagent, r"^-javaagent:.+$".into()),
        (Noverify, r"^-noverify$".into()),
        (Server, r"^-server$".into()),
        (VerboseClass, r"^-verbose:class$".into()),
        (VerboseGc, r"^-verbose:gc$".into()),
        (SystemProperty, r"^-D.+$".into()),
        (Batch, r"^-Xbatch$".into()),
        (Bootclasspath, r"^-Xbootclasspath.+$".into()),
        (CheckJni, r"^-Xcheck:jni$".into()),
        (Comp, r"^-Xcomp$".into()),
        (Concurrentio, r"^-Xconcurrentio$".into()),
        (Debug, r"^-Xdebug$".into()),
        (Xint, r"^-Xint$".into()),
        (Log, r"^-Xlog:.+$".into()),
        (LogGc, r"^-Xloggc:.+$".into()),
        (MaxJitCodeSize, r"^-Xmaxjitcodesize\d{1,}[kKmMgG]{0,1}$".into()),
        (NewSize, format!("^-X(mn|X:NewSize=){size}$")),
        (InitialHeapSize, format!("^-X(ms|X:InitialHeapSize=){size}$")),
        (MaxHeapSize, format!("^-X(mx|X:MaxHeapSize=){size}$")),
        (NoClassGc, r"^-Xnoclassgc$".into()),
        (Rs, r"^-Xrs$".into()),
        (RunJdwp, r"^-Xrunjdwp:.+$".into()),
        (Verify, r"^-Xverify(:(all|none|remote))?$".into()),
        (ActiveProcessorCount, r"^-XX:ActiveProcessorCount=\d{1,}$".into()),
        (AdaptiveSizePolicyWeight, r"^-XX:AdaptiveSizePolicyWeight=\d{1,3}$".into()),
        (AggressiveHeap, r"^-XX:[\-+]AggressiveHeap$".into()),
        (AggressiveOpts, r"^-XX:[\-+]AggressiveOpts$".into()),
        (AlwaysPreTouch, r"^-XX:[\-+]AlwaysPreTouch$".into()),
        (AutoBoxCacheMax, r"^-XX:AutoBoxCacheMax=\d{1,10}$".into()),
        (BackgroundCompilation, r"^-XX:[\-+]BackgroundCompilation$".into()),
        (CiCompilerCount, r"^-XX:CICompilerCount=\d{1,3}$".into()),
        (ClassUnloading, r"^-XX:[\-+]ClassUnloading$".into()),
        (CmsEdenChunksRecordAlways, r"^-XX:[\-+]CMSEdenChunksRecordAlways$".into()),
        (CmsClassUnloadingEnabled, r"^-XX:[\-+]CMSClassUnloadingEnabled$".into()),
        (CmsIncrementalMode, r"^-XX:[\-+]CMSIncrementalMode$".into()),
        (CmsIncrementalSafetyFactor, r"^-XX:CMSIncrementalSafetyFactor=\d{1,3}$".into()),
        (CmsInitiatingOccupancyFraction, r"^-XX:CMSInitiatingOccupancyFraction=\d{1,3}$".into()),
        (CmsParallelInitialMarkEnabled, r"^-XX:[\-+]CMSParallelInitialMarkEnabled$".into()),
        (CmsParallelRemarkEnabled, r"^-XX:[\-+]CMSParallelRemarkEnabled$".into()),
        (CmsScavengeBeforeRemark, r"^-XX:[\-+]CMSScavengeBeforeRemark$".into()),
        (CmsWaitDuration, r"^-XX:CMSWaitDuration=\d{1,}$".into()),
        (CompileCommand, r"^-XX:CompileCommand=.+$".into()),
        (CompileCommandFile, r"^-XX:CompileCommandFile=.+$".into()),
        (CompileThreshold, r"^-XX:CompileThreshold=\d{1,}$".into()),
        (CompressedClassSpaceSize, format!("^-XX:CompressedClassSpaceSize={size}$")),
        (ConcGcThreads, r"^-XX:ConcGCThreads=\d{1,3}$".into()),
        (CrashOnOutOfMemoryError, r"^-XX:[\-+]CrashOnOutOfMemoryError$".into()),
        (DebugNonSafepoints, r"^-XX:[\-+]DebugNonSafepoints$".into()),
        (DisableAttachMechanism, r"^-XX:[\-+]DisableAttachMechanism$".into()),
        (DisableExplicitGc, r"^-XX:[\-+]DisableExplicitGC$".into()),
        (DoEscapeAnalysis, r"^-XX:[\-+]DoEscapeAnalysis$".into()),
        (EliminateLocks, r"^-XX:[\-+]EliminateLocks$".into()),
        (ErrorFile, r"^-XX:ErrorFile=\S+$".into()),
        (ExitOnOutOfMemoryError, r"^-XX:[\-+]ExitOnOutOfMemoryError$".into()),
        (ExplicitGcInvokesConcurrent, r"^-XX:[\-+]ExplicitGCInvokesConcurrent$".into()),
        (
            ExplicitGcInvokesConcurrentAndUnloadsClasses,
            r"^-XX:[\-+]ExplicitGCInvokesConcurrentAndUnloadsClasses$".into(),
        ),
        (ExtensiveErrorReports, r"^-XX:[\-+]ExtensiveErrorReports$".into()),
        (MaxFdLimit, r"^-XX:[\-+]MaxFDLimit$".into()),
        (FlightRecorderOptions, r"^-XX:FlightRecorderOptions=.+$".into()),
        (G1ConcRefinementThreads, r"^-XX:G1ConcRefinementThreads=\d{1,}$".into()),
        (G1HeapRegionSize, format!("^-XX:G1HeapRegionSize={size}$")),
        (G1HeapWastePercent, r"^-XX:G1HeapWastePercent=\d{1,3}$".into()),
        (G1MaxNewSizePercent, r"^-XX:G1MaxNewSizePercent=\d{1,3}$".into()),
        (G1MixedGcCountTarget, r"^-XX:G1MixedGCCountTarget=\d{1,}$".into()),
        (G1MixedGcLiveThresholdPercent, r"^-XX:G1MixedGCLiveThresholdPercent=\d{1,3}$".into()),
        (G1NewSizePercent, r"^-XX:G1NewSizePercent=\d{1,3}$".into()),
        (G1ReservePercent, r"^-XX:G1ReservePercent=\d{1,3}$".into()),
        (G1SummarizeRSetStats, r"^-XX:[\-+]G1SummarizeRSetStats$".into()),
        (G1SummarizeRSetStatsPeriod, r"^-XX:G1SummarizeRSetStatsPeriod=\d$".into()),
        (GcLockerRetryAllocationCount, r"^-XX:GCLockerRetryAllocationCount=\d{1,}$".into()),
        (GcLogFileSize, format!("^-XX:GCLogFileSize={size}$")),
        (GcTimeRatio, r"^-XX:GCTimeRatio=\d{1,3}$".into()),
        (GuaranteedSafepointInterval, r"^-XX:GuaranteedSafepointInterval=\d{1,10}$".into()),
        (HeapBaseMinAddress, format!("^-XX:HeapBaseMinAddress={size}$")),
        (HeapDumpOnOutOfMemoryError, r"^-XX:[\-+]HeapDumpOnOutOfMemoryError$".into()),
        (HeapDumpPath, r"^-XX:HeapDumpPath=\S+$".into()),
        (IgnoreUnrecognizedVmOptions, r"^-XX:[\-+]IgnoreUnrecognizedVMOptions$".into()),
        (
            InitialBootClassLoaderMetaspaceSize,
            format!("^-XX:InitialBootClassLoaderMetaspaceSize={size}$"),
        ),
        (InitiatingHeapOccupancyPercent, r"^-XX:InitiatingHeapOccupancyPercent=\d{1,3}$".into()),
        (LargePageSizeInBytes, format!("^-XX:LargePageSizeInBytes={size}$")),
        (LogFile, r"^-XX:LogFile=\S+$".into()),
        (LogVmOutput, r"^-XX:[\-+]LogVMOutput$".into()),
        (LoopStripMiningIter, r"^-XX:LoopStripMiningIter=\d{1,}$".into()),
        (MaxGcPauseMillis, r"^-XX:MaxGCPauseMillis=\d{1,}$".into()),
        (MaxJavaStackTraceDepth, r"^-XX:MaxJavaStackTraceDepth=\d{1,}$".into()),
        (MaxNewSize, format!("^-XX:MaxNewSize={size}$")),
        (MetaspaceSize, format!("^-XX:MetaspaceSize={size}$")),
        (ManagementServer, r"^-XX:[\-+]ManagementServer$".into()),
        (MarkStackSize, format!("^-XX:MarkStackSize={size}$")),
        (MarkStackSizeMax, format!("^-XX:MarkStackSizeMax={size}$")),
        (MaxDirectMemorySize, format!("^-XX:MaxDirectMemorySize={size}$")),
        (MaxHeapFreeRatio, r"^-XX:MaxHeapFreeRatio=\d{1,3}$".into()),
        (MaxInlineLevel, r"^-XX:MaxInlineLevel=\d{1,}$".into()),
        (MaxMetaspaceSize, format!("^-XX:MaxMetaspaceSize={size}$")),
        (MaxPermSize, format!("^-XX:MaxPermSize={size}$")),
        (MaxTenuringThreshold, r"^-XX:MaxTenuringThreshold=\d{1,}$".into()),
        (MinHeapDeltaBytes, r"^-XX:MinHeapDeltaBytes=\d{1,}$".into()),
        (MinHeapFreeRatio, r"^-XX:MinHeapFreeRatio=\d{1,3}$".into()),
        (NativeMemoryTracking, r"^-XX:NativeMemoryTracking=.+$".into()),
        (NewRatio, r"^-XX:NewRatio=.+$".into()),
        (NumberOfGcLogFiles, r"^-XX:NumberOfGCLogFiles=\d{1,}$".into()),
        (OldPlabSize, r"^-XX:OldPLABSize=\d{1,}$".into()),
        (OldSize, format!("^-XX:OldSize={size}$")),
        (OmitStackTraceInFastThrow, r"^-XX:[\-+]OmitStackTraceInFastThrow$".into()),
        (OnError, r"^-XX:OnError=.+$".into()),
        (OnOutOfMemoryError, r"^-XX:OnOutOfMemoryError=.+$".into()),
        (OptimizeStringConcat, r"^-XX:[\-+]OptimizeStringConcat$".into()),
        (ParallelGcThreads, r"^-XX:ParallelGCThreads=\d{1,3}$".into()),
        (ParallelRefProcEnabled, r"^-XX:[\-+]ParallelRefProcEnabled$".into()),
        (PerfDisableSharedMem, r"^-XX:[\-+]PerfDisableSharedMem$".into()),
        (PerMethodRecompilationCutoff, r"^-XX:PerMethodRecompilationCutoff=\d{1,}$".into()),
        (PermSize, format!("^-XX:PermSize={size}$")),
        (PrintAdaptiveSizePolicy, r"^-XX:[\-+]PrintAdaptiveSizePolicy$".into()),
        (PrintClassHistogram, r"^-XX:[\-+]PrintClassHistogram$".into()),
        (PrintClassHistogramAfterFullGc, r"^-XX:[\-+]PrintClassHistogramAfterFullGC$".into()),
        (PrintClassHistogramBeforeFullGc, r"^-XX:[\-+]PrintClassHistogramBeforeFullGC$".into()),
        (PrintCodeCache, r"^-XX:[\-+]PrintCodeCache$".into()),
        (PrintCommandLineFlags, r"^-XX:[\-+]PrintCommandLineFlags$".into()),
        (PrintFlagsFinal, r"^-XX:[\-+]PrintFlagsFinal$".into()),
        (PrintFlsStatistics, r"^-XX:PrintFLSStatistics=\d$".into()),
        (PrintGc, r"^-XX:[\-+]PrintGC$".into()),
        (
            PrintGcApplicationConcurrentTime,
            r"^-XX:[\-+]PrintGCApplicationConcurrentTime$".into(),
        ),
        (PrintGcApplicationStoppedTime, r"^-XX:[\-+]PrintGCApplicationStoppedTime$".into()),
        (PrintGcCause, r"^-XX:[\-+]PrintGCCause$".into()),
        (PrintGcDateStamps, r"^-XX:[\-+]PrintGCDateStamps$".into()),
        (PrintGcDetails, r"^-XX:[\-+]PrintGCDetails$".into()),
        (PrintGcTaskTimeStamps, r"^-XX:[\-+]PrintGCTaskTimeStamps$".into()),
        (PrintGcTimeStamps, r"^-XX:[\-+]PrintGCTimeStamps$".into()),
        (PrintHeapAtGc, r"^-XX:[\-+]PrintHeapAtGC$".into()),
        (PrintPromotionFailure, r"^-XX:[\-+]PrintPromotionFailure$".into()),
        (PrintReferenceGc, r"^-XX:[\-+]PrintReferenceGC$".into()),
        (PrintSafepointStatistics, r"^-XX:[\-+]PrintSafepointStatistics$".into()),
        (
            PrintStringDeduplicationStatistics,
            r"^-XX:[\-+]PrintStringDeduplicationStatistics$".into(),
        ),
        (PrintStringTableStatistics, r"^-XX:[\-+]PrintStringTableStatistics$".into()),
        (PrintTenuringDistribution, r"^-XX:[\-+]PrintTenuringDistribution$".into()),
        (ReservedCodeCacheSize, format!("^-XX:ReservedCodeCacheSize={size}$")),
        (ResizePlab, r"^-XX:[\-+]ResizePLAB$".into()),
        (ResizeTlab, r"^-XX:[\-+]ResizeTLAB$".into()),
        (
            ShenandoahGcHeuristics,
            r"^-XX:ShenandoahGCHeuristics=(adaptive|aggressive|compact|static)$".into(),
        ),
        (ShenandoahGuaranteedGcInterval, r"^-XX:ShenandoahGuaranteedGCInterval=\d{1,}$".into()),
        (ShenandoahMinFreeThreshold, r"^-XX:ShenandoahMinFreeThreshold=\d{1,3}$".into()),
        (ShenandoahUncommitDelay, r"^-XX:ShenandoahUncommitDelay=\d{1,}$".into()),
        (SoftRefLruPolicyMsPerMb, r"^-XX:SoftRefLRUPolicyMSPerMB=\d{1,}$".into()),
        (StringTableSize, r"^-XX:StringTableSize=\d{1,}$".into()),
        (SurvivorRatio, r"^-XX:SurvivorRatio=\d{1,}$".into()),
        (ThreadStackSize, format!("^-(X)?(ss|X:ThreadStackSize=){size}$")),
        (TargetSurvivorRatio, r"^-XX:TargetSurvivorRatio=\d{1,3}$".into()),
        (ThreadPriorityPolicy, r"^-XX:ThreadPriorityPolicy=[-]{0,1}\d{1,}$".into()),
        (Tier2CompileThreshold, r"^-XX:Tier2CompileThreshold=\d{1,}$".into()),
        (Tier3CompileThreshold, r"^-XX:Tier3CompileThreshold=\d{1,}$".into()),
        (Tier4CompileThreshold, r"^-XX:Tier4CompileThreshold=\d{1,}$".into()),
        (TieredCompilation, r"^-XX:[\-+]TieredCompilation$".into()),
        (TraceClassLoading, r"^-XX:[\-+]TraceClassLoading$".into()),
        (TraceClassUnloading, r"^-XX:[\-+]TraceClassUnloading$".into()),
        (UnlockDiagnosticVmOptions, r"^-XX:[\-+]UnlockDiagnosticVMOptions$".into()),
        (UnlockExperimentalVmOptions, r"^-XX:[\-+]UnlockExperimentalVMOptions$".into()),
        (UnsyncloadClass, r"^-XX:[\-+]UnsyncloadClass$".into()),
        (UseAvx, r"^-XX:UseAVX=\d{1,}$".into()),
        (UseAdaptiveSizePolicy, r"^-XX:[\-+]UseAdaptiveSizePolicy$".into()),
        (UseBiasedLocking, r"^-XX:[\-+]UseBiasedLocking$".into()),
        (UseCGroupMemoryLimitForHeap, r"^-XX:[\-+]UseCGroupMemoryLimitForHeap$".into()),
        (UseCmsCompactAtFullCollection, r"^-XX:[\-+]UseCMSCompactAtFullCollection$".into()),
        (UseCmsInitiatingOccupancyOnly, r"^-XX:[\-+]UseCMSInitiatingOccupancyOnly$".into()),
        (UseCodeCacheFlushing, r"^-XX:[\-+]UseCodeCacheFlushing$".into()),
        (UseCompressedClassPointers, r"^-XX:[\-+]UseCompressedClassPointers$".into()),
        (UseCompressedOops, r"^-XX:[\-+]UseCompressedOops$".into()),
        (UseConcMarkSweepGc, r"^-XX:[\-+]UseConcMarkSweepGC$".into()),
        (UseCondCardMark, r"^-XX:[\-+]UseCondCardMark$".into()),
        (UseContainerSupport, r"^-XX:[\-+]UseContainerSupport$".into()),
        (UseCountedLoopSafepoints, r"^-XX:[\-+]UseCountedLoopSafepoints$".into()),
        (
            UseDynamicNumberOfCompilerThreads,
            r"^-XX:[\-+]UseDynamicNumberOfCompilerThreads$".into(),
        ),
        (UseDynamicNumberOfGcThreads, r"^-XX:[\-+]UseDynamicNumberOfGCThreads$".into()),
        (UseFastAccessorMethods, r"^-XX:[\-+]UseFastAccessorMethods$".into()),
        (UseFastUnorderedTimeStamps, r"^-XX:[\-+]UseFastUnorderedTimeStamps$".into()),
        (UseG1Gc, r"^-XX:[\-+]UseG1GC$".into()),
        (UseGcLogFileRotation, r"^-XX:[\-+]UseGCLogFileRotation$".into()),
        (UseGcOverheadLimit, r"^-XX:[\-+]UseGCOverheadLimit$".into()),
        (UseHugeTlbfs, r"^-XX:[\-+]UseHugeTLBFS$".into()),
        (UseMembar, r"^-XX:[\-+]UseMembar$".into()),
        (UseLargePages, r"^-XX:[\-+]UseLargePages$".into()),
        (
            UseLargePagesIndividualAllocation,
            r"^-XX:[\-+]UseLargePagesIndividualAllocation$".into(),
        ),
        (UseNuma, r"^-XX:[\-+]UseNUMA$".into()),
        (UseParallelGc, r"^-XX:[\-+]UseParallelGC$".into()),
        (UseParallelOldGc, r"^-XX:[\-+]UseParallelOldGC$".into()),
        (UseParNewGc, r"^-XX:[\-+]UseParNewGC$".into()),
        (UsePerfData, r"^-XX:[\-+]UsePerfData$".into()),
        (UseSerialGc, r"^-XX:[\-+]UseSerialGC$".into()),
        (UseShenandoahGc, r"^-XX:[\-+]UseShenandoahGC$".into()),
        (UseSplitVerifier, r"^-XX:[\-+]UseSplitVerifier$".into()),
        (UseStringDeduplication, r"^-XX:[\-+]UseStringDeduplication$".into()),
        (UseThreadPriorities, r"^-XX:[\-+]UseThreadPriorities$".into()),
        (UseTlab, r"^-XX:[\-+]UseTLAB$".into()),
        (UseVmInterruptibleIo, r"^-XX:[\-+]UseVMInterruptibleIO$".into()),
        (UseZGc, r"^-XX:[\-+]UseZGC$".into()),
    ]
}

static MATCHERS: Lazy<Vec<(Category, Regex)>> = Lazy::new(|| {
    pattern_table()
        .into_iter()
        .map(|(category, pattern)| (category, Regex::new(&pattern).unwrap()))
        .collect()
});

/// Category of a single option token.
pub fn classify(token: &str) -> Category {
    MATCHERS
        .iter()
        .find(|(_, regex)| regex.is_match(token))
        .map_or(Category::Undefined, |(category, _)| *category)
}

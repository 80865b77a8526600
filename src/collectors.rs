//! Garbage collector identification.
//!
//! Two sources of truth exist: collectors observed from outside the
//! options (GC log evidence, carried in the context) and collectors
//! implied by the GC flags. The observed set wins when present; the
//! analysis flags disagreements between the two.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::context::JvmContext;
use crate::options::JvmOptions;

/// A HotSpot collector, young or old generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GarbageCollector {
    SerialNew,
    SerialOld,
    ParallelScavenge,
    ParallelOld,
    ParallelSerialOld,
    ParNew,
    Cms,
    G1,
    Shenandoah,
    Zgc,
    Unknown,
}

/// Collectors implied by the GC flags alone, falling back to the JDK
/// default for the version when no GC flag is set.
///
/// Young and old generation pairings follow HotSpot: `-XX:+UseParallelGC`
/// runs the parallel old collector unless `-XX:-UseParallelOldGC` demotes
/// it to serial old, and CMS runs ParNew young unless ParNew is
/// explicitly disabled.
pub fn from_flags(options: &JvmOptions, context: &JvmContext) -> Vec<GarbageCollector> {
    use GarbageCollector::*;
    let mut collectors = Vec::new();
    if options.is_enabled(Category::UseSerialGc) {
        collectors.push(SerialNew);
        collectors.push(SerialOld);
    }
    if options.is_enabled(Category::UseParallelOldGc) {
        collectors.push(ParallelScavenge);
        collectors.push(ParallelOld);
    } else if options.is_enabled(Category::UseParallelGc) {
        collectors.push(ParallelScavenge);
        if options.is_disabled(Category::UseParallelOldGc) {
            collectors.push(ParallelSerialOld);
        } else {
            collectors.push(ParallelOld);
        }
    }
    if options.is_enabled(Category::UseConcMarkSweepGc) {
        if options.get(Category::UseParNewGc).is_none()
            || options.is_enabled(Category::UseParNewGc)
        {
            collectors.push(ParNew);
        } else {
            collectors.push(SerialNew);
        }
        collectors.push(Cms);
        if !options.is_enabled(Category::UseCmsCompactAtFullCollection) {
            collectors.push(SerialOld);
        }
    } else if options.is_enabled(Category::UseParNewGc) {
        collectors.push(ParNew);
        collectors.push(SerialOld);
    }
    if options.is_enabled(Category::UseG1Gc) {
        collectors.push(G1);
    }
    if options.is_enabled(Category::UseShenandoahGc) {
        collectors.push(Shenandoah);
    }
    if options.is_enabled(Category::UseZGc) {
        collectors.push(Zgc);
    }
    if collectors.is_empty() {
        collectors = crate::defaults::collectors(context.major_version);
    }
    collectors
}

/// Collectors the JVM actually runs: context evidence when present,
/// otherwise inferred from the flags.
pub fn effective(options: &JvmOptions, context: &JvmContext) -> Vec<GarbageCollector> {
    if !context.garbage_collectors.is_empty() {
        context.garbage_collectors.clone()
    } else {
        from_flags(options, context)
    }
}

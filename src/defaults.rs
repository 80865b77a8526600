//! Values the JVM assumes when an option is absent.
//!
//! Rules consult this table instead of scattering literal defaults
//! through their conditions, so each default is declared exactly once.

use crate::collectors::GarbageCollector;
use crate::units::{half_even_div, GIGABYTE, MEGABYTE};

/// Compressed class space reservation when
/// `-XX:CompressedClassSpaceSize` is not set.
pub const COMPRESSED_CLASS_SPACE_SIZE: u64 = GIGABYTE;

/// Boot class loader metaspace when
/// `-XX:InitialBootClassLoaderMetaspaceSize` is not set.
pub const INITIAL_BOOT_CLASS_LOADER_METASPACE_SIZE: u64 = 4 * MEGABYTE;

/// Ergonomic max heap when `-Xmx`/`-XX:MaxHeapSize` is not set: a
/// quarter of physical memory, or `None` when memory is unknown.
pub fn max_heap(memory: u64) -> Option<u64> {
    if memory > 0 {
        Some(half_even_div(memory, 4))
    } else {
        None
    }
}

/// Collectors a JDK runs when no GC flag picks one.
pub fn collectors(major: Option<u32>) -> Vec<GarbageCollector> {
    use GarbageCollector::*;
    match major {
        Some(major) if major >= 9 => vec![G1],
        Some(7) | Some(8) => vec![ParallelScavenge, ParallelOld],
        _ => vec![Unknown],
    }
}

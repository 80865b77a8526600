// Export modules for library usage
pub mod analysis;
pub mod category;
pub mod collectors;
pub mod context;
pub mod defaults;
pub mod matcher;
pub mod options;
pub mod tokenizer;
pub mod units;

// Re-export commonly used types
pub use crate::analysis::{analyze, Finding, FindingId, Report, Severity};
pub use crate::category::Category;
pub use crate::collectors::GarbageCollector;
pub use crate::context::{Bit, JvmContext, Os};
pub use crate::matcher::classify;
pub use crate::options::JvmOptions;
pub use crate::tokenizer::tokenize;

//! Immutable model of a parsed option string.
//!
//! [`JvmOptions::parse`] tokenizes the raw string and folds every token
//! into the model in one left-to-right pass: singular options keep the
//! last value seen, repeatable options accumulate, and every token also
//! lands in a repeat-tracking slot so nothing is lost, whatever its
//! category. After the fold the model only answers questions.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::category::{AuxGroup, Category, ValueShape};
use crate::matcher;
use crate::tokenizer;
use crate::units::{self, GIGABYTE};

static ENABLED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-XX:\+.+$").unwrap());
static DISABLED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-XX:-.+$").unwrap());
static DISABLED_ANYWHERE: Lazy<Regex> = Lazy::new(|| Regex::new(r"-XX:-\S+").unwrap());
static LOG_TO_FILE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^.+file.+$").unwrap());
static RMI_CLIENT_GC_INTERVAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-Dsun\.rmi\.dgc\.client\.gcInterval=\d{1,}$").unwrap());
static RMI_SERVER_GC_INTERVAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-Dsun\.rmi\.dgc\.server\.gcInterval=\d{1,}$").unwrap());

/// Disabled options with a dedicated rule somewhere in the analysis.
/// Disabling anything else is reported as unaccounted for.
const ACCOUNTED_DISABLED_OPTIONS: &[&str] = &[
    "-XX:-BackgroundCompilation",
    "-XX:-ClassUnloading",
    "-XX:-CMSClassUnloadingEnabled",
    "-XX:-CMSParallelInitialMarkEnabled",
    "-XX:-CMSParallelRemarkEnabled",
    "-XX:-ExplicitGCInvokesConcurrentAndUnloadsClasses",
    "-XX:-HeapDumpOnOutOfMemoryError",
    "-XX:-PrintAdaptiveSizePolicy",
    "-XX:-PrintGCCause",
    "-XX:-PrintGCDateStamps",
    "-XX:-PrintGCDetails",
    "-XX:-PrintGCTimeStamps",
    "-XX:-TraceClassUnloading",
    "-XX:-UseAdaptiveSizePolicy",
    "-XX:-UseBiasedLocking",
    "-XX:-UseCompressedClassPointers",
    "-XX:-UseCompressedOops",
    "-XX:-UseGCLogFileRotation",
    "-XX:-UseGCOverheadLimit",
    "-XX:-UseLargePagesIndividualAllocation",
    "-XX:-UseParallelOldGC",
    "-XX:-UseParNewGC",
    "-XX:-TieredCompilation",
];

pub(crate) fn is_enabled_token(token: &str) -> bool {
    ENABLED.is_match(token)
}

pub(crate) fn is_disabled_token(token: &str) -> bool {
    DISABLED.is_match(token)
}

/// Identity under which repeats of an option are tracked.
///
/// Module-system and agent options repeat legitimately with different
/// values, so their full text is the identity and only literal repeats
/// collide. Everything else shares one slot per category.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SlotKey {
    Category(Category),
    Token(String),
}

/// A parsed option string.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JvmOptions {
    raw: String,
    tokens: Vec<String>,
    singles: HashMap<Category, String>,
    multis: HashMap<Category, Vec<String>>,
    slots: HashMap<SlotKey, Vec<String>>,
    slot_order: Vec<SlotKey>,
    diagnostic: Vec<String>,
    experimental: Vec<String>,
}

impl JvmOptions {
    pub fn parse(options: &str) -> Self {
        let tokens = tokenizer::tokenize(options);
        let mut parsed = JvmOptions {
            raw: options.to_string(),
            ..JvmOptions::default()
        };
        for token in tokens {
            parsed.fold(token);
        }
        parsed
    }

    fn fold(&mut self, token: String) {
        let category = matcher::classify(&token);
        log::trace!("{token:?} -> {category:?}");
        match category.aux_group() {
            Some(AuxGroup::Diagnostic) => self.diagnostic.push(token.clone()),
            Some(AuxGroup::Experimental) => self.experimental.push(token.clone()),
            None => {}
        }
        match category {
            Category::UseConcMarkSweepGc => {
                // Enabling CMS overrides any earlier serial old setting.
                if is_enabled_token(&token) {
                    self.singles.remove(&Category::UseParallelOldGc);
                }
                self.singles.insert(category, token.clone());
            }
            Category::UseParallelOldGc => {
                // Ignored when CMS was enabled earlier in the string, but
                // the slot below still records the occurrence.
                if !self.is_enabled(Category::UseConcMarkSweepGc) {
                    self.singles.insert(category, token.clone());
                }
            }
            _ => {
                if category.value_shape() == ValueShape::Repeatable {
                    self.multis.entry(category).or_default().push(token.clone());
                } else {
                    self.singles.insert(category, token.clone());
                }
            }
        }
        self.record_slot(category, &token);
        self.tokens.push(token);
    }

    fn record_slot(&mut self, category: Category, token: &str) {
        let key = if category.tracks_repeats_by_token() {
            SlotKey::Token(token.to_string())
        } else {
            SlotKey::Category(category)
        };
        if !self.slots.contains_key(&key) {
            self.slot_order.push(key.clone());
        }
        self.slots.entry(key).or_default().push(token.to_string());
    }

    /// Raw option string as given.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Every token in input order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Last value seen for a singular category.
    pub fn get(&self, category: Category) -> Option<&str> {
        self.singles.get(&category).map(String::as_str)
    }

    /// Every value seen for a repeatable category, in input order.
    pub fn get_all(&self, category: Category) -> &[String] {
        match self.multis.get(&category) {
            Some(values) => values.as_slice(),
            None => &[],
        }
    }

    pub fn has(&self, category: Category) -> bool {
        if category.value_shape() == ValueShape::Repeatable {
            !self.get_all(category).is_empty()
        } else {
            self.singles.contains_key(&category)
        }
    }

    /// True when a toggle is present as `-XX:+Name`.
    pub fn is_enabled(&self, category: Category) -> bool {
        self.get(category).is_some_and(is_enabled_token)
    }

    /// True when a toggle is present as `-XX:-Name`.
    pub fn is_disabled(&self, category: Category) -> bool {
        self.get(category).is_some_and(is_disabled_token)
    }

    /// Byte value of a singular size option. `ThreadStackSize` has its
    /// own scaling, see [`units::stack_option_bytes`].
    pub fn bytes(&self, category: Category) -> Option<u64> {
        let value = self.get(category)?;
        if category == Category::ThreadStackSize {
            units::stack_option_bytes(value)
        } else {
            units::option_bytes(value)
        }
    }

    /// Numeric value of a singular `=N` option.
    pub fn number(&self, category: Category) -> Option<i64> {
        self.get(category).and_then(units::option_number)
    }

    /// Everything recorded under a category-keyed slot, superseded
    /// occurrences included.
    pub fn slot_entries(&self, category: Category) -> &[String] {
        match self.slots.get(&SlotKey::Category(category)) {
            Some(entries) => entries.as_slice(),
            None => &[],
        }
    }

    /// Options behind `-XX:+UnlockDiagnosticVMOptions`, in input order.
    pub fn diagnostic(&self) -> &[String] {
        &self.diagnostic
    }

    /// Options behind `-XX:+UnlockExperimentalVMOptions`, in input order.
    pub fn experimental(&self) -> &[String] {
        &self.experimental
    }

    /// Tokens that matched nothing in the vocabulary, in input order.
    pub fn undefined(&self) -> &[String] {
        self.get_all(Category::Undefined)
    }

    /// Raw text of every option whose slot holds more than one entry,
    /// space separated, in first-seen slot order. System properties,
    /// bootclasspath entries and unrecognized options repeat freely and
    /// are never duplicates.
    pub fn duplicates(&self) -> Option<String> {
        let mut repeated: Vec<&str> = Vec::new();
        for key in &self.slot_order {
            if let SlotKey::Category(
                Category::SystemProperty | Category::Undefined | Category::Bootclasspath,
            ) = key
            {
                continue;
            }
            if let Some(entries) = self.slots.get(key) {
                if entries.len() > 1 {
                    repeated.extend(entries.iter().map(String::as_str));
                }
            }
        }
        if repeated.is_empty() {
            None
        } else {
            Some(repeated.join(" "))
        }
    }

    /// Every `-XX:-Name` occurrence in the raw input, in order.
    pub fn disabled_options(&self) -> Vec<&str> {
        DISABLED_ANYWHERE
            .find_iter(&self.raw)
            .map(|m| m.as_str())
            .collect()
    }

    /// Disabled options without a dedicated rule, comma separated.
    /// Unrecognized options are reported separately, so they are skipped.
    pub fn unaccounted_disabled_options(&self) -> Option<String> {
        let undefined = self.undefined();
        let unaccounted: Vec<&str> = self
            .disabled_options()
            .into_iter()
            .filter(|option| {
                !ACCOUNTED_DISABLED_OPTIONS.contains(option)
                    && !undefined.iter().any(|u| u == option)
            })
            .collect();
        if unaccounted.is_empty() {
            None
        } else {
            Some(unaccounted.join(", "))
        }
    }

    /// First `-Dsun.rmi.dgc.client.gcInterval` property, if any.
    pub fn sun_rmi_dgc_client_gc_interval(&self) -> Option<&str> {
        self.get_all(Category::SystemProperty)
            .iter()
            .map(String::as_str)
            .find(|property| RMI_CLIENT_GC_INTERVAL.is_match(property))
    }

    /// First `-Dsun.rmi.dgc.server.gcInterval` property, if any.
    pub fn sun_rmi_dgc_server_gc_interval(&self) -> Option<&str> {
        self.get_all(Category::SystemProperty)
            .iter()
            .map(String::as_str)
            .find(|property| RMI_SERVER_GC_INTERVAL.is_match(property))
    }

    /// True unless compressed oops are explicitly disabled or the
    /// explicit max heap is 32g or larger. An unset max heap leaves the
    /// default in place.
    pub fn is_compressed_oops(&self) -> bool {
        if self.is_disabled(Category::UseCompressedOops) {
            return false;
        }
        match self.bytes(Category::MaxHeapSize) {
            Some(max_heap) => max_heap < 32 * GIGABYTE,
            None => true,
        }
    }

    /// Compressed class pointers require compressed oops.
    pub fn is_compressed_class_pointers(&self) -> bool {
        self.is_compressed_oops() && !self.is_disabled(Category::UseCompressedClassPointers)
    }

    /// True when any GC logging option is present, JDK8 style or unified.
    pub fn is_gc_logging_enabled(&self) -> bool {
        self.has(Category::LogGc)
            || self.has(Category::Log)
            || self.has(Category::PrintGc)
            || self.has(Category::PrintGcDetails)
            || self.has(Category::PrintGcTimeStamps)
            || self.has(Category::PrintGcDateStamps)
            || self.has(Category::PrintGcApplicationStoppedTime)
    }

    /// True when GC logging goes to stdout rather than a file.
    pub fn is_gc_logging_to_stdout(&self) -> bool {
        if !self.is_gc_logging_enabled() {
            return false;
        }
        let unified = self.get_all(Category::Log);
        if unified.is_empty() {
            self.get(Category::LogGc).is_none()
        } else {
            unified.iter().all(|entry| !LOG_TO_FILE.is_match(entry))
        }
    }

    /// True when no collector is selected by flag, either polarity.
    pub fn is_default_collector(&self) -> bool {
        [
            Category::UseSerialGc,
            Category::UseParNewGc,
            Category::UseConcMarkSweepGc,
            Category::UseParallelGc,
            Category::UseG1Gc,
            Category::UseShenandoahGc,
            Category::UseZGc,
        ]
        .into_iter()
        .all(|gc| self.get(gc).is_none())
    }
}

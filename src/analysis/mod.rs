//! Tuning analysis over a folded option set.
//!
//! `analyze` ties the pipeline together: tokenize and fold the raw
//! option string, resolve the effective collectors against the context,
//! evaluate every rule and render the resulting findings.

pub mod catalog;
mod render;
mod rules;

pub use catalog::{FindingId, Severity};

use serde::Serialize;

use crate::collectors::{self, GarbageCollector};
use crate::context::JvmContext;
use crate::options::JvmOptions;

/// One diagnostic with its rendered advisory text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub id: FindingId,
    pub severity: Severity,
    pub message: String,
}

/// Everything one analysis run produced.
#[derive(Clone, Debug)]
pub struct Report {
    options: JvmOptions,
    collectors: Vec<GarbageCollector>,
    findings: Vec<Finding>,
}

impl Report {
    /// The folded option set the findings refer to.
    pub fn options(&self) -> &JvmOptions {
        &self.options
    }

    /// The garbage collectors the JVM effectively runs.
    pub fn collectors(&self) -> &[GarbageCollector] {
        &self.collectors
    }

    /// Findings in rule evaluation order.
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }
}

/// Analyze a raw JVM option string against a runtime context.
///
/// Never fails: unrecognized options become findings rather than
/// errors, and an empty option string produces an empty report.
pub fn analyze(options: &str, context: &JvmContext) -> Report {
    let options = JvmOptions::parse(options);
    let inferred = collectors::from_flags(&options, context);
    let effective = collectors::effective(&options, context);
    let ids = rules::run(&options, context, &inferred, &effective);
    log::debug!(
        "analyzed {} tokens into {} findings",
        options.tokens().len(),
        ids.len()
    );
    let findings = ids
        .iter()
        .map(|&id| Finding {
            id,
            severity: id.severity(),
            message: render::message(id, &options, &ids),
        })
        .collect();
    Report {
        options,
        collectors: effective,
        findings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_an_empty_report() {
        let report = analyze("", &JvmContext::new());
        assert!(report.findings().is_empty());
        assert!(report.options().tokens().is_empty());
    }

    #[test]
    fn findings_carry_catalog_severity_and_text() {
        let report = analyze("-Xverify:none", &JvmContext::new());
        let finding = report
            .findings()
            .iter()
            .find(|finding| finding.id == FindingId::VerifyNone)
            .unwrap();
        assert_eq!(finding.severity, Severity::Warn);
        assert_eq!(finding.message, FindingId::VerifyNone.template());
    }

    #[test]
    fn report_reflects_the_effective_collectors() {
        let context = JvmContext {
            garbage_collectors: vec![GarbageCollector::G1],
            ..JvmContext::default()
        };
        let report = analyze("-XX:+UseConcMarkSweepGC", &context);
        assert_eq!(report.collectors(), [GarbageCollector::G1]);
    }

    #[test]
    fn analysis_is_deterministic() {
        let context = JvmContext::new();
        let first = analyze("-Xmx4g -Xms2g -XX:+UseG1GC -XX:BogusFlag", &context);
        let second = analyze("-Xmx4g -Xms2g -XX:+UseG1GC -XX:BogusFlag", &context);
        assert_eq!(first.findings(), second.findings());
    }
}

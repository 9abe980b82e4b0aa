//! The result of one validation pass.

use std::fmt;

use serde::Serialize;

use stix_objects::PropertyCheck;

/// Aggregate pass/fail plus every diagnostic, in check order.
///
/// Built fresh by each validation call and owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub ok: bool,
    pub problem_count: usize,
    pub diagnostics: Vec<String>,
}

impl ValidationReport {
    /// An empty, passing report.
    pub fn new() -> Self {
        Self {
            ok: true,
            problem_count: 0,
            diagnostics: Vec::new(),
        }
    }

    /// Fold one capsule check into the report.
    pub fn record(&mut self, check: PropertyCheck) {
        self.problem_count += check.problems;
        self.diagnostics.extend(check.messages);
        self.ok = self.problem_count == 0;
    }

    /// Record a single problem with its diagnostic.
    pub fn problem(&mut self, message: impl Into<String>) {
        self.record(PropertyCheck::problem(message));
    }

    /// Append every check from `other` after this report's own.
    pub fn merge(&mut self, other: ValidationReport) {
        self.problem_count += other.problem_count;
        self.diagnostics.extend(other.diagnostics);
        self.ok = self.problem_count == 0;
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ok {
            return write!(f, "ok");
        }
        write!(f, "{} problem(s)", self.problem_count)?;
        for d in &self.diagnostics {
            write!(f, "\n  {d}")?;
        }
        Ok(())
    }
}

//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{DocumentKind, Strategy};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of validating one value
#[derive(Debug, Serialize)]
pub struct ValidationEntry {
    /// The value as given
    pub input: String,
    /// Digits only
    pub canonical: String,
    /// Whether the value is valid
    pub valid: bool,
    /// Why the value was rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Result of a validate operation
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    /// Document the values were checked against
    pub document: DocumentKind,
    /// Whether every value is valid
    pub passed: bool,
    /// One entry per value, in input order
    pub results: Vec<ValidationEntry>,
}

/// Result of a generate operation
#[derive(Debug, Serialize)]
pub struct GenerateResult {
    /// Document the values belong to
    pub document: DocumentKind,
    /// Whether the values are masked
    pub masked: bool,
    /// Generated values
    pub values: Vec<String>,
}

/// Result of a mask or unmask operation
#[derive(Debug, Serialize)]
pub struct TransformResult {
    /// Document whose layout was applied
    pub document: DocumentKind,
    /// The value as given
    pub input: String,
    /// The transformed value
    pub output: String,
}

/// One line of the strategy listing
#[derive(Debug, Serialize)]
pub struct StrategyInfo {
    /// Document kind
    pub document: DocumentKind,
    /// Canonical length
    pub digits: usize,
    /// Number of check digits
    pub check_digits: usize,
    /// Mask pattern, `#` for digits
    pub mask: String,
}

impl From<&Strategy> for StrategyInfo {
    fn from(strategy: &Strategy) -> Self {
        Self {
            document: strategy.kind,
            digits: strategy.digits,
            check_digits: strategy.check_digit_count(),
            mask: strategy.mask.pattern().to_string(),
        }
    }
}

/// Result of a list operation
#[derive(Debug, Serialize)]
pub struct StrategyList {
    /// Every available strategy
    pub strategies: Vec<StrategyInfo>,
}

impl ValidationReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        for entry in &self.results {
            if entry.valid {
                println!("{} {} ({})", "VALID".green().bold(), entry.input, self.document);
            } else {
                println!(
                    "{} {} ({}): {}",
                    "INVALID".red().bold(),
                    entry.input,
                    self.document,
                    entry.reason.as_deref().unwrap_or("invalid")
                );
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl GenerateResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for value in &self.values {
                    println!("{value}");
                }
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

impl TransformResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.output),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

impl StrategyList {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }

    fn render_human(&self) {
        println!("{:<8} {:>6} {:>6}  MASK", "DOCUMENT", "DIGITS", "CHECK");
        for s in &self.strategies {
            println!(
                "{:<8} {:>6} {:>6}  {}",
                s.document.to_string(),
                s.digits,
                s.check_digits,
                s.mask
            );
        }
    }
}

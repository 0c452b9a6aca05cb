//! Validate values against a document's rules

use brdoc::core::ports::Document;
use brdoc::documents;
use brdoc::output::{OutputMode, ValidationEntry, ValidationReport};

/// Validate each value, exiting with status 1 if any is invalid
pub fn validate(document: &str, values: &[String], mode: OutputMode) -> anyhow::Result<()> {
    let strategy = documents::resolve(document)?;
    log::debug!("validating {} value(s) as {}", values.len(), strategy.kind);

    let results: Vec<ValidationEntry> = values
        .iter()
        .map(|value| {
            let outcome = strategy.validate(value);
            if let Err(reason) = &outcome {
                log::debug!("{value}: {reason}");
            }
            ValidationEntry {
                input: value.clone(),
                canonical: strategy.unmask(value),
                valid: outcome.is_ok(),
                reason: outcome.err().map(|e| e.to_string()),
            }
        })
        .collect();

    let passed = results.iter().all(|r| r.valid);

    let report = ValidationReport {
        document: strategy.kind,
        passed,
        results,
    };

    report.render(mode);

    if !passed {
        std::process::exit(1);
    }

    Ok(())
}

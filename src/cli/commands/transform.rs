//! Mask and unmask values

use brdoc::core::ports::Document;
use brdoc::documents;
use brdoc::output::{OutputMode, TransformResult};

/// Insert the document's separators into a digits-only value
pub fn mask(document: &str, value: &str, mode: OutputMode) -> anyhow::Result<()> {
    let strategy = documents::resolve(document)?;
    log::debug!("masking with {} ({})", strategy.kind, strategy.mask);

    let result = TransformResult {
        document: strategy.kind,
        input: value.to_string(),
        output: strategy.mask(value)?,
    };

    result.render(mode);
    Ok(())
}

/// Strip every non-digit character from a value
pub fn unmask(document: &str, value: &str, mode: OutputMode) -> anyhow::Result<()> {
    let strategy = documents::resolve(document)?;

    let result = TransformResult {
        document: strategy.kind,
        input: value.to_string(),
        output: strategy.unmask(value),
    };

    result.render(mode);
    Ok(())
}

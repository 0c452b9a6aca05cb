//! List supported documents

use brdoc::documents;
use brdoc::output::{OutputMode, StrategyInfo, StrategyList};

/// Show every strategy with its length and mask
pub fn list(mode: OutputMode) -> anyhow::Result<()> {
    let result = StrategyList {
        strategies: documents::all().map(StrategyInfo::from).collect(),
    };

    result.render(mode);
    Ok(())
}

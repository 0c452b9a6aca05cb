//! Generate random valid values

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use brdoc::config::GlobalConfig;
use brdoc::core::ports::Document;
use brdoc::documents;
use brdoc::output::{GenerateResult, OutputMode};

/// Generate `count` values, falling back to the configured defaults
pub fn generate(
    document: &str,
    count: Option<usize>,
    masked: bool,
    seed: Option<u64>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let strategy = documents::resolve(document)?;
    let config = GlobalConfig::load();
    log::debug!("loaded config from {}", GlobalConfig::config_path().display());

    let count = count.unwrap_or(config.generate.count);
    let masked = masked || config.generate.masked;

    let mut rng: Box<dyn RngCore> = match seed {
        Some(seed) => {
            log::debug!("seeding generator with {seed}");
            Box::new(StdRng::seed_from_u64(seed))
        },
        None => Box::new(rand::thread_rng()),
    };

    log::debug!("generating {count} {} value(s), masked: {masked}", strategy.kind);

    let values = (0..count)
        .map(|_| {
            if masked {
                strategy.generate_masked(rng.as_mut())
            } else {
                strategy.generate(rng.as_mut())
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    let result = GenerateResult {
        document: strategy.kind,
        masked,
        values,
    };

    result.render(mode);
    Ok(())
}

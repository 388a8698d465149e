use anyhow::{Context, Result};
use diffcov_core::{CollectionReducer, ScoringConfig, ValueReducer};

use crate::commands::{load_campaign, RunOptions};
use crate::output::{render_scores, render_table};

/// relcov of every approach against a reference approach.
///
/// With `single`, prints one score per other approach; otherwise the full
/// approach-by-approach table with reliabilities on the diagonal.
pub fn relcov_command(
    dir: &str,
    single: Option<&str>,
    value_reducer: Option<ValueReducer>,
    collection_reducer: Option<CollectionReducer>,
    options: &RunOptions,
) -> Result<String> {
    let campaign = load_campaign(dir, options)?;
    let scoring = ScoringConfig {
        value_reducer: value_reducer.unwrap_or(options.scoring.value_reducer),
        collection_reducer: collection_reducer.unwrap_or(options.scoring.collection_reducer),
    };

    match single {
        Some(reference) => {
            let scores = campaign
                .performance_over_approach(&reference.to_string(), &scoring)
                .with_context(|| format!("Failed to compute relcov against {reference}"))?;
            render_scores(&scores, options.format, &options.render)
        }
        None => {
            let table =
                campaign.performance_table(&scoring).context("Failed to compute relcov table")?;
            render_table(&table, options.format, &options.render)
        }
    }
}

/// Reliability (self-relcov) of every approach.
pub fn reliability_command(dir: &str, options: &RunOptions) -> Result<String> {
    let campaign = load_campaign(dir, options)?;
    let scores = campaign.reliabilities().context("Failed to compute reliabilities")?;
    render_scores(&scores, options.format, &options.render)
}

use anyhow::{Context, Result};

use crate::commands::{load_campaign, RunOptions};
use crate::output::{render_scores, render_table};

/// Performance of every approach over single-trial input corpora.
pub fn corpus_command(dir: &str, single: Option<&str>, options: &RunOptions) -> Result<String> {
    let campaign = load_campaign(dir, options)?;

    match single {
        Some(corpus) => {
            let scores = campaign
                .performance_over_corpus(&corpus.to_string())
                .with_context(|| format!("Failed to compute performance over corpus {corpus}"))?;
            render_scores(&scores, options.format, &options.render)
        }
        None => {
            let table = campaign.corpus_table().context("Failed to compute corpus table")?;
            render_table(&table, options.format, &options.render)
        }
    }
}

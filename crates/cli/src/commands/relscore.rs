use anyhow::Result;

use crate::commands::{load_campaign, RunOptions};
use crate::output::render_scores;

/// relscore of every approach in the campaign.
pub fn relscore_command(dir: &str, options: &RunOptions) -> Result<String> {
    let campaign = load_campaign(dir, options)?;
    let scores = campaign.relscores();
    render_scores(&scores, options.format, &options.render)
}

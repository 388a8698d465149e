use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::ValueEnum;
use diffcov_core::loader::{read_campaign_dir, RawCampaign};
use diffcov_core::{Campaign, ScoringConfig, ToolConfig};
use regex::Regex;
use tracing::debug;

use crate::output::{Colormap, OutputFormat, RenderOptions};
use crate::resolve_campaign_dir;

/// Campaign built from a directory of hit-count files.
pub type FileCampaign = Campaign<String, String, String>;

/// Global options as given on the command line, before merging with a
/// config file.
#[derive(Debug, Clone, Default)]
pub struct GlobalArgs {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub output: Option<OutputFormat>,
    pub latex_color: bool,
    pub colormap: Option<String>,
    pub latex_rotate_headers: Option<f64>,
    pub config: Option<PathBuf>,
}

/// Effective options for one invocation.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub format: OutputFormat,
    pub render: RenderOptions,
    pub scoring: ScoringConfig,
}

impl RunOptions {
    /// Merge command-line arguments over the optional config file.
    ///
    /// Include/exclude patterns from both sources are combined; scalar
    /// options given on the command line win.
    pub fn resolve(args: GlobalArgs) -> Result<Self> {
        let config = match &args.config {
            Some(path) => ToolConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => ToolConfig::default(),
        };

        let format = match (args.output, config.output.as_deref()) {
            (Some(format), _) => format,
            (None, Some(name)) => OutputFormat::from_str(name, true)
                .map_err(|err| anyhow!("Invalid output format '{name}' in config: {err}"))?,
            (None, None) => OutputFormat::default(),
        };
        let colormap: Colormap = args
            .colormap
            .as_deref()
            .or(config.colormap.as_deref())
            .map(str::parse::<Colormap>)
            .transpose()?
            .unwrap_or_default();

        let mut include = config.include;
        include.extend(args.include);
        let mut exclude = config.exclude;
        exclude.extend(args.exclude);

        Ok(Self {
            include,
            exclude,
            format,
            render: RenderOptions {
                colormap,
                latex_color: args.latex_color || config.latex_color,
                latex_rotate_headers: args.latex_rotate_headers.or(config.latex_rotate_headers),
            },
            scoring: config.scoring,
        })
    }
}

/// A name matches a pattern if it equals it or the regex finds a match.
fn compile_patterns(patterns: &[String], flag: &str) -> Result<Vec<(String, Regex)>> {
    patterns
        .iter()
        .map(|pattern| {
            let regex = Regex::new(pattern)
                .with_context(|| format!("Invalid regex for {flag} '{pattern}'"))?;
            Ok((pattern.clone(), regex))
        })
        .collect()
}

fn matches_any(name: &str, patterns: &[(String, Regex)]) -> bool {
    patterns.iter().any(|(pattern, regex)| pattern == name || regex.is_match(name))
}

/// Apply include then exclude filters to the raw campaign.
pub fn filter_approaches(
    mut campaign: RawCampaign,
    include: &[String],
    exclude: &[String],
) -> Result<RawCampaign> {
    if !include.is_empty() {
        let patterns = compile_patterns(include, "--include-approach")?;
        campaign.retain(|name, _| matches_any(name, &patterns));
        if campaign.is_empty() {
            bail!("No approaches matched --include-approach; nothing to do.");
        }
    }

    if !exclude.is_empty() {
        let patterns = compile_patterns(exclude, "--exclude-approach")?;
        campaign.retain(|name, _| !matches_any(name, &patterns));
        if campaign.is_empty() {
            bail!("All approaches were excluded via --exclude-approach; nothing to do.");
        }
    }
    Ok(campaign)
}

/// Read a campaign directory, apply the approach filters and build the
/// campaign.
pub fn load_campaign(dir: &str, options: &RunOptions) -> Result<FileCampaign> {
    let root = resolve_campaign_dir(dir)?;
    let raw = read_campaign_dir(&root)
        .with_context(|| format!("Failed to read campaign directory {}", root.display()))?;
    let total = raw.len();
    let raw = filter_approaches(raw, &options.include, &options.exclude)?;
    debug!(total, kept = raw.len(), "filtered approaches");

    Campaign::from_hit_counts(raw)
        .with_context(|| format!("Invalid campaign in {}", root.display()))
}

//! Rendering of scores and relcov tables.
//!
//! Every renderer returns the full text to print so callers (and tests) can
//! decide where it goes.

pub mod colormap;
pub mod latex;

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use clap::ValueEnum;
use diffcov_core::ScoreTable;

pub use colormap::Colormap;

/// Message printed in place of a table without columns.
pub const NO_CORPUS_MESSAGE: &str = "No corpus approaches (single-trial approaches) found.";

/// Width of each numeric column in plain-text tables.
const PLAIN_NUM_WIDTH: usize = 10;

/// Output format selectable with `--output`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Plain,
    Csv,
    /// LaTeX tabular.
    Latex,
    /// LaTeX tabular with colour-mapped cells.
    LatexColor,
    Json,
}

/// Presentation knobs that only affect LaTeX output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderOptions {
    pub colormap: Colormap,
    pub latex_color: bool,
    pub latex_rotate_headers: Option<f64>,
}

impl RenderOptions {
    fn colored(&self, format: OutputFormat) -> bool {
        self.latex_color || format == OutputFormat::LatexColor
    }
}

/// Scores sorted by value descending, ties by name ascending.
pub fn sorted_scores(scores: &BTreeMap<String, f64>) -> Vec<(&str, f64)> {
    let mut sorted: Vec<(&str, f64)> =
        scores.iter().map(|(name, score)| (name.as_str(), *score)).collect();
    sorted.sort_by(|a, b| b.1.total_cmp(&a.1));
    sorted
}

/// Render one score per approach.
pub fn render_scores(
    scores: &BTreeMap<String, f64>,
    format: OutputFormat,
    options: &RenderOptions,
) -> Result<String> {
    let sorted = sorted_scores(scores);
    let mut out = String::new();
    match format {
        OutputFormat::Plain => {
            for (name, score) in sorted {
                out.push_str(&format!("{name}: {score:.2}\n"));
            }
        }
        OutputFormat::Csv => {
            out.push_str("fuzzer,score\n");
            for (name, score) in sorted {
                out.push_str(&format!("{},{score:.2}\n", csv_field(name)));
            }
        }
        OutputFormat::Latex | OutputFormat::LatexColor => {
            let colored = options.colored(format);
            let values: Vec<f64> = sorted.iter().map(|(_, score)| *score).collect();
            let (min, max) = colormap::min_max(&values);

            out.push_str("\\begin{tabular}{lr}\n");
            out.push_str("fuzzer & score \\\\\n");
            if !sorted.is_empty() {
                out.push_str("\\hline\n");
            }
            for (name, score) in sorted {
                let value = format!("{score:.2}");
                let cell = if colored {
                    let hex = options.colormap.light_hex(colormap::normalize(score, min, max));
                    latex::colored_cell(&hex, &value)
                } else {
                    value
                };
                out.push_str(&format!("{} & {cell} \\\\\n", latex::escape(name)));
            }
            out.push_str("\\end{tabular}\n");
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(scores)
                .context("Failed to serialize scores to JSON")?;
            out.push_str(&json);
            out.push('\n');
        }
    }
    Ok(out)
}

/// Render a relcov table: one row per approach, one column per reference.
pub fn render_table(
    table: &ScoreTable<String>,
    format: OutputFormat,
    options: &RenderOptions,
) -> Result<String> {
    if table.columns.is_empty() {
        return Ok(format!("{NO_CORPUS_MESSAGE}\n"));
    }

    let out = match format {
        OutputFormat::Plain => render_table_plain(table),
        OutputFormat::Csv => render_table_csv(table),
        OutputFormat::Latex | OutputFormat::LatexColor => {
            render_table_latex(table, options.colored(format), options)
        }
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(table)
                .context("Failed to serialize table to JSON")?;
            json.push('\n');
            json
        }
    };
    Ok(out)
}

fn render_table_plain(table: &ScoreTable<String>) -> String {
    let num_width = PLAIN_NUM_WIDTH;
    let label_width = table
        .rows
        .keys()
        .map(|row| row.len())
        .chain(std::iter::once("fuzzer".len()))
        .max()
        .unwrap_or(6);

    let mut out = format!("{:<label_width$}", "fuzzer");
    for column in &table.columns {
        out.push_str(&format!("{column:>num_width$}"));
    }
    out.push('\n');

    for (row, cells) in &table.rows {
        out.push_str(&format!("{row:<label_width$}"));
        for column in &table.columns {
            match cells.get(column) {
                Some(value) => out.push_str(&format!("{value:>num_width$.5}")),
                None => out.push_str(&" ".repeat(num_width)),
            }
        }
        out.push('\n');
    }
    out
}

fn render_table_csv(table: &ScoreTable<String>) -> String {
    let mut header = vec!["fuzzer".to_string()];
    header.extend(table.columns.iter().map(|c| csv_field(c)));
    let mut out = header.join(",");
    out.push('\n');

    for (row, cells) in &table.rows {
        let mut line = vec![csv_field(row)];
        for column in &table.columns {
            line.push(cells.get(column).map(|v| format!("{v:.3}")).unwrap_or_default());
        }
        out.push_str(&line.join(","));
        out.push('\n');
    }
    out
}

fn render_table_latex(
    table: &ScoreTable<String>,
    colored: bool,
    options: &RenderOptions,
) -> String {
    let values: Vec<f64> = table.rows.values().flat_map(|cells| cells.values().copied()).collect();
    let (min, max) = colormap::min_max(&values);
    let angle = options.latex_rotate_headers;

    let mut out = String::new();
    if let Some(angle) = angle {
        out.push_str(&latex::rotcol_definition(angle));
    }
    out.push_str(&format!("\\begin{{tabular}}{{l{}}}\n", "r".repeat(table.columns.len())));

    let mut header = vec![String::new()];
    header.extend(table.columns.iter().map(|c| latex::header(c, angle)));
    out.push_str(&format!("{} \\\\\n", header.join(" & ")));
    out.push_str("\\hline\n");

    for (row, cells) in &table.rows {
        let mut line = vec![latex::escape(row)];
        for column in &table.columns {
            let cell = match cells.get(column) {
                None => String::new(),
                Some(value) if colored => {
                    let hex = options.colormap.light_hex(colormap::normalize(*value, min, max));
                    latex::colored_cell(&hex, &format!("{value:.3}"))
                }
                Some(value) => format!("{value:.3}"),
            };
            line.push(cell);
        }
        out.push_str(&format!("{} \\\\\n", line.join(" & ")));
    }
    out.push_str("\\end{tabular}\n");
    out
}

/// Quote a CSV field when it contains a separator, quote or newline.
pub fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

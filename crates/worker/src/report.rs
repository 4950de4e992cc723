use wealth_core::domain::recommendation::ScoreResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

const NAME_WIDTH: usize = 24;

#[derive(Clone, Copy)]
enum Align {
    Left,
    Right,
}

const COLUMNS: [(&str, usize, Align); 12] = [
    ("RANK", 4, Align::Right),
    ("TICKER", 8, Align::Left),
    ("NAME", NAME_WIDTH, Align::Left),
    ("PRICE", 10, Align::Right),
    ("SCORE", 6, Align::Right),
    ("ACTION", 10, Align::Left),
    ("RISK", 6, Align::Left),
    ("P/E", 8, Align::Right),
    ("MARGIN", 8, Align::Right),
    ("ROE", 8, Align::Right),
    ("D/E", 6, Align::Right),
    ("CR", 6, Align::Right),
];

pub fn render(results: &[ScoreResult], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(results)?),
        OutputFormat::Table => Ok(render_table(results)),
    }
}

fn render_row(cells: [String; 12]) -> String {
    cells
        .iter()
        .zip(COLUMNS)
        .map(|(cell, (_, width, align))| match align {
            Align::Left => format!("{cell:<width$}"),
            Align::Right => format!("{cell:>width$}"),
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn render_table(results: &[ScoreResult]) -> String {
    let mut lines = Vec::with_capacity(results.len() + 2);
    lines.push(render_row(COLUMNS.map(|(title, _, _)| title.to_string())));
    lines.push("-".repeat(lines[0].chars().count()));

    for (i, r) in results.iter().enumerate() {
        lines.push(render_row([
            (i + 1).to_string(),
            r.ticker.clone(),
            truncate(&r.name, NAME_WIDTH),
            format!("{:.2}", r.price),
            format!("{:.1}", r.total_score),
            r.recommendation.to_string(),
            r.risk.to_string(),
            r.metrics.pe.clone(),
            r.metrics.profit_margin.clone(),
            r.metrics.roe.clone(),
            r.metrics.debt_equity.clone(),
            r.metrics.current_ratio.clone(),
        ]));
    }

    if results.is_empty() {
        lines.push("(no companies scored)".to_string());
    }

    lines.join("\n")
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

//! Result rendering for stdout

use crate::aggregator::AggregateRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
        }
    }
}

/// Render the grouped result as an aligned text table.
pub fn render_table(rows: &[AggregateRow]) -> String {
    let mut site_width = "site".len();
    let mut name_width = "name".len();
    let mut total_width = "total".len();

    let cells: Vec<(String, String, String, String)> = rows
        .iter()
        .map(|row| {
            let average = match row.average {
                Some(avg) => format!("{:.6}", avg),
                None => "null".to_string(),
            };
            (
                row.site.clone(),
                row.name.clone(),
                row.total.to_string(),
                average,
            )
        })
        .collect();

    for (site, name, total, _) in &cells {
        site_width = site_width.max(site.len());
        name_width = name_width.max(name.len());
        total_width = total_width.max(total.len());
    }

    let mut out = format!(
        "{:<site_width$}  {:<name_width$}  {:>total_width$}  {}\n",
        "site", "name", "total", "average"
    );
    for (site, name, total, average) in &cells {
        out.push_str(&format!(
            "{:<site_width$}  {:<name_width$}  {:>total_width$}  {}\n",
            site, name, total, average
        ));
    }
    out
}

/// Render the grouped result as one JSON object per line.
pub fn render_json(rows: &[AggregateRow]) -> Result<String, serde_json::Error> {
    let mut out = String::new();
    for row in rows {
        out.push_str(&serde_json::to_string(row)?);
        out.push('\n');
    }
    Ok(out)
}

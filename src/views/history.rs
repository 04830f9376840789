//! History table page.

use super::{BASE_STYLE, escape_html, format_optional};
use crate::models::HistoryRecord;
use std::fmt::Write;

const COLUMNS: [&str; 8] = [
    "Timestamp",
    "City",
    "Temperature (°C)",
    "Temperature (°F)",
    "Humidity (%)",
    "Wind Speed (m/s)",
    "Description",
    "Comfort Index",
];

fn render_row(out: &mut String, record: &HistoryRecord) {
    let cells = [
        record.timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        record.city.clone(),
        format_optional(record.temperature_celsius, 1),
        format_optional(record.temperature_fahrenheit, 1),
        record
            .humidity
            .map(|h| h.to_string())
            .unwrap_or_else(|| "N/A".to_string()),
        format_optional(record.wind_speed, 1),
        record
            .weather_description
            .clone()
            .unwrap_or_else(|| "N/A".to_string()),
        format_optional(record.comfort_index, 2),
    ];

    out.push_str("            <tr>");
    for cell in &cells {
        let _ = write!(out, "<td>{}</td>", escape_html(cell));
    }
    out.push_str("</tr>\n");
}

/// Full HTML page listing `records` in the given order
pub fn render_history(records: &[HistoryRecord]) -> String {
    let mut rows = String::new();
    if records.is_empty() {
        let _ = writeln!(
            rows,
            "            <tr><td colspan=\"{}\" class=\"empty\">No weather lookups recorded yet.</td></tr>",
            COLUMNS.len()
        );
    }
    for record in records {
        render_row(&mut rows, record);
    }

    let header: String = COLUMNS
        .iter()
        .map(|column| format!("<th>{column}</th>"))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Weather History</title>
    <style>{BASE_STYLE}
        table {{ width: 100%; border-collapse: collapse; }}
        th, td {{ padding: 8px; border-bottom: 1px solid #ddd; text-align: left; }}
        th {{ background: #eee; }}
        td.empty {{ text-align: center; color: #777; }}
    </style>
</head>
<body>
    <div class="container">
        <h1>Weather History</h1>
        <nav><a href="/">New lookup</a></nav>
        <table>
            <thead><tr>{header}</tr></thead>
            <tbody>
{rows}            </tbody>
        </table>
    </div>
</body>
</html>"#
    )
}

//! Rendering of records and reports for the terminal

use crate::commands::OpenReport;
use edsel_core::prelude::*;
use edsel_core::EditorRecord;
use serde::Serialize;

/// Output style chosen on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Render editor records as an aligned table, default marked with `*`.
pub fn format_table(records: &[EditorRecord]) -> String {
    let headers = ["NAME", "PATH", "OPTIONS", "DESCRIPTION"];
    let rows: Vec<[String; 4]> = records
        .iter()
        .map(|r| {
            [
                r.name.clone(),
                r.path.clone(),
                r.default_options.join(" "),
                r.description.clone(),
            ]
        })
        .collect();

    let mut widths = headers.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, ' ', &headers.map(String::from), &widths);
    for (record, row) in records.iter().zip(&rows) {
        let marker = if record.is_default { '*' } else { ' ' };
        push_row(&mut out, marker, row, &widths);
    }
    out
}

fn push_row(out: &mut String, marker: char, cells: &[String; 4], widths: &[usize; 4]) {
    let mut line = format!("{} ", marker);
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i + 1 == cells.len() {
            line.push_str(cell);
        } else {
            line.push_str(&format!("{:<width$}  ", cell, width = *width));
        }
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Render one record in detail.
pub fn format_record(record: &EditorRecord) -> String {
    let mut out = format!(
        "{}{}\n",
        record.name,
        if record.is_default { " (default)" } else { "" }
    );
    out.push_str(&format!("  path:        {}\n", record.path));
    if !record.description.is_empty() {
        out.push_str(&format!("  description: {}\n", record.description));
    }
    if !record.default_options.is_empty() {
        out.push_str(&format!(
            "  options:     {}\n",
            record.default_options.join(" ")
        ));
    }
    out
}

/// Render an open report: one line per launched file.
pub fn format_open_report(report: &OpenReport) -> String {
    report
        .launched
        .iter()
        .map(|file| format!("Opened {} with {}\n", file, report.editor))
        .collect()
}

/// Serialize any value as pretty JSON with a trailing newline.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(value)?))
}

//! Output formatting helpers for human-readable and JSON output.

use clap::ValueEnum;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Format a table with aligned columns in human-readable form.
///
/// `headers` and each row in `rows` must have the same length. Returns an
/// empty string when there are no rows.
pub fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    // Column widths: max of header and all row values
    let col_count = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(col_count) {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let header_cells = headers.iter().map(|h| h.to_string()).collect::<Vec<_>>();
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format_row(&header_cells, &widths));
    for row in rows {
        lines.push(format_row(row, &widths));
    }
    lines.join("\n")
}

/// Print a table with aligned columns in human-readable format.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let table = format_table(headers, rows);
    if !table.is_empty() {
        println!("{table}");
    }
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    line.join("  ").trim_end().to_string()
}

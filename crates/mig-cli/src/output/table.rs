use mig_report::Report;

const HEADERS: [&str; 5] = ["section", "source", "target", "additions", "conflicts"];

/// Render one line per report section with its counts.
#[must_use]
pub fn render_summary_table(report: &Report) -> String {
    let rows = report
        .sections
        .iter()
        .map(|section| {
            let s = section.summary;
            vec![
                section.title.clone(),
                s.source.to_string(),
                s.target.to_string(),
                s.additions.to_string(),
                s.conflicts.to_string(),
            ]
        })
        .collect::<Vec<_>>();

    render_table(&HEADERS, &rows)
}

/// Render a simple aligned table for string rows.
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return String::from("(no sections)");
    }

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
        })
        .collect();

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| format_cell(header, *width, false))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.chars().count());

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                format_cell(value, *width, looks_numeric(value))
            })
            .collect::<Vec<_>>()
            .join("  ")
    });

    let mut lines = vec![header_line, divider];
    lines.extend(row_lines);
    lines.join("\n")
}

fn looks_numeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|ch| ch.is_ascii_digit())
}

fn format_cell(value: &str, width: usize, numeric: bool) -> String {
    let pad = width.saturating_sub(value.chars().count());
    if numeric {
        format!("{}{}", " ".repeat(pad), value)
    } else {
        format!("{}{}", value, " ".repeat(pad))
    }
}

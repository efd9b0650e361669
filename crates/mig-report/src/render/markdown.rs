//! Markdown rendering with grid tables.

use crate::document::{Block, Report};

/// Render the whole report as Markdown.
#[must_use]
pub fn render(report: &Report) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {}\n\n", report.title));
    out.push_str(&format!("- Source instance: {}\n", report.preamble.source));
    out.push_str(&format!("- Target instance: {}\n", report.preamble.target));
    out.push_str(&format!("- Generated at: {}\n", report.preamble.timestamp()));

    for section in &report.sections {
        out.push_str(&format!("\n## {}\n", section.title));
        let mut previous_bullet = false;
        for block in &section.blocks {
            let is_bullet = matches!(block, Block::Bullet { .. });
            if !(is_bullet && previous_bullet) {
                out.push('\n');
            }
            previous_bullet = is_bullet;

            match block {
                Block::Heading { text } => out.push_str(&format!("### {text}\n")),
                Block::Bullet { text } => out.push_str(&format!("- {text}\n")),
                Block::Paragraph { text } => out.push_str(&format!("{text}\n")),
                Block::Table { headers, rows } => out.push_str(&grid_table(headers, rows)),
            }
        }
    }

    out
}

/// Newlines collapse to spaces and pipes are escaped so a cell stays on one
/// line inside the grid.
fn cell(text: &str) -> String {
    text.split(['\r', '\n'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .replace('|', "\\|")
}

fn grid_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let headers: Vec<String> = headers.iter().map(|h| cell(h)).collect();
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            (0..headers.len())
                .map(|i| row.get(i).map_or_else(String::new, |v| cell(v)))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let border = |fill: char| {
        let mut line = String::from("+");
        for width in &widths {
            line.push_str(&fill.to_string().repeat(width + 2));
            line.push('+');
        }
        line.push('\n');
        line
    };
    let line = |cells: &[String]| {
        let mut line = String::from("|");
        for (value, width) in cells.iter().zip(&widths) {
            let pad = width - value.chars().count();
            line.push_str(&format!(" {value}{} |", " ".repeat(pad)));
        }
        line.push('\n');
        line
    };

    let mut out = border('-');
    out.push_str(&line(&headers));
    out.push_str(&border('='));
    for row in &rows {
        out.push_str(&line(row));
        out.push_str(&border('-'));
    }
    out
}

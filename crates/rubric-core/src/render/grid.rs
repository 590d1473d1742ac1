//! Spreadsheet grid emitter (legacy Excel layout)

use crate::ast::{Block, Document, KeyValue};
use crate::text::strip_emphasis;

/// Render a document as spreadsheet rows under a title row
///
/// Headings are indented two spaces per level below the first and each
/// table starts after an empty row.
pub fn render_grid(document: &Document, title: &str) -> Vec<Vec<String>> {
    let mut grid = vec![vec![title.to_string()], Vec::new()];

    for block in document.blocks() {
        match block {
            Block::Heading(heading) => {
                let indent = "  ".repeat(heading.level.saturating_sub(1));
                grid.push(Vec::new());
                grid.push(vec![format!("{indent}{}", heading.text)]);
            }

            Block::Table(table) => {
                grid.push(Vec::new());
                grid.extend(table.rows().iter().cloned());
            }

            Block::Paragraph(paragraph) => {
                let clean = strip_emphasis(paragraph);
                let row = match KeyValue::split(&clean) {
                    Some(KeyValue { key, value }) => vec![key.to_string(), value.to_string()],
                    None => vec![clean.to_string()],
                };
                grid.push(row);
            }

            Block::Blank => {}
        }
    }

    grid
}

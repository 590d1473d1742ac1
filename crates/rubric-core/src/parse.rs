//! Markdown subset parser
//!
//! Recognizes headings, pipe tables and plain paragraphs. Everything that is
//! not a heading or table degrades to a paragraph, so parsing never fails.

use crate::ast::{Block, Document, Heading, Row, Table};
use crate::text::{is_separator_line, is_table_line, split_cells, strip_code_fences};

/// Parse markdown into a [`Document`]
pub fn parse(markdown: &str) -> Document {
    let source = strip_code_fences(markdown);
    let mut parser = Parser::default();

    for line in source.split('\n') {
        parser.line(line.trim());
    }

    let document = parser.finish();
    tracing::trace!(blocks = document.blocks().len(), "parsed markdown document");
    document
}

#[derive(Default)]
struct Parser {
    blocks: Vec<Block>,
    pending_rows: Vec<Row>,
    in_table: bool,
}

impl Parser {
    fn line(&mut self, line: &str) {
        if is_table_line(line) {
            self.in_table = true;
            if !is_separator_line(line) {
                self.pending_rows.push(split_cells(line));
            }
            return;
        }

        self.close_table();

        let block = if line.is_empty() {
            Block::Blank
        } else if line.starts_with('#') {
            parse_heading(line)
        } else {
            Block::Paragraph(line.to_string())
        };
        self.blocks.push(block);
    }

    fn close_table(&mut self) {
        if !self.in_table {
            return;
        }
        self.in_table = false;
        // A separator with no rows around it contributes nothing
        if let Some(table) = Table::from_rows(std::mem::take(&mut self.pending_rows)) {
            self.blocks.push(Block::Table(table));
        }
    }

    fn finish(mut self) -> Document {
        self.close_table();
        Document::new(self.blocks)
    }
}

fn parse_heading(line: &str) -> Block {
    let rest = line.trim_start_matches('#');
    let level = line.len() - rest.len();
    Block::Heading(Heading {
        level,
        text: rest.trim_start().to_string(),
    })
}

//! HTML emitter for in-page display

use std::borrow::Cow;

use crate::ast::{Block, Document, Row, Table};
use crate::options::RenderOptions;

/// Render a document as an HTML fragment
///
/// Text is placed into markup as-is unless [`RenderOptions::escape_html`]
/// is set.
pub fn render_html(document: &Document, options: &RenderOptions) -> String {
    let mut out = String::with_capacity(1024);
    for block in document.blocks() {
        render_block(block, options, &mut out);
    }
    out
}

fn render_block(block: &Block, options: &RenderOptions, out: &mut String) {
    match block {
        Block::Heading(heading) => {
            let level = heading.level.to_string();
            out.push_str("<h");
            out.push_str(&level);
            out.push('>');
            out.push_str(&text(&heading.text, options));
            out.push_str("</h");
            out.push_str(&level);
            out.push_str(">\n");
        }

        Block::Table(table) => render_table(table, options, out),

        Block::Paragraph(paragraph) => {
            out.push_str("<p>");
            out.push_str(&text(paragraph, options));
            out.push_str("</p>\n");
        }

        Block::Blank => out.push('\n'),
    }
}

fn render_table(table: &Table, options: &RenderOptions, out: &mut String) {
    out.push_str("<table>\n<thead>\n");
    render_row(table.header(), "th", options, out);
    out.push_str("</thead>\n<tbody>\n");
    for row in table.body() {
        render_row(row, "td", options, out);
    }
    out.push_str("</tbody>\n</table>\n");
}

fn render_row(row: &Row, tag: &str, options: &RenderOptions, out: &mut String) {
    out.push_str("<tr>\n");
    for cell in row {
        out.push('<');
        out.push_str(tag);
        out.push('>');
        out.push_str(&text(cell, options));
        out.push_str("</");
        out.push_str(tag);
        out.push_str(">\n");
    }
    out.push_str("</tr>\n");
}

fn text<'a>(raw: &'a str, options: &RenderOptions) -> Cow<'a, str> {
    if options.escape_html {
        html_escape::encode_text(raw)
    } else {
        Cow::Borrowed(raw)
    }
}

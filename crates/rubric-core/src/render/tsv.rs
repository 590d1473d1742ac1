//! TSV emitter for spreadsheet paste
//!
//! Rows use a trailing `\t\t` on single-value lines so that pasted output
//! lines up with the two-column table layout around it.

use crate::ast::{Block, Document, KeyValue, Table};
use crate::text::strip_emphasis;

/// Empty spreadsheet row
pub const BLANK_ROW: &str = "\t\t\n";

/// Render a document as tab-separated values
pub fn render_tsv(document: &Document) -> String {
    let mut out = String::with_capacity(1024);
    let mut after_table = false;

    for block in document.blocks() {
        match block {
            Block::Heading(heading) => {
                if after_table {
                    out.push_str(BLANK_ROW);
                }
                push_single(&heading.text, &mut out);
                after_table = false;
            }

            Block::Table(table) => {
                render_table(table, &mut out);
                after_table = true;
            }

            Block::Paragraph(paragraph) => {
                render_paragraph(paragraph, &mut out);
                after_table = false;
            }

            Block::Blank => {}
        }
    }

    out
}

fn render_table(table: &Table, out: &mut String) {
    for row in table.rows() {
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                out.push('\t');
            }
            out.push_str(&strip_emphasis(cell));
        }
        out.push('\n');
    }
    out.push_str(BLANK_ROW);
}

fn render_paragraph(paragraph: &str, out: &mut String) {
    let clean = strip_emphasis(paragraph);
    match KeyValue::split(&clean) {
        Some(KeyValue { key, value }) => {
            out.push_str(key);
            out.push('\t');
            out.push_str(value);
            out.push('\n');
        }
        None => push_single(&clean, out),
    }
}

fn push_single(text: &str, out: &mut String) {
    out.push_str(text);
    out.push_str(BLANK_ROW);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use pretty_assertions::assert_eq;

    fn tsv(markdown: &str) -> String {
        render_tsv(&parse(markdown))
    }

    #[test]
    fn test_table() {
        assert_eq!(tsv("| a | b |\n|---|---|\n| 1 | 2 |"), "a\tb\n1\t2\n\t\t\n");
    }

    #[test]
    fn test_key_value_paragraph() {
        assert_eq!(tsv("grade: 6"), "grade\t6\n");
    }

    #[test]
    fn test_value_keeps_later_colons() {
        assert_eq!(tsv("time: 10:30"), "time\t10:30\n");
    }

    #[test]
    fn test_plain_paragraph() {
        assert_eq!(tsv("Well done"), "Well done\t\t\n");
    }

    #[test]
    fn test_emphasis_is_stripped() {
        assert_eq!(tsv("**Bold**"), "Bold\t\t\n");
        assert_eq!(tsv("**Score**: *4*"), "Score\t4\n");
        assert_eq!(tsv("| **a** | *b* |"), "a\tb\n\t\t\n");
    }

    #[test]
    fn test_blanks_are_ignored() {
        assert_eq!(tsv("one\n\n\ntwo"), "one\t\t\ntwo\t\t\n");
    }

    #[test]
    fn test_heading_after_table_gets_extra_separator() {
        let result = tsv("| a | b |\n| 1 | 2 |\n\n## Next\ntext");
        assert_eq!(result, "a\tb\n1\t2\n\t\t\n\t\t\nNext\t\t\ntext\t\t\n");
    }

    #[test]
    fn test_heading_not_after_table() {
        assert_eq!(tsv("# Title\n## Sub"), "Title\t\t\nSub\t\t\n");
    }

    #[test]
    fn test_heading_after_paragraph_after_table() {
        let result = tsv("| a | b |\nnote\n# H");
        assert_eq!(result, "a\tb\n\t\t\nnote\t\t\nH\t\t\n");
    }

    #[test]
    fn test_deterministic() {
        let doc = parse("# T\n| a | b |\n| 1 | 2 |\nk: v");
        assert_eq!(render_tsv(&doc), render_tsv(&doc));
    }
}

//! Legacy CSV emitter

use crate::ast::{Block, Document, Row};
use crate::options::RenderOptions;
use crate::text::strip_emphasis;

/// Render a document as quoted comma-separated values
///
/// Table cells keep their emphasis markers unless
/// [`RenderOptions::strip_emphasis_in_csv_tables`] is set; paragraphs are
/// always stripped.
pub fn render_csv(document: &Document, options: &RenderOptions) -> String {
    let mut out = String::with_capacity(1024);
    let mut in_table = false;

    for block in document.blocks() {
        if block.is_blank() {
            continue;
        }
        if in_table {
            out.push('\n');
            in_table = false;
        }

        match block {
            Block::Heading(heading) => {
                out.push_str(&heading.text);
                out.push('\n');
            }

            Block::Table(table) => {
                for row in table.rows() {
                    render_row(row, options, &mut out);
                }
                in_table = true;
            }

            Block::Paragraph(paragraph) => {
                out.push_str(&strip_emphasis(paragraph));
                out.push('\n');
            }

            Block::Blank => {}
        }
    }

    out
}

fn render_row(row: &Row, options: &RenderOptions, out: &mut String) {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let cell = if options.strip_emphasis_in_csv_tables {
            strip_emphasis(cell)
        } else {
            cell.as_str().into()
        };
        out.push('"');
        out.push_str(&cell.replace('"', "\"\""));
        out.push('"');
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use pretty_assertions::assert_eq;

    fn csv(markdown: &str) -> String {
        render_csv(&parse(markdown), &RenderOptions::default())
    }

    #[test]
    fn test_heading_is_unquoted() {
        assert_eq!(csv("## Summary"), "Summary\n");
    }

    #[test]
    fn test_table_rows_are_quoted() {
        assert_eq!(csv("| a | b |\n|---|---|\n| 1 | 2 |"), "\"a\",\"b\"\n\"1\",\"2\"\n");
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        assert_eq!(csv("| say \"hi\" | x |"), "\"say \"\"hi\"\"\",\"x\"\n");
    }

    #[test]
    fn test_blank_line_when_leaving_table() {
        assert_eq!(
            csv("| a | b |\n\n# Next\ntext"),
            "\"a\",\"b\"\n\nNext\ntext\n"
        );
    }

    #[test]
    fn test_paragraph_emphasis_is_stripped() {
        assert_eq!(csv("**Bold** and *it*"), "Bold and it\n");
    }

    #[test]
    fn test_table_emphasis_is_kept_by_default() {
        assert_eq!(csv("| **a** | b |"), "\"**a**\",\"b\"\n");
    }

    #[test]
    fn test_table_emphasis_stripping_option() {
        let options = RenderOptions {
            strip_emphasis_in_csv_tables: true,
            ..Default::default()
        };
        let result = render_csv(&parse("| **a** | b |"), &options);
        assert_eq!(result, "\"a\",\"b\"\n");
    }

    #[test]
    fn test_key_value_paragraph_is_not_split() {
        assert_eq!(csv("grade: 6"), "grade: 6\n");
    }

    #[test]
    fn test_deterministic() {
        let doc = parse("# T\n| a | b |\ntext");
        let options = RenderOptions::default();
        assert_eq!(render_csv(&doc, &options), render_csv(&doc, &options));
    }
}

//! Emitters from [`Document`](crate::Document) to output text.

mod csv;
mod grid;
mod html;
mod tsv;

pub use csv::render_csv;
pub use grid::render_grid;
pub use html::render_html;
pub use tsv::{render_tsv, BLANK_ROW};

use crate::options::{Format, RenderOptions};
use crate::parse::parse;

/// Parse markdown and render it in one step
pub fn transcode(markdown: &str, format: Format, options: &RenderOptions) -> String {
    let document = parse(markdown);
    match format {
        Format::Html => render_html(&document, options),
        Format::Tsv => render_tsv(&document),
        Format::Csv => render_csv(&document, options),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RUBRIC: &str = "```markdown\n# Writing Rubric\n\n| Criteria | Excellent | Needs Work |\n|---|---|---|\n| **Argument** | Clear claim | No claim |\n| Evidence | Two examples | None |\n\ngrade: 6\n```";

    #[test]
    fn test_transcode_dispatches_by_format() {
        let options = RenderOptions::default();
        let html = transcode(RUBRIC, Format::Html, &options);
        assert!(html.starts_with("<h1>Writing Rubric</h1>\n"));
        assert!(html.contains("<td>**Argument**</td>"));

        let tsv = transcode(RUBRIC, Format::Tsv, &options);
        assert!(tsv.contains("Argument\tClear claim\tNo claim\n"));
        assert!(tsv.ends_with("grade\t6\n"));

        let csv = transcode(RUBRIC, Format::Csv, &options);
        assert!(csv.contains("\"**Argument**\",\"Clear claim\",\"No claim\"\n"));
        assert!(csv.ends_with("\ngrade: 6\n"));
    }

    #[test]
    fn test_fence_markers_never_reach_output() {
        let options = RenderOptions::default();
        for format in [Format::Html, Format::Tsv, Format::Csv] {
            assert!(!transcode(RUBRIC, format, &options).contains("```"));
        }
    }
}

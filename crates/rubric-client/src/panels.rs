//! HTML panels for the result tabs

use indexmap::IndexMap;
use serde::Serialize;

use rubric_core::{parse, render_html, RenderOptions};

use crate::results::{DocumentKind, GeneratedResults};

/// One rendered result tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Panel {
    pub kind: DocumentKind,
    /// Element id the HTML is placed into
    pub container_id: &'static str,
    pub html: String,
    /// Original markdown, used by the copy button
    pub source: String,
}

/// Render the panels to show, in tab order
///
/// The rubric is always shown; the other documents only when the request
/// carried student information.
pub fn render_panels(
    results: &GeneratedResults,
    has_student_info: bool,
    options: &RenderOptions,
) -> IndexMap<DocumentKind, Panel> {
    let mut panels = IndexMap::new();

    for kind in DocumentKind::ALL {
        if kind.requires_student_info() && !has_student_info {
            continue;
        }
        let Some(markdown) = results.get(kind) else {
            continue;
        };

        let html = render_html(&parse(markdown), options);
        panels.insert(
            kind,
            Panel {
                kind,
                container_id: kind.container_id(),
                html,
                source: markdown.to_string(),
            },
        );
    }

    tracing::debug!(count = panels.len(), has_student_info, "rendered result panels");
    panels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results() -> GeneratedResults {
        GeneratedResults {
            rubric: Some("```markdown\n# Rubric\n```".to_string()),
            evaluation: Some("| a | b |".to_string()),
            feedback: None,
            report: Some("Summary".to_string()),
        }
    }

    #[test]
    fn test_rubric_only_without_student() {
        let panels = render_panels(&results(), false, &RenderOptions::default());
        assert_eq!(panels.keys().copied().collect::<Vec<_>>(), vec![DocumentKind::Rubric]);
        assert_eq!(panels[&DocumentKind::Rubric].html, "<h1>Rubric</h1>\n");
    }

    #[test]
    fn test_student_panels_in_tab_order_skipping_missing() {
        let panels = render_panels(&results(), true, &RenderOptions::default());
        assert_eq!(
            panels.keys().copied().collect::<Vec<_>>(),
            vec![
                DocumentKind::Rubric,
                DocumentKind::Evaluation,
                DocumentKind::Report
            ]
        );
        assert_eq!(panels[&DocumentKind::Report].container_id, "reportContent");
    }

    #[test]
    fn test_source_keeps_raw_markdown() {
        let panels = render_panels(&results(), false, &RenderOptions::default());
        assert_eq!(
            panels[&DocumentKind::Rubric].source,
            "```markdown\n# Rubric\n```"
        );
    }
}

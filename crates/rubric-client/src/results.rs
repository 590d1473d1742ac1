//! Generated documents returned by the service

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

const SUCCESS: &str = "success";

/// The four markdown documents the service can generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Rubric,
    Evaluation,
    Feedback,
    Report,
}

impl DocumentKind {
    /// Display order of the result tabs
    pub const ALL: [DocumentKind; 4] = [
        DocumentKind::Rubric,
        DocumentKind::Evaluation,
        DocumentKind::Feedback,
        DocumentKind::Report,
    ];

    /// Field name in the service response
    pub fn field_name(self) -> &'static str {
        match self {
            DocumentKind::Rubric => "rubric",
            DocumentKind::Evaluation => "evaluation",
            DocumentKind::Feedback => "feedback",
            DocumentKind::Report => "report",
        }
    }

    /// Page element that receives the rendered HTML
    pub fn container_id(self) -> &'static str {
        match self {
            DocumentKind::Rubric => "rubricContent",
            DocumentKind::Evaluation => "evaluationContent",
            DocumentKind::Feedback => "feedbackContent",
            DocumentKind::Report => "reportContent",
        }
    }

    /// `data-tab` value of the tab button and id of its pane
    pub fn tab_id(self) -> &'static str {
        self.field_name()
    }

    /// Only generated when a student name or submission was given
    pub fn requires_student_info(self) -> bool {
        !matches!(self, DocumentKind::Rubric)
    }
}

/// Markdown documents generated for one request
///
/// Every field is optional; a missing or empty field means there is nothing
/// to show for that section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratedResults {
    pub rubric: Option<String>,
    pub evaluation: Option<String>,
    pub feedback: Option<String>,
    pub report: Option<String>,
}

impl GeneratedResults {
    /// Markdown for a kind, skipping empty documents
    pub fn get(&self, kind: DocumentKind) -> Option<&str> {
        let field = match kind {
            DocumentKind::Rubric => &self.rubric,
            DocumentKind::Evaluation => &self.evaluation,
            DocumentKind::Feedback => &self.feedback,
            DocumentKind::Report => &self.report,
        };
        field.as_deref().filter(|markdown| !markdown.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        DocumentKind::ALL.iter().all(|kind| self.get(*kind).is_none())
    }
}

/// Successful response body of `POST {api}/rubric`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RubricResponse {
    pub status: String,
    #[serde(default)]
    pub generated_results: GeneratedResults,
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Validate a raw HTTP response and extract the generated documents
pub fn parse_response(status: u16, body: &str) -> Result<GeneratedResults> {
    if !(200..300).contains(&status) {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|error| error.detail);
        tracing::debug!(status, ?detail, "rubric request failed");
        return Err(Error::Http { status, detail });
    }

    let response: RubricResponse = serde_json::from_str(body)?;
    if response.status != SUCCESS {
        return Err(Error::UnexpectedStatus(response.status));
    }

    Ok(response.generated_results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_success() {
        let body = r##"{"status":"success","generated_results":{"rubric":"# R","report":"","extra":1}}"##;
        let results = parse_response(200, body).unwrap();
        assert_eq!(results.get(DocumentKind::Rubric), Some("# R"));
        assert_eq!(results.get(DocumentKind::Report), None);
        assert_eq!(results.get(DocumentKind::Evaluation), None);
    }

    #[test]
    fn test_http_error_with_detail() {
        let err = parse_response(500, r#"{"detail":"model unavailable"}"#).unwrap_err();
        assert!(matches!(err, Error::Http { status: 500, .. }));
        assert_eq!(err.to_string(), "HTTP 500: model unavailable");
    }

    #[test]
    fn test_http_error_without_body() {
        let err = parse_response(502, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err.to_string(), "HTTP 502");
    }

    #[test]
    fn test_malformed_json() {
        let err = parse_response(200, "not json").unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[test]
    fn test_unexpected_status() {
        let err = parse_response(200, r#"{"status":"error"}"#).unwrap_err();
        assert!(matches!(err, Error::UnexpectedStatus(ref s) if s == "error"));
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(DocumentKind::Feedback.container_id(), "feedbackContent");
        assert_eq!(DocumentKind::Report.tab_id(), "report");
        assert!(!DocumentKind::Rubric.requires_student_info());
        assert!(DocumentKind::Evaluation.requires_student_info());
    }

    #[test]
    fn test_empty_results() {
        assert!(GeneratedResults::default().is_empty());
    }
}

//! Results of the last successful request
//!
//! The page keeps one `Session` and passes it from the submit handler to the
//! export handler.

use chrono::{DateTime, Local, TimeZone};
use indexmap::IndexMap;

use rubric_core::RenderOptions;

use crate::config::Labels;
use crate::export::SheetExport;
use crate::input::TeacherInput;
use crate::panels::{render_panels, Panel};
use crate::results::{parse_response, DocumentKind, GeneratedResults};
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Generated {
    input: TeacherInput,
    results: GeneratedResults,
}

/// Holds the input and results of the most recent generation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    current: Option<Generated>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a service response, record it and render its panels
    ///
    /// A failed response leaves the previous results in place.
    pub fn accept_response(
        &mut self,
        input: TeacherInput,
        status: u16,
        body: &str,
        options: &RenderOptions,
    ) -> Result<IndexMap<DocumentKind, Panel>> {
        let results = parse_response(status, body)?;
        self.record(input, results);
        Ok(self.panels(options))
    }

    /// Replace the stored input and results
    pub fn record(&mut self, input: TeacherInput, results: GeneratedResults) {
        self.current = Some(Generated { input, results });
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn has_results(&self) -> bool {
        self.current.is_some()
    }

    pub fn input(&self) -> Option<&TeacherInput> {
        self.current.as_ref().map(|generated| &generated.input)
    }

    pub fn results(&self) -> Option<&GeneratedResults> {
        self.current.as_ref().map(|generated| &generated.results)
    }

    /// Panels for the stored results, empty when nothing was generated yet
    pub fn panels(&self, options: &RenderOptions) -> IndexMap<DocumentKind, Panel> {
        match &self.current {
            Some(generated) => render_panels(
                &generated.results,
                generated.input.has_student_info(),
                options,
            ),
            None => IndexMap::new(),
        }
    }

    /// Build the sheet export stamped with `generated_at`
    pub fn export_sheet<Tz>(&self, generated_at: &DateTime<Tz>, labels: &Labels) -> Result<String>
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let generated = self.current.as_ref().ok_or(Error::NothingToExport)?;
        Ok(SheetExport::new(&generated.input, &generated.results, labels).build(generated_at))
    }

    /// Build the sheet export stamped with the local time
    pub fn export_sheet_now(&self, labels: &Labels) -> Result<String> {
        self.export_sheet(&Local::now(), labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{"status":"success","generated_results":{"rubric":"| a | b |\n| 1 | 2 |","evaluation":"score: 3"}}"#;

    fn student() -> TeacherInput {
        TeacherInput {
            topic: "Water".to_string(),
            name: "Lee".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_export_without_results_fails() {
        let session = Session::new();
        let err = session.export_sheet_now(&Labels::default()).unwrap_err();
        assert!(matches!(err, Error::NothingToExport));
    }

    #[test]
    fn test_accept_response_records_and_renders() {
        let mut session = Session::new();
        let panels = session
            .accept_response(student(), 200, BODY, &RenderOptions::default())
            .unwrap();

        assert_eq!(panels.len(), 2);
        assert!(panels[&DocumentKind::Evaluation].html.contains("<p>score: 3</p>"));
        assert_eq!(session.input().map(|i| i.name.as_str()), Some("Lee"));

        let tsv = session.export_sheet_now(&Labels::default()).unwrap();
        assert!(tsv.contains("score\t3\n"));
    }

    #[test]
    fn test_failed_response_keeps_previous_results() {
        let mut session = Session::new();
        session
            .accept_response(student(), 200, BODY, &RenderOptions::default())
            .unwrap();

        let err = session
            .accept_response(TeacherInput::default(), 500, "{}", &RenderOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::Http { status: 500, detail: None }));
        assert_eq!(session.input(), Some(&student()));
    }

    #[test]
    fn test_clear() {
        let mut session = Session::new();
        session.record(student(), GeneratedResults::default());
        assert!(session.has_results());
        session.clear();
        assert!(!session.has_results());
        assert!(session.panels(&RenderOptions::default()).is_empty());
    }
}

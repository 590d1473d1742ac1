//! Spreadsheet export
//!
//! Builds the TSV that is copied to the clipboard for pasting into a new
//! spreadsheet: a two-column metadata header followed by one section per
//! generated document.

use std::fmt;

use chrono::{DateTime, TimeZone};

use rubric_core::{parse, render_tsv, BLANK_ROW};

use crate::config::Labels;
use crate::input::TeacherInput;
use crate::results::{DocumentKind, GeneratedResults};

/// The sheet export for one set of results
pub struct SheetExport<'a> {
    input: &'a TeacherInput,
    results: &'a GeneratedResults,
    labels: &'a Labels,
}

impl<'a> SheetExport<'a> {
    pub fn new(input: &'a TeacherInput, results: &'a GeneratedResults, labels: &'a Labels) -> Self {
        Self {
            input,
            results,
            labels,
        }
    }

    /// Render the export with `generated_at` in the metadata header
    pub fn build<Tz>(&self, generated_at: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let mut out = String::with_capacity(4096);
        let timestamp = generated_at.format(&self.labels.date_format).to_string();
        self.write_metadata(&timestamp, &mut out);

        let has_student_info = self.input.has_student_info();
        let mut sections = 0;
        for kind in DocumentKind::ALL {
            if kind.requires_student_info() && !has_student_info {
                continue;
            }
            if let Some(markdown) = self.results.get(kind) {
                self.write_section(kind, markdown, &mut out);
                sections += 1;
            }
        }

        tracing::debug!(sections, bytes = out.len(), "built sheet export");
        out
    }

    fn write_metadata(&self, timestamp: &str, out: &mut String) {
        let labels = self.labels;
        let name = match self.input.name.trim() {
            "" => labels.not_provided.as_str(),
            name => name,
        };

        out.push_str(&labels.title);
        out.push_str(BLANK_ROW);
        out.push_str(BLANK_ROW);
        push_row(&labels.item_header, &labels.content_header, out);
        push_row(&labels.generated_at, timestamp, out);
        push_row(&labels.topic, &self.input.topic, out);
        push_row(&labels.objective, &self.input.objective, out);
        push_row(&labels.grade, &self.input.grade_display(labels), out);
        push_row(&labels.student_name, name, out);
        out.push_str(BLANK_ROW);
    }

    fn write_section(&self, kind: DocumentKind, markdown: &str, out: &mut String) {
        out.push_str(self.labels.section(kind));
        out.push_str(BLANK_ROW);
        out.push_str(BLANK_ROW);
        out.push_str(&render_tsv(&parse(markdown)));
        out.push_str(BLANK_ROW);
    }
}

fn push_row(key: &str, value: &str, out: &mut String) {
    out.push_str(key);
    out.push('\t');
    out.push_str(value);
    out.push_str("\t\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn generated_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 5, 0).unwrap()
    }

    fn input() -> TeacherInput {
        TeacherInput {
            topic: "Climate".to_string(),
            objective: "Persuasive essay".to_string(),
            grade_level: "6".to_string(),
            ..Default::default()
        }
    }

    fn results() -> GeneratedResults {
        GeneratedResults {
            rubric: Some("| Criteria | Score |\n|---|---|\n| Claim | 4 |".to_string()),
            evaluation: Some("total: 4".to_string()),
            feedback: None,
            report: None,
        }
    }

    #[test]
    fn test_rubric_only_export() {
        let labels = Labels::english();
        let input = input();
        let results = results();
        let tsv = SheetExport::new(&input, &results, &labels).build(&generated_at());

        assert_eq!(
            tsv,
            "🎯 Rubric Agent Results\t\t\n\
             \t\t\n\
             Item\tContent\t\n\
             📅 Generated\t2025-03-14 09:05:00\t\n\
             📚 Topic\tClimate\t\n\
             🎯 Objective\tPersuasive essay\t\n\
             🎓 Grade\t6\t\n\
             👤 Student name\tNot provided\t\n\
             \t\t\n\
             📏 Rubric\t\t\n\
             \t\t\n\
             Criteria\tScore\n\
             Claim\t4\n\
             \t\t\n\
             \t\t\n"
        );
    }

    #[test]
    fn test_student_sections_included() {
        let labels = Labels::korean();
        let input = TeacherInput {
            name: "Kim".to_string(),
            ..input()
        };
        let results = results();
        let tsv = SheetExport::new(&input, &results, &labels).build(&generated_at());

        assert!(tsv.contains("🎓 학년\t6학년\t\n"));
        assert!(tsv.contains("👤 학생 이름\tKim\t\n"));
        assert!(tsv.contains("📅 생성 날짜\t2025. 3. 14. 09:05:00\t\n"));
        assert!(tsv.ends_with("📊 평가 결과\t\t\n\t\t\ntotal\t4\n\t\t\n"));
        assert!(!tsv.contains("💬"));
    }
}

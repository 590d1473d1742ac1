//! Client configuration and display labels

use serde::{Deserialize, Serialize};

use crate::results::DocumentKind;

const LOCAL_API_BASE_URL: &str = "http://localhost:8000/api";
const DEFAULT_API_BASE_URL: &str = "/api";
const DEFAULT_SHEETS_URL: &str = "https://docs.google.com/spreadsheets/create?usp=sheets_web_ug_dm";

/// Where the page sends requests and opens exports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientConfig {
    /// Base URL of the rubric API, without trailing slash
    pub api_base_url: String,

    /// Spreadsheet page opened next to a clipboard export
    pub sheets_url: String,
}

impl ClientConfig {
    /// Pick the API base for the page origin
    ///
    /// Local development servers talk to the API on port 8000; deployed pages
    /// go through the same origin under `/api`.
    pub fn for_origin(origin: &str) -> Self {
        let api_base_url = if origin.contains("localhost") || origin.contains("127.0.0.1") {
            LOCAL_API_BASE_URL
        } else {
            DEFAULT_API_BASE_URL
        };
        Self {
            api_base_url: api_base_url.to_string(),
            ..Default::default()
        }
    }

    pub fn rubric_endpoint(&self) -> String {
        format!("{}/rubric", self.api_base_url.trim_end_matches('/'))
    }

    pub fn health_endpoint(&self) -> String {
        format!("{}/health", self.api_base_url.trim_end_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            sheets_url: DEFAULT_SHEETS_URL.to_string(),
        }
    }
}

/// User-facing strings for prompts and exports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Labels {
    pub title: String,
    pub item_header: String,
    pub content_header: String,
    pub generated_at: String,
    pub topic: String,
    pub objective: String,
    pub grade: String,
    pub student_name: String,

    /// Appended to the grade level, e.g. `6` becomes `6학년`
    pub grade_suffix: String,
    pub anonymous: String,
    pub not_provided: String,

    pub rubric: String,
    pub evaluation: String,
    pub feedback: String,
    pub report: String,

    /// `chrono` format string for the export timestamp
    pub date_format: String,
}

impl Labels {
    pub fn english() -> Self {
        Self {
            title: "🎯 Rubric Agent Results".to_string(),
            item_header: "Item".to_string(),
            content_header: "Content".to_string(),
            generated_at: "📅 Generated".to_string(),
            topic: "📚 Topic".to_string(),
            objective: "🎯 Objective".to_string(),
            grade: "🎓 Grade".to_string(),
            student_name: "👤 Student name".to_string(),
            grade_suffix: String::new(),
            anonymous: "Anonymous".to_string(),
            not_provided: "Not provided".to_string(),
            rubric: "📏 Rubric".to_string(),
            evaluation: "📊 Evaluation".to_string(),
            feedback: "💬 Feedback".to_string(),
            report: "📄 Summary report".to_string(),
            date_format: "%Y-%m-%d %H:%M:%S".to_string(),
        }
    }

    pub fn korean() -> Self {
        Self {
            title: "🎯 루브릭 에이전트 평가 결과".to_string(),
            item_header: "항목".to_string(),
            content_header: "내용".to_string(),
            generated_at: "📅 생성 날짜".to_string(),
            topic: "📚 주제".to_string(),
            objective: "🎯 목적".to_string(),
            grade: "🎓 학년".to_string(),
            student_name: "👤 학생 이름".to_string(),
            grade_suffix: "학년".to_string(),
            anonymous: "익명".to_string(),
            not_provided: "미입력".to_string(),
            rubric: "📏 루브릭".to_string(),
            evaluation: "📊 평가 결과".to_string(),
            feedback: "💬 피드백".to_string(),
            report: "📄 종합 리포트".to_string(),
            date_format: "%Y. %-m. %-d. %H:%M:%S".to_string(),
        }
    }

    /// Section heading for a document kind
    pub fn section(&self, kind: DocumentKind) -> &str {
        match kind {
            DocumentKind::Rubric => &self.rubric,
            DocumentKind::Evaluation => &self.evaluation,
            DocumentKind::Feedback => &self.feedback,
            DocumentKind::Report => &self.report,
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::english()
    }
}

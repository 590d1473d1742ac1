//! # rubric-client
//!
//! The typed boundary between the rubric page and the rubric generation
//! service.
//!
//! ## Design
//!
//! The page collects a [`TeacherInput`], posts a [`RubricRequest`], and hands
//! the raw response to a [`Session`]. The session validates the response,
//! keeps the input and results together, and renders them:
//!
//! - **Panels**: one HTML [`Panel`] per [`DocumentKind`], keyed for the page's
//!   tab containers
//! - **Sheet export**: TSV with a metadata header, ready for spreadsheet paste
//!
//! ## Example
//!
//! ```rust
//! use rubric_client::{DocumentKind, Labels, Session, TeacherInput};
//! use rubric_core::RenderOptions;
//!
//! let input = TeacherInput {
//!     topic: "Climate".to_string(),
//!     objective: "Persuasive writing".to_string(),
//!     grade_level: "6".to_string(),
//!     ..Default::default()
//! };
//!
//! let body = r#"{"status":"success","generated_results":{"rubric":"| a | b |\n| 1 | 2 |"}}"#;
//!
//! let mut session = Session::new();
//! let panels = session
//!     .accept_response(input, 200, body, &RenderOptions::default())
//!     .unwrap();
//! assert!(panels[&DocumentKind::Rubric].html.contains("<td>1</td>"));
//!
//! let tsv = session.export_sheet_now(&Labels::default()).unwrap();
//! assert!(tsv.contains("a\tb\n1\t2\n"));
//! ```

mod config;
mod export;
mod input;
mod panels;
mod results;
mod session;

pub use config::{ClientConfig, Labels};
pub use export::SheetExport;
pub use input::{new_thread_id, RubricRequest, TeacherInput};
pub use panels::{render_panels, Panel};
pub use results::{parse_response, DocumentKind, GeneratedResults, RubricResponse};
pub use session::Session;

/// Error type for rubric client operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP {status}{}", detail_suffix(.detail))]
    Http { status: u16, detail: Option<String> },

    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("Service reported status `{0}`")]
    UnexpectedStatus(String),

    #[error("Nothing to export: generate a rubric first")]
    NothingToExport,
}

pub type Result<T> = std::result::Result<T, Error>;

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|d| format!(": {d}"))
        .unwrap_or_default()
}

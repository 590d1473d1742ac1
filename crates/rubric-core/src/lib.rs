//! rubric-core - Markdown table transcoding
//!
//! Parses the small markdown subset produced by the rubric service
//! (headings, pipe tables and plain lines) and renders it as HTML for the
//! page, TSV for spreadsheet paste, or legacy CSV.
//!
//! # Architecture
//!
//! ```text
//!                                ┌──▶ render_html ──▶ HTML fragment
//! Markdown ──parse──▶ Document ──┼──▶ render_tsv  ──▶ TSV rows
//!                                ├──▶ render_csv  ──▶ CSV rows
//!                                └──▶ render_grid ──▶ spreadsheet grid
//! ```
//!
//! # Example
//!
//! ```rust
//! use rubric_core::{parse, render_html, render_tsv, RenderOptions};
//!
//! let doc = parse("| a | b |\n|---|---|\n| 1 | 2 |");
//!
//! let html = render_html(&doc, &RenderOptions::default());
//! assert!(html.contains("<th>a</th>"));
//!
//! assert_eq!(render_tsv(&doc), "a\tb\n1\t2\n\t\t\n");
//! ```

mod ast;
mod options;
mod parse;
mod render;
pub mod text;

pub use ast::{Block, Document, Heading, KeyValue, Row, Table};
pub use options::{Format, RenderOptions};
pub use parse::parse;
pub use render::{render_csv, render_grid, render_html, render_tsv, transcode, BLANK_ROW};
pub use text::{strip_code_fences, strip_emphasis};

//! Configuration options for rendering

use serde::{Deserialize, Serialize};

/// Output format for [`transcode`](crate::transcode)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// In-page HTML fragment
    #[default]
    Html,
    /// Tab-separated values for spreadsheet paste
    Tsv,
    /// Legacy comma-separated export
    Csv,
}

impl Format {
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Html => "html",
            Format::Tsv => "tsv",
            Format::Csv => "csv",
        }
    }
}

impl std::str::FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "html" => Ok(Format::Html),
            "tsv" => Ok(Format::Tsv),
            "csv" => Ok(Format::Csv),
            other => Err(format!("unknown format `{other}`")),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for rendering a parsed document
///
/// The defaults reproduce the legacy page output byte for byte.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    /// Escape `<`, `>` and `&` in text placed into HTML markup
    pub escape_html: bool,

    /// Strip `**`/`*` emphasis from CSV table cells as well as paragraphs
    pub strip_emphasis_in_csv_tables: bool,
}

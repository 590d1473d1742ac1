//! rubric CLI - transcode rubric markdown and build sheet exports.
//!
//! Provides:
//! - `rubric [INPUT]`: render a markdown document as HTML, TSV, CSV or a JSON grid
//! - `rubric export`: build the spreadsheet TSV for a saved service response

mod error;

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use rubric_client::{Labels, Session, TeacherInput};
use rubric_core::{parse, render_grid, transcode, Format, RenderOptions};

use error::{CliError, Result};

#[derive(Parser)]
#[command(name = "rubric", version, about = "Render rubric markdown as HTML, TSV or CSV")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input markdown file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// Escape HTML special characters in rendered text
    #[arg(long)]
    escape_html: bool,

    /// Strip emphasis markers from CSV table cells
    #[arg(long)]
    strip_table_emphasis: bool,

    /// Title row for grid output
    #[arg(long, default_value = "Rubric")]
    title: String,

    /// Log at INFO level (otherwise RUST_LOG is used)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the spreadsheet export for a saved service response.
    Export(ExportArgs),
}

#[derive(Args)]
struct ExportArgs {
    /// JSON file with the teacher form fields
    #[arg(long)]
    input: PathBuf,

    /// File with the raw service response body
    #[arg(long)]
    response: PathBuf,

    /// HTTP status the response was received with
    #[arg(long, default_value_t = 200)]
    status: u16,

    /// Use Korean labels
    #[arg(long)]
    korean: bool,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Html,
    Tsv,
    Csv,
    /// JSON array of spreadsheet rows
    Grid,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Export(args)) => {
            let input_json = read_file(&args.input)?;
            let body = read_file(&args.response)?;
            let input: TeacherInput =
                serde_json::from_str(&input_json).map_err(|source| CliError::Json {
                    path: args.input.clone(),
                    source,
                })?;
            let labels = if args.korean {
                Labels::korean()
            } else {
                Labels::english()
            };
            let tsv = export(input, args.status, &body, &labels)?;
            write_output(args.output.as_deref(), &tsv)
        }
        None => {
            let markdown = match &cli.input {
                Some(path) => read_file(path)?,
                None => read_stdin()?,
            };
            let options = RenderOptions {
                escape_html: cli.escape_html,
                strip_emphasis_in_csv_tables: cli.strip_table_emphasis,
            };
            tracing::info!(format = ?cli.format, bytes = markdown.len(), "transcoding");
            let rendered = render(&markdown, cli.format, &options, &cli.title);
            write_output(cli.output.as_deref(), &rendered)
        }
    }
}

fn render(markdown: &str, format: OutputFormat, options: &RenderOptions, title: &str) -> String {
    match format {
        OutputFormat::Html => transcode(markdown, Format::Html, options),
        OutputFormat::Tsv => transcode(markdown, Format::Tsv, options),
        OutputFormat::Csv => transcode(markdown, Format::Csv, options),
        OutputFormat::Grid => {
            let grid = render_grid(&parse(markdown), title);
            // Vec<Vec<String>> always serializes
            serde_json::to_string_pretty(&grid).unwrap_or_default()
        }
    }
}

fn export(input: TeacherInput, status: u16, body: &str, labels: &Labels) -> Result<String> {
    let mut session = Session::new();
    let panels = session.accept_response(input, status, body, &RenderOptions::default())?;
    tracing::info!(sections = panels.len(), "response accepted");
    Ok(session.export_sheet_now(labels)?)
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(CliError::Stdin)?;
    Ok(buf)
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, content).map_err(|source| CliError::Write {
            path: path.to_path_buf(),
            source,
        }),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(CliError::Stdout),
    }
}

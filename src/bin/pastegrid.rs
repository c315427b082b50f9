//! pastegrid CLI - paste clipboard exports into an EAN grid and extract the codes

#[cfg(feature = "cli")]
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use pastegrid::{
    clipboard::{detect_delimiter, Delimiter},
    constants, format_report, CellPosition, Grid, GridOptions, PasteGridResult, PastePayload,
};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read};
#[cfg(feature = "cli")]
use tracing::{debug, info};
#[cfg(feature = "cli")]
use tracing_subscriber::EnvFilter;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "pastegrid")]
#[command(version)]
#[command(about = "pastegrid - clipboard-to-grid synchronization for EAN data entry", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Commands,

    /// Grid options file (TOML)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Raise the log level (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Paste clipboard content into a fresh grid and print the result
    Paste {
        /// File holding the text/html clipboard flavour
        #[arg(long)]
        html: Option<String>,

        /// File holding the text/plain clipboard flavour (stdin if neither file is given)
        #[arg(long)]
        text: Option<String>,

        /// Cell receiving the paste, e.g. G1
        #[arg(long, conflicts_with_all = ["row", "col"])]
        at: Option<String>,

        /// Zero-based row receiving the paste
        #[arg(long, default_value_t = 0)]
        row: usize,

        /// Zero-based column receiving the paste
        #[arg(long, default_value_t = 0)]
        col: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Print the submission JSON instead of the grid
        #[arg(long)]
        extract: bool,

        /// Do not print the paste report to stderr
        #[arg(short, long)]
        quiet: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Read a saved grid (delimited text) and print the submission JSON
    Extract {
        /// Input file path (reads from stdin if not provided)
        input: Option<String>,

        /// Field delimiter of the saved grid: auto, tab, semicolon or comma
        #[arg(short, long, default_value = "auto", value_parser = parse_delimiter)]
        delimiter: DelimiterChoice,

        /// Treat the first record as data even if it matches the column labels
        #[arg(long)]
        no_header: bool,

        /// Pretty print the JSON
        #[arg(short, long)]
        pretty: bool,
    },

    /// Print the delimiter detected on the first non-blank line
    Detect {
        /// Input file path (reads from stdin if not provided)
        input: Option<String>,
    },

    /// Show version and grid defaults
    Info,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Aligned columns with headers
    Table,
    /// Tab-separated values
    Tsv,
    /// Comma-separated values
    Csv,
    /// Headers and rows as JSON
    Json,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy)]
enum DelimiterChoice {
    /// Detect from the first non-blank line
    Auto,
    Fixed(Delimiter),
}

#[cfg(feature = "cli")]
fn parse_delimiter(name: &str) -> Result<DelimiterChoice, String> {
    if name.eq_ignore_ascii_case("auto") {
        return Ok(DelimiterChoice::Auto);
    }
    Delimiter::from_name(name)
        .map(DelimiterChoice::Fixed)
        .ok_or_else(|| format!("unknown delimiter '{}' (expected auto, tab, semicolon or comma)", name))
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over `-v`
#[cfg(feature = "cli")]
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = match std::env::var("RUST_LOG") {
        Ok(v) if !v.trim().is_empty() => EnvFilter::from_default_env(),
        _ => EnvFilter::new(level),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(feature = "cli")]
fn run(cli: Cli) -> PasteGridResult<()> {
    let options = match cli.config {
        Some(ref path) => {
            info!(path = %path, "loading grid options");
            GridOptions::from_toml_file(path)?
        }
        None => GridOptions::default(),
    };

    match cli.command {
        Commands::Paste {
            html,
            text,
            at,
            row,
            col,
            format,
            extract,
            quiet,
            no_color,
        } => {
            let anchor = match at {
                Some(reference) => reference.parse::<CellPosition>()?,
                None => CellPosition::new(row, col),
            };

            let markup = html.as_deref().map(fs::read_to_string).transpose()?;
            let text = match text {
                Some(ref path) => Some(fs::read_to_string(path)?),
                None if markup.is_none() => Some(read_stdin()?),
                None => None,
            };

            let payload = PastePayload {
                markup,
                text,
                anchor,
            };
            let mut grid = Grid::new(options);
            let report = grid.paste(&payload);

            if !quiet {
                eprintln!("{}", format_report(&report, !no_color));
            }

            if extract {
                let extraction = grid.submission()?;
                println!("{}", extraction.to_json_pretty()?);
            } else {
                print_grid(&grid, format)?;
            }
        }

        Commands::Extract {
            input,
            delimiter,
            no_header,
            pretty,
        } => {
            let content = read_input(input.as_deref())?;
            let delimiter = match delimiter {
                DelimiterChoice::Auto => detect_first_line(&content),
                DelimiterChoice::Fixed(d) => d,
            };
            debug!(%delimiter, "reading saved grid");

            let mut values = read_delimited(&content, delimiter)?;
            // `paste --format tsv|csv` writes the column labels first
            if !no_header && values.first().is_some_and(|r| options.is_header_row(r)) {
                debug!("skipping header record");
                values.remove(0);
            }
            let grid = Grid::from_values(options, &values);
            let extraction = grid.submission()?;

            eprintln!("{}", extraction.summary());
            if pretty {
                println!("{}", extraction.to_json_pretty()?);
            } else {
                println!("{}", extraction.to_json()?);
            }
        }

        Commands::Detect { input } => {
            let content = read_input(input.as_deref())?;
            println!("{}", detect_first_line(&content));
        }

        Commands::Info => {
            println!("pastegrid - clipboard-to-grid synchronization for EAN data entry");
            println!("Version: {}", pastegrid::version());
            println!();
            println!("Grid:");
            println!("  Base columns:       {}", options.base_columns);
            println!("  Initial rows:       {}", options.initial_rows);
            println!(
                "  Identifier column:  {} ('{}')",
                CellPosition::col_to_letter(options.identifier_column),
                options.header(options.identifier_column)
            );
            println!(
                "  Replacement column: {} ('{}'), at most {} extra",
                CellPosition::col_to_letter(options.base_columns),
                options.replacement_header,
                constants::MAX_EXTRA_COLUMNS
            );
            println!("  Ignored prefix:     {}", options.exclusion_prefix);
            println!();
            println!("Clipboard:");
            println!("  HTML tables first, then plain text");
            println!("  Delimiters: tab > semicolon > comma");
            println!();
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn read_stdin() -> io::Result<String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

#[cfg(feature = "cli")]
fn read_input(path: Option<&str>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => read_stdin(),
    }
}

#[cfg(feature = "cli")]
fn detect_first_line(content: &str) -> Delimiter {
    content
        .lines()
        .find(|line| !line.trim().is_empty())
        .map(detect_delimiter)
        .unwrap_or_default()
}

/// Parse a saved grid; rows may have different lengths
#[cfg(feature = "cli")]
fn read_delimited(content: &str, delimiter: Delimiter) -> PasteGridResult<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter.as_byte())
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(io::Error::from)?;
        rows.push(record.iter().map(|field| field.trim().to_string()).collect());
    }
    Ok(rows)
}

/// Rows up to the last one holding a value
#[cfg(feature = "cli")]
fn used_rows(grid: &Grid) -> Vec<Vec<String>> {
    let mut values = grid.to_values();
    while values
        .last()
        .is_some_and(|row| row.iter().all(|v| v.trim().is_empty()))
    {
        values.pop();
    }
    values
}

#[cfg(feature = "cli")]
fn print_grid(grid: &Grid, format: OutputFormat) -> PasteGridResult<()> {
    let headers = grid.headers();
    let rows = used_rows(grid);

    match format {
        OutputFormat::Table => {
            let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
            for row in &rows {
                for (width, value) in widths.iter_mut().zip(row) {
                    *width = (*width).max(value.chars().count());
                }
            }

            let render = |cells: &[String]| -> String {
                cells
                    .iter()
                    .zip(&widths)
                    .map(|(value, width)| format!("{:<width$}", value, width = width))
                    .collect::<Vec<_>>()
                    .join(" | ")
                    .trim_end()
                    .to_string()
            };

            println!("{}", render(&headers));
            println!(
                "{}",
                widths
                    .iter()
                    .map(|w| "-".repeat(*w))
                    .collect::<Vec<_>>()
                    .join("-+-")
            );
            for row in &rows {
                println!("{}", render(row));
            }
        }
        OutputFormat::Tsv | OutputFormat::Csv => {
            let delimiter = match format {
                OutputFormat::Tsv => Delimiter::Tab,
                _ => Delimiter::Comma,
            };
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .delimiter(delimiter.as_byte())
                .from_writer(io::stdout());
            writer.write_record(&headers).map_err(io::Error::from)?;
            for row in &rows {
                writer.write_record(row).map_err(io::Error::from)?;
            }
            writer.flush()?;
        }
        OutputFormat::Json => {
            let value = serde_json::json!({
                "headers": headers,
                "rows": rows,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install pastegrid --features cli");
    eprintln!("  pastegrid paste --text clipboard.txt --at G1");
}

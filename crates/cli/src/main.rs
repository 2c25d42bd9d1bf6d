//! RISC-V instruction format classifier CLI.
//!
//! This binary exposes the classifier from the command line. It provides:
//! 1. **Classify:** Report the format of individual opcodes or instruction words.
//! 2. **Scan:** Load a memory image and classify every word in it.
//! 3. **Table:** Print the 128-entry opcode classification table.

use std::error::Error;
use std::process;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use rvtype_core::config::{ImageFormat, InvalidPolicy, ScanConfig};
use rvtype_core::isa::{FORMAT_TABLE, InstructionType, Opcode, lookup};
use rvtype_core::sim::{load_image, scan, word_to_hex};

#[derive(Parser, Debug)]
#[command(
    name = "rvtype",
    author,
    version,
    about = "RISC-V instruction format classifier",
    long_about = "Classify RISC-V opcodes into instruction formats (R, I, S, B, U, J).\n\nExamples:\n  rvtype classify 0b0110011 0x13 111\n  rvtype classify --word 0x00A00513\n  rvtype scan program.mif --format binary\n  rvtype table --json"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify opcodes (or whole instruction words with --word).
    Classify {
        /// Values as binary (0b...), hex (0x...) or decimal.
        #[arg(required = true, value_parser = parse_number)]
        values: Vec<u32>,

        /// Treat values as 32-bit instruction words and classify bits [6:0].
        #[arg(long)]
        word: bool,

        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Classify every word of a memory image.
    Scan {
        /// Image file to read.
        path: String,

        /// Image layout (overrides the config file).
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// JSON scan configuration file.
        #[arg(short, long)]
        config: Option<String>,

        /// Address of the first word (overrides the config file).
        #[arg(long, value_parser = parse_address)]
        base: Option<u64>,

        /// Continue past invalid encodings instead of halting.
        #[arg(long)]
        skip_invalid: bool,

        /// Emit the full report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the opcode classification table.
    Table {
        /// Only list opcodes with a valid format.
        #[arg(long)]
        valid_only: bool,

        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    /// Eight binary digits per line, four lines per word.
    Binary,
    /// One hex word per line.
    Hex,
    /// Raw little-endian bytes.
    Raw,
}

impl From<FormatArg> for ImageFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Binary => Self::Binary,
            FormatArg::Hex => Self::Hex,
            FormatArg::Raw => Self::Raw,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Classify { values, word, json } => cmd_classify(&values, word, json),
        Commands::Scan {
            path,
            format,
            config,
            base,
            skip_invalid,
            json,
        } => cmd_scan(&path, format, config.as_deref(), base, skip_invalid, json),
        Commands::Table { valid_only, json } => cmd_table(valid_only, json),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = cause.source();
        }
        process::exit(1);
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// One classified value, as printed by `rvtype classify`.
#[derive(Debug, PartialEq, Eq, Serialize)]
struct ClassifyRow {
    value: u32,
    opcode: Opcode,
    #[serde(rename = "type")]
    kind: Option<InstructionType>,
    format: Option<String>,
}

impl ClassifyRow {
    /// Renders the text form; words are prefixed with their hex encoding.
    fn render(&self, word: bool) -> String {
        let prefix = if word {
            format!("{}  ", word_to_hex(self.value))
        } else {
            String::new()
        };
        match self.kind {
            Some(kind) => format!("{prefix}{}  {kind}", self.opcode),
            None => format!("{prefix}{}  invalid encoding", self.opcode),
        }
    }
}

/// Classifies each value.
///
/// Invalid encodings are rows with no type, not errors; values wider than the
/// opcode field are errors unless `word` is set.
fn classify_rows(values: &[u32], word: bool) -> Result<Vec<ClassifyRow>, Box<dyn Error>> {
    let mut rows = Vec::with_capacity(values.len());
    for &value in values {
        let opcode = if word {
            Opcode::from_word(value)
        } else {
            let raw = u8::try_from(value)
                .map_err(|_| format!("{value:#x} is not a 7-bit opcode"))?;
            Opcode::new(raw)?
        };
        let kind = lookup(opcode).ok();
        debug!(value, %opcode, ?kind, "classified");
        rows.push(ClassifyRow {
            value,
            opcode,
            kind,
            format: kind.map(|k| k.format().to_string()),
        });
    }
    Ok(rows)
}

/// Prints one line (or one JSON object) per classified value.
fn cmd_classify(values: &[u32], word: bool, json: bool) -> Result<(), Box<dyn Error>> {
    let rows = classify_rows(values, word)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for row in &rows {
        println!("{}", row.render(word));
    }
    Ok(())
}

/// Loads an image, scans it, and prints the listing and format mix.
fn cmd_scan(
    path: &str,
    format: Option<FormatArg>,
    config_path: Option<&str>,
    base: Option<u64>,
    skip_invalid: bool,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let mut config = match config_path {
        Some(p) => ScanConfig::from_file(p)?,
        None => ScanConfig::default(),
    };
    if let Some(format) = format {
        config.image_format = format.into();
    }
    if let Some(base) = base {
        config.base_address = base;
    }
    if skip_invalid {
        config.on_invalid = InvalidPolicy::Skip;
    }

    debug!(?config, "scan configuration");
    let words = load_image(path, config.image_format)?;
    let report = scan(&words, &config)?;
    info!(
        words = report.stats.total(),
        invalid = report.stats.invalid(),
        "scan complete"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for entry in &report.entries {
        let kind = entry
            .format
            .map_or_else(|| "invalid encoding".to_string(), |k| k.to_string());
        println!(
            "{:#010x}  {}  {}  {}",
            entry.address,
            word_to_hex(entry.word),
            entry.opcode,
            kind
        );
    }
    println!();
    println!("{}", report.stats);
    Ok(())
}

/// Prints every opcode with its classification.
fn cmd_table(valid_only: bool, json: bool) -> Result<(), Box<dyn Error>> {
    let rows: Vec<_> = Opcode::all()
        .zip(FORMAT_TABLE.iter())
        .filter(|(_, kind)| !valid_only || kind.is_some())
        .collect();

    if json {
        let out: Vec<_> = rows
            .iter()
            .map(|(opcode, kind)| json!({ "opcode": opcode, "type": kind }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    for (opcode, kind) in rows {
        match kind {
            Some(kind) => println!("{opcode}  {:#04x}  {kind}", opcode.value()),
            None => println!("{opcode}  {:#04x}  -", opcode.value()),
        }
    }
    Ok(())
}

/// Parses `0b`/`0x`-prefixed or decimal integers, with optional `_` separators.
fn parse_number(s: &str) -> Result<u32, String> {
    let clean = s.replace('_', "");
    let parsed = if let Some(bin) = strip_radix(&clean, 'b') {
        u32::from_str_radix(bin, 2)
    } else if let Some(hex) = strip_radix(&clean, 'x') {
        u32::from_str_radix(hex, 16)
    } else {
        clean.parse()
    };
    parsed.map_err(|e| format!("invalid number '{s}': {e}"))
}

fn parse_address(s: &str) -> Result<u64, String> {
    let clean = s.replace('_', "");
    let parsed = match strip_radix(&clean, 'x') {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => clean.parse(),
    };
    parsed.map_err(|e| format!("invalid address '{s}': {e}"))
}

/// Strips a `0<marker>` prefix in either case.
fn strip_radix(s: &str, marker: char) -> Option<&str> {
    let rest = s.strip_prefix('0')?;
    rest.strip_prefix(marker)
        .or_else(|| rest.strip_prefix(marker.to_ascii_uppercase()))
}

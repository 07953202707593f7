use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use sheetdump_core::reader::{self, CellValue, Sheet, Workbook};
use sheetdump_core::{DumpConfig, Dumper, SpreadsheetReadError};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sheetdump")]
#[command(about = "Print every sheet of an Excel/ODS workbook as text", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the Excel/ODS file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Dump only the named sheets (workbook order is preserved)
    #[arg(long, num_args = 1.., value_name = "SHEET")]
    sheets: Vec<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "human")]
    format: OutputFormat,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable table output
    Human,
    /// JSON output
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        DumpConfig::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        // Try to load default config from current directory if it exists
        let default_config_path = PathBuf::from("sheetdump.toml");
        if default_config_path.exists() {
            DumpConfig::from_file(&default_config_path).with_context(|| {
                format!(
                    "Failed to load config from {}",
                    default_config_path.display()
                )
            })?
        } else {
            DumpConfig::default()
        }
    };

    // Every failure in the open/load/render pipeline is collapsed into one
    // line on stdout; the process still terminates normally.
    if let Err(err) = run(&cli, config) {
        println!("Error reading excel file: {err}");
    }

    Ok(())
}

fn run(cli: &Cli, config: DumpConfig) -> Result<(), SpreadsheetReadError> {
    let workbook = reader::read_workbook(&cli.file)?;
    let selected = select_sheets(&workbook, &cli.sheets)?;

    let mut stdout = std::io::stdout().lock();
    match cli.format {
        OutputFormat::Human => {
            let dumper = Dumper::with_config(config);
            for sheet in selected {
                dumper.dump_sheet(sheet, &mut stdout)?;
            }
        }
        OutputFormat::Json => {
            print_json(&workbook, &selected, &mut stdout)?;
        }
    }

    Ok(())
}

/// Resolve the --sheets filter against the workbook, keeping workbook order
fn select_sheets<'a>(
    workbook: &'a Workbook,
    requested: &[String],
) -> Result<Vec<&'a Sheet>, SpreadsheetReadError> {
    if requested.is_empty() {
        return Ok(workbook.sheets.iter().collect());
    }

    for name in requested {
        if workbook.get_sheet(name).is_none() {
            return Err(SpreadsheetReadError::new(format!(
                "Sheet '{}' not found in workbook",
                name
            )));
        }
    }

    Ok(workbook
        .sheets
        .iter()
        .filter(|sheet| requested.iter().any(|name| name == &sheet.name))
        .collect())
}

#[derive(Serialize)]
struct WorkbookDump {
    file: String,
    sheets: Vec<SheetDump>,
}

#[derive(Serialize)]
struct SheetDump {
    name: String,
    rows: Vec<Vec<serde_json::Value>>,
}

fn print_json(
    workbook: &Workbook,
    selected: &[&Sheet],
    out: &mut impl Write,
) -> Result<(), SpreadsheetReadError> {
    let dump = WorkbookDump {
        file: workbook.path.display().to_string(),
        sheets: selected
            .iter()
            .map(|sheet| SheetDump {
                name: sheet.name.clone(),
                rows: sheet
                    .rows
                    .iter()
                    .map(|row| row.iter().map(cell_to_json).collect())
                    .collect(),
            })
            .collect(),
    };

    let json = serde_json::to_string_pretty(&dump)
        .map_err(|e| SpreadsheetReadError::new(e.to_string()))?;
    writeln!(out, "{}", json)?;
    Ok(())
}

fn cell_to_json(value: &CellValue) -> serde_json::Value {
    match value {
        CellValue::Empty => serde_json::Value::Null,
        CellValue::Number(n) => serde_json::json!(n),
        CellValue::Text(s) => serde_json::json!(s),
        CellValue::Boolean(b) => serde_json::json!(b),
        CellValue::DateTime(dt) => {
            serde_json::json!(dt.format("%Y-%m-%d %H:%M:%S").to_string())
        }
        CellValue::Error(e) => serde_json::json!(e),
    }
}

//! Excel/ODS file reader using calamine

use anyhow::{Context, Result};
use calamine::{Data, Range, Reader, Sheets, open_workbook_auto};
use std::path::Path;

pub mod workbook;

pub use workbook::{CellValue, Sheet, Workbook};

/// Read a workbook from a file path
///
/// The used range of every sheet is loaded into memory, in workbook order.
/// The underlying file handle is owned by the calamine reader and released
/// when this function returns, on success and on error alike.
pub fn read_workbook<P: AsRef<Path>>(path: P) -> Result<Workbook> {
    let path = path.as_ref();
    // Open workbook with calamine; the format is detected from the file
    let mut excel: Sheets<_> = open_workbook_auto(path)
        .with_context(|| format!("Failed to open workbook: {}", path.display()))?;

    let sheet_names = excel.sheet_names();
    let mut sheets = Vec::new();

    for sheet_name in &sheet_names {
        let range = excel
            .worksheet_range(sheet_name)
            .with_context(|| format!("Failed to load sheet '{}'", sheet_name))?;
        sheets.push(parse_sheet(sheet_name, &range));
    }

    Ok(Workbook {
        path: path.to_path_buf(),
        sheets,
    })
}

/// Convert a calamine range into the dense row model
fn parse_sheet(name: &str, range: &Range<Data>) -> Sheet {
    let mut rows = Vec::with_capacity(range.height());
    for row in range.rows() {
        rows.push(row.iter().map(parse_cell_value).collect());
    }

    Sheet {
        name: name.to_string(),
        rows,
    }
}

fn parse_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Boolean(*b),
        Data::Error(e) => CellValue::Error(e.to_string()),
        Data::Empty => CellValue::Empty,
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(dt) => CellValue::DateTime(dt),
            // Serial values outside the representable calendar range stay numeric
            None => CellValue::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}

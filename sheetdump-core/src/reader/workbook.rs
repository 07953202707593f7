//! Workbook data structures

use chrono::NaiveDateTime;
use std::path::PathBuf;

/// Represents a complete workbook
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    pub path: PathBuf,
    /// Sheets in workbook order
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    /// Get a sheet by name
    pub fn get_sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Get all sheet names
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }
}

/// Represents a worksheet as an ordered table of typed cells
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    pub name: String,
    /// Rows of the used range, top to bottom; rows may differ in length
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    /// Number of rows in the used range
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Widest row of the used range
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// True when the sheet has no cells at all
    pub fn is_empty(&self) -> bool {
        self.height() == 0 || self.width() == 0
    }
}

/// Cell value types
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Number(f64),
    Text(String),
    Boolean(bool),
    DateTime(NaiveDateTime),
    Error(String),
}

impl CellValue {
    /// Check if the cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Check if the cell holds a numeric value (numbers and date serials)
    pub fn is_numeric(&self) -> bool {
        matches!(self, CellValue::Number(_) | CellValue::DateTime(_))
    }

    /// Text shown for this cell in the table rendering
    pub fn display_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Text(s) => s.clone(),
            CellValue::Boolean(b) => b.to_string(),
            CellValue::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            CellValue::Error(e) => e.clone(),
        }
    }
}

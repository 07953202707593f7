//! sheetdump-core: Core library for dumping Excel/ODS workbooks as text
//!
//! Reads every worksheet of a workbook into a tabular in-memory model and
//! renders it as aligned text suitable for terminal display.

pub mod config;
pub mod error;
pub mod reader;
pub mod render;

use std::io::Write;
use std::path::Path;

pub use config::{DumpConfig, RenderConfig};
pub use error::SpreadsheetReadError;
pub use reader::{CellValue, Sheet, Workbook};

/// Main dumper interface
pub struct Dumper {
    config: DumpConfig,
}

impl Dumper {
    /// Create a new dumper with default configuration
    pub fn new() -> Self {
        Self::with_config(DumpConfig::default())
    }

    /// Create a new dumper with custom configuration
    pub fn with_config(config: DumpConfig) -> Self {
        Self { config }
    }

    /// Read a workbook and write the text rendering of every sheet to `out`.
    ///
    /// Sheets are emitted in workbook order, each as a `--- Sheet: <name> ---`
    /// delimiter line, the rendered table, and one blank line. A workbook with
    /// zero sheets writes nothing. The workbook handle is scoped to the read
    /// and released before rendering starts.
    pub fn dump_file<P, W>(&self, path: P, out: &mut W) -> Result<(), SpreadsheetReadError>
    where
        P: AsRef<Path>,
        W: Write,
    {
        let workbook = reader::read_workbook(path)?;
        self.dump_workbook(&workbook, out)
    }

    /// Write the text rendering of every sheet of an already-loaded workbook
    pub fn dump_workbook<W: Write>(
        &self,
        workbook: &Workbook,
        out: &mut W,
    ) -> Result<(), SpreadsheetReadError> {
        for sheet in &workbook.sheets {
            self.dump_sheet(sheet, out)?;
        }
        Ok(())
    }

    /// Write one sheet block: delimiter line, table, blank line
    pub fn dump_sheet<W: Write>(
        &self,
        sheet: &Sheet,
        out: &mut W,
    ) -> Result<(), SpreadsheetReadError> {
        writeln!(out, "--- Sheet: {} ---", sheet.name)?;
        writeln!(out, "{}", render::render_table(sheet, &self.config.render))?;
        writeln!(out)?;
        Ok(())
    }

    /// Dump a workbook file and return the rendering as a string
    pub fn dump_file_to_string<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<String, SpreadsheetReadError> {
        let mut buf = Vec::new();
        self.dump_file(path, &mut buf)?;
        String::from_utf8(buf).map_err(|e| SpreadsheetReadError::new(e.to_string()))
    }
}

impl Default for Dumper {
    fn default() -> Self {
        Self::new()
    }
}

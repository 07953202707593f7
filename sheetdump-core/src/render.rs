//! Aligned text table rendering

use crate::config::RenderConfig;
use crate::reader::{CellValue, Sheet};

/// Placeholder printed for sheets with no cells
const EMPTY_SHEET: &str = "(empty sheet)";

/// Render a sheet as an aligned text table.
///
/// Columns are separated by two spaces and sized to their widest cell.
/// Columns whose data cells are all numeric are right-aligned, everything
/// else is left-aligned. With `header_row` the first sheet row becomes the
/// column headers; otherwise columns are titled A, B, C, ... With
/// `index_column` data rows carry a 0-based index gutter on the left.
pub fn render_table(sheet: &Sheet, config: &RenderConfig) -> String {
    if sheet.is_empty() {
        return EMPTY_SHEET.to_string();
    }

    let n_cols = sheet.width();

    let (headers, data_rows): (Vec<String>, &[Vec<CellValue>]) = if config.header_row {
        let headers = (0..n_cols)
            .map(|col| cell_text(sheet.rows[0].get(col), config))
            .collect();
        (headers, &sheet.rows[1..])
    } else {
        ((0..n_cols).map(col_letter).collect(), &sheet.rows[..])
    };

    // Materialize the cell texts once so widths and output agree
    let body: Vec<Vec<String>> = data_rows
        .iter()
        .map(|row| {
            (0..n_cols)
                .map(|col| cell_text(row.get(col), config))
                .collect()
        })
        .collect();

    // A column is numeric when every non-empty data cell is a number or a
    // date serial, and at least one such cell exists
    let numeric: Vec<bool> = (0..n_cols)
        .map(|col| {
            let mut any = false;
            for row in data_rows {
                match row.get(col) {
                    None => {}
                    Some(CellValue::Empty) => {}
                    Some(value) if value.is_numeric() => any = true,
                    Some(_) => return false,
                }
            }
            any
        })
        .collect();

    let widths: Vec<usize> = (0..n_cols)
        .map(|col| {
            body.iter()
                .map(|row| display_width(&row[col]))
                .chain([display_width(&headers[col])])
                .max()
                .unwrap_or(0)
        })
        .collect();

    let index_width = if config.index_column && !body.is_empty() {
        (body.len() - 1).to_string().len()
    } else {
        0
    };

    let mut lines = Vec::with_capacity(body.len() + 1);

    let mut head = Vec::with_capacity(n_cols + 1);
    if index_width > 0 {
        head.push(" ".repeat(index_width));
    }
    for col in 0..n_cols {
        head.push(pad(&headers[col], widths[col], numeric[col]));
    }
    lines.push(join_row(head));

    for (i, row) in body.iter().enumerate() {
        let mut parts = Vec::with_capacity(n_cols + 1);
        if index_width > 0 {
            parts.push(pad(&i.to_string(), index_width, true));
        }
        for col in 0..n_cols {
            parts.push(pad(&row[col], widths[col], numeric[col]));
        }
        lines.push(join_row(parts));
    }

    lines.join("\n")
}

fn join_row(parts: Vec<String>) -> String {
    parts.join("  ").trim_end().to_string()
}

fn cell_text(value: Option<&CellValue>, config: &RenderConfig) -> String {
    let text = value.map(CellValue::display_text).unwrap_or_default();
    match config.max_col_width {
        Some(max) => clip(&text, max),
        None => text,
    }
}

/// Clip text to `max` characters, marking the cut with an ellipsis
fn clip(text: &str, max: usize) -> String {
    if display_width(text) <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let head: String = text.chars().take(max - 3).collect();
    format!("{head}...")
}

fn display_width(text: &str) -> usize {
    text.chars().count()
}

fn pad(text: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(display_width(text)));
    if right_align {
        format!("{fill}{text}")
    } else {
        format!("{text}{fill}")
    }
}

/// Column title when no header row is present (0 -> A, 1 -> B, ...)
fn col_letter(mut col: usize) -> String {
    let mut result = String::new();
    loop {
        result.insert(0, (b'A' + (col % 26) as u8) as char);
        if col < 26 {
            break;
        }
        col = col / 26 - 1;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(rows: Vec<Vec<CellValue>>) -> Sheet {
        Sheet {
            name: "Test".to_string(),
            rows,
        }
    }

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn num(n: f64) -> CellValue {
        CellValue::Number(n)
    }

    #[test]
    fn numeric_columns_right_aligned_text_left_aligned() {
        let sheet = sheet(vec![
            vec![text("name"), text("amount")],
            vec![text("x"), num(5.0)],
            vec![text("yy"), num(120.0)],
        ]);

        let rendered = render_table(&sheet, &RenderConfig::default());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(
            lines,
            vec!["   name  amount", "0  x          5", "1  yy       120"]
        );
    }

    #[test]
    fn column_letters_when_header_row_disabled() {
        let config = RenderConfig {
            header_row: false,
            index_column: false,
            max_col_width: None,
        };
        let sheet = sheet(vec![vec![num(1.0), num(2.0)]]);

        let rendered = render_table(&sheet, &config);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines, vec!["A  B", "1  2"]);
    }

    #[test]
    fn empty_sheet_renders_placeholder() {
        let rendered = render_table(&sheet(vec![]), &RenderConfig::default());
        assert_eq!(rendered, "(empty sheet)");
    }

    #[test]
    fn header_only_sheet_renders_single_line() {
        let sheet = sheet(vec![vec![text("a"), text("b")]]);
        let rendered = render_table(&sheet, &RenderConfig::default());

        assert_eq!(rendered, "a  b");
    }

    #[test]
    fn long_cells_are_clipped() {
        let config = RenderConfig {
            max_col_width: Some(10),
            ..RenderConfig::default()
        };
        let sheet = sheet(vec![
            vec![text("h")],
            vec![text("abcdefghijklmnop")],
        ]);

        let rendered = render_table(&sheet, &config);
        assert!(rendered.contains("abcdefg..."));
        assert!(!rendered.contains("abcdefgh"));
    }

    #[test]
    fn ragged_rows_pad_with_empty_cells() {
        let sheet = sheet(vec![
            vec![text("a"), text("b"), text("c")],
            vec![text("x")],
        ]);

        let rendered = render_table(&sheet, &RenderConfig::default());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains('x'));
    }

    #[test]
    fn boolean_and_error_cells_display_literals() {
        let sheet = sheet(vec![
            vec![text("col")],
            vec![CellValue::Boolean(true)],
            vec![CellValue::Error("#DIV/0!".to_string())],
        ]);

        let rendered = render_table(&sheet, &RenderConfig::default());
        assert!(rendered.contains("true"));
        assert!(rendered.contains("#DIV/0!"));
    }

    #[test]
    fn index_gutter_can_be_disabled() {
        let config = RenderConfig {
            index_column: false,
            ..RenderConfig::default()
        };
        let sheet = sheet(vec![vec![text("h")], vec![text("v")]]);

        let rendered = render_table(&sheet, &config);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines, vec!["h", "v"]);
    }

    #[test]
    fn column_letters_wrap_past_z() {
        assert_eq!(col_letter(0), "A");
        assert_eq!(col_letter(25), "Z");
        assert_eq!(col_letter(26), "AA");
        assert_eq!(col_letter(51), "AZ");
        assert_eq!(col_letter(701), "ZZ");
        assert_eq!(col_letter(702), "AAA");
    }
}

// src/markdown.rs

use log::debug;

use crate::error::ConvertError;
use crate::table::Table;

/// What to do with body cells beyond the header's column count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColumnOverflow {
    /// Drop them from both width computation and output.
    #[default]
    Ignore,
    /// Fail with `ConvertError::Render`.
    Reject,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub overflow: ColumnOverflow,
}

/// Widest cell (in bytes) per header column, across the header and every body row.
pub fn column_widths(table: &Table) -> Vec<usize> {
    let mut widths = vec![0; table.column_count()];
    for row in &table.rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }
    widths
}

/// Renders `table` as an aligned Markdown table, one `\n`-terminated line per row
/// plus the separator after the header.
pub fn render(table: &Table, options: &RenderOptions) -> Result<String, ConvertError> {
    if table.is_empty() {
        return Err(ConvertError::EmptyTable);
    }
    let header = &table.rows[0];
    let columns = header.len();

    for (index, row) in table.body().iter().enumerate() {
        if row.len() > columns {
            match options.overflow {
                ColumnOverflow::Ignore => debug!(
                    "ignoring {} extra cells in body row {}",
                    row.len() - columns,
                    index + 1
                ),
                ColumnOverflow::Reject => {
                    return Err(ConvertError::Render {
                        row: index + 1,
                        found: row.len(),
                        expected: columns,
                    })
                }
            }
        }
    }

    let widths = column_widths(table);
    debug!("rendering {} rows with column widths {:?}", table.rows.len(), widths);

    let mut out = String::new();
    push_line(&mut out, &widths, |i| header[i].as_str());
    push_separator(&mut out, &widths);
    for row in table.body() {
        push_line(&mut out, &widths, |i| row.get(i).map_or("", String::as_str));
    }
    Ok(out)
}

fn push_line<'a>(out: &mut String, widths: &[usize], cell: impl Fn(usize) -> &'a str) {
    out.push('|');
    for (i, &width) in widths.iter().enumerate() {
        let text = cell(i);
        out.push(' ');
        out.push_str(text);
        // `{:<width$}` pads by chars; widths are bytes.
        out.push_str(&" ".repeat(width.saturating_sub(text.len())));
        out.push_str(" |");
    }
    out.push('\n');
}

fn push_separator(out: &mut String, widths: &[usize]) {
    out.push('|');
    for &width in widths {
        out.push(' ');
        out.push_str(&"-".repeat(width));
        out.push_str(" |");
    }
    out.push('\n');
}

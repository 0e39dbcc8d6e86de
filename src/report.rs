use crate::error::ReportError;
use crate::results::ReportRow;
use rust_xlsxwriter::{
    Color, Format, FormatAlign, FormatBorder, Table, TableColumn, TableStyle, Workbook, XlsxError,
};
use std::path::Path;

/// Sheet holding the news listing
pub const SHEET_NAME: &str = "News";

/// Name of the table region covering header and rows
pub const TABLE_NAME: &str = "NewsTable";

/// Extra characters added to the widest value of each column
const WIDTH_MARGIN: usize = 2;

/// A report column: header label and initial width hint
#[derive(Debug, Clone, Copy)]
pub struct ReportColumn {
    pub header: &'static str,
    pub width_hint: f64,
}

/// Columns in output order
pub const COLUMNS: [ReportColumn; 3] = [
    ReportColumn {
        header: "Title",
        width_hint: 50.0,
    },
    ReportColumn {
        header: "Description",
        width_hint: 100.0,
    },
    ReportColumn {
        header: "Link",
        width_hint: 50.0,
    },
];

fn cells(row: &ReportRow) -> [&str; 3] {
    [&row.title, &row.description, &row.link]
}

/// Width of each column: longest value or header label, plus a margin
pub fn column_widths(rows: &[ReportRow]) -> [usize; 3] {
    let mut widths = COLUMNS.map(|column| column.header.chars().count());
    for row in rows {
        for (width, value) in widths.iter_mut().zip(cells(row)) {
            *width = (*width).max(value.chars().count());
        }
    }
    widths.map(|width| width + WIDTH_MARGIN)
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_text_wrap()
        .set_align(FormatAlign::Top)
        .set_background_color(Color::RGB(0x7FB809))
        .set_border(FormatBorder::Thin)
}

/// Writes the rows into a new workbook at `path`, replacing any existing file
pub fn write_report(path: &Path, rows: &[ReportRow]) -> Result<(), ReportError> {
    if rows.is_empty() {
        return Err(ReportError::Empty);
    }

    build_workbook(rows)
        .and_then(|mut workbook| workbook.save(path))
        .map_err(|source| ReportError::Xlsx {
            path: path.to_path_buf(),
            source,
        })?;

    ::log::debug!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

fn build_workbook(rows: &[ReportRow]) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (index, row) in rows.iter().enumerate() {
        let sheet_row = index as u32 + 1;
        for (col, value) in cells(row).into_iter().enumerate() {
            worksheet.write_string(sheet_row, col as u16, value)?;
        }
    }

    let columns: Vec<TableColumn> = COLUMNS
        .iter()
        .map(|column| TableColumn::new().set_header(column.header))
        .collect();
    let table = Table::new()
        .set_name(TABLE_NAME)
        .set_columns(&columns)
        .set_style(TableStyle::Medium9);
    let last_col = (COLUMNS.len() - 1) as u16;
    worksheet.add_table(0, 0, rows.len() as u32, last_col, &table)?;

    let header_format = header_format();
    for (col, column) in COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, column.header, &header_format)?;
        worksheet.set_column_width(col as u16, column.width_hint)?;
    }

    // Fitted widths replace the hints
    for (col, width) in column_widths(rows).into_iter().enumerate() {
        worksheet.set_column_width(col as u16, width as f64)?;
    }

    Ok(workbook)
}

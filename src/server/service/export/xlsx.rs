use rust_xlsxwriter::{Format, Workbook, XlsxError};

use crate::server::{
    error::{internal::InternalError, AppError},
    model::export::{Cell, Sheet},
};

/// Writes the sheets into an xlsx workbook, header rows in bold.
pub fn write_workbook(sheets: &[Sheet]) -> Result<Vec<u8>, AppError> {
    build(sheets).map_err(|e| InternalError::from(e).into())
}

fn build(sheets: &[Sheet]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&sheet.name)?;

        for (col, header) in sheet.headers.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &bold)?;
        }

        for (index, row) in sheet.rows.iter().enumerate() {
            let row_num = index as u32 + 1;

            for (col, cell) in row.iter().enumerate() {
                match cell {
                    Cell::Text(value) => {
                        worksheet.write_string(row_num, col as u16, value)?;
                    }
                    Cell::Number(value) => {
                        worksheet.write_number(row_num, col as u16, *value)?;
                    }
                    Cell::Empty => {}
                }
            }
        }

        worksheet.autofit();
    }

    workbook.save_to_buffer()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that the workbook is a zip container (xlsx files start with `PK`).
    #[test]
    fn writes_zip_container() {
        let mut sheet = Sheet::new("Owners", vec!["ID", "Name", "Rent"]);
        sheet.push(vec![Cell::Number(1.0), Cell::text("Jane"), Cell::money(123_456)]);
        sheet.push(vec![Cell::Number(2.0), Cell::Empty, Cell::optional(None::<String>)]);

        let bytes = write_workbook(&[sheet]).unwrap();

        assert!(bytes.len() > 100);
        assert_eq!(&bytes[..2], b"PK");
    }
}

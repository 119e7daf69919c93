// ==========================================
// 进线-入库时间差值分析 - Excel 写出
// ==========================================
// 工具: rust_xlsxwriter
// 日期时间按日期单元格 + 数字格式写出，保证回读仍为日期
// ==========================================

use crate::exporter::sheet::{CellValue, SheetData};
use crate::importer::error::ImportResult;
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;
use tracing::info;

const DATETIME_NUM_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

pub struct ExcelReportWriter;

impl ExcelReportWriter {
    /// 写出一个或多个工作表，输出目录不存在时自动创建
    pub fn write(&self, sheets: &[SheetData], output_path: &Path) -> ImportResult<()> {
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();
        let datetime_format = Format::new().set_num_format(DATETIME_NUM_FORMAT);

        for sheet in sheets {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(&sheet.name)?;

            for (col, header) in sheet.headers.iter().enumerate() {
                worksheet.write_string_with_format(0, col as u16, header, &header_format)?;
            }

            for (row_idx, row) in sheet.rows.iter().enumerate() {
                let row_num = (row_idx + 1) as u32;
                for (col, cell) in row.iter().enumerate() {
                    let col = col as u16;
                    match cell {
                        CellValue::Text(s) => {
                            worksheet.write_string(row_num, col, s)?;
                        }
                        CellValue::Number(n) => {
                            worksheet.write_number(row_num, col, *n)?;
                        }
                        CellValue::DateTime(dt) => {
                            worksheet.write_datetime_with_format(
                                row_num,
                                col,
                                dt,
                                &datetime_format,
                            )?;
                        }
                        CellValue::Blank => {}
                    }
                }
            }

            worksheet.autofit();
        }

        workbook.save(output_path)?;
        info!(path = %output_path.display(), sheets = sheets.len(), "Excel 文件已保存");
        Ok(())
    }
}

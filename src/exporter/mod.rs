// ==========================================
// 进线-入库时间差值分析 - 输出层
// ==========================================
// 职责: 工作表组装、Excel / CSV 文件写出
// ==========================================

pub mod csv_writer;
pub mod excel_writer;
pub mod sheet;

pub use csv_writer::CsvReportWriter;
pub use excel_writer::ExcelReportWriter;
pub use sheet::{CellValue, SheetData};

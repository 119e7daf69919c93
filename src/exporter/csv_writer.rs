// ==========================================
// 进线-入库时间差值分析 - CSV 写出
// ==========================================

use crate::importer::error::ImportResult;
use crate::importer::raw_table::RawTable;
use csv::Writer;
use std::path::Path;
use tracing::debug;

pub struct CsvReportWriter;

impl CsvReportWriter {
    /// 按表头顺序写出原始表格，输出目录不存在时自动创建
    pub fn write_table(&self, table: &RawTable, output_path: &Path) -> ImportResult<()> {
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut writer = Writer::from_path(output_path)?;
        writer.write_record(&table.headers)?;
        for row in &table.rows {
            writer.write_record(table.ordered_values(row))?;
        }
        writer.flush()?;

        debug!(path = %output_path.display(), rows = table.len(), "CSV 文件已保存");
        Ok(())
    }
}

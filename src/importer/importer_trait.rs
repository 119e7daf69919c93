// ==========================================
// 进线-入库时间差值分析 - 导入 Trait
// ==========================================
// 职责: 定义文件解析 / 字段映射接口（不包含实现）
// ==========================================

use crate::importer::error::ImportResult;
use crate::importer::raw_table::RawTable;
use std::collections::HashMap;
use std::path::Path;

// ==========================================
// FileParser Trait
// ==========================================
// 实现者: CsvParser, ExcelParser
pub trait FileParser: Send + Sync {
    /// 解析文件为原始表格
    ///
    /// # 返回
    /// - Ok(RawTable): 表头 + 行记录
    /// - Err: 文件不存在、格式不支持、解析失败
    fn parse_to_raw_table(&self, file_path: &Path) -> ImportResult<RawTable>;
}

// ==========================================
// FieldMapper Trait
// ==========================================
// 用途: 原始行记录 → 强类型记录
// 实现者: ShipmentFieldMapper, OperationEventFieldMapper, AnnotatedFieldMapper
pub trait FieldMapper: Send + Sync {
    type Record;

    /// 表格名称（用于错误信息）
    fn table_name(&self) -> &'static str;

    /// 必需列
    fn required_columns(&self) -> &'static [&'static str];

    /// 映射单行
    ///
    /// # 参数
    /// - row: 原始行记录（HashMap<列名, 值>）
    /// - row_number: 源文件中的行号（表头为第 1 行）
    fn map_row(&self, row: &HashMap<String, String>, row_number: usize)
        -> ImportResult<Self::Record>;

    /// 校验列结构后映射整张表
    fn map_table(&self, table: &RawTable) -> ImportResult<Vec<Self::Record>> {
        table.require_columns(self.table_name(), self.required_columns())?;

        table
            .rows
            .iter()
            .enumerate()
            .map(|(idx, row)| self.map_row(row, idx + 2))
            .collect()
    }
}

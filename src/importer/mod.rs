// ==========================================
// 进线-入库时间差值分析 - 导入层
// ==========================================
// 职责: 外部表格读取、列结构校验、字段映射
// 支持: Excel, CSV
// ==========================================

// 模块声明
pub mod data_cleaner;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod importer_trait;
pub mod raw_table;

// 重导出核心类型
pub use data_cleaner::DataCleaner;
pub use error::{ImportError, ImportResult};
pub use field_mapper::{AnnotatedFieldMapper, OperationEventFieldMapper, ShipmentFieldMapper};
pub use file_parser::{load_table, CsvParser, ExcelParser, LoadOptions, UniversalFileParser};
pub use raw_table::RawTable;

// 重导出 Trait 接口
pub use importer_trait::{FieldMapper, FileParser};

// ==========================================
// 进线-入库时间差值分析 - 导入/处理错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 导入与处理流程的错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 参数错误 =====
    #[error("路径无效: {0}")]
    InvalidPath(String),

    #[error("参数不能为空: {0}")]
    EmptyArgument(String),

    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .xlsx/.xls/.csv）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    #[error("Excel 写出失败: {0}")]
    ExcelWriteError(String),

    // ===== 数据结构错误 =====
    #[error("表格「{table}」缺少必要的列: {}", .columns.join(", "))]
    MissingRequiredColumn { table: String, columns: Vec<String> },

    #[error("日期时间格式错误 (行 {row}, 字段 {field}): {value:?}")]
    DateTimeParseError {
        row: usize,
        field: String,
        value: String,
    },

    #[error("没有可处理的数据: {0}")]
    NoMatchingData(String),

    // ===== 配置错误 =====
    #[error("配置读取失败 ({path}): {message}")]
    ConfigReadError { path: String, message: String },
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

// 实现 From<calamine::Error>
impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

// 实现 From<rust_xlsxwriter::XlsxError>
impl From<rust_xlsxwriter::XlsxError> for ImportError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ImportError::ExcelWriteError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;

// ==========================================
// 进线-入库时间差值分析 - 文件解析器实现
// ==========================================
// 支持: Excel (.xlsx/.xls) / CSV (.csv)
// 说明: Excel 转存 CSV 为显式可选输出（LoadOptions::csv_copy）
// ==========================================

use crate::exporter::csv_writer::CsvReportWriter;
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::FileParser;
use crate::importer::raw_table::RawTable;
use calamine::{open_workbook_auto, Data, DataType, Reader};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const DATETIME_OUTPUT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_to_raw_table(&self, file_path: &Path) -> ImportResult<RawTable> {
        let path = file_path;

        // 检查文件存在
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        // 检查扩展名
        let ext = extension_of(path);
        if ext != "csv" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        // 读取表头（去除 UTF-8 BOM）
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
            .collect();

        let mut table = RawTable::new(headers);
        warn_duplicate_headers(path, &table);
        for result in reader.records() {
            let record = result?;
            let mut row_map = HashMap::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = table.headers.get(col_idx) {
                    row_map.insert(header.clone(), value.trim().to_string());
                }
            }

            // 跳过完全空白的行
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            table.rows.push(row_map);
        }

        debug!(path = %path.display(), rows = table.len(), "CSV 解析完成");
        Ok(table)
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
#[derive(Default)]
pub struct ExcelParser {
    /// 指定工作表名；None 表示读取第一个工作表
    sheet_name: Option<String>,
}

impl ExcelParser {
    pub fn with_sheet(sheet_name: impl Into<String>) -> Self {
        Self {
            sheet_name: Some(sheet_name.into()),
        }
    }
}

impl FileParser for ExcelParser {
    fn parse_to_raw_table(&self, file_path: &Path) -> ImportResult<RawTable> {
        let path = file_path;

        // 检查文件存在
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        // 检查扩展名
        let ext = extension_of(path);
        if ext != "xlsx" && ext != "xls" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        // 打开 Excel 文件（xls / xlsx 自动识别）
        let mut workbook = open_workbook_auto(path)?;

        let sheet_name = match &self.sheet_name {
            Some(name) => name.clone(),
            None => workbook
                .sheet_names()
                .first()
                .cloned()
                .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无工作表".to_string()))?,
        };

        let range = workbook.worksheet_range(&sheet_name)?;

        // 提取表头（第一行）
        let mut rows = range.rows();
        let header_row = rows
            .next()
            .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无数据行".to_string()))?;

        let headers: Vec<String> = header_row.iter().map(cell_to_text).collect();

        let mut table = RawTable::new(headers);
        warn_duplicate_headers(path, &table);
        for data_row in rows {
            let mut row_map = HashMap::new();

            for (col_idx, cell) in data_row.iter().enumerate() {
                if let Some(header) = table.headers.get(col_idx) {
                    row_map.insert(header.clone(), cell_to_text(cell));
                }
            }

            // 跳过完全空白的行
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            table.rows.push(row_map);
        }

        debug!(path = %path.display(), sheet = %sheet_name, rows = table.len(), "Excel 解析完成");
        Ok(table)
    }
}

/// 单元格转文本
///
/// 日期时间统一为 `%Y-%m-%d %H:%M:%S`；整数值浮点去掉小数部分，避免运单号变成 1.0e15 之类
fn cell_to_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => format_float(*f),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(_) | Data::DateTimeIso(_) => cell
            .as_datetime()
            .map(|dt| dt.format(DATETIME_OUTPUT_FORMAT).to_string())
            .unwrap_or_else(|| cell.to_string()),
        other => other.to_string().trim().to_string(),
    }
}

fn format_float(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// 重复列名只保留最后一列的值，提前告警
fn warn_duplicate_headers(path: &Path, table: &RawTable) {
    let duplicates = table.duplicate_headers();
    if !duplicates.is_empty() {
        warn!(
            path = %path.display(),
            columns = %duplicates.join(", "),
            "表头存在重复列名，仅保留最后一列的值"
        );
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<RawTable> {
        let path = file_path.as_ref();
        let ext = extension_of(path);

        match ext.as_str() {
            "csv" => CsvParser.parse_to_raw_table(path),
            "xlsx" | "xls" => ExcelParser::default().parse_to_raw_table(path),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}

// ==========================================
// 加载入口
// ==========================================

/// 加载选项
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Excel 输入时额外转存一份 CSV 的路径；None 表示不写文件
    pub csv_copy: Option<PathBuf>,
}

impl LoadOptions {
    /// 在源文件旁生成同名 .csv
    pub fn sibling_csv(path: &Path) -> Self {
        Self {
            csv_copy: Some(path.with_extension("csv")),
        }
    }
}

/// 校验路径字符串并加载表格
///
/// 路径两端的引号与空白会被去除（从资源管理器复制的路径常带引号）
pub fn load_table(raw_path: &str, options: &LoadOptions) -> ImportResult<RawTable> {
    let cleaned = DataCleaner.strip_path_quotes(raw_path);
    if cleaned.is_empty() {
        return Err(ImportError::InvalidPath("路径为空".to_string()));
    }

    let path = Path::new(&cleaned);
    if !path.exists() {
        return Err(ImportError::FileNotFound(cleaned.clone()));
    }

    let table = UniversalFileParser.parse(path)?;
    info!(path = %cleaned, rows = table.len(), columns = table.headers.len(), "表格已加载");

    let is_excel = matches!(extension_of(path).as_str(), "xlsx" | "xls");
    if let (true, Some(copy_path)) = (is_excel, &options.csv_copy) {
        CsvReportWriter.write_table(&table, copy_path)?;
        info!(path = %copy_path.display(), "Excel 已转存为 CSV");
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    fn csv_file(content: &str) -> NamedTempFile {
        let mut temp_file = Builder::new().suffix(".csv").tempfile().unwrap();
        write!(temp_file, "{}", content).unwrap();
        temp_file
    }

    #[test]
    fn test_csv_parser_valid_file() {
        let temp_file = csv_file("单号,省区名称\n1001,浙江\n1002,江苏\n");

        let table = CsvParser.parse_to_raw_table(temp_file.path()).unwrap();

        assert_eq!(table.headers, vec!["单号", "省区名称"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0].get("单号"), Some(&"1001".to_string()));
        assert_eq!(table.rows[1].get("省区名称"), Some(&"江苏".to_string()));
    }

    #[test]
    fn test_csv_parser_strips_bom() {
        let temp_file = csv_file("\u{feff}单号,省区名称\n1001,浙江\n");

        let table = CsvParser.parse_to_raw_table(temp_file.path()).unwrap();

        assert!(table.has_column("单号"));
    }

    #[test]
    fn test_csv_parser_skip_empty_rows() {
        let temp_file = csv_file("单号,省区名称\n1001,浙江\n,\n1002,江苏\n");

        let table = CsvParser.parse_to_raw_table(temp_file.path()).unwrap();

        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_csv_parser_duplicate_header_keeps_last_value() {
        let temp_file = csv_file("单号,备注,备注\n1001,第一列,第二列\n");

        let table = CsvParser.parse_to_raw_table(temp_file.path()).unwrap();

        assert_eq!(table.duplicate_headers(), vec!["备注"]);
        assert_eq!(table.rows[0]["备注"], "第二列");
    }

    #[test]
    fn test_csv_parser_file_not_found() {
        let result = CsvParser.parse_to_raw_table(Path::new("non_existent.csv"));
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_universal_parser_rejects_unknown_extension() {
        let result = UniversalFileParser.parse("data.json");
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(ext)) if ext == "json"));
    }

    #[test]
    fn test_load_table_empty_path() {
        let result = load_table("  \"\" ", &LoadOptions::default());
        assert!(matches!(result, Err(ImportError::InvalidPath(_))));
    }

    #[test]
    fn test_load_table_strips_quotes() {
        let temp_file = csv_file("单号\n1001\n");
        let quoted = format!("\"{}\"", temp_file.path().display());

        let table = load_table(&quoted, &LoadOptions::default()).unwrap();

        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_csv_input_never_writes_copy() {
        let temp_file = csv_file("单号\n1001\n");
        let dir = tempfile::tempdir().unwrap();
        let copy = dir.path().join("copy.csv");
        let options = LoadOptions {
            csv_copy: Some(copy.clone()),
        };

        load_table(temp_file.path().to_str().unwrap(), &options).unwrap();

        assert!(!copy.exists());
    }

    #[test]
    fn test_format_float_keeps_waybill_digits() {
        assert_eq!(format_float(773012345678.0), "773012345678");
        assert_eq!(format_float(2.5), "2.5");
    }

    #[test]
    fn test_cell_to_text() {
        assert_eq!(cell_to_text(&Data::Empty), "");
        assert_eq!(cell_to_text(&Data::String("  浙江 ".to_string())), "浙江");
        assert_eq!(cell_to_text(&Data::Int(42)), "42");
    }
}

// ==========================================
// 进线-入库时间差值分析 - 输入参数校验器
// ==========================================
// 职责: 路径 / 前缀参数的清洗与校验
// ==========================================

use crate::importer::data_cleaner::DataCleaner;
use crate::importer::error::{ImportError, ImportResult};
use std::path::{Path, PathBuf};

const SUPPORTED_EXTENSIONS: [&str; 3] = ["csv", "xlsx", "xls"];

pub struct ParamValidator;

impl ParamValidator {
    /// 输入文件：非空、存在、扩展名受支持
    ///
    /// # 参数
    /// - raw: 原始输入（可能带引号）
    /// - label: 参数含义（用于错误信息，如「客户明细表格」）
    pub fn input_file(&self, raw: &str, label: &str) -> ImportResult<PathBuf> {
        let cleaned = DataCleaner.strip_path_quotes(raw);
        if cleaned.is_empty() {
            return Err(ImportError::InvalidPath(format!("{}路径不能为空", label)));
        }

        let path = PathBuf::from(&cleaned);
        if !path.exists() {
            return Err(ImportError::FileNotFound(format!("{}: {}", label, cleaned)));
        }

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if !SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
            return Err(ImportError::UnsupportedFormat(format!("{} ({})", ext, label)));
        }

        Ok(path)
    }

    /// 输入目录：非空、存在、是目录
    pub fn input_dir(&self, raw: &str, label: &str) -> ImportResult<PathBuf> {
        let cleaned = DataCleaner.strip_path_quotes(raw);
        if cleaned.is_empty() {
            return Err(ImportError::InvalidPath(format!("{}路径不能为空", label)));
        }

        let path = PathBuf::from(&cleaned);
        if !path.is_dir() {
            return Err(ImportError::InvalidPath(format!(
                "{}不存在或不是文件夹: {}",
                label, cleaned
            )));
        }
        Ok(path)
    }

    /// 输出目录：非空即可（不存在时由写出方创建）
    pub fn output_dir(&self, raw: &str) -> ImportResult<PathBuf> {
        let cleaned = DataCleaner.strip_path_quotes(raw);
        if cleaned.is_empty() {
            return Err(ImportError::InvalidPath("输出目录路径不能为空".to_string()));
        }
        Ok(PathBuf::from(cleaned))
    }

    /// 日期前缀：非空，且不能含路径分隔符
    pub fn date_prefix(&self, raw: &str) -> ImportResult<String> {
        let cleaned = DataCleaner.strip_path_quotes(raw);
        if cleaned.is_empty() {
            return Err(ImportError::EmptyArgument("日期前缀".to_string()));
        }
        if cleaned.contains(['/', '\\']) {
            return Err(ImportError::InvalidPath(format!(
                "日期前缀不能包含路径分隔符: {}",
                cleaned
            )));
        }
        Ok(cleaned)
    }

    /// 输出文件完整路径
    pub fn output_file(&self, dir: &Path, file_name: &str) -> PathBuf {
        dir.join(file_name)
    }
}

// ==========================================
// 进线-入库时间差值分析 - 批处理配置
// ==========================================
// 默认值即标准口径；JSON 文件只需写出要覆写的字段
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 批处理参数（可由 JSON 文件部分覆写，未出现的字段取默认值）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// 入库类操作关键字（操作名称包含任一即视为入柜/入库，区分大小写）
    pub intake_keywords: Vec<String>,

    /// 日期时间解析格式（按顺序尝试）
    pub datetime_formats: Vec<String>,

    /// 时间差值明细文件名后缀：{date_prefix}-{suffix}.xlsx
    pub joiner_output_suffix: String,

    /// 时间差值分析文件名后缀
    pub summary_output_suffix: String,

    /// 时间差值明细工作表名
    pub joiner_sheet_name: String,

    /// 入库前后透视工作表名
    pub sign_sheet_name: String,

    /// 入库后时间差区间透视工作表名
    pub range_sheet_name: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            intake_keywords: vec!["入柜".to_string(), "入库".to_string()],
            datetime_formats: [
                "%Y-%m-%d %H:%M:%S",
                "%Y-%m-%d %H:%M:%S%.f",
                "%Y-%m-%d %H:%M",
                "%Y/%m/%d %H:%M:%S",
                "%Y/%m/%d %H:%M",
                "%Y-%m-%dT%H:%M:%S",
                "%Y%m%d%H%M%S",
            ]
            .iter()
            .map(|f| f.to_string())
            .collect(),
            joiner_output_suffix: "客户-时间差值明细".to_string(),
            summary_output_suffix: "客户-时间差值明细分析".to_string(),
            joiner_sheet_name: "Sheet1".to_string(),
            sign_sheet_name: "入库进线分析".to_string(),
            range_sheet_name: "入库后催件时间分析".to_string(),
        }
    }
}

impl PipelineConfig {
    /// 从 JSON 文件加载
    pub fn from_json_file(path: &Path) -> ImportResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| ImportError::ConfigReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&raw).map_err(|e| match e {
            ImportError::ConfigReadError { message, .. } => ImportError::ConfigReadError {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
    }

    pub fn from_json_str(raw: &str) -> ImportResult<Self> {
        let config: PipelineConfig =
            serde_json::from_str(raw).map_err(|e| ImportError::ConfigReadError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ImportResult<()> {
        if self.intake_keywords.iter().all(|k| k.is_empty()) {
            return Err(ImportError::ConfigReadError {
                path: "<inline>".to_string(),
                message: "intake_keywords 不能为空".to_string(),
            });
        }
        Ok(())
    }

    /// 输出文件名：{date_prefix}-{suffix}.xlsx
    pub fn output_file_name(date_prefix: &str, suffix: &str) -> String {
        format!("{}-{}.xlsx", date_prefix, suffix)
    }
}

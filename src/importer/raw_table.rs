// ==========================================
// 进线-入库时间差值分析 - 原始表格
// ==========================================
// 职责: 文件解析结果的统一承载（表头 + 行记录）
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use std::collections::{HashMap, HashSet};

/// 原始表格：保留源文件表头顺序，行记录按列名索引
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    /// 表头（已 TRIM，已去除 BOM）
    pub headers: Vec<String>,

    /// 行记录（HashMap<列名, 值>），已跳过完全空白的行
    pub rows: Vec<HashMap<String, String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    /// 校验必需列是否齐全
    ///
    /// 一次性列出全部缺失列，而不是遇到第一个就返回
    pub fn require_columns(&self, table: &str, required: &[&str]) -> ImportResult<()> {
        let missing: Vec<String> = required
            .iter()
            .filter(|col| !self.has_column(col))
            .map(|col| col.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ImportError::MissingRequiredColumn {
                table: table.to_string(),
                columns: missing,
            })
        }
    }

    /// 重复出现的表头（按首次重复的顺序，每个名称只列一次）
    ///
    /// 行记录按列名索引，重复列只保留最后一列的值
    pub fn duplicate_headers(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates: Vec<&str> = Vec::new();
        for header in &self.headers {
            if !seen.insert(header.as_str()) && !duplicates.contains(&header.as_str()) {
                duplicates.push(header.as_str());
            }
        }
        duplicates
    }

    /// 按表头顺序取出一行的值（缺失单元格为空字符串）
    pub fn ordered_values<'a>(&'a self, row: &'a HashMap<String, String>) -> Vec<&'a str> {
        self.headers
            .iter()
            .map(|h| row.get(h).map(String::as_str).unwrap_or(""))
            .collect()
    }
}

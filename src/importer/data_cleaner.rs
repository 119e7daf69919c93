// ==========================================
// 进线-入库时间差值分析 - 数据清洗器
// ==========================================
// 职责: TRIM、引号去除、日期时间解析
// ==========================================

use chrono::{NaiveDate, NaiveDateTime};

pub struct DataCleaner;

impl DataCleaner {
    /// 清洗文本字段（TRIM）
    pub fn clean_text(&self, value: &str) -> String {
        value.trim().to_string()
    }

    /// 去除路径两端的空白与引号
    pub fn strip_path_quotes(&self, value: &str) -> String {
        value
            .trim()
            .trim_matches(|c| c == '"' || c == '\'')
            .trim()
            .to_string()
    }

    /// 按给定格式列表依次尝试解析日期时间
    ///
    /// 全部失败后再尝试纯日期格式（补 00:00:00）
    pub fn parse_datetime(&self, value: &str, formats: &[String]) -> Option<NaiveDateTime> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }

        for fmt in formats {
            if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
                return Some(dt);
            }
        }

        ["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d"]
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
            .and_then(|d| d.and_hms_opt(0, 0, 0))
    }
}

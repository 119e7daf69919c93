// ==========================================
// 进线-入库时间差值分析 - 运行结果
// ==========================================
// 职责: 入口边界统一的 {success, message} 结果
// ==========================================

use crate::importer::error::ImportResult;
use serde::{Deserialize, Serialize};
use tracing::error;

/// 入口函数的运行结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOutcome {
    pub success: bool,
    pub message: String,
}

impl RunOutcome {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    /// 在边界处吞掉所有错误，转换为失败结果
    pub fn from_result<T>(result: ImportResult<T>, on_success: impl FnOnce(&T) -> String) -> Self {
        match result {
            Ok(value) => Self::ok(on_success(&value)),
            Err(e) => {
                error!(error = %e, "处理失败");
                Self::fail(e.to_string())
            }
        }
    }
}

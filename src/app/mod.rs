// ==========================================
// 进线-入库时间差值分析 - 应用层
// ==========================================
// 职责: 命令行交互,缺省参数从标准输入补齐
// ==========================================

pub mod prompt;

// 重导出
pub use prompt::{prompt_value, Prompter};

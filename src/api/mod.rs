// ==========================================
// 进线-入库时间差值分析 - API 层
// ==========================================
// 职责: 批处理入口,供命令行调用
// 边界: *_outcome 函数吞掉所有错误,返回 {success, message}
// ==========================================

pub mod convert_api;
pub mod joiner_api;
pub mod outcome;
pub mod summarizer_api;
pub mod validator;

// 重导出核心类型
pub use convert_api::{convert_folder, convert_folder_outcome, ConvertReport};
pub use joiner_api::{run_joiner, run_joiner_outcome, JoinerParams, JoinerReport};
pub use outcome::RunOutcome;
pub use summarizer_api::{
    run_pipeline, run_pipeline_outcome, run_summarizer, run_summarizer_outcome,
    summarize_records, PipelineReport, SummarizerParams, SummaryReport,
};
pub use validator::ParamValidator;

// ==========================================
// 进线-入库时间差值分析 - 核心库
// ==========================================
// 输入: 客户明细 + 查询结果-运单号（CSV / Excel）
// 输出: 客户-时间差值明细 / 客户-时间差值明细分析（Excel）
// 运行方式: 命令行批处理
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 记录与分桶类型
pub mod domain;

// 引擎层 - 入库提取 / 关联 / 透视
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 导出层 - Excel / CSV 写出
pub mod exporter;

// 配置层 - 运行参数
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 批处理入口
pub mod api;

// 应用层 - 命令行交互
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{RangeBucket, SignBucket};

// 领域实体
pub use domain::{AnnotatedRecord, GroupKey, OperationEvent, ShipmentRecord, SummaryTable};

// 引擎
pub use engine::{EarliestIntakeReducer, JoinAnnotator, PivotAggregator};

// 配置
pub use config::PipelineConfig;

// 错误
pub use importer::error::{ImportError, ImportResult};

// API
pub use api::{
    convert_folder, run_joiner, run_pipeline, run_summarizer, JoinerParams, RunOutcome,
    SummarizerParams,
};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "进线-入库时间差值分析";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}

// ==========================================
// 进线-入库时间差值分析 - 配置层
// ==========================================
// 职责: 批处理参数（关键字、日期格式、输出命名）
// 存储: 内置默认值 + 可选 JSON 覆写文件
// ==========================================

pub mod pipeline_config;

pub use pipeline_config::PipelineConfig;

// ==========================================
// 进线-入库时间差值分析 - 引擎层
// ==========================================
// 职责: 最早入库提取 / 关联标注 / 透视汇总
// 红线: 引擎不做文件读写
// ==========================================

pub mod annotator;
pub mod delta_classifier;
pub mod intake_reducer;
pub mod pivot;

// 重导出核心引擎
pub use annotator::JoinAnnotator;
pub use delta_classifier::{classify_range, classify_sign, delta_days};
pub use intake_reducer::EarliestIntakeReducer;
pub use pivot::{format_share, PivotAggregator};

// ==========================================
// 进线-入库时间差值分析 - 领域模型层
// ==========================================
// 职责: 定义记录结构与分桶类型
// 红线: 不含文件读写,不含引擎逻辑
// ==========================================

pub mod shipment;
pub mod summary;
pub mod types;

// 重导出核心类型
pub use shipment::{columns, AnnotatedRecord, OperationEvent, ShipmentRecord};
pub use summary::{
    BucketFamily, GroupKey, GroupSummary, SummaryInputRecord, SummaryTable, TOTAL_LABEL,
};
pub use types::{RangeBucket, SignBucket};

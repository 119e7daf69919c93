// ==========================================
// 进线-入库时间差值分析 - 运单领域对象
// ==========================================
// 客户明细 / 操作记录 / 时间差值明细
// ==========================================

use crate::domain::types::{RangeBucket, SignBucket};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// 源表列名
pub mod columns {
    // 客户明细
    pub const REGION: &str = "省区名称";
    pub const SHIPMENT_ID: &str = "单号";
    pub const STATION: &str = "揽收网点名称";
    pub const CODE: &str = "K码";
    pub const CUSTOMER: &str = "客户名称";
    pub const INQUIRY_TIME: &str = "进线时间";
    pub const CASE_SUBTYPE: &str = "工单小类";
    pub const COMPLAINT: &str = "投诉/催查内容";

    // 查询结果-运单号
    pub const WAYBILL_NO: &str = "运单号";
    pub const OPERATION_TIME: &str = "操作时间";
    pub const OPERATION_NAME: &str = "操作名称";

    // 时间差值明细（派生列）
    pub const INTAKE_TIME: &str = "入库时间";
    pub const DELTA_DAYS: &str = "进线-入库时间差";
    pub const SIGN_BUCKET: &str = "入库前后";
    pub const RANGE_BUCKET: &str = "入库后进线-进线与入库时间差分布区间";

    /// 时间差值明细输出列顺序
    pub const ANNOTATED_ORDER: [&str; 12] = [
        REGION,
        SHIPMENT_ID,
        STATION,
        CODE,
        CUSTOMER,
        INQUIRY_TIME,
        INTAKE_TIME,
        DELTA_DAYS,
        SIGN_BUCKET,
        RANGE_BUCKET,
        CASE_SUBTYPE,
        COMPLAINT,
    ];
}

// ==========================================
// ShipmentRecord - 客户明细（一行一个工单）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentRecord {
    pub region: String,
    /// 运单号（关联键，可能重复）
    pub shipment_id: String,
    pub station: String,
    pub code: String,
    pub customer: String,
    pub inquiry_time: NaiveDateTime,
    pub case_subtype: String,
    pub complaint_content: String,

    /// 源文件行号
    pub row_number: usize,
}

// ==========================================
// OperationEvent - 运单操作记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationEvent {
    pub shipment_id: String,
    /// 操作时间（空白或无法解析时为 None）
    pub operation_time: Option<NaiveDateTime>,
    pub operation_name: String,
    pub row_number: usize,
}

// ==========================================
// AnnotatedRecord - 时间差值明细
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedRecord {
    pub region: String,
    pub shipment_id: String,
    pub station: String,
    pub code: String,
    pub customer: String,
    pub inquiry_time: NaiveDateTime,
    /// 最早入柜/入库时间；无匹配记录时为 None
    pub intake_time: Option<NaiveDateTime>,
    /// 进线时间 - 入库时间（天，含小数）
    pub delta_days: Option<f64>,
    pub sign_bucket: SignBucket,
    /// 仅 delta_days >= 0 时有值
    pub range_bucket: Option<RangeBucket>,
    pub case_subtype: String,
    pub complaint_content: String,
}

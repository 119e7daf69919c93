// ==========================================
// 进线-入库时间差值分析 - 关联与标注
// ==========================================
// 职责: 客户明细 LEFT JOIN 最早入库时间 → 时间差值明细
// 说明: 纯计算，不做文件读写
// ==========================================

use crate::domain::shipment::{AnnotatedRecord, OperationEvent, ShipmentRecord};
use crate::engine::delta_classifier::{classify_range, classify_sign, delta_days};
use crate::engine::intake_reducer::EarliestIntakeReducer;
use chrono::NaiveDateTime;
use std::collections::HashMap;
use tracing::info;

pub struct JoinAnnotator {
    reducer: EarliestIntakeReducer,
}

impl JoinAnnotator {
    pub fn new(intake_keywords: Vec<String>) -> Self {
        Self {
            reducer: EarliestIntakeReducer::new(intake_keywords),
        }
    }

    /// 关联并标注
    ///
    /// 输出与输入客户明细一一对应、顺序一致；运单号重复的记录各自独立关联
    pub fn annotate(
        &self,
        records: Vec<ShipmentRecord>,
        events: Vec<OperationEvent>,
    ) -> Vec<AnnotatedRecord> {
        let earliest = self.reducer.earliest_times(events);
        let annotated: Vec<AnnotatedRecord> = records
            .into_iter()
            .map(|r| annotate_one(r, &earliest))
            .collect();

        let matched = annotated.iter().filter(|r| r.intake_time.is_some()).count();
        info!(
            records = annotated.len(),
            matched,
            intake_shipments = earliest.len(),
            "客户明细与入库记录关联完成"
        );
        annotated
    }
}

fn annotate_one(
    record: ShipmentRecord,
    earliest: &HashMap<String, NaiveDateTime>,
) -> AnnotatedRecord {
    let intake_time = earliest.get(&record.shipment_id).copied();
    let delta = delta_days(record.inquiry_time, intake_time);

    AnnotatedRecord {
        region: record.region,
        shipment_id: record.shipment_id,
        station: record.station,
        code: record.code,
        customer: record.customer,
        inquiry_time: record.inquiry_time,
        intake_time,
        delta_days: delta,
        sign_bucket: classify_sign(delta),
        range_bucket: classify_range(delta),
        case_subtype: record.case_subtype,
        complaint_content: record.complaint_content,
    }
}

// ==========================================
// 进线-入库时间差值分析 - 最早入库记录提取
// ==========================================
// 规则:
// 1. 操作名称包含任一关键字（子串匹配，区分大小写）
// 2. 按操作时间升序稳定排序
// 3. 每个运单号保留第一条
// ==========================================

use crate::domain::shipment::OperationEvent;
use chrono::NaiveDateTime;
use std::collections::HashMap;
use tracing::debug;

pub struct EarliestIntakeReducer {
    keywords: Vec<String>,
}

impl EarliestIntakeReducer {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn is_intake(&self, operation_name: &str) -> bool {
        self.keywords
            .iter()
            .any(|k| !k.is_empty() && operation_name.contains(k.as_str()))
    }

    /// 返回 运单号 → 最早入库事件
    ///
    /// 操作时间缺失的记录不参与比较
    pub fn reduce(&self, events: Vec<OperationEvent>) -> HashMap<String, OperationEvent> {
        let total = events.len();
        let mut intake_events: Vec<OperationEvent> = events
            .into_iter()
            .filter(|e| e.operation_time.is_some() && self.is_intake(&e.operation_name))
            .collect();
        let matched = intake_events.len();

        // sort_by_key 为稳定排序，同一时刻保留先出现的记录
        intake_events.sort_by_key(|e| e.operation_time);

        let mut earliest: HashMap<String, OperationEvent> = HashMap::new();
        for event in intake_events {
            earliest.entry(event.shipment_id.clone()).or_insert(event);
        }

        debug!(
            total,
            matched,
            shipments = earliest.len(),
            "最早入库记录提取完成"
        );
        earliest
    }

    /// 仅返回 运单号 → 最早入库时间
    pub fn earliest_times(&self, events: Vec<OperationEvent>) -> HashMap<String, NaiveDateTime> {
        self.reduce(events)
            .into_iter()
            .filter_map(|(id, e)| e.operation_time.map(|t| (id, t)))
            .collect()
    }
}

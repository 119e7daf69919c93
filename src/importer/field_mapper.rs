// ==========================================
// 进线-入库时间差值分析 - 字段映射器实现
// ==========================================
// 职责: 源字段 → 强类型记录 + 类型转换
// 三张表: 客户明细 / 查询结果-运单号 / 时间差值明细
// ==========================================

use crate::domain::shipment::{columns, OperationEvent, ShipmentRecord};
use crate::domain::summary::{GroupKey, SummaryInputRecord};
use crate::domain::types::{RangeBucket, SignBucket};
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::FieldMapper;
use chrono::NaiveDateTime;
use std::collections::HashMap;
use tracing::warn;

fn get_string(row: &HashMap<String, String>, key: &str) -> String {
    row.get(key)
        .map(|v| DataCleaner.clean_text(v))
        .unwrap_or_default()
}

// ==========================================
// 客户明细
// ==========================================
pub struct ShipmentFieldMapper {
    datetime_formats: Vec<String>,
}

impl ShipmentFieldMapper {
    pub fn new(datetime_formats: Vec<String>) -> Self {
        Self { datetime_formats }
    }

    fn parse_required_datetime(
        &self,
        row: &HashMap<String, String>,
        key: &str,
        row_number: usize,
    ) -> ImportResult<NaiveDateTime> {
        let value = get_string(row, key);
        DataCleaner
            .parse_datetime(&value, &self.datetime_formats)
            .ok_or(ImportError::DateTimeParseError {
                row: row_number,
                field: key.to_string(),
                value,
            })
    }
}

impl FieldMapper for ShipmentFieldMapper {
    type Record = ShipmentRecord;

    fn table_name(&self) -> &'static str {
        "客户明细"
    }

    fn required_columns(&self) -> &'static [&'static str] {
        &[
            columns::REGION,
            columns::SHIPMENT_ID,
            columns::STATION,
            columns::CODE,
            columns::CUSTOMER,
            columns::INQUIRY_TIME,
            columns::CASE_SUBTYPE,
            columns::COMPLAINT,
        ]
    }

    fn map_row(
        &self,
        row: &HashMap<String, String>,
        row_number: usize,
    ) -> ImportResult<ShipmentRecord> {
        Ok(ShipmentRecord {
            region: get_string(row, columns::REGION),
            shipment_id: get_string(row, columns::SHIPMENT_ID),
            station: get_string(row, columns::STATION),
            code: get_string(row, columns::CODE),
            customer: get_string(row, columns::CUSTOMER),
            inquiry_time: self.parse_required_datetime(row, columns::INQUIRY_TIME, row_number)?,
            case_subtype: get_string(row, columns::CASE_SUBTYPE),
            complaint_content: get_string(row, columns::COMPLAINT),
            row_number,
        })
    }
}

// ==========================================
// 查询结果-运单号（操作记录）
// ==========================================
pub struct OperationEventFieldMapper {
    datetime_formats: Vec<String>,
}

impl OperationEventFieldMapper {
    pub fn new(datetime_formats: Vec<String>) -> Self {
        Self { datetime_formats }
    }
}

impl FieldMapper for OperationEventFieldMapper {
    type Record = OperationEvent;

    fn table_name(&self) -> &'static str {
        "查询结果-运单号"
    }

    fn required_columns(&self) -> &'static [&'static str] {
        &[
            columns::WAYBILL_NO,
            columns::OPERATION_TIME,
            columns::OPERATION_NAME,
        ]
    }

    /// 操作时间无法解析不报错（该行不会成为最早入库记录）
    fn map_row(
        &self,
        row: &HashMap<String, String>,
        row_number: usize,
    ) -> ImportResult<OperationEvent> {
        let raw_time = get_string(row, columns::OPERATION_TIME);
        let operation_time = DataCleaner.parse_datetime(&raw_time, &self.datetime_formats);
        if operation_time.is_none() && !raw_time.is_empty() {
            warn!(row = row_number, value = %raw_time, "操作时间无法解析，已忽略");
        }

        Ok(OperationEvent {
            shipment_id: get_string(row, columns::WAYBILL_NO),
            operation_time,
            operation_name: get_string(row, columns::OPERATION_NAME),
            row_number,
        })
    }
}

// ==========================================
// 时间差值明细（汇总输入）
// ==========================================
pub struct AnnotatedFieldMapper;

impl FieldMapper for AnnotatedFieldMapper {
    type Record = SummaryInputRecord;

    fn table_name(&self) -> &'static str {
        "客户-时间差值明细"
    }

    fn required_columns(&self) -> &'static [&'static str] {
        &[
            columns::REGION,
            columns::STATION,
            columns::CODE,
            columns::CUSTOMER,
            columns::SIGN_BUCKET,
            columns::RANGE_BUCKET,
        ]
    }

    fn map_row(
        &self,
        row: &HashMap<String, String>,
        row_number: usize,
    ) -> ImportResult<SummaryInputRecord> {
        let sign_label = get_string(row, columns::SIGN_BUCKET);
        let range_label = get_string(row, columns::RANGE_BUCKET);

        let sign_bucket = SignBucket::from_label(&sign_label);
        if sign_bucket.is_none() && !sign_label.is_empty() {
            warn!(row = row_number, label = %sign_label, "未知的入库前后标签，不计入统计");
        }
        let range_bucket = RangeBucket::from_label(&range_label);
        if range_bucket.is_none() && !range_label.is_empty() {
            warn!(row = row_number, label = %range_label, "未知的时间差区间标签，不计入统计");
        }

        Ok(SummaryInputRecord {
            key: GroupKey {
                region: get_string(row, columns::REGION),
                station: get_string(row, columns::STATION),
                code: get_string(row, columns::CODE),
                customer: get_string(row, columns::CUSTOMER),
            },
            sign_bucket,
            range_bucket,
        })
    }
}

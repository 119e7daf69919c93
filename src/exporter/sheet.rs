// ==========================================
// 进线-入库时间差值分析 - 输出工作表模型
// ==========================================
// 职责: 领域结果 → 工作表（表头 + 单元格）
// ==========================================

use crate::domain::shipment::{columns, AnnotatedRecord};
use crate::domain::summary::{GroupSummary, SummaryTable};
use chrono::NaiveDateTime;

/// 单元格
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    DateTime(NaiveDateTime),
    Blank,
}

impl CellValue {
    fn text(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

/// 工作表
#[derive(Debug, Clone, PartialEq)]
pub struct SheetData {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl SheetData {
    /// 时间差值明细工作表（列顺序固定）
    pub fn from_annotated(name: &str, records: &[AnnotatedRecord]) -> Self {
        let rows = records
            .iter()
            .map(|r| {
                vec![
                    CellValue::text(&r.region),
                    CellValue::text(&r.shipment_id),
                    CellValue::text(&r.station),
                    CellValue::text(&r.code),
                    CellValue::text(&r.customer),
                    CellValue::DateTime(r.inquiry_time),
                    r.intake_time.map_or(CellValue::Blank, CellValue::DateTime),
                    r.delta_days.map_or(CellValue::Blank, CellValue::Number),
                    CellValue::text(r.sign_bucket.label()),
                    r.range_bucket
                        .map_or(CellValue::Blank, |b| CellValue::text(b.label())),
                    CellValue::text(&r.case_subtype),
                    CellValue::text(&r.complaint_content),
                ]
            })
            .collect();

        Self {
            name: name.to_string(),
            headers: columns::ANNOTATED_ORDER.iter().map(|h| h.to_string()).collect(),
            rows,
        }
    }

    /// 透视汇总工作表（数据行 + 总计行）
    pub fn from_summary(name: &str, table: &SummaryTable) -> Self {
        let rows = table
            .rows
            .iter()
            .chain(std::iter::once(&table.total_row))
            .map(summary_row)
            .collect();

        Self {
            name: name.to_string(),
            headers: table.headers().iter().map(|h| h.to_string()).collect(),
            rows,
        }
    }
}

fn summary_row(summary: &GroupSummary) -> Vec<CellValue> {
    let mut row = vec![
        CellValue::text(&summary.key.station),
        CellValue::text(&summary.key.code),
        CellValue::text(&summary.key.customer),
    ];
    for (count, share) in summary.counts.iter().zip(&summary.shares) {
        row.push(CellValue::Number(*count as f64));
        row.push(CellValue::text(share));
    }
    row.push(CellValue::Number(summary.total as f64));
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::summary::{GroupKey, SummaryInputRecord};
    use crate::domain::types::{RangeBucket, SignBucket};
    use crate::engine::PivotAggregator;
    use chrono::NaiveDate;

    fn annotated(intake: bool) -> AnnotatedRecord {
        let inquiry = NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        AnnotatedRecord {
            region: "浙江".to_string(),
            shipment_id: "1001".to_string(),
            station: "杭州西湖".to_string(),
            code: "K001".to_string(),
            customer: "某电商".to_string(),
            inquiry_time: inquiry,
            intake_time: intake.then(|| inquiry - chrono::Duration::hours(12)),
            delta_days: intake.then_some(0.5),
            sign_bucket: if intake {
                SignBucket::AfterIntake
            } else {
                SignBucket::NoIntake
            },
            range_bucket: intake.then_some(RangeBucket::WithinOneDay),
            case_subtype: "催件".to_string(),
            complaint_content: "".to_string(),
        }
    }

    #[test]
    fn test_annotated_sheet_blank_cells_without_intake() {
        let sheet = SheetData::from_annotated("Sheet1", &[annotated(false)]);

        assert_eq!(sheet.headers.len(), 12);
        assert_eq!(sheet.headers[7], "进线-入库时间差");
        assert_eq!(sheet.rows[0][6], CellValue::Blank);
        assert_eq!(sheet.rows[0][7], CellValue::Blank);
        assert_eq!(sheet.rows[0][8], CellValue::Text("无入库".to_string()));
        assert_eq!(sheet.rows[0][9], CellValue::Blank);
    }

    #[test]
    fn test_annotated_sheet_with_intake() {
        let sheet = SheetData::from_annotated("Sheet1", &[annotated(true)]);

        assert_eq!(sheet.rows[0][7], CellValue::Number(0.5));
        assert_eq!(sheet.rows[0][9], CellValue::Text("1天以内".to_string()));
        match &sheet.rows[0][6] {
            CellValue::DateTime(dt) => assert_eq!(dt.to_string(), "2024-01-04 22:00:00"),
            other => panic!("入库时间应为日期时间单元格: {:?}", other),
        }
    }

    #[test]
    fn test_summary_sheet_appends_total_row() {
        let records = vec![SummaryInputRecord {
            key: GroupKey {
                region: "浙江".to_string(),
                station: "杭州西湖".to_string(),
                code: "K001".to_string(),
                customer: "某电商".to_string(),
            },
            sign_bucket: Some(SignBucket::AfterIntake),
            range_bucket: None,
        }];
        let table = PivotAggregator.pivot::<SignBucket>(&records);

        let sheet = SheetData::from_summary("入库进线分析", &table);

        assert_eq!(sheet.rows.len(), 2);
        assert_eq!(sheet.rows[1][0], CellValue::Text("总计".to_string()));
        assert_eq!(sheet.rows[1][9], CellValue::Number(1.0));
        assert_eq!(sheet.rows[0][8], CellValue::Text("100.00%".to_string()));
    }
}

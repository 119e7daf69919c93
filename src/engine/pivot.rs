// ==========================================
// 进线-入库时间差值分析 - 透视汇总
// ==========================================
// 职责: 按 (省区, 网点, K码, 客户) 分组计数 + 占比 + 总计行
// 规则:
// - 缺失的分桶计数为 0
// - 占比 = 计数 / 本行总计，格式 "xx.xx%"
// - 本行总计为 0 时占比输出 0.00%
// ==========================================

use crate::domain::summary::{
    BucketFamily, GroupKey, GroupSummary, SummaryInputRecord, SummaryTable,
};
use std::collections::BTreeMap;
use tracing::debug;

/// 百分比字符串（两位小数）
pub fn format_share(count: u64, total: u64) -> String {
    if total == 0 {
        return "0.00%".to_string();
    }
    format!("{:.2}%", count as f64 * 100.0 / total as f64)
}

pub struct PivotAggregator;

impl PivotAggregator {
    /// 针对一个分桶维度生成透视表
    pub fn pivot<B: BucketFamily>(&self, records: &[SummaryInputRecord]) -> SummaryTable {
        let order = B::DISPLAY_ORDER;

        // BTreeMap 保证输出按分组键排序
        let mut groups: BTreeMap<GroupKey, Vec<u64>> = BTreeMap::new();
        for record in records {
            let counts = groups
                .entry(record.key.clone())
                .or_insert_with(|| vec![0; order.len()]);
            if let Some(bucket) = B::pick(record) {
                if let Some(idx) = order.iter().position(|b| *b == bucket) {
                    counts[idx] += 1;
                }
            }
        }

        let rows: Vec<GroupSummary> = groups
            .into_iter()
            .map(|(key, counts)| build_summary(key, counts))
            .collect();

        let mut column_sums = vec![0u64; order.len()];
        for row in &rows {
            for (sum, count) in column_sums.iter_mut().zip(&row.counts) {
                *sum += count;
            }
        }
        let total_row = build_summary(GroupKey::total(), column_sums);

        debug!(groups = rows.len(), grand_total = total_row.total, "透视汇总完成");

        SummaryTable {
            bucket_headers: order
                .iter()
                .map(|b| (b.count_header(), b.share_header()))
                .collect(),
            rows,
            total_row,
        }
    }
}

fn build_summary(key: GroupKey, counts: Vec<u64>) -> GroupSummary {
    let total: u64 = counts.iter().sum();
    let shares = counts.iter().map(|c| format_share(*c, total)).collect();
    GroupSummary {
        key,
        counts,
        shares,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{RangeBucket, SignBucket};

    fn key(station: &str) -> GroupKey {
        GroupKey {
            region: "浙江".to_string(),
            station: station.to_string(),
            code: "K001".to_string(),
            customer: "某电商".to_string(),
        }
    }

    fn record(
        station: &str,
        sign: Option<SignBucket>,
        range: Option<RangeBucket>,
    ) -> SummaryInputRecord {
        SummaryInputRecord {
            key: key(station),
            sign_bucket: sign,
            range_bucket: range,
        }
    }

    fn share_value(s: &str) -> f64 {
        s.trim_end_matches('%').parse().unwrap()
    }

    #[test]
    fn test_format_share() {
        assert_eq!(format_share(1, 6), "16.67%");
        assert_eq!(format_share(3, 6), "50.00%");
        assert_eq!(format_share(0, 0), "0.00%");
    }

    #[test]
    fn test_total_row_scenario() {
        // A: 入库后 3, 入库前 1；B: 无入库 2
        let mut records = Vec::new();
        for _ in 0..3 {
            records.push(record("A", Some(SignBucket::AfterIntake), None));
        }
        records.push(record("A", Some(SignBucket::BeforeIntake), None));
        records.push(record("B", Some(SignBucket::NoIntake), None));
        records.push(record("B", Some(SignBucket::NoIntake), None));

        let table = PivotAggregator.pivot::<SignBucket>(&records);

        // 顺序: 无入库, 入库前, 入库后
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].counts, vec![0, 1, 3]);
        assert_eq!(table.rows[1].counts, vec![2, 0, 0]);
        assert_eq!(table.total_row.counts, vec![2, 1, 3]);
        assert_eq!(table.total_row.total, 6);
        assert_eq!(table.total_row.shares, vec!["33.33%", "16.67%", "50.00%"]);
        assert_eq!(table.total_row.key.station, "总计");
        assert_eq!(table.total_row.key.code, "");
    }

    #[test]
    fn test_total_row_equals_column_sums() {
        let records = vec![
            record("A", None, Some(RangeBucket::WithinOneDay)),
            record("A", None, Some(RangeBucket::OverThreeDays)),
            record("B", None, Some(RangeBucket::WithinTwoDays)),
            record("C", None, Some(RangeBucket::WithinOneDay)),
            record("C", None, None),
        ];

        let table = PivotAggregator.pivot::<RangeBucket>(&records);

        for idx in 0..RangeBucket::ALL.len() {
            let sum: u64 = table.rows.iter().map(|r| r.counts[idx]).sum();
            assert_eq!(table.total_row.counts[idx], sum);
        }
        assert_eq!(table.total_row.total, 4);
    }

    #[test]
    fn test_shares_sum_to_hundred() {
        let records = vec![
            record("A", Some(SignBucket::AfterIntake), None),
            record("A", Some(SignBucket::BeforeIntake), None),
            record("A", Some(SignBucket::NoIntake), None),
        ];

        let table = PivotAggregator.pivot::<SignBucket>(&records);
        let sum: f64 = table.rows[0].shares.iter().map(|s| share_value(s)).sum();

        assert!((sum - 100.0).abs() <= 0.011);
    }

    #[test]
    fn test_group_without_bucket_values_gets_zero_shares() {
        let records = vec![record("A", Some(SignBucket::NoIntake), None)];

        let table = PivotAggregator.pivot::<RangeBucket>(&records);

        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].total, 0);
        assert!(table.rows[0].shares.iter().all(|s| s == "0.00%"));
        assert!(table.total_row.shares.iter().all(|s| s == "0.00%"));
    }

    #[test]
    fn test_headers_layout() {
        let table = PivotAggregator.pivot::<RangeBucket>(&[]);
        assert_eq!(
            table.headers(),
            vec![
                "揽收网点名称",
                "K码",
                "客户名称",
                "1天以内",
                "1天以内占比",
                "2天以内",
                "2天以内占比",
                "3天以内",
                "3天以内占比",
                "超过3天",
                "超3天占比",
                "总计",
            ]
        );
    }
}

// ==========================================
// 进线-入库时间差值分析 - 汇总领域对象
// ==========================================

use crate::domain::shipment::AnnotatedRecord;
use crate::domain::types::{RangeBucket, SignBucket};
use serde::{Deserialize, Serialize};

/// 总计行标记
pub const TOTAL_LABEL: &str = "总计";

// ==========================================
// GroupKey - 分组键（省区 / 网点 / K码 / 客户）
// ==========================================
// 排序按字段声明顺序，省区参与分组但不输出
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupKey {
    pub region: String,
    pub station: String,
    pub code: String,
    pub customer: String,
}

impl GroupKey {
    pub fn total() -> Self {
        Self {
            region: String::new(),
            station: TOTAL_LABEL.to_string(),
            code: String::new(),
            customer: String::new(),
        }
    }
}

// ==========================================
// SummaryInputRecord - 汇总输入（时间差值明细的一行）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryInputRecord {
    pub key: GroupKey,
    /// 空白/无法识别的标签为 None，不计入任何分组计数
    pub sign_bucket: Option<SignBucket>,
    pub range_bucket: Option<RangeBucket>,
}

impl From<&AnnotatedRecord> for SummaryInputRecord {
    fn from(record: &AnnotatedRecord) -> Self {
        Self {
            key: GroupKey {
                region: record.region.clone(),
                station: record.station.clone(),
                code: record.code.clone(),
                customer: record.customer.clone(),
            },
            sign_bucket: Some(record.sign_bucket),
            range_bucket: record.range_bucket,
        }
    }
}

// ==========================================
// BucketFamily - 透视的分桶维度
// ==========================================
pub trait BucketFamily: Copy + Eq + 'static {
    /// 输出列顺序
    const DISPLAY_ORDER: &'static [Self];

    fn count_header(&self) -> &'static str;
    fn share_header(&self) -> &'static str;

    /// 从汇总输入中取出本维度的标签
    fn pick(record: &SummaryInputRecord) -> Option<Self>;
}

impl BucketFamily for SignBucket {
    const DISPLAY_ORDER: &'static [Self] = &[
        SignBucket::NoIntake,
        SignBucket::BeforeIntake,
        SignBucket::AfterIntake,
    ];

    fn count_header(&self) -> &'static str {
        match self {
            SignBucket::AfterIntake => "入库后进线",
            SignBucket::BeforeIntake => "入库前进线",
            SignBucket::NoIntake => "无入库进线",
        }
    }

    fn share_header(&self) -> &'static str {
        match self {
            SignBucket::AfterIntake => "入库后占比",
            SignBucket::BeforeIntake => "入库前占比",
            SignBucket::NoIntake => "无入库占比",
        }
    }

    fn pick(record: &SummaryInputRecord) -> Option<Self> {
        record.sign_bucket
    }
}

impl BucketFamily for RangeBucket {
    const DISPLAY_ORDER: &'static [Self] = &RangeBucket::ALL;

    fn count_header(&self) -> &'static str {
        self.label()
    }

    fn share_header(&self) -> &'static str {
        match self {
            RangeBucket::WithinOneDay => "1天以内占比",
            RangeBucket::WithinTwoDays => "2天以内占比",
            RangeBucket::WithinThreeDays => "3天以内占比",
            RangeBucket::OverThreeDays => "超3天占比",
        }
    }

    fn pick(record: &SummaryInputRecord) -> Option<Self> {
        record.range_bucket
    }
}

// ==========================================
// GroupSummary - 单个分组的计数与占比
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    pub key: GroupKey,
    /// 与 BucketFamily::DISPLAY_ORDER 对齐
    pub counts: Vec<u64>,
    /// 百分比字符串（两位小数），与 counts 对齐
    pub shares: Vec<String>,
    pub total: u64,
}

// ==========================================
// SummaryTable - 一个工作表的透视结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryTable {
    /// (计数列名, 占比列名)，按输出顺序
    pub bucket_headers: Vec<(&'static str, &'static str)>,
    pub rows: Vec<GroupSummary>,
    pub total_row: GroupSummary,
}

impl SummaryTable {
    /// 输出表头：网点 / K码 / 客户 / (计数, 占比)* / 总计
    pub fn headers(&self) -> Vec<&'static str> {
        let mut headers = vec!["揽收网点名称", "K码", "客户名称"];
        for (count, share) in &self.bucket_headers {
            headers.push(count);
            headers.push(share);
        }
        headers.push(TOTAL_LABEL);
        headers
    }
}

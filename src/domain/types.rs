// ==========================================
// 进线-入库时间差值分析 - 领域类型定义
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 入库前后 (Sign Bucket)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignBucket {
    AfterIntake,  // 入库后进线
    BeforeIntake, // 入库前进线
    NoIntake,     // 无入库记录
}

impl SignBucket {
    pub fn label(&self) -> &'static str {
        match self {
            SignBucket::AfterIntake => "入库后",
            SignBucket::BeforeIntake => "入库前",
            SignBucket::NoIntake => "无入库",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "入库后" => Some(SignBucket::AfterIntake),
            "入库前" => Some(SignBucket::BeforeIntake),
            "无入库" => Some(SignBucket::NoIntake),
            _ => None,
        }
    }
}

impl fmt::Display for SignBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ==========================================
// 时间差分布区间 (Day-Range Bucket)
// ==========================================
// 左闭右开: [0,1) [1,2) [2,3) [3,∞)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RangeBucket {
    WithinOneDay,
    WithinTwoDays,
    WithinThreeDays,
    OverThreeDays,
}

impl RangeBucket {
    pub const ALL: [RangeBucket; 4] = [
        RangeBucket::WithinOneDay,
        RangeBucket::WithinTwoDays,
        RangeBucket::WithinThreeDays,
        RangeBucket::OverThreeDays,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RangeBucket::WithinOneDay => "1天以内",
            RangeBucket::WithinTwoDays => "2天以内",
            RangeBucket::WithinThreeDays => "3天以内",
            RangeBucket::OverThreeDays => "超过3天",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.label() == label.trim())
    }
}

impl fmt::Display for RangeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

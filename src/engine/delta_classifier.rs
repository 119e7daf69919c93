// ==========================================
// 进线-入库时间差值分析 - 时间差分桶规则
// ==========================================
// 职责: 时间差计算 / 入库前后判定 / 区间判定
// ==========================================

use crate::domain::types::{RangeBucket, SignBucket};
use chrono::NaiveDateTime;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// 进线时间 - 入库时间（天，含小数）
pub fn delta_days(inquiry: NaiveDateTime, intake: Option<NaiveDateTime>) -> Option<f64> {
    intake.map(|t| (inquiry - t).num_milliseconds() as f64 / MILLIS_PER_DAY)
}

/// 入库前后判定
///
/// # 规则
/// - 无入库时间 → 无入库
/// - delta < 0 → 入库前
/// - delta >= 0 → 入库后（同一时刻进线归为入库后）
pub fn classify_sign(delta_days: Option<f64>) -> SignBucket {
    match delta_days {
        None => SignBucket::NoIntake,
        Some(d) if d < 0.0 => SignBucket::BeforeIntake,
        Some(_) => SignBucket::AfterIntake,
    }
}

/// 入库后时间差区间（左闭右开），负值或无值时为 None
pub fn classify_range(delta_days: Option<f64>) -> Option<RangeBucket> {
    let d = delta_days?;
    if d < 0.0 {
        None
    } else if d < 1.0 {
        Some(RangeBucket::WithinOneDay)
    } else if d < 2.0 {
        Some(RangeBucket::WithinTwoDays)
    } else if d < 3.0 {
        Some(RangeBucket::WithinThreeDays)
    } else {
        Some(RangeBucket::OverThreeDays)
    }
}

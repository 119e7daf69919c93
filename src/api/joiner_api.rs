// ==========================================
// 进线-入库时间差值分析 - 时间差值明细汇总 API
// ==========================================
// 流程:
// 1. 参数校验
// 2. 读取「客户明细」「查询结果-运单号」
// 3. 字段映射（列缺失一次性报告）
// 4. 最早入库提取 + LEFT JOIN + 时间差分桶
// 5. 写出 {date_prefix}-客户-时间差值明细.xlsx
// ==========================================

use crate::api::outcome::RunOutcome;
use crate::api::validator::ParamValidator;
use crate::config::PipelineConfig;
use crate::domain::shipment::AnnotatedRecord;
use crate::domain::types::SignBucket;
use crate::engine::JoinAnnotator;
use crate::exporter::{ExcelReportWriter, SheetData};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::{
    load_table, FieldMapper, LoadOptions, OperationEventFieldMapper, ShipmentFieldMapper,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// 时间差值明细汇总参数
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JoinerParams {
    /// 「客户明细」表格路径
    pub customer_detail_path: String,
    /// 「查询结果-运单号」表格路径
    pub operation_log_path: String,
    pub output_dir: String,
    pub date_prefix: String,
    /// Excel 输入时是否在源文件旁转存 CSV
    #[serde(default)]
    pub csv_copy: bool,
}

/// 时间差值明细汇总结果
#[derive(Debug, Clone, Serialize)]
pub struct JoinerReport {
    pub output_path: PathBuf,
    pub records: Vec<AnnotatedRecord>,
}

impl JoinerReport {
    pub fn count(&self, bucket: SignBucket) -> usize {
        self.records.iter().filter(|r| r.sign_bucket == bucket).count()
    }
}

pub(crate) fn load_options(path: &Path, csv_copy: bool) -> LoadOptions {
    if csv_copy {
        LoadOptions::sibling_csv(path)
    } else {
        LoadOptions::default()
    }
}

/// 读取并关联，不写文件
fn build_annotated(
    params: &JoinerParams,
    config: &PipelineConfig,
) -> ImportResult<Vec<AnnotatedRecord>> {
    let validator = ParamValidator;
    let detail_path = validator.input_file(&params.customer_detail_path, "客户明细表格")?;
    let log_path = validator.input_file(&params.operation_log_path, "查询结果-运单号表格")?;

    let detail_table = load_table(
        &detail_path.to_string_lossy(),
        &load_options(&detail_path, params.csv_copy),
    )?;
    let log_table = load_table(
        &log_path.to_string_lossy(),
        &load_options(&log_path, params.csv_copy),
    )?;

    let records =
        ShipmentFieldMapper::new(config.datetime_formats.clone()).map_table(&detail_table)?;
    if records.is_empty() {
        return Err(ImportError::NoMatchingData("客户明细表格没有数据行".to_string()));
    }

    let events =
        OperationEventFieldMapper::new(config.datetime_formats.clone()).map_table(&log_table)?;
    if events.is_empty() {
        warn!("查询结果-运单号表格没有数据行，全部记录将标记为无入库");
    }

    let annotator = JoinAnnotator::new(config.intake_keywords.clone());
    Ok(annotator.annotate(records, events))
}

/// 时间差值明细汇总
pub fn run_joiner(params: &JoinerParams, config: &PipelineConfig) -> ImportResult<JoinerReport> {
    let validator = ParamValidator;
    let output_dir = validator.output_dir(&params.output_dir)?;
    let date_prefix = validator.date_prefix(&params.date_prefix)?;

    let records = build_annotated(params, config)?;

    let file_name = PipelineConfig::output_file_name(&date_prefix, &config.joiner_output_suffix);
    let output_path = validator.output_file(&output_dir, &file_name);
    let sheet = SheetData::from_annotated(&config.joiner_sheet_name, &records);
    ExcelReportWriter.write(&[sheet], &output_path)?;

    let report = JoinerReport {
        output_path,
        records,
    };
    info!(
        path = %report.output_path.display(),
        records = report.records.len(),
        after_intake = report.count(SignBucket::AfterIntake),
        before_intake = report.count(SignBucket::BeforeIntake),
        no_intake = report.count(SignBucket::NoIntake),
        "时间差值明细已生成"
    );
    Ok(report)
}

/// 入口边界：所有错误转换为失败结果
pub fn run_joiner_outcome(params: &JoinerParams, config: &PipelineConfig) -> RunOutcome {
    RunOutcome::from_result(run_joiner(params, config), |report| {
        format!("文件已成功保存到: {}", report.output_path.display())
    })
}

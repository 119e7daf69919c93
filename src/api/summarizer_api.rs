// ==========================================
// 进线-入库时间差值分析 - 时间差值明细分析 API
// ==========================================
// 流程:
// 1. 读取「客户-时间差值明细」
// 2. 按 (省区, 网点, K码, 客户) 分组透视两个维度
// 3. 写出两个工作表到 {date_prefix}-客户-时间差值明细分析.xlsx
// ==========================================

use crate::api::joiner_api::{load_options, run_joiner, JoinerParams};
use crate::api::outcome::RunOutcome;
use crate::api::validator::ParamValidator;
use crate::config::PipelineConfig;
use crate::domain::summary::{SummaryInputRecord, SummaryTable};
use crate::domain::types::{RangeBucket, SignBucket};
use crate::engine::PivotAggregator;
use crate::exporter::{ExcelReportWriter, SheetData};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::{load_table, AnnotatedFieldMapper, FieldMapper};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// 时间差值明细分析参数
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummarizerParams {
    /// 「客户-时间差值明细」文件路径
    pub input_path: String,
    pub output_dir: String,
    pub date_prefix: String,
    #[serde(default)]
    pub csv_copy: bool,
}

/// 时间差值明细分析结果
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    pub output_path: PathBuf,
    /// 入库进线分析
    pub sign_table: SummaryTable,
    /// 入库后催件时间分析
    pub range_table: SummaryTable,
}

/// 两个维度透视并写出
pub fn summarize_records(
    records: &[SummaryInputRecord],
    output_dir: &Path,
    date_prefix: &str,
    config: &PipelineConfig,
) -> ImportResult<SummaryReport> {
    if records.is_empty() {
        return Err(ImportError::NoMatchingData("时间差值明细没有数据行".to_string()));
    }

    let aggregator = PivotAggregator;
    let sign_table = aggregator.pivot::<SignBucket>(records);
    let range_table = aggregator.pivot::<RangeBucket>(records);

    let file_name = PipelineConfig::output_file_name(date_prefix, &config.summary_output_suffix);
    let output_path = ParamValidator.output_file(output_dir, &file_name);
    ExcelReportWriter.write(
        &[
            SheetData::from_summary(&config.sign_sheet_name, &sign_table),
            SheetData::from_summary(&config.range_sheet_name, &range_table),
        ],
        &output_path,
    )?;

    info!(
        path = %output_path.display(),
        groups = sign_table.rows.len(),
        records = records.len(),
        "时间差值明细分析已生成"
    );
    Ok(SummaryReport {
        output_path,
        sign_table,
        range_table,
    })
}

/// 时间差值明细分析
pub fn run_summarizer(
    params: &SummarizerParams,
    config: &PipelineConfig,
) -> ImportResult<SummaryReport> {
    let validator = ParamValidator;
    let input_path = validator.input_file(&params.input_path, "客户-时间差值明细文件")?;
    let output_dir = validator.output_dir(&params.output_dir)?;
    let date_prefix = validator.date_prefix(&params.date_prefix)?;

    let table = load_table(
        &input_path.to_string_lossy(),
        &load_options(&input_path, params.csv_copy),
    )?;
    let records = AnnotatedFieldMapper.map_table(&table)?;

    summarize_records(&records, &output_dir, &date_prefix, config)
}

pub fn run_summarizer_outcome(params: &SummarizerParams, config: &PipelineConfig) -> RunOutcome {
    RunOutcome::from_result(run_summarizer(params, config), |report| {
        format!("分析完成，结果已保存到: {}", report.output_path.display())
    })
}

// ==========================================
// 一次性执行两个阶段
// ==========================================

/// 两阶段合并执行结果
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub detail_path: PathBuf,
    pub summary: SummaryReport,
}

/// 先生成时间差值明细，再直接用内存中的明细做分析
pub fn run_pipeline(
    params: &JoinerParams,
    config: &PipelineConfig,
) -> ImportResult<PipelineReport> {
    let joiner = run_joiner(params, config)?;

    let validator = ParamValidator;
    let output_dir = validator.output_dir(&params.output_dir)?;
    let date_prefix = validator.date_prefix(&params.date_prefix)?;

    let inputs: Vec<SummaryInputRecord> =
        joiner.records.iter().map(SummaryInputRecord::from).collect();
    let summary = summarize_records(&inputs, &output_dir, &date_prefix, config)?;

    Ok(PipelineReport {
        detail_path: joiner.output_path,
        summary,
    })
}

pub fn run_pipeline_outcome(params: &JoinerParams, config: &PipelineConfig) -> RunOutcome {
    RunOutcome::from_result(run_pipeline(params, config), |report| {
        format!(
            "明细已保存到: {}；分析已保存到: {}",
            report.detail_path.display(),
            report.summary.output_path.display()
        )
    })
}

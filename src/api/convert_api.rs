// ==========================================
// 进线-入库时间差值分析 - Excel 批量转 CSV API
// ==========================================
// 规则:
// - 仅处理 .xlsx / .xls，其他文件跳过
// - 单个文件失败只记录，不中断其余文件
// ==========================================

use crate::api::outcome::RunOutcome;
use crate::api::validator::ParamValidator;
use crate::exporter::CsvReportWriter;
use crate::importer::error::ImportResult;
use crate::importer::{ExcelParser, FileParser};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// 批量转换结果
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConvertReport {
    pub converted: Vec<PathBuf>,
    pub skipped: Vec<String>,
    /// (文件名, 失败原因)
    pub failed: Vec<(String, String)>,
}

fn is_excel(path: &Path) -> bool {
    matches!(
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .as_deref(),
        Some("xlsx") | Some("xls")
    )
}

/// 转换文件夹内所有 Excel 文件
pub fn convert_folder(input_dir: &str, output_dir: &str) -> ImportResult<ConvertReport> {
    let validator = ParamValidator;
    let input_dir = validator.input_dir(input_dir, "输入文件夹")?;
    let output_dir = validator.output_dir(output_dir)?;
    std::fs::create_dir_all(&output_dir)?;

    let mut entries: Vec<PathBuf> = std::fs::read_dir(&input_dir)?
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.is_file())
        .collect();
    entries.sort();

    let total = entries.len();
    info!(dir = %input_dir.display(), total, "开始转换文件夹");

    let mut report = ConvertReport::default();
    for (idx, path) in entries.into_iter().enumerate() {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        info!("正在处理文件 {}/{}: {}", idx + 1, total, file_name);

        if !is_excel(&path) {
            info!(file = %file_name, "跳过非 Excel 文件");
            report.skipped.push(file_name);
            continue;
        }

        let target = output_dir.join(Path::new(&file_name).with_extension("csv"));
        let result = ExcelParser::default()
            .parse_to_raw_table(&path)
            .and_then(|table| CsvReportWriter.write_table(&table, &target));

        match result {
            Ok(()) => {
                info!(file = %file_name, target = %target.display(), "转换完成");
                report.converted.push(target);
            }
            Err(e) => {
                warn!(file = %file_name, error = %e, "转换失败");
                report.failed.push((file_name, e.to_string()));
            }
        }
    }

    Ok(report)
}

pub fn convert_folder_outcome(input_dir: &str, output_dir: &str) -> RunOutcome {
    RunOutcome::from_result(convert_folder(input_dir, output_dir), |report| {
        format!(
            "转换完成: 成功 {} 个，跳过 {} 个，失败 {} 个",
            report.converted.len(),
            report.skipped.len(),
            report.failed.len()
        )
    })
}

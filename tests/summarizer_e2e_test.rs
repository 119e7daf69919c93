// ==========================================
// 时间差值明细分析端到端测试
// ==========================================
// 覆盖: 明细表 -> 两个维度透视 -> 双工作表输出 -> 回读校验

use intake_delay::api::{
    run_pipeline, run_summarizer, run_summarizer_outcome, JoinerParams, SummarizerParams,
};
use intake_delay::config::PipelineConfig;
use intake_delay::importer::RawTable;
use intake_delay::ImportError;

use test_helpers::{find_row, read_sheet, share_value, Workspace};

const DETAIL_HEADERS: &str = "省区名称,单号,揽收网点名称,K码,客户名称,进线时间,入库时间,\
进线-入库时间差,入库前后,入库后进线-进线与入库时间差分布区间,工单小类,投诉/催查内容";

const SIGN_SHEET: &str = "入库进线分析";
const RANGE_SHEET: &str = "入库后催件时间分析";

fn default_config() -> PipelineConfig {
    PipelineConfig::default()
}

fn summarizer_params(ws: &Workspace, input: String) -> SummarizerParams {
    SummarizerParams {
        input_path: input,
        output_dir: ws.output_dir_str(),
        date_prefix: "20240601".to_string(),
        csv_copy: false,
    }
}

/// 网点 A: 入库后 3（1天/2天/超3天各 1）, 入库前 1；网点 B: 无入库 2
fn write_detail(ws: &Workspace) -> String {
    ws.write_csv(
        "客户-时间差值明细.csv",
        DETAIL_HEADERS,
        &[
            "浙江,1,A,K001,客户甲,2024-06-01 10:00:00,2024-06-01 09:00:00,0.04,入库后,1天以内,催件,",
            "浙江,2,A,K001,客户甲,2024-06-02 10:00:00,2024-06-01 09:00:00,1.04,入库后,2天以内,催件,",
            "浙江,3,A,K001,客户甲,2024-06-09 10:00:00,2024-06-01 09:00:00,8.04,入库后,超过3天,催件,",
            "浙江,4,A,K001,客户甲,2024-06-01 10:00:00,2024-06-03 09:00:00,-1.96,入库前,,催件,",
            "浙江,5,B,K002,客户乙,2024-06-01 10:00:00,,,无入库,,投诉,",
            "浙江,6,B,K002,客户乙,2024-06-01 11:00:00,,,无入库,,投诉,",
        ],
    )
}

fn count(row: &std::collections::HashMap<String, String>, column: &str) -> u64 {
    row[column].parse().expect("计数列应为整数")
}

/// 每个计数列在总计行的值等于各分组之和
fn assert_totals_are_column_sums(sheet: &RawTable, count_columns: &[&str]) {
    let total = find_row(sheet, "揽收网点名称", "总计");
    for column in count_columns.iter().chain(std::iter::once(&"总计")) {
        let sum: u64 = sheet
            .rows
            .iter()
            .filter(|r| r["揽收网点名称"] != "总计")
            .map(|r| count(r, column))
            .sum();
        assert_eq!(count(total, column), sum, "列 {} 的总计不等于各行之和", column);
    }
}

#[test]
fn test_summarizer_full_flow() {
    intake_delay::logging::init_test();
    let ws = Workspace::new();
    let input = write_detail(&ws);

    let report = run_summarizer(&summarizer_params(&ws, input), &default_config())
        .expect("时间差值明细分析失败");

    let expected = ws.output_dir().join("20240601-客户-时间差值明细分析.xlsx");
    assert_eq!(report.output_path, expected);

    // 内存结果
    assert_eq!(report.sign_table.rows.len(), 2);
    assert_eq!(report.sign_table.total_row.counts, vec![2, 1, 3]);
    assert_eq!(
        report.sign_table.total_row.shares,
        vec!["33.33%", "16.67%", "50.00%"]
    );
    assert_eq!(report.range_table.total_row.counts, vec![1, 1, 0, 1]);
    assert_eq!(report.range_table.total_row.total, 3);
}

#[test]
fn test_sign_sheet_layout() {
    let ws = Workspace::new();
    let input = write_detail(&ws);
    let report = run_summarizer(&summarizer_params(&ws, input), &default_config()).unwrap();

    let sheet = read_sheet(&report.output_path, SIGN_SHEET);
    assert_eq!(
        sheet.headers,
        vec![
            "揽收网点名称", "K码", "客户名称", "无入库进线", "无入库占比", "入库前进线",
            "入库前占比", "入库后进线", "入库后占比", "总计",
        ]
    );
    // 两个分组 + 总计行，总计行在最后
    assert_eq!(sheet.len(), 3);
    assert_eq!(sheet.rows[2]["揽收网点名称"], "总计");
    assert_eq!(sheet.rows[2]["K码"], "");
    assert_eq!(sheet.rows[2]["客户名称"], "");

    let a = find_row(&sheet, "揽收网点名称", "A");
    assert_eq!(count(a, "入库后进线"), 3);
    assert_eq!(count(a, "入库前进线"), 1);
    assert_eq!(count(a, "无入库进线"), 0);
    assert_eq!(count(a, "总计"), 4);
    assert_eq!(a["入库后占比"], "75.00%");
    assert_eq!(a["无入库占比"], "0.00%");

    let b = find_row(&sheet, "揽收网点名称", "B");
    assert_eq!(b["无入库占比"], "100.00%");

    assert_totals_are_column_sums(&sheet, &["无入库进线", "入库前进线", "入库后进线"]);
}

#[test]
fn test_range_sheet_layout() {
    let ws = Workspace::new();
    let input = write_detail(&ws);
    let report = run_summarizer(&summarizer_params(&ws, input), &default_config()).unwrap();

    let sheet = read_sheet(&report.output_path, RANGE_SHEET);
    assert_eq!(
        sheet.headers,
        vec![
            "揽收网点名称", "K码", "客户名称", "1天以内", "1天以内占比", "2天以内",
            "2天以内占比", "3天以内", "3天以内占比", "超过3天", "超3天占比", "总计",
        ]
    );

    let a = find_row(&sheet, "揽收网点名称", "A");
    assert_eq!(count(a, "总计"), 3);
    assert_eq!(count(a, "3天以内"), 0);

    // 每行占比之和约为 100%
    let sum: f64 = ["1天以内占比", "2天以内占比", "3天以内占比", "超3天占比"]
        .iter()
        .map(|c| share_value(&a[*c]))
        .sum();
    assert!((sum - 100.0).abs() < 0.05);

    // B 没有入库后记录：计数全 0，占比全 0.00%
    let b = find_row(&sheet, "揽收网点名称", "B");
    assert_eq!(count(b, "总计"), 0);
    assert_eq!(b["1天以内占比"], "0.00%");
    assert_eq!(b["超3天占比"], "0.00%");

    assert_totals_are_column_sums(&sheet, &["1天以内", "2天以内", "3天以内", "超过3天"]);
}

#[test]
fn test_groups_sorted_by_key() {
    let ws = Workspace::new();
    let input = ws.write_csv(
        "明细.csv",
        DETAIL_HEADERS,
        &[
            "浙江,1,C,K003,客户丙,2024-06-01 10:00:00,,,无入库,,催件,",
            "浙江,2,A,K001,客户甲,2024-06-01 10:00:00,,,无入库,,催件,",
            "浙江,3,B,K002,客户乙,2024-06-01 10:00:00,,,无入库,,催件,",
        ],
    );

    let report = run_summarizer(&summarizer_params(&ws, input), &default_config()).unwrap();

    let stations: Vec<&str> = report
        .sign_table
        .rows
        .iter()
        .map(|r| r.key.station.as_str())
        .collect();
    assert_eq!(stations, vec!["A", "B", "C"]);
}

#[test]
fn test_missing_bucket_column() {
    let ws = Workspace::new();
    let input = ws.write_csv(
        "明细.csv",
        "省区名称,揽收网点名称,K码,客户名称,入库前后",
        &["浙江,A,K001,客户甲,入库后"],
    );

    let err = run_summarizer(&summarizer_params(&ws, input), &default_config()).unwrap_err();

    match err {
        ImportError::MissingRequiredColumn { columns, .. } => {
            assert_eq!(columns, vec!["入库后进线-进线与入库时间差分布区间".to_string()]);
        }
        other => panic!("期望 MissingRequiredColumn，实际: {:?}", other),
    }
}

#[test]
fn test_empty_detail_fails_with_message() {
    let ws = Workspace::new();
    let input = ws.write_csv("明细.csv", DETAIL_HEADERS, &[]);

    let outcome = run_summarizer_outcome(&summarizer_params(&ws, input), &default_config());

    assert!(!outcome.success);
    assert!(outcome.message.contains("没有可处理的数据"));
}

#[test]
fn test_pipeline_matches_two_stage_run() {
    let ws = Workspace::new();
    let detail = ws.write_customer_detail(&[
        "浙江,1001,杭州西湖,K001,某电商,2024-01-05 10:00:00,催件,,",
        "浙江,1002,杭州西湖,K001,某电商,2024-01-05 10:00:00,催件,,",
    ]);
    let log = ws.write_operation_log(&["1002,2024-01-03 08:00:00,入库确认"]);
    let params = JoinerParams {
        customer_detail_path: detail,
        operation_log_path: log,
        output_dir: ws.output_dir_str(),
        date_prefix: "20240105".to_string(),
        csv_copy: false,
    };

    let pipeline = run_pipeline(&params, &PipelineConfig::default()).expect("一次执行失败");

    assert!(pipeline.detail_path.exists());
    assert!(pipeline.summary.output_path.exists());
    assert_eq!(pipeline.summary.sign_table.total_row.counts, vec![1, 0, 1]);
    assert_eq!(pipeline.summary.range_table.total_row.counts, vec![0, 0, 1, 0]);

    // 分阶段：用生成的明细文件再跑一次分析，结果一致
    let staged = run_summarizer(
        &SummarizerParams {
            input_path: pipeline.detail_path.to_string_lossy().to_string(),
            output_dir: ws.path().join("staged").to_string_lossy().to_string(),
            date_prefix: "20240105".to_string(),
            csv_copy: false,
        },
        &PipelineConfig::default(),
    )
    .unwrap();

    assert_eq!(staged.sign_table, pipeline.summary.sign_table);
    assert_eq!(staged.range_table, pipeline.summary.range_table);
}

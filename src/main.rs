// ==========================================
// 进线-入库时间差值分析 - 命令行主入口
// ==========================================
// 子命令:
// - join: 时间差值明细汇总
// - summarize: 时间差值明细分析
// - pipeline: 两个阶段一次执行
// - convert: 文件夹内 Excel 批量转 CSV
// 未在命令行给出的参数会提示从标准输入读取
// ==========================================

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use intake_delay::api::{
    convert_folder_outcome, run_joiner_outcome, run_pipeline_outcome, run_summarizer_outcome,
    JoinerParams, RunOutcome, SummarizerParams,
};
use intake_delay::app::Prompter;
use intake_delay::config::PipelineConfig;
use intake_delay::logging;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

const PROMPT_CUSTOMER_DETAIL: &str = "请输入“客户明细”表格的路径: ";
const PROMPT_OPERATION_LOG: &str = "请输入“查询结果-运单号”表格的路径: ";
const PROMPT_OUTPUT_DIR: &str = "请输入输出文件夹的绝对路径：";
const PROMPT_DATE_PREFIX: &str = "请输入输出文件的日期前缀：";
const PROMPT_DETAIL_FILE: &str = "请输入“客户-时间差值明细”文件路径：";
const PROMPT_EXCEL_DIR: &str = "请输入包含Excel文件的文件夹路径：";
const PROMPT_CSV_DIR: &str = "请输入输出CSV文件的文件夹路径：";

/// 进线-入库时间差值分析
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// 以 JSON 输出 {success, message}
    #[arg(long, global = true)]
    json: bool,

    /// JSON 配置文件，覆盖默认参数
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Excel 输入时在源文件旁转存同名 CSV
    #[arg(long, global = true)]
    csv_copy: bool,

    /// 日志以 JSON 行格式输出到 stderr
    #[arg(long, global = true)]
    log_json: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 关联客户明细与运单操作记录，生成时间差值明细
    Join(JoinArgs),
    /// 按网点 / K码 / 客户透视时间差值明细
    Summarize {
        /// 「客户-时间差值明细」文件
        #[arg(short, long)]
        input: Option<String>,
        #[arg(short, long)]
        output_dir: Option<String>,
        #[arg(short, long)]
        date_prefix: Option<String>,
    },
    /// 生成明细后直接分析
    Pipeline(JoinArgs),
    /// 把文件夹内的 Excel 文件转为 CSV
    Convert {
        #[arg(short, long)]
        input_dir: Option<String>,
        #[arg(short, long)]
        output_dir: Option<String>,
    },
}

#[derive(clap::Args, Debug)]
struct JoinArgs {
    /// 「客户明细」表格
    #[arg(short, long)]
    customer_detail: Option<String>,
    /// 「查询结果-运单号」表格
    #[arg(short = 'l', long)]
    operation_log: Option<String>,
    #[arg(short, long)]
    output_dir: Option<String>,
    #[arg(short, long)]
    date_prefix: Option<String>,
}

impl JoinArgs {
    fn into_params<R: BufRead, W: Write>(
        self,
        prompter: &mut Prompter<R, W>,
        csv_copy: bool,
    ) -> Result<JoinerParams> {
        Ok(JoinerParams {
            customer_detail_path: prompter.resolve(self.customer_detail, PROMPT_CUSTOMER_DETAIL)?,
            operation_log_path: prompter.resolve(self.operation_log, PROMPT_OPERATION_LOG)?,
            output_dir: prompter.resolve(self.output_dir, PROMPT_OUTPUT_DIR)?,
            date_prefix: prompter.resolve(self.date_prefix, PROMPT_DATE_PREFIX)?,
            csv_copy,
        })
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<PipelineConfig> {
    match path {
        Some(path) => PipelineConfig::from_json_file(path)
            .with_context(|| format!("无法加载配置文件: {}", path.display())),
        None => Ok(PipelineConfig::default()),
    }
}

fn run(cli: Cli) -> Result<RunOutcome> {
    let config = load_config(cli.config.as_ref())?;
    let mut prompter = Prompter::stdio();

    let outcome = match cli.command {
        Commands::Join(args) => {
            let params = args.into_params(&mut prompter, cli.csv_copy)?;
            run_joiner_outcome(&params, &config)
        }
        Commands::Summarize {
            input,
            output_dir,
            date_prefix,
        } => {
            let params = SummarizerParams {
                input_path: prompter.resolve(input, PROMPT_DETAIL_FILE)?,
                output_dir: prompter.resolve(output_dir, PROMPT_OUTPUT_DIR)?,
                date_prefix: prompter.resolve(date_prefix, PROMPT_DATE_PREFIX)?,
                csv_copy: cli.csv_copy,
            };
            run_summarizer_outcome(&params, &config)
        }
        Commands::Pipeline(args) => {
            let params = args.into_params(&mut prompter, cli.csv_copy)?;
            run_pipeline_outcome(&params, &config)
        }
        Commands::Convert {
            input_dir,
            output_dir,
        } => {
            let input_dir = prompter.resolve(input_dir, PROMPT_EXCEL_DIR)?;
            let output_dir = prompter.resolve(output_dir, PROMPT_CSV_DIR)?;
            convert_folder_outcome(&input_dir, &output_dir)
        }
    };

    Ok(outcome)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.log_json {
        logging::init_json();
    } else {
        logging::init();
    }

    tracing::info!("{} v{}", intake_delay::APP_NAME, intake_delay::VERSION);

    let json = cli.json;
    let outcome = run(cli).unwrap_or_else(|e| RunOutcome::fail(format!("{:#}", e)));

    if json {
        match serde_json::to_string(&outcome) {
            Ok(text) => println!("{}", text),
            Err(e) => eprintln!("结果序列化失败: {}", e),
        }
    } else if outcome.success {
        println!("{}", outcome.message);
    } else {
        eprintln!("发生错误: {}", outcome.message);
    }

    if outcome.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

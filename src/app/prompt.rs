// ==========================================
// 进线-入库时间差值分析 - 交互式参数输入
// ==========================================
// 规则:
// - 命令行已给出的参数直接使用
// - 缺省参数打印提示后读取一行
// - 读取的内容去掉首尾空白和引号
// ==========================================

use crate::importer::data_cleaner::DataCleaner;
use std::io::{self, BufRead, Write};

/// 打印提示并读取一行输入
pub fn prompt_value<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> io::Result<String> {
    write!(writer, "{}", prompt)?;
    writer.flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(DataCleaner.strip_path_quotes(&line))
}

/// 带输入输出句柄的参数补齐器
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// 参数已给出则直接返回，否则提示输入
    pub fn resolve(&mut self, arg: Option<String>, prompt: &str) -> io::Result<String> {
        match arg {
            Some(value) => Ok(DataCleaner.strip_path_quotes(&value)),
            None => prompt_value(&mut self.reader, &mut self.writer, prompt),
        }
    }
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    /// 标准输入输出
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

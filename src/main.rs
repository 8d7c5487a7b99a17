//! rspixelscript 命令行：解析脚本文件并输出到标准输出

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use rspixelscript::{ConfigManager, GlobalConfig, OutputFormat, ScriptLoader};

/// DICOM像素匿名化脚本解析工具
#[derive(Debug, Parser)]
#[command(name = "rspixelscript", version, about)]
struct Cli {
    /// 脚本文件路径
    script: PathBuf,

    /// 输出格式
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Generator)]
    format: OutputFormat,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> GlobalConfig {
        ConfigManager::custom()
            .script_path(self.script)
            .output_format(self.format)
            .verbose(self.verbose)
            .build()
    }
}

/// 日志写到 stderr，stdout 只留渲染结果
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Cli::parse().into_config();
    init_tracing(config.verbose);
    debug!("启动配置：{:?}", config);

    let signature_set = ScriptLoader::load(&config)
        .await
        .with_context(|| format!("无法加载脚本：{}", config.script_path.display()))?;

    let output = match config.output_format {
        OutputFormat::Generator => signature_set.render_as_generator_literal(),
        OutputFormat::Debug => signature_set.render_debug(),
        OutputFormat::Json => signature_set.to_pretty_json()?,
    };
    println!("{}", output);

    Ok(())
}

//! 全局配置管理,存储所有可配置项

use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// 生成器列表字面量（交给下游脚本解释器使用）
    #[default]
    Generator,
    /// 诊断输出：规则 + 区域列表 + 分隔线
    Debug,
    /// JSON 数组
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Generator => write!(f, "generator"),
            OutputFormat::Debug => write!(f, "debug"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// 全局配置
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    // 像素匿名化脚本路径
    pub script_path: PathBuf,
    // 输出格式
    pub output_format: OutputFormat,
    // 是否启用详细日志
    pub verbose: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            script_path: PathBuf::from("DicomPixelAnonymizer.script"),
            output_format: OutputFormat::default(),
            verbose: false,
        }
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GlobalConfig::default(),
        }
    }

    pub fn script_path(mut self, path: PathBuf) -> Self {
        self.config.script_path = path;
        self
    }

    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.config.output_format = format;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}

//! rspixelscript - DICOM像素匿名化脚本解析与签名匹配
//!
//! 脚本由若干块组成：`{匹配规则}` 后跟零个或多个 `(区域)`。
//! 解析后得到有序签名列表，查询时返回第一个规则命中记录的签名。

// 导出全局错误类型
pub use self::error::{PixelScriptError, PsResult};

// 导出配置模块
pub use self::config::{GlobalConfig, ConfigManager, CustomConfigBuilder, OutputFormat};

// 导出脚本模块核心接口
pub use self::script::{Signature, RegionSpec, ScriptParser, ScriptLoader};

// 导出选择模块核心接口
pub use self::selector::{MatchRecord, SignatureSet};

// 导出渲染模块核心接口
pub use self::render::{DebugRenderer, GeneratorLiteralRenderer};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod script;
pub mod selector;
pub mod render;
pub mod utils;

//! 工具模块：日志格式化等辅助函数
pub mod log_format;

pub use self::log_format::{preview_snippet, compress_region_list, SnippetPreview};

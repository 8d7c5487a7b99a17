//! 脚本模块：负责脚本的数据模型定义、解析、加载
pub mod model;
pub mod parser;
pub mod loader;

// 导出核心接口
pub use self::model::{Signature, RegionSpec};
pub use self::parser::ScriptParser;
pub use self::loader::ScriptLoader;

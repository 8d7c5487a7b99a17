//! 渲染模块：签名列表的文本输出格式，与解析互不依赖
pub mod debug;
pub mod generator;

pub use self::debug::DebugRenderer;
pub use self::generator::GeneratorLiteralRenderer;

//! 选择模块：签名集合与记录匹配
pub mod record;
pub mod signature_set;

// 导出核心接口
pub use self::record::MatchRecord;
pub use self::signature_set::SignatureSet;

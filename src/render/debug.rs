//! 诊断输出
//! 每个签名输出：规则原文、区域列表、分隔线

use crate::script::Signature;

/// 签名之间的分隔线
pub const SEPARATOR: &str = "-------------";

/// 诊断输出渲染器
pub struct DebugRenderer;

impl DebugRenderer {
    /// 按顺序渲染所有签名
    pub fn render(signatures: &[Signature]) -> String {
        signatures.iter().map(Self::render_signature).collect()
    }

    /// 渲染单个签名
    pub fn render_signature(signature: &Signature) -> String {
        format!(
            "{}\n[{}]\n{}\n",
            signature.rule_text,
            signature.regions.join(", "),
            SEPARATOR
        )
    }
}

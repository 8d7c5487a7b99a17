//! 脚本数据模型定义
//! 仅存储签名数据，无任何业务逻辑，支持序列化/反序列化

use std::fmt;
use serde::{Deserialize, Serialize};

/// 区域描述（原始文本，几何语义由下游负责）
pub type RegionSpec = String;

/// 签名：一条匹配规则 + 其后出现的区域列表
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Signature {
    /// 匹配规则原文（不含外层花括号）
    pub rule_text: String,
    /// 区域原文列表（不含外层圆括号），保持源文本中的出现顺序
    #[serde(default)]
    pub regions: Vec<RegionSpec>,
}

impl Signature {
    /// 创建无区域的签名
    pub fn new(rule_text: impl Into<String>) -> Self {
        Self {
            rule_text: rule_text.into(),
            regions: Vec::new(),
        }
    }

    /// 创建带区域的签名
    pub fn with_regions(rule_text: impl Into<String>, regions: Vec<RegionSpec>) -> Self {
        Self {
            rule_text: rule_text.into(),
            regions,
        }
    }

    /// 追加区域（追加顺序即应用顺序）
    pub fn add_region(&mut self, region: impl Into<RegionSpec>) {
        self.regions.push(region.into());
    }

    pub fn rule_text(&self) -> &str {
        &self.rule_text
    }

    pub fn regions(&self) -> &[RegionSpec] {
        &self.regions
    }
}

// ======== 为 Signature 实现 Display trait（单个签名的诊断块） ========
impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::render::DebugRenderer::render_signature(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_region_keeps_order() {
        let mut sig = Signature::new("Modality.equals(\"CT\")");
        sig.add_region("0,0,100,20");
        sig.add_region("0,480,100,32");

        assert_eq!(sig.rule_text(), "Modality.equals(\"CT\")");
        assert_eq!(sig.regions(), &["0,0,100,20".to_string(), "0,480,100,32".to_string()]);
    }

    #[test]
    fn test_display_signature() {
        let sig = Signature::with_regions("A", vec!["r1".to_string(), "r2".to_string()]);
        assert_eq!(sig.to_string(), "A\n[r1, r2]\n-------------\n");
    }

    #[test]
    fn test_deserialize_without_regions() {
        let sig: Signature = serde_json::from_str(r#"{"rule_text":"A"}"#).unwrap();
        assert_eq!(sig, Signature::new("A"));
    }
}

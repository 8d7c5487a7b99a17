//! 签名集合：持有解析后的有序签名列表，按首个命中原则选择签名

use std::fmt;
use std::slice::Iter;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::record::MatchRecord;
use crate::error::PsResult;
use crate::render::{DebugRenderer, GeneratorLiteralRenderer};
use crate::script::{RegionSpec, ScriptParser, Signature};
use crate::utils::preview_snippet;

/// 有序签名集合，构造后只读
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignatureSet {
    signatures: Vec<Signature>,
}

impl SignatureSet {
    /// 解析脚本文本构造集合
    pub fn parse(text: &str) -> Self {
        Self::from_signatures(ScriptParser::parse(text))
    }

    /// 由已有签名列表构造（保持传入顺序）
    pub fn from_signatures(signatures: Vec<Signature>) -> Self {
        Self { signatures }
    }

    pub fn signatures(&self) -> &[Signature] {
        &self.signatures
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Signature> {
        self.signatures.iter()
    }

    /// 返回第一个规则命中记录的签名
    ///
    /// 线性扫描，命中即停止；集合为空或无命中时返回 `Ok(None)`。
    /// 记录求值出错时直接返回该错误，后续签名不再尝试。
    pub fn find_matching_signature<R>(&self, record: &R) -> Result<Option<&Signature>, R::Error>
    where
        R: MatchRecord + ?Sized,
    {
        for (index, signature) in self.signatures.iter().enumerate() {
            if record.matches(&signature.rule_text)? {
                debug!(
                    "签名命中：#{}，规则={}，区域数：{}",
                    index,
                    preview_snippet(&signature.rule_text, 60),
                    signature.regions.len()
                );
                return Ok(Some(signature));
            }
        }
        debug!("无签名命中，已尝试{}条规则", self.signatures.len());
        Ok(None)
    }

    /// 返回第一个命中签名的区域列表
    pub fn find_matching_regions<R>(&self, record: &R) -> Result<Option<&[RegionSpec]>, R::Error>
    where
        R: MatchRecord + ?Sized,
    {
        Ok(self.find_matching_signature(record)?.map(Signature::regions))
    }

    /// 诊断输出：规则、区域列表、分隔线
    pub fn render_debug(&self) -> String {
        DebugRenderer::render(&self.signatures)
    }

    /// 生成器列表字面量输出
    pub fn render_as_generator_literal(&self) -> String {
        GeneratorLiteralRenderer::render(&self.signatures)
    }

    /// JSON 输出（格式化）
    pub fn to_pretty_json(&self) -> PsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<'a> IntoIterator for &'a SignatureSet {
    type Item = &'a Signature;
    type IntoIter = Iter<'a, Signature>;

    fn into_iter(self) -> Self::IntoIter {
        self.signatures.iter()
    }
}

// ======== 为 SignatureSet 实现 Display trait（等同诊断输出） ========
impl fmt::Display for SignatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_debug())
    }
}

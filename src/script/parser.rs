//! 像素脚本解析器
//! 将脚本文本切分为 {规则} 与 (区域) 片段，构建有序签名列表
//!
//! 语法为非嵌套括号：每个片段在开括号之后遇到的第一个闭括号处结束，
//! 不平衡的括号只会让后续片段无法被识别，不会报错。

use std::time::Instant;
use once_cell::sync::Lazy;
use regex::{Match, Regex};
use tracing::{debug, trace};

use super::model::Signature;
use crate::utils::{compress_region_list, preview_snippet};

/// 规则片段：{...}，内容中不含 }
static RULE_SPAN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{[^}]*\}").unwrap());

/// 区域片段：(...)，内容中不含 )
static REGION_SPAN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\([^)]*\)").unwrap());

/// 日志中规则预览的最大长度
const RULE_PREVIEW_LEN: usize = 60;

/// 脚本解析器
pub struct ScriptParser;

impl ScriptParser {
    /// 解析脚本文本，返回按出现顺序排列的签名列表
    ///
    /// - 第一个规则之前的文本（包括其中的区域）被忽略
    /// - 规则与下一个规则之间没有区域时，得到空区域列表
    /// - 片段内容原样保留，不去除空白，也不做校验
    pub fn parse(text: &str) -> Vec<Signature> {
        let start = Instant::now();
        let mut signatures = Vec::new();
        let mut rule_spans = RULE_SPAN_REGEX.find_iter(text).peekable();

        while let Some(rule_span) = rule_spans.next() {
            let mut signature = Signature::new(Self::strip_delimiters(&rule_span));

            // 区域只在当前规则结束到下一个规则开始之间查找
            let gap_end = rule_spans.peek().map_or(text.len(), |next| next.start());
            let gap = &text[rule_span.end()..gap_end];
            for region_span in REGION_SPAN_REGEX.find_iter(gap) {
                signature.add_region(Self::strip_delimiters(&region_span));
            }

            trace!(
                "解析签名 #{}：规则={}，区域={}",
                signatures.len(),
                preview_snippet(&signature.rule_text, RULE_PREVIEW_LEN),
                compress_region_list(&signature.regions)
            );
            signatures.push(signature);
        }

        debug!(
            "脚本解析完成，耗时{:?}，签名数：{}，区域总数：{}",
            start.elapsed(),
            signatures.len(),
            signatures.iter().map(|sig| sig.regions.len()).sum::<usize>()
        );

        signatures
    }

    /// 去掉片段首尾的单字节括号
    fn strip_delimiters<'a>(span: &Match<'a>) -> &'a str {
        let raw = span.as_str();
        &raw[1..raw.len() - 1]
    }
}

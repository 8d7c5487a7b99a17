//! 生成器列表字面量输出
//! 把签名列表写成记录列表字面量，供其他组件中的脚本解释器直接读取：
//!
//! ```text
//! [
//! {
//! 'rules' : (<rule_text>),
//! 'regions' : ((<r1>),(<r2>),)
//! },
//! ]
//! ```

use std::fmt::Write;

use crate::script::{RegionSpec, Signature};

/// 生成器字面量渲染器
pub struct GeneratorLiteralRenderer;

impl GeneratorLiteralRenderer {
    /// 渲染整个签名列表
    pub fn render(signatures: &[Signature]) -> String {
        let mut out = String::from("[\n");
        for signature in signatures {
            write!(
                out,
                "{{\n'rules' : ({}),\n'regions' : ({})\n}},\n",
                signature.rule_text,
                Self::render_regions(&signature.regions)
            )
            .unwrap();
        }
        out.push_str("]\n");
        out
    }

    /// 渲染区域列表：每个区域写成 `(<text>),`，空列表为空串
    pub fn render_regions(regions: &[RegionSpec]) -> String {
        regions.iter().map(|region| format!("({}),", region)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;
    use regex::Regex;
    use crate::script::ScriptParser;

    static RECORD_REGEX: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?m)^\{\n'rules' : \((.*)\),\n'regions' : \((.*)\)\n\},$").unwrap()
    });

    #[test]
    fn test_render_generator_literal() {
        let sigs = ScriptParser::parse("{A}(r1)(r2){B}");

        assert_eq!(
            GeneratorLiteralRenderer::render(&sigs),
            "[\n{\n'rules' : (A),\n'regions' : ((r1),(r2),)\n},\n{\n'rules' : (B),\n'regions' : ()\n},\n]\n"
        );
    }

    #[test]
    fn test_render_empty_list() {
        assert_eq!(GeneratorLiteralRenderer::render(&[]), "[\n]\n");
    }

    #[test]
    fn test_render_regions() {
        assert_eq!(GeneratorLiteralRenderer::render_regions(&[]), "");
        assert_eq!(
            GeneratorLiteralRenderer::render_regions(&["0,0,10,10".to_string()]),
            "(0,0,10,10),"
        );
    }

    #[test]
    fn test_regions_field_has_no_trailing_comma() {
        let sigs = ScriptParser::parse("{A}(r1)");
        let literal = GeneratorLiteralRenderer::render(&sigs);

        assert!(literal.contains("'regions' : ((r1),)\n}"));
        assert!(!literal.contains("'regions' : ((r1),),"));
    }

    #[test]
    fn test_multiline_rule_passes_through() {
        // 规则与区域中的空白（含换行）原样输出
        let sigs = ScriptParser::parse("{ A\n}( r1 )");

        assert_eq!(
            GeneratorLiteralRenderer::render(&sigs),
            "[\n{\n'rules' : ( A\n),\n'regions' : (( r1 ),)\n},\n]\n"
        );
        assert_eq!(
            crate::render::DebugRenderer::render(&sigs),
            " A\n\n[ r1 ]\n-------------\n"
        );
    }

    #[test]
    fn test_literal_preserves_structure() {
        let script = "{Modality.equals(\"CT\")}(0,0,512,20)(0,492,512,20)\n\
                      {Modality.equals(\"US\")}\n\
                      {Manufacturer.contains(\"Acme\")}(10,10,100,40)";
        let sigs = ScriptParser::parse(script);
        let literal = GeneratorLiteralRenderer::render(&sigs);

        // 从字面量中重新取出规则与区域数量
        let records: Vec<(String, usize)> = RECORD_REGEX
            .captures_iter(&literal)
            .map(|cap| (cap[1].to_string(), cap[2].matches("),").count()))
            .collect();

        let expected: Vec<(String, usize)> = sigs
            .iter()
            .map(|sig| (sig.rule_text.clone(), sig.regions.len()))
            .collect();
        assert_eq!(records, expected);
    }
}

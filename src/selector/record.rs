//! 匹配能力接口
//! 图像记录（如 DICOM 对象）对规则文本的求值由调用方实现，本库只负责调用

use std::convert::Infallible;

/// 可被规则匹配的记录
///
/// `matches` 返回的错误不会被转换或吞掉，原样交还给查询调用方。
pub trait MatchRecord {
    type Error;

    /// 判断记录是否满足规则文本
    fn matches(&self, rule_text: &str) -> Result<bool, Self::Error>;
}

/// 闭包即记录：便于桩对象和简单谓词
impl<F> MatchRecord for F
where
    F: Fn(&str) -> bool,
{
    type Error = Infallible;

    fn matches(&self, rule_text: &str) -> Result<bool, Self::Error> {
        Ok(self(rule_text))
    }
}

//! 脚本加载器
//! 负责从本地文件读取脚本文本并交给解析器

use std::borrow::Cow;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

use crate::config::GlobalConfig;
use crate::error::{PixelScriptError, PsResult};
use crate::selector::SignatureSet;

/// 脚本加载器
pub struct ScriptLoader;

impl ScriptLoader {
    /// 按配置中的脚本路径加载签名集合
    pub async fn load(config: &GlobalConfig) -> PsResult<SignatureSet> {
        Self::load_from_path(&config.script_path).await
    }

    /// 从指定路径加载签名集合（UTF-8 解码，非法字节替换为 U+FFFD）
    pub async fn load_from_path(path: impl AsRef<Path>) -> PsResult<SignatureSet> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(PixelScriptError::InvalidInput("脚本路径为空".to_string()));
        }

        let bytes = tokio::fs::read(path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => PixelScriptError::ScriptLoadError(format!(
                "脚本文件不存在：{}",
                path.display()
            )),
            _ => PixelScriptError::IoError(e),
        })?;

        let (text, replaced) = Self::decode_text(&bytes);
        if replaced {
            warn!("脚本文件包含非法UTF-8字节，已替换：{}", path.display());
        }

        let signature_set = SignatureSet::parse(&text);
        debug!(
            "脚本加载成功：{}，大小：{} 字节，签名数：{}",
            path.display(),
            bytes.len(),
            signature_set.len()
        );

        Ok(signature_set)
    }

    /// UTF-8 解码，返回文本及是否发生了非法字节替换
    /// 文件中本身就有的 U+FFFD 不算替换
    fn decode_text(bytes: &[u8]) -> (Cow<'_, str>, bool) {
        let text = String::from_utf8_lossy(bytes);
        let replaced = matches!(text, Cow::Owned(_));
        (text, replaced)
    }
}

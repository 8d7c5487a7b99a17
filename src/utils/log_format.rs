use std::fmt::{self, Write};

// ======================== 脚本片段日志预览 ========================
/// 规则/区域片段的单行预览：按空白切词后以单个空格拼接，超长截断并追加省略号
/// 规则常跨多行书写，首尾空白在预览中去掉
pub fn preview_snippet(text: &str, max_chars: usize) -> SnippetPreview<'_> {
    SnippetPreview { text, max_chars }
}

/// 惰性预览，仅在日志级别启用时才格式化
pub struct SnippetPreview<'a> {
    text: &'a str,
    max_chars: usize,
}

impl fmt::Display for SnippetPreview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut written = 0;
        for (index, word) in self.text.split_whitespace().enumerate() {
            if index > 0 {
                if written >= self.max_chars {
                    return f.write_str("…");
                }
                f.write_char(' ')?;
                written += 1;
            }
            for ch in word.chars() {
                if written >= self.max_chars {
                    return f.write_str("…");
                }
                f.write_char(ch)?;
                written += 1;
            }
        }
        Ok(())
    }
}

// ======================== 衍生：区域列表日志格式化 ========================
/// 区域列表日志格式化（基于preview_snippet）
/// 格式：[r1, r2, ...] (total: N)
pub fn compress_region_list(regions: &[String]) -> String {
    let total_count = regions.len();
    if total_count == 0 {
        return "[empty]".to_string();
    }

    const MAX_COUNT: usize = 5; // 最多显示5个区域
    const MAX_REGION_LEN: usize = 24; // 每个区域最多24字符

    let mut result = String::with_capacity(MAX_COUNT * (MAX_REGION_LEN + 2) + 20);
    result.push('[');

    for (idx, region) in regions.iter().take(MAX_COUNT).enumerate() {
        if idx > 0 {
            result.push_str(", ");
        }
        write!(result, "{}", preview_snippet(region, MAX_REGION_LEN)).unwrap();
    }

    if total_count > MAX_COUNT {
        write!(result, "… (total: {})", total_count).unwrap();
    }
    result.push(']');

    result
}

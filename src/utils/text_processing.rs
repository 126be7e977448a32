// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;

/// 标题标签匹配：大小写不敏感，非贪婪捕获第一对<title>标签
static TITLE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").unwrap());

/// 从HTML响应体中提取页面标题
///
/// 取第一对大小写不敏感的`<title>…</title>`标签的内部文本，将其中的
/// 换行、回车和制表符替换为单个空格，并去除首尾空白。未找到标签时
/// 返回空字符串。
pub fn extract_title(body: &str) -> String {
    let Some(captures) = TITLE_REGEX.captures(body) else {
        return String::new();
    };
    let raw = captures.get(1).map(|m| m.as_str()).unwrap_or("");
    raw.replace(['\n', '\r', '\t'], " ").trim().to_string()
}

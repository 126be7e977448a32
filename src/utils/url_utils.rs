// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 规范化基础URL，确保以单个斜杠结尾
pub fn normalize_base_url(base: &str) -> String {
    format!("{}/", base.trim_end_matches('/'))
}

/// 拼接完整扫描URL
///
/// 基础URL先规范化，路径去除全部前导斜杠后直接拼接。
pub fn join_scan_url(base: &str, path: &str) -> String {
    format!(
        "{}{}",
        normalize_base_url(base),
        path.trim_start_matches('/')
    )
}

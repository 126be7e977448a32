// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::url_utils;

/// 扫描任务
///
/// 描述一次待执行的探测：目标基础URL、字典路径和拼接后的完整URL。
/// 创建后不可变，每个任务最多执行一次。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanTask {
    /// 目标基础URL（已规范化，以单个斜杠结尾）
    pub base_url: String,
    /// 字典中的原始路径
    pub path: String,
    /// 完整URL
    pub full_url: String,
}

impl ScanTask {
    /// 创建新的扫描任务
    ///
    /// 基础URL被规范化为以单个斜杠结尾，路径在拼接前去除前导斜杠。
    pub fn new(base_url: &str, path: &str) -> Self {
        let base = url_utils::normalize_base_url(base_url);
        let full_url = url_utils::join_scan_url(&base, path);
        Self {
            base_url: base,
            path: path.to_string(),
            full_url,
        }
    }
}

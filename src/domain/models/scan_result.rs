// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;

/// 扫描结果
///
/// 一次探测的完整结果。状态码为0表示传输层失败（DNS错误、连接拒绝、
/// 超时等），此时`error`必定非空，内容长度为0，标题为空。
#[derive(Debug, Clone)]
pub struct ScanResult {
    /// 完整URL
    pub full_url: String,
    /// HTTP状态码（0表示传输失败）
    pub status_code: u16,
    /// 请求耗时
    pub duration: Duration,
    /// 错误信息（仅传输失败时存在）
    pub error: Option<String>,
    /// 响应内容长度（字节）
    pub content_length: usize,
    /// 页面标题（无标题或失败时为空）
    pub title: String,
}

impl ScanResult {
    /// 判断是否为传输层失败
    pub fn is_failure(&self) -> bool {
        self.status_code == 0
    }
}

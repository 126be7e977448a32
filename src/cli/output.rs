// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::ScanResult;
use std::time::Duration;

/// ANSI颜色代码
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_GREEN: &str = "\x1b[32m";
pub const COLOR_PURPLE: &str = "\x1b[35m";
pub const COLOR_ORANGE: &str = "\x1b[38;5;208m";
pub const COLOR_RED: &str = "\x1b[31m";
pub const COLOR_YELLOW: &str = "\x1b[33m";

/// 按状态码选择输出颜色
pub fn color_for_status(status: u16) -> &'static str {
    match status {
        200 => COLOR_GREEN,
        302 => COLOR_PURPLE,
        403 => COLOR_ORANGE,
        404 => COLOR_RED,
        500 => COLOR_YELLOW,
        _ => COLOR_RESET,
    }
}

/// 格式化耗时为保留两位小数的秒数
pub fn format_duration(duration: Duration) -> String {
    format!("{:.2}s", duration.as_secs_f64())
}

/// 渲染单条扫描结果
pub fn render_result(result: &ScanResult) -> String {
    let color = color_for_status(result.status_code);
    let elapsed = format_duration(result.duration);
    match &result.error {
        Some(error) => format!(
            "{}URL: {} | 状态码: {} | 耗时: {} | 错误: {}{}",
            color, result.full_url, result.status_code, elapsed, error, COLOR_RESET
        ),
        None => format!(
            "{}URL: {} | 状态码: {} | 耗时: {} | 大小: {} 字节 | 标题: {}{}",
            color,
            result.full_url,
            result.status_code,
            elapsed,
            result.content_length,
            result.title,
            COLOR_RESET
        ),
    }
}

/// 渲染进度行
pub fn render_progress(done: usize, total: usize) -> String {
    let percent = if total == 0 {
        100.0
    } else {
        done as f64 / total as f64 * 100.0
    };
    format!("进度: {:.1}% ({}/{})", percent, done, total)
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::warn;
use url::Url;

/// 加载字典文件
///
/// 每行一个路径，去除首尾空白，丢弃空行，保持输入顺序。
pub fn load_dict(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dictionary file {}", path.display()))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// 加载目标URL列表
///
/// 合并命令行单个URL与URL文件的内容，去重并保持首次出现的顺序；
/// 无法解析为URL的行被跳过并告警。
pub fn load_targets(url: Option<&str>, url_file: Option<&Path>) -> Result<Vec<String>> {
    let mut seen = HashSet::new();
    let mut targets = Vec::new();

    let mut push = |line: &str| {
        let line = line.trim();
        if line.is_empty() || !seen.insert(line.to_string()) {
            return;
        }
        if Url::parse(line).is_err() {
            warn!("Skipping invalid target URL: {}", line);
            return;
        }
        targets.push(line.to_string());
    };

    if let Some(url) = url {
        push(url);
    }
    if let Some(path) = url_file {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read URL file {}", path.display()))?;
        for line in content.lines() {
            push(line);
        }
    }

    Ok(targets)
}

/// 解析命令行请求头参数
///
/// 每项按第一个冒号拆分为名称与值，两侧去除空白；无冒号的项被忽略。
/// 输出保持输入顺序。
pub fn parse_headers(header_args: &[String]) -> Vec<(String, String)> {
    let mut headers = Vec::new();
    for arg in header_args {
        if let Some((name, value)) = arg.split_once(':') {
            headers.push((name.trim().to_string(), value.trim().to_string()));
        }
    }
    headers
}

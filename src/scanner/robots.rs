// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::{ProbeEngine, ProbeRequest};
use crate::utils::url_utils;
use std::time::Duration;
use tracing::debug;

/// robots.txt探测的固定超时时间，与扫描超时配置无关
pub const ROBOTS_TIMEOUT: Duration = Duration::from_secs(5);

/// 探测目标的robots.txt并返回其中的Disallow路径
///
/// 仅在返回200时解析响应体；任何传输失败或非200响应都被静默忽略，
/// 返回空列表。
pub async fn fetch_disallow_paths(engine: &dyn ProbeEngine, base_url: &str) -> Vec<String> {
    let robots_url = url_utils::join_scan_url(base_url, "robots.txt");
    let request = ProbeRequest {
        url: robots_url.clone(),
        headers: Vec::new(),
        timeout: ROBOTS_TIMEOUT,
    };

    match engine.probe(&request).await {
        Ok(response) if response.status_code == 200 => {
            let body = String::from_utf8_lossy(&response.body);
            let paths = parse_disallow(&body);
            debug!(
                "robots.txt at {} yielded {} disallow paths",
                robots_url,
                paths.len()
            );
            paths
        }
        Ok(response) => {
            debug!(
                "robots.txt at {} returned status {}, ignoring",
                robots_url, response.status_code
            );
            Vec::new()
        }
        Err(e) => {
            debug!("robots.txt fetch failed for {}: {}", robots_url, e);
            Vec::new()
        }
    }
}

/// 逐行解析robots.txt内容中的Disallow指令
///
/// 丢弃空值和仅为根路径`/`的条目。
pub fn parse_disallow(content: &str) -> Vec<String> {
    let mut paths = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if let Some(value) = line.strip_prefix("Disallow:") {
            let path = value.trim();
            if !path.is_empty() && path != "/" {
                paths.push(path.to_string());
            }
        }
    }
    paths
}

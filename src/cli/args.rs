// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use clap::Parser;
use std::path::PathBuf;

/// 高速网站目录和后台扫描器
#[derive(Parser, Debug)]
#[command(name = "scanrs", version, about = "高速网站目录和后台扫描器")]
pub struct Args {
    /// 目标网站URL（如：https://example.com）
    #[arg(short = 'u', long = "url")]
    pub url: Option<String>,

    /// 目标URL文件，每行一个
    #[arg(short = 'U', long = "url-file")]
    pub url_file: Option<PathBuf>,

    /// 扫描线程数（默认取配置值）
    #[arg(short = 't', long = "threads")]
    pub threads: Option<usize>,

    /// 超时时间（毫秒，默认取配置值）
    #[arg(long = "timeout")]
    pub timeout: Option<u64>,

    /// 字典文件路径
    #[arg(short = 'd', long = "dict")]
    pub dict: PathBuf,

    /// 自定义请求头，可多次指定，如 -H 'User-Agent: xxx'
    #[arg(short = 'H', long = "header")]
    pub headers: Vec<String>,
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 任务生成器
pub mod generator;
/// 扫描器门面
pub mod manager;
/// robots.txt探测与解析
pub mod robots;
/// 扫描工作器
pub mod scan_worker;

pub use manager::Scanner;

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 扫描结果模型
pub mod scan_result;
/// 扫描任务模型
pub mod task;

pub use scan_result::ScanResult;
pub use task::ScanTask;

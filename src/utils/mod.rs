// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 错误类型定义
pub mod errors;
/// 日志与追踪初始化
pub mod telemetry;
/// 文本处理工具（标题提取）
pub mod text_processing;
/// URL处理工具
pub mod url_utils;

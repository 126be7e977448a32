// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 命令行参数
pub mod args;
/// 字典与目标文件加载
pub mod loader;
/// 终端结果渲染
pub mod output;

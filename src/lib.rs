// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 命令行模块
///
/// 参数解析、字典/目标文件加载和终端渲染
pub mod cli;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含扫描任务与扫描结果数据模型
pub mod domain;

/// 引擎模块
///
/// 实现HTTP探测引擎
pub mod engines;

/// 扫描器模块
///
/// 任务生成、并发工作器池与扫描生命周期协调
pub mod scanner;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基于reqwest的探测引擎实现
pub mod reqwest_engine;
/// 探测引擎接口与数据类型
pub mod traits;

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::ProbeError;
use thiserror::Error;

/// 扫描器错误类型
#[derive(Error, Debug)]
pub enum ScannerError {
    #[error("引擎错误: {0}")]
    Engine(#[from] ProbeError),

    #[error("无效参数: {0}")]
    InvalidParameter(String),
}

// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// 引擎错误类型
#[derive(Error, Debug)]
pub enum ProbeError {
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 其他错误
    #[error("Other error: {0}")]
    Other(String),
}

/// 探测请求
pub struct ProbeRequest {
    /// 目标URL
    pub url: String,
    /// 请求头（按输入顺序应用，重名时首个生效）
    pub headers: Vec<(String, String)>,
    /// 超时时间
    pub timeout: Duration,
}

/// 探测响应
pub struct ProbeResponse {
    /// HTTP状态码
    pub status_code: u16,
    /// 响应体
    pub body: Vec<u8>,
}

/// 探测引擎特质
///
/// 工作器通过该接口发出HTTP请求，测试可替换为受控的假引擎。
#[async_trait]
pub trait ProbeEngine: Send + Sync {
    /// 执行一次探测
    async fn probe(&self, request: &ProbeRequest) -> Result<ProbeResponse, ProbeError>;

    /// 引擎名称
    fn name(&self) -> &'static str;
}

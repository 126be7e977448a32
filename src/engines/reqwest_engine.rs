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

use crate::engines::traits::{ProbeEngine, ProbeError, ProbeRequest, ProbeResponse};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;

/// 探测引擎
///
/// 基于reqwest实现的基本HTTP探测引擎。客户端在构造时创建一次，
/// 可在多个工作器之间安全共享。重定向行为保持客户端默认。
pub struct ReqwestProbe {
    client: Client,
}

impl ReqwestProbe {
    /// 创建新的探测引擎实例
    pub fn new() -> Result<Self, ProbeError> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ProbeEngine for ReqwestProbe {
    /// 执行一次HTTP GET探测
    ///
    /// # 参数
    ///
    /// * `request` - 探测请求
    ///
    /// # 返回值
    ///
    /// * `Ok(ProbeResponse)` - 探测响应
    /// * `Err(ProbeError)` - 传输层失败（包括超时）
    async fn probe(&self, request: &ProbeRequest) -> Result<ProbeResponse, ProbeError> {
        // Build headers in input order; first occurrence of a name wins
        let mut headers = HeaderMap::new();
        for (k, v) in &request.headers {
            if let (Ok(k), Ok(v)) = (
                HeaderName::from_bytes(k.as_bytes()),
                HeaderValue::from_str(v),
            ) {
                if !headers.contains_key(&k) {
                    headers.insert(k, v);
                }
            }
        }

        let response = self
            .client
            .get(&request.url)
            .headers(headers)
            .timeout(request.timeout)
            .send()
            .await?;

        let status_code = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(ProbeResponse { status_code, body })
    }

    /// 获取引擎名称
    fn name(&self) -> &'static str {
        "reqwest"
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;

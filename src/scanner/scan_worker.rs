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

use crate::domain::models::{ScanResult, ScanTask};
use crate::engines::traits::{ProbeEngine, ProbeRequest};
use crate::utils::text_processing;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::sync::Mutex;
use tracing::debug;

/// 调用方未提供User-Agent时注入的默认值
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 6.1; WOW64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/39.0.2171.71 Safari/537.36";

/// 合并默认User-Agent
///
/// 仅当调用方请求头中没有任何名称大小写不敏感地匹配"user-agent"的
/// 条目时，才追加默认User-Agent。调用方请求头保持输入顺序，重名时
/// 首个生效。
pub fn merge_default_user_agent(headers: &[(String, String)]) -> Vec<(String, String)> {
    let mut merged = headers.to_vec();
    let has_user_agent = merged
        .iter()
        .any(|(name, _)| name.eq_ignore_ascii_case("user-agent"));
    if !has_user_agent {
        merged.push(("User-Agent".to_string(), DEFAULT_USER_AGENT.to_string()));
    }
    merged
}

/// 扫描工作器
///
/// 从共享任务队列拉取任务，在配置的超时内发出HTTP GET探测并写出
/// 结果。每次拉取前检查取消标志：标志置位后不再拉取新任务，已在途
/// 的请求允许完成或超时。每个任务恰好执行一次，不做重试。
pub struct ScanWorker {
    engine: Arc<dyn ProbeEngine>,
    headers: Vec<(String, String)>,
    timeout: Duration,
    cancelled: Arc<AtomicBool>,
    worker_id: usize,
}

impl ScanWorker {
    /// 创建新的扫描工作器实例
    pub fn new(
        engine: Arc<dyn ProbeEngine>,
        headers: &[(String, String)],
        timeout: Duration,
        cancelled: Arc<AtomicBool>,
        worker_id: usize,
    ) -> Self {
        Self {
            engine,
            headers: merge_default_user_agent(headers),
            timeout,
            cancelled,
            worker_id,
        }
    }

    /// 运行工作器循环
    ///
    /// 直到任务队列关闭且取尽、取消标志置位或结果队列关闭为止。
    pub async fn run(
        self,
        task_rx: Arc<Mutex<mpsc::Receiver<ScanTask>>>,
        result_tx: mpsc::Sender<ScanResult>,
    ) {
        debug!("Scan worker {} started", self.worker_id);

        loop {
            if self.cancelled.load(Ordering::SeqCst) {
                debug!("Scan worker {} observed stop signal", self.worker_id);
                break;
            }

            let task = {
                let mut rx = task_rx.lock().await;
                rx.recv().await
            };
            let Some(task) = task else {
                // 任务队列已关闭且取尽
                break;
            };

            let result = self.execute(task).await;
            if result_tx.send(result).await.is_err() {
                debug!(
                    "Result queue closed by receiver, worker {} exiting",
                    self.worker_id
                );
                break;
            }
        }

        debug!("Scan worker {} stopped", self.worker_id);
    }

    /// 执行单个扫描任务
    ///
    /// 传输失败（DNS错误、连接拒绝、超时等）映射为状态码0、内容长度
    /// 0、空标题并携带错误信息的结果；不会中断工作器本身。
    async fn execute(&self, task: ScanTask) -> ScanResult {
        let request = ProbeRequest {
            url: task.full_url.clone(),
            headers: self.headers.clone(),
            timeout: self.timeout,
        };

        let start = Instant::now();
        match self.engine.probe(&request).await {
            Ok(response) => {
                let body = String::from_utf8_lossy(&response.body);
                ScanResult {
                    full_url: task.full_url,
                    status_code: response.status_code,
                    duration: start.elapsed(),
                    error: None,
                    content_length: response.body.len(),
                    title: text_processing::extract_title(&body),
                }
            }
            Err(e) => ScanResult {
                full_url: task.full_url,
                status_code: 0,
                duration: start.elapsed(),
                error: Some(e.to_string()),
                content_length: 0,
                title: String::new(),
            },
        }
    }
}

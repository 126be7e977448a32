// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::{ScanResult, ScanTask};
use crate::engines::reqwest_engine::ReqwestProbe;
use crate::engines::traits::ProbeEngine;
use crate::scanner::generator::TaskGenerator;
use crate::scanner::scan_worker::ScanWorker;
use crate::utils::errors::ScannerError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// 任务队列与结果队列的容量
pub const QUEUE_CAPACITY: usize = 100;

/// 扫描器
///
/// 持有配置与两条有界队列，负责启动任务生成器和N个工作器并协调
/// 停止。`start`即发即弃，调用方通过结果流观察进度；`stop`为幂等的
/// 协作式取消，只阻止新任务开始，不中断在途请求。
pub struct Scanner {
    targets: Vec<String>,
    dict: Vec<String>,
    thread_count: usize,
    timeout: Duration,
    headers: Vec<(String, String)>,
    engine: Arc<dyn ProbeEngine>,
    cancelled: Arc<AtomicBool>,
    task_tx: Option<mpsc::Sender<ScanTask>>,
    task_rx: Arc<Mutex<mpsc::Receiver<ScanTask>>>,
    result_tx: Option<mpsc::Sender<ScanResult>>,
    result_rx: mpsc::Receiver<ScanResult>,
    handles: Vec<JoinHandle<()>>,
}

impl Scanner {
    /// 创建新的扫描器实例
    ///
    /// # 参数
    ///
    /// * `targets` - 目标基础URL列表（已去重，保持输入顺序）
    /// * `dict` - 字典路径列表
    /// * `thread_count` - 并发工作器数量
    /// * `timeout` - 单个请求的超时时间
    /// * `headers` - 调用方自定义请求头
    ///
    /// # 返回值
    ///
    /// * `Ok(Scanner)` - 新的扫描器实例
    /// * `Err(ScannerError)` - 参数无效或HTTP客户端构建失败
    pub fn new(
        targets: Vec<String>,
        dict: Vec<String>,
        thread_count: usize,
        timeout: Duration,
        headers: Vec<(String, String)>,
    ) -> Result<Self, ScannerError> {
        let engine = Arc::new(ReqwestProbe::new()?);
        Self::with_engine(targets, dict, thread_count, timeout, headers, engine)
    }

    /// 使用指定探测引擎创建扫描器实例
    ///
    /// 测试可注入受控引擎替代真实HTTP客户端。
    pub fn with_engine(
        targets: Vec<String>,
        dict: Vec<String>,
        thread_count: usize,
        timeout: Duration,
        headers: Vec<(String, String)>,
        engine: Arc<dyn ProbeEngine>,
    ) -> Result<Self, ScannerError> {
        if thread_count == 0 {
            return Err(ScannerError::InvalidParameter(
                "thread count must be at least 1".to_string(),
            ));
        }

        let (task_tx, task_rx) = mpsc::channel(QUEUE_CAPACITY);
        let (result_tx, result_rx) = mpsc::channel(QUEUE_CAPACITY);

        Ok(Self {
            targets,
            dict,
            thread_count,
            timeout,
            headers,
            engine,
            cancelled: Arc::new(AtomicBool::new(false)),
            task_tx: Some(task_tx),
            task_rx: Arc::new(Mutex::new(task_rx)),
            result_tx: Some(result_tx),
            result_rx,
            handles: Vec::new(),
        })
    }

    /// 启动扫描
    ///
    /// 启动1个任务生成器和N个工作器后立即返回，不等待完成。重复调用
    /// 为无操作。
    pub fn start(&mut self) {
        let (Some(task_tx), Some(result_tx)) = (self.task_tx.take(), self.result_tx.take())
        else {
            warn!("Scanner already started");
            return;
        };

        let generator = TaskGenerator::new(
            self.targets.clone(),
            self.dict.clone(),
            self.engine.clone(),
        );
        self.handles.push(tokio::spawn(generator.run(task_tx)));

        for worker_id in 0..self.thread_count {
            let worker = ScanWorker::new(
                self.engine.clone(),
                &self.headers,
                self.timeout,
                self.cancelled.clone(),
                worker_id,
            );
            let task_rx = self.task_rx.clone();
            let result_tx = result_tx.clone();
            self.handles.push(tokio::spawn(worker.run(task_rx, result_tx)));
        }
        // 仅工作器持有结果发送端，全部退出后结果流自然结束

        info!(
            "Scanner started: {} targets, {} dictionary entries, {} workers",
            self.targets.len(),
            self.dict.len(),
            self.thread_count
        );
    }

    /// 请求停止扫描
    ///
    /// 置位取消标志，阻止工作器拉取新任务；在途请求允许完成或超时。
    /// 幂等：重复调用为无操作，不报错也不死锁。
    pub fn stop(&self) {
        if !self.cancelled.swap(true, Ordering::SeqCst) {
            info!("Scanner stop requested");
        }
    }

    /// 获取下一个扫描结果
    ///
    /// # 返回值
    ///
    /// * `Some(ScanResult)` - 下一个结果
    /// * `None` - 所有任务已完成或已停止，结果流结束
    pub async fn next_result(&mut self) -> Option<ScanResult> {
        self.result_rx.recv().await
    }
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::ScanTask;
use crate::engines::traits::ProbeEngine;
use crate::scanner::robots;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::debug;

/// robots.txt探测状态
///
/// `probed`标志与发现的路径列表处于同一把锁之下，确保整个运行期间
/// 只发出一次robots.txt探测。
struct RobotsState {
    probed: bool,
    paths: Vec<String>,
}

/// 任务生成器
///
/// 按输入顺序遍历目标与字典的笛卡尔积生成主批任务；主批全部入队后，
/// 针对首个目标探测一次robots.txt，并把发现的路径作为追加批次对每个
/// 目标入队。任务队列的发送端在追加批次入队完毕后关闭，这是下游唯一
/// 的流结束信号。
pub struct TaskGenerator {
    targets: Vec<String>,
    dict: Vec<String>,
    engine: Arc<dyn ProbeEngine>,
    robots: Mutex<RobotsState>,
}

impl TaskGenerator {
    /// 创建新的任务生成器实例
    ///
    /// # 参数
    ///
    /// * `targets` - 目标基础URL列表（已去重，保持输入顺序）
    /// * `dict` - 字典路径列表
    /// * `engine` - robots.txt探测所用的引擎
    pub fn new(targets: Vec<String>, dict: Vec<String>, engine: Arc<dyn ProbeEngine>) -> Self {
        Self {
            targets,
            dict,
            engine,
            robots: Mutex::new(RobotsState {
                probed: false,
                paths: Vec::new(),
            }),
        }
    }

    /// 运行生成器，向任务队列写入全部任务
    ///
    /// 返回时丢弃发送端，即关闭任务队列。
    pub async fn run(self, task_tx: mpsc::Sender<ScanTask>) {
        // 主批：目标 × 字典
        for base in &self.targets {
            for path in &self.dict {
                let task = ScanTask::new(base, path);
                if task_tx.send(task).await.is_err() {
                    debug!("Task queue closed by receiver, generator exiting");
                    return;
                }
            }
        }

        // 追加批：整个运行只探测一次robots.txt，针对首个目标
        if let Some(first) = self.targets.first() {
            let should_probe = {
                let mut state = self.robots.lock();
                if state.probed {
                    false
                } else {
                    state.probed = true;
                    true
                }
            };
            if should_probe {
                let paths = robots::fetch_disallow_paths(self.engine.as_ref(), first).await;
                self.robots.lock().paths = paths;
            }
        }

        let discovered = self.robots.lock().paths.clone();
        for base in &self.targets {
            for path in &discovered {
                let task = ScanTask::new(base, path);
                if task_tx.send(task).await.is_err() {
                    debug!("Task queue closed by receiver, generator exiting");
                    return;
                }
            }
        }

        debug!("Task generation complete, closing task queue");
    }
}

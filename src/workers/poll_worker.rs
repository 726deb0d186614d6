// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::PollEngine;
use crate::poller::outcome::PollOutcome;
use crate::poller::sink::OutputSink;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, error, info};

/// 轮询工作器
///
/// 按固定顺序逐个拉取目标URL，每完成一轮后休眠固定间隔再开始下一轮
pub struct PollWorker<E>
where
    E: PollEngine + 'static,
{
    engine: Arc<E>,
    sink: Arc<dyn OutputSink>,
    targets: Vec<String>,
    interval: Duration,
}

impl<E> PollWorker<E>
where
    E: PollEngine + 'static,
{
    /// 创建新的轮询工作器实例
    ///
    /// # 参数
    ///
    /// * `engine` - 拉取引擎
    /// * `sink` - 输出接收器
    /// * `targets` - 目标URL列表，按此顺序轮询
    /// * `interval` - 每轮结束到下一轮开始之间的休眠间隔
    pub fn new(
        engine: Arc<E>,
        sink: Arc<dyn OutputSink>,
        targets: Vec<String>,
        interval: Duration,
    ) -> Self {
        Self {
            engine,
            sink,
            targets,
            interval,
        }
    }

    /// 运行工作器
    ///
    /// 启动轮询循环：完成一轮后休眠配置的间隔，然后开始下一轮
    pub async fn run(&self) {
        info!(
            "Poll worker started ({} targets, interval {:?}, engine {})",
            self.targets.len(),
            self.interval,
            self.engine.name()
        );

        loop {
            self.poll_all().await;
            sleep(self.interval).await;
        }
    }

    /// 启动后台运行
    pub fn start(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            self.run().await;
        })
    }

    /// 对所有目标执行一轮顺序轮询
    ///
    /// 每个URL的结果在下一个URL开始拉取之前交给输出接收器，
    /// 任何单个URL的失败都不会中断本轮或后续轮询
    async fn poll_all(&self) {
        for url in &self.targets {
            let result = self.engine.fetch(url).await;

            if let Ok(response) = &result {
                debug!(
                    "GET {} -> {} ({} ms)",
                    url, response.status_code, response.response_time_ms
                );
            }

            let outcome = PollOutcome::classify(result);
            match &outcome {
                PollOutcome::TransportError(e) => {
                    error!("Transport error polling {}: {}", url, e);
                }
                PollOutcome::DecodeError(e) => {
                    error!("Invalid JSON from {}: {}", url, e);
                }
                _ => {}
            }

            self.sink.emit(url, &outcome);
        }
    }
}

#[cfg(test)]
#[path = "poll_worker_test.rs"]
mod tests;

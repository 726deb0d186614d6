// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use pollrs::config::settings::Settings;
use pollrs::engines::reqwest_engine::ReqwestEngine;
use pollrs::poller::sink::StdoutSink;
use pollrs::utils::{telemetry, validators};
use pollrs::workers::poll_worker::PollWorker;
use std::sync::Arc;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动轮询循环
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting pollrs...");

    // 2. Load configuration
    let settings = Settings::new()?;
    validators::validate_targets(&settings.poller.targets)?;
    info!("Configuration loaded");

    // 3. Initialize engine
    let engine = Arc::new(ReqwestEngine::new()?);

    // 4. Run the polling loop in the foreground; it never returns
    let worker = PollWorker::new(
        engine,
        Arc::new(StdoutSink),
        settings.poller.targets.clone(),
        settings.poller.interval(),
    );
    worker.run().await;

    Ok(())
}

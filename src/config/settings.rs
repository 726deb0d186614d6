// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// 应用程序配置设置
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 轮询配置
    pub poller: PollerSettings,
}

/// 轮询配置设置
#[derive(Debug, Deserialize)]
pub struct PollerSettings {
    /// 目标URL列表，按此顺序轮询
    pub targets: Vec<String>,
    /// 每轮之间的休眠间隔（秒）
    pub interval_secs: u64,
}

impl PollerSettings {
    /// 获取轮询间隔
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default(
                "poller.targets",
                vec![
                    "https://f0rest-rank-api.glitch.me/getRank/olofmeister".to_string(),
                    "https://f0rest-rank-api.glitch.me/getRank/f0rest".to_string(),
                ],
            )?
            .set_default("poller.interval_secs", 240)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("POLLRS").separator("__"));

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;

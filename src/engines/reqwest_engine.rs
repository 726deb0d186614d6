// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::{EngineError, FetchResponse, PollEngine};
use async_trait::async_trait;
use std::time::Instant;

/// 拉取引擎
///
/// 基于reqwest实现的基本HTTP拉取引擎
pub struct ReqwestEngine {
    client: reqwest::Client,
}

impl ReqwestEngine {
    /// 创建新的拉取引擎实例
    ///
    /// # 返回值
    ///
    /// * `Ok(ReqwestEngine)` - 新的引擎实例
    /// * `Err(EngineError)` - 客户端初始化失败
    pub fn new() -> Result<Self, EngineError> {
        // Client defaults only, no custom headers and no timeout override
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PollEngine for ReqwestEngine {
    /// 执行HTTP拉取
    ///
    /// # 参数
    ///
    /// * `url` - 目标URL
    ///
    /// # 返回值
    ///
    /// * `Ok(FetchResponse)` - 拉取响应
    /// * `Err(EngineError)` - 拉取过程中出现的错误
    async fn fetch(&self, url: &str) -> Result<FetchResponse, EngineError> {
        let start = Instant::now();
        let response = self.client.get(url).send().await?;

        let status_code = response.status().as_u16();
        let body = response.text().await?;

        Ok(FetchResponse {
            status_code,
            body,
            response_time_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// 获取引擎名称
    ///
    /// # 返回值
    ///
    /// 引擎名称
    fn name(&self) -> &'static str {
        "reqwest"
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;

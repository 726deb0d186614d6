// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;

/// 引擎错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 其他错误
    #[error("Other error: {0}")]
    Other(String),
}

/// 拉取响应
#[derive(Debug)]
pub struct FetchResponse {
    /// HTTP状态码
    pub status_code: u16,
    /// 响应内容
    pub body: String,
    /// 响应时间（毫秒）
    pub response_time_ms: u64,
}

/// 轮询引擎trait
///
/// 所有数据拉取引擎都必须实现此trait
#[async_trait]
pub trait PollEngine: Send + Sync {
    /// 对目标URL执行一次GET请求
    ///
    /// # 参数
    ///
    /// * `url` - 目标URL
    ///
    /// # 返回值
    ///
    /// * `Ok(FetchResponse)` - 拉取响应
    /// * `Err(EngineError)` - 传输层错误
    async fn fetch(&self, url: &str) -> Result<FetchResponse, EngineError>;

    /// 获取引擎名称
    fn name(&self) -> &'static str;
}

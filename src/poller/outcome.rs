// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::{EngineError, FetchResponse};
use serde_json::Value;

/// 单次轮询的分类结果
///
/// 每个URL的拉取和解码结果都归入其中一个变体，
/// 任何变体都不会中断轮询循环
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    /// 200响应且响应体为合法JSON
    Success(Value),
    /// 非200状态码，响应体不做解析
    HttpFailure {
        /// HTTP状态码
        status: u16,
    },
    /// 传输层错误（DNS、连接、TLS、超时）
    TransportError(String),
    /// 200响应但响应体不是合法JSON
    DecodeError(String),
}

impl PollOutcome {
    /// 对一次拉取结果进行分类
    ///
    /// # 参数
    ///
    /// * `result` - 引擎返回的拉取结果
    ///
    /// # 返回值
    ///
    /// 分类后的轮询结果，此函数本身不会失败
    pub fn classify(result: Result<FetchResponse, EngineError>) -> Self {
        match result {
            Err(e) => PollOutcome::TransportError(e.to_string()),
            Ok(response) if response.status_code != 200 => PollOutcome::HttpFailure {
                status: response.status_code,
            },
            Ok(response) => match serde_json::from_str::<Value>(&response.body) {
                Ok(value) => PollOutcome::Success(value),
                Err(e) => PollOutcome::DecodeError(e.to_string()),
            },
        }
    }
}

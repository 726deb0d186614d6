// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::poller::outcome::PollOutcome;

/// 输出接收器trait
///
/// 轮询结果的处理出口，生产环境写标准输出，测试环境收集到内存
pub trait OutputSink: Send + Sync {
    /// 处理一条轮询结果
    ///
    /// # 参数
    ///
    /// * `url` - 目标URL
    /// * `outcome` - 该URL的轮询结果
    fn emit(&self, url: &str, outcome: &PollOutcome);
}

/// 标准输出接收器
///
/// 按固定格式将轮询结果逐行写入标准输出
pub struct StdoutSink;

/// 生成非200状态码的诊断输出行
pub fn failure_line(url: &str, status: u16) -> String {
    format!("Failed to retrieve data from {}. Status code: {}", url, status)
}

impl OutputSink for StdoutSink {
    fn emit(&self, url: &str, outcome: &PollOutcome) {
        match outcome {
            PollOutcome::Success(value) => println!("{}", value),
            PollOutcome::HttpFailure { status } => println!("{}", failure_line(url, *status)),
            // Transport and decode failures are reported on the tracing
            // channel by the worker and produce no stdout line
            PollOutcome::TransportError(_) | PollOutcome::DecodeError(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_line_format() {
        let line = failure_line("https://f0rest-rank-api.glitch.me/getRank/f0rest", 404);
        assert_eq!(
            line,
            "Failed to retrieve data from https://f0rest-rank-api.glitch.me/getRank/f0rest. Status code: 404"
        );
    }

    #[test]
    fn test_failure_line_contains_url_and_status() {
        let line = failure_line("http://127.0.0.1:9/x", 503);
        assert!(line.contains("http://127.0.0.1:9/x"));
        assert!(line.contains("503"));
    }
}

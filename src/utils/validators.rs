// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;
use url::Url;

/// 验证错误类型
#[derive(Error, Debug)]
pub enum ValidationError {
    /// URL无效
    #[error("Invalid target URL: {0}")]
    InvalidUrl(String),
    /// 不支持的scheme
    #[error("Unsupported scheme in target URL: {0}")]
    UnsupportedScheme(String),
}

/// 验证单个轮询目标URL
///
/// # 参数
///
/// * `target` - 目标URL字符串
///
/// # 返回值
///
/// * `Ok(())` - URL有效
/// * `Err(ValidationError)` - URL无效或scheme不受支持
pub fn validate_target(target: &str) -> Result<(), ValidationError> {
    let parsed =
        Url::parse(target).map_err(|_| ValidationError::InvalidUrl(target.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(ValidationError::UnsupportedScheme(target.to_string())),
    }
}

/// 验证整个目标URL列表
///
/// # 参数
///
/// * `targets` - 目标URL列表
///
/// # 返回值
///
/// * `Ok(())` - 所有URL均有效
/// * `Err(ValidationError)` - 第一个无效的URL
pub fn validate_targets(targets: &[String]) -> Result<(), ValidationError> {
    for target in targets {
        validate_target(target)?;
    }
    Ok(())
}

//! 表单提交器 - 基础设施层
//!
//! 持有唯一的 HTTP 客户端，只暴露"POST 一个表单"的能力

use crate::error::TransportError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// 表单提交能力
///
/// 职责：
/// - 发送一次表单 POST，返回 HTTP 状态码
/// - 不认识 Question / Assignment
/// - 不判断成功与否（由流程层分类）
#[async_trait]
pub trait FormPoster: Send + Sync {
    /// 提交一次表单
    ///
    /// # 参数
    /// - `endpoint`: 提交地址
    /// - `fields`: 键值对，键为题目 ID，值为选择的文本
    ///
    /// # 返回
    /// 返回 HTTP 状态码
    async fn post_form(
        &self,
        endpoint: &str,
        fields: &[(String, String)],
    ) -> Result<u16, TransportError>;
}

/// 基于 reqwest 的表单提交器
///
/// 客户端在所有提交之间共享（连接复用）。
#[derive(Clone)]
pub struct HttpFormPoster {
    client: Client,
    timeout: Duration,
}

impl HttpFormPoster {
    /// 创建新的提交器
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::ClientBuildFailed(e.to_string()))?;

        Ok(Self { client, timeout })
    }
}

#[async_trait]
impl FormPoster for HttpFormPoster {
    async fn post_form(
        &self,
        endpoint: &str,
        fields: &[(String, String)],
    ) -> Result<u16, TransportError> {
        let response = self
            .client
            .post(endpoint)
            .form(fields)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TransportError::Timeout {
                        endpoint: endpoint.to_string(),
                        timeout_ms: self.timeout.as_millis(),
                    }
                } else {
                    TransportError::RequestFailed {
                        endpoint: endpoint.to_string(),
                        message: e.to_string(),
                    }
                }
            })?;

        Ok(response.status().as_u16())
    }
}

//! 单次提交流程 - 流程层
//!
//! 核心职责：定义"一次提交"的完整处理流程
//!
//! 流程顺序：
//! 1. 组装答案（单选题查分配表，开放题随机取）
//! 2. 带超时 POST 到提交地址
//! 3. 按状态码分类结果（失败只记录，不向上传播）

use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::TransportError;
use crate::infrastructure::FormPoster;
use crate::utils::logging::truncate_text;
use crate::workflow::submission_ctx::SubmissionCtx;
use crate::workflow::submission_plan::SubmissionPlan;

/// 单次提交结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// 提交成功（2xx）
    Success,
    /// 提交失败（网络错误 / 超时 / 非 2xx）
    Failure { reason: String },
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success)
    }
}

/// 单次提交记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRecord {
    /// 提交序号（从 0 开始）
    pub index: usize,
    /// 提交的答案（题目 ID, 值）
    pub answers: Vec<(String, String)>,
    pub outcome: SubmissionOutcome,
}

/// 失败的提交（只保留序号和原因）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedSubmission {
    pub index: usize,
    pub reason: String,
}

/// 按 HTTP 状态码分类
pub fn classify_status(endpoint: &str, status: u16) -> Result<(), TransportError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(TransportError::BadStatus {
            endpoint: endpoint.to_string(),
            status,
        })
    }
}

/// 单次提交流程
///
/// - 只读共享的提交计划
/// - 不持有 HTTP 客户端，只依赖 `FormPoster` 能力
pub struct SubmissionFlow<'a> {
    plan: &'a SubmissionPlan,
    poster: &'a dyn FormPoster,
    endpoint: &'a str,
    timeout: Duration,
    verbose_logging: bool,
}

impl<'a> SubmissionFlow<'a> {
    /// 创建新的提交流程
    pub fn new(
        plan: &'a SubmissionPlan,
        poster: &'a dyn FormPoster,
        endpoint: &'a str,
        timeout: Duration,
        verbose_logging: bool,
    ) -> Self {
        Self {
            plan,
            poster,
            endpoint,
            timeout,
            verbose_logging,
        }
    }

    pub async fn run(&self, ctx: &SubmissionCtx) -> SubmissionRecord {
        let answers = self.plan.answers_for(ctx.index);

        if self.verbose_logging {
            let preview: Vec<String> = answers
                .iter()
                .map(|(id, value)| format!("{}={}", id, truncate_text(value, 30)))
                .collect();
            debug!("{} 答案: {}", ctx, preview.join(", "));
        }

        let outcome = match self.post(&answers).await {
            Ok(()) => {
                if self.verbose_logging {
                    info!("{} ✓ 提交成功", ctx);
                } else {
                    debug!("{} ✓ 提交成功", ctx);
                }
                SubmissionOutcome::Success
            }
            Err(e) => {
                warn!("{} ❌ 提交失败: {}", ctx, e);
                SubmissionOutcome::Failure {
                    reason: e.to_string(),
                }
            }
        };

        SubmissionRecord {
            index: ctx.index,
            answers,
            outcome,
        }
    }

    async fn post(&self, answers: &[(String, String)]) -> Result<(), TransportError> {
        let status = tokio::time::timeout(self.timeout, self.poster.post_form(self.endpoint, answers))
            .await
            .map_err(|_| TransportError::Timeout {
                endpoint: self.endpoint.to_string(),
                timeout_ms: self.timeout.as_millis(),
            })??;

        classify_status(self.endpoint, status)
    }
}

//! 批量提交引擎 - 编排层
//!
//! ## 职责
//!
//! 1. **构建计划**：运行前一次性校验题目、计算配额、生成分配表
//! 2. **按序发出**：提交序号 0..N-1 依次发出，每个序号只发一次
//! 3. **并发控制**：同时在途的请求数不超过 `max_concurrent`（默认 1，即严格串行）
//! 4. **失败隔离**：单次失败只计数，不会中断批次
//! 5. **进度通知**：每完成一次提交通知一次，完成数单调递增
//! 6. **外部中止**：取消后不再发出新的提交，返回部分统计

use crate::config::Config;
use crate::error::{AppResult, ConfigError};
use crate::infrastructure::FormPoster;
use crate::models::QuestionSet;
use crate::orchestrator::progress::ProgressObserver;
use crate::utils::logging;
use crate::workflow::{
    FailedSubmission, SubmissionCtx, SubmissionFlow, SubmissionOutcome, SubmissionPlan,
    SubmissionRecord,
};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// 引擎参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// 同时在途的提交数
    pub max_concurrent: usize,
    /// 单次提交超时
    pub request_timeout: Duration,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            max_concurrent: 1,
            request_timeout: Duration::from_secs(10),
            verbose_logging: false,
        }
    }
}

impl From<&Config> for EngineOptions {
    fn from(config: &Config) -> Self {
        Self {
            max_concurrent: config.max_concurrent_submissions,
            request_timeout: config.request_timeout(),
            verbose_logging: config.verbose_logging,
        }
    }
}

/// 运行统计
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// 已尝试的提交数
    pub attempted: usize,
    /// 成功的提交数
    pub succeeded: usize,
    /// 是否被外部中止
    pub cancelled: bool,
    /// 失败明细（按完成顺序）
    pub failures: Vec<FailedSubmission>,
}

impl RunSummary {
    pub fn failed(&self) -> usize {
        self.attempted - self.succeeded
    }

    fn record(&mut self, record: &SubmissionRecord) {
        self.attempted += 1;
        match &record.outcome {
            SubmissionOutcome::Success => self.succeeded += 1,
            SubmissionOutcome::Failure { reason } => self.failures.push(FailedSubmission {
                index: record.index,
                reason: reason.clone(),
            }),
        }
    }
}

/// 批量提交引擎
pub struct SubmissionEngine {
    poster: Arc<dyn FormPoster>,
    options: EngineOptions,
}

impl SubmissionEngine {
    /// 创建新的提交引擎
    pub fn new(poster: Arc<dyn FormPoster>, options: EngineOptions) -> Self {
        Self { poster, options }
    }

    /// 执行一次批量提交
    ///
    /// # 参数
    /// - `questions`: 题目快照（运行期间不可变）
    /// - `total`: 提交总数
    /// - `endpoint`: 提交地址
    /// - `observer`: 进度观察者
    /// - `cancel`: 外部中止信号
    ///
    /// # 返回
    /// 运行统计；校验 / 配置错误在发出任何请求之前返回
    pub async fn run(
        &self,
        questions: &QuestionSet,
        total: usize,
        endpoint: &str,
        observer: &dyn ProgressObserver,
        cancel: &CancellationToken,
    ) -> AppResult<RunSummary> {
        if self.options.max_concurrent == 0 {
            return Err(ConfigError::ZeroConcurrency.into());
        }

        let plan = SubmissionPlan::build(questions, total)?;
        logging::log_plan_built(&plan, questions);

        let flow = SubmissionFlow::new(
            &plan,
            self.poster.as_ref(),
            endpoint,
            self.options.request_timeout,
            self.options.verbose_logging,
        );
        let flow = &flow;

        // 序号在取用时才检查取消信号，取消后不再发出新的提交
        let issued = (0..total)
            .take_while(|_| !cancel.is_cancelled())
            .map(|index| async move { flow.run(&SubmissionCtx::new(index, total)).await });

        let mut in_flight = stream::iter(issued).buffer_unordered(self.options.max_concurrent);

        let mut summary = RunSummary::default();
        while let Some(record) = in_flight.next().await {
            summary.record(&record);
            observer.on_progress(summary.attempted, total);
        }

        if summary.attempted < total {
            summary.cancelled = true;
            warn!("⚠️ 提交已中止: 已尝试 {}/{}", summary.attempted, total);
        } else {
            info!("✓ 全部 {} 次提交已尝试", total);
        }

        Ok(summary)
    }
}

//! 批量运行器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责一次批量提交的生命周期和资源管理。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：写日志文件头、推导提交地址、加载题目、创建 HTTP 客户端
//! 2. **运行**：委托 `SubmissionEngine` 完成全部提交
//! 3. **中止**：Ctrl-C 触发取消信号，已发出的提交完成后返回部分统计
//! 4. **收尾**：写失败记录、输出全局统计

use crate::config::Config;
use crate::infrastructure::HttpFormPoster;
use crate::models::{self, QuestionSet};
use crate::orchestrator::progress::TracingProgress;
use crate::orchestrator::submission_engine::{EngineOptions, RunSummary, SubmissionEngine};
use crate::services::FailureWriter;
use crate::utils::logging;
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    endpoint: String,
    questions: QuestionSet,
    engine: SubmissionEngine,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        // 初始化日志文件
        logging::init_log_file(&config.output_log_file)
            .with_context(|| format!("无法写入日志文件: {}", config.output_log_file))?;

        logging::log_startup(&config);

        let endpoint = models::form_response_url(&config.form_url)?;

        info!("\n📁 正在加载题目文件: {}", config.questions_file);
        let questions = models::load_question_set(Path::new(&config.questions_file)).await?;
        questions.validate()?;
        logging::log_questions_loaded(&questions, &endpoint);

        // 客户端在所有提交之间共享
        let poster = HttpFormPoster::new(config.request_timeout())?;
        let engine = SubmissionEngine::new(Arc::new(poster), EngineOptions::from(&config));

        Ok(Self {
            config,
            endpoint,
            questions,
            engine,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<RunSummary> {
        let cancel = CancellationToken::new();
        let watcher = spawn_ctrl_c_watcher(cancel.clone());

        let total = self.config.total_submissions;
        let progress = TracingProgress::for_total(total);

        let result = self
            .engine
            .run(&self.questions, total, &self.endpoint, &progress, &cancel)
            .await;
        watcher.abort();
        let summary = result?;

        let writer = FailureWriter::with_path(&self.config.failure_log_file);
        match writer.write_all(&summary.failures) {
            Ok(0) => {}
            Ok(n) => info!("📝 {} 条失败记录已写入: {}", n, writer.path()),
            Err(e) => error!("写入失败记录出错: {:#}", e),
        }

        logging::print_final_stats(&summary, &self.config.output_log_file);

        Ok(summary)
    }
}

/// Ctrl-C 时触发取消信号
fn spawn_ctrl_c_watcher(cancel: CancellationToken) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("⏹️ 收到中止信号，不再发出新的提交...");
            cancel.cancel();
        }
    })
}

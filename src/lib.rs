//! # Form Quota Submit
//!
//! 按百分比配额生成表单答案并批量提交的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（HTTP 客户端），只暴露能力
//! - `FormPoster` - 提交一次表单，返回状态码
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单道题
//! - `quota_allocator` - 最大余数法，把百分比换算为整数配额
//! - `assignment_generator` - 按题目 ID 播种的确定性洗牌，生成分配表
//! - `open_ended_selector` - 开放题随机取回答
//! - `FailureWriter` - 写失败记录能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一次提交"的完整处理流程
//! - `SubmissionPlan` - 运行前构建、只读共享的分配表集合
//! - `SubmissionFlow` - 组装答案 → 带超时 POST → 分类结果
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/submission_engine` - N 次提交的调度、进度与中止
//! - `orchestrator/batch_runner` - 应用生命周期，管理资源

pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult, ConfigError, TransportError, ValidationError};
pub use infrastructure::{FormPoster, HttpFormPoster};
pub use models::{ChoiceOption, Question, QuestionKind, QuestionSet};
pub use orchestrator::{App, EngineOptions, ProgressObserver, RunSummary, SubmissionEngine};
pub use workflow::{FailedSubmission, SubmissionOutcome, SubmissionPlan, SubmissionRecord};

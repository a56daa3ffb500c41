//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `batch_runner` - 批量运行器
//! - 管理应用生命周期（初始化、运行、收尾）
//! - 持有题目快照和共享的 HTTP 客户端
//! - Ctrl-C 中止、失败记录、全局统计
//!
//! ### `submission_engine` - 批量提交引擎
//! - 运行前构建分配表
//! - 按序发出 N 次提交，控制并发数量
//! - 汇总成功 / 失败，通知进度
//!
//! ### `progress` - 进度观察者
//!
//! ## 层次关系
//!
//! ```text
//! batch_runner (一次运行)
//!     ↓
//! submission_engine (N 次提交)
//!     ↓
//! workflow::SubmissionFlow (单次提交)
//!     ↓
//! services (能力层：quota / assignment / open-ended)
//!     ↓
//! infrastructure (基础设施：FormPoster)
//! ```

pub mod batch_runner;
pub mod progress;
pub mod submission_engine;

// 重新导出主要类型
pub use batch_runner::App;
pub use progress::{ProgressObserver, TracingProgress};
pub use submission_engine::{EngineOptions, RunSummary, SubmissionEngine};

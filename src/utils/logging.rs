//! 日志工具模块
//!
//! 提供日志格式化和输出的辅助函数

use anyhow::Result;
use std::fs;
use tracing::info;

use crate::config::Config;
use crate::models::QuestionSet;
use crate::orchestrator::RunSummary;
use crate::workflow::SubmissionPlan;

/// 初始化日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
pub fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n表单提交日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)?;
    Ok(())
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 批量表单提交模式");
    info!("📊 提交总数: {}", config.total_submissions);
    info!("📊 最大并发数: {}", config.max_concurrent_submissions);
    info!("⏱️ 单次超时: {} 秒", config.request_timeout_secs);
    info!("{}", "=".repeat(60));
}

/// 记录题目加载信息
pub fn log_questions_loaded(questions: &QuestionSet, endpoint: &str) {
    info!(
        "✓ 找到 {} 道题目 (单选 {})",
        questions.len(),
        questions.closed_count()
    );
    info!("📮 提交地址: {}", endpoint);
}

/// 记录每道单选题的分配结果
pub fn log_plan_built(plan: &SubmissionPlan, questions: &QuestionSet) {
    info!("📋 分配表已生成，共 {} 次提交", plan.total());
    for question in questions.iter() {
        if let Some(table) = plan.table(&question.id) {
            let mut freq: Vec<(&str, usize)> = table.frequencies().into_iter().collect();
            freq.sort();
            info!("  {} -> {:?}", question.id, freq);
        }
    }
}

/// 打印最终统计信息
///
/// # 参数
/// - `summary`: 运行统计
/// - `log_file_path`: 日志文件路径
pub fn print_final_stats(summary: &RunSummary, log_file_path: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部提交完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", summary.succeeded, summary.attempted);
    info!("❌ 失败: {}", summary.failed());
    if summary.cancelled {
        info!("⏹️ 运行被中止");
    }
    info!("{}", "=".repeat(60));
    info!("\n日志已保存至: {}", log_file_path);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

//! 提交计划
//!
//! 运行开始前一次性构建：校验题目快照，为每道单选题计算配额并生成分配表。
//! 构建完成后只读，可以被任意多个并发提交同时读取。

use crate::error::{AppError, AppResult, ConfigError};
use crate::models::{Question, QuestionKind, QuestionSet};
use crate::services::quota_allocator;
use crate::services::{open_ended_selector, AssignmentTable};
use rand::Rng;
use tracing::debug;

/// 单道题的取值来源
#[derive(Debug, Clone)]
enum PlanEntry {
    Closed(AssignmentTable),
    OpenEnded {
        question_id: String,
        pool: Vec<String>,
    },
}

/// 提交计划
#[derive(Debug, Clone)]
pub struct SubmissionPlan {
    total: usize,
    entries: Vec<PlanEntry>,
}

impl SubmissionPlan {
    /// 构建提交计划
    ///
    /// # 参数
    /// - `questions`: 题目快照
    /// - `total`: 提交总数
    ///
    /// # 返回
    /// 校验失败时返回 `ConfigError` / `ValidationError`，不会发出任何网络请求
    pub fn build(questions: &QuestionSet, total: usize) -> AppResult<Self> {
        if total == 0 {
            return Err(ConfigError::ZeroSubmissions.into());
        }
        questions.validate()?;

        let entries = questions
            .iter()
            .map(|question| build_entry(question, total))
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self { total, entries })
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// 某道单选题的分配表
    pub fn table(&self, question_id: &str) -> Option<&AssignmentTable> {
        self.entries.iter().find_map(|entry| match entry {
            PlanEntry::Closed(table) if table.question_id() == question_id => Some(table),
            _ => None,
        })
    }

    /// 第 `index` 次提交的答案（按题目顺序）
    pub fn answers_for(&self, index: usize) -> Vec<(String, String)> {
        self.answers_with(index, &mut rand::thread_rng())
    }

    /// 使用指定随机数发生器组装答案
    pub fn answers_with<R: Rng + ?Sized>(&self, index: usize, rng: &mut R) -> Vec<(String, String)> {
        // 每张分配表的长度都等于 total
        debug_assert!(index < self.total, "提交序号越界: {} >= {}", index, self.total);

        self.entries
            .iter()
            .map(|entry| match entry {
                PlanEntry::Closed(table) => (
                    table.question_id().to_string(),
                    table.get(index).unwrap_or_default().to_string(),
                ),
                PlanEntry::OpenEnded { question_id, pool } => (
                    question_id.clone(),
                    open_ended_selector::pick_with(pool, rng),
                ),
            })
            .collect()
    }
}

fn build_entry(question: &Question, total: usize) -> AppResult<PlanEntry> {
    match &question.kind {
        QuestionKind::OpenEnded { responses } => Ok(PlanEntry::OpenEnded {
            question_id: question.id.clone(),
            pool: responses.clone(),
        }),
        QuestionKind::Closed { options } => {
            let texts: Vec<String> = options.iter().map(|o| o.text.clone()).collect();
            let percentages: Vec<u32> = options.iter().map(|o| o.percentage).collect();

            let counts = quota_allocator::allocate(&percentages, total)
                .map_err(|e| AppError::invalid_question(&question.id, e))?;

            debug!("题目 {} 配额: {:?}", question.id, counts);

            let table = AssignmentTable::build(question.id.clone(), &texts, &counts, total)
                .map_err(|e| AppError::invalid_question(&question.id, e))?;

            Ok(PlanEntry::Closed(table))
        }
    }
}

//! 题目模型
//!
//! 由外部编辑层（或题目文件）构造，运行期间只读。

use crate::error::{AppError, AppResult, ConfigError, ValidationError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 单选题的一个选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    /// 选项文本（题目内唯一、非空）
    pub text: String,
    /// 目标百分比 [0, 100]
    pub percentage: u32,
}

impl ChoiceOption {
    pub fn new(text: impl Into<String>, percentage: u32) -> Self {
        Self {
            text: text.into(),
            percentage,
        }
    }
}

/// 题目类型
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuestionKind {
    /// 开放题：从回答池中随机取
    OpenEnded {
        #[serde(default)]
        responses: Vec<String>,
    },
    /// 单选题：按百分比配额分配
    Closed { options: Vec<ChoiceOption> },
}

/// 题目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// 表单字段 ID，例如 entry.123456
    pub id: String,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

impl Question {
    /// 创建开放题
    pub fn open_ended(id: impl Into<String>, responses: Vec<String>) -> Self {
        Self {
            id: id.into(),
            kind: QuestionKind::OpenEnded { responses },
        }
    }

    /// 创建单选题
    pub fn closed(id: impl Into<String>, options: Vec<ChoiceOption>) -> Self {
        Self {
            id: id.into(),
            kind: QuestionKind::Closed { options },
        }
    }

    pub fn is_open_ended(&self) -> bool {
        matches!(self.kind, QuestionKind::OpenEnded { .. })
    }

    /// 校验单个题目
    ///
    /// 开放题总是合法；单选题要求选项非空、文本非空且不重复、百分比合法。
    pub fn validate(&self) -> AppResult<()> {
        if self.id.trim().is_empty() {
            return Err(ConfigError::EmptyQuestionId.into());
        }

        let options = match &self.kind {
            QuestionKind::OpenEnded { .. } => return Ok(()),
            QuestionKind::Closed { options } => options,
        };

        if options.is_empty() {
            return Err(ConfigError::EmptyOptions {
                question_id: self.id.clone(),
            }
            .into());
        }

        let mut seen = HashSet::new();
        for (index, option) in options.iter().enumerate() {
            if option.text.is_empty() {
                return Err(AppError::invalid_question(
                    &self.id,
                    ValidationError::EmptyOptionText { index },
                ));
            }
            if !seen.insert(option.text.as_str()) {
                return Err(AppError::invalid_question(
                    &self.id,
                    ValidationError::DuplicateOptionText {
                        text: option.text.clone(),
                    },
                ));
            }
        }

        let percentages: Vec<u32> = options.iter().map(|o| o.percentage).collect();
        crate::services::quota_allocator::validate_percentages(&percentages)
            .map_err(|e| AppError::invalid_question(&self.id, e))?;

        Ok(())
    }
}

/// 题目集合（保持顺序，ID 唯一）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSet {
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl QuestionSet {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// 单选题数量
    pub fn closed_count(&self) -> usize {
        self.questions.iter().filter(|q| !q.is_open_ended()).count()
    }

    /// 校验整个集合：非空、ID 唯一、每道题合法
    pub fn validate(&self) -> AppResult<()> {
        if self.questions.is_empty() {
            return Err(ConfigError::EmptyQuestionSet.into());
        }

        let mut ids = HashSet::new();
        for question in &self.questions {
            question.validate()?;
            if !ids.insert(question.id.as_str()) {
                return Err(ConfigError::DuplicateQuestionId {
                    question_id: question.id.clone(),
                }
                .into());
            }
        }

        Ok(())
    }
}

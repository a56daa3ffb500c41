//! 提交上下文
//!
//! 封装"这是第几次提交，共几次"这一信息

use std::fmt::Display;

/// 提交上下文
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionCtx {
    /// 提交序号（从 0 开始，也是分配表的下标）
    pub index: usize,

    /// 提交总数
    pub total: usize,
}

impl SubmissionCtx {
    /// 创建新的提交上下文
    pub fn new(index: usize, total: usize) -> Self {
        Self { index, total }
    }

    /// 从 1 开始的序号（仅用于日志显示）
    pub fn ordinal(&self) -> usize {
        self.index + 1
    }
}

impl Display for SubmissionCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[提交 {}/{}]", self.ordinal(), self.total)
    }
}

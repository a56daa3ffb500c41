//! 分配表生成 - 业务能力层
//!
//! 把配额展开成选项多重集，并用题目 ID 派生的种子做确定性洗牌。
//! 同一个题目 ID 每次运行得到相同的顺序，不同题目 ID 的顺序互不相关。

use crate::error::ValidationError;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use tracing::warn;

/// 由题目 ID 派生 256 位种子（SHA-256）
pub fn seed_for(question_id: &str) -> [u8; 32] {
    let digest = Sha256::digest(question_id.as_bytes());
    let mut seed = [0u8; 32];
    seed.copy_from_slice(&digest);
    seed
}

/// 生成分配序列
///
/// # 参数
/// - `question_id`: 题目 ID（决定洗牌种子）
/// - `options`: 选项文本，顺序与 `counts` 对应
/// - `counts`: 每个选项出现的次数
/// - `total`: 序列长度（提交次数）
///
/// # 返回
/// 长度为 `total` 的选项文本序列
pub fn build(
    question_id: &str,
    options: &[String],
    counts: &[usize],
    total: usize,
) -> Result<Vec<String>, ValidationError> {
    if options.len() != counts.len() {
        return Err(ValidationError::LengthMismatch {
            options: options.len(),
            counts: counts.len(),
        });
    }

    let mut bucket: Vec<String> = Vec::with_capacity(total);
    for (option, &count) in options.iter().zip(counts) {
        bucket.extend(std::iter::repeat(option.clone()).take(count));
    }

    let mut rng = ChaCha8Rng::from_seed(seed_for(question_id));
    bucket.shuffle(&mut rng);

    // 配额计算正确时不会触发
    if bucket.len() != total {
        warn!(
            "⚠️ 题目 {} 的多重集长度 {} 与提交次数 {} 不一致",
            question_id,
            bucket.len(),
            total
        );
        if let Some(first) = options.first() {
            while bucket.len() < total {
                bucket.push(first.clone());
            }
        }
        bucket.truncate(total);
    }

    Ok(bucket)
}

/// 分配表：提交序号 -> 选项文本
///
/// 一次运行内只构建一次，之后只读。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentTable {
    question_id: String,
    values: Vec<String>,
}

impl AssignmentTable {
    /// 由配额构建分配表
    pub fn build(
        question_id: impl Into<String>,
        options: &[String],
        counts: &[usize],
        total: usize,
    ) -> Result<Self, ValidationError> {
        let question_id = question_id.into();
        let values = build(&question_id, options, counts, total)?;
        Ok(Self {
            question_id,
            values,
        })
    }

    pub fn question_id(&self) -> &str {
        &self.question_id
    }

    /// 第 `index` 次提交使用的选项
    pub fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// 统计每个选项出现的次数
    pub fn frequencies(&self) -> HashMap<&str, usize> {
        let mut freq = HashMap::new();
        for value in &self.values {
            *freq.entry(value.as_str()).or_insert(0) += 1;
        }
        freq
    }
}

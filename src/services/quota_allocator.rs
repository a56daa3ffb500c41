//! 配额分配 - 业务能力层
//!
//! 把百分比向量换算为整数计数，总和严格等于提交次数。
//! 使用最大余数法（Hare-Niemeyer）：先取整，剩余名额按小数部分从大到小分配，
//! 小数部分相同时按选项下标从小到大。

use crate::error::ValidationError;

/// 校验百分比向量：每一项在 [0, 100]，总和为 100
pub fn validate_percentages(percentages: &[u32]) -> Result<(), ValidationError> {
    for (index, &value) in percentages.iter().enumerate() {
        if value > 100 {
            return Err(ValidationError::PercentageOutOfRange { index, value });
        }
    }

    let sum: u64 = percentages.iter().map(|&p| u64::from(p)).sum();
    if sum != 100 {
        return Err(ValidationError::PercentageSumMismatch { sum });
    }

    Ok(())
}

/// 按最大余数法分配配额
///
/// # 参数
/// - `percentages`: 各选项的目标百分比，总和必须为 100
/// - `total`: 总提交次数
///
/// # 返回
/// 与 `percentages` 等长的计数向量，总和等于 `total`；
/// `total` 超过 `u64::MAX / 100` 时返回 `TotalTooLarge`
pub fn allocate(percentages: &[u32], total: usize) -> Result<Vec<usize>, ValidationError> {
    validate_percentages(percentages)?;

    let total = total as u64;

    // 精确配额 q_i = p_i * total / 100，用整数表示：整数部分 + 以 1/100 为单位的余数
    let mut counts = Vec::with_capacity(percentages.len());
    let mut remainders = Vec::with_capacity(percentages.len());
    for (index, &p) in percentages.iter().enumerate() {
        let scaled = u64::from(p)
            .checked_mul(total)
            .ok_or(ValidationError::TotalTooLarge { total })?;
        counts.push(scaled / 100);
        remainders.push((scaled % 100, index));
    }

    let assigned: u64 = counts.iter().sum();
    let remaining = (total - assigned) as usize;

    // 余数降序，下标升序
    remainders.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

    for &(_, index) in remainders.iter().take(remaining) {
        counts[index] += 1;
    }

    Ok(counts.into_iter().map(|c| c as usize).collect())
}

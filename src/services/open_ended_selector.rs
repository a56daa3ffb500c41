//! 开放题回答选择 - 业务能力层
//!
//! 每次提交独立地从回答池中均匀随机取一条，没有配额，也不保证可复现。

use rand::seq::SliceRandom;
use rand::Rng;

/// 从回答池中随机取一条，池为空时返回空字符串
pub fn pick(pool: &[String]) -> String {
    pick_with(pool, &mut rand::thread_rng())
}

/// 使用指定随机数发生器取一条
pub fn pick_with<R: Rng + ?Sized>(pool: &[String], rng: &mut R) -> String {
    pool.choose(rng).cloned().unwrap_or_default()
}

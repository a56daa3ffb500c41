//! 失败记录写入服务 - 业务能力层
//!
//! 只负责把失败的提交追加写入文本文件，不关心提交流程

use crate::workflow::FailedSubmission;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use tracing::debug;

/// 失败记录写入服务
pub struct FailureWriter {
    file_path: String,
}

impl FailureWriter {
    /// 使用配置中的文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            file_path: path.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.file_path
    }

    /// 追加写入失败记录
    ///
    /// # 参数
    /// - `failures`: 本次运行失败的提交
    ///
    /// # 返回
    /// 写入的行数；没有失败时不创建文件
    pub fn write_all(&self, failures: &[FailedSubmission]) -> Result<usize> {
        if failures.is_empty() {
            return Ok(0);
        }

        debug!("写入 {} 条失败记录到 {}", failures.len(), self.file_path);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.file_path)
            .with_context(|| format!("无法打开失败记录文件: {}", self.file_path))?;

        let mut buf = String::new();
        for failure in failures {
            buf.push_str(&format!(
                "submission {} | {}\n",
                failure.index, failure.reason
            ));
        }

        file.write_all(buf.as_bytes())
            .with_context(|| format!("无法写入失败记录文件: {}", self.file_path))?;

        Ok(failures.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("{}-{}.txt", name, std::process::id()))
    }

    #[test]
    fn test_write_all_appends_lines() {
        let path = temp_path("failure-writer-append");
        let _ = std::fs::remove_file(&path);
        let writer = FailureWriter::with_path(path.to_string_lossy());

        let failures = vec![
            FailedSubmission {
                index: 3,
                reason: "timeout".to_string(),
            },
            FailedSubmission {
                index: 8,
                reason: "status 500".to_string(),
            },
        ];

        assert_eq!(writer.write_all(&failures).unwrap(), 2);
        assert_eq!(writer.write_all(&failures[..1]).unwrap(), 1);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "submission 3 | timeout\nsubmission 8 | status 500\nsubmission 3 | timeout\n"
        );
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_write_all_skips_empty() {
        let path = temp_path("failure-writer-empty");
        let _ = std::fs::remove_file(&path);
        let writer = FailureWriter::with_path(path.to_string_lossy());

        assert_eq!(writer.write_all(&[]).unwrap(), 0);
        assert!(!path.exists());
    }
}

use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 百分比 / 选项校验错误
    #[error("校验错误: {0}")]
    Validation(#[from] ValidationError),
    /// 带题目 ID 的校验错误
    #[error("题目 {question_id} 校验失败: {source}")]
    InvalidQuestion {
        question_id: String,
        #[source]
        source: ValidationError,
    },
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 传输错误（只在构建客户端时向上传播）
    #[error("传输错误: {0}")]
    Transport(#[from] TransportError),
}

/// 百分比 / 选项校验错误
///
/// 调用方违反约定，分配之前抛出，不做任何自动修正。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// 百分比超出 [0, 100]
    #[error("第 {index} 个百分比超出范围: {value}")]
    PercentageOutOfRange { index: usize, value: u32 },
    /// 百分比之和不是 100
    #[error("百分比之和必须为 100 (实际: {sum})")]
    PercentageSumMismatch { sum: u64 },
    /// 选项数量与计数数量不一致
    #[error("选项数量 {options} 与计数数量 {counts} 不一致")]
    LengthMismatch { options: usize, counts: usize },
    /// 选项文本为空
    #[error("第 {index} 个选项文本为空")]
    EmptyOptionText { index: usize },
    /// 同一题目中选项文本重复
    #[error("选项文本重复: {text}")]
    DuplicateOptionText { text: String },
    /// 提交次数过大，配额计算会溢出
    #[error("提交次数过大: {total}")]
    TotalTooLarge { total: u64 },
}

/// 配置错误，在运行开始之前抛出
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// 提交次数为 0
    #[error("提交次数必须为正整数")]
    ZeroSubmissions,
    /// 没有任何题目
    #[error("没有添加任何题目")]
    EmptyQuestionSet,
    /// 单选题没有选项
    #[error("单选题 {question_id} 没有任何选项")]
    EmptyOptions { question_id: String },
    /// 题目 ID 为空
    #[error("题目 ID 不能为空")]
    EmptyQuestionId,
    /// 题目 ID 重复
    #[error("题目 ID 重复: {question_id}")]
    DuplicateQuestionId { question_id: String },
    /// 表单地址无效
    #[error("无效的表单地址 (需要 viewform 链接): {url}")]
    InvalidFormUrl { url: String },
    /// 并发数为 0
    #[error("并发数必须大于 0")]
    ZeroConcurrency,
}

/// 单次提交的传输错误
///
/// 在提交层被吞掉，只记为一次失败，不会中断整个批次。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// 网络请求失败
    #[error("请求失败 ({endpoint}): {message}")]
    RequestFailed { endpoint: String, message: String },
    /// 请求超时
    #[error("请求超时 ({endpoint}), 超时时间: {timeout_ms}ms")]
    Timeout { endpoint: String, timeout_ms: u128 },
    /// 非 2xx 状态码
    #[error("服务器返回非成功状态码 ({endpoint}): {status}")]
    BadStatus { endpoint: String, status: u16 },
    /// HTTP 客户端创建失败
    #[error("HTTP 客户端创建失败: {0}")]
    ClientBuildFailed(String),
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 给校验错误附上题目 ID
    pub fn invalid_question(question_id: impl Into<String>, source: ValidationError) -> Self {
        AppError::InvalidQuestion {
            question_id: question_id.into(),
            source,
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_question_display_contains_id() {
        let err = AppError::invalid_question(
            "entry.1",
            ValidationError::PercentageSumMismatch { sum: 90 },
        );
        let msg = err.to_string();
        assert!(msg.contains("entry.1"));
        assert!(msg.contains("90"));
    }

    #[test]
    fn test_config_error_converts_into_app_error() {
        let err: AppError = ConfigError::ZeroSubmissions.into();
        assert!(matches!(err, AppError::Config(ConfigError::ZeroSubmissions)));
    }
}

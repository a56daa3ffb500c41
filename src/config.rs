use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 表单 viewform 链接
    pub form_url: String,
    /// 题目文件（.toml / .json）
    pub questions_file: String,
    /// 提交总数
    pub total_submissions: usize,
    /// 同时在途的提交数
    pub max_concurrent_submissions: usize,
    /// 单次提交超时（秒）
    pub request_timeout_secs: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
    /// 失败记录文件
    pub failure_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            form_url: String::new(),
            questions_file: "questions.toml".to_string(),
            total_submissions: 10,
            max_concurrent_submissions: 1,
            request_timeout_secs: 10,
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
            failure_log_file: "failures.txt".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            form_url: std::env::var("FORM_URL").unwrap_or(default.form_url),
            questions_file: std::env::var("QUESTIONS_FILE").unwrap_or(default.questions_file),
            total_submissions: env_parse("TOTAL_SUBMISSIONS", default.total_submissions),
            max_concurrent_submissions: env_parse(
                "MAX_CONCURRENT_SUBMISSIONS",
                default.max_concurrent_submissions,
            ),
            request_timeout_secs: env_parse("REQUEST_TIMEOUT_SECS", default.request_timeout_secs),
            verbose_logging: env_parse("VERBOSE_LOGGING", default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
            failure_log_file: std::env::var("FAILURE_LOG_FILE").unwrap_or(default.failure_log_file),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// 读取并解析环境变量，缺失或解析失败时使用默认值
fn env_parse<T: FromStr>(var_name: &str, default: T) -> T {
    match std::env::var(var_name) {
        Ok(value) => parse_or(var_name, &value, default),
        Err(_) => default,
    }
}

fn parse_or<T: FromStr>(var_name: &str, value: &str, default: T) -> T {
    match value.trim().parse() {
        Ok(parsed) => parsed,
        Err(_) => {
            warn!("⚠️ 环境变量 {} 的值 '{}' 无法解析，使用默认值", var_name, value);
            default
        }
    }
}

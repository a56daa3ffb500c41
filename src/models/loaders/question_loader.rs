use crate::models::question::{QuestionKind, QuestionSet};
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// 从题目文件加载题目集合（按扩展名选择 TOML / JSON）
pub async fn load_question_set(path: &Path) -> Result<QuestionSet> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("无法读取题目文件: {}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase());

    let mut set = match extension.as_deref() {
        Some("toml") => parse_toml(&content)
            .with_context(|| format!("无法解析TOML文件: {}", path.display()))?,
        Some("json") => parse_json(&content)
            .with_context(|| format!("无法解析JSON文件: {}", path.display()))?,
        _ => anyhow::bail!("不支持的题目文件格式: {}", path.display()),
    };

    normalize_responses(&mut set);

    tracing::info!(
        "成功加载 {} 个题目 (单选 {}, 开放 {})",
        set.len(),
        set.closed_count(),
        set.len() - set.closed_count()
    );

    Ok(set)
}

pub fn parse_toml(content: &str) -> Result<QuestionSet> {
    Ok(toml::from_str(content)?)
}

pub fn parse_json(content: &str) -> Result<QuestionSet> {
    Ok(serde_json::from_str(content)?)
}

/// 去掉开放题回答两端空白，丢弃空行
pub fn normalize_responses(set: &mut QuestionSet) {
    for question in &mut set.questions {
        if let QuestionKind::OpenEnded { responses } = &mut question.kind {
            *responses = responses
                .iter()
                .map(|r| r.trim())
                .filter(|r| !r.is_empty())
                .map(str::to_string)
                .collect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::{ChoiceOption, Question};

    const SAMPLE_TOML: &str = r#"
[[questions]]
id = "entry.123456"
kind = "closed"
options = [ { text = "Yes", percentage = 70 }, { text = "No", percentage = 30 } ]

[[questions]]
id = "entry.654321"
kind = "open_ended"
responses = ["  Great ", "", "Fine"]
"#;

    #[test]
    fn test_parse_toml_sample() {
        let mut set = parse_toml(SAMPLE_TOML).unwrap();
        normalize_responses(&mut set);

        assert_eq!(set.len(), 2);
        assert_eq!(
            set.questions[0],
            Question::closed(
                "entry.123456",
                vec![ChoiceOption::new("Yes", 70), ChoiceOption::new("No", 30)]
            )
        );
        assert_eq!(
            set.questions[1],
            Question::open_ended("entry.654321", vec!["Great".to_string(), "Fine".to_string()])
        );
    }

    #[test]
    fn test_parse_toml_open_ended_without_responses() {
        let set = parse_toml(
            r#"
[[questions]]
id = "entry.1"
kind = "open_ended"
"#,
        )
        .unwrap();

        assert_eq!(set.questions[0], Question::open_ended("entry.1", vec![]));
    }

    #[test]
    fn test_parse_rejects_unknown_kind() {
        assert!(parse_json(r#"{"questions":[{"id":"entry.1","kind":"grid"}]}"#).is_err());
    }

    #[tokio::test]
    async fn test_load_question_set_by_extension() {
        let dir = std::env::temp_dir();
        let toml_path = dir.join(format!("questions-{}.toml", std::process::id()));
        let txt_path = dir.join(format!("questions-{}.txt", std::process::id()));
        std::fs::write(&toml_path, SAMPLE_TOML).unwrap();
        std::fs::write(&txt_path, SAMPLE_TOML).unwrap();

        let set = load_question_set(&toml_path).await.unwrap();
        assert_eq!(set.closed_count(), 1);
        assert!(load_question_set(&txt_path).await.is_err());
        assert!(load_question_set(&dir.join("missing-questions.toml"))
            .await
            .is_err());

        let _ = std::fs::remove_file(&toml_path);
        let _ = std::fs::remove_file(&txt_path);
    }
}

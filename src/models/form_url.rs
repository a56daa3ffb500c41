use crate::error::ConfigError;

/// 由 viewform 链接推导提交地址
///
/// `https://docs.google.com/forms/d/e/<id>/viewform?usp=sf_link`
/// -> `https://docs.google.com/forms/d/e/<id>/formResponse`
pub fn form_response_url(view_url: &str) -> Result<String, ConfigError> {
    let trimmed = view_url.trim();
    let invalid = || ConfigError::InvalidFormUrl {
        url: view_url.to_string(),
    };

    if !trimmed.contains("viewform") {
        return Err(invalid());
    }

    // 去掉查询串和锚点
    let base = trimmed
        .split(|c: char| c == '?' || c == '#')
        .next()
        .unwrap_or(trimmed)
        .trim_end_matches('/');

    match base.rsplit_once('/') {
        Some((prefix, _)) if !prefix.is_empty() => Ok(format!("{}/formResponse", prefix)),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_response_url_replaces_last_segment() {
        assert_eq!(
            form_response_url("https://docs.google.com/forms/d/e/abc/viewform").unwrap(),
            "https://docs.google.com/forms/d/e/abc/formResponse"
        );
    }

    #[test]
    fn test_form_response_url_drops_query_and_fragment() {
        assert_eq!(
            form_response_url("https://docs.google.com/forms/d/e/abc/viewform?usp=sf_link#top")
                .unwrap(),
            "https://docs.google.com/forms/d/e/abc/formResponse"
        );
        assert_eq!(
            form_response_url("  https://docs.google.com/forms/d/e/abc/viewform/ ").unwrap(),
            "https://docs.google.com/forms/d/e/abc/formResponse"
        );
    }

    #[test]
    fn test_form_response_url_rejects_non_viewform() {
        assert_eq!(
            form_response_url("https://example.com/form"),
            Err(ConfigError::InvalidFormUrl {
                url: "https://example.com/form".to_string()
            })
        );
        assert!(form_response_url("").is_err());
        assert!(form_response_url("viewform").is_err());
    }
}

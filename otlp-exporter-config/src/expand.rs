//! Placeholder expansion for configuration values.
//!
//! String leaves may embed `${env.NAME}` and `${file.path}` placeholders,
//! optionally with a fallback: `${env.NAME:-fallback}`. Expansion runs over
//! the raw value tree before resolution, so the resolver only ever sees
//! literal values.

use serde_json::Value;

use crate::error::{ConfigError, Result};

/// Expand every placeholder in the string leaves of `value`, in place.
///
/// Non-string leaves pass through untouched. A placeholder that cannot be
/// resolved and carries no fallback aborts expansion; the tree may be
/// partially expanded at that point and must be discarded.
pub fn expand(value: &mut Value) -> Result<()> {
    match value {
        Value::String(s) => {
            if s.contains("${") {
                *s = expand_str(s)?;
            }
            Ok(())
        }
        Value::Array(items) => items.iter_mut().try_for_each(expand),
        Value::Object(map) => map.values_mut().try_for_each(expand),
        _ => Ok(()),
    }
}

fn expand_str(input: &str) -> Result<String> {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after.find('}').ok_or_else(|| ConfigError::Expansion {
            placeholder: after.to_string(),
            reason: "unterminated placeholder".to_string(),
        })?;
        out.push_str(&resolve_placeholder(&after[..end])?);
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    Ok(out)
}

fn resolve_placeholder(placeholder: &str) -> Result<String> {
    let (key, fallback) = match placeholder.split_once(":-") {
        Some((key, fallback)) => (key, Some(fallback)),
        None => (placeholder, None),
    };

    if let Some(name) = key.strip_prefix("env.") {
        match std::env::var(name) {
            Ok(value) => Ok(value),
            Err(_) => fallback.map(str::to_string).ok_or_else(|| ConfigError::Expansion {
                placeholder: placeholder.to_string(),
                reason: format!("environment variable '{}' is not set", name),
            }),
        }
    } else if let Some(path) = key.strip_prefix("file.") {
        match std::fs::read_to_string(path) {
            // A trailing newline is almost always an artifact of the editor,
            // not part of the secret or endpoint stored in the file.
            Ok(content) => Ok(content.trim_end_matches('\n').to_string()),
            Err(e) => fallback.map(str::to_string).ok_or_else(|| ConfigError::Expansion {
                placeholder: placeholder.to_string(),
                reason: format!("failed to read '{}': {}", path, e),
            }),
        }
    } else {
        Err(ConfigError::Expansion {
            placeholder: placeholder.to_string(),
            reason: "unknown prefix, expected 'env.' or 'file.'".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::json;

    use super::*;

    #[test]
    fn test_env_expansion() {
        unsafe { std::env::set_var("OTLP_CFG_TEST_ENDPOINT", "http://collector:4317") };

        let mut value = json!({
            "endpoint": "${env.OTLP_CFG_TEST_ENDPOINT}",
        });
        expand(&mut value).unwrap();

        assert_eq!(value["endpoint"], "http://collector:4317");
    }

    #[test]
    fn test_env_expansion_inside_larger_string() {
        unsafe { std::env::set_var("OTLP_CFG_TEST_HOST", "collector.internal") };

        let mut value = json!({
            "endpoint": "http://${env.OTLP_CFG_TEST_HOST}:4317",
        });
        expand(&mut value).unwrap();

        assert_eq!(value["endpoint"], "http://collector.internal:4317");
    }

    #[test]
    fn test_multiple_placeholders_in_one_string() {
        unsafe {
            std::env::set_var("OTLP_CFG_TEST_SCHEME", "https");
            std::env::set_var("OTLP_CFG_TEST_PORT", "4318");
        }

        let mut value = json!("${env.OTLP_CFG_TEST_SCHEME}://otel:${env.OTLP_CFG_TEST_PORT}");
        expand(&mut value).unwrap();

        assert_eq!(value, "https://otel:4318");
    }

    #[test]
    fn test_missing_env_without_fallback_fails() {
        let mut value = json!("${env.OTLP_CFG_TEST_DOES_NOT_EXIST}");

        let err = expand(&mut value).unwrap_err();
        assert!(matches!(err, ConfigError::Expansion { .. }));
        assert!(err.to_string().contains("OTLP_CFG_TEST_DOES_NOT_EXIST"));
    }

    #[test]
    fn test_missing_env_with_fallback() {
        let mut value = json!("${env.OTLP_CFG_TEST_ALSO_MISSING:-grpc}");
        expand(&mut value).unwrap();

        assert_eq!(value, "grpc");
    }

    #[test]
    fn test_file_expansion() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "secret-token").unwrap();

        let mut value = json!(format!("${{file.{}}}", file.path().display()));
        expand(&mut value).unwrap();

        // The trailing newline is trimmed.
        assert_eq!(value, "secret-token");
    }

    #[test]
    fn test_missing_file_with_fallback() {
        let mut value = json!("${file./nonexistent/otlp-cfg-test:-default-value}");
        expand(&mut value).unwrap();

        assert_eq!(value, "default-value");
    }

    #[test]
    fn test_missing_file_without_fallback_fails() {
        let mut value = json!("${file./nonexistent/otlp-cfg-test}");

        let err = expand(&mut value).unwrap_err();
        assert!(matches!(err, ConfigError::Expansion { .. }));
    }

    #[test]
    fn test_unknown_prefix_fails() {
        let mut value = json!("${vault.some/secret}");

        let err = expand(&mut value).unwrap_err();
        assert!(err.to_string().contains("unknown prefix"));
    }

    #[test]
    fn test_unterminated_placeholder_fails() {
        let mut value = json!("${env.OTLP_CFG_TEST_UNTERMINATED");

        let err = expand(&mut value).unwrap_err();
        assert!(err.to_string().contains("unterminated"));
    }

    #[test]
    fn test_non_string_leaves_untouched() {
        let mut value = json!({
            "enabled": true,
            "batch_processor": { "max_queue_size": 2048 },
            "list": [1, 2, 3],
        });
        let before = value.clone();
        expand(&mut value).unwrap();

        assert_eq!(value, before);
    }
}

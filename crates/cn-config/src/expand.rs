//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in a config value.
///
/// `field` names the config key being expanded and is carried into the error
/// for diagnostics. Text outside references is passed through unchanged.
///
/// # Errors
///
/// Returns [`ConfigError::EnvVar`] for an unterminated reference, an empty
/// variable name, or an unset variable without a default.
pub fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    let err = |message: String| ConfigError::EnvVar {
        field: field.to_owned(),
        message,
    };

    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let Some(end) = after.find('}') else {
            return Err(err(format!("unterminated reference in \"{value}\"")));
        };
        let reference = &after[..end];

        let (name, default) = match reference.split_once(":-") {
            Some((name, default)) => (name, Some(default)),
            None => (reference, None),
        };

        if name.is_empty() {
            return Err(err(format!("empty variable name in \"{value}\"")));
        }

        match std::env::var(name) {
            Ok(val) => out.push_str(&val),
            Err(_) => match default {
                Some(default) => out.push_str(default),
                None => return Err(err(format!("${{{name}}} not set"))),
            },
        }

        rest = &after[end + 1..];
    }

    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(expand_env("127.0.0.1", "server.host").unwrap(), "127.0.0.1");
    }

    #[test]
    fn test_expands_set_variable() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("CN_TEST_EXPAND_HOST", "0.0.0.0");
        }

        let result = expand_env("${CN_TEST_EXPAND_HOST}", "server.host").unwrap();

        assert_eq!(result, "0.0.0.0");

        unsafe {
            std::env::remove_var("CN_TEST_EXPAND_HOST");
        }
    }

    #[test]
    fn test_default_used_when_unset() {
        let result = expand_env("${CN_TEST_EXPAND_UNSET:-localhost}", "server.host").unwrap();

        assert_eq!(result, "localhost");
    }

    #[test]
    fn test_surrounding_text_preserved() {
        let result = expand_env("host-${CN_TEST_EXPAND_MISSING:-a}-end", "server.host").unwrap();

        assert_eq!(result, "host-a-end");
    }

    #[test]
    fn test_unset_without_default_errors() {
        let err = expand_env("${CN_TEST_EXPAND_NOPE}", "server.host").unwrap_err();

        assert!(err.to_string().contains("CN_TEST_EXPAND_NOPE"));
        assert!(err.to_string().contains("server.host"));
    }

    #[test]
    fn test_unterminated_reference_errors() {
        let err = expand_env("${OOPS", "server.host").unwrap_err();

        assert!(err.to_string().contains("unterminated"));
    }

    #[test]
    fn test_empty_name_errors() {
        assert!(expand_env("${}", "server.host").is_err());
        assert!(expand_env("${:-fallback}", "server.host").is_err());
    }
}

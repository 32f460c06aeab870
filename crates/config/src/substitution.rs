//! Environment variable substitution in configuration files.

use anyhow::Result;
use regex::Regex;
use std::env;
use tracing::{debug, warn};

/// Substitute environment variables in the format ${VAR_NAME} or $VAR_NAME
pub fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{(\w+)\}|\$(\w+)")?;
    let mut result = content.to_string();
    let mut missing_vars = Vec::new();

    for caps in re.captures_iter(content) {
        let var_name = match caps.get(1).or(caps.get(2)) {
            Some(m) => m.as_str(),
            None => continue,
        };
        let placeholder = match caps.get(0) {
            Some(m) => m.as_str(),
            None => continue,
        };

        match env::var(var_name) {
            Ok(value) => {
                debug!("Substituting environment variable: {}", var_name);
                result = result.replace(placeholder, &value);
            }
            Err(_) => {
                warn!("Environment variable '{}' not set", var_name);
                missing_vars.push(var_name.to_string());
                // Keep the placeholder; the validator will catch it later
            }
        }
    }

    if !missing_vars.is_empty() {
        debug!(
            "Environment variables not set (may use defaults or fail validation): {:?}",
            missing_vars
        );
    }

    Ok(result)
}

/// Check if a string contains unresolved environment variable placeholders
pub fn has_unresolved_env_vars(content: &str) -> bool {
    Regex::new(r"\$\{(\w+)\}|\$(\w+)")
        .map(|re| re.is_match(content))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitutes_braced_variable() {
        env::set_var("ROLLDICE_TEST_HOST", "127.0.0.1");
        let result = substitute_env_vars("host: ${ROLLDICE_TEST_HOST}").unwrap();
        assert_eq!(result, "host: 127.0.0.1");
        env::remove_var("ROLLDICE_TEST_HOST");
    }

    #[test]
    fn test_missing_variable_keeps_placeholder() {
        env::remove_var("ROLLDICE_TEST_MISSING");
        let result = substitute_env_vars("host: ${ROLLDICE_TEST_MISSING}").unwrap();
        assert_eq!(result, "host: ${ROLLDICE_TEST_MISSING}");
        assert!(has_unresolved_env_vars(&result));
    }

    #[test]
    fn test_plain_content_untouched() {
        let content = "service:\n  name: rolldice\n";
        assert_eq!(substitute_env_vars(content).unwrap(), content);
        assert!(!has_unresolved_env_vars(content));
    }
}

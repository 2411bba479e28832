//! `${VAR}` expansion for string settings.
//!
//! `${VAR:-default}` falls back to `default` when `VAR` is unset. Bare `$VAR`
//! is left alone so URL templates with literal dollars survive.

use crate::ConfigError;

/// Expand `${...}` references in `value`, naming `field` in errors.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let lookup = |name: &str| -> Result<Option<String>, UnsetVar> {
        std::env::var(name)
            .map(Some)
            .map_err(|_| UnsetVar(name.to_owned()))
    };

    shellexpand::env_with_context(value, lookup)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.cause.0),
        })
}

/// Expand an optional setting in place.
pub(crate) fn expand_opt(value: &mut Option<String>, field: &str) -> Result<(), ConfigError> {
    if let Some(inner) = value.as_mut() {
        *inner = expand_env(inner, field)?;
    }
    Ok(())
}

struct UnsetVar(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_passes_through() {
        assert_eq!(expand_env("CrateDB", "linktree.project").unwrap(), "CrateDB");
    }

    #[test]
    fn test_expands_set_variable() {
        // SAFETY: the variable name is unique to this test
        unsafe {
            std::env::set_var("SDE_TEST_PROJECT_NAME", "Guide");
        }
        let result = expand_env("${SDE_TEST_PROJECT_NAME}", "linktree.project").unwrap();
        assert_eq!(result, "Guide");
        unsafe {
            std::env::remove_var("SDE_TEST_PROJECT_NAME");
        }
    }

    #[test]
    fn test_default_used_when_unset() {
        // SAFETY: the variable name is unique to this test
        unsafe {
            std::env::remove_var("SDE_TEST_UNSET_SUFFIX");
        }
        let result = expand_env(" - ${SDE_TEST_UNSET_SUFFIX:-CrateDB}", "field").unwrap();
        assert_eq!(result, " - CrateDB");
    }

    #[test]
    fn test_unset_without_default_names_field() {
        // SAFETY: the variable name is unique to this test
        unsafe {
            std::env::remove_var("SDE_TEST_MISSING");
        }
        let err = expand_env("${SDE_TEST_MISSING}", "linktree.root_doc").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        let message = err.to_string();
        assert!(message.contains("SDE_TEST_MISSING"));
        assert!(message.contains("linktree.root_doc"));
    }

    #[test]
    fn test_bare_dollar_untouched() {
        assert_eq!(expand_env("price$5", "field").unwrap(), "price$5");
    }

    #[test]
    fn test_expand_opt_none_is_noop() {
        let mut value = None;
        expand_opt(&mut value, "field").unwrap();
        assert_eq!(value, None);
    }
}

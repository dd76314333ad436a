//! `${VAR}` and `${VAR:-default}` expansion for config strings.
//!
//! Bare `$VAR` is left alone so URLs containing dollar signs survive.

use crate::ConfigError;

/// Expand environment variable references in `value`.
///
/// `field` names the config key and only shows up in the error.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let lookup = |var: &str| -> Result<Option<String>, UnsetVar> {
        std::env::var(var).map(Some).map_err(|_| UnsetVar(var.to_owned()))
    };

    shellexpand::env_with_context(value, lookup)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.cause.0),
        })
}

/// Variable referenced without a default and missing from the environment.
struct UnsetVar(String);

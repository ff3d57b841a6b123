//! Environment variable expansion for string configuration values.

use std::env::VarError;

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in a config value.
///
/// `${VAR}` errors when the variable is unset; `${VAR:-default}` falls back
/// to the default. `field` names the config field for error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    let context = |name: &str| -> Result<Option<String>, String> {
        let (var, default) = match name.split_once(":-") {
            Some((var, default)) => (var, Some(default)),
            None => (name, None),
        };
        match std::env::var(var) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => match default {
                Some(default) => Ok(Some(default.to_owned())),
                None => Err(format!("${{{var}}} not set")),
            },
            Err(err) => Err(err.to_string()),
        }
    };

    shellexpand::env_with_context(value, context)
        .map(std::borrow::Cow::into_owned)
        .map_err(|err| ConfigError::EnvVar {
            field: field.to_owned(),
            message: err.cause,
        })
}

//! `${VAR}` expansion for `atomix.toml` string values.
//!
//! - `${VAR}` expands to the value of `VAR` and fails when it is unset
//! - `${VAR:-fallback}` expands to `fallback` when `VAR` is unset
//!
//! Values without `${` are returned as-is, so a literal `$` in a path or host
//! needs no escaping.

use crate::ConfigError;

/// Variable that was referenced but not set.
struct UnsetVar(String);

/// Expand variable references in `value`.
///
/// `field` names the config key (e.g. `docs.root`) for error messages.
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
        .map_err(|err| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", err.cause.0),
        })
}

/// Expand an optional value in place.
pub(crate) fn expand_opt(value: &mut Option<String>, field: &str) -> Result<(), ConfigError> {
    if let Some(raw) = value.as_deref() {
        *value = Some(expand_env(raw, field)?);
    }
    Ok(())
}

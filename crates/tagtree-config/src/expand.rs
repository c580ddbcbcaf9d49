//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references, resolving names with
/// `lookup`.
///
/// An unset variable without a default is an error naming `field`.
/// Strings without `${` are returned unchanged.
pub(crate) fn expand_with(
    value: &str,
    field: &str,
    lookup: &dyn Fn(&str) -> Option<String>,
) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, UnsetVar> {
        lookup(var)
            .map(Some)
            .ok_or_else(|| UnsetVar(var.to_owned()))
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}

/// Name of a variable that was referenced but not set.
struct UnsetVar(String);

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_expand_title() {
        let lookup = vars(&[("SITE_TITLE", "My Site")]);
        let result = expand_with("${SITE_TITLE}", "site.title", &lookup).unwrap();
        assert_eq!(result, "My Site");
    }

    #[test]
    fn test_expand_default_when_unset() {
        let lookup = vars(&[]);
        let result = expand_with("${HOST:-0.0.0.0}", "server.host", &lookup).unwrap();
        assert_eq!(result, "0.0.0.0");
    }

    #[test]
    fn test_set_var_wins_over_default() {
        let lookup = vars(&[("HOST", "10.0.0.1")]);
        let result = expand_with("${HOST:-0.0.0.0}", "server.host", &lookup).unwrap();
        assert_eq!(result, "10.0.0.1");
    }

    #[test]
    fn test_expand_embedded() {
        let lookup = vars(&[("ENV", "staging")]);
        let result = expand_with("Docs (${ENV})", "site.title", &lookup).unwrap();
        assert_eq!(result, "Docs (staging)");
    }

    #[test]
    fn test_missing_var_names_field() {
        let err = expand_with("${MISSING}", "site.title", &vars(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("MISSING"));
        assert!(err.to_string().contains("site.title"));
    }

    #[test]
    fn test_literal_and_bare_dollar_unchanged() {
        let lookup = vars(&[]);
        assert_eq!(expand_with("tagtree", "site.title", &lookup).unwrap(), "tagtree");
        assert_eq!(expand_with("costs $5", "site.title", &lookup).unwrap(), "costs $5");
    }
}

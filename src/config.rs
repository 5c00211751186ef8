//! Preferred-language signal.
//!
//! The preference is read fresh on every translate call and never cached,
//! so a host application may change it between calls (e.g. per request).

use std::env;

/// Environment variable consulted for the caller's preferred language.
pub const PREFERRED_LANGUAGE_VAR: &str = "PREFERRED_USER_LANGUAGE";

/// Language tag used when no preference is set or nothing matches.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Source of the caller's preferred-language signal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LanguagePreference {
    /// Read `PREFERRED_USER_LANGUAGE` from the process environment on each
    /// call; absent or empty falls back to [`DEFAULT_LANGUAGE`].
    #[default]
    Environment,

    /// Use a fixed tag, ignoring the environment. Intended for isolated
    /// per-request contexts and tests.
    Fixed(String),
}

impl LanguagePreference {
    /// The requested language tag for this call.
    pub(crate) fn requested(&self) -> String {
        match self {
            Self::Environment => env::var(PREFERRED_LANGUAGE_VAR)
                .ok()
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            Self::Fixed(tag) => tag.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_environment_unset_uses_default() {
        env::remove_var(PREFERRED_LANGUAGE_VAR);

        assert_eq!(LanguagePreference::Environment.requested(), "en");
    }

    #[test]
    #[serial]
    fn test_environment_set_uses_value() {
        env::set_var(PREFERRED_LANGUAGE_VAR, "es");

        assert_eq!(LanguagePreference::Environment.requested(), "es");

        env::remove_var(PREFERRED_LANGUAGE_VAR);
    }

    #[test]
    #[serial]
    fn test_environment_empty_uses_default() {
        env::set_var(PREFERRED_LANGUAGE_VAR, "");

        assert_eq!(LanguagePreference::Environment.requested(), "en");

        env::remove_var(PREFERRED_LANGUAGE_VAR);
    }

    #[test]
    #[serial]
    fn test_fixed_ignores_environment() {
        env::set_var(PREFERRED_LANGUAGE_VAR, "es");

        let preference = LanguagePreference::Fixed("pt".to_string());
        assert_eq!(preference.requested(), "pt");

        env::remove_var(PREFERRED_LANGUAGE_VAR);
    }

    #[test]
    fn test_default_is_environment() {
        assert_eq!(
            LanguagePreference::default(),
            LanguagePreference::Environment
        );
    }
}

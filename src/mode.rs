//! Development/production mode selection.
//!
//! The mode decides which construction strategy the catalog uses for its
//! deprecated components. It is read once from the environment and can be
//! overridden for the whole process with [`set_mode`]; it is never checked
//! per render.

use std::str::FromStr;
use std::sync::{Mutex, PoisonError};

use once_cell::sync::Lazy;

use crate::error::BoxstyleError;

/// Environment variable consulted by [`Mode::from_env`].
pub const MODE_ENV_VAR: &str = "BOXSTYLE_ENV";

/// Build mode for component construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Deprecated components warn on first render.
    Development,
    #[default]
    Production,
}

impl Mode {
    /// Reads the mode from [`MODE_ENV_VAR`].
    ///
    /// An unset variable means production. An unrecognized value is logged
    /// and also treated as production.
    pub fn from_env() -> Mode {
        match std::env::var(MODE_ENV_VAR) {
            Ok(value) => value.parse().unwrap_or_else(|err: BoxstyleError| {
                tracing::warn!(%err, "falling back to production mode");
                Mode::Production
            }),
            Err(_) => Mode::Production,
        }
    }

    pub fn is_development(self) -> bool {
        self == Mode::Development
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Production => "production",
        }
    }
}

impl FromStr for Mode {
    type Err = BoxstyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Mode::Development),
            "production" | "prod" => Ok(Mode::Production),
            _ => Err(BoxstyleError::InvalidMode {
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

static MODE: Lazy<Mutex<Mode>> = Lazy::new(|| Mutex::new(Mode::from_env()));

/// Overrides the process-wide mode.
///
/// Only components constructed afterwards are affected; this is useful for
/// tests or when the host decides the mode itself.
pub fn set_mode(mode: Mode) {
    *MODE.lock().unwrap_or_else(PoisonError::into_inner) = mode;
}

/// Returns the process-wide mode.
pub fn current_mode() -> Mode {
    *MODE.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_parse_modes() {
        assert_eq!("development".parse::<Mode>().unwrap(), Mode::Development);
        assert_eq!("dev".parse::<Mode>().unwrap(), Mode::Development);
        assert_eq!(" Production ".parse::<Mode>().unwrap(), Mode::Production);
        assert_eq!("prod".parse::<Mode>().unwrap(), Mode::Production);
    }

    #[test]
    fn test_parse_invalid_mode() {
        let err = "staging".parse::<Mode>().unwrap_err();
        assert_eq!(
            err,
            BoxstyleError::InvalidMode {
                value: "staging".to_string()
            }
        );
    }

    #[test]
    fn test_display_round_trips() {
        for mode in [Mode::Development, Mode::Production] {
            assert_eq!(mode.to_string().parse::<Mode>().unwrap(), mode);
        }
    }

    #[test]
    #[serial]
    fn test_set_mode() {
        let previous = current_mode();

        set_mode(Mode::Development);
        assert!(current_mode().is_development());
        set_mode(Mode::Production);
        assert!(!current_mode().is_development());

        set_mode(previous);
    }
}

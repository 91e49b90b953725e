//! Parser configuration.

use serde::{Deserialize, Serialize};

use crate::dialect::SqlVersion;

/// Options controlling a parse.
///
/// ```
/// use oxide_tsql::{ParseOptions, SqlVersion};
///
/// let options = ParseOptions::default()
///     .with_version(SqlVersion::Sql150)
///     .with_max_errors(Some(10));
/// assert!(options.quoted_identifier);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// `SET QUOTED_IDENTIFIER`: when off, `"…"` lexes as a string literal.
    pub quoted_identifier: bool,
    /// Dialect version the script targets.
    pub version: SqlVersion,
    /// Stop at the first error instead of recovering.
    pub strict: bool,
    /// Maximum number of error diagnostics to report; `None` is unlimited.
    pub max_errors: Option<usize>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            quoted_identifier: true,
            version: SqlVersion::default(),
            strict: false,
            max_errors: None,
        }
    }
}

impl ParseOptions {
    /// Sets the quoted-identifier flag.
    #[must_use]
    pub const fn with_quoted_identifier(mut self, quoted_identifier: bool) -> Self {
        self.quoted_identifier = quoted_identifier;
        self
    }

    /// Sets the dialect version.
    #[must_use]
    pub const fn with_version(mut self, version: SqlVersion) -> Self {
        self.version = version;
        self
    }

    /// Enables or disables stop-at-first-error.
    #[must_use]
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Sets the error cap.
    #[must_use]
    pub const fn with_max_errors(mut self, max_errors: Option<usize>) -> Self {
        self.max_errors = max_errors;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ParseOptions::default();
        assert!(options.quoted_identifier);
        assert_eq!(options.version, SqlVersion::Sql160);
        assert!(!options.strict);
        assert_eq!(options.max_errors, None);
    }

    #[test]
    fn test_deserialize_partial() {
        let options: ParseOptions =
            serde_json::from_str(r#"{"version": "Sql130", "strict": true}"#).unwrap();
        assert_eq!(options.version, SqlVersion::Sql130);
        assert!(options.strict);
        assert!(options.quoted_identifier);
    }

    #[test]
    fn test_builder_setters() {
        let options = ParseOptions::default()
            .with_quoted_identifier(false)
            .with_strict(true)
            .with_max_errors(Some(3));
        assert!(!options.quoted_identifier);
        assert!(options.strict);
        assert_eq!(options.max_errors, Some(3));
    }
}

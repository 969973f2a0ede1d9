//! Options which change how a source is lexed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The lexing relevant subset of the linter options.
///
/// Option names follow the names used in `/*jshint ... */` directives so that an
/// options table can be deserialized as is.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LexOptions {
    /// Lex the source as a JSON document.
    #[serde(rename = "json")]
    pub json_mode: bool,
    /// Allow strings to continue on the next line after a backslash.
    pub multistr: bool,
    /// The maximum length of a line.
    pub maxlen: Option<usize>,
    /// Warn about trailing whitespace.
    pub trailing: bool,
    /// Allow spaces after tabs, which are used for alignment.
    pub smarttabs: bool,
    /// Allow `javascript:` and similar urls in strings.
    pub scripturl: bool,
    /// Allow the `__proto__` property.
    pub proto: bool,
    /// Allow the `__iterator__` property.
    pub iterator: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid lexer options: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("`maxlen` must be greater than zero")]
    ZeroMaxlen,
}

impl LexOptions {
    /// The options of a JSON document.
    pub fn json() -> Self {
        Self {
            json_mode: true,
            ..Self::default()
        }
    }

    pub fn multistr(mut self, multistr: bool) -> Self {
        self.multistr = multistr;
        self
    }

    pub fn maxlen(mut self, maxlen: usize) -> Self {
        self.maxlen = Some(maxlen);
        self
    }

    /// Read options from a toml table, unknown keys are ignored since the table
    /// usually carries the options of the rule engine as well.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let options = toml::from_str::<LexOptions>(source)?;
        if options.maxlen == Some(0) {
            return Err(ConfigError::ZeroMaxlen);
        }
        Ok(options)
    }
}

//! Environment variable expansion for configuration files.

use std::collections::HashMap;
use std::iter::Peekable;
use std::str::Chars;

use crate::error::{ConnectionError, ConnectionResult};

/// Source for environment variables.
pub trait EnvSource: Send + Sync {
    /// Get an environment variable value.
    fn get(&self, name: &str) -> Option<String>;
}

/// Environment source using `std::env`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdEnvSource;

impl EnvSource for StdEnvSource {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Environment source backed by a HashMap.
#[derive(Debug, Clone, Default)]
pub struct MapEnvSource {
    vars: HashMap<String, String>,
}

impl MapEnvSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvSource for MapEnvSource {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Expands `${VAR}` references.
///
/// Supported syntax:
/// - `${VAR}` - required variable
/// - `${VAR:-default}` - variable with a default when unset or empty
///
/// A `$` not followed by `{` is kept as is, so passwords such as `pa$$` survive.
#[derive(Debug, Clone)]
pub struct EnvExpander<S: EnvSource = StdEnvSource> {
    source: S,
}

impl EnvExpander<StdEnvSource> {
    /// Create an expander using the process environment.
    pub fn new() -> Self {
        Self {
            source: StdEnvSource,
        }
    }
}

impl Default for EnvExpander<StdEnvSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EnvSource> EnvExpander<S> {
    /// Create an expander with a custom environment source.
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Expand every reference in `input`.
    pub fn expand(&self, input: &str) -> ConnectionResult<String> {
        let mut result = String::with_capacity(input.len());
        let mut chars = input.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '$' && chars.peek() == Some(&'{') {
                chars.next();
                result.push_str(&self.expand_braced(&mut chars)?);
            } else {
                result.push(c);
            }
        }

        Ok(result)
    }

    fn expand_braced(&self, chars: &mut Peekable<Chars<'_>>) -> ConnectionResult<String> {
        let mut name = String::new();
        let mut default = None;
        let mut closed = false;

        while let Some(c) = chars.next() {
            match c {
                '}' => {
                    closed = true;
                    break;
                }
                ':' if default.is_none() && chars.peek() == Some(&'-') => {
                    chars.next();
                    default = Some(String::new());
                }
                c => match default.as_mut() {
                    Some(value) => value.push(c),
                    None => name.push(c),
                },
            }
        }

        if !closed {
            return Err(ConnectionError::InvalidEnvValue {
                name,
                message: "Unterminated variable reference".to_string(),
            });
        }

        if name.is_empty() {
            return Err(ConnectionError::InvalidEnvValue {
                name,
                message: "Empty variable name".to_string(),
            });
        }

        match (self.source.get(&name), default) {
            (Some(value), _) if !value.is_empty() => Ok(value),
            (_, Some(default)) => Ok(default),
            (Some(value), None) => Ok(value),
            (None, None) => Err(ConnectionError::EnvNotFound(name)),
        }
    }
}

/// Expand references using the process environment.
pub fn expand_env(input: &str) -> ConnectionResult<String> {
    EnvExpander::new().expand(input)
}

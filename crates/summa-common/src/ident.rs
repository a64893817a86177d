//! Filesystem-safe identifiers for sites and runs.
//!
//! Site names and run labels are embedded in generated file names and in
//! the model's output prefix, so they must never contain path separators
//! or other characters that change where a file lands on disk.

use serde::{Deserialize, Serialize};

use crate::error::{SummaError, SummaResult};

/// Identifier for an observation site (e.g. "CDP" for Col de Porte).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SiteId(String);

/// Label distinguishing one run of a site from another (e.g. "test").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RunLabel(String);

/// Check that an identifier is safe to embed in a file name.
///
/// Allowed: ASCII alphanumerics, '-', '_' and '.'. This is stricter than
/// "no separators, no NUL" but every identifier the model tooling uses
/// fits, and it keeps generated names shell-friendly.
fn validate(value: &str) -> SummaResult<()> {
    if value.is_empty() {
        return Err(SummaError::InvalidIdentifier {
            value: value.to_string(),
            message: "identifier is empty".to_string(),
        });
    }
    if let Some(bad) = value
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        return Err(SummaError::InvalidIdentifier {
            value: value.to_string(),
            message: format!("character {:?} is not allowed", bad),
        });
    }
    Ok(())
}

macro_rules! impl_ident {
    ($name:ident) => {
        impl $name {
            pub fn new(value: impl Into<String>) -> SummaResult<Self> {
                let value = value.into();
                validate(&value)?;
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = SummaError;

            fn try_from(value: String) -> SummaResult<Self> {
                Self::new(value)
            }
        }

        impl std::str::FromStr for $name {
            type Err = SummaError;

            fn from_str(s: &str) -> SummaResult<Self> {
                Self::new(s)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.0
            }
        }
    };
}

impl_ident!(SiteId);
impl_ident!(RunLabel);
